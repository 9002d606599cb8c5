use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::TrackerError;

/// Calendar day in `YYYY-MM-DD` form.
#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);
impl FromStr for ISODateModel {
    type Err = TrackerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            TrackerError::InvalidIsoDate {
                date: s.to_string(),
            }
        })?;
        Ok(ISODateModel(d))
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}

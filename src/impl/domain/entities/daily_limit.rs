use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};

use super::daily_intake::TrackedQuantity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLimit {
    pub limit: f64,
    pub unit: String,
    /// Attribution shown in warnings, e.g. "FDA" or "WHO".
    pub source: String,
}

impl DailyLimit {
    pub fn new(limit: f64, unit: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            limit,
            unit: unit.into(),
            source: source.into(),
        }
    }
}

/// Limit table keyed by tracked quantity. Entries may be absent, in which case
/// that quantity is simply not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyLimits(pub BTreeMap<TrackedQuantity, DailyLimit>);

impl DailyLimits {
    pub fn get(&self, quantity: TrackedQuantity) -> Option<&DailyLimit> {
        self.0.get(&quantity)
    }

    pub fn with(mut self, quantity: TrackedQuantity, limit: DailyLimit) -> Self {
        self.0.insert(quantity, limit);
        self
    }

    pub fn without(mut self, quantity: TrackedQuantity) -> Self {
        self.0.remove(&quantity);
        self
    }
}

impl FromIterator<(TrackedQuantity, DailyLimit)> for DailyLimits {
    fn from_iter<T: IntoIterator<Item = (TrackedQuantity, DailyLimit)>>(iter: T) -> Self {
        DailyLimits(iter.into_iter().collect())
    }
}

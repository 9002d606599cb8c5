use chrono::{Duration, NaiveDate, TimeZone};

use crate::errors::TrackerError;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Half-open interval `[start, start + 24h)` in epoch milliseconds, where
/// `start` is local midnight of `date` in the given time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    date: NaiveDate,
    start_ms: i64,
}

impl DayWindow {
    pub fn new<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<Self, TrackerError> {
        Ok(Self {
            date,
            start_ms: start_of_day(date, tz)?,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> i64 {
        self.start_ms + DAY_MS
    }

    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms < self.end_ms()
    }
}

/// Local midnight as epoch milliseconds. An ambiguous midnight resolves to the
/// earlier instant; a midnight skipped by a DST transition resolves to the
/// first local time of the day that exists.
fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<i64, TrackerError> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    (0..24 * 60)
        .step_by(15)
        .find_map(|minutes| {
            tz.from_local_datetime(&(midnight + Duration::minutes(minutes)))
                .earliest()
        })
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| TrackerError::UnresolvableDayStart {
            date: date.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, LocalResult, NaiveDateTime, NaiveTime, Offset, Utc};

    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn utc_ms(s: &str, hour: u32) -> i64 {
        date(s)
            .and_hms_opt(hour, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    /// Whole-hour offset east of UTC that switches from `before_hours` to
    /// `after_hours` at `transition_utc`.
    #[derive(Debug, Clone, Copy)]
    struct ShiftingZone {
        transition_utc: NaiveDateTime,
        before_hours: i32,
        after_hours: i32,
    }

    #[derive(Debug, Clone, Copy)]
    struct ShiftingOffset {
        zone: ShiftingZone,
        hours: i32,
    }

    impl Offset for ShiftingOffset {
        fn fix(&self) -> FixedOffset {
            FixedOffset::east_opt(self.hours * 3600).unwrap()
        }
    }

    impl ShiftingZone {
        fn new(transition_date: &str, transition_hour: u32, before: i32, after: i32) -> Self {
            Self {
                transition_utc: date(transition_date)
                    .and_hms_opt(transition_hour, 0, 0)
                    .unwrap(),
                before_hours: before,
                after_hours: after,
            }
        }

        fn offset(&self, hours: i32) -> ShiftingOffset {
            ShiftingOffset { zone: *self, hours }
        }
    }

    impl TimeZone for ShiftingZone {
        type Offset = ShiftingOffset;

        fn from_offset(offset: &ShiftingOffset) -> Self {
            offset.zone
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ShiftingOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(
            &self,
            local: &NaiveDateTime,
        ) -> LocalResult<ShiftingOffset> {
            let as_utc = |hours: i32| *local - Duration::hours(hours.into());
            let valid_before = as_utc(self.before_hours) < self.transition_utc;
            let valid_after = as_utc(self.after_hours) >= self.transition_utc;
            match (valid_before, valid_after) {
                (true, true) => LocalResult::Ambiguous(
                    self.offset(self.before_hours),
                    self.offset(self.after_hours),
                ),
                (true, false) => LocalResult::Single(self.offset(self.before_hours)),
                (false, true) => LocalResult::Single(self.offset(self.after_hours)),
                (false, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> ShiftingOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ShiftingOffset {
            if *utc < self.transition_utc {
                self.offset(self.before_hours)
            } else {
                self.offset(self.after_hours)
            }
        }
    }

    #[test]
    fn utc_window_is_half_open() {
        let w = DayWindow::new(date("2024-05-01"), &Utc).unwrap();
        let start = Utc
            .with_ymd_and_hms(2024, 5, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(w.start_ms(), start);
        assert!(w.contains(start));
        assert!(w.contains(start + DAY_MS - 1));
        assert!(!w.contains(start + DAY_MS));
        assert!(!w.contains(start - 1));
    }

    #[test]
    fn window_follows_local_offset() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let w = DayWindow::new(date("2024-05-01"), &tz).unwrap();
        let utc_start = Utc
            .with_ymd_and_hms(2024, 4, 30, 15, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(w.start_ms(), utc_start);
    }

    #[test]
    fn adjacent_days_partition_time() {
        let a = DayWindow::new(date("2024-02-28"), &Utc).unwrap();
        let b = DayWindow::new(date("2024-02-29"), &Utc).unwrap();
        assert_eq!(a.end_ms(), b.start_ms());
        let t = b.start_ms();
        assert!(!a.contains(t) && b.contains(t));
    }

    #[test]
    fn skipped_midnight_starts_at_first_existing_local_time() {
        // 00:00 local jumps straight to 01:00 (UTC-3 to UTC-2 at 03:00 UTC).
        let tz = ShiftingZone::new("2018-11-04", 3, -3, -2);
        assert!(tz
            .from_local_datetime(&date("2018-11-04").and_time(NaiveTime::MIN))
            .single()
            .is_none());

        let day = DayWindow::new(date("2018-11-04"), &tz).unwrap();
        assert_eq!(day.start_ms(), utc_ms("2018-11-04", 3));

        let previous = DayWindow::new(date("2018-11-03"), &tz).unwrap();
        assert_eq!(previous.start_ms(), utc_ms("2018-11-03", 3));
        assert_eq!(previous.end_ms(), day.start_ms());
    }

    #[test]
    fn ambiguous_midnight_takes_the_earlier_instant() {
        // 01:00 local falls back to 00:00 (UTC-2 to UTC-3 at 03:00 UTC), so
        // midnight occurs at both 02:00 and 03:00 UTC.
        let tz = ShiftingZone::new("2019-02-17", 3, -2, -3);
        let day = DayWindow::new(date("2019-02-17"), &tz).unwrap();
        assert_eq!(day.start_ms(), utc_ms("2019-02-17", 2));
        assert!(day.contains(utc_ms("2019-02-17", 2)));
        assert!(!day.contains(utc_ms("2019-02-17", 2) - 1));
    }
}

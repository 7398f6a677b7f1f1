//! Whole-day offsets between the epoch anchor and host time values.
//!
//! Instants are reduced to civil UTC days before any calendar arithmetic, so a
//! day count is always floored: 25 June 1960 23:59 UTC is day -1, not day 0.
//! Dates are counted as day numbers rather than by subtracting durations, which
//! keeps the supported range equal to the range of the input type itself.
//!
//! ## Supported range
//!
//! Every `i64` day count converts. With `chrono`, dates cover years
//! -262143..=262142; `SystemTime` covers whatever the platform represents.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::cycle::{ANCHOR_UNIX_DAYS, SECONDS_PER_DAY};

/// A time value that can be measured in whole days from 1 Muharram 1380
/// (26 June 1960 00:00 UTC).
pub trait DaysSinceEpoch {
    /// Whole days elapsed since the anchor, negative before it.
    fn days_since_epoch(&self) -> i64;
}

/// A raw day count, already relative to the anchor.
impl DaysSinceEpoch for i64 {
    fn days_since_epoch(&self) -> i64 {
        *self
    }
}

impl DaysSinceEpoch for SystemTime {
    fn days_since_epoch(&self) -> i64 {
        unix_days(self) - ANCHOR_UNIX_DAYS
    }
}

/// Floor of the days between the Unix epoch and `t`.
fn unix_days(t: &SystemTime) -> i64 {
    let day = SECONDS_PER_DAY as u64;
    match t.duration_since(UNIX_EPOCH) {
        Ok(after) => (after.as_secs() / day) as i64,
        Err(err) => {
            let before = err.duration();
            let whole = (before.as_secs() / day) as i64;
            if before.as_secs() % day == 0 && before.subsec_nanos() == 0 {
                -whole
            } else {
                -whole - 1
            }
        }
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone};

    use super::DaysSinceEpoch;
    use crate::cycle::ANCHOR_DAYS_FROM_CE;

    impl DaysSinceEpoch for NaiveDate {
        fn days_since_epoch(&self) -> i64 {
            i64::from(self.num_days_from_ce()) - ANCHOR_DAYS_FROM_CE
        }
    }

    /// Naive date-times are read as UTC.
    impl DaysSinceEpoch for NaiveDateTime {
        fn days_since_epoch(&self) -> i64 {
            self.date().days_since_epoch()
        }
    }

    impl<Tz: TimeZone> DaysSinceEpoch for DateTime<Tz> {
        fn days_since_epoch(&self) -> i64 {
            self.naive_utc().date().days_since_epoch()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::cycle::ANCHOR_UNIX_SECONDS;

    fn at(unix_seconds: i64) -> SystemTime {
        if unix_seconds >= 0 {
            UNIX_EPOCH + Duration::from_secs(unix_seconds as u64)
        } else {
            UNIX_EPOCH - Duration::from_secs(unix_seconds.unsigned_abs())
        }
    }

    #[test]
    fn test_system_time_anchor() {
        assert_eq!(at(ANCHOR_UNIX_SECONDS).days_since_epoch(), 0);
        assert_eq!(at(ANCHOR_UNIX_SECONDS + 86_399).days_since_epoch(), 0);
        assert_eq!(at(ANCHOR_UNIX_SECONDS + 86_400).days_since_epoch(), 1);
    }

    #[test]
    fn test_system_time_floors_before_anchor() {
        assert_eq!(at(ANCHOR_UNIX_SECONDS - 1).days_since_epoch(), -1);
        assert_eq!(at(ANCHOR_UNIX_SECONDS - 86_400).days_since_epoch(), -1);
        assert_eq!(at(ANCHOR_UNIX_SECONDS - 86_401).days_since_epoch(), -2);
    }

    #[test]
    fn test_system_time_sub_second_before_unix_epoch() {
        let t = UNIX_EPOCH - Duration::from_millis(1);
        assert_eq!(unix_days(&t), -1);
        assert_eq!(unix_days(&UNIX_EPOCH), 0);
    }

    #[test]
    fn test_unix_epoch_offset() {
        assert_eq!(UNIX_EPOCH.days_since_epoch(), 3476);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_types_agree() {
        use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

        let anchor = NaiveDate::from_ymd_opt(1960, 6, 26).unwrap();
        assert_eq!(anchor.days_since_epoch(), 0);
        assert_eq!(anchor.and_hms_opt(23, 59, 59).unwrap().days_since_epoch(), 0);
        assert_eq!(Utc.with_ymd_and_hms(1960, 6, 25, 12, 0, 0).unwrap().days_since_epoch(), -1);

        // 26 June 1960 01:00 at UTC+03:00 is still 25 June in UTC
        let riyadh = FixedOffset::east_opt(3 * 3600).unwrap();
        let local = riyadh.with_ymd_and_hms(1960, 6, 26, 1, 0, 0).unwrap();
        assert_eq!(local.days_since_epoch(), -1);
    }
}

//! The 30-year cycle of the tabular Hijri calendar
//!
//! Every 30 years the calendar repeats the same sequence of year lengths:
//! 19 common years of 354 days and 11 leap years of 355 days, for 10631 days
//! per cycle. Within a year, odd months have 30 days and even months 29; a leap
//! year adds its extra day to DhuAlHijjah.
//!
//! The cycle is anchored at 1 Muharram 1380, which fell on 26 June 1960, the
//! cycle start closest to the Unix epoch.

use crate::month::Month;

/// Hijri year of the epoch anchor (the first year of a cycle).
pub const ANCHOR_YEAR: i64 = 1380;

/// The anchor instant, 26 June 1960 00:00 UTC, in seconds since the Unix epoch.
pub const ANCHOR_UNIX_SECONDS: i64 = -300_326_400;

/// The anchor date as a count of days since the Unix epoch.
pub const ANCHOR_UNIX_DAYS: i64 = ANCHOR_UNIX_SECONDS / SECONDS_PER_DAY;

/// The anchor date as a proleptic Gregorian day number (0001-01-01 is day 1).
pub const ANCHOR_DAYS_FROM_CE: i64 = 715_687;

pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

pub const DAYS_PER_30_YEARS: i64 = 11 * 355 + 19 * 354;
pub const DAYS_PER_2_MONTHS: i64 = 30 + 29;
pub const DAYS_PER_ODD_MONTH: i64 = 30;
pub const DAYS_PER_EVEN_MONTH: i64 = 29;

/// Length in days of each year of the cycle, starting from the anchor year.
pub const DAYS_PER_YEAR: [u16; 30] = [
    354, 355, 354, 354, 355, 354, 355, 354, 354, 355, //
    354, 354, 355, 354, 354, 355, 354, 355, 354, 354, //
    355, 354, 354, 355, 354, 355, 354, 354, 355, 354, //
];

/// Position of `year` within its 30-year cycle (0 for the anchor year).
pub fn cycle_index(year: i64) -> usize {
    // rem_euclid keeps years before the anchor in 0..30
    (year - ANCHOR_YEAR).rem_euclid(30) as usize
}

/// Number of days in the given Hijri year (354 or 355).
pub fn year_length(year: i64) -> u16 {
    DAYS_PER_YEAR[cycle_index(year)]
}

/// Returns true if the given Hijri year has 355 days.
pub fn is_leap_year(year: i64) -> bool {
    year_length(year) == 355
}

/// Number of days in `month` of the given Hijri year.
pub fn days_in_month(year: i64, month: Month) -> u8 {
    if month.is_odd() || (month == Month::DhuAlHijjah && is_leap_year(year)) {
        DAYS_PER_ODD_MONTH as u8
    } else {
        DAYS_PER_EVEN_MONTH as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sums_to_cycle_length() {
        let total: i64 = DAYS_PER_YEAR.iter().map(|&d| d as i64).sum();
        assert_eq!(total, DAYS_PER_30_YEARS);
        assert_eq!(DAYS_PER_30_YEARS, 10631);
    }

    #[test]
    fn test_table_has_eleven_leap_years() {
        assert_eq!(DAYS_PER_YEAR.iter().filter(|&&d| d == 355).count(), 11);
        assert!(DAYS_PER_YEAR.iter().all(|&d| d == 354 || d == 355));
    }

    #[test]
    fn test_anchor_constants_agree() {
        assert_eq!(ANCHOR_UNIX_DAYS, -3476);
        assert_eq!(ANCHOR_UNIX_SECONDS % SECONDS_PER_DAY, 0);
        // 1970-01-01 is day 719163 counted from 0001-01-01 = 1
        assert_eq!(ANCHOR_DAYS_FROM_CE - ANCHOR_UNIX_DAYS, 719_163);
    }

    #[test]
    fn test_cycle_index_before_anchor() {
        assert_eq!(cycle_index(1380), 0);
        assert_eq!(cycle_index(1379), 29);
        assert_eq!(cycle_index(1350), 0);
        assert_eq!(cycle_index(1411), 1);
        assert_eq!(cycle_index(-1), cycle_index(29));
    }

    #[test]
    fn test_year_lengths() {
        assert_eq!(year_length(1380), 354);
        assert_eq!(year_length(1381), 355);
        assert_eq!(year_length(1379), 354);
        assert!(is_leap_year(1381));
        assert!(is_leap_year(1381 + 30));
        assert!(!is_leap_year(1380));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1380, Month::Muharram), 30);
        assert_eq!(days_in_month(1380, Month::Safar), 29);
        assert_eq!(days_in_month(1380, Month::DhuAlHijjah), 29);
        assert_eq!(days_in_month(1381, Month::DhuAlHijjah), 30);
        assert_eq!(days_in_month(1381, Month::DhuAlQidah), 30);
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in 1380..1410 {
            let total: u16 = Month::ALL
                .iter()
                .map(|&m| days_in_month(year, m) as u16)
                .sum();
            assert_eq!(total, year_length(year), "year {}", year);
        }
    }
}

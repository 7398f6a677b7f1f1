//! Hijri (Islamic) calendar conversion
//!
//! This module converts day counts and instants into dates of the tabular
//! Hijri calendar, using the fixed 30-year cycle in [`crate::cycle`].
//!
//! ## Algorithm
//!
//! The whole-day offset from the anchor (1 Muharram 1380) is split into:
//! 1. complete 30-year cycles, using floor division so offsets before the
//!    anchor land in the previous cycle;
//! 2. complete years, by walking the cycle table;
//! 3. complete 59-day month pairs (a 30-day odd month followed by a 29-day
//!    even month), with the final pair of a leap year holding 60 days;
//! 4. the month within the pair and the day within the month.
//!
//! All arithmetic is on `i64`, so every day count converts without overflow.

use tracing::{debug, trace};

use crate::cycle::{
    self, ANCHOR_YEAR, DAYS_PER_2_MONTHS, DAYS_PER_30_YEARS, DAYS_PER_ODD_MONTH, DAYS_PER_YEAR,
};
use crate::error::HijriError;
use crate::instant::DaysSinceEpoch;
use crate::month::Month;

/// Index of the last month pair (DhuAlQidah, DhuAlHijjah).
const LAST_MONTH_PAIR: i64 = 5;

/// A date in the tabular Hijri calendar.
///
/// Dates order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year: i64,
    month: Month,
    day: u8,
}

/// Returns the Hijri date for the instant `t`.
///
/// The instant is reduced to whole days since 26 June 1960 00:00 UTC
/// (floored, so any moment of a civil UTC day maps to that day), which are
/// then decomposed by [`HijriDate::from_days_since_epoch`].
pub fn hijri_date<T: DaysSinceEpoch + ?Sized>(t: &T) -> HijriDate {
    HijriDate::from_days_since_epoch(t.days_since_epoch())
}

impl HijriDate {
    /// Creates a Hijri date from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`HijriError::InvalidDay`] if `day` is 0 or exceeds the length
    /// of `month` in `year`.
    pub fn new(year: i64, month: Month, day: u8) -> Result<Self, HijriError> {
        let max_day = cycle::days_in_month(year, month);
        if day == 0 || day > max_day {
            debug!(year, month = month.number(), day, max_day, "rejected Hijri date");
            return Err(HijriError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the Hijri date `days` whole days after 1 Muharram 1380.
    ///
    /// Negative values count backwards from the anchor; `-1` is the last day
    /// of 1379.
    pub fn from_days_since_epoch(days: i64) -> Self {
        let cycles = days.div_euclid(DAYS_PER_30_YEARS);
        let mut offset = days.rem_euclid(DAYS_PER_30_YEARS);
        let mut year = ANCHOR_YEAR + 30 * cycles;

        // offset < DAYS_PER_30_YEARS, so this always stops inside the table
        for &length in DAYS_PER_YEAR.iter() {
            let length = i64::from(length);
            if offset < length {
                break;
            }
            offset -= length;
            year += 1;
        }

        let pair = (offset / DAYS_PER_2_MONTHS).min(LAST_MONTH_PAIR);
        let mut month_index = 2 * pair;
        offset -= DAYS_PER_2_MONTHS * pair;
        if offset >= DAYS_PER_ODD_MONTH {
            month_index += 1;
            offset -= DAYS_PER_ODD_MONTH;
        }

        let month = Month::from_index0(month_index as usize);
        let day = (offset + 1) as u8;
        trace!(days, year, month = month.number(), day, "converted day offset");

        Self { year, month, day }
    }

    /// Returns the year (AH).
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Returns the day within the month (1-30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns true if this date's year has 355 days.
    pub fn is_leap_year(&self) -> bool {
        cycle::is_leap_year(self.year)
    }

    /// Returns the day of the year (1-355).
    pub fn day_of_year(&self) -> u16 {
        let index = self.month.index0() as u16;
        let mut doy = (index / 2) * DAYS_PER_2_MONTHS as u16;
        if index % 2 == 1 {
            doy += DAYS_PER_ODD_MONTH as u16;
        }
        doy + self.day as u16
    }

    /// Returns the following day.
    pub fn succ(&self) -> Self {
        if self.day < cycle::days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..*self
            }
        } else if self.month == Month::DhuAlHijjah {
            Self {
                year: self.year + 1,
                month: Month::Muharram,
                day: 1,
            }
        } else {
            Self {
                month: self.month.succ(),
                day: 1,
                ..*self
            }
        }
    }

    /// Returns the preceding day.
    pub fn pred(&self) -> Self {
        if self.day > 1 {
            Self {
                day: self.day - 1,
                ..*self
            }
        } else if self.month == Month::Muharram {
            let year = self.year - 1;
            Self {
                year,
                month: Month::DhuAlHijjah,
                day: cycle::days_in_month(year, Month::DhuAlHijjah),
            }
        } else {
            let month = self.month.pred();
            Self {
                month,
                day: cycle::days_in_month(self.year, month),
                ..*self
            }
        }
    }
}

impl From<HijriDate> for (i64, Month, u8) {
    fn from(date: HijriDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl From<std::time::SystemTime> for HijriDate {
    fn from(t: std::time::SystemTime) -> Self {
        hijri_date(&t)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for HijriDate {
    fn from(d: chrono::NaiveDate) -> Self {
        hijri_date(&d)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for HijriDate {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        hijri_date(&dt)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for HijriDate {
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        hijri_date(&dt)
    }
}

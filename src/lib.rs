//! tabular-hijri - arithmetic Hijri calendar conversion
//!
//! This crate converts instants into dates of the tabular Hijri calendar: a
//! deterministic lunar calendar that repeats a fixed 30-year cycle of 354- and
//! 355-day years. No astronomical data or lookup service is involved.
//!
//! ```
//! use tabular_hijri::{hijri_date, HijriDate, Month};
//!
//! let date = HijriDate::from_days_since_epoch(0);
//! assert_eq!((date.year(), date.month(), date.day()), (1380, Month::Muharram, 1));
//!
//! let same = hijri_date(&std::time::UNIX_EPOCH);
//! assert_eq!(same.year(), 1389);
//! ```

pub mod cycle;
pub mod error;
pub mod instant;
pub mod month;

mod hijri;

pub use error::HijriError;
pub use hijri::{hijri_date, HijriDate};
pub use instant::DaysSinceEpoch;
pub use month::Month;

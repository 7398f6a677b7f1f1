//! Error types for validating Hijri date components.

use thiserror::Error;

use crate::month::Month;

/// Errors that can occur when constructing Hijri date values from raw parts.
///
/// Converting an instant never fails; these only arise when a caller builds a
/// [`Month`](crate::Month) or [`HijriDate`](crate::HijriDate) by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HijriError {
    #[error("invalid month: {value} (must be 1..=12)")]
    InvalidMonth { value: u8 },

    #[error("invalid day: {day} for month {} of year {year} (max {max_day})", .month.number())]
    InvalidDay {
        year: i64,
        month: Month,
        day: u8,
        max_day: u8,
    },
}

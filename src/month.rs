//! The twelve months of the Hijri year.

use crate::error::HijriError;

/// A Hijri month of the year (Muharram = 1, ..., DhuAlHijjah = 12).
///
/// Odd months are 30 days long and even months 29, except that DhuAlHijjah
/// has 30 days in a 355-day year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    Muharram = 1,
    Safar = 2,
    RabiAlawwal = 3,
    RabiAlthani = 4,
    JumadaAlawwal = 5,
    JumadaAlthani = 6,
    Rajab = 7,
    Shaaban = 8,
    Ramadan = 9,
    Shawwal = 10,
    DhuAlQidah = 11,
    DhuAlHijjah = 12,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Muharram,
        Month::Safar,
        Month::RabiAlawwal,
        Month::RabiAlthani,
        Month::JumadaAlawwal,
        Month::JumadaAlthani,
        Month::Rajab,
        Month::Shaaban,
        Month::Ramadan,
        Month::Shawwal,
        Month::DhuAlQidah,
        Month::DhuAlHijjah,
    ];

    /// Returns the month number (1-12).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based month index (0-11).
    pub const fn index0(self) -> usize {
        self as usize - 1
    }

    /// Returns the month for a zero-based index, wrapping modulo 12.
    pub(crate) const fn from_index0(index: usize) -> Month {
        Month::ALL[index % 12]
    }

    /// Returns true for the 30-day odd months (Muharram, RabiAlawwal, ...).
    pub const fn is_odd(self) -> bool {
        self.number() % 2 == 1
    }

    /// The following month; DhuAlHijjah wraps to Muharram.
    pub const fn succ(self) -> Month {
        Month::from_index0(self.index0() + 1)
    }

    /// The preceding month; Muharram wraps to DhuAlHijjah.
    pub const fn pred(self) -> Month {
        Month::from_index0(self.index0() + 11)
    }
}

impl TryFrom<u8> for Month {
    type Error = HijriError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=12 => Ok(Month::from_index0(value as usize - 1)),
            _ => Err(HijriError::InvalidMonth { value }),
        }
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

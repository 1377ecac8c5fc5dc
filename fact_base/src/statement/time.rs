//! Calendar dates for point-in-time qualifiers.

use serde::{Deserialize, Serialize};

/// An explicit calendar date with possibly-unknown month and day.
///
/// Ordering is chronological over (year, month, day), so ranking by date
/// never depends on how the source literal was padded. An unknown month or
/// day is stored as 0 and sorts before any known month or day of the same
/// year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct PointInTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl PointInTime {
    /// Create a date with known year, month, and day.
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Create a date with only the year known.
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: 0,
            day: 0,
        }
    }

    /// Parse a time literal.
    ///
    /// Accepts Wikidata-style literals (`+2020-03-15T00:00:00Z`), bare ISO
    /// dates (`2020-03-15`), year-month forms, and bare years. A leading
    /// `-` marks a BCE year. Returns `None` for anything else.
    pub fn parse(literal: &str) -> Option<Self> {
        let text = literal.trim();
        let text = text.strip_prefix('+').unwrap_or(text);
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let date = text.split('T').next()?;
        let mut parts = date.split('-');

        let year: i32 = parts.next()?.parse().ok()?;
        let month: u8 = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        let day: u8 = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() || month > 12 || day > 31 {
            return None;
        }

        Some(Self {
            year: if negative { -year } else { year },
            month,
            day,
        })
    }
}

impl std::fmt::Display for PointInTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.month, self.day) {
            (0, _) => write!(f, "{}", self.year),
            (month, 0) => write!(f, "{}-{:02}", self.year, month),
            (month, day) => write!(f, "{}-{:02}-{:02}", self.year, month, day),
        }
    }
}

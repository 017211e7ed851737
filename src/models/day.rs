//! Day-of-week model.
//!
//! Days are indexed the way most record sources export them:
//! Sunday = 0, Monday = 1, ..., Saturday = 6. Any other index is kept
//! as [`Day::Invalid`] so that it can be surfaced instead of being
//! folded into a real day.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week, or an out-of-range index carried through unchanged.
///
/// Ordering follows the day index (Sunday first); invalid indices sort
/// after every valid day, by their raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    /// Index outside `0..=6`.
    Invalid(i32),
}

impl Day {
    /// All valid days in index order.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Maps a raw index to a day. Never fails.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Day::Sunday,
            1 => Day::Monday,
            2 => Day::Tuesday,
            3 => Day::Wednesday,
            4 => Day::Thursday,
            5 => Day::Friday,
            6 => Day::Saturday,
            other => Day::Invalid(other),
        }
    }

    /// Raw index (the original value for invalid days).
    pub fn index(self) -> i32 {
        match self {
            Day::Sunday => 0,
            Day::Monday => 1,
            Day::Tuesday => 2,
            Day::Wednesday => 3,
            Day::Thursday => 4,
            Day::Friday => 5,
            Day::Saturday => 6,
            Day::Invalid(i) => i,
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        !matches!(self, Day::Invalid(_))
    }

    /// English day name, or `None` for invalid days.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Day::Sunday => Some("Sunday"),
            Day::Monday => Some("Monday"),
            Day::Tuesday => Some("Tuesday"),
            Day::Wednesday => Some("Wednesday"),
            Day::Thursday => Some("Thursday"),
            Day::Friday => Some("Friday"),
            Day::Saturday => Some("Saturday"),
            Day::Invalid(_) => None,
        }
    }
}

impl From<i32> for Day {
    fn from(index: i32) -> Self {
        Day::from_index(index)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "invalid day {}", self.index()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip_valid_days() {
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(Day::from_index(i as i32), *day);
            assert_eq!(day.index(), i as i32);
            assert!(day.is_valid());
        }
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let d = Day::from_index(9);
        assert_eq!(d, Day::Invalid(9));
        assert!(!d.is_valid());
        assert_eq!(d.index(), 9);
        assert_eq!(Day::from(-1), Day::Invalid(-1));
    }

    #[test]
    fn test_ordering_invalid_last() {
        let mut days = vec![Day::Invalid(-3), Day::Saturday, Day::Sunday, Day::Invalid(7)];
        days.sort();
        assert_eq!(
            days,
            vec![Day::Sunday, Day::Saturday, Day::Invalid(-3), Day::Invalid(7)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Day::Saturday.to_string(), "Saturday");
        assert_eq!(Day::Invalid(12).to_string(), "invalid day 12");
    }
}

//! ID types for Roster entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// User identifier
///
/// Ids are assigned sequentially by the store, so ordering by id is
/// ordering by creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new user ID
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Parse the integer that `input` starts with, ignoring anything after it
    ///
    /// Leading whitespace and a sign are accepted, and a `0x` prefix switches
    /// to hexadecimal, so `"12abc"` and `"1.5"` read as 12 and 1. Returns
    /// `None` when no digits lead the input or the value does not fit.
    pub fn parse_leading(input: &str) -> Option<Self> {
        let trimmed = input.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (radix, digits) = match unsigned.get(..2) {
            Some("0x" | "0X") => (16, &unsigned[2..]),
            _ => (10, unsigned),
        };

        let end = digits
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(digits.len());
        if end == 0 {
            return None;
        }

        let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
        Some(Self(if negative { -magnitude } else { magnitude }))
    }

    /// The id following this one, if any
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_integers() {
        assert_eq!("7".parse::<UserId>().unwrap(), UserId::new(7));
        assert_eq!("-3".parse::<UserId>().unwrap(), UserId::new(-3));
    }

    #[test]
    fn user_id_rejects_garbage() {
        assert!("abc".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
        assert!(" 1".parse::<UserId>().is_err());
        assert!("1.5".parse::<UserId>().is_err());
    }

    #[test]
    fn parse_leading_reads_integer_prefix() {
        assert_eq!(UserId::parse_leading("1abc"), Some(UserId::new(1)));
        assert_eq!(UserId::parse_leading("1.5"), Some(UserId::new(1)));
        assert_eq!(UserId::parse_leading("007"), Some(UserId::new(7)));
        assert_eq!(UserId::parse_leading("  42 "), Some(UserId::new(42)));
        assert_eq!(UserId::parse_leading("+3"), Some(UserId::new(3)));
        assert_eq!(UserId::parse_leading("-2x"), Some(UserId::new(-2)));
        assert_eq!(UserId::parse_leading("0x1f"), Some(UserId::new(31)));
    }

    #[test]
    fn parse_leading_rejects_missing_digits() {
        assert_eq!(UserId::parse_leading("abc"), None);
        assert_eq!(UserId::parse_leading(""), None);
        assert_eq!(UserId::parse_leading("-"), None);
        assert_eq!(UserId::parse_leading(".5"), None);
        assert_eq!(UserId::parse_leading("0x"), None);
        assert_eq!(UserId::parse_leading("99999999999999999999"), None);
    }

    #[test]
    fn user_id_display() {
        assert_eq!(format!("{}", UserId::new(999)), "999");
    }

    #[test]
    fn user_id_next_stops_at_max() {
        assert_eq!(UserId::new(3).next(), Some(UserId::new(4)));
        assert_eq!(UserId::new(i64::MAX).next(), None);
    }

    #[test]
    fn user_id_serializes_as_number() {
        let json = serde_json::to_string(&UserId::new(12)).unwrap();
        assert_eq!(json, "12");
    }
}

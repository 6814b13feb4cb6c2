//! Compass directions and hash-length parity.

use std::fmt;
use std::str::FromStr;

use crate::error::GeohashError;

/// Directions on a WGS84 projection: top = north, bottom = south,
/// left = west, right = east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction, e.g. `Left.opposite() == Right`.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row of this direction in the neighbour and border tables.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GeohashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeohashError::InvalidDirection(s.to_string()))
    }
}

/// Parity of a hash length. Selects which neighbour/border table row
/// applies to the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Even hash length.
    Even,
    /// Odd hash length.
    Odd,
}

impl Parity {
    /// Parity of a hash of `length` characters.
    #[inline]
    pub const fn of_length(length: usize) -> Parity {
        if length % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Top.opposite(), Direction::Bottom);
        assert_eq!(Direction::Bottom.opposite(), Direction::Top);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn test_parse_and_display() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>().unwrap(), d);
        }
        assert_eq!("TOP".parse::<Direction>().unwrap(), Direction::Top);
        assert_eq!("Right".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!(
            "north".parse::<Direction>(),
            Err(GeohashError::InvalidDirection("north".to_string()))
        );
    }

    #[test]
    fn test_as_str_is_lowercase_and_parses_back() {
        let names: Vec<&str> = Direction::ALL.into_iter().map(Direction::as_str).collect();
        assert_eq!(names, ["top", "bottom", "left", "right"]);
        for d in Direction::ALL {
            assert_eq!(d.as_str().parse::<Direction>().unwrap(), d);
        }
    }

    #[test]
    fn test_parity_of_length() {
        assert_eq!(Parity::of_length(0), Parity::Even);
        assert_eq!(Parity::of_length(1), Parity::Odd);
        assert_eq!(Parity::of_length(4), Parity::Even);
        assert_eq!(Parity::of_length(11), Parity::Odd);
    }
}

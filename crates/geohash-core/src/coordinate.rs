//! WGS84 coordinate value type.

use std::fmt;
use std::ops::Add;

use crate::error::GeohashError;

/// Valid latitude range in degrees.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// A latitude/longitude pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude, -90 (south pole) to 90 (north pole)
    pub latitude: f64,
    /// Longitude; values outside (-180, 180] are normalized when encoded
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns a new coordinate shifted by the given deltas.
    #[inline]
    pub fn offset(&self, delta_latitude: f64, delta_longitude: f64) -> Self {
        Self::new(
            self.latitude + delta_latitude,
            self.longitude + delta_longitude,
        )
    }

    /// Encodes this coordinate as a text geohash of the given length.
    pub fn to_geohash(&self, length: usize) -> Result<String, GeohashError> {
        crate::encode_coordinate(*self, length)
    }

    /// Returns true if this coordinate lies inside the cell of `geohash`.
    pub fn within(&self, geohash: &str) -> Result<bool, GeohashError> {
        crate::contains(geohash, *self)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(
            self.latitude + other.latitude,
            self.longitude + other.longitude,
        )
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Converts an angle in degrees to the range `-180 < x <= 180`.
///
/// Negative angles are mirrored, so an input of exactly `-180` is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use geohash_core::to_180;
/// assert_eq!(to_180(190.0), -170.0);
/// assert_eq!(to_180(-190.0), 170.0);
/// assert_eq!(to_180(180.0), 180.0);
/// ```
pub fn to_180(degrees: f64) -> f64 {
    if degrees < 0.0 {
        -to_180(-degrees)
    } else if degrees > 180.0 {
        (degrees + 180.0).rem_euclid(360.0) - 180.0
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_180_huge_angles_stay_in_range() {
        for degrees in [1e18, -1e18, 1e300, -1e300, f64::MAX, f64::MIN] {
            let normalized = to_180(degrees);
            assert!((-180.0..=180.0).contains(&normalized), "{degrees} -> {normalized}");
        }
        assert_eq!(to_180(540.0), -180.0);
        assert_eq!(to_180(-540.0), 180.0);
    }

    #[test]
    fn test_offset() {
        let c = Coordinate::new(10.0, 20.0).offset(1.5, -2.5);
        assert_eq!(c, Coordinate::new(11.5, 17.5));
    }

    #[test]
    fn test_add_operator() {
        let c = Coordinate::new(10.0, 20.0) + Coordinate::new(-5.0, 5.0);
        assert_eq!(c, Coordinate::new(5.0, 25.0));
    }

    #[test]
    fn test_from_tuple() {
        let c: Coordinate = (1.0, 2.0).into();
        assert_eq!(c.latitude, 1.0);
        assert_eq!(c.longitude, 2.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinate::new(1.5, -2.25).to_string(), "(1.5, -2.25)");
    }

    #[test]
    fn test_to_180_in_range_unchanged() {
        for d in [0.0, 45.0, 179.9, 180.0, -45.0, -179.9, -180.0] {
            assert_eq!(to_180(d), d);
        }
    }

    #[test]
    fn test_to_180_wraps() {
        assert_eq!(to_180(181.0), -179.0);
        assert_eq!(to_180(360.0), 0.0);
        assert_eq!(to_180(202.5), -157.5);
        assert_eq!(to_180(-202.5), 157.5);
        assert_eq!(to_180(720.0 + 10.0), 10.0);
    }

    #[test]
    fn test_to_geohash_and_within() {
        let c = Coordinate::new(38.89710201881826, -77.03669792041183);
        let hash = c.to_geohash(12).unwrap();
        assert_eq!(hash, "dqcjqcp84c6e");
        assert!(c.within(&hash).unwrap());
        assert!(!c.within("u").unwrap());
    }
}

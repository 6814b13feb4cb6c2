//! Geohash encoding: convert a WGS84 point into an interleaved bit code.
//!
//! The encoder bisects the longitude interval `[-180, 180]` and the latitude
//! interval `[-90, 90]` alternately, longitude first, emitting one bit per
//! bisection. Bits are packed most-significant-first into a 64-bit word whose
//! low 4 bits record the character length.

use crate::accuracy::Accuracy;
use crate::base32;
use crate::coordinate::{to_180, Coordinate, MAX_LAT, MIN_LAT};
use crate::error::GeohashError;
use crate::MAX_HASH_LENGTH;

/// Interleave `5 * length` bits of `latitude`/`longitude` without validation.
///
/// `length` must be in `1..=12`; callers normalize longitude beforehand.
pub(crate) fn interleave(latitude: f64, longitude: f64, length: usize) -> i64 {
    let mut is_lon = true;
    let (mut min_lat, mut max_lat) = (MIN_LAT, MAX_LAT);
    let (mut min_lon, mut max_lon) = (-180.0f64, 180.0f64);
    let mut code: u64 = 0;

    for i in 0..5 * length {
        let bit = 1u64 << (63 - i);
        if is_lon {
            let mid = (min_lon + max_lon) / 2.0;
            if longitude >= mid {
                code |= bit;
                min_lon = mid;
            } else {
                max_lon = mid;
            }
        } else {
            let mid = (min_lat + max_lat) / 2.0;
            if latitude >= mid {
                code |= bit;
                min_lat = mid;
            } else {
                max_lat = mid;
            }
        }
        is_lon = !is_lon;
    }

    (code | length as u64) as i64
}

fn validate(latitude: f64, longitude: f64, length: usize) -> Result<(), GeohashError> {
    if !(1..=MAX_HASH_LENGTH).contains(&length) {
        return Err(GeohashError::InvalidLength { length });
    }
    if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
        return Err(GeohashError::LatitudeOutOfRange(latitude));
    }
    if !longitude.is_finite() {
        return Err(GeohashError::LongitudeNotFinite(longitude));
    }
    Ok(())
}

/// Encode a point into an integer geohash.
///
/// Longitude is normalized to (-180, 180] first.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidLength`] if `length` is outside `1..=12`,
/// [`GeohashError::LatitudeOutOfRange`] if `latitude` is outside `-90..=90`
/// and [`GeohashError::LongitudeNotFinite`] if `longitude` is infinite or NaN.
///
/// # Examples
///
/// ```
/// use geohash_core::encode_to_long;
/// assert_eq!(encode_to_long(41.842967, -72.727175, 2).unwrap(), 0x65c0000000000002);
/// ```
pub fn encode_to_long(latitude: f64, longitude: f64, length: usize) -> Result<i64, GeohashError> {
    validate(latitude, longitude, length)?;
    Ok(interleave(latitude, to_180(longitude), length))
}

/// Encode a point into a text geohash of the given length.
///
/// # Arguments
///
/// * `latitude` - Latitude in decimal degrees (-90 to 90).
/// * `longitude` - Longitude in decimal degrees; any value, normalized to (-180, 180].
/// * `length` - Number of characters (1..=12).
///
/// # Errors
///
/// Returns an error if the latitude or the length is out of range.
///
/// # Examples
///
/// ```
/// use geohash_core::encode;
/// let hash = encode(38.89710201881826, -77.03669792041183, 12).unwrap();
/// assert_eq!(hash, "dqcjqcp84c6e");
/// ```
pub fn encode(latitude: f64, longitude: f64, length: usize) -> Result<String, GeohashError> {
    base32::long_to_string(encode_to_long(latitude, longitude, length)?)
}

/// Encode a [`Coordinate`] into a text geohash of the given length.
pub fn encode_coordinate(coordinate: Coordinate, length: usize) -> Result<String, GeohashError> {
    encode(coordinate.latitude, coordinate.longitude, length)
}

/// Encode a [`Coordinate`] at the length named by an [`Accuracy`] level.
pub fn encode_with_accuracy(
    coordinate: Coordinate,
    accuracy: Accuracy,
) -> Result<String, GeohashError> {
    encode_coordinate(coordinate, accuracy.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_to_long_known() {
        assert_eq!(
            encode_to_long(41.842967, -72.727175, 2).unwrap(),
            0x65c0000000000002
        );
    }

    #[test]
    fn test_encode_white_house() {
        assert_eq!(
            encode(38.89710201881826, -77.03669792041183, 12).unwrap(),
            "dqcjqcp84c6e"
        );
    }

    #[test]
    fn test_encode_another() {
        assert_eq!(encode(20.0, 31.0, 12).unwrap(), "sew1c2vs2q5r");
    }

    #[test]
    fn test_encode_geohash_dot_org() {
        assert_eq!(encode(-25.382708, -49.265506, 12).unwrap(), "6gkzwgjzn820");
        assert_eq!(encode(-25.382708, -49.265506, 6).unwrap(), "6gkzwg");
    }

    #[test]
    fn test_encode_length_validation() {
        for length in [0, 13, 20] {
            assert_eq!(
                encode(-25.382708, -49.265506, length),
                Err(GeohashError::InvalidLength { length })
            );
        }
    }

    #[test]
    fn test_encode_latitude_validation() {
        assert_eq!(
            encode(1000.0, 100.0, 4),
            Err(GeohashError::LatitudeOutOfRange(1000.0))
        );
        assert_eq!(
            encode(-1000.0, 100.0, 4),
            Err(GeohashError::LatitudeOutOfRange(-1000.0))
        );
        assert!(encode(f64::NAN, 0.0, 4).is_err());
    }

    #[test]
    fn test_encode_rejects_non_finite_longitude() {
        assert_eq!(
            encode(10.0, f64::INFINITY, 4),
            Err(GeohashError::LongitudeNotFinite(f64::INFINITY))
        );
        assert_eq!(
            encode_to_long(10.0, f64::NEG_INFINITY, 4),
            Err(GeohashError::LongitudeNotFinite(f64::NEG_INFINITY))
        );
        assert!(matches!(
            encode(10.0, f64::NAN, 4),
            Err(GeohashError::LongitudeNotFinite(_))
        ));
    }

    #[test]
    fn test_encode_huge_longitude_is_normalized() {
        assert!(encode(10.0, 1e18, 12).is_ok());
    }

    #[test]
    fn test_encode_poles() {
        assert_eq!(encode(90.0, 0.0, 1).unwrap(), "u");
        assert_eq!(encode(-90.0, 0.0, 1).unwrap(), "h");
        assert_eq!(encode(90.0, 0.0, 12).unwrap(), "upbpbpbpbpbp");
        assert_eq!(encode(-90.0, 0.0, 12).unwrap(), "h00000000000");
    }

    #[test]
    fn test_encode_antimeridian() {
        assert_eq!(encode(0.0, 180.0, 12).unwrap(), "xbpbpbpbpbpb");
        assert_eq!(encode(0.0, -180.0, 12).unwrap(), "800000000000");
    }

    #[test]
    fn test_encode_normalizes_longitude() {
        assert_eq!(
            encode(20.0, 31.0 + 360.0, 12).unwrap(),
            encode(20.0, 31.0, 12).unwrap()
        );
        assert_eq!(
            encode(20.0, 31.0 - 720.0, 12).unwrap(),
            encode(20.0, 31.0, 12).unwrap()
        );
    }

    #[test]
    fn test_encode_with_accuracy() {
        let c = Coordinate::new(-25.382708, -49.265506);
        assert_eq!(encode_with_accuracy(c, Accuracy::About1km).unwrap(), "6gkzwg");
        assert_eq!(encode_with_accuracy(c, Accuracy::About3cm).unwrap(), "6gkzwgjzn820");
    }

    #[test]
    fn test_long_length_nibble() {
        for length in 1..=MAX_HASH_LENGTH {
            let long = encode_to_long(10.0, 10.0, length).unwrap();
            assert_eq!((long & 0x0f) as usize, length);
        }
    }
}

//! Geohash decoding: recover the centre of a geohash cell.
//!
//! The decoder replays the encoder's interval bisection, consuming 5 bits per
//! character (most significant first), and returns the midpoint of the final
//! longitude and latitude intervals.

use crate::base32;
use crate::coordinate::{to_180, Coordinate, MAX_LAT, MIN_LAT};
use crate::dimensions::{height_degrees, width_degrees};
use crate::error::GeohashError;

/// Masks selecting the 5 bits of a character, most significant first.
const BITS: [u8; 5] = [16, 8, 4, 2, 1];

/// Narrow `interval` to its upper half if the masked bit is set, else to its lower half.
#[inline]
fn refine_interval(interval: &mut [f64; 2], digit: u8, mask: u8) {
    let mid = (interval[0] + interval[1]) / 2.0;
    if digit & mask != 0 {
        interval[0] = mid;
    } else {
        interval[1] = mid;
    }
}

/// Decode a text geohash into the centre of its cell.
///
/// The empty hash is the whole world and decodes to `(0, 0)`.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`] if the hash contains a
/// character outside the base32 alphabet.
///
/// # Examples
///
/// ```
/// use geohash_core::decode;
/// let point = decode("dqcjqcp84c6e").unwrap();
/// assert!((point.latitude - 38.89710201881826).abs() < 1e-9);
/// assert!((point.longitude - -77.03669792041183).abs() < 1e-9);
/// ```
pub fn decode(geohash: &str) -> Result<Coordinate, GeohashError> {
    let mut is_lon = true;
    let mut lat = [MIN_LAT, MAX_LAT];
    let mut lon = [-180.0f64, 180.0f64];

    for ch in geohash.chars() {
        let digit = base32::char_index(ch)?;
        for mask in BITS {
            if is_lon {
                refine_interval(&mut lon, digit, mask);
            } else {
                refine_interval(&mut lat, digit, mask);
            }
            is_lon = !is_lon;
        }
    }

    Ok(Coordinate::new(
        (lat[0] + lat[1]) / 2.0,
        (lon[0] + lon[1]) / 2.0,
    ))
}

/// Decode an integer geohash into the centre of its cell.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidLongHash`] if the length nibble is outside `1..=12`.
pub fn decode_long(geohash: i64) -> Result<Coordinate, GeohashError> {
    decode(&base32::long_to_string(geohash)?)
}

/// Returns true if the cell of `geohash` contains the given point.
///
/// Points on the cell edge count as contained. Longitude differences are
/// taken across the antimeridian.
///
/// # Examples
///
/// ```
/// use geohash_core::hash_contains;
/// // Schenectady, NY
/// assert!(hash_contains("dre7", 42.819581, -73.950691).unwrap());
/// assert!(!hash_contains("dre7", 62.819581, -73.950691).unwrap());
/// ```
pub fn hash_contains(geohash: &str, latitude: f64, longitude: f64) -> Result<bool, GeohashError> {
    let centre = decode(geohash)?;
    let length = geohash.chars().count();
    Ok((centre.latitude - latitude).abs() <= height_degrees(length) / 2.0
        && to_180(centre.longitude - longitude).abs() <= width_degrees(length) / 2.0)
}

/// Returns true if the cell of `geohash` contains `coordinate`.
pub fn contains(geohash: &str, coordinate: Coordinate) -> Result<bool, GeohashError> {
    hash_contains(geohash, coordinate.latitude, coordinate.longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_impl;

    const PRECISION: f64 = 1e-9;

    #[test]
    fn test_decode_white_house() {
        let point = decode("dqcjqcp84c6e").unwrap();
        assert!((point.latitude - 38.89710201881826).abs() < PRECISION);
        assert!((point.longitude - -77.03669792041183).abs() < PRECISION);
    }

    #[test]
    fn test_decode_empty_is_world_centre() {
        assert_eq!(decode("").unwrap(), Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_decode_single_char_centres() {
        assert_eq!(decode("u").unwrap(), Coordinate::new(67.5, 22.5));
        assert_eq!(decode("0").unwrap(), Coordinate::new(-67.5, -157.5));
        assert_eq!(decode("z").unwrap(), Coordinate::new(67.5, 157.5));
    }

    #[test]
    fn test_decode_invalid_char() {
        assert_eq!(decode("dra"), Err(GeohashError::InvalidCharacter('a')));
        assert_eq!(decode("DR"), Err(GeohashError::InvalidCharacter('D')));
    }

    #[test]
    fn test_decode_long_matches_text() {
        let long = encode_impl::encode_to_long(41.842967, -72.727175, 2).unwrap();
        assert_eq!(decode_long(long).unwrap(), decode("dr").unwrap());
        assert!(decode_long(0).is_err());
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let hash = encode_impl::encode(-25.382708, -49.265506, 9).unwrap();
        let centre = decode(&hash).unwrap();
        assert_eq!(encode_impl::encode_coordinate(centre, 9).unwrap(), hash);
    }

    #[test]
    fn test_hash_contains_centre_and_far_points() {
        let centre = decode("dre7").unwrap();
        assert!(hash_contains("dre7", centre.latitude, centre.longitude).unwrap());
        assert!(!hash_contains("dre7", centre.latitude + 20.0, centre.longitude).unwrap());
        assert!(!hash_contains("dre7", centre.latitude, centre.longitude + 20.0).unwrap());
    }

    #[test]
    fn test_hash_contains_near_longitude_boundary() {
        let hash = encode_impl::encode(-25.0, -179.0, 1).unwrap();
        assert!(!hash_contains(&hash, -25.0, 179.0).unwrap());
        assert!(hash_contains(&hash, -25.0, -178.0).unwrap());
    }

    #[test]
    fn test_contains_coordinate() {
        assert!(contains("u", Coordinate::new(67.5, 22.5)).unwrap());
        assert!(contains("u", Coordinate::new(90.0, 0.0)).unwrap());
        assert!(!contains("u", Coordinate::new(0.0, 0.0)).unwrap());
        assert!(contains("?", Coordinate::new(0.0, 0.0)).is_err());
    }
}

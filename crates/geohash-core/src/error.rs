//! Error types for geohash encoding, decoding and coverage.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or relating geohashes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeohashError {
    /// The latitude is outside `-90.0..=90.0`.
    #[error("latitude out of range: {0} (must be -90..=90)")]
    LatitudeOutOfRange(f64),

    /// The longitude is infinite or NaN.
    #[error("longitude is not finite: {0}")]
    LongitudeNotFinite(f64),

    /// The requested hash length is outside `1..=12`.
    #[error("invalid geohash length: {length} (must be 1..=12)")]
    InvalidLength {
        /// The rejected length.
        length: usize,
    },

    /// A character outside the 32-symbol geohash alphabet was encountered.
    #[error("invalid base32 character: {0:?}")]
    InvalidCharacter(char),

    /// The length nibble of an integer geohash is outside `1..=12`.
    #[error("invalid long geohash: {0:#018x}")]
    InvalidLongHash(i64),

    /// A direction name could not be parsed.
    #[error("invalid direction: {0:?} (expected top, bottom, left or right)")]
    InvalidDirection(String),

    /// Adjacency was requested for the empty hash, which covers the whole world.
    #[error("adjacent has no meaning for a zero length hash that covers the whole world")]
    EmptyHash,

    /// The bounding box is inverted in latitude.
    #[error("invalid bounding box: top left latitude {top_left_lat} is below bottom right latitude {bottom_right_lat}")]
    InvalidBoundingBox {
        /// Latitude of the north-west corner.
        top_left_lat: f64,
        /// Latitude of the south-east corner.
        bottom_right_lat: f64,
    },

    /// A general base32 integer encoding error.
    #[error("encoding error: {0}")]
    EncodingError(String),
}

//! # geohash-core
//!
//! Geohash encoding, decoding, adjacency and bounding-box coverage in pure Rust.
//!
//! A [geohash](https://en.wikipedia.org/wiki/Geohash) names a rectangular
//! cell on the globe with a short base32 string. Each character adds 5 bits
//! of precision, alternating between longitude and latitude, so a hash is
//! always a prefix of the hashes of the cells it contains. This crate works
//! with both the text form and a packed 64-bit integer form.
//!
//! ## Quick Start
//!
//! ```
//! use geohash_core::{adjacent_hash, cover_bounding_box, decode, encode, Direction};
//!
//! // Encode: point -> geohash
//! let hash = encode(38.89710201881826, -77.03669792041183, 12).unwrap();
//! assert_eq!(hash, "dqcjqcp84c6e");
//!
//! // Decode: geohash -> cell centre
//! let centre = decode(&hash).unwrap();
//! assert!((centre.latitude - 38.897102).abs() < 1e-6);
//!
//! // Step to a neighbouring cell
//! assert_eq!(adjacent_hash("u1pb", Direction::Right).unwrap(), "u300");
//!
//! // Tile a bounding box
//! let coverage = cover_bounding_box(42.819581, -73.950691, 41.842967, -72.727175, 3).unwrap();
//! assert_eq!(coverage.hashes.len(), 4);
//! ```
//!
//! ## Features
//!
//! * `parallel` samples coverage grids with rayon.
//! * `serde` derives `Serialize`/`Deserialize` for the public value types.

pub mod accuracy;
pub mod adjacent;
pub mod base32;
pub mod coordinate;
pub mod coverage;
pub mod dimensions;
pub mod direction;
pub mod error;

mod decode_impl;
mod encode_impl;

/// Longest supported hash, in characters. 12 characters use 60 of the 64 bits.
pub const MAX_HASH_LENGTH: usize = 12;

/// Hash budget used by [`cover_bounding_box_optimal`].
pub const DEFAULT_MAX_HASHES: usize = 12;

// Re-export primary functions at crate root.
pub use accuracy::Accuracy;
pub use adjacent::{
    adjacent_hash, adjacent_hash_steps, bottom, grid_around, grid_as_string, left, neighbours,
    right, top,
};
pub use coordinate::{to_180, Coordinate};
pub use coverage::{
    cover_bounding_box, cover_bounding_box_longs, cover_bounding_box_max_hashes,
    cover_bounding_box_optimal, hash_length_to_cover_bounding_box, Coverage, CoverageLongs,
};
pub use decode_impl::{contains, decode, decode_long, hash_contains};
pub use dimensions::{height_degrees, width_degrees};
pub use direction::{Direction, Parity};
pub use encode_impl::{encode, encode_coordinate, encode_to_long, encode_with_accuracy};
pub use error::GeohashError;

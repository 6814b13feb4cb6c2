//! Adjacent geohash resolution.
//!
//! Neighbours are found by rewriting the last character through static
//! lookup tables keyed by direction and length parity. When the last
//! character sits on the border of its parent cell, the parent is moved
//! first. Cells touching a pole or the antimeridian are handled by
//! re-encoding a shifted centre instead.

use std::collections::BTreeSet;

use tracing::trace;

use crate::base32::ALPHABET;
use crate::decode_impl::decode;
use crate::dimensions::width_degrees;
use crate::direction::{Direction, Parity};
use crate::encode_impl::encode;
use crate::error::GeohashError;

/// Tolerance when testing whether a cell edge lies on a global edge.
const PRECISION: f64 = 0.000000000001;

/// Replacement characters, indexed by `[direction][parity]`. The character
/// at position `i` of a row replaces the character at position `i` of the
/// row when moving in that direction.
const NEIGHBOURS: [[&[u8; 32]; 2]; 4] = [
    // Top
    [
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        b"bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    // Bottom
    [
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
        b"238967debc01fg45kmstqrwxuvhjyznp",
    ],
    // Left
    [
        b"238967debc01fg45kmstqrwxuvhjyznp",
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
    // Right
    [
        b"bc01fg45238967deuvhjyznpkmstqrwx",
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
];

/// Characters on the edge of their parent cell, indexed by `[direction][parity]`.
const BORDERS: [[&[u8]; 2]; 4] = [
    // Top
    [b"prxz", b"bcfguvyz"],
    // Bottom
    [b"028b", b"0145hjnp"],
    // Left
    [b"0145hjnp", b"028b"],
    // Right
    [b"bcfguvyz", b"prxz"],
];

/// Returns the adjacent hash in the given direction.
///
/// Works across the poles (longitude is turned 180°) and the antimeridian
/// (longitude wraps). The result has the same length as `geohash`.
///
/// # Errors
///
/// Returns [`GeohashError::EmptyHash`] for the empty hash and
/// [`GeohashError::InvalidCharacter`] for characters outside the alphabet.
///
/// # Examples
///
/// ```
/// use geohash_core::{adjacent_hash, Direction};
/// assert_eq!(adjacent_hash("u1pb", Direction::Bottom).unwrap(), "u0zz");
/// assert_eq!(adjacent_hash("u1pb", Direction::Right).unwrap(), "u300");
/// assert_eq!(adjacent_hash("u", Direction::Top).unwrap(), "b");
/// ```
pub fn adjacent_hash(geohash: &str, direction: Direction) -> Result<String, GeohashError> {
    if geohash.is_empty() {
        return Err(GeohashError::EmptyHash);
    }
    let source = geohash.to_ascii_lowercase();

    if let Some(wrapped) = adjacent_at_border(&source, direction)? {
        return Ok(wrapped);
    }

    // decode() has accepted every character, so the hash is ASCII.
    let (base, last) = source.split_at(source.len() - 1);
    let last = last.as_bytes()[0];
    let parity = Parity::of_length(source.len());
    let (d, p) = (direction.index(), parity.index());

    let mut adjacent = if BORDERS[d][p].contains(&last) {
        adjacent_hash(base, direction)?
    } else {
        base.to_string()
    };
    let position = NEIGHBOURS[d][p]
        .iter()
        .position(|&c| c == last)
        .ok_or(GeohashError::InvalidCharacter(last as char))?;
    adjacent.push(ALPHABET[position] as char);
    Ok(adjacent)
}

/// If moving in `direction` leaves the world through a pole or the
/// antimeridian, returns the wrapped neighbour.
fn adjacent_at_border(
    geohash: &str,
    direction: Direction,
) -> Result<Option<String>, GeohashError> {
    let centre = decode(geohash)?;
    let length = geohash.len();
    let half_width = width_degrees(length) / 2.0;

    let (latitude, longitude) = match direction {
        Direction::Bottom if (centre.latitude - half_width + 90.0).abs() < PRECISION => {
            (centre.latitude, centre.longitude + 180.0)
        }
        Direction::Top if (centre.latitude + half_width - 90.0).abs() < PRECISION => {
            (centre.latitude, centre.longitude + 180.0)
        }
        Direction::Left if (centre.longitude - half_width + 180.0).abs() < PRECISION => {
            (centre.latitude, 180.0)
        }
        Direction::Right if (centre.longitude + half_width - 180.0).abs() < PRECISION => {
            (centre.latitude, -180.0)
        }
        _ => return Ok(None),
    };

    trace!(geohash, %direction, "adjacent hash wraps around a global edge");
    encode(latitude, longitude, length).map(Some)
}

/// Returns the adjacent hash to the right (east).
pub fn right(geohash: &str) -> Result<String, GeohashError> {
    adjacent_hash(geohash, Direction::Right)
}

/// Returns the adjacent hash to the left (west).
pub fn left(geohash: &str) -> Result<String, GeohashError> {
    adjacent_hash(geohash, Direction::Left)
}

/// Returns the adjacent hash above (north).
pub fn top(geohash: &str) -> Result<String, GeohashError> {
    adjacent_hash(geohash, Direction::Top)
}

/// Returns the adjacent hash below (south).
pub fn bottom(geohash: &str) -> Result<String, GeohashError> {
    adjacent_hash(geohash, Direction::Bottom)
}

/// Returns the hash `steps` cells away in `direction`. Negative steps
/// move in the opposite direction; zero steps return the hash unchanged.
///
/// # Examples
///
/// ```
/// use geohash_core::{adjacent_hash_steps, Direction};
/// assert_eq!(adjacent_hash_steps("dr", Direction::Right, 1).unwrap(), "dx");
/// assert_eq!(adjacent_hash_steps("dr", Direction::Left, -1).unwrap(), "dx");
/// ```
pub fn adjacent_hash_steps(
    geohash: &str,
    direction: Direction,
    steps: i32,
) -> Result<String, GeohashError> {
    let direction = if steps < 0 {
        direction.opposite()
    } else {
        direction
    };
    let mut current = geohash.to_string();
    for _ in 0..steps.unsigned_abs() {
        current = adjacent_hash(&current, direction)?;
    }
    Ok(current)
}

/// Returns the 8 surrounding hashes in the order left, right, top, bottom,
/// left-top, left-bottom, right-top, right-bottom.
pub fn neighbours(geohash: &str) -> Result<[String; 8], GeohashError> {
    let left = adjacent_hash(geohash, Direction::Left)?;
    let right = adjacent_hash(geohash, Direction::Right)?;
    let top = adjacent_hash(geohash, Direction::Top)?;
    let bottom = adjacent_hash(geohash, Direction::Bottom)?;
    let left_top = adjacent_hash(&left, Direction::Top)?;
    let left_bottom = adjacent_hash(&left, Direction::Bottom)?;
    let right_top = adjacent_hash(&right, Direction::Top)?;
    let right_bottom = adjacent_hash(&right, Direction::Bottom)?;
    Ok([
        left,
        right,
        top,
        bottom,
        left_top,
        left_bottom,
        right_top,
        right_bottom,
    ])
}

/// Renders the hashes around `geohash` as rows of text, one row per step
/// south and one column per step east. Hashes in `highlight` are upper-cased.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use geohash_core::grid_as_string;
/// let grid = grid_as_string("dr", -1, -1, 1, 1, &BTreeSet::new()).unwrap();
/// assert_eq!(grid, "f0 f2 f8 \ndp dr dx \ndn dq dw \n");
/// ```
pub fn grid_as_string(
    geohash: &str,
    from_right: i32,
    from_bottom: i32,
    to_right: i32,
    to_bottom: i32,
    highlight: &BTreeSet<String>,
) -> Result<String, GeohashError> {
    let mut grid = String::new();
    for bottom in from_bottom..=to_bottom {
        for right in from_right..=to_right {
            let column = adjacent_hash_steps(geohash, Direction::Right, right)?;
            let cell = adjacent_hash_steps(&column, Direction::Bottom, bottom)?;
            if highlight.contains(&cell) {
                grid.push_str(&cell.to_ascii_uppercase());
            } else {
                grid.push_str(&cell);
            }
            grid.push(' ');
        }
        grid.push('\n');
    }
    Ok(grid)
}

/// Renders the square grid of `2 * size + 1` hashes per side centred on `geohash`.
pub fn grid_around(
    geohash: &str,
    size: i32,
    highlight: &BTreeSet<String>,
) -> Result<String, GeohashError> {
    grid_as_string(geohash, -size, -size, size, size, highlight)
}

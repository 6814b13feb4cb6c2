//! Bounding-box coverage.
//!
//! A box is tiled by sampling a grid of points spaced one cell apart,
//! starting at the south-west corner. The top row and the east column are
//! always sampled as well, so floating-point drift in the stepping can never
//! leave an edge uncovered.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::base32;
use crate::coordinate::{to_180, MAX_LAT, MIN_LAT};
use crate::dimensions::{height_degrees, width_degrees};
use crate::encode_impl::interleave;
use crate::error::GeohashError;
use crate::{DEFAULT_MAX_HASHES, MAX_HASH_LENGTH};

/// Integer geohashes covering a bounding box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageLongs {
    /// The covering hashes, in ascending integer order.
    pub hashes: BTreeSet<i64>,
    /// Total cell area divided by box area; always `>= 1`.
    pub ratio: f64,
}

impl CoverageLongs {
    /// Number of covering hashes.
    pub fn count(&self) -> usize {
        self.hashes.len()
    }

    /// Length of the covering hashes, or 0 if there are none.
    pub fn hash_length(&self) -> usize {
        self.hashes
            .first()
            .map_or(0, |&hash| (hash & 0x0f) as usize)
    }
}

/// Text geohashes covering a bounding box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coverage {
    /// The covering hashes, sorted.
    pub hashes: BTreeSet<String>,
    /// Total cell area divided by box area; always `>= 1`.
    pub ratio: f64,
}

impl Coverage {
    /// Length of the covering hashes, or 0 if there are none.
    pub fn hash_length(&self) -> usize {
        self.hashes.first().map_or(0, String::len)
    }
}

impl TryFrom<CoverageLongs> for Coverage {
    type Error = GeohashError;

    fn try_from(coverage: CoverageLongs) -> Result<Self, Self::Error> {
        let hashes = coverage
            .hashes
            .iter()
            .map(|&hash| base32::long_to_string(hash))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Coverage {
            hashes,
            ratio: coverage.ratio,
        })
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Coverage(hashes=[")?;
        for (i, hash) in self.hashes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(hash)?;
        }
        write!(f, "], ratio={})", self.ratio)
    }
}

/// Returns the longest hash length whose single cell could hold both corners.
///
/// Both corners are bisected together, exactly as [`encode`](crate::encode)
/// does; the result is the number of whole characters completed before the
/// corners first fall on different sides of a split. 0 means no single hash
/// can enclose the box. If the corners are still together after all 60 bits,
/// [`MAX_HASH_LENGTH`] is returned.
///
/// # Examples
///
/// ```
/// use geohash_core::hash_length_to_cover_bounding_box;
/// // Schenectady to Hartford
/// assert_eq!(
///     hash_length_to_cover_bounding_box(42.819581, -73.950691, 41.842967, -72.727175),
///     2
/// );
/// assert_eq!(hash_length_to_cover_bounding_box(80.0, -170.0, -80.0, 170.0), 0);
/// ```
pub fn hash_length_to_cover_bounding_box(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
) -> usize {
    let mut is_lon = true;
    let mut lat = [MIN_LAT, MAX_LAT];
    let mut lon = [-180.0f64, 180.0f64];

    for bits in 0..MAX_HASH_LENGTH * 5 {
        let (interval, a, b) = if is_lon {
            (&mut lon, top_left_lon, bottom_right_lon)
        } else {
            (&mut lat, top_left_lat, bottom_right_lat)
        };
        let mid = (interval[0] + interval[1]) / 2.0;
        match (a >= mid, b >= mid) {
            (true, true) => interval[0] = mid,
            (false, false) => interval[1] = mid,
            _ => return bits / 5,
        }
        is_lon = !is_lon;
    }
    MAX_HASH_LENGTH
}

/// Points from `start` to `end` spaced `step` apart, with `end` appended.
fn sample_points(start: f64, end: f64, step: f64) -> Vec<f64> {
    let mut points = Vec::new();
    let mut value = start;
    while value <= end {
        points.push(value);
        value += step;
    }
    points.push(end);
    points
}

/// Covers a bounding box with integer geohashes of the given length.
///
/// Longitudes are normalized first; a box whose bottom-right longitude is
/// then west of its top-left longitude crosses the antimeridian. A span of
/// 360° or more is clamped to the whole world.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidBoundingBox`] if `top_left_lat <
/// bottom_right_lat`, [`GeohashError::LatitudeOutOfRange`] if a latitude is
/// outside `-90..=90`, [`GeohashError::LongitudeNotFinite`] if a longitude is
/// infinite or NaN and [`GeohashError::InvalidLength`] if `length` is
/// outside `1..=12`.
pub fn cover_bounding_box_longs(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    length: usize,
) -> Result<CoverageLongs, GeohashError> {
    if top_left_lat < bottom_right_lat {
        return Err(GeohashError::InvalidBoundingBox {
            top_left_lat,
            bottom_right_lat,
        });
    }
    if !(1..=MAX_HASH_LENGTH).contains(&length) {
        return Err(GeohashError::InvalidLength { length });
    }
    for latitude in [top_left_lat, bottom_right_lat] {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(GeohashError::LatitudeOutOfRange(latitude));
        }
    }

    for longitude in [top_left_lon, bottom_right_lon] {
        if !longitude.is_finite() {
            return Err(GeohashError::LongitudeNotFinite(longitude));
        }
    }

    let (left, right, diff) = if bottom_right_lon - top_left_lon >= 360.0 {
        (-180.0, 180.0, 360.0)
    } else {
        // Normalized corners keep the sampling loop bounded for any input.
        let left = to_180(top_left_lon);
        let mut right = to_180(bottom_right_lon);
        if right < left {
            right += 360.0;
        }
        (left, right, right - left)
    };

    let width = width_degrees(length);
    let height = height_degrees(length);
    let lats = sample_points(bottom_right_lat, top_left_lat, height);
    let lons: Vec<f64> = sample_points(left, right, width)
        .into_iter()
        .map(to_180)
        .collect();

    #[cfg(feature = "parallel")]
    let hashes: BTreeSet<i64> = lats
        .par_iter()
        .flat_map_iter(|&lat| lons.iter().map(move |&lon| interleave(lat, lon, length)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let hashes: BTreeSet<i64> = lats
        .iter()
        .flat_map(|&lat| lons.iter().map(move |&lon| interleave(lat, lon, length)))
        .collect();

    let area = diff * (top_left_lat - bottom_right_lat);
    let ratio = hashes.len() as f64 * width * height / area;
    debug!(
        length,
        rows = lats.len(),
        columns = lons.len(),
        hashes = hashes.len(),
        ratio,
        "covered bounding box"
    );
    Ok(CoverageLongs { hashes, ratio })
}

/// Covers a bounding box with text geohashes of the given length.
///
/// # Examples
///
/// ```
/// use geohash_core::cover_bounding_box;
/// let coverage = cover_bounding_box(42.819581, -73.950691, 41.842967, -72.727175, 3).unwrap();
/// let hashes: Vec<&str> = coverage.hashes.iter().map(String::as_str).collect();
/// assert_eq!(hashes, ["dr7", "dre", "drk", "drs"]);
/// assert!(coverage.ratio >= 1.0);
/// ```
pub fn cover_bounding_box(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    length: usize,
) -> Result<Coverage, GeohashError> {
    cover_bounding_box_longs(
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
        length,
    )?
    .try_into()
}

/// Covers a bounding box with the finest hashes that number at most `max_hashes`.
///
/// The search starts at [`hash_length_to_cover_bounding_box`] (at least 1)
/// and refines one character at a time up to length 12. Returns `None` if
/// the coarsest candidate already needs more than `max_hashes` hashes.
pub fn cover_bounding_box_max_hashes(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    max_hashes: usize,
) -> Result<Option<Coverage>, GeohashError> {
    let start = hash_length_to_cover_bounding_box(
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
    )
    .max(1);

    let mut best: Option<CoverageLongs> = None;
    for length in start..=MAX_HASH_LENGTH {
        let coverage = cover_bounding_box_longs(
            top_left_lat,
            top_left_lon,
            bottom_right_lat,
            bottom_right_lon,
            length,
        )?;
        if coverage.count() > max_hashes {
            debug!(
                length,
                count = coverage.count(),
                max_hashes,
                "hash budget exceeded, keeping previous length"
            );
            break;
        }
        best = Some(coverage);
    }
    best.map(Coverage::try_from).transpose()
}

/// Covers a bounding box with at most [`DEFAULT_MAX_HASHES`] hashes.
pub fn cover_bounding_box_optimal(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
) -> Result<Option<Coverage>, GeohashError> {
    cover_bounding_box_max_hashes(
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
        DEFAULT_MAX_HASHES,
    )
}

use std::collections::BTreeSet;

use geohash_core::{Coverage, Direction};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Convert a `GeohashError` into a Python `ValueError`.
fn to_py_err(e: geohash_core::GeohashError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn coverage_tuple(coverage: Coverage) -> (BTreeSet<String>, f64) {
    (coverage.hashes, coverage.ratio)
}

/// Encode a point into a geohash string.
///
/// Args:
///     latitude: Latitude in degrees (-90..=90).
///     longitude: Longitude in degrees; any value, normalized to (-180, 180].
///     length: Number of characters (1..=12, default 12).
///
/// Returns:
///     The geohash string.
#[pyfunction]
#[pyo3(signature = (latitude, longitude, length = 12))]
fn encode(latitude: f64, longitude: f64, length: usize) -> PyResult<String> {
    geohash_core::encode(latitude, longitude, length).map_err(to_py_err)
}

/// Encode a point into a 64-bit integer geohash.
#[pyfunction]
#[pyo3(signature = (latitude, longitude, length = 12))]
fn encode_to_long(latitude: f64, longitude: f64, length: usize) -> PyResult<i64> {
    geohash_core::encode_to_long(latitude, longitude, length).map_err(to_py_err)
}

/// Decode a geohash string into the centre of its cell.
///
/// Returns:
///     A tuple (latitude, longitude).
#[pyfunction]
fn decode(geohash: &str) -> PyResult<(f64, f64)> {
    let centre = geohash_core::decode(geohash).map_err(to_py_err)?;
    Ok((centre.latitude, centre.longitude))
}

/// Decode a 64-bit integer geohash into the centre of its cell.
#[pyfunction]
fn decode_long(geohash: i64) -> PyResult<(f64, f64)> {
    let centre = geohash_core::decode_long(geohash).map_err(to_py_err)?;
    Ok((centre.latitude, centre.longitude))
}

/// Return the hash `steps` cells away in a direction.
///
/// Args:
///     geohash: The starting geohash.
///     direction: One of "top", "bottom", "left" or "right".
///     steps: Number of cells to move; negative moves the other way (default 1).
#[pyfunction]
#[pyo3(signature = (geohash, direction, steps = 1))]
fn adjacent(geohash: &str, direction: &str, steps: i32) -> PyResult<String> {
    let direction: Direction = direction.parse().map_err(to_py_err)?;
    geohash_core::adjacent_hash_steps(geohash, direction, steps).map_err(to_py_err)
}

/// Return the 8 surrounding hashes: left, right, top, bottom, left-top,
/// left-bottom, right-top, right-bottom.
#[pyfunction]
fn neighbours(geohash: &str) -> PyResult<Vec<String>> {
    geohash_core::neighbours(geohash)
        .map(Vec::from)
        .map_err(to_py_err)
}

/// Return True if the cell of `geohash` contains the point.
#[pyfunction]
fn contains(geohash: &str, latitude: f64, longitude: f64) -> PyResult<bool> {
    geohash_core::hash_contains(geohash, latitude, longitude).map_err(to_py_err)
}

/// Cover a bounding box with hashes of a fixed length.
///
/// Returns:
///     A tuple (hashes, ratio) where hashes is a set of strings.
#[pyfunction]
fn cover_bounding_box(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    length: usize,
) -> PyResult<(BTreeSet<String>, f64)> {
    geohash_core::cover_bounding_box(
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
        length,
    )
    .map(coverage_tuple)
    .map_err(to_py_err)
}

/// Cover a bounding box with the finest hashes numbering at most `max_hashes`.
///
/// Returns:
///     A tuple (hashes, ratio), or None if even the coarsest cover is too large.
#[pyfunction]
#[pyo3(signature = (top_left_lat, top_left_lon, bottom_right_lat, bottom_right_lon, max_hashes = geohash_core::DEFAULT_MAX_HASHES))]
fn cover_bounding_box_max_hashes(
    py: Python<'_>,
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    max_hashes: usize,
) -> PyResult<Option<(BTreeSet<String>, f64)>> {
    let coverage = py
        .allow_threads(|| {
            geohash_core::cover_bounding_box_max_hashes(
                top_left_lat,
                top_left_lon,
                bottom_right_lat,
                bottom_right_lon,
                max_hashes,
            )
        })
        .map_err(to_py_err)?;
    Ok(coverage.map(coverage_tuple))
}

/// Longest hash length whose single cell could hold both corners of the box.
#[pyfunction]
fn hash_length_to_cover_bounding_box(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
) -> usize {
    geohash_core::hash_length_to_cover_bounding_box(
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
    )
}

/// Width in degrees of a cell of the given hash length.
#[pyfunction]
fn width_degrees(length: usize) -> f64 {
    geohash_core::width_degrees(length)
}

/// Height in degrees of a cell of the given hash length.
#[pyfunction]
fn height_degrees(length: usize) -> f64 {
    geohash_core::height_degrees(length)
}

/// Geohash encoding, decoding, adjacency and coverage (Rust-powered).
#[pymodule]
fn geohash(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("MAX_HASH_LENGTH", geohash_core::MAX_HASH_LENGTH)?;
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(encode_to_long, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(decode_long, m)?)?;
    m.add_function(wrap_pyfunction!(adjacent, m)?)?;
    m.add_function(wrap_pyfunction!(neighbours, m)?)?;
    m.add_function(wrap_pyfunction!(contains, m)?)?;
    m.add_function(wrap_pyfunction!(cover_bounding_box, m)?)?;
    m.add_function(wrap_pyfunction!(cover_bounding_box_max_hashes, m)?)?;
    m.add_function(wrap_pyfunction!(hash_length_to_cover_bounding_box, m)?)?;
    m.add_function(wrap_pyfunction!(width_degrees, m)?)?;
    m.add_function(wrap_pyfunction!(height_degrees, m)?)?;
    Ok(())
}

use napi::bindgen_prelude::*;
use napi::Task;
use napi_derive::napi;

fn to_napi_err(e: geohash_core::GeohashError) -> Error {
    Error::from_reason(e.to_string())
}

/// Encode a point into a geohash string.
///
/// @param latitude - Latitude in degrees (-90..=90).
/// @param longitude - Longitude in degrees; any value, normalized to (-180, 180].
/// @param length - Number of characters (1..=12, default 12).
/// @returns The geohash string.
#[napi]
pub fn encode(latitude: f64, longitude: f64, length: Option<u32>) -> Result<String> {
    let length = length.unwrap_or(geohash_core::MAX_HASH_LENGTH as u32);
    geohash_core::encode(latitude, longitude, length as usize).map_err(to_napi_err)
}

/// Encode a point into a 64-bit integer geohash.
///
/// @returns The integer geohash as a BigInt.
#[napi]
pub fn encode_to_long(latitude: f64, longitude: f64, length: Option<u32>) -> Result<BigInt> {
    let length = length.unwrap_or(geohash_core::MAX_HASH_LENGTH as u32);
    geohash_core::encode_to_long(latitude, longitude, length as usize)
        .map(BigInt::from)
        .map_err(to_napi_err)
}

/// A latitude/longitude pair in degrees.
#[napi(object)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<geohash_core::Coordinate> for Coordinate {
    fn from(c: geohash_core::Coordinate) -> Self {
        Coordinate {
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

/// Decode a geohash string into the centre of its cell.
#[napi]
pub fn decode(geohash: String) -> Result<Coordinate> {
    geohash_core::decode(&geohash)
        .map(Coordinate::from)
        .map_err(to_napi_err)
}

/// Decode a BigInt geohash into the centre of its cell.
#[napi]
pub fn decode_long(geohash: BigInt) -> Result<Coordinate> {
    let (value, lossless) = geohash.get_i64();
    if !lossless {
        return Err(Error::from_reason("integer geohash does not fit in 64 bits"));
    }
    geohash_core::decode_long(value)
        .map(Coordinate::from)
        .map_err(to_napi_err)
}

/// Return the hash `steps` cells away in a direction.
///
/// @param geohash - The starting geohash.
/// @param direction - One of "top", "bottom", "left" or "right".
/// @param steps - Number of cells to move; negative moves the other way (default 1).
#[napi]
pub fn adjacent(geohash: String, direction: String, steps: Option<i32>) -> Result<String> {
    let direction: geohash_core::Direction = direction.parse().map_err(to_napi_err)?;
    geohash_core::adjacent_hash_steps(&geohash, direction, steps.unwrap_or(1))
        .map_err(to_napi_err)
}

/// Return the 8 surrounding hashes: left, right, top, bottom, left-top,
/// left-bottom, right-top, right-bottom.
#[napi]
pub fn neighbours(geohash: String) -> Result<Vec<String>> {
    geohash_core::neighbours(&geohash)
        .map(Vec::from)
        .map_err(to_napi_err)
}

/// Return true if the cell of `geohash` contains the point.
#[napi]
pub fn contains(geohash: String, latitude: f64, longitude: f64) -> Result<bool> {
    geohash_core::hash_contains(&geohash, latitude, longitude).map_err(to_napi_err)
}

/// Hashes covering a bounding box, with the ratio of cell area to box area.
#[napi(object)]
pub struct Coverage {
    pub hashes: Vec<String>,
    pub ratio: f64,
}

impl From<geohash_core::Coverage> for Coverage {
    fn from(c: geohash_core::Coverage) -> Self {
        Coverage {
            hashes: c.hashes.into_iter().collect(),
            ratio: c.ratio,
        }
    }
}

/// Cover a bounding box with hashes of a fixed length.
#[napi]
pub fn cover_bounding_box(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    length: u32,
) -> Result<Coverage> {
    geohash_core::cover_bounding_box(
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
        length as usize,
    )
    .map(Coverage::from)
    .map_err(to_napi_err)
}

/// Cover a bounding box with the finest hashes numbering at most `maxHashes`.
///
/// @param max_hashes - Hash budget (default 12).
/// @returns The coverage, or null if even the coarsest cover is too large.
#[napi]
pub fn cover_bounding_box_max_hashes(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    max_hashes: Option<u32>,
) -> Result<Option<Coverage>> {
    let max_hashes = max_hashes.map_or(geohash_core::DEFAULT_MAX_HASHES, |m| m as usize);
    geohash_core::cover_bounding_box_max_hashes(
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
        max_hashes,
    )
    .map(|coverage| coverage.map(Coverage::from))
    .map_err(to_napi_err)
}

/// Longest hash length whose single cell could hold both corners of the box.
#[napi]
pub fn hash_length_to_cover_bounding_box(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
) -> u32 {
    geohash_core::hash_length_to_cover_bounding_box(
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
    ) as u32
}

/// Width in degrees of a cell of the given hash length.
#[napi]
pub fn width_degrees(length: u32) -> f64 {
    geohash_core::width_degrees(length as usize)
}

/// Height in degrees of a cell of the given hash length.
#[napi]
pub fn height_degrees(length: u32) -> f64 {
    geohash_core::height_degrees(length as usize)
}

// --- Async versions (run on libuv thread pool) ---

pub struct CoverTask {
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    max_hashes: usize,
}

impl Task for CoverTask {
    type Output = Option<geohash_core::Coverage>;
    type JsValue = Option<Coverage>;

    fn compute(&mut self) -> Result<Self::Output> {
        geohash_core::cover_bounding_box_max_hashes(
            self.top_left_lat,
            self.top_left_lon,
            self.bottom_right_lat,
            self.bottom_right_lon,
            self.max_hashes,
        )
        .map_err(to_napi_err)
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(output.map(Coverage::from))
    }
}

/// Async version of coverBoundingBoxMaxHashes that runs on the libuv thread pool.
/// Returns a Promise<Coverage | null>.
///
/// @param max_hashes - Hash budget (default 12).
#[napi]
pub fn cover_bounding_box_async(
    top_left_lat: f64,
    top_left_lon: f64,
    bottom_right_lat: f64,
    bottom_right_lon: f64,
    max_hashes: Option<u32>,
) -> AsyncTask<CoverTask> {
    AsyncTask::new(CoverTask {
        top_left_lat,
        top_left_lon,
        bottom_right_lat,
        bottom_right_lon,
        max_hashes: max_hashes.map_or(geohash_core::DEFAULT_MAX_HASHES, |m| m as usize),
    })
}

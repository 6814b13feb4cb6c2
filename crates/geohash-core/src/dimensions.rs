//! Cell dimensions in degrees for each geohash length.
//!
//! Every character adds 5 bits, split 3/2 or 2/3 between longitude and
//! latitude depending on its position, so a hash of length `n` spans
//! `180 / 2^(2.5n + offset)` degrees on each axis. For lengths up to
//! [`MAX_HASH_LENGTH`](crate::MAX_HASH_LENGTH) the exponent is a whole number
//! and the tables below are exact.

use crate::MAX_HASH_LENGTH;

/// `2^exp` for small integer exponents, usable in const context.
const fn const_pow2(exp: i32) -> f64 {
    let mut value = 1.0f64;
    let mut i = 0;
    if exp >= 0 {
        while i < exp {
            value *= 2.0;
            i += 1;
        }
    } else {
        while i < -exp {
            value /= 2.0;
            i += 1;
        }
    }
    value
}

/// Exponent of the cell width, in half bits: `5n - 2` for even `n`, `5n - 1` for odd.
const fn width_half_bits(n: usize) -> i32 {
    5 * n as i32 - if n % 2 == 0 { 2 } else { 1 }
}

/// Exponent of the cell height, in half bits: `5n` for even `n`, `5n - 1` for odd.
const fn height_half_bits(n: usize) -> i32 {
    5 * n as i32 - if n % 2 == 0 { 0 } else { 1 }
}

const fn build_width_lut() -> [f64; MAX_HASH_LENGTH + 1] {
    let mut lut = [0.0f64; MAX_HASH_LENGTH + 1];
    let mut n = 0;
    while n <= MAX_HASH_LENGTH {
        lut[n] = 180.0 / const_pow2(width_half_bits(n) / 2);
        n += 1;
    }
    lut
}

const fn build_height_lut() -> [f64; MAX_HASH_LENGTH + 1] {
    let mut lut = [0.0f64; MAX_HASH_LENGTH + 1];
    let mut n = 0;
    while n <= MAX_HASH_LENGTH {
        lut[n] = 180.0 / const_pow2(height_half_bits(n) / 2);
        n += 1;
    }
    lut
}

/// Precomputed cell widths for lengths `0..=12` (computed at compile time).
static HASH_WIDTH_DEGREES: [f64; MAX_HASH_LENGTH + 1] = build_width_lut();

/// Precomputed cell heights for lengths `0..=12` (computed at compile time).
static HASH_HEIGHT_DEGREES: [f64; MAX_HASH_LENGTH + 1] = build_height_lut();

/// Width in degrees of the cell of a geohash of length `n`.
///
/// Length 0 is the whole world (360°).
///
/// # Examples
///
/// ```
/// use geohash_core::width_degrees;
/// assert_eq!(width_degrees(0), 360.0);
/// assert_eq!(width_degrees(1), 45.0);
/// assert_eq!(width_degrees(2), 11.25);
/// ```
#[inline]
pub fn width_degrees(n: usize) -> f64 {
    match HASH_WIDTH_DEGREES.get(n) {
        Some(&width) => width,
        None => 180.0 / 2.0f64.powf(width_half_bits(n) as f64 / 2.0),
    }
}

/// Height in degrees of the cell of a geohash of length `n`.
///
/// Length 0 is the whole world (180°).
///
/// # Examples
///
/// ```
/// use geohash_core::height_degrees;
/// assert_eq!(height_degrees(0), 180.0);
/// assert_eq!(height_degrees(1), 45.0);
/// assert_eq!(height_degrees(2), 5.625);
/// ```
#[inline]
pub fn height_degrees(n: usize) -> f64 {
    match HASH_HEIGHT_DEGREES.get(n) {
        Some(&height) => height,
        None => 180.0 / 2.0f64.powf(height_half_bits(n) as f64 / 2.0),
    }
}

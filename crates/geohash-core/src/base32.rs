//! Base32 encoding and decoding used by geohashes.
//!
//! Geohashes use a 32-character alphabet made of the digits and the lowercase
//! letters without `a`, `i`, `l` and `o`. Each character carries 5 bits of the
//! interleaved longitude/latitude code. This module converts between the text
//! form and the integer form of a geohash, and also provides a signed integer
//! codec over the same alphabet.

use crate::error::GeohashError;
use crate::MAX_HASH_LENGTH;

/// The 32-character alphabet used by geohashes.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Lookup table mapping ASCII byte values to their base32 digit value.
/// Invalid characters map to `255`.
const fn build_decode_lut() -> [u8; 128] {
    let mut lut = [255u8; 128];
    let mut i = 0;
    while i < 32 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

/// Precomputed decode lookup table (computed at compile time).
static DECODE_LUT: [u8; 128] = build_decode_lut();

/// Bit position of the first (most significant) 5-bit group in a long hash.
const FIRST_GROUP_SHIFT: u32 = 59;

/// Mask of the low nibble holding the character length of a long hash.
const LENGTH_MASK: i64 = 0x0f;

/// Return the 5-bit value of a geohash character.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`] if `ch` is not in [`ALPHABET`].
///
/// # Examples
///
/// ```
/// use geohash_core::base32::char_index;
/// assert_eq!(char_index('0').unwrap(), 0);
/// assert_eq!(char_index('z').unwrap(), 31);
/// assert!(char_index('a').is_err());
/// ```
#[inline]
pub fn char_index(ch: char) -> Result<u8, GeohashError> {
    let code = ch as u32;
    if code >= 128 {
        return Err(GeohashError::InvalidCharacter(ch));
    }
    match DECODE_LUT[code as usize] {
        255 => Err(GeohashError::InvalidCharacter(ch)),
        digit => Ok(digit),
    }
}

/// Render an integer geohash as text.
///
/// The length is read from the low 4 bits; the interleaved code is read
/// 5 bits at a time starting from bit 63.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidLongHash`] if the length nibble is outside `1..=12`.
///
/// # Examples
///
/// ```
/// use geohash_core::base32::long_to_string;
/// assert_eq!(long_to_string(0x65c0000000000002).unwrap(), "dr");
/// assert!(long_to_string(0).is_err());
/// ```
pub fn long_to_string(hash: i64) -> Result<String, GeohashError> {
    let length = (hash & LENGTH_MASK) as usize;
    if !(1..=MAX_HASH_LENGTH).contains(&length) {
        return Err(GeohashError::InvalidLongHash(hash));
    }
    let mut bits = hash as u64;
    let mut result = String::with_capacity(length);
    for _ in 0..length {
        result.push(ALPHABET[(bits >> FIRST_GROUP_SHIFT) as usize] as char);
        bits <<= 5;
    }
    Ok(result)
}

/// Pack a text geohash into its integer form.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidLength`] if the hash is empty or longer than
/// 12 characters, or [`GeohashError::InvalidCharacter`] for characters outside
/// the alphabet.
///
/// # Examples
///
/// ```
/// use geohash_core::base32::string_to_long;
/// assert_eq!(string_to_long("dr").unwrap(), 0x65c0000000000002);
/// ```
pub fn string_to_long(geohash: &str) -> Result<i64, GeohashError> {
    let length = geohash.chars().count();
    if !(1..=MAX_HASH_LENGTH).contains(&length) {
        return Err(GeohashError::InvalidLength { length });
    }
    let mut bits: u64 = 0;
    for (pos, ch) in geohash.chars().enumerate() {
        let digit = char_index(ch)? as u64;
        bits |= digit << (FIRST_GROUP_SHIFT - 5 * pos as u32);
    }
    Ok((bits | length as u64) as i64)
}

/// Decode a signed base32 string into an integer.
///
/// A leading `-` marks a negative value; leading zeros are ignored.
///
/// # Errors
///
/// Returns [`GeohashError::InvalidCharacter`] for characters outside the
/// alphabet and [`GeohashError::EncodingError`] if the string has no digits
/// or the value does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use geohash_core::base32::decode;
/// assert_eq!(decode("15pn7").unwrap(), 1234567);
/// assert_eq!(decode("-3v").unwrap(), -123);
/// ```
pub fn decode(base32_str: &str) -> Result<i64, GeohashError> {
    let (negative, digits) = match base32_str.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, base32_str),
    };
    if digits.is_empty() {
        return Err(GeohashError::EncodingError(format!(
            "no base32 digits in {:?}",
            base32_str
        )));
    }

    // Negative values accumulate downwards so that i64::MIN round-trips.
    let mut value: i64 = 0;
    for ch in digits.chars() {
        let digit = char_index(ch)? as i64;
        value = value
            .checked_mul(32)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .ok_or_else(|| {
                GeohashError::EncodingError(format!(
                    "base32 value overflow decoding {:?}",
                    base32_str
                ))
            })?;
    }
    Ok(value)
}

/// Encode an integer as a signed base32 string.
///
/// The magnitude is zero-padded to at least `length` digits and negative
/// values are prefixed with `-`.
///
/// # Examples
///
/// ```
/// use geohash_core::base32::encode;
/// assert_eq!(encode(1234567, 5), "15pn7");
/// assert_eq!(encode(-123, 2), "-3v");
/// assert_eq!(encode(123, 12), "00000000003v");
/// ```
pub fn encode(value: i64, length: usize) -> String {
    let mut remaining = value.unsigned_abs();
    let mut reversed: Vec<u8> = Vec::with_capacity(length.max(13) + 1);
    loop {
        reversed.push(ALPHABET[(remaining % 32) as usize]);
        remaining /= 32;
        if remaining == 0 {
            break;
        }
    }
    while reversed.len() < length {
        reversed.push(b'0');
    }
    if value < 0 {
        reversed.push(b'-');
    }
    reversed.iter().rev().map(|&b| b as char).collect()
}

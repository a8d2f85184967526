//! Byte-to-word conversion utilities.
//!
//! Provides conversion between little-endian byte groups and `u64` words,
//! and splitting of byte buffers into word sequences. The wire format
//! stores every word little-endian, regardless of the active width.

use crate::word::WordWidth;

/// Converts a little-endian byte group to a word.
///
/// The first byte occupies the least significant position. Accepts at
/// most 8 bytes; callers pass exactly `width.bytes()` bytes, except the
/// key schedule, which may pass a shorter trailing group (zero-extended).
///
/// # Parameters
/// - `bytes`: Little-endian byte group, at most 8 bytes.
///
/// # Returns
/// The assembled word value.
pub(crate) fn bytes_to_word(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    let mut value = 0u64;
    for (i, &byte) in bytes.iter().enumerate() {
        value |= (byte as u64) << (8 * i);
    }
    value
}

/// Converts a word to exactly `width.bytes()` little-endian bytes.
///
/// Always emits the full width regardless of numeric magnitude; high
/// bytes are zero for small values.
///
/// # Parameters
/// - `value`: The word to disassemble (masked to `width` internally).
/// - `width`: The active word width.
///
/// # Returns
/// A `Vec<u8>` of `width.bytes()` bytes, least significant first.
pub(crate) fn word_to_bytes(value: u64, width: WordWidth) -> Vec<u8> {
    let masked = value & width.mask();
    masked.to_le_bytes()[..width.bytes()].to_vec()
}

/// Splits a byte buffer into words of `width.bytes()` each.
///
/// A trailing partial group is zero-padded to a full word, so the output
/// always contains `ceil(input.len() / width.bytes())` words.
///
/// # Parameters
/// - `input`: The byte buffer to split.
/// - `width`: The active word width.
///
/// # Returns
/// A `Vec<u64>` of assembled words; empty for empty input.
pub(crate) fn split_into_words(input: &[u8], width: WordWidth) -> Vec<u64> {
    input.chunks(width.bytes()).map(bytes_to_word).collect()
}

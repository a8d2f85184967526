//! Width-aware circular bit rotation.
//!
//! RC5 rotates by data-dependent amounts, so rotation counts are runtime
//! word values of arbitrary magnitude. Both rotations reduce the amount
//! modulo the word's bit width before shifting, which keeps every shift
//! strictly below 64 and the result masked to the active width.

use crate::word::WordWidth;

/// Rotates a word left by `amount` bit positions (circular).
///
/// The amount is reduced modulo `width.bits()` first; the input is masked
/// to the width before rotating so stray high bits cannot leak into the
/// result.
///
/// # Parameters
/// - `value`: The word to rotate (masked to `width` internally).
/// - `amount`: Number of bit positions to rotate; any `u64` value.
/// - `width`: The active word width.
///
/// # Returns
/// The rotated word, masked to `width`.
pub(crate) fn rotate_left(value: u64, amount: u64, width: WordWidth) -> u64 {
    let bits = width.bits() as u64;
    let shift = amount % bits;
    let value = value & width.mask();
    if shift == 0 {
        return value;
    }
    ((value << shift) | (value >> (bits - shift))) & width.mask()
}

/// Rotates a word right by `amount` bit positions (circular).
///
/// Inverse of [`rotate_left`] for the same width and amount.
///
/// # Parameters
/// - `value`: The word to rotate (masked to `width` internally).
/// - `amount`: Number of bit positions to rotate; any `u64` value.
/// - `width`: The active word width.
///
/// # Returns
/// The rotated word, masked to `width`.
pub(crate) fn rotate_right(value: u64, amount: u64, width: WordWidth) -> u64 {
    let bits = width.bits() as u64;
    let shift = amount % bits;
    let value = value & width.mask();
    if shift == 0 {
        return value;
    }
    ((value >> shift) | (value << (bits - shift))) & width.mask()
}

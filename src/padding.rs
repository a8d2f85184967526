//! Block padding codec.
//!
//! Pads byte sequences to a positive multiple of the block size and
//! reverses that padding. Every pad byte carries the pad length, and
//! padding is always present: input that is already block-aligned gets
//! one full extra block, so an empty message still produces a block to
//! encrypt and unpadding is never ambiguous about "no padding at all".

/// Pads `input` to a positive multiple of `block_size`.
///
/// Appends `n` bytes each valued `n`, where `n` is the distance to the
/// next block boundary, or a full block of bytes valued `block_size`
/// when the input is already aligned.
///
/// # Parameters
/// - `input`: The byte sequence to pad.
/// - `block_size`: The cipher block size in bytes (at most 255).
///
/// # Returns
/// A new buffer whose length is the smallest multiple of `block_size`
/// strictly greater than `input.len()`.
pub(crate) fn pad(input: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!(block_size > 0 && block_size <= 255);
    let remainder = input.len() % block_size;
    let pad_len = block_size - remainder;

    let mut padded = Vec::with_capacity(input.len() + pad_len);
    padded.extend_from_slice(input);
    padded.resize(input.len() + pad_len, pad_len as u8);
    padded
}

/// Strips the padding applied by [`pad`].
///
/// Reads the last byte `n` and, if the trailing `n` bytes all equal `n`,
/// removes them. A buffer that does not end in a valid pad run (`n` of 0,
/// `n` longer than the buffer, or a mismatched trailing byte) is returned
/// unchanged rather than rejected; this leave-as-is policy keeps
/// unpadding total for any buffer.
///
/// # Parameters
/// - `input`: The byte sequence to unpad.
///
/// # Returns
/// The buffer without its pad run, or the buffer unchanged when no valid
/// pad run is present.
pub(crate) fn unpad(mut input: Vec<u8>) -> Vec<u8> {
    let len = input.len();
    let pad_len = match input.last() {
        Some(&last) => last as usize,
        None => return input,
    };
    if pad_len == 0 || pad_len > len {
        return input;
    }
    if input[len - pad_len..].iter().any(|&byte| byte as usize != pad_len) {
        return input;
    }
    input.truncate(len - pad_len);
    input
}

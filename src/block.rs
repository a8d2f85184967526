//! Two-word Feistel encrypt/decrypt primitive.
//!
//! The RC5 core transforms exactly one block (two words) per call using
//! `rounds` data-dependent-rotation rounds keyed by the subkey table.
//! Both directions are pure functions of their inputs; the table is
//! read-only throughout.

use crate::utils::bits;
use crate::word::WordWidth;

/// Encrypts a two-word block.
///
/// `a` and `b` are whitened with `S[0]` and `S[1]`, then each round `i`
/// computes `a = rotl(a ^ b, b) + S[2i]` and `b = rotl(b ^ a, a) + S[2i+1]`,
/// every addition modulo the word width and every rotation amount reduced
/// modulo the width.
///
/// # Parameters
/// - `a`, `b`: The plaintext word pair (masked to `width` internally).
/// - `subkeys`: The subkey table of `2 * rounds + 2` words.
/// - `rounds`: Number of rounds `r`.
/// - `width`: The active word width.
///
/// # Returns
/// The encrypted word pair.
pub(crate) fn encrypt_pair(
    a: u64,
    b: u64,
    subkeys: &[u64],
    rounds: u32,
    width: WordWidth,
) -> (u64, u64) {
    debug_assert_eq!(subkeys.len(), 2 * rounds as usize + 2);
    let mask = width.mask();

    let mut a = a.wrapping_add(subkeys[0]) & mask;
    let mut b = b.wrapping_add(subkeys[1]) & mask;

    for i in 1..=rounds as usize {
        a = bits::rotate_left(a ^ b, b, width).wrapping_add(subkeys[2 * i]) & mask;
        b = bits::rotate_left(b ^ a, a, width).wrapping_add(subkeys[2 * i + 1]) & mask;
    }

    (a, b)
}

/// Decrypts a two-word block.
///
/// Exact algebraic inverse of [`encrypt_pair`]: rounds run from `r` down
/// to 1, undoing the add/rotate/XOR chain, finishing with subtraction of
/// `S[1]` and `S[0]`.
///
/// # Parameters
/// - `a`, `b`: The ciphertext word pair (masked to `width` internally).
/// - `subkeys`: The subkey table of `2 * rounds + 2` words.
/// - `rounds`: Number of rounds `r`.
/// - `width`: The active word width.
///
/// # Returns
/// The decrypted word pair.
pub(crate) fn decrypt_pair(
    a: u64,
    b: u64,
    subkeys: &[u64],
    rounds: u32,
    width: WordWidth,
) -> (u64, u64) {
    debug_assert_eq!(subkeys.len(), 2 * rounds as usize + 2);
    let mask = width.mask();

    let mut a = a & mask;
    let mut b = b & mask;

    for i in (1..=rounds as usize).rev() {
        b = bits::rotate_right(b.wrapping_sub(subkeys[2 * i + 1]) & mask, a, width) ^ a;
        a = bits::rotate_right(a.wrapping_sub(subkeys[2 * i]) & mask, b, width) ^ b;
    }

    b = b.wrapping_sub(subkeys[1]) & mask;
    a = a.wrapping_sub(subkeys[0]) & mask;

    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_schedule;
    use md5::Md5;

    fn table_for(password: &str, rounds: u32, width: WordWidth) -> Vec<u64> {
        let key = key_schedule::derive_secret_key::<Md5>(password, 16);
        key_schedule::expand_key(&key, rounds, width)
    }

    #[test]
    fn test_encrypt_changes_pair() {
        let width = WordWidth::W32;
        let s = table_for("block-core", 12, width);
        let (a, b) = encrypt_pair(0x0123_4567, 0x89AB_CDEF & width.mask(), &s, 12, width);
        assert_ne!((a, b), (0x0123_4567, 0x89AB_CDEF & width.mask()));
    }

    #[test]
    fn test_roundtrip_all_widths() {
        for width in [WordWidth::W16, WordWidth::W32, WordWidth::W64] {
            let s = table_for("primitive-roundtrip", 12, width);
            let pairs: [(u64, u64); 5] = [
                (0, 0),
                (1, 2),
                (width.mask(), width.mask()),
                (0x0123_4567_89AB_CDEF & width.mask(), 0xFEDC_BA98_7654_3210 & width.mask()),
                (width.mask() / 2, 1),
            ];
            for (a, b) in pairs {
                let (ea, eb) = encrypt_pair(a, b, &s, 12, width);
                let (da, db) = decrypt_pair(ea, eb, &s, 12, width);
                assert_eq!(
                    (da, db),
                    (a, b),
                    "roundtrip failed for width={:?}, pair=({:#x}, {:#x})",
                    width,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_roundtrip_various_round_counts() {
        let width = WordWidth::W32;
        for rounds in [0, 1, 2, 8, 12, 20, 255] {
            let s = table_for("round-counts", rounds, width);
            let (a, b) = (0xDEAD_BEEF, 0xCAFE_BABE);
            let (ea, eb) = encrypt_pair(a, b, &s, rounds, width);
            let (da, db) = decrypt_pair(ea, eb, &s, rounds, width);
            assert_eq!((da, db), (a, b), "roundtrip failed for rounds={}", rounds);
        }
    }

    #[test]
    fn test_zero_rounds_is_whitening_only() {
        // With r = 0, encryption is just the S[0]/S[1] addition.
        let width = WordWidth::W32;
        let s = table_for("whitening", 0, width);
        let (a, b) = (40, 2);
        let (ea, eb) = encrypt_pair(a, b, &s, 0, width);
        assert_eq!(ea, a.wrapping_add(s[0]) & width.mask());
        assert_eq!(eb, b.wrapping_add(s[1]) & width.mask());
    }

    #[test]
    fn test_output_masked_to_width() {
        for width in [WordWidth::W16, WordWidth::W32] {
            let s = table_for("mask-check", 12, width);
            let (ea, eb) = encrypt_pair(width.mask(), width.mask(), &s, 12, width);
            assert_eq!(ea & !width.mask(), 0);
            assert_eq!(eb & !width.mask(), 0);
        }
    }

    #[test]
    fn test_deterministic_for_same_table() {
        let width = WordWidth::W64;
        let s = table_for("same-table", 16, width);
        let r1 = encrypt_pair(7, 11, &s, 16, width);
        let r2 = encrypt_pair(7, 11, &s, 16, width);
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_different_tables_different_ciphertext() {
        let width = WordWidth::W32;
        let s1 = table_for("table-one", 12, width);
        let s2 = table_for("table-two", 12, width);
        assert_ne!(
            encrypt_pair(1234, 5678, &s1, 12, width),
            encrypt_pair(1234, 5678, &s2, 12, width)
        );
    }
}

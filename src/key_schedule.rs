//! Key derivation and subkey table expansion.
//!
//! Turns a password into a fixed-length secret key via hash stretching,
//! then expands that key into the read-only subkey table `S` used by the
//! block cipher core. The hash is a black-box byte transform supplied as
//! a [`Digest`] type parameter; the engine fixes it to MD5 so keys stay
//! interchangeable with existing deployments.

use md5::Digest;
use zeroize::Zeroize;

use crate::utils::{bits, converter};
use crate::word::WordWidth;

/// Derives a `key_len`-byte secret key from a password by hash stretching.
///
/// The password is hashed once. If the digest is at least `key_len` bytes,
/// the trailing `key_len` bytes become the key. Otherwise the key is
/// filled from the back in digest-sized chunks, re-hashing the previous
/// digest for each earlier chunk; the frontmost chunk is truncated to the
/// digest's leading bytes. The same password and length always yield the
/// same key.
///
/// # Parameters
/// - `password`: Arbitrary password text.
/// - `key_len`: Target key length in bytes (at least 1).
///
/// # Returns
/// The derived secret key of exactly `key_len` bytes.
pub(crate) fn derive_secret_key<D: Digest>(password: &str, key_len: usize) -> Vec<u8> {
    debug_assert!(key_len >= 1);
    let mut digest = D::digest(password.as_bytes()).to_vec();

    if digest.len() >= key_len {
        let key = digest[digest.len() - key_len..].to_vec();
        digest.zeroize();
        return key;
    }

    let mut key = vec![0u8; key_len];
    let mut end = key_len;
    while end > 0 {
        let take = digest.len().min(end);
        let start = end - take;
        key[start..end].copy_from_slice(&digest[..take]);
        end = start;
        if end > 0 {
            let next = D::digest(&digest).to_vec();
            digest.zeroize();
            digest = next;
        }
    }
    digest.zeroize();
    key
}

/// Expands a secret key into the subkey table `S` of `2 * rounds + 2` words.
///
/// The key bytes are split into words `L` (zero-padding the last partial
/// word). `S` is seeded with `S[0] = P`, `S[i] = S[i-1] + Q (mod width)`,
/// then `L` is mixed in for `3 * max(t, c)` iterations with rotating
/// indices and the two accumulators `a` and `b`:
/// `S[i] = rotl(S[i] + a + b, 3)` and `L[j] = rotl(L[j] + a + b, a + b)`.
///
/// The intermediate key words are wiped before returning.
///
/// # Parameters
/// - `secret_key`: The derived secret key bytes (at least 1 byte).
/// - `rounds`: Number of cipher rounds `r`.
/// - `width`: The active word width.
///
/// # Returns
/// The finished subkey table, every element masked to `width`.
pub(crate) fn expand_key(secret_key: &[u8], rounds: u32, width: WordWidth) -> Vec<u64> {
    debug_assert!(!secret_key.is_empty());
    let mask = width.mask();

    let mut l = converter::split_into_words(secret_key, width);
    let c = l.len();

    let t = 2 * rounds as usize + 2;
    let mut s = Vec::with_capacity(t);
    s.push(width.p());
    for i in 1..t {
        s.push(s[i - 1].wrapping_add(width.q()) & mask);
    }

    let mut a = 0u64;
    let mut b = 0u64;
    let mut i = 0;
    let mut j = 0;
    for _ in 0..(3 * t.max(c)) {
        a = bits::rotate_left(s[i].wrapping_add(a).wrapping_add(b), 3, width);
        s[i] = a;
        i = (i + 1) % t;

        let ab = a.wrapping_add(b);
        b = bits::rotate_left(l[j].wrapping_add(ab), ab, width);
        l[j] = b;
        j = (j + 1) % c;
    }

    l.zeroize();
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use md5::Md5;

    /// MD5("test"), a fixed reference digest.
    const MD5_TEST: [u8; 16] = [
        0x09, 0x8f, 0x6b, 0xcd, 0x46, 0x21, 0xd3, 0x73, 0xca, 0xde, 0x4e, 0x83, 0x26, 0x27, 0xb4,
        0xf6,
    ];

    #[test]
    fn test_derive_key_equal_to_digest_length() {
        let key = derive_secret_key::<Md5>("test", 16);
        assert_eq!(key, MD5_TEST);
    }

    #[test]
    fn test_derive_key_shorter_than_digest_keeps_trailing_bytes() {
        let key = derive_secret_key::<Md5>("test", 4);
        assert_eq!(key, MD5_TEST[12..]);
    }

    #[test]
    fn test_derive_key_longer_than_digest_ends_with_digest() {
        let key = derive_secret_key::<Md5>("test", 40);
        assert_eq!(key.len(), 40);
        assert_eq!(&key[24..], &MD5_TEST[..]);
    }

    #[test]
    fn test_derive_key_prefix_agrees_across_lengths() {
        // A shorter key is always the tail of a longer one from the
        // same password, since filling proceeds from the back.
        let short = derive_secret_key::<Md5>("prefix-check", 8);
        let long = derive_secret_key::<Md5>("prefix-check", 16);
        assert_eq!(short, long[8..]);
    }

    #[test]
    fn test_derive_key_deterministic() {
        for len in [1, 5, 16, 17, 48] {
            let k1 = derive_secret_key::<Md5>("same-password", len);
            let k2 = derive_secret_key::<Md5>("same-password", len);
            assert_eq!(k1, k2, "derivation not deterministic for len={}", len);
            assert_eq!(k1.len(), len);
        }
    }

    #[test]
    fn test_derive_key_password_sensitive() {
        let k1 = derive_secret_key::<Md5>("password-a", 16);
        let k2 = derive_secret_key::<Md5>("password-b", 16);
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_expand_key_table_length() {
        let key = derive_secret_key::<Md5>("table-length", 16);
        for rounds in [0, 1, 12, 255] {
            let s = expand_key(&key, rounds, WordWidth::W32);
            assert_eq!(s.len(), 2 * rounds as usize + 2);
        }
    }

    #[test]
    fn test_expand_key_elements_masked_to_width() {
        let key = derive_secret_key::<Md5>("masking", 16);
        for width in [WordWidth::W16, WordWidth::W32, WordWidth::W64] {
            let s = expand_key(&key, 12, width);
            for (i, &word) in s.iter().enumerate() {
                assert_eq!(
                    word & !width.mask(),
                    0,
                    "S[{}] exceeds {:?} mask",
                    i,
                    width
                );
            }
        }
    }

    #[test]
    fn test_expand_key_deterministic() {
        let key = derive_secret_key::<Md5>("determinism", 16);
        let s1 = expand_key(&key, 12, WordWidth::W32);
        let s2 = expand_key(&key, 12, WordWidth::W32);
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_expand_key_key_sensitive() {
        let k1 = derive_secret_key::<Md5>("one", 16);
        let k2 = derive_secret_key::<Md5>("two", 16);
        let s1 = expand_key(&k1, 12, WordWidth::W32);
        let s2 = expand_key(&k2, 12, WordWidth::W32);
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_expand_key_single_byte_key() {
        // c = 1: the mixing index j stays on the lone key word.
        let s = expand_key(&[0x42], 4, WordWidth::W16);
        assert_eq!(s.len(), 10);
        for &word in &s {
            assert!(word <= WordWidth::W16.mask());
        }
    }

    #[test]
    fn test_expand_key_differs_from_unmixed_seed() {
        // After mixing, the table must not be the bare P/Q progression.
        let width = WordWidth::W32;
        let key = derive_secret_key::<Md5>("mixed", 16);
        let s = expand_key(&key, 12, width);
        let mut seeded = vec![width.p()];
        for i in 1..s.len() {
            seeded.push(seeded[i - 1].wrapping_add(width.q()) & width.mask());
        }
        assert_ne!(s, seeded);
    }
}

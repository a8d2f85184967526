//! Word width configuration for the RC5 cipher.
//!
//! RC5 is parameterized by its word size. Each supported width carries a
//! bit length, an all-ones mask, and the two magic constants `P` and `Q`
//! (derived from `e` and the golden ratio) that seed the subkey table.
//! Words are carried as `u64` values masked to the active width.

/// Word width variants supported by the RC5 cipher.
///
/// Selected once at engine construction and immutable afterwards.
/// The cipher block is always two words, so the block size in bytes
/// is `2 * bytes()`.
///
/// # Examples
///
/// ```
/// use rc5_cbc::WordWidth;
///
/// assert_eq!(WordWidth::W32.bits(), 32);
/// assert_eq!(WordWidth::W32.bytes(), 4);
/// assert_eq!(WordWidth::W32.block_size(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordWidth {
    /// 16-bit words (4-byte blocks).
    W16,
    /// 32-bit words (8-byte blocks).
    W32,
    /// 64-bit words (16-byte blocks).
    W64,
}

impl WordWidth {
    /// Returns the word length in bits.
    pub fn bits(self) -> u32 {
        match self {
            WordWidth::W16 => 16,
            WordWidth::W32 => 32,
            WordWidth::W64 => 64,
        }
    }

    /// Returns the word length in bytes.
    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Returns the cipher block size in bytes (two words).
    pub fn block_size(self) -> usize {
        2 * self.bytes()
    }

    /// Returns the all-ones bitmask for this width.
    pub(crate) fn mask(self) -> u64 {
        match self {
            WordWidth::W16 => 0x0000_0000_0000_FFFF,
            WordWidth::W32 => 0x0000_0000_FFFF_FFFF,
            WordWidth::W64 => 0xFFFF_FFFF_FFFF_FFFF,
        }
    }

    /// Returns the magic constant `P` (odd((e - 2) * 2^width)) seeding `S[0]`.
    pub(crate) fn p(self) -> u64 {
        match self {
            WordWidth::W16 => 0xB7E1,
            WordWidth::W32 => 0xB7E1_5163,
            WordWidth::W64 => 0xB7E1_5162_8AED_2A6B,
        }
    }

    /// Returns the magic constant `Q` (odd((phi - 1) * 2^width)) stepping `S`.
    pub(crate) fn q(self) -> u64 {
        match self {
            WordWidth::W16 => 0x9E37,
            WordWidth::W32 => 0x9E37_79B9,
            WordWidth::W64 => 0x9E37_79B9_7F4A_7C15,
        }
    }
}

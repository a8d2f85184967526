//! Error types for the RC5-CBC library.

use std::fmt;

/// Errors produced by the RC5-CBC library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rc5Error {
    /// Number of rounds exceeds the RC5 family maximum of 255.
    InvalidRounds,
    /// Secret key length is outside the valid range [1, 255] bytes.
    InvalidSecretKeyLength,
    /// Ciphertext length is not an IV block plus a positive multiple
    /// of the block size.
    InvalidCiphertextLength,
}

impl fmt::Display for Rc5Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rc5Error::InvalidRounds => {
                write!(f, "Number of rounds must be between 0 and 255")
            }
            Rc5Error::InvalidSecretKeyLength => {
                write!(f, "Secret key length must be between 1 and 255 bytes")
            }
            Rc5Error::InvalidCiphertextLength => {
                write!(
                    f,
                    "Ciphertext length must be an IV block plus a positive multiple of the block size"
                )
            }
        }
    }
}

impl std::error::Error for Rc5Error {}

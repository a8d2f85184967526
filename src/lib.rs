//! RC5 variable-word-size block cipher in CBC mode.
//!
//! This crate implements the RC5 family of Feistel block ciphers
//! (16/32/64-bit words, configurable rounds and key length) operated in
//! CBC mode with a password-derived key schedule and length-value block
//! padding. Ciphertext is self-describing: a random IV is encrypted
//! under the same key and transmitted as the leading block, followed by
//! the chained ciphertext blocks.
//!
//! # Architecture
//!
//! ```text
//! utils (bits, converter)  — word rotation and little-endian byte<->word codec
//!     ↑
//! key_schedule             — password -> secret key -> subkey table S
//!     ↑
//! block                    — two-word encrypt/decrypt Feistel primitive
//!     ↑
//! Rc5CbcCipher             — padding + random IV + CBC chaining driver
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use rc5_cbc::{Rc5CbcCipher, WordWidth};
//!
//! let cipher = Rc5CbcCipher::new(WordWidth::W32, 12, 16, "my_password").unwrap();
//!
//! let ciphertext = cipher.encrypt(b"meet me at noon");
//! let plaintext = cipher.decrypt(&ciphertext).unwrap();
//! assert_eq!(plaintext, b"meet me at noon");
//! ```
//!
//! Any engine built with the same parameters and password can decrypt:
//!
//! ```
//! use rc5_cbc::{Rc5CbcCipher, WordWidth};
//!
//! let sender = Rc5CbcCipher::new(WordWidth::W64, 20, 32, "shared").unwrap();
//! let receiver = Rc5CbcCipher::new(WordWidth::W64, 20, 32, "shared").unwrap();
//!
//! let ciphertext = sender.encrypt(b"42");
//! assert_eq!(receiver.decrypt(&ciphertext).unwrap(), b"42");
//! ```

#![deny(clippy::all)]

pub mod error;

mod block;
mod key_schedule;
mod padding;
mod rc5;
mod word;
pub(crate) mod utils;

pub use error::Rc5Error;
pub use rc5::Rc5CbcCipher;
pub use word::WordWidth;

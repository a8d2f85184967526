//! Word-level utility subsystem for the RC5 cipher.
//!
//! Provides the byte/word conversion and circular rotation primitives the
//! key schedule and block cipher core are built on.

pub(crate) mod bits;
pub(crate) mod converter;

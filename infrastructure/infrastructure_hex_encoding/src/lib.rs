//! Infrastructure Layer: Hex Encoding
//!
//! Provides the textual boundary of the big number engine: encoding a
//! [`entities_bignum::BigNum`] as a hexadecimal string and decoding such a
//! string back into a value.
//!
//! ## Format
//!
//! ASCII hex digits, fixed total length (a multiple of 8 characters, one
//! 32-bit word per 8-character group), most-significant group first, no
//! sign and no radix prefix. Decoding accepts both letter cases; encoding
//! emits lowercase, strips leading zero characters and serializes the
//! all-zero value as `"0"`.
//!
//! ## See Also
//!
//! - [`entities_bignum`]: the value type this codec translates.

pub mod hex_codec;

pub use hex_codec::HexCodec;

// Re-export error types for convenience
pub use hex_codec::{DecodeError, EncodeError};

//! Entities Layer: Big Number
//!
//! Provides the fixed-capacity unsigned big number value type together with
//! its arithmetic, comparison, shift and bitwise operations.
//!
//! ## Overview
//!
//! A [`BigNum`] is 32 words of 32 bits each — a 1024-bit unsigned integer
//! with statically sized storage. There is no growth and no sign: every
//! operation reduces its result modulo 2^1024, so overflow and underflow
//! wrap silently. That wraparound is a guaranteed contract, not an error.
//!
//! The type is `Copy` (128 bytes) and every operation returns its result by
//! value, so destination reuse like `a = a.plus(&b)` is always well defined.
//!
//! ## Modules
//!
//! - [`bignum`]: the value type, construction, native-integer conversion,
//!   comparison and predicates.
//! - Arithmetic (`plus`, `minus`, `times`, `div`, `divmod`, `rem`, `pow`,
//!   `isqrt`, `increment`, `decrement`) and shift/bitwise operations are
//!   inherent methods on [`BigNum`].

mod arithmetic;
mod bitwise;
pub mod bignum;

pub use bignum::{BigNum, Word, WORD_BITS, WORD_COUNT};

//! API Facades Layer
//!
//! Provides flat functions that keep the classic three-address calling
//! shape of the big number engine (`op(a, b, destination)`), for callers
//! ported from that interface. All facades delegate to the entities and
//! infrastructure layers; nothing here re-implements arithmetic.

pub mod bignum_facades;

pub use bignum_facades::*;

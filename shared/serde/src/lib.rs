//! # Aldis Serde
//! Quantization primitives for the aldis sync crates: folding signed scalars
//! into the unit interval, and successive-approximation encoding of folded
//! values into fixed-point bit sequences.
//!
//! This crate is the *reference* rendition of the codec. The automata that
//! `aldis-builder` generates implement the same algorithm as register-transfer
//! states; integration tests hold the two renditions against each other.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod error;
mod fold;
mod quantize;

pub use error::CodecError;
pub use fold::{fold, unfold};
pub use quantize::{
    decode, dequantize, encode, quantize, threshold, try_decode, try_encode, MAX_BIT_DEPTH,
    QUANTIZE_EPSILON,
};

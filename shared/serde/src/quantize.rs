use crate::error::CodecError;

/// Greatest bit depth the codec will encode a single scalar at.
pub const MAX_BIT_DEPTH: usize = 16;

/// Epsilon bias applied by the generated threshold guards around each
/// comparison, so that values sitting exactly on a threshold resolve
/// deterministically to the "0" branch instead of flickering between
/// branches across ticks. Empirically chosen; the reference functions in
/// this module use exact comparisons and do not apply it.
pub const QUANTIZE_EPSILON: f32 = 1e-4;

/// The comparison threshold for bit `depth` of a value normalized into
/// `[0, 1]`: `2^-(depth + 1)`. Bit 0 tests against 0.5, bit 1 against
/// 0.25, and so on.
pub fn threshold(depth: usize) -> f32 {
    0.5f32.powi(depth as i32 + 1)
}

/// Quantizes a value in `[0, 1]` into `bits` bits, most significant first,
/// by successive approximation: at each depth, if the remainder reaches the
/// threshold for that depth, the bit is set and the threshold subtracted.
/// Input outside the unit interval is clamped.
///
/// # Panics
///
/// Panics if `bits` is zero or greater than [`MAX_BIT_DEPTH`].
pub fn quantize(normalized: f32, bits: usize) -> Vec<bool> {
    if bits == 0 || bits > MAX_BIT_DEPTH {
        panic!("bit depth {bits} is out of range (must be 1..={MAX_BIT_DEPTH})");
    }
    let mut remainder = normalized.clamp(0.0, 1.0);
    let mut out = Vec::with_capacity(bits);
    for depth in 0..bits {
        let step = threshold(depth);
        if remainder >= step {
            remainder -= step;
            out.push(true);
        } else {
            out.push(false);
        }
    }
    out
}

/// Inverse of [`quantize`]: accumulates the threshold for every set bit.
/// Returns the lower edge of the quantization bucket, so the result is
/// always ≤ the original value, by at most `2^-bits`.
pub fn dequantize(bits: &[bool]) -> f32 {
    let mut accumulator = 0.0;
    for (depth, bit) in bits.iter().enumerate() {
        if *bit {
            accumulator += threshold(depth);
        }
    }
    accumulator
}

/// Encodes a signed scalar from `[-range, range]` into a bit sequence: one
/// sign bit (true = negative) followed by `bits` magnitude bits, most
/// significant first. Out-of-range input clamps at the boundary.
///
/// # Examples
/// ```
/// # use aldis_serde::try_encode;
/// let bits = try_encode(-64.0, 2, 128.0).unwrap();
/// assert_eq!(bits, vec![true, true, false]);
/// ```
pub fn try_encode(value: f32, bits: usize, range: f32) -> Result<Vec<bool>, CodecError> {
    if bits == 0 || bits > MAX_BIT_DEPTH {
        return Err(CodecError::BitDepthOutOfRange {
            bits,
            max: MAX_BIT_DEPTH,
        });
    }
    if !(range.is_finite() && range > 0.0) {
        return Err(CodecError::InvalidRange { range });
    }
    let magnitude = (value.abs() / range).min(1.0);
    let mut out = Vec::with_capacity(bits + 1);
    out.push(value < 0.0);
    out.extend(quantize(magnitude, bits));
    Ok(out)
}

/// Encodes a signed scalar into sign + magnitude bits.
///
/// # Panics
///
/// Panics on a bit depth outside `1..=MAX_BIT_DEPTH` or a non-positive
/// range. Use [`try_encode`] to handle these as errors.
pub fn encode(value: f32, bits: usize, range: f32) -> Vec<bool> {
    try_encode(value, bits, range).expect("invalid bit depth or range in encode")
}

/// Decodes a sign + magnitude bit sequence produced by [`try_encode`] back
/// into a scalar in `[-range, range]`.
///
/// # Examples
/// ```
/// # use aldis_serde::{try_decode, try_encode};
/// let bits = try_encode(96.0, 4, 128.0).unwrap();
/// let value = try_decode(&bits, 128.0).unwrap();
/// assert!((value - 96.0).abs() <= 128.0 * 0.0625);
/// ```
pub fn try_decode(bits: &[bool], range: f32) -> Result<f32, CodecError> {
    if bits.is_empty() {
        return Err(CodecError::EmptyBitSequence);
    }
    if !(range.is_finite() && range > 0.0) {
        return Err(CodecError::InvalidRange { range });
    }
    let magnitude = dequantize(&bits[1..]) * range;
    if bits[0] {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Decodes a sign + magnitude bit sequence back into a scalar.
///
/// # Panics
///
/// Panics on an empty bit sequence or a non-positive range. Use
/// [`try_decode`] to handle these as errors.
pub fn decode(bits: &[bool], range: f32) -> f32 {
    try_decode(bits, range).expect("invalid bit sequence or range in decode")
}

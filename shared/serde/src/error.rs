use thiserror::Error;

/// Errors that can occur while encoding or decoding quantized values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Requested bit depth is outside the supported range.
    #[error("bit depth {bits} is out of range (must be 1..={max})")]
    BitDepthOutOfRange { bits: usize, max: usize },
    /// The value range must be a positive, finite number.
    #[error("range {range} is not a positive finite number")]
    InvalidRange { range: f32 },
    /// A decode was handed an empty bit sequence.
    #[error("cannot decode an empty bit sequence")]
    EmptyBitSequence,
}

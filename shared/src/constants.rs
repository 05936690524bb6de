/// Ticks a sync slot dwells before advancing, leaving the channel time to
/// settle and giving measure/encode work a bounded window. Overridable per
/// configuration.
pub const SETTLE_TICKS: u32 = 12;

/// Ticks budgeted per quantized bit of encode/decode work, as a ratio over
/// 2 (3/2 = 1.5 ticks per bit). Sets how many slots ahead of its transmit
/// window an object's encode chain is kicked off.
pub const CONVERT_TICKS_PER_BIT_NUM: u32 = 3;

/// Half-turn in degrees; folded rotation components cover ±this range.
pub const ROTATION_RANGE: f32 = 180.0;

/// Bits an analog wire register is costed at when reporting channel usage.
pub const ANALOG_CHANNEL_BITS: usize = 8;

/// Overlap band applied to sign-register comparisons in capture guards, so
/// the positive branch wins when the sign channel sits exactly at center.
pub const SIGN_EPSILON: f32 = 1e-7;

/// Band inside which a split positive/negative magnitude channel is treated
/// as zero when detecting which side is live.
pub const ZERO_EPSILON: f32 = 1e-6;

use thiserror::Error;

use crate::constants::SETTLE_TICKS;

/// Bounds on the per-axis field depth of the bitwise codec. The lower bound
/// leaves at least one magnitude bit under the folded sign bit.
const BITWISE_POSITION_BITS: (usize, usize) = (2, 16);
/// Bounds on the position depth in quick mode, where the analog wire
/// registers carry 8 usable bits.
const QUICK_POSITION_BITS: (usize, usize) = (1, 8);
const ROTATION_BITS: (usize, usize) = (1, 16);

/// Errors that can occur while validating a sync configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The channel must carry at least one boolean register, otherwise the
    /// step count is undefined.
    #[error("channel width must be at least 1")]
    ZeroChannelWidth,
    /// Position field depth outside the supported bounds for the selected
    /// mode.
    #[error("position bit depth {bits} is out of range (must be {min}..={max})")]
    PositionBitsOutOfRange { bits: usize, min: usize, max: usize },
    /// Rotation field depth outside the supported bounds.
    #[error("rotation bit depth {bits} is out of range (must be {min}..={max})")]
    RotationBitsOutOfRange { bits: usize, min: usize, max: usize },
    /// At least one object must be synced.
    #[error("object count must be at least 1")]
    ZeroObjectCount,
    /// The position range must be a positive, finite number.
    #[error("max range {range} is not a positive finite number")]
    InvalidRange { range: f32 },
    /// Slots must dwell for at least one tick.
    #[error("settle ticks must be at least 1")]
    ZeroSettleTicks,
}

/// Build-time configuration for a synced object set. Consumed once to
/// compute the frame layout, the step/cycle schedule, and the automaton
/// graph; nothing here is consulted again at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    /// Number of boolean data registers the wire carries per tick (the
    /// channel capacity C).
    pub channel_width: usize,
    /// Per-axis position field depth in bits, including the folded sign
    /// bit. A depth of `radius + precision` covers ±2^radius world units
    /// at 2^-(precision-1) resolution.
    pub position_bits: usize,
    /// Per-axis rotation field depth in bits, including the folded sign
    /// bit. Ignored when `rotation_enabled` is false.
    pub rotation_bits: usize,
    /// Whether rotation components are captured, encoded, and applied.
    pub rotation_enabled: bool,
    /// Half-extent of the position range: positions are folded over
    /// ±max_range world units and clamp at the boundary.
    pub max_range: f32,
    /// Number of objects multiplexed onto the channel round-robin.
    pub object_count: usize,
    /// Carry whole analog values instead of quantized bits, trading
    /// channel cost for the elimination of the encode/decode chains.
    pub quick_sync: bool,
    /// Ticks a sync slot dwells before advancing.
    pub settle_ticks: u32,
}

impl SyncConfig {
    /// Builds a bitwise configuration from a world radius (±2^radius_bits
    /// units) and a fractional precision, the way position depth is
    /// usually reasoned about.
    pub fn from_radius(radius_bits: u32, precision_bits: u32) -> Self {
        Self {
            position_bits: (radius_bits + precision_bits) as usize,
            max_range: (2.0f32).powi(radius_bits as i32),
            ..Self::default()
        }
    }

    /// The widest per-axis field this configuration encodes, which bounds
    /// the encode/decode chain length.
    pub fn max_field_bits(&self) -> usize {
        if self.rotation_enabled {
            self.position_bits.max(self.rotation_bits)
        } else {
            self.position_bits
        }
    }

    /// Checks every bound; schedule computation and graph generation both
    /// require a validated configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_width == 0 {
            return Err(ConfigError::ZeroChannelWidth);
        }
        let (min, max) = if self.quick_sync {
            QUICK_POSITION_BITS
        } else {
            BITWISE_POSITION_BITS
        };
        if self.position_bits < min || self.position_bits > max {
            return Err(ConfigError::PositionBitsOutOfRange {
                bits: self.position_bits,
                min,
                max,
            });
        }
        if self.rotation_enabled {
            let (min, max) = ROTATION_BITS;
            if self.rotation_bits < min || self.rotation_bits > max {
                return Err(ConfigError::RotationBitsOutOfRange {
                    bits: self.rotation_bits,
                    min,
                    max,
                });
            }
        }
        if self.object_count == 0 {
            return Err(ConfigError::ZeroObjectCount);
        }
        if !(self.max_range.is_finite() && self.max_range > 0.0) {
            return Err(ConfigError::InvalidRange {
                range: self.max_range,
            });
        }
        if self.settle_ticks == 0 {
            return Err(ConfigError::ZeroSettleTicks);
        }
        Ok(())
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            channel_width: 16,
            position_bits: 13,
            rotation_bits: 8,
            rotation_enabled: true,
            max_range: 128.0,
            object_count: 1,
            quick_sync: false,
            settle_ticks: SETTLE_TICKS,
        }
    }
}

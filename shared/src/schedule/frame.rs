use std::ops::Range;

use crate::config::SyncConfig;
use crate::constants::ROTATION_RANGE;

/// The component a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Position,
    Rotation,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Position => "position",
            FieldKind::Rotation => "rotation",
        }
    }
}

/// One of the three spatial axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

/// One quantized scalar component of the frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub kind: FieldKind,
    pub axis: Axis,
    /// Field depth in bits, including the folded sign bit.
    pub bits: usize,
    /// Half-extent of the value range the field covers.
    pub range: f32,
}

/// The ordered concatenation of every field's bit slots: position X, Y, Z,
/// then rotation X, Y, Z when enabled. Bits are MSB-first within a field.
/// Computed once from configuration and consumed by the step scheduler and
/// the graph generator.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    fields: Vec<Field>,
    width: usize,
    position_bits: usize,
    rotation_bits: usize,
}

impl FrameLayout {
    pub fn new(config: &SyncConfig) -> Self {
        let mut fields = Vec::with_capacity(6);
        for axis in Axis::ALL {
            fields.push(Field {
                kind: FieldKind::Position,
                axis,
                bits: config.position_bits,
                range: config.max_range,
            });
        }
        let rotation_bits = if config.rotation_enabled {
            for axis in Axis::ALL {
                fields.push(Field {
                    kind: FieldKind::Rotation,
                    axis,
                    bits: config.rotation_bits,
                    range: ROTATION_RANGE,
                });
            }
            config.rotation_bits
        } else {
            0
        };
        let width = fields.iter().map(|field| field.bits).sum();
        Self {
            fields,
            width,
            position_bits: config.position_bits,
            rotation_bits,
        }
    }

    /// Total frame width W in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn rotation_enabled(&self) -> bool {
        self.rotation_bits > 0
    }

    /// The frame bit range one field occupies.
    pub fn slot(&self, kind: FieldKind, axis: Axis) -> Range<usize> {
        let start = match kind {
            FieldKind::Position => axis.index() * self.position_bits,
            FieldKind::Rotation => 3 * self.position_bits + axis.index() * self.rotation_bits,
        };
        let bits = match kind {
            FieldKind::Position => self.position_bits,
            FieldKind::Rotation => self.rotation_bits,
        };
        start..start + bits
    }

    /// Flat frame index of one bit of one field.
    pub fn bit_index(&self, kind: FieldKind, axis: Axis, depth: usize) -> usize {
        self.slot(kind, axis).start + depth
    }
}

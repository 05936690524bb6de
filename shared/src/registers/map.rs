use crate::registers::RegisterId;

/// Typed map of every register the builder allocates, keyed by handle.
/// Graph generation, the runtime agents, and tests all wire through this
/// map; register names never route anything.
///
/// Measure inputs (`angle_*`, `side_*`) are written by the local measure
/// adapter each tick. Public folded values (`position`, `rotation`) are
/// the canonical transform representation: written by the capture machine
/// on the sender and by decode completion on the receiver.
#[derive(Debug, Clone)]
pub struct SyncRegisters {
    /// High on the authoritative participant, fixed at construction.
    pub is_local: RegisterId,
    /// Wire toggle for the whole system; idles every machine when low.
    pub enabled: RegisterId,
    /// Capture alternation toggle between rotation and position passes.
    pub set_stage: RegisterId,
    /// Per-axis rotation magnitude in [0, 1], from the measure adapter.
    pub angle_magnitude: [RegisterId; 3],
    /// Per-axis rotation sign channel: below center = positive.
    pub angle_sign: [RegisterId; 3],
    /// Per-axis positive-side position magnitude in [0, 1].
    pub side_positive: [RegisterId; 3],
    /// Per-axis negative-side position magnitude in [0, 1].
    pub side_negative: [RegisterId; 3],
    /// Per-axis public position value (folded in bitwise mode, magnitude
    /// in quick mode).
    pub position: [RegisterId; 3],
    /// Quick mode only: per-axis public position sign, true = positive.
    pub position_sign: Option<[RegisterId; 3]>,
    /// Per-axis public folded rotation value, when rotation is enabled.
    pub rotation: Option<[RegisterId; 3]>,
    /// Wire step index registers, least significant first.
    pub step_index: Vec<RegisterId>,
    /// Wire object index registers, least significant first.
    pub object_index: Vec<RegisterId>,
    /// Wire frame data slice registers (bitwise mode).
    pub data: Vec<RegisterId>,
    /// Object the measure adapter should track next, led ahead of the
    /// wire schedule.
    pub pending_read: Vec<RegisterId>,
    /// Receiver-side object select for the apply adapter, latched on
    /// decode completion. In quick mode these alias the wire object index.
    pub display_object: Vec<RegisterId>,
    /// Outgoing/incoming frame double buffer, flat in frame-bit order.
    pub staging: Vec<RegisterId>,
    /// Quick mode wire: per-axis analog position magnitude.
    pub quick_position: Option<[RegisterId; 3]>,
    /// Quick mode wire: per-axis boolean position sign.
    pub quick_position_sign: Option<[RegisterId; 3]>,
    /// Quick mode wire: per-axis analog folded rotation.
    pub quick_rotation: Option<[RegisterId; 3]>,
    /// Per-object registers (bitwise mode).
    pub objects: Vec<ObjectRegisters>,
}

/// Registers owned by one multiplexed object's encode/decode machinery
#[derive(Debug, Clone)]
pub struct ObjectRegisters {
    /// Raised by the schedule to kick this object's encode chain.
    pub start_read: RegisterId,
    /// Raised by the final receive step to kick the decode chain.
    pub start_write: RegisterId,
    /// Encode mutual exclusion flag, managed by the owner machine.
    pub read_in_progress: RegisterId,
    /// Decode mutual exclusion flag, managed by the owner machine.
    pub write_in_progress: RegisterId,
    /// Per-axis position remainder/accumulator for the bit chains.
    pub accum_position: [RegisterId; 3],
    /// Per-axis rotation remainder/accumulator, when rotation is enabled.
    pub accum_rotation: Option<[RegisterId; 3]>,
    /// This object's finished frame, flat in frame-bit order: written by
    /// the encode chain on the sender, latched from staging on the
    /// receiver.
    pub frame_bits: Vec<RegisterId>,
    /// Staged copy of the announced object index, published to
    /// `display_object` on decode completion.
    pub object_latch: Vec<RegisterId>,
}

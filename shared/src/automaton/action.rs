use crate::registers::{RegisterId, Value};

/// A register-transfer operation executed when its state is entered.
/// Entry actions run in declaration order, exactly once per entry, and are
/// the only way automaton states mutate registers.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Store a constant.
    Set { register: RegisterId, value: Value },
    /// Copy one register into another of the same kind.
    Copy { from: RegisterId, to: RegisterId },
    /// Copy a float register with a linear range conversion: the source
    /// range's endpoints map onto the destination range's endpoints, and
    /// input clamps to the source range first. The destination range may
    /// be descending.
    Remap {
        from: RegisterId,
        to: RegisterId,
        from_range: (f32, f32),
        to_range: (f32, f32),
    },
    /// Add a constant to a float register.
    Add { register: RegisterId, delta: f32 },
}

impl Action {
    /// The register this action writes.
    pub fn writes(&self) -> RegisterId {
        match self {
            Action::Set { register, .. } => *register,
            Action::Copy { to, .. } => *to,
            Action::Remap { to, .. } => *to,
            Action::Add { register, .. } => *register,
        }
    }

    /// The register this action reads, if any.
    pub fn reads(&self) -> Option<RegisterId> {
        match self {
            Action::Set { .. } => None,
            Action::Copy { from, .. } => Some(*from),
            Action::Remap { from, .. } => Some(*from),
            Action::Add { register, .. } => Some(*register),
        }
    }
}

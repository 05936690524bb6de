use crate::registers::{RegisterBank, RegisterId, Value};

/// One register-vs-constant comparison. Transitions carry conjunctions of
/// these; an empty conjunction always passes.
#[derive(Debug, Clone, PartialEq)]
pub enum Guard {
    /// Boolean register is set.
    IsTrue(RegisterId),
    /// Boolean register is clear.
    IsFalse(RegisterId),
    /// Float register is strictly above the constant.
    Above(RegisterId, f32),
    /// Float register is strictly below the constant.
    Below(RegisterId, f32),
}

impl Guard {
    /// The register this guard reads.
    pub fn register(&self) -> RegisterId {
        match self {
            Guard::IsTrue(register)
            | Guard::IsFalse(register)
            | Guard::Above(register, _)
            | Guard::Below(register, _) => *register,
        }
    }

    /// Evaluates the comparison against current register values. A guard
    /// on a register of the wrong kind never passes; graph verification
    /// rules that case out for generated graphs.
    pub fn passes(&self, bank: &RegisterBank) -> bool {
        match self {
            Guard::IsTrue(register) => matches!(bank.value(*register), Value::Bool(true)),
            Guard::IsFalse(register) => matches!(bank.value(*register), Value::Bool(false)),
            Guard::Above(register, limit) => match bank.value(*register) {
                Value::Float(value) => value > *limit,
                Value::Bool(_) => false,
            },
            Guard::Below(register, limit) => match bank.value(*register) {
                Value::Float(value) => value < *limit,
                Value::Bool(_) => false,
            },
        }
    }
}

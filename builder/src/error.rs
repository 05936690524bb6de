use thiserror::Error;

use aldis_shared::ConfigError;

/// Errors that can occur while generating or verifying an automaton
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// The configuration failed validation before any schedule work.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An action or guard addresses a register with the wrong kind.
    #[error("state `{state}` uses register `{register}` as the wrong kind")]
    KindMismatch { state: String, register: String },
    /// A wire register is written by a state that can be active on the
    /// observing side. The wire has exactly one writer role.
    #[error("state `{state}` writes wire register `{register}` outside the local role")]
    WireWriteOutsideLocal { state: String, register: String },
    /// Two states that can be active in the same tick and role both write
    /// the same register.
    #[error("states `{first}` and `{second}` race on register `{register}`")]
    WriteRace {
        register: String,
        first: String,
        second: String,
    },
    /// Two dispatch entries of one machine carry an identical guard
    /// conjunction, so the later one can never fire.
    #[error("machine `{machine}` has duplicate dispatch guards at entries {first} and {second}")]
    DuplicateDispatchPattern {
        machine: String,
        first: usize,
        second: usize,
    },
    /// The step spans of the generated schedule do not tile the frame.
    #[error("step spans cover {actual} bits, frame is {expected} bits wide")]
    IncompleteFrameCoverage { expected: usize, actual: usize },
}

//! # Aldis Shared
//! Common functionality shared between aldis-builder & aldis-runtime crates:
//! the typed register table, the automaton data model, the frame/step/cycle
//! schedule computations, and the build-time configuration surface.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod automaton;
pub mod registers;
pub mod schedule;

mod config;
mod constants;
mod types;

pub use aldis_serde::{
    decode, dequantize, encode, fold, quantize, threshold, try_decode, try_encode, unfold,
    CodecError, MAX_BIT_DEPTH, QUANTIZE_EPSILON,
};

pub use automaton::{
    Action, Automaton, Guard, Machine, MachineId, RoleGate, State, StateId, Transition, Trigger,
};
pub use config::{ConfigError, SyncConfig};
pub use constants::{
    ANALOG_CHANNEL_BITS, CONVERT_TICKS_PER_BIT_NUM, ROTATION_RANGE, SETTLE_TICKS, SIGN_EPSILON,
    ZERO_EPSILON,
};
pub use registers::{
    ObjectRegisters, RegisterBank, RegisterDef, RegisterError, RegisterFile, RegisterId,
    RegisterKind, RegisterScope, SyncRegisters, Value,
};
pub use schedule::{
    index_pattern, index_register_count, Axis, CostReport, CycleSlot, CyclePlan, Field, FieldKind,
    FrameLayout, SchedulePlan, StepPlan,
};
pub use types::{Role, Tick};

mod bank;
mod file;
mod map;

pub use bank::{RegisterBank, RegisterError};
pub use file::{RegisterDef, RegisterFile, RegisterId, RegisterKind, RegisterScope, Value};
pub use map::{ObjectRegisters, SyncRegisters};

pub mod harness;
pub mod rig;

pub use harness::SyncHarness;
pub use rig::{RecordingSink, ScriptedSource};

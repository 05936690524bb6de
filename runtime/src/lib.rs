//! # Aldis Runtime
//! Executes the automata that aldis-builder generates: per-participant
//! tick loop with snapshot dispatch, the wire-register link between
//! participants, and the adapter agents that move transforms between the
//! register bank and the surrounding application.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod adapters;
mod link;
mod participant;

pub use adapters::{pattern_value, LocalAgent, RemoteAgent, TransformSink, TransformSource};
pub use link::Link;
pub use participant::Participant;

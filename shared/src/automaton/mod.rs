mod action;
mod graph;
mod guard;
mod machine;
mod state;

pub use action::Action;
pub use graph::Automaton;
pub use guard::Guard;
pub use machine::{Machine, MachineId};
pub use state::{RoleGate, State, StateId, Transition, Trigger};

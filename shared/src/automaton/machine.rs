use crate::automaton::{StateId, Transition};

/// Index into an automaton's machine list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MachineId(u32);

impl MachineId {
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// One independently-active region of the automaton. Each machine has
/// exactly one active state per participant at any tick; machines execute
/// in declaration order within a tick, so an earlier machine's entry
/// actions are visible to later machines the same tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Machine {
    pub name: String,
    /// State entered at participant construction (and on disable, via the
    /// dispatch list's top-priority guard).
    pub initial: StateId,
    /// Wildcard dispatch: evaluated top-down every tick from whichever
    /// state is active; the first passing entry fires. A non-reentrant
    /// entry targeting the active state is skipped and scanning continues.
    pub dispatch: Vec<Transition>,
    /// Every state belonging to this machine, for verification and
    /// diagnostics.
    pub states: Vec<StateId>,
}

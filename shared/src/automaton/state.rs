use crate::automaton::{Action, Guard};
use crate::types::Role;

/// Index into an automaton's state arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// Which role a state can be active under. Runtime gating happens through
/// `is_local` guards; this declaration exists so graph verification can
/// prove wire single-writer and write-race freedom statically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGate {
    Any,
    LocalOnly,
    RemoteOnly,
}

impl RoleGate {
    pub fn admits(self, role: Role) -> bool {
        match self {
            RoleGate::Any => true,
            RoleGate::LocalOnly => role == Role::Local,
            RoleGate::RemoteOnly => role == Role::Remote,
        }
    }

    /// Whether two gates can both be active in the same participant.
    pub fn overlaps(self, other: RoleGate) -> bool {
        match (self, other) {
            (RoleGate::LocalOnly, RoleGate::RemoteOnly)
            | (RoleGate::RemoteOnly, RoleGate::LocalOnly) => false,
            _ => true,
        }
    }
}

/// What causes a transition to fire
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Fires when every guard in the conjunction passes. An empty
    /// conjunction fires unconditionally.
    Guards(Vec<Guard>),
    /// Fires once the state has been active for this many ticks.
    After(u32),
}

/// An outgoing edge of a state, or an entry in a machine's dispatch list
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub trigger: Trigger,
    pub target: StateId,
    /// In a dispatch list: whether matching the already-active state
    /// re-enters it (re-running its entry actions) instead of being
    /// skipped.
    pub reentrant: bool,
}

impl Transition {
    pub fn when(guards: Vec<Guard>, target: StateId) -> Self {
        Self {
            trigger: Trigger::Guards(guards),
            target,
            reentrant: false,
        }
    }

    pub fn when_reentrant(guards: Vec<Guard>, target: StateId) -> Self {
        Self {
            trigger: Trigger::Guards(guards),
            target,
            reentrant: true,
        }
    }

    pub fn after(ticks: u32, target: StateId) -> Self {
        Self {
            trigger: Trigger::After(ticks),
            target,
            reentrant: false,
        }
    }
}

/// A node in the automaton: ordered entry actions plus outgoing
/// transitions, evaluated only while the state is active and only after
/// the machine's dispatch list found nothing to fire
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub name: String,
    pub gate: RoleGate,
    pub actions: Vec<Action>,
    pub transitions: Vec<Transition>,
}

use crate::automaton::{Machine, MachineId, State, StateId};
use crate::registers::{RegisterFile, SyncRegisters};
use crate::schedule::SchedulePlan;

/// A complete, immutable automaton: the register table, the state arena,
/// the machine list, the schedule it was generated from, and the typed
/// register map adapters wire through. Built once; participants share it
/// behind an `Arc` and each execute their own instance over it.
#[derive(Debug, Clone)]
pub struct Automaton {
    pub registers: RegisterFile,
    pub states: Vec<State>,
    pub machines: Vec<Machine>,
    pub plan: SchedulePlan,
    pub map: SyncRegisters,
}

impl Automaton {
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.to_index()]
    }

    pub fn machine(&self, id: MachineId) -> &Machine {
        &self.machines[id.to_index()]
    }

    pub fn machine_named(&self, name: &str) -> Option<MachineId> {
        self.machines
            .iter()
            .position(|machine| machine.name == name)
            .map(MachineId::from_index)
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}

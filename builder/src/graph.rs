use aldis_shared::{
    Action, Automaton, Guard, Machine, RegisterFile, RegisterId, RoleGate, SchedulePlan, State,
    StateId, SyncRegisters, Transition, Value,
};

/// Arena-style assembler for the automaton graph. Machine generators add
/// their states and dispatch lists here; `finish` freezes the arena into
/// an [`Automaton`].
pub(crate) struct GraphBuilder {
    states: Vec<State>,
    machines: Vec<Machine>,
}

impl GraphBuilder {
    pub(crate) fn new() -> Self {
        Self {
            states: Vec::new(),
            machines: Vec::new(),
        }
    }

    /// Adds a state with its entry actions. Transitions are attached
    /// afterwards, once every target handle exists.
    pub(crate) fn state(
        &mut self,
        name: impl Into<String>,
        gate: RoleGate,
        actions: Vec<Action>,
    ) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(State {
            name: name.into(),
            gate,
            actions,
            transitions: Vec::new(),
        });
        id
    }

    pub(crate) fn transition(&mut self, from: StateId, transition: Transition) {
        self.states[from.to_index()].transitions.push(transition);
    }

    pub(crate) fn machine(
        &mut self,
        name: impl Into<String>,
        initial: StateId,
        dispatch: Vec<Transition>,
        states: Vec<StateId>,
    ) {
        self.machines.push(Machine {
            name: name.into(),
            initial,
            dispatch,
            states,
        });
    }

    pub(crate) fn finish(
        self,
        registers: RegisterFile,
        plan: SchedulePlan,
        map: SyncRegisters,
    ) -> Automaton {
        Automaton {
            registers,
            states: self.states,
            machines: self.machines,
            plan,
            map,
        }
    }
}

/// Guards asserting that a bank of index registers holds `pattern`.
pub(crate) fn pattern_guards(registers: &[RegisterId], pattern: &[bool]) -> Vec<Guard> {
    debug_assert_eq!(registers.len(), pattern.len());
    registers
        .iter()
        .zip(pattern)
        .map(|(&register, &bit)| {
            if bit {
                Guard::IsTrue(register)
            } else {
                Guard::IsFalse(register)
            }
        })
        .collect()
}

/// Actions storing `pattern` into a bank of index registers.
pub(crate) fn pattern_actions(registers: &[RegisterId], pattern: &[bool]) -> Vec<Action> {
    debug_assert_eq!(registers.len(), pattern.len());
    registers
        .iter()
        .zip(pattern)
        .map(|(&register, &bit)| Action::Set {
            register,
            value: Value::Bool(bit),
        })
        .collect()
}

/// The per-axis bits of a three-axis branch index, X first.
pub(crate) fn axis_bits(branch: usize) -> [bool; 3] {
    debug_assert!(branch < 8);
    [branch & 1 != 0, branch & 2 != 0, branch & 4 != 0]
}

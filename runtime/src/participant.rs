use std::sync::Arc;

use aldis_shared::{
    Action, Automaton, MachineId, RegisterBank, Role, StateId, SyncRegisters, Trigger, Value,
};

/// One executing instance of an automaton: a register bank plus the
/// active state of every machine.
///
/// Per tick, each machine in declaration order scans its dispatch list
/// against a snapshot of the bank taken at tick start, falls back to the
/// active state's own transitions, and fires at most one transition,
/// applying the target's entry actions to the live bank immediately.
/// Guards therefore observe the previous tick's values while an earlier
/// machine's entry actions are visible to later machines the same tick.
pub struct Participant {
    automaton: Arc<Automaton>,
    role: Role,
    bank: RegisterBank,
    active: Vec<StateId>,
    dwell: Vec<u32>,
    desynced: Vec<bool>,
}

impl Participant {
    pub fn new(automaton: Arc<Automaton>, role: Role) -> Self {
        let mut bank = RegisterBank::new(Arc::new(automaton.registers.clone()));
        bank.set(automaton.map.is_local, Value::Bool(role.is_local()));

        let machine_count = automaton.machines.len();
        let mut participant = Self {
            active: Vec::with_capacity(machine_count),
            dwell: vec![0; machine_count],
            desynced: vec![false; machine_count],
            role,
            bank,
            automaton,
        };
        let automaton = participant.automaton.clone();
        for machine in &automaton.machines {
            participant.active.push(machine.initial);
            for action in &automaton.state(machine.initial).actions {
                apply(&mut participant.bank, action);
            }
        }
        participant
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn map(&self) -> &SyncRegisters {
        &self.automaton.map
    }

    pub fn bank(&self) -> &RegisterBank {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut RegisterBank {
        &mut self.bank
    }

    /// The active state of every machine, in machine declaration order.
    pub fn active_states(&self) -> &[StateId] {
        &self.active
    }

    pub fn active_state(&self, machine: MachineId) -> StateId {
        self.active[machine.to_index()]
    }

    /// Raises or lowers the wire enable toggle. Meaningful on the local
    /// participant; the link mirrors it to observers.
    pub fn set_enabled(&mut self, enabled: bool) {
        let register = self.automaton.map.enabled;
        self.bank.set(register, Value::Bool(enabled));
    }

    /// Advances every machine by one tick.
    pub fn tick(&mut self) {
        let automaton = self.automaton.clone();
        let snapshot = self.bank.clone();

        for (index, machine) in automaton.machines.iter().enumerate() {
            self.dwell[index] = self.dwell[index].saturating_add(1);
            let current = self.active[index];

            let mut fired = None;
            let mut matched = false;
            for transition in &machine.dispatch {
                let Trigger::Guards(guards) = &transition.trigger else {
                    continue;
                };
                if !guards.iter().all(|guard| guard.passes(&snapshot)) {
                    continue;
                }
                matched = true;
                if transition.target == current && !transition.reentrant {
                    continue;
                }
                fired = Some(transition.target);
                break;
            }

            if fired.is_none() {
                let state = automaton.state(current);
                for transition in &state.transitions {
                    let passes = match &transition.trigger {
                        Trigger::Guards(guards) => {
                            guards.iter().all(|guard| guard.passes(&snapshot))
                        }
                        Trigger::After(ticks) => self.dwell[index] >= *ticks,
                    };
                    if passes {
                        fired = Some(transition.target);
                        break;
                    }
                }
            }

            match fired {
                Some(target) => {
                    self.desynced[index] = false;
                    self.active[index] = target;
                    self.dwell[index] = 0;
                    let state = automaton.state(target);
                    log::trace!("{:?} {} -> {}", self.role, machine.name, state.name);
                    for action in &state.actions {
                        apply(&mut self.bank, action);
                    }
                }
                None => {
                    // A terminal state whose machine matched nothing is
                    // waiting for labels it does not know; it resumes on
                    // the next recognized pattern.
                    let state = automaton.state(current);
                    if !matched && state.transitions.is_empty() && !self.desynced[index] {
                        self.desynced[index] = true;
                        log::warn!(
                            "{:?} machine `{}` desynced in state `{}`",
                            self.role,
                            machine.name,
                            state.name
                        );
                    }
                }
            }
        }
    }
}

fn apply(bank: &mut RegisterBank, action: &Action) {
    match action {
        Action::Set { register, value } => bank.set(*register, *value),
        Action::Copy { from, to } => {
            let value = bank.value(*from);
            bank.set(*to, value);
        }
        Action::Remap {
            from,
            to,
            from_range,
            to_range,
        } => {
            let (lo, hi) = *from_range;
            let value = bank.float(*from).clamp(lo.min(hi), lo.max(hi));
            let unit = if hi == lo { 0.0 } else { (value - lo) / (hi - lo) };
            bank.set(*to, Value::Float(to_range.0 + unit * (to_range.1 - to_range.0)));
        }
        Action::Add { register, delta } => bank.add_float(*register, *delta),
    }
}

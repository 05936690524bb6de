use std::collections::HashMap;

use aldis_shared::{
    Action, Automaton, Guard, RegisterId, RegisterKind, RegisterScope, RoleGate, StateId,
    Transition, Trigger,
};

use crate::error::BuildError;

/// Statically checks a generated (or hand-built) automaton.
///
/// Four properties are proven over the graph, without executing it:
///
/// * every action and guard addresses registers of the kind it expects;
/// * wire registers are written only from `LocalOnly` states, so the
///   link's sender→receiver mirror has a single writer;
/// * no float register is written by two states of different machines
///   that can be active in the same participant and tick. Boolean
///   handshake registers are exempt: machines execute in declaration
///   order, so same-tick constant writes resolve deterministically;
/// * no machine's dispatch list carries two identical guard conjunctions,
///   which would shadow the later entry;
///
/// plus a sanity check that the schedule's step spans tile the frame.
pub fn verify(automaton: &Automaton) -> Result<(), BuildError> {
    check_frame_coverage(automaton)?;
    check_kinds(automaton)?;
    check_wire_writers(automaton)?;
    check_write_races(automaton)?;
    check_dispatch(automaton)?;
    Ok(())
}

fn check_frame_coverage(automaton: &Automaton) -> Result<(), BuildError> {
    let expected = automaton.plan.frame().width();
    let actual = automaton.plan.steps().spans().map(|span| span.len()).sum();
    if actual != expected {
        return Err(BuildError::IncompleteFrameCoverage { expected, actual });
    }
    Ok(())
}

fn check_kinds(automaton: &Automaton) -> Result<(), BuildError> {
    let file = &automaton.registers;
    let kind_of = |id: RegisterId| file.kind(id);

    for state in &automaton.states {
        for action in &state.actions {
            let offender = match action {
                Action::Set { register, value } => {
                    (kind_of(*register) != value.kind()).then_some(*register)
                }
                Action::Copy { from, to } => (kind_of(*from) != kind_of(*to)).then_some(*to),
                Action::Remap { from, to, .. } => (kind_of(*from) != RegisterKind::Float
                    || kind_of(*to) != RegisterKind::Float)
                    .then_some(*to),
                Action::Add { register, .. } => {
                    (kind_of(*register) != RegisterKind::Float).then_some(*register)
                }
            };
            if let Some(register) = offender {
                return Err(BuildError::KindMismatch {
                    state: state.name.clone(),
                    register: file.name(register).to_string(),
                });
            }
        }
        check_trigger_kinds(automaton, &state.name, &state.transitions)?;
    }
    for machine in &automaton.machines {
        let context = format!("{}/dispatch", machine.name);
        check_trigger_kinds(automaton, &context, &machine.dispatch)?;
    }
    Ok(())
}

fn check_trigger_kinds(
    automaton: &Automaton,
    context: &str,
    transitions: &[Transition],
) -> Result<(), BuildError> {
    let file = &automaton.registers;
    for transition in transitions {
        for guard in trigger_guards(&transition.trigger) {
            let expected = match guard {
                Guard::IsTrue(_) | Guard::IsFalse(_) => RegisterKind::Bool,
                Guard::Above(_, _) | Guard::Below(_, _) => RegisterKind::Float,
            };
            let register = guard.register();
            if file.kind(register) != expected {
                return Err(BuildError::KindMismatch {
                    state: context.to_string(),
                    register: file.name(register).to_string(),
                });
            }
        }
    }
    Ok(())
}

fn check_wire_writers(automaton: &Automaton) -> Result<(), BuildError> {
    let file = &automaton.registers;
    for state in &automaton.states {
        if state.gate == RoleGate::LocalOnly {
            continue;
        }
        for action in &state.actions {
            let register = action.writes();
            if file.def(register).scope == RegisterScope::Wire {
                return Err(BuildError::WireWriteOutsideLocal {
                    state: state.name.clone(),
                    register: file.name(register).to_string(),
                });
            }
        }
    }
    Ok(())
}

fn check_write_races(automaton: &Automaton) -> Result<(), BuildError> {
    let file = &automaton.registers;
    let dominators = dominating_guards(automaton);

    let mut writers: HashMap<RegisterId, Vec<(usize, StateId)>> = HashMap::new();
    for (index, machine) in automaton.machines.iter().enumerate() {
        for id in &machine.states {
            for action in &automaton.state(*id).actions {
                writers.entry(action.writes()).or_default().push((index, *id));
            }
        }
    }

    for (register, writers) in &writers {
        if file.kind(*register) != RegisterKind::Float {
            continue;
        }
        for (i, (machine_a, a)) in writers.iter().enumerate() {
            for (machine_b, b) in &writers[i + 1..] {
                if machine_a == machine_b {
                    continue;
                }
                let first = automaton.state(*a);
                let second = automaton.state(*b);
                if !first.gate.overlaps(second.gate) {
                    continue;
                }
                if mutually_exclusive(&dominators[a.to_index()], &dominators[b.to_index()]) {
                    continue;
                }
                return Err(BuildError::WriteRace {
                    register: file.name(*register).to_string(),
                    first: first.name.clone(),
                    second: second.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Guard conjunctions that hold on *every* path into each state: the meet
/// over incoming edges of the edge's guards plus the source's set.
/// Dispatch edges contribute their guards alone, since they can fire from
/// any state. A `None` entry means the state is unreachable.
///
/// Two states whose sets contain contradictory boolean guards can never
/// be entered under the same wire labels, which is how the per-object
/// chains publishing into shared registers are proven race-free.
fn dominating_guards(automaton: &Automaton) -> Vec<Option<Vec<Guard>>> {
    let mut dominators: Vec<Option<Vec<Guard>>> = vec![None; automaton.states.len()];
    for machine in &automaton.machines {
        // The initial state is entered unconditionally at construction.
        dominators[machine.initial.to_index()] = Some(Vec::new());
    }
    let mut changed = true;
    while changed {
        changed = false;
        for machine in &automaton.machines {
            for transition in &machine.dispatch {
                let candidate = trigger_guards(&transition.trigger).to_vec();
                changed |= meet(&mut dominators, transition.target, candidate);
            }
            for id in &machine.states {
                let Some(source) = dominators[id.to_index()].clone() else {
                    continue;
                };
                for transition in &automaton.state(*id).transitions {
                    let mut candidate = source.clone();
                    candidate.extend_from_slice(trigger_guards(&transition.trigger));
                    changed |= meet(&mut dominators, transition.target, candidate);
                }
            }
        }
    }
    dominators
}

fn meet(dominators: &mut [Option<Vec<Guard>>], target: StateId, candidate: Vec<Guard>) -> bool {
    let slot = &mut dominators[target.to_index()];
    match slot {
        None => {
            *slot = Some(candidate);
            true
        }
        Some(current) => {
            let before = current.len();
            current.retain(|guard| candidate.contains(guard));
            current.len() != before
        }
    }
}

fn mutually_exclusive(a: &Option<Vec<Guard>>, b: &Option<Vec<Guard>>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        // An unreachable state cannot participate in a race.
        return true;
    };
    a.iter().any(|guard| {
        let opposite = match guard {
            Guard::IsTrue(register) => Guard::IsFalse(*register),
            Guard::IsFalse(register) => Guard::IsTrue(*register),
            Guard::Above(_, _) | Guard::Below(_, _) => return false,
        };
        b.contains(&opposite)
    })
}

fn trigger_guards(trigger: &Trigger) -> &[Guard] {
    match trigger {
        Trigger::Guards(guards) => guards,
        Trigger::After(_) => &[],
    }
}

fn check_dispatch(automaton: &Automaton) -> Result<(), BuildError> {
    for machine in &automaton.machines {
        for (first, left) in machine.dispatch.iter().enumerate() {
            let Trigger::Guards(left_guards) = &left.trigger else {
                continue;
            };
            for (offset, right) in machine.dispatch[first + 1..].iter().enumerate() {
                let Trigger::Guards(right_guards) = &right.trigger else {
                    continue;
                };
                if left_guards == right_guards {
                    return Err(BuildError::DuplicateDispatchPattern {
                        machine: machine.name.clone(),
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }
    }
    Ok(())
}

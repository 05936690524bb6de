use aldis_shared::{Action, Guard, RoleGate, SchedulePlan, SyncRegisters, Transition, Value};

use crate::graph::{pattern_actions, pattern_guards, GraphBuilder};

/// Builds the bitwise transmission machine.
///
/// The send side walks the cycle slot by slot: each slot state holds its
/// data slice on the wire for the settle duration, then an advance state
/// relabels the wire with the next slot's indices and slice in a single
/// entry, so the far side never observes a torn slot. The receive side
/// mirrors each announced slice into staging and latches the whole frame
/// on the final step, kicking the decode chain.
///
/// Resync needs no handshake: the wire index registers name the slot, so
/// a receiver entering at any point follows along and has a complete
/// frame after one full turn per object.
pub(crate) fn build_machine(graph: &mut GraphBuilder, plan: &SchedulePlan, map: &SyncRegisters) {
    let cycle = plan.cycle();
    let steps = plan.steps();
    let object_count = cycle.object_count();
    let step_count = cycle.step_count();
    let slot_count = cycle.slot_count();

    let init = graph.state("sync/init", RoleGate::Any, Vec::new());
    let mut states = vec![init];
    let mut locals = Vec::with_capacity(slot_count);
    let mut remotes = Vec::with_capacity(slot_count);

    for slot in cycle.slots() {
        let o = slot.object;
        let s = slot.step;
        let next_object = (o + 1) % object_count;

        let mut actions = Vec::new();
        if s == step_count - 1 {
            // The next turn transmits the next object's frame; latch it
            // into the outgoing staging buffer now.
            for (bit, &from) in map.objects[next_object].frame_bits.iter().enumerate() {
                actions.push(Action::Copy {
                    from,
                    to: map.staging[bit],
                });
            }
        }
        if step_count - s == cycle.lead_steps() {
            // Kick the next object's encode chain ahead of its turn.
            actions.extend(pattern_actions(
                &map.pending_read,
                &cycle.object_pattern(next_object),
            ));
            actions.push(Action::Set {
                register: map.objects[next_object].start_read,
                value: Value::Bool(true),
            });
        }
        let local = graph.state(format!("sync/local/{o}/{s}"), RoleGate::LocalOnly, actions);

        let next_slot = (slot.slot + 1) % slot_count;
        let next_step = (s + 1) % step_count;
        let mut advance_actions =
            pattern_actions(&map.step_index, &cycle.step_pattern(next_step));
        advance_actions.extend(pattern_actions(
            &map.object_index,
            &cycle.object_pattern(next_slot / step_count),
        ));
        for (offset, bit) in steps.span(next_step).enumerate() {
            advance_actions.push(Action::Copy {
                from: map.staging[bit],
                to: map.data[offset],
            });
        }
        let advance = graph.state(
            format!("sync/local/{o}/{s}/advance"),
            RoleGate::LocalOnly,
            advance_actions,
        );
        graph.transition(local, Transition::after(cycle.wait_ticks(s), advance));

        let mut remote_actions = Vec::new();
        for (offset, bit) in steps.span(s).enumerate() {
            remote_actions.push(Action::Copy {
                from: map.data[offset],
                to: map.staging[bit],
            });
        }
        if s == step_count - 1 {
            for (bit, &to) in map.objects[o].frame_bits.iter().enumerate() {
                remote_actions.push(Action::Copy {
                    from: map.staging[bit],
                    to,
                });
            }
            remote_actions.push(Action::Set {
                register: map.objects[o].start_write,
                value: Value::Bool(true),
            });
        }
        let remote = graph.state(
            format!("sync/remote/{o}/{s}"),
            RoleGate::RemoteOnly,
            remote_actions,
        );

        states.extend([local, advance, remote]);
        locals.push((slot, local));
        remotes.push((slot, remote));
    }

    let mut dispatch = vec![Transition::when(vec![Guard::IsFalse(map.enabled)], init)];
    for (slot, local) in &locals {
        let mut guards = pattern_guards(&map.step_index, &cycle.step_pattern(slot.step));
        guards.extend(pattern_guards(
            &map.object_index,
            &cycle.object_pattern(slot.object),
        ));
        guards.push(Guard::IsTrue(map.is_local));
        guards.push(Guard::IsTrue(map.enabled));
        dispatch.push(Transition::when(guards, *local));
    }
    // Remote entries re-enter while the wire dwells on a slot, so a slice
    // that arrives late in the dwell is still mirrored.
    for (slot, remote) in &remotes {
        let mut guards = pattern_guards(&map.step_index, &cycle.step_pattern(slot.step));
        guards.extend(pattern_guards(
            &map.object_index,
            &cycle.object_pattern(slot.object),
        ));
        guards.push(Guard::IsFalse(map.is_local));
        guards.push(Guard::IsTrue(map.enabled));
        dispatch.push(Transition::when_reentrant(guards, *remote));
    }

    graph.machine("sync", init, dispatch, states);
}

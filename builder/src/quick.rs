use aldis_shared::{Action, Guard, RoleGate, SchedulePlan, SyncRegisters, Transition};

use crate::graph::{pattern_actions, pattern_guards, GraphBuilder};

/// Builds the quick-mode transmission machine, which publishes whole
/// analog values on the wire instead of serializing bits.
///
/// The publics settle on an object's transform while its slot dwells, so
/// each slot transmits the transform of the object *after* it: slot `o`
/// announces and carries object `o + 1`, and the measure adapter is
/// pointed two objects ahead when the slot advances. The receive side
/// applies whatever the wire currently announces; the display select
/// aliases the wire object index directly.
pub(crate) fn build_machine(graph: &mut GraphBuilder, plan: &SchedulePlan, map: &SyncRegisters) {
    let cycle = plan.cycle();
    let object_count = cycle.object_count();

    let init_actions = pattern_actions(&map.pending_read, &cycle.object_pattern(1 % object_count));
    let init = graph.state("sync/init", RoleGate::Any, init_actions);
    let mut states = vec![init];
    let mut locals = Vec::with_capacity(object_count);
    let mut remotes = Vec::with_capacity(object_count);

    for o in 0..object_count {
        let carried = (o + 1) % object_count;

        let hold = graph.state(format!("sync/local/{o}"), RoleGate::LocalOnly, Vec::new());

        let mut advance_actions =
            pattern_actions(&map.object_index, &cycle.object_pattern(carried));
        for a in 0..3 {
            if let Some(wire) = map.quick_position {
                advance_actions.push(Action::Copy {
                    from: map.position[a],
                    to: wire[a],
                });
            }
            if let (Some(sign), Some(wire)) = (map.position_sign, map.quick_position_sign) {
                advance_actions.push(Action::Copy {
                    from: sign[a],
                    to: wire[a],
                });
            }
            if let (Some(rotation), Some(wire)) = (map.rotation, map.quick_rotation) {
                advance_actions.push(Action::Copy {
                    from: rotation[a],
                    to: wire[a],
                });
            }
        }
        advance_actions.extend(pattern_actions(
            &map.pending_read,
            &cycle.object_pattern((o + 2) % object_count),
        ));
        let advance = graph.state(
            format!("sync/local/{o}/advance"),
            RoleGate::LocalOnly,
            advance_actions,
        );
        graph.transition(hold, Transition::after(cycle.wait_ticks(0), advance));

        let mut remote_actions = Vec::new();
        for a in 0..3 {
            if let Some(wire) = map.quick_position {
                remote_actions.push(Action::Copy {
                    from: wire[a],
                    to: map.position[a],
                });
            }
            if let (Some(wire), Some(sign)) = (map.quick_position_sign, map.position_sign) {
                remote_actions.push(Action::Copy {
                    from: wire[a],
                    to: sign[a],
                });
            }
            if let (Some(wire), Some(rotation)) = (map.quick_rotation, map.rotation) {
                remote_actions.push(Action::Copy {
                    from: wire[a],
                    to: rotation[a],
                });
            }
        }
        let remote = graph.state(
            format!("sync/remote/{o}"),
            RoleGate::RemoteOnly,
            remote_actions,
        );

        states.extend([hold, advance, remote]);
        locals.push((o, hold));
        remotes.push((o, remote));
    }

    let mut dispatch = vec![Transition::when(vec![Guard::IsFalse(map.enabled)], init)];
    for (o, hold) in &locals {
        let mut guards = pattern_guards(&map.object_index, &cycle.object_pattern(*o));
        guards.push(Guard::IsTrue(map.is_local));
        guards.push(Guard::IsTrue(map.enabled));
        dispatch.push(Transition::when(guards, *hold));
    }
    for (o, remote) in &remotes {
        let mut guards = pattern_guards(&map.object_index, &cycle.object_pattern(*o));
        guards.push(Guard::IsFalse(map.is_local));
        guards.push(Guard::IsTrue(map.enabled));
        dispatch.push(Transition::when_reentrant(guards, *remote));
    }

    graph.machine("sync", init, dispatch, states);
}

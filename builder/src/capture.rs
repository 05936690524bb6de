use aldis_shared::{
    Action, Guard, RegisterId, RoleGate, SchedulePlan, SyncRegisters, Transition, Value,
    SIGN_EPSILON, ZERO_EPSILON,
};

use crate::graph::{axis_bits, GraphBuilder};

/// Builds the capture machine, which folds the measure adapter's split
/// magnitude/sign channels into the public transform registers on the
/// sending side, continuously.
///
/// Per tick one branch state fires, chosen by the per-axis signs: eight
/// rotation branches keyed off the sign channels and eight position
/// branches keyed off which side channel is live. With rotation enabled
/// the two passes alternate through `set_stage`, so each component
/// refreshes every other tick.
pub(crate) fn build_machine(graph: &mut GraphBuilder, plan: &SchedulePlan, map: &SyncRegisters) {
    let config = plan.config();
    let quick = config.quick_sync;

    let idle = graph.state("capture/idle", RoleGate::Any, Vec::new());
    let mut states = vec![idle];
    let mut dispatch = vec![
        Transition::when(vec![Guard::IsFalse(map.enabled)], idle),
        Transition::when(vec![Guard::IsFalse(map.is_local)], idle),
    ];

    if let Some(rotation) = map.rotation {
        for branch in 0..8 {
            let pattern = axis_bits(branch);
            let mut actions: Vec<Action> = (0..3)
                .map(|a| fold_action(map.angle_magnitude[a], rotation[a], pattern[a]))
                .collect();
            actions.push(Action::Set {
                register: map.set_stage,
                value: Value::Bool(true),
            });
            let state = graph.state(
                format!("capture/rotation/{branch}"),
                RoleGate::LocalOnly,
                actions,
            );
            states.push(state);

            // The sign channel marks negative above center; the epsilon
            // band hands an exactly-centered channel to the positive
            // branch.
            let mut guards: Vec<Guard> = map
                .angle_sign
                .iter()
                .zip(pattern)
                .map(|(&sign, positive)| {
                    if positive {
                        Guard::Below(sign, 0.5 + SIGN_EPSILON)
                    } else {
                        Guard::Above(sign, 0.5)
                    }
                })
                .collect();
            guards.push(Guard::IsTrue(map.is_local));
            guards.push(Guard::IsFalse(map.set_stage));
            guards.push(Guard::IsTrue(map.enabled));
            dispatch.push(Transition::when_reentrant(guards, state));
        }
    }

    for branch in 0..8 {
        let pattern = axis_bits(branch);
        let mut actions = Vec::new();
        for a in 0..3 {
            let side = if pattern[a] {
                map.side_positive[a]
            } else {
                map.side_negative[a]
            };
            if quick {
                actions.push(Action::Copy {
                    from: side,
                    to: map.position[a],
                });
            } else {
                actions.push(fold_action(side, map.position[a], pattern[a]));
            }
        }
        if let Some(position_sign) = map.position_sign {
            for a in 0..3 {
                actions.push(Action::Set {
                    register: position_sign[a],
                    value: Value::Bool(pattern[a]),
                });
            }
        }
        if map.rotation.is_some() {
            actions.push(Action::Set {
                register: map.set_stage,
                value: Value::Bool(false),
            });
        }
        let state = graph.state(
            format!("capture/position/{branch}"),
            RoleGate::LocalOnly,
            actions,
        );
        states.push(state);

        let mut guards = Vec::with_capacity(9);
        for a in 0..3 {
            let (live, dead) = if pattern[a] {
                (map.side_positive[a], map.side_negative[a])
            } else {
                (map.side_negative[a], map.side_positive[a])
            };
            guards.push(Guard::Above(live, -ZERO_EPSILON));
            guards.push(Guard::Below(dead, ZERO_EPSILON));
        }
        guards.push(Guard::IsTrue(map.is_local));
        if map.rotation.is_some() {
            guards.push(Guard::IsTrue(map.set_stage));
        }
        guards.push(Guard::IsTrue(map.enabled));
        dispatch.push(Transition::when_reentrant(guards, state));
    }

    graph.machine("capture", idle, dispatch, states);
}

/// Folds a unit magnitude into the public register's half interval:
/// positive magnitudes stretch from center to 1, negative from center
/// to 0.
fn fold_action(from: RegisterId, to: RegisterId, positive: bool) -> Action {
    Action::Remap {
        from,
        to,
        from_range: (0.0, 1.0),
        to_range: (0.5, if positive { 1.0 } else { 0.0 }),
    }
}

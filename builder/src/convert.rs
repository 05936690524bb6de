use aldis_shared::{
    threshold, Action, Axis, FieldKind, Guard, RegisterId, RoleGate, SchedulePlan, SyncRegisters,
    Transition, Value, QUANTIZE_EPSILON,
};

use crate::graph::{axis_bits, pattern_guards, GraphBuilder};

/// Builds the per-object encode/decode machines.
///
/// Each machine converts one component (all three axes at once) between
/// its folded public value and its quantized frame bits by successive
/// approximation, one bit depth per tick, eight branch states per depth
/// for the 2^3 axis combinations.
///
/// One machine per object owns the handshake flags: the one converting
/// the deepest field, since it finishes last and can publish both
/// components atomically on decode completion.
pub(crate) fn build_machines(graph: &mut GraphBuilder, plan: &SchedulePlan, map: &SyncRegisters) {
    let config = plan.config();
    let position_owner =
        !config.rotation_enabled || config.position_bits >= config.rotation_bits;
    for o in 0..config.object_count {
        build_component(
            graph,
            plan,
            map,
            o,
            FieldKind::Position,
            config.position_bits,
            map.objects[o].accum_position,
            map.position,
            position_owner,
        );
        if let (Some(accum), Some(public)) = (map.objects[o].accum_rotation, map.rotation) {
            build_component(
                graph,
                plan,
                map,
                o,
                FieldKind::Rotation,
                config.rotation_bits,
                accum,
                public,
                !position_owner,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build_component(
    graph: &mut GraphBuilder,
    plan: &SchedulePlan,
    map: &SyncRegisters,
    o: usize,
    kind: FieldKind,
    bits: usize,
    accum: [RegisterId; 3],
    public: [RegisterId; 3],
    owner: bool,
) {
    let frame = plan.frame();
    let object = &map.objects[o];
    let name = format!("convert/{}/{o}", kind.name());

    // The owner's idle entry resets the handshake, so an abrupt disable
    // mid-chain cannot leave a stale kick pending for the next enable.
    let idle_actions = if owner {
        [
            object.start_read,
            object.start_write,
            object.read_in_progress,
            object.write_in_progress,
        ]
        .into_iter()
        .map(|register| Action::Set {
            register,
            value: Value::Bool(false),
        })
        .collect()
    } else {
        Vec::new()
    };
    let idle = graph.state(format!("{name}/idle"), RoleGate::Any, idle_actions);
    let mut states = vec![idle];

    // Encode chain: snapshot the folded publics, then peel one threshold
    // per tick into the frame bits.
    let mut start_read_actions: Vec<Action> = (0..3)
        .map(|a| Action::Copy {
            from: public[a],
            to: accum[a],
        })
        .collect();
    if owner {
        start_read_actions.push(Action::Set {
            register: object.read_in_progress,
            value: Value::Bool(true),
        });
    }
    let start_read = graph.state(
        format!("{name}/read/start"),
        RoleGate::LocalOnly,
        start_read_actions,
    );
    states.push(start_read);

    let mut read_levels: Vec<Vec<_>> = Vec::with_capacity(bits);
    for depth in 0..bits {
        let mut level = Vec::with_capacity(8);
        for branch in 0..8 {
            let pattern = axis_bits(branch);
            let mut actions = Vec::new();
            for (a, axis) in Axis::ALL.into_iter().enumerate() {
                let bit = frame.bit_index(kind, axis, depth);
                actions.push(Action::Set {
                    register: object.frame_bits[bit],
                    value: Value::Bool(pattern[a]),
                });
                if pattern[a] {
                    actions.push(Action::Add {
                        register: accum[a],
                        delta: -threshold(depth),
                    });
                }
            }
            level.push(graph.state(
                format!("{name}/read/{depth}/{branch}"),
                RoleGate::LocalOnly,
                actions,
            ));
        }
        states.extend(&level);
        read_levels.push(level);
    }

    let end_read_actions = if owner {
        vec![
            Action::Set {
                register: object.start_read,
                value: Value::Bool(false),
            },
            Action::Set {
                register: object.read_in_progress,
                value: Value::Bool(false),
            },
        ]
    } else {
        Vec::new()
    };
    let end_read = graph.state(
        format!("{name}/read/end"),
        RoleGate::LocalOnly,
        end_read_actions,
    );
    states.push(end_read);

    for branch in 0..8 {
        graph.transition(
            start_read,
            Transition::when(read_guards(&accum, 0, branch), read_levels[0][branch]),
        );
    }
    for depth in 0..bits {
        for branch in 0..8 {
            let from = read_levels[depth][branch];
            if depth + 1 < bits {
                for next in 0..8 {
                    graph.transition(
                        from,
                        Transition::when(
                            read_guards(&accum, depth + 1, next),
                            read_levels[depth + 1][next],
                        ),
                    );
                }
            } else {
                graph.transition(from, Transition::after(1, end_read));
            }
        }
    }
    graph.transition(
        end_read,
        Transition::when(vec![Guard::IsFalse(object.read_in_progress)], idle),
    );

    // Decode chain: rebuild the folded values from the latched frame bits.
    let mut start_write_actions: Vec<Action> = accum
        .iter()
        .map(|&register| Action::Set {
            register,
            value: Value::Float(0.0),
        })
        .collect();
    if owner {
        start_write_actions.push(Action::Set {
            register: object.write_in_progress,
            value: Value::Bool(true),
        });
        for (latch, wire) in object.object_latch.iter().zip(&map.object_index) {
            start_write_actions.push(Action::Copy {
                from: *wire,
                to: *latch,
            });
        }
    }
    let start_write = graph.state(
        format!("{name}/write/start"),
        RoleGate::RemoteOnly,
        start_write_actions,
    );
    states.push(start_write);

    let mut write_levels: Vec<Vec<_>> = Vec::with_capacity(bits);
    for depth in 0..bits {
        let mut level = Vec::with_capacity(8);
        for branch in 0..8 {
            let pattern = axis_bits(branch);
            let mut actions = Vec::new();
            for (a, set) in pattern.into_iter().enumerate() {
                if set {
                    actions.push(Action::Add {
                        register: accum[a],
                        delta: threshold(depth),
                    });
                }
            }
            level.push(graph.state(
                format!("{name}/write/{depth}/{branch}"),
                RoleGate::RemoteOnly,
                actions,
            ));
        }
        states.extend(&level);
        write_levels.push(level);
    }

    let mut end_write_actions = Vec::new();
    if owner {
        end_write_actions.push(Action::Set {
            register: object.start_write,
            value: Value::Bool(false),
        });
        end_write_actions.push(Action::Set {
            register: object.write_in_progress,
            value: Value::Bool(false),
        });
        // The owner finishes last, so both components' accumulators are
        // settled and the publics update in one tick.
        for a in 0..3 {
            end_write_actions.push(Action::Copy {
                from: object.accum_position[a],
                to: map.position[a],
            });
        }
        if let (Some(accum_rotation), Some(rotation)) = (object.accum_rotation, map.rotation) {
            for a in 0..3 {
                end_write_actions.push(Action::Copy {
                    from: accum_rotation[a],
                    to: rotation[a],
                });
            }
        }
        for (latch, display) in object.object_latch.iter().zip(&map.display_object) {
            end_write_actions.push(Action::Copy {
                from: *latch,
                to: *display,
            });
        }
    }
    let end_write = graph.state(
        format!("{name}/write/end"),
        RoleGate::RemoteOnly,
        end_write_actions,
    );
    states.push(end_write);

    for branch in 0..8 {
        graph.transition(
            start_write,
            Transition::when(
                write_guards(frame, object, kind, 0, branch),
                write_levels[0][branch],
            ),
        );
    }
    for depth in 0..bits {
        for branch in 0..8 {
            let from = write_levels[depth][branch];
            if depth + 1 < bits {
                for next in 0..8 {
                    graph.transition(
                        from,
                        Transition::when(
                            write_guards(frame, object, kind, depth + 1, next),
                            write_levels[depth + 1][next],
                        ),
                    );
                }
            } else {
                graph.transition(from, Transition::after(1, end_write));
            }
        }
    }
    graph.transition(
        end_write,
        Transition::when(vec![Guard::IsFalse(object.write_in_progress)], idle),
    );

    // Kicks wait for the object's turn on the wire, so the publics the
    // encode snapshots have settled on this object's transform.
    let pattern = plan.cycle().object_pattern(o);
    let mut read_kick = pattern_guards(&map.object_index, &pattern);
    read_kick.push(Guard::IsTrue(object.start_read));
    read_kick.push(Guard::IsTrue(map.is_local));
    graph.transition(idle, Transition::when(read_kick, start_read));
    let mut write_kick = pattern_guards(&map.object_index, &pattern);
    write_kick.push(Guard::IsTrue(object.start_write));
    write_kick.push(Guard::IsFalse(map.is_local));
    graph.transition(idle, Transition::when(write_kick, start_write));

    let dispatch = vec![Transition::when(vec![Guard::IsFalse(map.enabled)], idle)];
    graph.machine(name, idle, dispatch, states);
}

/// Guards selecting the branch whose set axes still hold at least the
/// depth's threshold. The epsilon band biases exact-threshold remainders
/// toward the cleared branch, which is declared first.
fn read_guards(accum: &[RegisterId; 3], depth: usize, branch: usize) -> Vec<Guard> {
    let step = threshold(depth);
    accum
        .iter()
        .zip(axis_bits(branch))
        .map(|(&register, set)| {
            if set {
                Guard::Above(register, step * (1.0 - QUANTIZE_EPSILON))
            } else {
                Guard::Below(register, step * (1.0 + QUANTIZE_EPSILON))
            }
        })
        .collect()
}

fn write_guards(
    frame: &aldis_shared::FrameLayout,
    object: &aldis_shared::ObjectRegisters,
    kind: FieldKind,
    depth: usize,
    branch: usize,
) -> Vec<Guard> {
    Axis::ALL
        .into_iter()
        .zip(axis_bits(branch))
        .map(|(axis, set)| {
            let bit = object.frame_bits[frame.bit_index(kind, axis, depth)];
            if set {
                Guard::IsTrue(bit)
            } else {
                Guard::IsFalse(bit)
            }
        })
        .collect()
}

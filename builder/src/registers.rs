use aldis_shared::{
    index_pattern, Axis, ObjectRegisters, RegisterFile, RegisterId, RegisterScope, SchedulePlan,
    SyncRegisters,
};

const INTERNAL: RegisterScope = RegisterScope::Internal;
const WIRE: RegisterScope = RegisterScope::Wire;

/// Allocates every register the generated graph wires through and returns
/// the typed map the machines, agents, and tests address them by.
///
/// Wire step registers default to the pattern of the last step, so the
/// first buffered advance the sender performs lands on step 0. Public
/// folded values default to 0.5, the folded origin.
pub(crate) fn allocate(plan: &SchedulePlan) -> (RegisterFile, SyncRegisters) {
    let config = plan.config();
    let cycle = plan.cycle();
    let quick = config.quick_sync;
    let width = plan.frame().width();
    let mut file = RegisterFile::new();

    let is_local = file.add_bool("is_local", INTERNAL, false);
    let enabled = file.add_bool("enabled", WIRE, true);
    let set_stage = file.add_bool("set_stage", INTERNAL, false);

    let angle_magnitude =
        per_axis(|axis| file.add_float(format!("measure/angle_mag/{}", axis.letter()), INTERNAL, 0.0));
    let angle_sign =
        per_axis(|axis| file.add_float(format!("measure/angle_sign/{}", axis.letter()), INTERNAL, 0.0));
    let side_positive =
        per_axis(|axis| file.add_float(format!("measure/side_pos/{}", axis.letter()), INTERNAL, 0.0));
    let side_negative =
        per_axis(|axis| file.add_float(format!("measure/side_neg/{}", axis.letter()), INTERNAL, 0.0));

    // Quick mode publics carry a plain magnitude plus a sign flag; bitwise
    // publics carry the folded value with the sign in the upper/lower half.
    let position = per_axis(|axis| {
        let default = if quick { 0.0 } else { 0.5 };
        file.add_float(format!("public/position/{}", axis.letter()), INTERNAL, default)
    });
    let position_sign = quick.then(|| {
        per_axis(|axis| {
            file.add_bool(format!("public/position_sign/{}", axis.letter()), INTERNAL, true)
        })
    });
    let rotation = config.rotation_enabled.then(|| {
        per_axis(|axis| file.add_float(format!("public/rotation/{}", axis.letter()), INTERNAL, 0.5))
    });

    let last_step = index_pattern(plan.steps().step_count() - 1, cycle.step_index_registers());
    let step_index: Vec<RegisterId> = (0..cycle.step_index_registers())
        .map(|bit| file.add_bool(format!("wire/step/{bit}"), WIRE, last_step[bit]))
        .collect();
    let object_index: Vec<RegisterId> = (0..cycle.object_index_registers())
        .map(|bit| file.add_bool(format!("wire/object/{bit}"), WIRE, false))
        .collect();

    let data: Vec<RegisterId> = if quick {
        Vec::new()
    } else {
        (0..plan.steps().data_width())
            .map(|bit| file.add_bool(format!("wire/data/{bit}"), WIRE, false))
            .collect()
    };

    let pending_read: Vec<RegisterId> = (0..cycle.object_index_registers())
        .map(|bit| file.add_bool(format!("pending_read/{bit}"), INTERNAL, false))
        .collect();

    let staging: Vec<RegisterId> = if quick {
        Vec::new()
    } else {
        (0..width)
            .map(|bit| file.add_bool(format!("staging/{bit}"), INTERNAL, false))
            .collect()
    };

    let quick_position = quick.then(|| {
        per_axis(|axis| file.add_float(format!("wire/position/{}", axis.letter()), WIRE, 0.0))
    });
    let quick_position_sign = quick.then(|| {
        per_axis(|axis| file.add_bool(format!("wire/position_sign/{}", axis.letter()), WIRE, true))
    });
    let quick_rotation = (quick && config.rotation_enabled).then(|| {
        per_axis(|axis| file.add_float(format!("wire/rotation/{}", axis.letter()), WIRE, 0.5))
    });

    let objects: Vec<ObjectRegisters> = if quick {
        Vec::new()
    } else {
        (0..config.object_count)
            .map(|o| allocate_object(&mut file, plan, o))
            .collect()
    };

    // In quick mode the receiver applies values for whichever object the
    // wire currently announces, so the display select aliases the wire
    // object index instead of a decode-completion latch.
    let display_object: Vec<RegisterId> = if quick {
        object_index.clone()
    } else {
        (0..cycle.object_index_registers())
            .map(|bit| file.add_bool(format!("display/object/{bit}"), INTERNAL, false))
            .collect()
    };

    let map = SyncRegisters {
        is_local,
        enabled,
        set_stage,
        angle_magnitude,
        angle_sign,
        side_positive,
        side_negative,
        position,
        position_sign,
        rotation,
        step_index,
        object_index,
        data,
        pending_read,
        display_object,
        staging,
        quick_position,
        quick_position_sign,
        quick_rotation,
        objects,
    };
    (file, map)
}

fn allocate_object(file: &mut RegisterFile, plan: &SchedulePlan, o: usize) -> ObjectRegisters {
    let config = plan.config();
    let width = plan.frame().width();
    let start_read = file.add_bool(format!("obj/{o}/start_read"), INTERNAL, false);
    let start_write = file.add_bool(format!("obj/{o}/start_write"), INTERNAL, false);
    let read_in_progress = file.add_bool(format!("obj/{o}/read_in_progress"), INTERNAL, false);
    let write_in_progress = file.add_bool(format!("obj/{o}/write_in_progress"), INTERNAL, false);
    let accum_position =
        per_axis(|axis| file.add_float(format!("obj/{o}/accum/position/{}", axis.letter()), INTERNAL, 0.0));
    let accum_rotation = config.rotation_enabled.then(|| {
        per_axis(|axis| file.add_float(format!("obj/{o}/accum/rotation/{}", axis.letter()), INTERNAL, 0.0))
    });
    let frame_bits: Vec<RegisterId> = (0..width)
        .map(|bit| file.add_bool(format!("obj/{o}/bits/{bit}"), INTERNAL, false))
        .collect();
    let object_latch: Vec<RegisterId> = (0..plan.cycle().object_index_registers())
        .map(|bit| file.add_bool(format!("obj/{o}/object_latch/{bit}"), INTERNAL, false))
        .collect();
    ObjectRegisters {
        start_read,
        start_write,
        read_in_progress,
        write_in_progress,
        accum_position,
        accum_rotation,
        frame_bits,
        object_latch,
    }
}

fn per_axis(mut allocate: impl FnMut(Axis) -> RegisterId) -> [RegisterId; 3] {
    Axis::ALL.map(&mut allocate)
}

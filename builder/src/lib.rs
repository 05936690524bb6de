//! # Aldis Builder
//! Generates the sync automaton from a validated configuration: allocates
//! the register table, materializes the transmission, conversion, and
//! capture machines over the computed schedule, and statically verifies
//! the result before handing it to the runtime.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod capture;
mod convert;
mod error;
mod graph;
mod quick;
mod registers;
mod sync;
mod verify;

pub use error::BuildError;
pub use verify::verify;

use aldis_shared::{Automaton, SchedulePlan, SyncConfig};

/// Builds the complete automaton for `config`.
///
/// The machine list is ordered so that within a tick the conversion
/// chains observe handshake flags first, the transmission machine labels
/// the wire next, and capture refreshes the publics last.
pub fn build(config: &SyncConfig) -> Result<Automaton, BuildError> {
    let plan = SchedulePlan::try_new(config)?;
    let (file, map) = registers::allocate(&plan);

    let mut graph = graph::GraphBuilder::new();
    if config.quick_sync {
        quick::build_machine(&mut graph, &plan, &map);
    } else {
        convert::build_machines(&mut graph, &plan, &map);
        sync::build_machine(&mut graph, &plan, &map);
    }
    capture::build_machine(&mut graph, &plan, &map);

    let cost = plan.cost();
    let automaton = graph.finish(file, plan, map);
    verify::verify(&automaton)?;
    log::info!(
        "generated automaton: {} states in {} machines, {} wire bits, {} ticks per cycle",
        automaton.state_count(),
        automaton.machines.len(),
        cost.wire_bits,
        cost.cycle_ticks,
    );
    Ok(automaton)
}

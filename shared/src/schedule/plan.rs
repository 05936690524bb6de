use crate::config::{ConfigError, SyncConfig};
use crate::constants::ANALOG_CHANNEL_BITS;
use crate::schedule::{CostReport, CyclePlan, FrameLayout, StepPlan};

/// Everything the graph generator needs to know about timing and layout,
/// computed once from a validated configuration.
///
/// In quick mode the frame is never bit-serialized, so the step plan
/// collapses to a single step and the cycle walks objects directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulePlan {
    config: SyncConfig,
    frame: FrameLayout,
    steps: StepPlan,
    cycle: CyclePlan,
}

impl SchedulePlan {
    pub fn try_new(config: &SyncConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let frame = FrameLayout::new(config);
        let steps = if config.quick_sync {
            StepPlan::new(frame.width(), frame.width())
        } else {
            StepPlan::new(frame.width(), config.channel_width)
        };
        let cycle = CyclePlan::new(
            config.object_count,
            steps.step_count(),
            config.settle_ticks,
            config.max_field_bits(),
        );
        log::debug!(
            "planned schedule: {}-bit frame in {} steps, {} ticks per cycle",
            frame.width(),
            steps.step_count(),
            cycle.cycle_ticks(),
        );
        Ok(Self {
            config: config.clone(),
            frame,
            steps,
            cycle,
        })
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn frame(&self) -> &FrameLayout {
        &self.frame
    }

    pub fn steps(&self) -> &StepPlan {
        &self.steps
    }

    pub fn cycle(&self) -> &CyclePlan {
        &self.cycle
    }

    /// Channel usage and latency totals for this schedule.
    pub fn cost(&self) -> CostReport {
        let index_booleans =
            self.cycle.object_index_registers() + self.cycle.step_index_registers();
        let (wire_booleans, wire_analogs, full_sync_ticks) = if self.config.quick_sync {
            let booleans = self.cycle.object_index_registers() + 3 + 1;
            let analogs = if self.config.rotation_enabled { 6 } else { 3 };
            (booleans, analogs, self.cycle.cycle_ticks())
        } else {
            let booleans = self.steps.data_width() + index_booleans + 1;
            let latency = self.cycle.cycle_ticks() + 2 * self.cycle.conversion_ticks();
            (booleans, 0, latency)
        };
        CostReport {
            wire_booleans,
            wire_analogs,
            wire_bits: wire_booleans + ANALOG_CHANNEL_BITS * wire_analogs,
            cycle_ticks: self.cycle.cycle_ticks(),
            full_sync_ticks,
        }
    }
}

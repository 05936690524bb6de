mod cost;
mod cycle;
mod frame;
mod plan;
mod step;

pub use cost::CostReport;
pub use cycle::{index_pattern, index_register_count, CyclePlan, CycleSlot};
pub use frame::{Axis, Field, FieldKind, FrameLayout};
pub use plan::SchedulePlan;
pub use step::StepPlan;

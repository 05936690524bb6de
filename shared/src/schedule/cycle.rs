use crate::constants::CONVERT_TICKS_PER_BIT_NUM;

/// Number of boolean registers needed to label `count` distinct values.
pub fn index_register_count(count: usize) -> usize {
    if count <= 1 {
        return 0;
    }
    let mut bits = 1;
    while (1usize << bits) < count {
        bits += 1;
    }
    bits
}

/// The register values labelling `value`, least significant bit first.
pub fn index_pattern(value: usize, registers: usize) -> Vec<bool> {
    debug_assert!(registers == 0 || value < (1usize << registers));
    (0..registers).map(|bit| value & (1 << bit) != 0).collect()
}

/// One slot of the transmission cycle: object `object` is on the wire,
/// carrying step `step` of its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSlot {
    pub slot: usize,
    pub object: usize,
    pub step: usize,
}

/// Timing of the round-robin transmission cycle.
///
/// Objects take turns on the wire; each turn walks the object's frame one
/// step at a time, holding every step for the settle duration so the far
/// side can observe it. Encoding a frame takes longer than one slot, so the
/// sender starts converting the next frame `lead_steps` slots before its
/// turn. When the channel is so wide that even a full turn is shorter than
/// the conversion, the first slot of each turn is stretched instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePlan {
    object_count: usize,
    step_count: usize,
    settle_ticks: u32,
    conversion_ticks: u32,
    lead_steps: usize,
    first_wait: u32,
    delay_first: bool,
    object_index_registers: usize,
    step_index_registers: usize,
}

impl CyclePlan {
    pub fn new(
        object_count: usize,
        step_count: usize,
        settle_ticks: u32,
        max_field_bits: usize,
    ) -> Self {
        let conversion_ticks =
            (CONVERT_TICKS_PER_BIT_NUM * max_field_bits as u32).div_ceil(2);
        let raw_lead = conversion_ticks.div_ceil(settle_ticks) as usize;
        let (lead_steps, first_wait, delay_first) = if raw_lead > step_count {
            (step_count, conversion_ticks.max(settle_ticks), true)
        } else {
            (raw_lead.max(1), settle_ticks, false)
        };
        Self {
            object_count,
            step_count,
            settle_ticks,
            conversion_ticks,
            lead_steps,
            first_wait,
            delay_first,
            object_index_registers: index_register_count(object_count),
            step_index_registers: index_register_count(step_count),
        }
    }

    pub fn object_count(&self) -> usize {
        self.object_count
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn slot_count(&self) -> usize {
        self.object_count * self.step_count
    }

    /// Every slot of one full cycle in transmission order.
    pub fn slots(&self) -> impl Iterator<Item = CycleSlot> + '_ {
        (0..self.slot_count()).map(|slot| CycleSlot {
            slot,
            object: slot / self.step_count,
            step: slot % self.step_count,
        })
    }

    pub fn object_index_registers(&self) -> usize {
        self.object_index_registers
    }

    pub fn step_index_registers(&self) -> usize {
        self.step_index_registers
    }

    pub fn object_pattern(&self, object: usize) -> Vec<bool> {
        index_pattern(object, self.object_index_registers)
    }

    pub fn step_pattern(&self, step: usize) -> Vec<bool> {
        index_pattern(step, self.step_index_registers)
    }

    /// Ticks a slot holds its step on the wire before advancing.
    pub fn wait_ticks(&self, step: usize) -> u32 {
        if self.delay_first && step == 0 {
            self.first_wait
        } else {
            self.settle_ticks
        }
    }

    /// Duration of a regular slot: the wait plus the advancing tick.
    pub fn slot_ticks(&self) -> u32 {
        self.settle_ticks + 1
    }

    /// Duration of one full cycle over all objects and steps.
    pub fn cycle_ticks(&self) -> u32 {
        self.slots().map(|slot| self.wait_ticks(slot.step) + 1).sum()
    }

    /// Ticks the bit-serial converter needs to encode or decode the widest
    /// field of a frame.
    pub fn conversion_ticks(&self) -> u32 {
        self.conversion_ticks
    }

    /// Slots before its turn at which the sender starts encoding an
    /// object's next frame.
    pub fn lead_steps(&self) -> usize {
        self.lead_steps
    }

    /// Whether the first slot of each turn is stretched to cover the
    /// conversion instead of leading it.
    pub fn delay_first(&self) -> bool {
        self.delay_first
    }
}

use std::ops::Range;

/// Division of a frame of `width` bits into steps of at most `channel_width`
/// bits each. The final step may carry fewer bits than the channel allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    width: usize,
    channel_width: usize,
    step_count: usize,
}

impl StepPlan {
    pub fn new(width: usize, channel_width: usize) -> Self {
        debug_assert!(channel_width > 0);
        let step_count = width.div_ceil(channel_width);
        Self {
            width,
            channel_width,
            step_count,
        }
    }

    /// Number of steps S needed to move the whole frame.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Frame width W in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The frame bit range carried by one step.
    pub fn span(&self, step: usize) -> Range<usize> {
        debug_assert!(step < self.step_count);
        let start = step * self.channel_width;
        let end = ((step + 1) * self.channel_width).min(self.width);
        start..end
    }

    pub fn spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.step_count).map(|step| self.span(step))
    }

    /// Number of data registers the channel needs: the widest span.
    pub fn data_width(&self) -> usize {
        self.width.min(self.channel_width)
    }
}

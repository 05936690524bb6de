use crate::participant::Participant;

/// The channel between two participants: mirrors every wire-scoped
/// register from the sender's bank into the receiver's, once per tick.
///
/// The lossy variant drops whole ticks, which models the real channel's
/// failure mode: the receiver keeps observing the previous tick's labels
/// and values, it never sees a torn subset of them.
pub struct Link {
    drop_rate: f32,
    rng: fastrand::Rng,
}

impl Link {
    /// A link that delivers every tick.
    pub fn perfect() -> Self {
        Self {
            drop_rate: 0.0,
            rng: fastrand::Rng::new(),
        }
    }

    /// A link that drops each tick with probability `drop_rate`, seeded
    /// for reproducibility.
    pub fn lossy(drop_rate: f32, seed: u64) -> Self {
        Self {
            drop_rate: drop_rate.clamp(0.0, 1.0),
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Mirrors the sender's wire registers into the receiver, unless this
    /// tick is dropped.
    pub fn transfer(&mut self, sender: &Participant, receiver: &mut Participant) {
        if self.drop_rate > 0.0 && self.rng.f32() < self.drop_rate {
            return;
        }
        for &id in sender.automaton().registers.wire_ids() {
            let value = sender.bank().value(id);
            receiver.bank_mut().set(id, value);
        }
    }
}

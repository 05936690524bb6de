use aldis_shared::{unfold, RegisterBank, RegisterId, Value, ROTATION_RANGE};

use crate::participant::Participant;

/// Where the local participant's transforms come from: the game object,
/// a physics rig, or a test script.
pub trait TransformSource {
    /// Current position (world units) and rotation (signed degrees, per
    /// axis) of one synced object.
    fn read_transform(&mut self, object: usize) -> ([f32; 3], [f32; 3]);
}

/// Where an observing participant's decoded transforms go.
pub trait TransformSink {
    fn apply_transform(&mut self, object: usize, position: [f32; 3], rotation: [f32; 3]);
}

/// Feeds the measure registers of a local participant from a
/// [`TransformSource`], splitting each component the way the capture
/// machine expects: positions into per-side magnitude channels, rotations
/// into a magnitude plus a sign channel marking negative above center.
///
/// Pump before the participant's tick, so the capture branches fire on
/// this tick's measurements.
pub struct LocalAgent<S> {
    source: S,
}

impl<S: TransformSource> LocalAgent<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn pump(&mut self, participant: &mut Participant) {
        let object = pattern_value(participant.bank(), &participant.map().pending_read);
        let range = participant.automaton().plan.config().max_range;
        let (position, rotation) = self.source.read_transform(object);

        let map = participant.map().clone();
        let bank = participant.bank_mut();
        for a in 0..3 {
            let unit = (position[a].abs() / range).clamp(0.0, 1.0);
            let (positive, negative) = if position[a] < 0.0 {
                (0.0, unit)
            } else {
                (unit, 0.0)
            };
            bank.set(map.side_positive[a], Value::Float(positive));
            bank.set(map.side_negative[a], Value::Float(negative));

            let magnitude = (rotation[a].abs() / ROTATION_RANGE).clamp(0.0, 1.0);
            bank.set(map.angle_magnitude[a], Value::Float(magnitude));
            let sign = if rotation[a] < 0.0 { 1.0 } else { 0.0 };
            bank.set(map.angle_sign[a], Value::Float(sign));
        }
    }
}

/// Drives a [`TransformSink`] from the public registers of an observing
/// participant, unfolding them back into world units, with optional
/// exponential smoothing toward each newly decoded target.
///
/// Pump after the participant's tick, so a decode that completed this
/// tick is applied the same tick.
pub struct RemoteAgent<K> {
    sink: K,
    damping: f32,
    smoothed: Vec<Option<([f32; 3], [f32; 3])>>,
}

impl<K: TransformSink> RemoteAgent<K> {
    pub fn new(sink: K) -> Self {
        Self::with_damping(sink, 0.0)
    }

    /// `damping` in `[0, 1)`: per pump, the applied transform moves by
    /// `1 - damping` of its remaining distance to the decoded target.
    /// Zero applies targets directly.
    pub fn with_damping(sink: K, damping: f32) -> Self {
        Self {
            sink,
            damping: damping.clamp(0.0, 1.0),
            smoothed: Vec::new(),
        }
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn pump(&mut self, participant: &Participant) {
        let map = participant.map();
        let bank = participant.bank();
        if !bank.bool(map.enabled) {
            return;
        }
        let config = participant.automaton().plan.config();
        let object = pattern_value(bank, &map.display_object);
        if object >= config.object_count {
            // Index patterns above the object count label nothing.
            return;
        }

        let mut position = [0.0f32; 3];
        let mut rotation = [0.0f32; 3];
        for a in 0..3 {
            position[a] = if let Some(sign) = map.position_sign {
                let magnitude = bank.float(map.position[a]) * config.max_range;
                if bank.bool(sign[a]) {
                    magnitude
                } else {
                    -magnitude
                }
            } else {
                unfold(bank.float(map.position[a]), config.max_range)
            };
            if let Some(folded) = map.rotation {
                rotation[a] = unfold(bank.float(folded[a]), ROTATION_RANGE);
            }
        }

        if self.smoothed.len() < config.object_count {
            self.smoothed.resize(config.object_count, None);
        }
        let applied = match &mut self.smoothed[object] {
            Some((current_position, current_rotation)) if self.damping > 0.0 => {
                let gain = 1.0 - self.damping;
                for a in 0..3 {
                    current_position[a] += (position[a] - current_position[a]) * gain;
                    current_rotation[a] += (rotation[a] - current_rotation[a]) * gain;
                }
                (*current_position, *current_rotation)
            }
            slot => {
                *slot = Some((position, rotation));
                (position, rotation)
            }
        };
        self.sink.apply_transform(object, applied.0, applied.1);
    }
}

/// Reads a bank of index registers back into the value they label,
/// least significant register first.
pub fn pattern_value(bank: &RegisterBank, registers: &[RegisterId]) -> usize {
    registers
        .iter()
        .enumerate()
        .fold(0, |value, (bit, &register)| {
            value | ((bank.bool(register) as usize) << bit)
        })
}

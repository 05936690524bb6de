/// The encode chain a built automaton runs tick by tick lands on the same
/// frame bits as the reference quantizer, up to the threshold bias the
/// generated guards apply at exact bucket boundaries.

use std::sync::Arc;

use aldis_builder::build;
use aldis_runtime::{LocalAgent, Participant};
use aldis_shared::{
    dequantize, fold, quantize, Axis, FieldKind, Role, SyncConfig, ROTATION_RANGE,
};
use aldis_test::ScriptedSource;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Runs a lone sender until its frame registers have settled, then reads
/// one field's bits out of the frame register bank.
struct Sender {
    automaton: Arc<aldis_shared::Automaton>,
    local: Participant,
    agent: LocalAgent<ScriptedSource>,
}

impl Sender {
    fn new(config: &SyncConfig) -> Self {
        let automaton = Arc::new(build(config).expect("config must build"));
        let local = Participant::new(automaton.clone(), Role::Local);
        let mut source = ScriptedSource::new(config.object_count);
        source.set(0, [0.0; 3], [0.0; 3]);
        Self {
            automaton,
            local,
            agent: LocalAgent::new(source),
        }
    }

    fn set_transform(&mut self, position: [f32; 3], rotation: [f32; 3]) {
        self.agent.source_mut().set(0, position, rotation);
    }

    fn settle(&mut self) {
        let ticks = 4 * self.automaton.plan.cycle().cycle_ticks() as usize;
        for _ in 0..ticks {
            self.agent.pump(&mut self.local);
            self.local.tick();
        }
    }

    fn field_bits(&self, kind: FieldKind, axis: Axis) -> Vec<bool> {
        let slot = self.automaton.plan.frame().slot(kind, axis);
        let frame = &self.automaton.map.objects[0].frame_bits;
        slot.map(|bit| self.local.bank().bool(frame[bit])).collect()
    }
}

#[test]
fn mid_bucket_positions_match_the_reference_quantizer() {
    init_logging();
    let config = SyncConfig::default();
    let mut sender = Sender::new(&config);
    // None of these folded values sit near a bucket boundary at any depth,
    // so the guard bias never diverges from the exact comparison.
    let position = [37.3, -81.57, 0.42];
    sender.set_transform(position, [0.0; 3]);
    sender.settle();

    for (axis, value) in Axis::ALL.into_iter().zip(position) {
        let expected = quantize(fold(value, config.max_range), config.position_bits);
        assert_eq!(
            sender.field_bits(FieldKind::Position, axis),
            expected,
            "axis {axis:?} value {value}"
        );
    }
}

#[test]
fn mid_bucket_rotations_match_the_reference_quantizer() {
    init_logging();
    let config = SyncConfig::default();
    let mut sender = Sender::new(&config);
    let rotation = [123.4, -7.89, 44.44];
    sender.set_transform([0.0; 3], rotation);
    sender.settle();

    for (axis, value) in Axis::ALL.into_iter().zip(rotation) {
        let expected = quantize(fold(value, ROTATION_RANGE), config.rotation_bits);
        assert_eq!(
            sender.field_bits(FieldKind::Rotation, axis),
            expected,
            "axis {axis:?} value {value}"
        );
    }
}

#[test]
fn boundary_values_take_the_lower_bucket() {
    init_logging();
    let config = SyncConfig::default();
    let mut sender = Sender::new(&config);
    // fold(64, 128) = 0.75 lands exactly on the depth-1 threshold. The
    // guard bias sends depth 1 to the "0" branch, after which the full
    // remaining threshold cascades into ones: one bucket below 0.75.
    sender.set_transform([64.0, 0.0, 0.0], [0.0; 3]);
    sender.settle();

    let bits = sender.field_bits(FieldKind::Position, Axis::X);
    let mut expected = vec![true; config.position_bits];
    expected[1] = false;
    assert_eq!(bits, expected);

    let decoded = dequantize(&bits);
    let bucket = 0.5f32.powi(config.position_bits as i32);
    assert!(decoded <= 0.75);
    assert!(0.75 - decoded <= bucket + 1e-6);
}

#[test]
fn every_field_decodes_within_one_bucket() {
    init_logging();
    let config = SyncConfig::default();
    let mut sender = Sender::new(&config);
    let position = [119.0, -0.3, 55.5];
    let rotation = [1.0, 179.9, -135.0];
    sender.set_transform(position, rotation);
    sender.settle();

    let position_bucket = 0.5f32.powi(config.position_bits as i32);
    for (axis, value) in Axis::ALL.into_iter().zip(position) {
        let folded = fold(value, config.max_range);
        let decoded = dequantize(&sender.field_bits(FieldKind::Position, axis));
        assert!(
            (decoded - folded).abs() <= position_bucket + 1e-6,
            "axis {axis:?}: decoded {decoded} folded {folded}"
        );
    }
    let rotation_bucket = 0.5f32.powi(config.rotation_bits as i32);
    for (axis, value) in Axis::ALL.into_iter().zip(rotation) {
        let folded = fold(value, ROTATION_RANGE);
        let decoded = dequantize(&sender.field_bits(FieldKind::Rotation, axis));
        assert!(
            (decoded - folded).abs() <= rotation_bucket + 1e-6,
            "axis {axis:?}: decoded {decoded} folded {folded}"
        );
    }
}

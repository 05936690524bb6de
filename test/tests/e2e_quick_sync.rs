/// End-to-end quick synchronization: analog position and rotation wires
/// instead of bit-serial frames, one slot per object.

use aldis_shared::SyncConfig;
use aldis_test::SyncHarness;

// Quick mode carries analog values, so decoded transforms match the
// source up to float rounding.
const ANALOG_TOLERANCE: f32 = 1e-3;

fn quick_config(object_count: usize) -> SyncConfig {
    SyncConfig {
        quick_sync: true,
        position_bits: 8,
        object_count,
        ..SyncConfig::default()
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn analog_transfer_is_exact_for_representable_values() {
    init_logging();
    let mut harness = SyncHarness::new(&quick_config(1));
    harness.set_transform(0, [32.0, -15.5, 0.25], [90.0, -45.0, 0.0]);
    harness.run(4 * harness.cycle_ticks());

    let (position, rotation) = harness.applied(0);
    for a in 0..3 {
        let expected = [32.0, -15.5, 0.25][a];
        assert!(
            (position[a] - expected).abs() <= 1e-4,
            "axis {a}: applied {} expected {expected}",
            position[a]
        );
        let expected = [90.0, -45.0, 0.0][a];
        assert!((rotation[a] - expected).abs() <= 1e-4);
    }
}

#[test]
fn arbitrary_values_round_trip_within_float_rounding() {
    init_logging();
    let mut harness = SyncHarness::new(&quick_config(1));
    harness.set_transform(0, [37.3, -81.57, 0.42], [123.4, -7.89, 44.44]);
    harness.run(4 * harness.cycle_ticks());

    let (position, rotation) = harness.applied(0);
    for a in 0..3 {
        let expected = [37.3, -81.57, 0.42][a];
        assert!((position[a] - expected).abs() <= ANALOG_TOLERANCE);
        let expected = [123.4, -7.89, 44.44][a];
        assert!((rotation[a] - expected).abs() <= ANALOG_TOLERANCE);
    }
}

#[test]
fn each_object_keeps_its_own_transform() {
    init_logging();
    let mut harness = SyncHarness::new(&quick_config(2));
    harness.set_transform(0, [16.0, 0.0, -8.0], [45.0, 0.0, 0.0]);
    harness.set_transform(1, [-64.0, 4.0, 0.0], [0.0, -90.0, 0.0]);
    harness.run(4 * harness.cycle_ticks());

    let (position, rotation) = harness.applied(0);
    assert!((position[0] - 16.0).abs() <= ANALOG_TOLERANCE);
    assert!((position[2] + 8.0).abs() <= ANALOG_TOLERANCE);
    assert!((rotation[0] - 45.0).abs() <= ANALOG_TOLERANCE);

    let (position, rotation) = harness.applied(1);
    assert!((position[0] + 64.0).abs() <= ANALOG_TOLERANCE);
    assert!((position[1] - 4.0).abs() <= ANALOG_TOLERANCE);
    assert!((rotation[1] + 90.0).abs() <= ANALOG_TOLERANCE);
}

#[test]
fn quick_updates_propagate_within_one_cycle() {
    init_logging();
    let mut harness = SyncHarness::new(&quick_config(1));
    harness.set_transform(0, [10.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    harness.run(4 * harness.cycle_ticks());
    let (position, _) = harness.applied(0);
    assert!((position[0] - 10.0).abs() <= ANALOG_TOLERANCE);

    harness.set_transform(0, [-20.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    // Capture, one wire slot, and the remote copy all fit in two cycles.
    harness.run(2 * harness.cycle_ticks());
    let (position, _) = harness.applied(0);
    assert!((position[0] + 20.0).abs() <= ANALOG_TOLERANCE);
}

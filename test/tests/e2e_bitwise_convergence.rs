/// End-to-end bitwise synchronization over the reference configuration:
/// 13-bit positions and 8-bit rotations in a 63-bit frame, moved over a
/// 16-wide channel in 4 steps, 52 ticks per cycle.

use aldis_shared::SyncConfig;
use aldis_test::SyncHarness;

// Lower quantization bucket plus one epsilon-biased bucket, in world
// units: 256 * 2^-13 per bucket for positions, 360 * 2^-8 for rotations.
const POSITION_TOLERANCE: f32 = 0.08;
const ROTATION_TOLERANCE: f32 = 1.5;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn static_transform_converges_within_a_few_cycles() {
    init_logging();
    let mut harness = SyncHarness::new(&SyncConfig::default());
    harness.set_transform(0, [32.0, -15.5, 0.25], [90.0, -45.0, 0.0]);

    // Two cycles to encode and transmit a settled frame, one more for
    // the pipelined low bit to refresh.
    harness.run(6 * harness.cycle_ticks());

    let (position, rotation) = harness.applied(0);
    for a in 0..3 {
        let expected = [32.0, -15.5, 0.25][a];
        assert!(
            (position[a] - expected).abs() <= POSITION_TOLERANCE,
            "axis {a}: applied {} expected {expected}",
            position[a]
        );
    }
    for a in 0..3 {
        let expected = [90.0, -45.0, 0.0][a];
        assert!(
            (rotation[a] - expected).abs() <= ROTATION_TOLERANCE,
            "axis {a}: applied {} expected {expected}",
            rotation[a]
        );
    }
}

#[test]
fn large_and_boundary_magnitudes_survive() {
    init_logging();
    let mut harness = SyncHarness::new(&SyncConfig::default());
    // Values at and beyond the fold boundary clamp rather than wrap.
    harness.set_transform(0, [127.9, -128.0, 300.0], [179.0, -180.0, 0.0]);
    harness.run(6 * harness.cycle_ticks());

    let (position, rotation) = harness.applied(0);
    assert!((position[0] - 127.9).abs() <= POSITION_TOLERANCE);
    assert!((position[1] + 128.0).abs() <= POSITION_TOLERANCE);
    // 300 clamps to the +128 boundary.
    assert!((position[2] - 128.0).abs() <= POSITION_TOLERANCE);
    assert!((rotation[0] - 179.0).abs() <= ROTATION_TOLERANCE);
    assert!((rotation[1] + 180.0).abs() <= ROTATION_TOLERANCE);
}

#[test]
fn updated_transform_replaces_the_old_one() {
    init_logging();
    let mut harness = SyncHarness::new(&SyncConfig::default());
    harness.set_transform(0, [10.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    harness.run(6 * harness.cycle_ticks());
    let (position, _) = harness.applied(0);
    assert!((position[0] - 10.0).abs() <= POSITION_TOLERANCE);

    harness.set_transform(0, [-90.0, 5.0, 0.0], [0.0, 120.0, 0.0]);
    harness.run(6 * harness.cycle_ticks());
    let (position, rotation) = harness.applied(0);
    assert!((position[0] + 90.0).abs() <= POSITION_TOLERANCE);
    assert!((position[1] - 5.0).abs() <= POSITION_TOLERANCE);
    assert!((rotation[1] - 120.0).abs() <= ROTATION_TOLERANCE);
}

#[test]
fn position_only_frames_converge_without_rotation() {
    init_logging();
    let config = SyncConfig {
        rotation_enabled: false,
        ..SyncConfig::default()
    };
    let mut harness = SyncHarness::new(&config);
    harness.set_transform(0, [-42.0, 17.25, 99.0], [0.0, 0.0, 0.0]);
    harness.run(6 * harness.cycle_ticks());

    let (position, rotation) = harness.applied(0);
    assert!((position[0] + 42.0).abs() <= POSITION_TOLERANCE);
    assert!((position[1] - 17.25).abs() <= POSITION_TOLERANCE);
    assert!((position[2] - 99.0).abs() <= POSITION_TOLERANCE);
    assert_eq!(rotation, [0.0, 0.0, 0.0]);
}

#[test]
fn narrow_channel_still_converges() {
    init_logging();
    // One wire bit per tick: 63 steps per frame.
    let config = SyncConfig {
        channel_width: 1,
        ..SyncConfig::default()
    };
    let mut harness = SyncHarness::new(&config);
    harness.set_transform(0, [1.0, -2.0, 3.0], [10.0, -20.0, 30.0]);
    harness.run(6 * harness.cycle_ticks());

    let (position, rotation) = harness.applied(0);
    for a in 0..3 {
        let expected = [1.0, -2.0, 3.0][a];
        assert!((position[a] - expected).abs() <= POSITION_TOLERANCE);
        let expected = [10.0, -20.0, 30.0][a];
        assert!((rotation[a] - expected).abs() <= ROTATION_TOLERANCE);
    }
}

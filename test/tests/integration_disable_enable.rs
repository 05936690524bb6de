/// The enabled wire gates the whole system: dropping it idles every
/// machine on both sides and stops the observer from applying transforms,
/// and raising it again resumes synchronization from the retained wire
/// indices.

use aldis_shared::SyncConfig;
use aldis_test::SyncHarness;

const POSITION_TOLERANCE: f32 = 0.08;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn disabling_stops_application() {
    init_logging();
    let mut harness = SyncHarness::new(&SyncConfig::default());
    harness.set_transform(0, [32.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    harness.run(6 * harness.cycle_ticks());
    assert!((harness.applied(0).0[0] - 32.0).abs() <= POSITION_TOLERANCE);

    harness.local.set_enabled(false);
    // One tick for the lowered wire to reach the remote.
    harness.run(2);
    let applied_while_disabled = harness.sink().records().len();
    harness.run(3 * harness.cycle_ticks());
    assert_eq!(harness.sink().records().len(), applied_while_disabled);
}

#[test]
fn reenabling_converges_on_the_new_transform() {
    init_logging();
    let mut harness = SyncHarness::new(&SyncConfig::default());
    harness.set_transform(0, [32.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    harness.run(6 * harness.cycle_ticks());

    harness.local.set_enabled(false);
    harness.run(2 * harness.cycle_ticks());
    // The transform moves while the system is down; the observer must not
    // see any of it until the wire comes back.
    harness.set_transform(0, [-80.0, 24.0, 0.0], [0.0, 0.0, 0.0]);
    harness.run(harness.cycle_ticks());
    let (position, _) = harness.applied(0);
    assert!((position[0] - 32.0).abs() <= POSITION_TOLERANCE);

    harness.local.set_enabled(true);
    harness.run(6 * harness.cycle_ticks());
    let (position, _) = harness.applied(0);
    assert!((position[0] + 80.0).abs() <= POSITION_TOLERANCE);
    assert!((position[1] - 24.0).abs() <= POSITION_TOLERANCE);
}

#[test]
fn quick_mode_gates_on_the_same_wire() {
    init_logging();
    let config = SyncConfig {
        quick_sync: true,
        position_bits: 8,
        ..SyncConfig::default()
    };
    let mut harness = SyncHarness::new(&config);
    harness.set_transform(0, [10.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    harness.run(4 * harness.cycle_ticks());
    assert!((harness.applied(0).0[0] - 10.0).abs() <= 1e-3);

    harness.local.set_enabled(false);
    harness.run(2);
    let applied_while_disabled = harness.sink().records().len();
    harness.run(2 * harness.cycle_ticks());
    assert_eq!(harness.sink().records().len(), applied_while_disabled);

    harness.local.set_enabled(true);
    harness.set_transform(0, [-30.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    harness.run(4 * harness.cycle_ticks());
    assert!((harness.applied(0).0[0] + 30.0).abs() <= 1e-3);
}

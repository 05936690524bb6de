/// The public build surface: configuration bounds surface as errors, and
/// every reasonable configuration produces a verified automaton with the
/// advertised wire cost.

use aldis_builder::{build, BuildError};
use aldis_shared::{ConfigError, SyncConfig};
use proptest::prelude::*;

#[test]
fn invalid_configurations_surface_as_config_errors() {
    let zero_channel = SyncConfig {
        channel_width: 0,
        ..SyncConfig::default()
    };
    assert!(matches!(
        build(&zero_channel),
        Err(BuildError::Config(ConfigError::ZeroChannelWidth))
    ));

    let zero_objects = SyncConfig {
        object_count: 0,
        ..SyncConfig::default()
    };
    assert!(matches!(
        build(&zero_objects),
        Err(BuildError::Config(ConfigError::ZeroObjectCount))
    ));

    let bad_range = SyncConfig {
        max_range: -1.0,
        ..SyncConfig::default()
    };
    assert!(matches!(
        build(&bad_range),
        Err(BuildError::Config(ConfigError::InvalidRange { .. }))
    ));
}

#[test]
fn configuration_sweep_builds_and_verifies() {
    for object_count in 1..=5 {
        for channel_width in [1, 4, 16, 63] {
            let config = SyncConfig {
                object_count,
                channel_width,
                ..SyncConfig::default()
            };
            assert!(
                build(&config).is_ok(),
                "objects {object_count} width {channel_width}"
            );
        }
    }
    for object_count in 1..=5 {
        let config = SyncConfig {
            quick_sync: true,
            position_bits: 8,
            object_count,
            ..SyncConfig::default()
        };
        assert!(build(&config).is_ok(), "quick objects {object_count}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn arbitrary_valid_configs_build(
        channel_width in 1usize..=63,
        position_bits in 2usize..=16,
        rotation_bits in 1usize..=16,
        rotation_enabled in any::<bool>(),
        object_count in 1usize..=6,
    ) {
        let config = SyncConfig {
            channel_width,
            position_bits,
            rotation_bits,
            rotation_enabled,
            object_count,
            ..SyncConfig::default()
        };
        let automaton = build(&config).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let cost = automaton.plan.cost();
        prop_assert_eq!(cost.wire_booleans, automaton.registers.wire_ids().len());
    }
}

#[test]
fn cost_report_matches_the_built_wire() {
    let config = SyncConfig::default();
    let automaton = build(&config).unwrap();
    let cost = automaton.plan.cost();
    assert_eq!(cost.wire_booleans, automaton.registers.wire_ids().len());
    assert_eq!(cost.cycle_ticks, automaton.plan.cycle().cycle_ticks());
}

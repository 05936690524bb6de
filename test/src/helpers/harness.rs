use std::sync::Arc;

use aldis_builder::build;
use aldis_runtime::{Link, LocalAgent, Participant, RemoteAgent};
use aldis_shared::{Automaton, Role, SyncConfig};

use crate::helpers::rig::{RecordingSink, ScriptedSource};

/// A complete two-participant rig: a local sender fed by a scripted
/// transform source, a remote observer draining into a recording sink,
/// and the link between them.
///
/// `step` runs one tick in wire order: measure, local tick, transfer,
/// remote tick, apply.
pub struct SyncHarness {
    pub automaton: Arc<Automaton>,
    pub local: Participant,
    pub remote: Participant,
    pub link: Link,
    pub measure: LocalAgent<ScriptedSource>,
    pub apply: RemoteAgent<RecordingSink>,
}

impl SyncHarness {
    pub fn new(config: &SyncConfig) -> Self {
        Self::with_link(config, Link::perfect())
    }

    pub fn with_link(config: &SyncConfig, link: Link) -> Self {
        let automaton = Arc::new(build(config).expect("config must build"));
        let local = Participant::new(automaton.clone(), Role::Local);
        let remote = Participant::new(automaton.clone(), Role::Remote);
        Self {
            local,
            remote,
            link,
            measure: LocalAgent::new(ScriptedSource::new(config.object_count)),
            apply: RemoteAgent::new(RecordingSink::default()),
            automaton,
        }
    }

    /// A harness whose remote joins `offset` ticks into the sender's
    /// cycle, for resynchronization tests.
    pub fn with_late_remote(config: &SyncConfig, offset: usize) -> Self {
        let mut harness = Self::new(config);
        for _ in 0..offset {
            harness.measure.pump(&mut harness.local);
            harness.local.tick();
        }
        harness.remote = Participant::new(harness.automaton.clone(), Role::Remote);
        harness
    }

    pub fn set_transform(&mut self, object: usize, position: [f32; 3], rotation: [f32; 3]) {
        self.measure.source_mut().set(object, position, rotation);
    }

    pub fn step(&mut self) {
        self.measure.pump(&mut self.local);
        self.local.tick();
        self.link.transfer(&self.local, &mut self.remote);
        self.remote.tick();
        self.apply.pump(&self.remote);
    }

    pub fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.step();
        }
    }

    pub fn sink(&mut self) -> &RecordingSink {
        self.apply.sink_mut()
    }

    /// Latest transform the remote applied for `object`; panics if the
    /// object was never applied.
    pub fn applied(&mut self, object: usize) -> ([f32; 3], [f32; 3]) {
        self.apply
            .sink_mut()
            .latest(object)
            .unwrap_or_else(|| panic!("object {object} was never applied"))
    }

    /// Ticks of one full transmission cycle over all objects.
    pub fn cycle_ticks(&self) -> usize {
        self.automaton.plan.cycle().cycle_ticks() as usize
    }
}

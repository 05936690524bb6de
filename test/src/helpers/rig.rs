use aldis_runtime::{TransformSink, TransformSource};

/// A transform source whose per-object values tests set directly.
pub struct ScriptedSource {
    transforms: Vec<([f32; 3], [f32; 3])>,
}

impl ScriptedSource {
    pub fn new(object_count: usize) -> Self {
        Self {
            transforms: vec![([0.0; 3], [0.0; 3]); object_count],
        }
    }

    pub fn set(&mut self, object: usize, position: [f32; 3], rotation: [f32; 3]) {
        self.transforms[object] = (position, rotation);
    }
}

impl TransformSource for ScriptedSource {
    fn read_transform(&mut self, object: usize) -> ([f32; 3], [f32; 3]) {
        self.transforms[object]
    }
}

/// A transform sink that records every application and keeps the latest
/// transform per object.
#[derive(Default)]
pub struct RecordingSink {
    records: Vec<(usize, [f32; 3], [f32; 3])>,
}

impl RecordingSink {
    pub fn records(&self) -> &[(usize, [f32; 3], [f32; 3])] {
        &self.records
    }

    pub fn latest(&self, object: usize) -> Option<([f32; 3], [f32; 3])> {
        self.records
            .iter()
            .rev()
            .find(|(applied, _, _)| *applied == object)
            .map(|(_, position, rotation)| (*position, *rotation))
    }
}

impl TransformSink for RecordingSink {
    fn apply_transform(&mut self, object: usize, position: [f32; 3], rotation: [f32; 3]) {
        self.records.push((object, position, rotation));
    }
}

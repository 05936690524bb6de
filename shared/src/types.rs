/// A fixed time quantum. All automata transition at most once per machine
/// per tick, and wire registers are sampled/written at tick boundaries.
pub type Tick = u16;

/// The role a participant plays for a synced object set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The authoritative participant: measures live transforms, encodes
    /// them, and writes the wire registers.
    Local,
    /// An observing participant: reads the wire registers, decodes them,
    /// and applies the result.
    Remote,
}

impl Role {
    pub fn invert(self) -> Self {
        match self {
            Role::Local => Role::Remote,
            Role::Remote => Role::Local,
        }
    }

    /// Whether this role drives the `is_local` register high
    pub fn is_local(self) -> bool {
        matches!(self, Role::Local)
    }
}

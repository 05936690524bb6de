use std::fmt;

/// Opaque handle to a register definition. States, guards, and adapters
/// address registers exclusively through these handles; names exist only
/// for the observability boundary and for diagnostics, so name collisions
/// cannot miswire a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegisterId(u32);

impl RegisterId {
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn to_index(self) -> usize {
        self.0 as usize
    }
}

/// The two kinds of register the target execution model offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterKind {
    Bool,
    Float,
}

impl fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegisterKind::Bool => write!(f, "boolean"),
            RegisterKind::Float => write!(f, "float"),
        }
    }
}

/// Whether a register is mirrored across the channel or private to one
/// participant instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterScope {
    /// Mirrored sender → receiver by the link every tick. Exactly one role
    /// writes a wire register, enforced at build time.
    Wire,
    /// Private to each participant instance.
    Internal,
}

/// A register's current contents
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f32),
}

impl Value {
    pub fn kind(&self) -> RegisterKind {
        match self {
            Value::Bool(_) => RegisterKind::Bool,
            Value::Float(_) => RegisterKind::Float,
        }
    }
}

/// One register definition: a debug name, a scope, and the default value
/// (which also fixes the kind)
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterDef {
    pub name: String,
    pub scope: RegisterScope,
    pub default: Value,
}

impl RegisterDef {
    pub fn kind(&self) -> RegisterKind {
        self.default.kind()
    }
}

/// The immutable register table of an automaton. Built once at graph
/// generation time; every participant seeds its own value bank from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFile {
    defs: Vec<RegisterDef>,
    wire: Vec<RegisterId>,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a register and returns its handle.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        scope: RegisterScope,
        default: Value,
    ) -> RegisterId {
        let id = RegisterId::from_index(self.defs.len());
        self.defs.push(RegisterDef {
            name: name.into(),
            scope,
            default,
        });
        if scope == RegisterScope::Wire {
            self.wire.push(id);
        }
        id
    }

    /// Defines a boolean register defaulting to `default`.
    pub fn add_bool(
        &mut self,
        name: impl Into<String>,
        scope: RegisterScope,
        default: bool,
    ) -> RegisterId {
        self.register(name, scope, Value::Bool(default))
    }

    /// Defines a float register defaulting to `default`.
    pub fn add_float(
        &mut self,
        name: impl Into<String>,
        scope: RegisterScope,
        default: f32,
    ) -> RegisterId {
        self.register(name, scope, Value::Float(default))
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn def(&self, id: RegisterId) -> &RegisterDef {
        &self.defs[id.to_index()]
    }

    pub fn name(&self, id: RegisterId) -> &str {
        &self.defs[id.to_index()].name
    }

    pub fn kind(&self, id: RegisterId) -> RegisterKind {
        self.defs[id.to_index()].kind()
    }

    pub fn defs(&self) -> impl Iterator<Item = (RegisterId, &RegisterDef)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(index, def)| (RegisterId::from_index(index), def))
    }

    /// Handles of every wire-scoped register, in definition order.
    pub fn wire_ids(&self) -> &[RegisterId] {
        &self.wire
    }
}

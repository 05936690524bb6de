use std::sync::Arc;

use thiserror::Error;

use crate::registers::{RegisterFile, RegisterId, RegisterKind, Value};

/// Errors that can occur when accessing registers by kind
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegisterError {
    /// The register holds a value of a different kind than requested.
    #[error("register `{register}` holds a {actual} value, not a {expected} value")]
    KindMismatch {
        register: String,
        expected: RegisterKind,
        actual: RegisterKind,
    },
}

/// One participant's register values, seeded from a [`RegisterFile`]'s
/// defaults. The kind of each slot never changes after seeding; graph
/// generation verifies that no action violates this.
#[derive(Debug, Clone)]
pub struct RegisterBank {
    file: Arc<RegisterFile>,
    values: Vec<Value>,
}

impl RegisterBank {
    pub fn new(file: Arc<RegisterFile>) -> Self {
        let values = file.defs().map(|(_, def)| def.default).collect();
        Self { file, values }
    }

    pub fn file(&self) -> &RegisterFile {
        &self.file
    }

    pub fn value(&self, id: RegisterId) -> Value {
        self.values[id.to_index()]
    }

    pub fn set(&mut self, id: RegisterId, value: Value) {
        debug_assert_eq!(
            self.values[id.to_index()].kind(),
            value.kind(),
            "kind change on register `{}`",
            self.file.name(id)
        );
        self.values[id.to_index()] = value;
    }

    /// Reads a boolean register.
    ///
    /// # Panics
    ///
    /// Panics if the register holds a float. Graph generation rules this
    /// out for every handle the builder wires up; use [`Self::try_bool`]
    /// for handles of unknown kind.
    pub fn bool(&self, id: RegisterId) -> bool {
        match self.values[id.to_index()] {
            Value::Bool(value) => value,
            Value::Float(_) => panic!("register `{}` is not a boolean", self.file.name(id)),
        }
    }

    /// Reads a float register.
    ///
    /// # Panics
    ///
    /// Panics if the register holds a boolean.
    pub fn float(&self, id: RegisterId) -> f32 {
        match self.values[id.to_index()] {
            Value::Float(value) => value,
            Value::Bool(_) => panic!("register `{}` is not a float", self.file.name(id)),
        }
    }

    pub fn add_float(&mut self, id: RegisterId, delta: f32) {
        let value = self.float(id);
        self.values[id.to_index()] = Value::Float(value + delta);
    }

    pub fn try_bool(&self, id: RegisterId) -> Result<bool, RegisterError> {
        match self.values[id.to_index()] {
            Value::Bool(value) => Ok(value),
            Value::Float(_) => Err(self.mismatch(id, RegisterKind::Bool)),
        }
    }

    pub fn try_float(&self, id: RegisterId) -> Result<f32, RegisterError> {
        match self.values[id.to_index()] {
            Value::Float(value) => Ok(value),
            Value::Bool(_) => Err(self.mismatch(id, RegisterKind::Float)),
        }
    }

    pub fn try_set_bool(&mut self, id: RegisterId, value: bool) -> Result<(), RegisterError> {
        match self.values[id.to_index()] {
            Value::Bool(_) => {
                self.values[id.to_index()] = Value::Bool(value);
                Ok(())
            }
            Value::Float(_) => Err(self.mismatch(id, RegisterKind::Bool)),
        }
    }

    pub fn try_set_float(&mut self, id: RegisterId, value: f32) -> Result<(), RegisterError> {
        match self.values[id.to_index()] {
            Value::Float(_) => {
                self.values[id.to_index()] = Value::Float(value);
                Ok(())
            }
            Value::Bool(_) => Err(self.mismatch(id, RegisterKind::Float)),
        }
    }

    /// Iterates every register as (name, current value); the observability
    /// boundary of a participant.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.file
            .defs()
            .map(|(id, def)| (def.name.as_str(), self.values[id.to_index()]))
    }

    fn mismatch(&self, id: RegisterId, expected: RegisterKind) -> RegisterError {
        RegisterError::KindMismatch {
            register: self.file.name(id).to_string(),
            expected,
            actual: self.values[id.to_index()].kind(),
        }
    }
}

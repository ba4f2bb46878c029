// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime values passed to the encoder.

use crate::schema::TypeDef;
use std::sync::Arc;

/// A value the encoder can serialize.
///
/// Closed variant set: wire primitives, the sugar-backed logical primitives
/// (`Bool` / `Null`, which resolve to their singleton constructors during
/// encoding), and instances of registered constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 32-bit integer. Encoded as 4 bytes, unsigned little-endian.
    Int(u32),
    /// Wide integer. Encoded as 8 bytes, unsigned little-endian.
    Long(u64),
    /// Logical boolean; shorthand for the `boolTrue` / `boolFalse` singletons.
    Bool(bool),
    /// Logical null; shorthand for the `null` singleton.
    Null,
    /// Instance of a registered constructor.
    Instance(Instance),
}

impl Value {
    /// Returns `true` for the logical null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as a 32-bit integer.
    pub fn as_int(&self) -> Option<u32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a wide integer.
    pub fn as_long(&self) -> Option<u64> {
        match self {
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a constructor instance.
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Short type label used in error reports.
    pub fn type_label(&self) -> String {
        match self {
            Self::Int(_) => "int".to_string(),
            Self::Long(_) => "long".to_string(),
            Self::Bool(_) => "bool".to_string(),
            Self::Null => "null".to_string(),
            Self::Instance(instance) => instance.def().name().to_string(),
        }
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Long(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Instance> for Value {
    fn from(v: Instance) -> Self {
        Self::Instance(v)
    }
}

/// A constructor instance: one value per declared field, in declared order.
///
/// Caller-owned; the encoder borrows instances and never retains them.
/// Shape agreement with the constructor's field list is checked at encode
/// time, not at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    def: Arc<TypeDef>,
    fields: Vec<Value>,
}

impl Instance {
    /// Pair a constructor definition with its field values.
    pub fn new(def: Arc<TypeDef>, fields: Vec<Value>) -> Self {
        Self { def, fields }
    }

    /// The constructor this value instantiates.
    pub fn def(&self) -> &Arc<TypeDef> {
        &self.def
    }

    /// Field values, in declared order.
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConstructorId, TypeDef};

    fn zero_field_def(name: &str, return_type: &str) -> Arc<TypeDef> {
        let signature = format!("{} = {}", name, return_type);
        Arc::new(TypeDef::new(
            name.into(),
            ConstructorId::from_signature(&signature),
            return_type.into(),
            Vec::new(),
            signature,
        ))
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(5u32), Value::Int(5));
        assert_eq!(Value::from(7u64), Value::Long(7));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(42).as_long(), None);
        assert_eq!(Value::Long(9).as_long(), Some(9));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert!(Value::Null.is_null());
    }

    #[test]
    fn type_labels() {
        assert_eq!(Value::Int(1).type_label(), "int");
        assert_eq!(Value::Long(1).type_label(), "long");
        assert_eq!(Value::Bool(true).type_label(), "bool");
        assert_eq!(Value::Null.type_label(), "null");

        let def = zero_field_def("inputPeerSelf", "InputPeer");
        let value = Value::Instance(Instance::new(def, Vec::new()));
        assert_eq!(value.type_label(), "inputPeerSelf");
    }

    #[test]
    fn instance_accessors() {
        let def = zero_field_def("boolTrue", "Bool");
        let instance = Instance::new(def.clone(), Vec::new());
        assert_eq!(instance.def().name(), "boolTrue");
        assert!(instance.fields().is_empty());
        assert_eq!(Value::from(instance.clone()), Value::Instance(instance));
    }
}

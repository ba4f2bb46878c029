// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Immutable schema type definitions.

use crate::schema::ConstructorId;
use crate::value::{Instance, Value};
use std::sync::Arc;

/// Type of a constructor field: a wire primitive or a reference to a
/// declared type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// 32-bit unsigned integer. Renders as `int` in signatures.
    Int,
    /// 64-bit unsigned integer. Renders as `long` in signatures.
    Long,
    /// Reference to a constructor or category type by name.
    Named(String),
}

impl FieldType {
    /// Reference a constructor or category type by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The token this type renders as inside a canonical signature.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Long => "long",
            Self::Named(name) => name,
        }
    }
}

/// One declared field of a constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    name: String,
    ty: FieldType,
}

impl FieldDef {
    /// Create a field declaration.
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Field name as it appears in the canonical signature.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared field type.
    pub fn ty(&self) -> &FieldType {
        &self.ty
    }
}

/// A registered schema constructor.
///
/// Created only through [`SchemaBuilder::register`] and immutable afterwards:
/// the constructor identifier is a pure function of `(name, fields,
/// return_type)` via the canonical signature and never changes once bound.
///
/// [`SchemaBuilder::register`]: crate::schema::SchemaBuilder::register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    name: String,
    id: ConstructorId,
    return_type: String,
    fields: Vec<FieldDef>,
    signature: String,
}

impl TypeDef {
    pub(crate) fn new(
        name: String,
        id: ConstructorId,
        return_type: String,
        fields: Vec<FieldDef>,
        signature: String,
    ) -> Self {
        Self {
            name,
            id,
            return_type,
            fields,
            signature,
        }
    }

    /// Constructor name (unique within a registry).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 32-bit constructor identifier, fixed at registration.
    pub fn id(&self) -> ConstructorId {
        self.id
    }

    /// Name of the abstract category this constructor belongs to.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Declared fields, in wire order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// The canonical signature this constructor's identifier was derived from.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Build an instance value of this constructor with the given field
    /// values, in declared order.
    pub fn instance(self: &Arc<Self>, fields: Vec<Value>) -> Value {
        Value::Instance(Instance::new(self.clone(), fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_tokens() {
        assert_eq!(FieldType::Int.type_name(), "int");
        assert_eq!(FieldType::Long.type_name(), "long");
        assert_eq!(FieldType::named("InputPeer").type_name(), "InputPeer");
    }

    #[test]
    fn field_def_accessors() {
        let field = FieldDef::new("user_id", FieldType::Int);
        assert_eq!(field.name(), "user_id");
        assert_eq!(field.ty(), &FieldType::Int);
    }

    #[test]
    fn instance_helper_wraps_def() {
        let def = Arc::new(TypeDef::new(
            "inputPeerContact".into(),
            ConstructorId::from_raw(0x1023dbe8),
            "InputPeer".into(),
            vec![FieldDef::new("user_id", FieldType::Int)],
            "inputPeerContact user_id:int = InputPeer".into(),
        ));

        let value = def.instance(vec![Value::Int(5)]);
        match value {
            Value::Instance(instance) => {
                assert_eq!(instance.def().name(), "inputPeerContact");
                assert_eq!(instance.fields(), &[Value::Int(5)]);
            }
            other => panic!("expected instance, got {:?}", other),
        }
    }
}

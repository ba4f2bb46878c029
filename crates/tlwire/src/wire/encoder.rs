// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive value encoder.

use crate::schema::{FieldDef, FieldType, SchemaRegistry, TypeDef};
use crate::sugar::Sugar;
use crate::value::{Instance, Value};
use crate::wire::{EncodeError, EncodeResult};
use std::sync::Arc;

/// Encodes [`Value`]s into TL wire bytes.
///
/// Captures its registry once at construction and holds no per-call state:
/// every [`encode`] invocation is an independent, reentrant tree traversal,
/// so a single encoder (or clones of it) may be shared freely across
/// threads.
///
/// [`encode`]: Encoder::encode
#[derive(Debug, Clone)]
pub struct Encoder {
    schema: Arc<SchemaRegistry>,
}

impl Encoder {
    /// Create an encoder over a frozen registry.
    pub fn new(schema: Arc<SchemaRegistry>) -> Self {
        Self { schema }
    }

    /// The registry this encoder consults.
    pub fn schema(&self) -> &SchemaRegistry {
        &self.schema
    }

    /// Encode a value to its complete wire representation.
    ///
    /// All-or-nothing: either the full byte sequence is returned, or an
    /// error and no bytes.
    pub fn encode(&self, value: &Value) -> EncodeResult<Vec<u8>> {
        let mut out = Vec::with_capacity(16);
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    fn encode_into(&self, value: &Value, out: &mut Vec<u8>) -> EncodeResult<()> {
        match value {
            Value::Bool(true) => self.encode_sugar(Sugar::True, out),
            Value::Bool(false) => self.encode_sugar(Sugar::False, out),
            Value::Null => self.encode_sugar(Sugar::Null, out),
            Value::Int(v) => {
                out.extend_from_slice(&v.to_le_bytes());
                Ok(())
            }
            // `long` is pinned to 8 bytes regardless of platform word size.
            Value::Long(v) => {
                out.extend_from_slice(&v.to_le_bytes());
                Ok(())
            }
            Value::Instance(instance) => self.encode_instance(instance, out),
        }
    }

    fn encode_sugar(&self, sugar: Sugar, out: &mut Vec<u8>) -> EncodeResult<()> {
        let singleton = self
            .schema
            .sugar()
            .lookup(sugar)
            .ok_or(EncodeError::UnregisteredSugar { sugar })?;
        self.encode_into(singleton, out)
    }

    fn encode_instance(&self, instance: &Instance, out: &mut Vec<u8>) -> EncodeResult<()> {
        let def = instance.def();
        match self.schema.get(def.name()) {
            Some(known) if Arc::ptr_eq(known, def) || known.id() == def.id() => {}
            _ => {
                return Err(EncodeError::UnsupportedValue {
                    type_name: def.name().to_string(),
                })
            }
        }

        let declared = def.fields();
        let values = instance.fields();
        if declared.len() != values.len() {
            return Err(EncodeError::FieldCountMismatch {
                type_name: def.name().to_string(),
                expected: declared.len(),
                found: values.len(),
            });
        }

        out.extend_from_slice(&def.id().to_le_bytes());
        for (field, value) in declared.iter().zip(values) {
            self.check_field(def, field, value)?;
            self.encode_into(value, out)?;
        }
        Ok(())
    }

    fn check_field(&self, def: &TypeDef, field: &FieldDef, value: &Value) -> EncodeResult<()> {
        let ok = match (field.ty(), value) {
            (FieldType::Int, Value::Int(_)) => true,
            (FieldType::Long, Value::Long(_)) => true,
            (FieldType::Named(want), Value::Instance(inner)) => {
                inner.def().name() == want || inner.def().return_type() == want
            }
            (FieldType::Named(want), Value::Bool(_) | Value::Null) => {
                // Checked against the sugar singleton's constructor when one
                // is bound; an unbound sugar is left to fail as
                // UnregisteredSugar during the recursive encode.
                match Sugar::of_value(value).and_then(|s| self.schema.sugar().lookup(s)) {
                    Some(Value::Instance(singleton)) => {
                        singleton.def().name() == want || singleton.def().return_type() == want
                    }
                    _ => true,
                }
            }
            _ => false,
        };

        if ok {
            Ok(())
        } else {
            Err(EncodeError::FieldTypeMismatch {
                type_name: def.name().to_string(),
                field: field.name().to_string(),
                expected: field.ty().type_name().to_string(),
                found: value.type_label(),
            })
        }
    }
}

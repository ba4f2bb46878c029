// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema registration and the immutable type registry.
//!
//! Registration is a one-time load phase: a [`SchemaBuilder`] accumulates
//! constructor definitions and sugar bindings, then [`SchemaBuilder::finish`]
//! freezes everything into a [`SchemaRegistry`]. The registry never mutates
//! after that, so any number of threads may read it concurrently without
//! synchronization.

use crate::schema::{canonical_signature, ConstructorId, FieldDef, FieldType, TypeDef};
use crate::sugar::{Sugar, SugarTable};
use crate::value::{Instance, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Registration-time schema errors. Fatal to startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A constructor with this name is already registered.
    DuplicateName { name: String },
    /// A field references a type name that is neither a registered
    /// constructor nor a declared return category.
    UnknownFieldType {
        constructor: String,
        field: String,
        type_name: String,
    },
    /// Names are hashed in their ASCII encoding and must be ASCII.
    InvalidName { name: String },
    /// Sugar can only target a registered constructor.
    UnknownSugarType { type_name: String },
    /// Each raw primitive has exactly one singleton.
    SugarAlreadyBound { sugar: Sugar },
    /// Sugar singletons exist only for zero-field constructors.
    SugarNotSingleton { type_name: String, field_count: usize },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "constructor '{}' is already registered", name)
            }
            Self::UnknownFieldType {
                constructor,
                field,
                type_name,
            } => write!(
                f,
                "field '{}' of constructor '{}' references unknown type '{}'",
                field, constructor, type_name
            ),
            Self::InvalidName { name } => {
                write!(f, "name '{}' is not ASCII", name)
            }
            Self::UnknownSugarType { type_name } => {
                write!(f, "sugar target '{}' is not a registered constructor", type_name)
            }
            Self::SugarAlreadyBound { sugar } => {
                write!(f, "raw {} already has a singleton bound", sugar)
            }
            Self::SugarNotSingleton {
                type_name,
                field_count,
            } => write!(
                f,
                "sugar target '{}' has {} fields, expected none",
                type_name, field_count
            ),
        }
    }
}

impl std::error::Error for SchemaError {}

/// Load-phase accumulator for schema definitions.
///
/// All mutation happens here, single-threaded, before [`finish`] produces
/// the shared read-only registry.
///
/// [`finish`]: SchemaBuilder::finish
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: HashMap<String, Arc<TypeDef>>,
    categories: HashSet<String>,
    sugar: SugarTable,
}

impl SchemaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor: compute its canonical signature, derive the
    /// constructor identifier, and bind the completed [`TypeDef`] under its
    /// name.
    ///
    /// Named field types must already be known, either as a registered
    /// constructor or as the return category of one; registration order
    /// therefore follows declaration order, as in the schema text.
    pub fn register(
        &mut self,
        name: &str,
        return_type: &str,
        fields: Vec<FieldDef>,
    ) -> Result<Arc<TypeDef>, SchemaError> {
        for candidate in [name, return_type] {
            if !candidate.is_ascii() {
                return Err(SchemaError::InvalidName {
                    name: candidate.to_string(),
                });
            }
        }
        if self.types.contains_key(name) {
            return Err(SchemaError::DuplicateName {
                name: name.to_string(),
            });
        }
        for field in &fields {
            if !field.name().is_ascii() {
                return Err(SchemaError::InvalidName {
                    name: field.name().to_string(),
                });
            }
            if let FieldType::Named(type_name) = field.ty() {
                if !type_name.is_ascii() {
                    return Err(SchemaError::InvalidName {
                        name: type_name.clone(),
                    });
                }
                if !self.types.contains_key(type_name) && !self.categories.contains(type_name) {
                    return Err(SchemaError::UnknownFieldType {
                        constructor: name.to_string(),
                        field: field.name().to_string(),
                        type_name: type_name.clone(),
                    });
                }
            }
        }

        let signature = canonical_signature(name, return_type, &fields);
        let id = ConstructorId::from_signature(&signature);
        let def = Arc::new(TypeDef::new(
            name.to_string(),
            id,
            return_type.to_string(),
            fields,
            signature,
        ));
        log::debug!("schema: registered {} {}", name, id);
        self.types.insert(name.to_string(), def.clone());
        self.categories.insert(return_type.to_string());
        Ok(def)
    }

    /// Bind a raw primitive to the singleton instance of a registered
    /// zero-field constructor.
    pub fn register_sugar(&mut self, sugar: Sugar, type_name: &str) -> Result<(), SchemaError> {
        if self.sugar.is_bound(sugar) {
            return Err(SchemaError::SugarAlreadyBound { sugar });
        }
        let def = self
            .types
            .get(type_name)
            .ok_or_else(|| SchemaError::UnknownSugarType {
                type_name: type_name.to_string(),
            })?;
        if !def.fields().is_empty() {
            return Err(SchemaError::SugarNotSingleton {
                type_name: type_name.to_string(),
                field_count: def.fields().len(),
            });
        }
        log::debug!("schema: sugar {} -> {}", sugar, type_name);
        self.sugar
            .bind(sugar, Value::Instance(Instance::new(def.clone(), Vec::new())));
        Ok(())
    }

    /// Freeze the accumulated definitions into an immutable registry.
    pub fn finish(self) -> SchemaRegistry {
        SchemaRegistry {
            types: self.types,
            categories: self.categories,
            sugar: self.sugar,
        }
    }
}

/// Immutable registry of constructor definitions and sugar singletons.
///
/// Built once by [`SchemaBuilder::finish`]; exclusively owns its
/// [`TypeDef`]s and never changes afterwards, so concurrent reads need no
/// locking.
#[derive(Debug)]
pub struct SchemaRegistry {
    types: HashMap<String, Arc<TypeDef>>,
    categories: HashSet<String>,
    sugar: SugarTable,
}

impl SchemaRegistry {
    /// Look up a constructor by name.
    pub fn get(&self, name: &str) -> Option<&Arc<TypeDef>> {
        self.types.get(name)
    }

    /// Returns `true` if the name is a declared return category.
    pub fn is_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    /// The sugar singleton table.
    pub fn sugar(&self) -> &SugarTable {
        &self.sugar
    }

    /// Number of registered constructors.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no constructors are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over all registered constructors (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeDef>> {
        self.types.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_computes_signature_and_id() {
        let mut schema = SchemaBuilder::new();
        let def = schema
            .register(
                "inputPeerContact",
                "InputPeer",
                vec![FieldDef::new("user_id", FieldType::Int)],
            )
            .expect("register");

        assert_eq!(def.signature(), "inputPeerContact user_id:int = InputPeer");
        assert_eq!(def.id().raw(), 0x1023dbe8);
        assert_eq!(def.return_type(), "InputPeer");
        assert_eq!(def.fields().len(), 1);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut schema = SchemaBuilder::new();
        schema.register("boolTrue", "Bool", Vec::new()).expect("register");
        let err = schema.register("boolTrue", "Bool", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateName {
                name: "boolTrue".into()
            }
        );
    }

    #[test]
    fn unknown_field_type_rejected() {
        let mut schema = SchemaBuilder::new();
        let err = schema
            .register(
                "inputNotifyPeer",
                "InputNotifyPeer",
                vec![FieldDef::new("peer", FieldType::named("InputPeer"))],
            )
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownFieldType {
                constructor: "inputNotifyPeer".into(),
                field: "peer".into(),
                type_name: "InputPeer".into(),
            }
        );
    }

    #[test]
    fn category_becomes_referencable_after_first_constructor() {
        let mut schema = SchemaBuilder::new();
        schema
            .register("inputPeerEmpty", "InputPeer", Vec::new())
            .expect("register");
        schema
            .register(
                "inputNotifyPeer",
                "InputNotifyPeer",
                vec![FieldDef::new("peer", FieldType::named("InputPeer"))],
            )
            .expect("category reference should resolve");
    }

    #[test]
    fn non_ascii_names_rejected() {
        let mut schema = SchemaBuilder::new();
        let err = schema.register("boolTrué", "Bool", Vec::new()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidName {
                name: "boolTrué".into()
            }
        );
    }

    #[test]
    fn sugar_requires_registered_target() {
        let mut schema = SchemaBuilder::new();
        let err = schema.register_sugar(Sugar::True, "boolTrue").unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownSugarType {
                type_name: "boolTrue".into()
            }
        );
    }

    #[test]
    fn sugar_binds_at_most_once() {
        let mut schema = SchemaBuilder::new();
        schema.register("boolTrue", "Bool", Vec::new()).expect("register");
        schema.register("boolFalse", "Bool", Vec::new()).expect("register");
        schema.register_sugar(Sugar::True, "boolTrue").expect("sugar");
        let err = schema.register_sugar(Sugar::True, "boolFalse").unwrap_err();
        assert_eq!(err, SchemaError::SugarAlreadyBound { sugar: Sugar::True });
    }

    #[test]
    fn sugar_rejects_constructors_with_fields() {
        let mut schema = SchemaBuilder::new();
        schema
            .register(
                "inputPeerContact",
                "InputPeer",
                vec![FieldDef::new("user_id", FieldType::Int)],
            )
            .expect("register");
        let err = schema
            .register_sugar(Sugar::True, "inputPeerContact")
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::SugarNotSingleton {
                type_name: "inputPeerContact".into(),
                field_count: 1,
            }
        );
    }

    #[test]
    fn finish_freezes_lookup_state() {
        let mut schema = SchemaBuilder::new();
        schema.register("boolTrue", "Bool", Vec::new()).expect("register");
        schema.register_sugar(Sugar::True, "boolTrue").expect("sugar");
        let registry = schema.finish();

        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        assert!(registry.get("boolTrue").is_some());
        assert!(registry.get("boolFalse").is_none());
        assert!(registry.is_category("Bool"));
        assert!(registry.sugar().is_bound(Sugar::True));
        assert_eq!(registry.iter().count(), 1);
    }

    #[test]
    fn identifier_stable_across_registrations() {
        let id_of = || {
            let mut schema = SchemaBuilder::new();
            schema
                .register(
                    "inputUserForeign",
                    "InputUser",
                    vec![
                        FieldDef::new("user_id", FieldType::Int),
                        FieldDef::new("access_hash", FieldType::Long),
                    ],
                )
                .expect("register")
                .id()
        };
        assert_eq!(id_of(), id_of());
        assert_eq!(id_of().raw(), 0x655e74ff);
    }
}

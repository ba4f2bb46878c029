// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The executable base schema.
//!
//! Core service constructors (`boolFalse`, `boolTrue`, `null`, with their
//! sugar bindings) and the input peer/user constructors. Applications with
//! larger schemas register their own constructors on top of these.

use crate::schema::{FieldDef, FieldType, SchemaBuilder, SchemaError, SchemaRegistry};
use crate::sugar::Sugar;

/// Register the boolean/null service constructors and bind their sugar
/// singletons.
pub fn register_core_types(schema: &mut SchemaBuilder) -> Result<(), SchemaError> {
    schema.register("boolFalse", "Bool", Vec::new())?;
    schema.register_sugar(Sugar::False, "boolFalse")?;
    schema.register("boolTrue", "Bool", Vec::new())?;
    schema.register_sugar(Sugar::True, "boolTrue")?;
    schema.register("null", "Null", Vec::new())?;
    schema.register_sugar(Sugar::Null, "null")?;
    Ok(())
}

/// Register the input peer and input user constructors.
pub fn register_peer_types(schema: &mut SchemaBuilder) -> Result<(), SchemaError> {
    schema.register("inputPeerEmpty", "InputPeer", Vec::new())?;
    schema.register("inputPeerSelf", "InputPeer", Vec::new())?;
    schema.register(
        "inputPeerContact",
        "InputPeer",
        vec![FieldDef::new("user_id", FieldType::Int)],
    )?;
    schema.register(
        "inputPeerForeign",
        "InputPeer",
        vec![
            FieldDef::new("user_id", FieldType::Int),
            FieldDef::new("access_hash", FieldType::Long),
        ],
    )?;
    schema.register("inputUserEmpty", "InputUser", Vec::new())?;
    schema.register("inputUserSelf", "InputUser", Vec::new())?;
    schema.register(
        "inputUserContact",
        "InputUser",
        vec![FieldDef::new("user_id", FieldType::Int)],
    )?;
    schema.register(
        "inputUserForeign",
        "InputUser",
        vec![
            FieldDef::new("user_id", FieldType::Int),
            FieldDef::new("access_hash", FieldType::Long),
        ],
    )?;
    Ok(())
}

/// Build a registry with every base constructor registered.
pub fn base_registry() -> Result<SchemaRegistry, SchemaError> {
    let mut schema = SchemaBuilder::new();
    register_core_types(&mut schema)?;
    register_peer_types(&mut schema)?;
    Ok(schema.finish())
}

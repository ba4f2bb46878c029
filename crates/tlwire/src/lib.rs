// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # tlwire - Type Language binary wire encoding
//!
//! A pure Rust encoder for TL (Type Language) schemas: each schema
//! constructor has a unique name, an ordered list of typed fields, an
//! abstract return category, and a 32-bit constructor identifier derived by
//! CRC-32 from its canonical textual signature. Values encode to a compact
//! binary form: the identifier (4 bytes, little-endian) followed by each
//! field's encoding in declared order.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tlwire::{Encoder, FieldDef, FieldType, SchemaBuilder, Value};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Register the schema once, at startup
//!     let mut schema = SchemaBuilder::new();
//!     let contact = schema.register(
//!         "inputPeerContact",
//!         "InputPeer",
//!         vec![FieldDef::new("user_id", FieldType::Int)],
//!     )?;
//!     let registry = Arc::new(schema.finish());
//!
//!     // Encode instances against the frozen registry
//!     let encoder = Encoder::new(registry);
//!     let bytes = encoder.encode(&contact.instance(vec![Value::Int(5)]))?;
//!     assert_eq!(&bytes[..4], &contact.id().to_le_bytes());
//!     assert_eq!(&bytes[4..], &5u32.to_le_bytes());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                        Application                           |
//! |        build Values -> Encoder::encode -> wire bytes         |
//! +--------------------------------------------------------------+
//! |                       Schema Layer                           |
//! |  SchemaBuilder -> canonical signature -> ConstructorId       |
//! |              -> SchemaRegistry + SugarTable                  |
//! +--------------------------------------------------------------+
//! |                        Wire Layer                            |
//! |   id(4, LE) ++ encode(field_1) ++ ... ++ encode(field_n)     |
//! +--------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SchemaBuilder`] | Load-phase registration of constructors and sugar |
//! | [`SchemaRegistry`] | Frozen schema, safe for concurrent reads |
//! | [`TypeDef`] | One registered constructor (name, fields, id) |
//! | [`Value`] | Closed variant set the encoder accepts |
//! | [`Encoder`] | Stateless recursive value-to-bytes encoder |
//!
//! Decoding, transport, and remote invocation are external collaborators
//! that consume the byte sequences this crate produces.

/// Type Language schema model (definitions, signatures, identifiers, registry).
pub mod schema;
/// Primitive sugar singletons (`true` / `false` / `null`).
pub mod sugar;
/// Runtime values passed to the encoder.
pub mod value;
/// Wire encoding of values into TL binary form.
pub mod wire;

pub use schema::{
    base_registry, canonical_signature, ConstructorId, FieldDef, FieldType, SchemaBuilder,
    SchemaError, SchemaRegistry, TypeDef,
};
pub use sugar::{Sugar, SugarTable};
pub use value::{Instance, Value};
pub use wire::{EncodeError, EncodeResult, Encoder};

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type Language schema model.
//!
//! Constructor definitions, canonical signature rendering, identifier
//! derivation, and the load-once registry:
//!
//! - **TypeDef / FieldDef**: immutable description of one constructor
//! - **canonical_signature**: exact textual form hashed into the identifier
//! - **ConstructorId**: CRC-32 of the ASCII signature, 4-byte LE wire form
//! - **SchemaBuilder / SchemaRegistry**: single-threaded load phase, then
//!   lock-free concurrent reads
//! - **builtin**: the executable base schema (bool/null service types with
//!   sugar, input peer/user constructors)

mod builtin;
mod def;
mod ident;
mod registry;
mod signature;

pub use builtin::{base_registry, register_core_types, register_peer_types};
pub use def::{FieldDef, FieldType, TypeDef};
pub use ident::ConstructorId;
pub use registry::{SchemaBuilder, SchemaError, SchemaRegistry};
pub use signature::canonical_signature;

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Canonical signature rendering.
//!
//! The signature is the exact string hashed into a constructor identifier,
//! so its rendering must stay byte-stable forever. Shape:
//!
//! ```text
//! boolTrue = Bool
//! inputPeerContact user_id:int = InputPeer
//! inputPeerForeign user_id:int access_hash:long = InputPeer
//! ```

use crate::schema::FieldDef;

/// Render the canonical signature for a constructor.
///
/// Each field renders as `name:Type` followed by a single space, so with one
/// or more fields a space separates the last field from `=`; with zero
/// fields the constructor name is directly followed by ` = `. Primitive
/// field types render as `int` / `long`, named types as their declared name.
///
/// Inputs are ASCII-validated at registration, so rendering cannot fail.
pub fn canonical_signature(name: &str, return_type: &str, fields: &[FieldDef]) -> String {
    let mut sig = String::with_capacity(name.len() + return_type.len() + 16 * fields.len() + 3);
    sig.push_str(name);
    sig.push(' ');
    for field in fields {
        sig.push_str(field.name());
        sig.push(':');
        sig.push_str(field.ty().type_name());
        sig.push(' ');
    }
    sig.push_str("= ");
    sig.push_str(return_type);
    sig
}

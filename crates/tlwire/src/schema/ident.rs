// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Constructor identifiers derived from canonical signatures.
//!
//! The identifier is the zlib CRC-32 of the ASCII-encoded canonical
//! signature. On the wire it occupies 4 bytes, little-endian, and prefixes
//! every encoded instance of its constructor.
//!
//! # Test Vector
//!
//! ```
//! use tlwire::ConstructorId;
//!
//! // Published identifier for the `boolTrue = Bool` constructor.
//! let id = ConstructorId::from_signature("boolTrue = Bool");
//! assert_eq!(id.raw(), 0x997275b5);
//! ```

use flate2::Crc;
use std::fmt;

/// 32-bit constructor identifier.
///
/// A pure function of the canonical signature: recomputing it for the same
/// `(name, fields, return_type)` always yields the same value, across runs
/// and platforms.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstructorId(u32);

impl ConstructorId {
    /// Derive the identifier from a canonical signature.
    pub fn from_signature(signature: &str) -> Self {
        let mut crc = Crc::new();
        crc.update(signature.as_bytes());
        Self(crc.sum())
    }

    /// Wrap a known identifier value.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The identifier as an unsigned 32-bit value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Wire form: 4 bytes, little-endian.
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl fmt::Debug for ConstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstructorId(#{:08x})", self.0)
    }
}

impl fmt::Display for ConstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl fmt::LowerHex for ConstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

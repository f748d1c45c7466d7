//! Primitives for the TL (Type Language) binary object format.
//!
//! TL encodes typed objects as a 4-byte little-endian constructor ID followed
//! by the object's fields in declaration order. This crate provides the two
//! core traits plus the handful of wire-level primitives every schema layer
//! is built from:
//!
//! | Item                 | Role                                                  |
//! |----------------------|-------------------------------------------------------|
//! | [`Serializable`]     | value → bytes (fallible: length headers can overflow) |
//! | [`Deserializable`]   | bytes → value, via a [`Cursor`]                       |
//! | [`Identifiable`]     | the per-constructor 32-bit ID constant                |
//! | [`RawVec`]           | bare `vector<T>` (no `0x1cb5c415` header)             |
//! | [`Blob`]             | an already-encoded object passed through verbatim     |
//!
//! Concrete schema types live in downstream crates (e.g. `wiregram-mtproto`);
//! this crate knows nothing about any particular schema.
//!
//! # Example
//!
//! ```rust
//! use wiregram_tl_types::{Cursor, Deserializable, Serializable};
//!
//! let bytes = 42i32.to_bytes().unwrap();
//! assert_eq!(bytes, [42, 0, 0, 0]);
//!
//! let mut cursor = Cursor::from_slice(&bytes);
//! assert_eq!(i32::deserialize(&mut cursor).unwrap(), 42);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod deserialize;
pub mod serialize;

pub use deserialize::{Cursor, Deserializable};
pub use serialize::Serializable;

/// Bare `vector` — a count followed by elements, *without* the boxed
/// `Vector` constructor ID `0x1cb5c415`.
///
/// A few schema constructors (e.g. `accessPointRule.ips`) use the bare form;
/// everything else goes through the boxed `Vec<T>` impls.
#[derive(Clone, Debug, PartialEq)]
pub struct RawVec<T>(pub Vec<T>);

/// An already-encoded TL object carried through without interpretation.
///
/// Serializing a `Blob` appends its bytes as-is (no length prefix, no tag);
/// deserializing consumes everything left in the cursor. Useful when one
/// layer relays an object it does not need to understand.
#[derive(Clone, Debug, PartialEq)]
pub struct Blob(pub Vec<u8>);

impl From<Vec<u8>> for Blob {
    fn from(v: Vec<u8>) -> Self { Self(v) }
}

// ─── Core trait ───────────────────────────────────────────────────────────────

/// Every TL constructor has a unique 32-bit ID fixed by the schema.
///
/// The ID is a compile-time constant, never derived at runtime. It is written
/// to the wire by whoever performs the *boxed* encoding (an enum or the
/// generic dispatcher); the constructor's own body codec never touches it.
pub trait Identifiable {
    /// The constructor ID as specified in the TL schema.
    const CONSTRUCTOR_ID: u32;
}

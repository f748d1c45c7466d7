//! MTProto service schema types and the generic TL object dispatcher.
//!
//! Everything the MTProto session layer says outside of API calls (key
//! exchange payloads, acknowledgements, RPC results, session notices) is
//! expressed in the small *service* schema. This crate implements that schema
//! on top of the [`wiregram_tl_types`] primitives:
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`types`]    | Bare constructors as `struct`s (body-only codecs)       |
//! | [`enums`]    | Boxed types as `enum`s (tag + body codecs)              |
//! | [`dispatch`] | [`Object`] and the generic [`read`] dispatcher          |
//!
//! # Reading a stream of objects
//!
//! ```rust
//! use wiregram_mtproto::{Object, enums, read, types};
//! use wiregram_tl_types::{Cursor, Serializable};
//!
//! let pong = Object::from(enums::Pong::Pong(types::Pong { msg_id: 1, ping_id: 2 }));
//! let bytes = pong.to_bytes().unwrap();
//!
//! let mut cursor = Cursor::from_slice(&bytes);
//! assert_eq!(read(&mut cursor).unwrap(), pong);
//! assert_eq!(cursor.remaining(), 0);
//! ```
//!
//! `read` resolves the leading constructor ID through a static registry that
//! covers every constructor in [`types`]; an ID outside the schema is an
//! [`UnknownConstructor`] error for the caller to handle.
//!
//! [`UnknownConstructor`]: wiregram_tl_types::deserialize::Error::UnknownConstructor

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

pub mod dispatch;
pub mod enums;
mod registry;
pub mod types;

pub use dispatch::{Object, VECTOR_ID, read};
pub use registry::{known_constructors, name_for_id};

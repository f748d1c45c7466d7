//! The [`Serializable`] trait and its implementations for primitive TL types.
//!
//! Encoding follows the [MTProto Binary Serialization] spec: everything is
//! little-endian, byte strings are length-prefixed and zero-padded to 4-byte
//! alignment, boxed vectors carry the `0x1cb5c415` constructor ID.
//!
//! [MTProto Binary Serialization]: https://core.telegram.org/mtproto/serialize

use std::fmt;

// ─── Error ───────────────────────────────────────────────────────────────────

/// Errors that can occur during serialization.
///
/// Integer fields cannot overflow (their Rust types fix the wire width), so
/// the only values that can fail to encode are the ones with length headers.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Byte string longer than the 3-byte length header allows (2²⁴ − 1).
    BytesTooLong {
        /// The unencodable length.
        len: usize,
    },
    /// Vector with more elements than the 4-byte count field allows.
    VectorTooLong {
        /// The unencodable element count.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BytesTooLong { len } => {
                write!(f, "byte string of {len} bytes exceeds the TL length header")
            }
            Self::VectorTooLong { len } => {
                write!(f, "vector of {len} elements exceeds the TL count field")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Specialized `Result` for serialization. Defaults to `()` so that
/// `serialize` signatures read as plain `-> Result`.
pub type Result<T = ()> = std::result::Result<T, Error>;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Serialize `self` into TL binary format.
pub trait Serializable {
    /// Appends the serialized form of `self` to `buf`.
    ///
    /// On error nothing useful can be said about how much of `self` already
    /// reached `buf`; callers serialize into a scratch buffer they can throw
    /// away (which [`to_bytes`](Serializable::to_bytes) does).
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result;

    /// Convenience: allocate a fresh `Vec<u8>` and serialize into it.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut v = Vec::new();
        self.serialize(&mut v)?;
        Ok(v)
    }
}

// ─── bool ────────────────────────────────────────────────────────────────────

/// `true`  → `boolTrue#997275b5`
/// `false` → `boolFalse#bc799737`
impl Serializable for bool {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        let id: u32 = if *self { 0x997275b5 } else { 0xbc799737 };
        id.serialize(buf)
    }
}

// ─── integers ────────────────────────────────────────────────────────────────

impl Serializable for i32 {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        buf.extend(self.to_le_bytes());
        Ok(())
    }
}

impl Serializable for u32 {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        buf.extend(self.to_le_bytes());
        Ok(())
    }
}

impl Serializable for i64 {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        buf.extend(self.to_le_bytes());
        Ok(())
    }
}

impl Serializable for f64 {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        buf.extend(self.to_le_bytes());
        Ok(())
    }
}

/// `int128`: 16 raw bytes, copied verbatim (no byte-order interpretation).
impl Serializable for [u8; 16] {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        buf.extend(self.iter().copied());
        Ok(())
    }
}

/// `int256`: 32 raw bytes, copied verbatim.
impl Serializable for [u8; 32] {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        buf.extend(self.iter().copied());
        Ok(())
    }
}

// ─── strings / bytes ─────────────────────────────────────────────────────────

/// TL `bytes`: length-prefixed, zero-padded to 4-byte alignment.
///
/// * `len ≤ 253`: `[len:1][data][padding]`
/// * `len ≥ 254`: `[0xfe][len:3 LE][data][padding]`
///
/// The peer parser relies on the alignment to locate the next field, so the
/// total emitted length is always a multiple of 4.
impl Serializable for &[u8] {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        let len = self.len();
        let header_len = if len <= 253 {
            buf.extend([len as u8]);
            1
        } else if len < 1 << 24 {
            // 0xfe marker byte then the length as 3 LE bytes, i.e. one LE u32
            buf.extend((((len as u32) << 8) | 0xfe).to_le_bytes());
            4
        } else {
            return Err(Error::BytesTooLong { len });
        };

        let padding = (4 - (header_len + len) % 4) % 4;
        buf.extend(self.iter().copied());
        buf.extend(std::iter::repeat(0u8).take(padding));
        Ok(())
    }
}

impl Serializable for Vec<u8> {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        self.as_slice().serialize(buf)
    }
}

impl Serializable for String {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        self.as_bytes().serialize(buf)
    }
}

// ─── vectors ─────────────────────────────────────────────────────────────────

/// Boxed `Vector<T>`: constructor ID `0x1cb5c415`, then count, then elements.
impl<T: Serializable> Serializable for Vec<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        if self.len() > i32::MAX as usize {
            return Err(Error::VectorTooLong { len: self.len() });
        }
        0x1cb5c415u32.serialize(buf)?;
        (self.len() as i32).serialize(buf)?;
        for item in self {
            item.serialize(buf)?;
        }
        Ok(())
    }
}

/// Bare `vector<T>`: count and elements only, no constructor ID.
impl<T: Serializable> Serializable for crate::RawVec<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        if self.0.len() > i32::MAX as usize {
            return Err(Error::VectorTooLong { len: self.0.len() });
        }
        (self.0.len() as i32).serialize(buf)?;
        for item in &self.0 {
            item.serialize(buf)?;
        }
        Ok(())
    }
}

// ─── Blob ────────────────────────────────────────────────────────────────────

/// Pre-encoded bytes pass through untouched, without a header of any kind.
impl Serializable for crate::Blob {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        buf.extend(self.0.iter().copied());
        Ok(())
    }
}

// ─── Option ──────────────────────────────────────────────────────────────────

/// Optional parameters are governed by a flags word; when `Some`, serialize
/// the value, when `None` write nothing (absence is encoded in the flags).
impl<T: Serializable> Serializable for Option<T> {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> Result {
        match self {
            Some(v) => v.serialize(buf),
            None => Ok(()),
        }
    }
}

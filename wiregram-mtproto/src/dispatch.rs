//! The generic object dispatcher: bytes in, typed [`Object`] out.
//!
//! [`read`] consumes one full boxed object from a cursor: leading 4-byte
//! constructor ID, then the body decoded by the type the registry maps that
//! ID to. Because the cursor ends up just past the object, `read` can be
//! called in a loop over a stream of concatenated objects (batched server
//! responses decode this way).
//!
//! One cursor, one reader: interleaving `read` calls against the same cursor
//! from multiple threads would tear the stream apart. Independent cursors are
//! fine to drive in parallel; the registry is read-only after first use.

use wiregram_tl_types::deserialize::{self, Buffer};
use wiregram_tl_types::{Deserializable, Serializable, serialize};

use crate::{enums, registry};

/// The constructor ID of the boxed `Vector` type.
pub const VECTOR_ID: u32 = 0x1cb5c415;

/// Any boxed object of the service schema, as decoded by [`read`].
///
/// One variant per TL *type* (each wrapping that type's constructor enum),
/// plus [`Object::Vector`] for a top-level boxed vector of objects, a shape
/// generically-typed payloads like `rpc_result.result` can take.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    ResPq(enums::ResPq),
    PQInnerData(enums::PQInnerData),
    BindAuthKeyInner(enums::BindAuthKeyInner),
    ServerDhParams(enums::ServerDhParams),
    ServerDhInnerData(enums::ServerDhInnerData),
    ClientDhInnerData(enums::ClientDhInnerData),
    SetClientDhParamsAnswer(enums::SetClientDhParamsAnswer),
    DestroyAuthKeyRes(enums::DestroyAuthKeyRes),
    MsgsAck(enums::MsgsAck),
    BadMsgNotification(enums::BadMsgNotification),
    MsgsStateReq(enums::MsgsStateReq),
    MsgsStateInfo(enums::MsgsStateInfo),
    MsgsAllInfo(enums::MsgsAllInfo),
    MsgDetailedInfo(enums::MsgDetailedInfo),
    MsgResendReq(enums::MsgResendReq),
    RpcResult(enums::RpcResult),
    RpcError(enums::RpcError),
    RpcDropAnswer(enums::RpcDropAnswer),
    Pong(enums::Pong),
    DestroySessionRes(enums::DestroySessionRes),
    NewSession(enums::NewSession),
    HttpWait(enums::HttpWait),
    IpPort(enums::IpPort),
    AccessPointRule(enums::AccessPointRule),
    ConfigSimple(enums::help::ConfigSimple),
    /// A boxed `Vector` of further boxed objects.
    Vector(Vec<Object>),
}

/// Read one boxed object: constructor ID, registry lookup, body decode.
///
/// On success the cursor sits just past the object. On failure the cursor
/// sits where the failure was detected; for
/// [`UnknownConstructor`](deserialize::Error::UnknownConstructor) that is
/// just past the offending tag, so `pos() - 4` is the tag's own offset.
pub fn read(buf: Buffer) -> deserialize::Result<Object> {
    let id = u32::deserialize(buf)?;

    // The vector type is its own registry of one: any element type, known
    // only from each element's embedded tag.
    if id == VECTOR_ID {
        let len = i32::deserialize(buf)? as usize;
        let items = (0..len).map(|_| read(buf)).collect::<deserialize::Result<Vec<_>>>()?;
        log::trace!("read vector of {len} objects");
        return Ok(Object::Vector(items));
    }

    match registry::resolve(id) {
        Some(entry) => {
            log::trace!("read {} ({id:#010x})", entry.name);
            (entry.decode)(buf)
        }
        None => {
            log::debug!("unknown constructor {id:#010x} at offset {}", buf.pos() - 4);
            Err(deserialize::Error::UnknownConstructor { id })
        }
    }
}

impl Serializable for Object {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::ResPq(x) => x.serialize(buf),
            Self::PQInnerData(x) => x.serialize(buf),
            Self::BindAuthKeyInner(x) => x.serialize(buf),
            Self::ServerDhParams(x) => x.serialize(buf),
            Self::ServerDhInnerData(x) => x.serialize(buf),
            Self::ClientDhInnerData(x) => x.serialize(buf),
            Self::SetClientDhParamsAnswer(x) => x.serialize(buf),
            Self::DestroyAuthKeyRes(x) => x.serialize(buf),
            Self::MsgsAck(x) => x.serialize(buf),
            Self::BadMsgNotification(x) => x.serialize(buf),
            Self::MsgsStateReq(x) => x.serialize(buf),
            Self::MsgsStateInfo(x) => x.serialize(buf),
            Self::MsgsAllInfo(x) => x.serialize(buf),
            Self::MsgDetailedInfo(x) => x.serialize(buf),
            Self::MsgResendReq(x) => x.serialize(buf),
            Self::RpcResult(x) => x.serialize(buf),
            Self::RpcError(x) => x.serialize(buf),
            Self::RpcDropAnswer(x) => x.serialize(buf),
            Self::Pong(x) => x.serialize(buf),
            Self::DestroySessionRes(x) => x.serialize(buf),
            Self::NewSession(x) => x.serialize(buf),
            Self::HttpWait(x) => x.serialize(buf),
            Self::IpPort(x) => x.serialize(buf),
            Self::AccessPointRule(x) => x.serialize(buf),
            Self::ConfigSimple(x) => x.serialize(buf),
            Self::Vector(items) => {
                if items.len() > i32::MAX as usize {
                    return Err(serialize::Error::VectorTooLong { len: items.len() });
                }
                VECTOR_ID.serialize(buf)?;
                (items.len() as i32).serialize(buf)?;
                for item in items {
                    item.serialize(buf)?;
                }
                Ok(())
            }
        }
    }
}

impl Deserializable for Object {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        read(buf)
    }
}

// ─── Conversions ──────────────────────────────────────────────────────────────

impl From<enums::ResPq> for Object {
    fn from(x: enums::ResPq) -> Self {
        Self::ResPq(x)
    }
}

impl From<enums::PQInnerData> for Object {
    fn from(x: enums::PQInnerData) -> Self {
        Self::PQInnerData(x)
    }
}

impl From<enums::BindAuthKeyInner> for Object {
    fn from(x: enums::BindAuthKeyInner) -> Self {
        Self::BindAuthKeyInner(x)
    }
}

impl From<enums::ServerDhParams> for Object {
    fn from(x: enums::ServerDhParams) -> Self {
        Self::ServerDhParams(x)
    }
}

impl From<enums::ServerDhInnerData> for Object {
    fn from(x: enums::ServerDhInnerData) -> Self {
        Self::ServerDhInnerData(x)
    }
}

impl From<enums::ClientDhInnerData> for Object {
    fn from(x: enums::ClientDhInnerData) -> Self {
        Self::ClientDhInnerData(x)
    }
}

impl From<enums::SetClientDhParamsAnswer> for Object {
    fn from(x: enums::SetClientDhParamsAnswer) -> Self {
        Self::SetClientDhParamsAnswer(x)
    }
}

impl From<enums::DestroyAuthKeyRes> for Object {
    fn from(x: enums::DestroyAuthKeyRes) -> Self {
        Self::DestroyAuthKeyRes(x)
    }
}

impl From<enums::MsgsAck> for Object {
    fn from(x: enums::MsgsAck) -> Self {
        Self::MsgsAck(x)
    }
}

impl From<enums::BadMsgNotification> for Object {
    fn from(x: enums::BadMsgNotification) -> Self {
        Self::BadMsgNotification(x)
    }
}

impl From<enums::MsgsStateReq> for Object {
    fn from(x: enums::MsgsStateReq) -> Self {
        Self::MsgsStateReq(x)
    }
}

impl From<enums::MsgsStateInfo> for Object {
    fn from(x: enums::MsgsStateInfo) -> Self {
        Self::MsgsStateInfo(x)
    }
}

impl From<enums::MsgsAllInfo> for Object {
    fn from(x: enums::MsgsAllInfo) -> Self {
        Self::MsgsAllInfo(x)
    }
}

impl From<enums::MsgDetailedInfo> for Object {
    fn from(x: enums::MsgDetailedInfo) -> Self {
        Self::MsgDetailedInfo(x)
    }
}

impl From<enums::MsgResendReq> for Object {
    fn from(x: enums::MsgResendReq) -> Self {
        Self::MsgResendReq(x)
    }
}

impl From<enums::RpcResult> for Object {
    fn from(x: enums::RpcResult) -> Self {
        Self::RpcResult(x)
    }
}

impl From<enums::RpcError> for Object {
    fn from(x: enums::RpcError) -> Self {
        Self::RpcError(x)
    }
}

impl From<enums::RpcDropAnswer> for Object {
    fn from(x: enums::RpcDropAnswer) -> Self {
        Self::RpcDropAnswer(x)
    }
}

impl From<enums::Pong> for Object {
    fn from(x: enums::Pong) -> Self {
        Self::Pong(x)
    }
}

impl From<enums::DestroySessionRes> for Object {
    fn from(x: enums::DestroySessionRes) -> Self {
        Self::DestroySessionRes(x)
    }
}

impl From<enums::NewSession> for Object {
    fn from(x: enums::NewSession) -> Self {
        Self::NewSession(x)
    }
}

impl From<enums::HttpWait> for Object {
    fn from(x: enums::HttpWait) -> Self {
        Self::HttpWait(x)
    }
}

impl From<enums::IpPort> for Object {
    fn from(x: enums::IpPort) -> Self {
        Self::IpPort(x)
    }
}

impl From<enums::AccessPointRule> for Object {
    fn from(x: enums::AccessPointRule) -> Self {
        Self::AccessPointRule(x)
    }
}

impl From<enums::help::ConfigSimple> for Object {
    fn from(x: enums::help::ConfigSimple) -> Self {
        Self::ConfigSimple(x)
    }
}

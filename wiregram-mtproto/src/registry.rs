//! The constructor registry: one row per schema constructor.
//!
//! The table is built once at compile time and indexed lazily on first use.
//! Registering two constructors under one ID would make the wire format
//! ambiguous, so indexing fails fast (panics) on a duplicate rather than
//! letting one row shadow the other.

use std::collections::HashMap;
use std::sync::OnceLock;

use wiregram_tl_types::deserialize::{self, Buffer};
use wiregram_tl_types::{Deserializable, Identifiable};

use crate::dispatch::{Object, VECTOR_ID};
use crate::{enums, types};

/// Decodes a constructor *body* (the tag has already been consumed by the
/// dispatcher) into an [`Object`].
pub(crate) type DecodeFn = fn(Buffer<'_, '_>) -> deserialize::Result<Object>;

pub(crate) struct Entry {
    pub(crate) id: u32,
    pub(crate) name: &'static str,
    pub(crate) decode: DecodeFn,
}

/// Body decoder for constructor `T`, lifted into [`Object`] through `T`'s
/// boxed enum `E`.
fn body<T, E>(buf: Buffer) -> deserialize::Result<Object>
where
    T: Deserializable,
    E: From<T>,
    Object: From<E>,
{
    Ok(Object::from(E::from(T::deserialize(buf)?)))
}

const fn entry<T, E>(name: &'static str) -> Entry
where
    T: Deserializable + Identifiable,
    E: From<T>,
    Object: From<E>,
{
    Entry { id: T::CONSTRUCTOR_ID, name, decode: body::<T, E> }
}

static TABLE: &[Entry] = &[
    entry::<types::ResPq, enums::ResPq>("resPQ"),
    entry::<types::PQInnerData, enums::PQInnerData>("p_q_inner_data"),
    entry::<types::PQInnerDataDc, enums::PQInnerData>("p_q_inner_data_dc"),
    entry::<types::PQInnerDataTemp, enums::PQInnerData>("p_q_inner_data_temp"),
    entry::<types::PQInnerDataTempDc, enums::PQInnerData>("p_q_inner_data_temp_dc"),
    entry::<types::BindAuthKeyInner, enums::BindAuthKeyInner>("bind_auth_key_inner"),
    entry::<types::ServerDhParamsFail, enums::ServerDhParams>("server_DH_params_fail"),
    entry::<types::ServerDhParamsOk, enums::ServerDhParams>("server_DH_params_ok"),
    entry::<types::ServerDhInnerData, enums::ServerDhInnerData>("server_DH_inner_data"),
    entry::<types::ClientDhInnerData, enums::ClientDhInnerData>("client_DH_inner_data"),
    entry::<types::DhGenOk, enums::SetClientDhParamsAnswer>("dh_gen_ok"),
    entry::<types::DhGenRetry, enums::SetClientDhParamsAnswer>("dh_gen_retry"),
    entry::<types::DhGenFail, enums::SetClientDhParamsAnswer>("dh_gen_fail"),
    entry::<types::DestroyAuthKeyOk, enums::DestroyAuthKeyRes>("destroy_auth_key_ok"),
    entry::<types::DestroyAuthKeyNone, enums::DestroyAuthKeyRes>("destroy_auth_key_none"),
    entry::<types::DestroyAuthKeyFail, enums::DestroyAuthKeyRes>("destroy_auth_key_fail"),
    entry::<types::MsgsAck, enums::MsgsAck>("msgs_ack"),
    entry::<types::BadMsgNotification, enums::BadMsgNotification>("bad_msg_notification"),
    entry::<types::BadServerSalt, enums::BadMsgNotification>("bad_server_salt"),
    entry::<types::MsgsStateReq, enums::MsgsStateReq>("msgs_state_req"),
    entry::<types::MsgsStateInfo, enums::MsgsStateInfo>("msgs_state_info"),
    entry::<types::MsgsAllInfo, enums::MsgsAllInfo>("msgs_all_info"),
    entry::<types::MsgDetailedInfo, enums::MsgDetailedInfo>("msg_detailed_info"),
    entry::<types::MsgNewDetailedInfo, enums::MsgDetailedInfo>("msg_new_detailed_info"),
    entry::<types::MsgResendReq, enums::MsgResendReq>("msg_resend_req"),
    entry::<types::RpcResult, enums::RpcResult>("rpc_result"),
    entry::<types::RpcError, enums::RpcError>("rpc_error"),
    entry::<types::RpcAnswerUnknown, enums::RpcDropAnswer>("rpc_answer_unknown"),
    entry::<types::RpcAnswerDroppedRunning, enums::RpcDropAnswer>("rpc_answer_dropped_running"),
    entry::<types::RpcAnswerDropped, enums::RpcDropAnswer>("rpc_answer_dropped"),
    entry::<types::Pong, enums::Pong>("pong"),
    entry::<types::DestroySessionOk, enums::DestroySessionRes>("destroy_session_ok"),
    entry::<types::DestroySessionNone, enums::DestroySessionRes>("destroy_session_none"),
    entry::<types::NewSessionCreated, enums::NewSession>("new_session_created"),
    entry::<types::HttpWait, enums::HttpWait>("http_wait"),
    entry::<types::IpPort, enums::IpPort>("ipPort"),
    entry::<types::IpPortSecret, enums::IpPort>("ipPortSecret"),
    entry::<types::AccessPointRule, enums::AccessPointRule>("accessPointRule"),
    entry::<types::help::ConfigSimple, enums::help::ConfigSimple>("help.configSimple"),
];

fn index() -> &'static HashMap<u32, &'static Entry> {
    static INDEX: OnceLock<HashMap<u32, &'static Entry>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(TABLE.len());
        for entry in TABLE {
            if map.insert(entry.id, entry).is_some() {
                panic!("duplicate constructor id {:#010x} ({})", entry.id, entry.name);
            }
        }
        map
    })
}

pub(crate) fn resolve(id: u32) -> Option<&'static Entry> {
    index().get(&id).copied()
}

/// The TL name of a known constructor ID, if any.
///
/// ```rust
/// assert_eq!(wiregram_mtproto::name_for_id(0x62d6b459), Some("msgs_ack"));
/// assert_eq!(wiregram_mtproto::name_for_id(0xdeadbeef), None);
/// ```
pub fn name_for_id(id: u32) -> Option<&'static str> {
    if id == VECTOR_ID {
        return Some("vector");
    }
    resolve(id).map(|entry| entry.name)
}

/// Every registered `(constructor_id, name)` pair, in schema order.
///
/// Mostly useful for diagnostics and for asserting registry-wide properties
/// (no duplicate IDs, full coverage) in tests.
pub fn known_constructors() -> impl Iterator<Item = (u32, &'static str)> {
    TABLE.iter().map(|entry| (entry.id, entry.name))
}

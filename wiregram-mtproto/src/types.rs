//! Bare constructors of the MTProto service schema, as plain structs.
//!
//! A struct here codecs its *body only*: the 4-byte constructor ID is written
//! and consumed by whoever performs the boxed encoding, i.e. the matching
//! enum in [`crate::enums`] or the generic dispatcher in [`crate::dispatch`].
//! That split is part of the wire contract and must not be collapsed.
//!
//! Field order follows the schema exactly; it is the wire layout.

use wiregram_tl_types::deserialize::{self, Buffer};
use wiregram_tl_types::{Deserializable, Identifiable, RawVec, Serializable, serialize};

// ─── Key exchange ─────────────────────────────────────────────────────────────

/// [`resPQ`](https://core.telegram.org/constructor/resPQ)
///
/// ```tl
/// resPQ#05162463 nonce:int128 server_nonce:int128 pq:bytes server_public_key_fingerprints:Vector<long> = ResPQ;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ResPq {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub pq: Vec<u8>,
    pub server_public_key_fingerprints: Vec<i64>,
}

impl Identifiable for ResPq {
    const CONSTRUCTOR_ID: u32 = 0x05162463;
}

impl Serializable for ResPq {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.pq.serialize(buf)?;
        self.server_public_key_fingerprints.serialize(buf)
    }
}

impl Deserializable for ResPq {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            pq: Vec::<u8>::deserialize(buf)?,
            server_public_key_fingerprints: Vec::<i64>::deserialize(buf)?,
        })
    }
}

/// [`p_q_inner_data`](https://core.telegram.org/constructor/p_q_inner_data)
///
/// ```tl
/// p_q_inner_data#83c95aec pq:bytes p:bytes q:bytes nonce:int128 server_nonce:int128 new_nonce:int256 = P_Q_inner_data;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PQInnerData {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
}

impl Identifiable for PQInnerData {
    const CONSTRUCTOR_ID: u32 = 0x83c95aec;
}

impl Serializable for PQInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.pq.serialize(buf)?;
        self.p.serialize(buf)?;
        self.q.serialize(buf)?;
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.new_nonce.serialize(buf)
    }
}

impl Deserializable for PQInnerData {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            pq: Vec::<u8>::deserialize(buf)?,
            p: Vec::<u8>::deserialize(buf)?,
            q: Vec::<u8>::deserialize(buf)?,
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce: <[u8; 32]>::deserialize(buf)?,
        })
    }
}

/// [`p_q_inner_data_dc`](https://core.telegram.org/constructor/p_q_inner_data_dc)
///
/// ```tl
/// p_q_inner_data_dc#a9f55f95 pq:bytes p:bytes q:bytes nonce:int128 server_nonce:int128 new_nonce:int256 dc:int = P_Q_inner_data;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PQInnerDataDc {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
    pub dc: i32,
}

impl Identifiable for PQInnerDataDc {
    const CONSTRUCTOR_ID: u32 = 0xa9f55f95;
}

impl Serializable for PQInnerDataDc {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.pq.serialize(buf)?;
        self.p.serialize(buf)?;
        self.q.serialize(buf)?;
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.new_nonce.serialize(buf)?;
        self.dc.serialize(buf)
    }
}

impl Deserializable for PQInnerDataDc {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            pq: Vec::<u8>::deserialize(buf)?,
            p: Vec::<u8>::deserialize(buf)?,
            q: Vec::<u8>::deserialize(buf)?,
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce: <[u8; 32]>::deserialize(buf)?,
            dc: i32::deserialize(buf)?,
        })
    }
}

/// [`p_q_inner_data_temp`](https://core.telegram.org/constructor/p_q_inner_data_temp)
///
/// ```tl
/// p_q_inner_data_temp#3c6a84d4 pq:bytes p:bytes q:bytes nonce:int128 server_nonce:int128 new_nonce:int256 expires_in:int = P_Q_inner_data;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PQInnerDataTemp {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
    pub expires_in: i32,
}

impl Identifiable for PQInnerDataTemp {
    const CONSTRUCTOR_ID: u32 = 0x3c6a84d4;
}

impl Serializable for PQInnerDataTemp {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.pq.serialize(buf)?;
        self.p.serialize(buf)?;
        self.q.serialize(buf)?;
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.new_nonce.serialize(buf)?;
        self.expires_in.serialize(buf)
    }
}

impl Deserializable for PQInnerDataTemp {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            pq: Vec::<u8>::deserialize(buf)?,
            p: Vec::<u8>::deserialize(buf)?,
            q: Vec::<u8>::deserialize(buf)?,
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce: <[u8; 32]>::deserialize(buf)?,
            expires_in: i32::deserialize(buf)?,
        })
    }
}

/// [`p_q_inner_data_temp_dc`](https://core.telegram.org/constructor/p_q_inner_data_temp_dc)
///
/// ```tl
/// p_q_inner_data_temp_dc#56fddf88 pq:bytes p:bytes q:bytes nonce:int128 server_nonce:int128 new_nonce:int256 dc:int expires_in:int = P_Q_inner_data;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PQInnerDataTempDc {
    pub pq: Vec<u8>,
    pub p: Vec<u8>,
    pub q: Vec<u8>,
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce: [u8; 32],
    pub dc: i32,
    pub expires_in: i32,
}

impl Identifiable for PQInnerDataTempDc {
    const CONSTRUCTOR_ID: u32 = 0x56fddf88;
}

impl Serializable for PQInnerDataTempDc {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.pq.serialize(buf)?;
        self.p.serialize(buf)?;
        self.q.serialize(buf)?;
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.new_nonce.serialize(buf)?;
        self.dc.serialize(buf)?;
        self.expires_in.serialize(buf)
    }
}

impl Deserializable for PQInnerDataTempDc {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            pq: Vec::<u8>::deserialize(buf)?,
            p: Vec::<u8>::deserialize(buf)?,
            q: Vec::<u8>::deserialize(buf)?,
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce: <[u8; 32]>::deserialize(buf)?,
            dc: i32::deserialize(buf)?,
            expires_in: i32::deserialize(buf)?,
        })
    }
}

/// [`bind_auth_key_inner`](https://core.telegram.org/constructor/bind_auth_key_inner)
///
/// ```tl
/// bind_auth_key_inner#75a3f765 nonce:long temp_auth_key_id:long perm_auth_key_id:long temp_session_id:long expires_at:int = BindAuthKeyInner;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BindAuthKeyInner {
    pub nonce: i64,
    pub temp_auth_key_id: i64,
    pub perm_auth_key_id: i64,
    pub temp_session_id: i64,
    pub expires_at: i32,
}

impl Identifiable for BindAuthKeyInner {
    const CONSTRUCTOR_ID: u32 = 0x75a3f765;
}

impl Serializable for BindAuthKeyInner {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.temp_auth_key_id.serialize(buf)?;
        self.perm_auth_key_id.serialize(buf)?;
        self.temp_session_id.serialize(buf)?;
        self.expires_at.serialize(buf)
    }
}

impl Deserializable for BindAuthKeyInner {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: i64::deserialize(buf)?,
            temp_auth_key_id: i64::deserialize(buf)?,
            perm_auth_key_id: i64::deserialize(buf)?,
            temp_session_id: i64::deserialize(buf)?,
            expires_at: i32::deserialize(buf)?,
        })
    }
}

/// [`server_DH_params_fail`](https://core.telegram.org/constructor/server_DH_params_fail)
///
/// ```tl
/// server_DH_params_fail#79cb045d nonce:int128 server_nonce:int128 new_nonce_hash:int128 = Server_DH_Params;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ServerDhParamsFail {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash: [u8; 16],
}

impl Identifiable for ServerDhParamsFail {
    const CONSTRUCTOR_ID: u32 = 0x79cb045d;
}

impl Serializable for ServerDhParamsFail {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.new_nonce_hash.serialize(buf)
    }
}

impl Deserializable for ServerDhParamsFail {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce_hash: <[u8; 16]>::deserialize(buf)?,
        })
    }
}

/// [`server_DH_params_ok`](https://core.telegram.org/constructor/server_DH_params_ok)
///
/// ```tl
/// server_DH_params_ok#d0e8075c nonce:int128 server_nonce:int128 encrypted_answer:bytes = Server_DH_Params;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ServerDhParamsOk {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub encrypted_answer: Vec<u8>,
}

impl Identifiable for ServerDhParamsOk {
    const CONSTRUCTOR_ID: u32 = 0xd0e8075c;
}

impl Serializable for ServerDhParamsOk {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.encrypted_answer.serialize(buf)
    }
}

impl Deserializable for ServerDhParamsOk {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            encrypted_answer: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// [`server_DH_inner_data`](https://core.telegram.org/constructor/server_DH_inner_data)
///
/// ```tl
/// server_DH_inner_data#b5890dba nonce:int128 server_nonce:int128 g:int dh_prime:bytes g_a:bytes server_time:int = Server_DH_inner_data;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ServerDhInnerData {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub g: i32,
    pub dh_prime: Vec<u8>,
    pub g_a: Vec<u8>,
    pub server_time: i32,
}

impl Identifiable for ServerDhInnerData {
    const CONSTRUCTOR_ID: u32 = 0xb5890dba;
}

impl Serializable for ServerDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.g.serialize(buf)?;
        self.dh_prime.serialize(buf)?;
        self.g_a.serialize(buf)?;
        self.server_time.serialize(buf)
    }
}

impl Deserializable for ServerDhInnerData {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            g: i32::deserialize(buf)?,
            dh_prime: Vec::<u8>::deserialize(buf)?,
            g_a: Vec::<u8>::deserialize(buf)?,
            server_time: i32::deserialize(buf)?,
        })
    }
}

/// [`client_DH_inner_data`](https://core.telegram.org/constructor/client_DH_inner_data)
///
/// ```tl
/// client_DH_inner_data#6643b654 nonce:int128 server_nonce:int128 retry_id:long g_b:bytes = Client_DH_Inner_Data;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClientDhInnerData {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub retry_id: i64,
    pub g_b: Vec<u8>,
}

impl Identifiable for ClientDhInnerData {
    const CONSTRUCTOR_ID: u32 = 0x6643b654;
}

impl Serializable for ClientDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.retry_id.serialize(buf)?;
        self.g_b.serialize(buf)
    }
}

impl Deserializable for ClientDhInnerData {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            retry_id: i64::deserialize(buf)?,
            g_b: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// [`dh_gen_ok`](https://core.telegram.org/constructor/dh_gen_ok)
///
/// ```tl
/// dh_gen_ok#3bcbf734 nonce:int128 server_nonce:int128 new_nonce_hash1:int128 = Set_client_DH_params_answer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DhGenOk {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash1: [u8; 16],
}

impl Identifiable for DhGenOk {
    const CONSTRUCTOR_ID: u32 = 0x3bcbf734;
}

impl Serializable for DhGenOk {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.new_nonce_hash1.serialize(buf)
    }
}

impl Deserializable for DhGenOk {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce_hash1: <[u8; 16]>::deserialize(buf)?,
        })
    }
}

/// [`dh_gen_retry`](https://core.telegram.org/constructor/dh_gen_retry)
///
/// ```tl
/// dh_gen_retry#46dc1fb9 nonce:int128 server_nonce:int128 new_nonce_hash2:int128 = Set_client_DH_params_answer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DhGenRetry {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash2: [u8; 16],
}

impl Identifiable for DhGenRetry {
    const CONSTRUCTOR_ID: u32 = 0x46dc1fb9;
}

impl Serializable for DhGenRetry {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.new_nonce_hash2.serialize(buf)
    }
}

impl Deserializable for DhGenRetry {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce_hash2: <[u8; 16]>::deserialize(buf)?,
        })
    }
}

/// [`dh_gen_fail`](https://core.telegram.org/constructor/dh_gen_fail)
///
/// ```tl
/// dh_gen_fail#a69dae02 nonce:int128 server_nonce:int128 new_nonce_hash3:int128 = Set_client_DH_params_answer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DhGenFail {
    pub nonce: [u8; 16],
    pub server_nonce: [u8; 16],
    pub new_nonce_hash3: [u8; 16],
}

impl Identifiable for DhGenFail {
    const CONSTRUCTOR_ID: u32 = 0xa69dae02;
}

impl Serializable for DhGenFail {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.nonce.serialize(buf)?;
        self.server_nonce.serialize(buf)?;
        self.new_nonce_hash3.serialize(buf)
    }
}

impl Deserializable for DhGenFail {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            nonce: <[u8; 16]>::deserialize(buf)?,
            server_nonce: <[u8; 16]>::deserialize(buf)?,
            new_nonce_hash3: <[u8; 16]>::deserialize(buf)?,
        })
    }
}

// ─── Auth key teardown ────────────────────────────────────────────────────────
//
// Zero-field constructors: the tag is the whole message. They still take part
// in the boxed protocol like any other constructor.

/// [`destroy_auth_key_ok`](https://core.telegram.org/constructor/destroy_auth_key_ok)
///
/// ```tl
/// destroy_auth_key_ok#f660e1d4 = DestroyAuthKeyRes;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DestroyAuthKeyOk;

impl Identifiable for DestroyAuthKeyOk {
    const CONSTRUCTOR_ID: u32 = 0xf660e1d4;
}

impl Serializable for DestroyAuthKeyOk {
    fn serialize(&self, _buf: &mut impl Extend<u8>) -> serialize::Result {
        Ok(())
    }
}

impl Deserializable for DestroyAuthKeyOk {
    fn deserialize(_buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self)
    }
}

/// [`destroy_auth_key_none`](https://core.telegram.org/constructor/destroy_auth_key_none)
///
/// ```tl
/// destroy_auth_key_none#0a9f2259 = DestroyAuthKeyRes;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DestroyAuthKeyNone;

impl Identifiable for DestroyAuthKeyNone {
    const CONSTRUCTOR_ID: u32 = 0x0a9f2259;
}

impl Serializable for DestroyAuthKeyNone {
    fn serialize(&self, _buf: &mut impl Extend<u8>) -> serialize::Result {
        Ok(())
    }
}

impl Deserializable for DestroyAuthKeyNone {
    fn deserialize(_buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self)
    }
}

/// [`destroy_auth_key_fail`](https://core.telegram.org/constructor/destroy_auth_key_fail)
///
/// ```tl
/// destroy_auth_key_fail#ea109b13 = DestroyAuthKeyRes;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DestroyAuthKeyFail;

impl Identifiable for DestroyAuthKeyFail {
    const CONSTRUCTOR_ID: u32 = 0xea109b13;
}

impl Serializable for DestroyAuthKeyFail {
    fn serialize(&self, _buf: &mut impl Extend<u8>) -> serialize::Result {
        Ok(())
    }
}

impl Deserializable for DestroyAuthKeyFail {
    fn deserialize(_buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self)
    }
}

// ─── Service messages ─────────────────────────────────────────────────────────

/// [`msgs_ack`](https://core.telegram.org/constructor/msgs_ack)
///
/// ```tl
/// msgs_ack#62d6b459 msg_ids:Vector<long> = MsgsAck;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MsgsAck {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgsAck {
    const CONSTRUCTOR_ID: u32 = 0x62d6b459;
}

impl Serializable for MsgsAck {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.msg_ids.serialize(buf)
    }
}

impl Deserializable for MsgsAck {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self { msg_ids: Vec::<i64>::deserialize(buf)? })
    }
}

/// [`bad_msg_notification`](https://core.telegram.org/constructor/bad_msg_notification)
///
/// ```tl
/// bad_msg_notification#a7eff811 bad_msg_id:long bad_msg_seqno:int error_code:int = BadMsgNotification;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BadMsgNotification {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
}

impl Identifiable for BadMsgNotification {
    const CONSTRUCTOR_ID: u32 = 0xa7eff811;
}

impl Serializable for BadMsgNotification {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.bad_msg_id.serialize(buf)?;
        self.bad_msg_seqno.serialize(buf)?;
        self.error_code.serialize(buf)
    }
}

impl Deserializable for BadMsgNotification {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            bad_msg_id: i64::deserialize(buf)?,
            bad_msg_seqno: i32::deserialize(buf)?,
            error_code: i32::deserialize(buf)?,
        })
    }
}

/// [`bad_server_salt`](https://core.telegram.org/constructor/bad_server_salt)
///
/// ```tl
/// bad_server_salt#edab447b bad_msg_id:long bad_msg_seqno:int error_code:int new_server_salt:long = BadMsgNotification;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BadServerSalt {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub error_code: i32,
    pub new_server_salt: i64,
}

impl Identifiable for BadServerSalt {
    const CONSTRUCTOR_ID: u32 = 0xedab447b;
}

impl Serializable for BadServerSalt {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.bad_msg_id.serialize(buf)?;
        self.bad_msg_seqno.serialize(buf)?;
        self.error_code.serialize(buf)?;
        self.new_server_salt.serialize(buf)
    }
}

impl Deserializable for BadServerSalt {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            bad_msg_id: i64::deserialize(buf)?,
            bad_msg_seqno: i32::deserialize(buf)?,
            error_code: i32::deserialize(buf)?,
            new_server_salt: i64::deserialize(buf)?,
        })
    }
}

/// [`msgs_state_req`](https://core.telegram.org/constructor/msgs_state_req)
///
/// ```tl
/// msgs_state_req#da69fb52 msg_ids:Vector<long> = MsgsStateReq;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MsgsStateReq {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgsStateReq {
    const CONSTRUCTOR_ID: u32 = 0xda69fb52;
}

impl Serializable for MsgsStateReq {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.msg_ids.serialize(buf)
    }
}

impl Deserializable for MsgsStateReq {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self { msg_ids: Vec::<i64>::deserialize(buf)? })
    }
}

/// [`msgs_state_info`](https://core.telegram.org/constructor/msgs_state_info)
///
/// `info` holds one status byte per requested message ID.
///
/// ```tl
/// msgs_state_info#04deb57d req_msg_id:long info:bytes = MsgsStateInfo;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MsgsStateInfo {
    pub req_msg_id: i64,
    pub info: Vec<u8>,
}

impl Identifiable for MsgsStateInfo {
    const CONSTRUCTOR_ID: u32 = 0x04deb57d;
}

impl Serializable for MsgsStateInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.req_msg_id.serialize(buf)?;
        self.info.serialize(buf)
    }
}

impl Deserializable for MsgsStateInfo {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            req_msg_id: i64::deserialize(buf)?,
            info: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// [`msgs_all_info`](https://core.telegram.org/constructor/msgs_all_info)
///
/// ```tl
/// msgs_all_info#8cc0d131 msg_ids:Vector<long> info:bytes = MsgsAllInfo;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MsgsAllInfo {
    pub msg_ids: Vec<i64>,
    pub info: Vec<u8>,
}

impl Identifiable for MsgsAllInfo {
    const CONSTRUCTOR_ID: u32 = 0x8cc0d131;
}

impl Serializable for MsgsAllInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.msg_ids.serialize(buf)?;
        self.info.serialize(buf)
    }
}

impl Deserializable for MsgsAllInfo {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            msg_ids: Vec::<i64>::deserialize(buf)?,
            info: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// [`msg_detailed_info`](https://core.telegram.org/constructor/msg_detailed_info)
///
/// ```tl
/// msg_detailed_info#276d3ec6 msg_id:long answer_msg_id:long bytes:int status:int = MsgDetailedInfo;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MsgDetailedInfo {
    pub msg_id: i64,
    pub answer_msg_id: i64,
    pub bytes: i32,
    pub status: i32,
}

impl Identifiable for MsgDetailedInfo {
    const CONSTRUCTOR_ID: u32 = 0x276d3ec6;
}

impl Serializable for MsgDetailedInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.msg_id.serialize(buf)?;
        self.answer_msg_id.serialize(buf)?;
        self.bytes.serialize(buf)?;
        self.status.serialize(buf)
    }
}

impl Deserializable for MsgDetailedInfo {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            msg_id: i64::deserialize(buf)?,
            answer_msg_id: i64::deserialize(buf)?,
            bytes: i32::deserialize(buf)?,
            status: i32::deserialize(buf)?,
        })
    }
}

/// [`msg_new_detailed_info`](https://core.telegram.org/constructor/msg_new_detailed_info)
///
/// ```tl
/// msg_new_detailed_info#809db6df answer_msg_id:long bytes:int status:int = MsgDetailedInfo;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MsgNewDetailedInfo {
    pub answer_msg_id: i64,
    pub bytes: i32,
    pub status: i32,
}

impl Identifiable for MsgNewDetailedInfo {
    const CONSTRUCTOR_ID: u32 = 0x809db6df;
}

impl Serializable for MsgNewDetailedInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.answer_msg_id.serialize(buf)?;
        self.bytes.serialize(buf)?;
        self.status.serialize(buf)
    }
}

impl Deserializable for MsgNewDetailedInfo {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            answer_msg_id: i64::deserialize(buf)?,
            bytes: i32::deserialize(buf)?,
            status: i32::deserialize(buf)?,
        })
    }
}

/// [`msg_resend_req`](https://core.telegram.org/constructor/msg_resend_req)
///
/// ```tl
/// msg_resend_req#7d861a08 msg_ids:Vector<long> = MsgResendReq;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MsgResendReq {
    pub msg_ids: Vec<i64>,
}

impl Identifiable for MsgResendReq {
    const CONSTRUCTOR_ID: u32 = 0x7d861a08;
}

impl Serializable for MsgResendReq {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.msg_ids.serialize(buf)
    }
}

impl Deserializable for MsgResendReq {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self { msg_ids: Vec::<i64>::deserialize(buf)? })
    }
}

// ─── RPC plumbing ─────────────────────────────────────────────────────────────

/// [`rpc_result`](https://core.telegram.org/constructor/rpc_result)
///
/// The `result` field is generically typed: only its own embedded
/// constructor ID says what it is, so decoding re-enters the generic
/// dispatcher, and encoding writes the inner object boxed, with no extra
/// wrapping around it.
///
/// ```tl
/// rpc_result#f35c6d01 req_msg_id:long result:Object = RpcResult;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RpcResult {
    pub req_msg_id: i64,
    pub result: Box<crate::Object>,
}

impl Identifiable for RpcResult {
    const CONSTRUCTOR_ID: u32 = 0xf35c6d01;
}

impl Serializable for RpcResult {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.req_msg_id.serialize(buf)?;
        self.result.serialize(buf)
    }
}

impl Deserializable for RpcResult {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            req_msg_id: i64::deserialize(buf)?,
            result: Box::new(crate::Object::deserialize(buf)?),
        })
    }
}

/// [`rpc_error`](https://core.telegram.org/constructor/rpc_error)
///
/// ```tl
/// rpc_error#2144ca19 error_code:int error_message:string = RpcError;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    pub error_code: i32,
    pub error_message: String,
}

impl Identifiable for RpcError {
    const CONSTRUCTOR_ID: u32 = 0x2144ca19;
}

impl Serializable for RpcError {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.error_code.serialize(buf)?;
        self.error_message.serialize(buf)
    }
}

impl Deserializable for RpcError {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            error_code: i32::deserialize(buf)?,
            error_message: String::deserialize(buf)?,
        })
    }
}

/// [`rpc_answer_unknown`](https://core.telegram.org/constructor/rpc_answer_unknown)
///
/// ```tl
/// rpc_answer_unknown#5e2ad36e = RpcDropAnswer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RpcAnswerUnknown;

impl Identifiable for RpcAnswerUnknown {
    const CONSTRUCTOR_ID: u32 = 0x5e2ad36e;
}

impl Serializable for RpcAnswerUnknown {
    fn serialize(&self, _buf: &mut impl Extend<u8>) -> serialize::Result {
        Ok(())
    }
}

impl Deserializable for RpcAnswerUnknown {
    fn deserialize(_buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self)
    }
}

/// [`rpc_answer_dropped_running`](https://core.telegram.org/constructor/rpc_answer_dropped_running)
///
/// ```tl
/// rpc_answer_dropped_running#cd78e586 = RpcDropAnswer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RpcAnswerDroppedRunning;

impl Identifiable for RpcAnswerDroppedRunning {
    const CONSTRUCTOR_ID: u32 = 0xcd78e586;
}

impl Serializable for RpcAnswerDroppedRunning {
    fn serialize(&self, _buf: &mut impl Extend<u8>) -> serialize::Result {
        Ok(())
    }
}

impl Deserializable for RpcAnswerDroppedRunning {
    fn deserialize(_buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self)
    }
}

/// [`rpc_answer_dropped`](https://core.telegram.org/constructor/rpc_answer_dropped)
///
/// ```tl
/// rpc_answer_dropped#a43ad8b7 msg_id:long seq_no:int bytes:int = RpcDropAnswer;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RpcAnswerDropped {
    pub msg_id: i64,
    pub seq_no: i32,
    pub bytes: i32,
}

impl Identifiable for RpcAnswerDropped {
    const CONSTRUCTOR_ID: u32 = 0xa43ad8b7;
}

impl Serializable for RpcAnswerDropped {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.msg_id.serialize(buf)?;
        self.seq_no.serialize(buf)?;
        self.bytes.serialize(buf)
    }
}

impl Deserializable for RpcAnswerDropped {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            msg_id: i64::deserialize(buf)?,
            seq_no: i32::deserialize(buf)?,
            bytes: i32::deserialize(buf)?,
        })
    }
}

// ─── Session bookkeeping ──────────────────────────────────────────────────────

/// [`pong`](https://core.telegram.org/constructor/pong)
///
/// ```tl
/// pong#347773c5 msg_id:long ping_id:long = Pong;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Pong {
    pub msg_id: i64,
    pub ping_id: i64,
}

impl Identifiable for Pong {
    const CONSTRUCTOR_ID: u32 = 0x347773c5;
}

impl Serializable for Pong {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.msg_id.serialize(buf)?;
        self.ping_id.serialize(buf)
    }
}

impl Deserializable for Pong {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            msg_id: i64::deserialize(buf)?,
            ping_id: i64::deserialize(buf)?,
        })
    }
}

/// [`destroy_session_ok`](https://core.telegram.org/constructor/destroy_session_ok)
///
/// ```tl
/// destroy_session_ok#e22045fc session_id:long = DestroySessionRes;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DestroySessionOk {
    pub session_id: i64,
}

impl Identifiable for DestroySessionOk {
    const CONSTRUCTOR_ID: u32 = 0xe22045fc;
}

impl Serializable for DestroySessionOk {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.session_id.serialize(buf)
    }
}

impl Deserializable for DestroySessionOk {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self { session_id: i64::deserialize(buf)? })
    }
}

/// [`destroy_session_none`](https://core.telegram.org/constructor/destroy_session_none)
///
/// ```tl
/// destroy_session_none#62d350c9 session_id:long = DestroySessionRes;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DestroySessionNone {
    pub session_id: i64,
}

impl Identifiable for DestroySessionNone {
    const CONSTRUCTOR_ID: u32 = 0x62d350c9;
}

impl Serializable for DestroySessionNone {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.session_id.serialize(buf)
    }
}

impl Deserializable for DestroySessionNone {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self { session_id: i64::deserialize(buf)? })
    }
}

/// [`new_session_created`](https://core.telegram.org/constructor/new_session_created)
///
/// ```tl
/// new_session_created#9ec20908 first_msg_id:long unique_id:long server_salt:long = NewSession;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NewSessionCreated {
    pub first_msg_id: i64,
    pub unique_id: i64,
    pub server_salt: i64,
}

impl Identifiable for NewSessionCreated {
    const CONSTRUCTOR_ID: u32 = 0x9ec20908;
}

impl Serializable for NewSessionCreated {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.first_msg_id.serialize(buf)?;
        self.unique_id.serialize(buf)?;
        self.server_salt.serialize(buf)
    }
}

impl Deserializable for NewSessionCreated {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            first_msg_id: i64::deserialize(buf)?,
            unique_id: i64::deserialize(buf)?,
            server_salt: i64::deserialize(buf)?,
        })
    }
}

/// [`http_wait`](https://core.telegram.org/constructor/http_wait)
///
/// ```tl
/// http_wait#9299359f max_delay:int wait_after:int max_wait:int = HttpWait;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpWait {
    pub max_delay: i32,
    pub wait_after: i32,
    pub max_wait: i32,
}

impl Identifiable for HttpWait {
    const CONSTRUCTOR_ID: u32 = 0x9299359f;
}

impl Serializable for HttpWait {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.max_delay.serialize(buf)?;
        self.wait_after.serialize(buf)?;
        self.max_wait.serialize(buf)
    }
}

impl Deserializable for HttpWait {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            max_delay: i32::deserialize(buf)?,
            wait_after: i32::deserialize(buf)?,
            max_wait: i32::deserialize(buf)?,
        })
    }
}

// ─── DC discovery ─────────────────────────────────────────────────────────────

/// [`ipPort`](https://core.telegram.org/constructor/ipPort)
///
/// ```tl
/// ipPort#d433ad73 ipv4:int port:int = IpPort;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IpPort {
    pub ipv4: i32,
    pub port: i32,
}

impl Identifiable for IpPort {
    const CONSTRUCTOR_ID: u32 = 0xd433ad73;
}

impl Serializable for IpPort {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.ipv4.serialize(buf)?;
        self.port.serialize(buf)
    }
}

impl Deserializable for IpPort {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            ipv4: i32::deserialize(buf)?,
            port: i32::deserialize(buf)?,
        })
    }
}

/// [`ipPortSecret`](https://core.telegram.org/constructor/ipPortSecret)
///
/// ```tl
/// ipPortSecret#37982646 ipv4:int port:int secret:bytes = IpPort;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IpPortSecret {
    pub ipv4: i32,
    pub port: i32,
    pub secret: Vec<u8>,
}

impl Identifiable for IpPortSecret {
    const CONSTRUCTOR_ID: u32 = 0x37982646;
}

impl Serializable for IpPortSecret {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.ipv4.serialize(buf)?;
        self.port.serialize(buf)?;
        self.secret.serialize(buf)
    }
}

impl Deserializable for IpPortSecret {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            ipv4: i32::deserialize(buf)?,
            port: i32::deserialize(buf)?,
            secret: Vec::<u8>::deserialize(buf)?,
        })
    }
}

/// [`accessPointRule`](https://core.telegram.org/constructor/accessPointRule)
///
/// `ips` is a *bare* vector of boxed elements: a count, then per element a
/// constructor ID resolved against [`crate::enums::IpPort`]'s variants.
///
/// ```tl
/// accessPointRule#4679b65f phone_prefix_rules:string dc_id:int ips:vector<IpPort> = AccessPointRule;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AccessPointRule {
    pub phone_prefix_rules: String,
    pub dc_id: i32,
    pub ips: RawVec<crate::enums::IpPort>,
}

impl Identifiable for AccessPointRule {
    const CONSTRUCTOR_ID: u32 = 0x4679b65f;
}

impl Serializable for AccessPointRule {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        self.phone_prefix_rules.serialize(buf)?;
        self.dc_id.serialize(buf)?;
        self.ips.serialize(buf)
    }
}

impl Deserializable for AccessPointRule {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        Ok(Self {
            phone_prefix_rules: String::deserialize(buf)?,
            dc_id: i32::deserialize(buf)?,
            ips: RawVec::<crate::enums::IpPort>::deserialize(buf)?,
        })
    }
}

// ─── help.* namespace ─────────────────────────────────────────────────────────

pub mod help {
    //! Constructors in the `help.*` schema namespace.

    use wiregram_tl_types::deserialize::{self, Buffer};
    use wiregram_tl_types::{Deserializable, Identifiable, RawVec, Serializable, serialize};

    /// [`help.configSimple`](https://core.telegram.org/constructor/help.configSimple)
    ///
    /// ```tl
    /// help.configSimple#5a592a6c date:int expires:int rules:vector<AccessPointRule> = help.ConfigSimple;
    /// ```
    #[derive(Clone, Debug, PartialEq)]
    pub struct ConfigSimple {
        pub date: i32,
        pub expires: i32,
        pub rules: RawVec<crate::enums::AccessPointRule>,
    }

    impl Identifiable for ConfigSimple {
        const CONSTRUCTOR_ID: u32 = 0x5a592a6c;
    }

    impl Serializable for ConfigSimple {
        fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
            self.date.serialize(buf)?;
            self.expires.serialize(buf)?;
            self.rules.serialize(buf)
        }
    }

    impl Deserializable for ConfigSimple {
        fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
            Ok(Self {
                date: i32::deserialize(buf)?,
                expires: i32::deserialize(buf)?,
                rules: RawVec::<crate::enums::AccessPointRule>::deserialize(buf)?,
            })
        }
    }
}

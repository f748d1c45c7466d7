//! Boxed types of the MTProto service schema, as enums over their
//! constructors.
//!
//! The enum owns the tag half of the wire contract: `serialize` writes the
//! variant's constructor ID and then the bare body; `deserialize` reads the
//! ID, matches it against the variants, and hands the rest of the stream to
//! the matching struct in [`crate::types`]. An ID that is none of the
//! variants is an [`UnexpectedConstructor`] error.
//!
//! Variant names are the constructor names with the enum's own name stripped
//! where it is a prefix (`server_DH_params_ok` → [`ServerDhParams::Ok`]).
//!
//! [`UnexpectedConstructor`]: wiregram_tl_types::deserialize::Error::UnexpectedConstructor

use wiregram_tl_types::deserialize::{self, Buffer};
use wiregram_tl_types::{Deserializable, Identifiable, Serializable, serialize};

use crate::types;

// ─── Key exchange ─────────────────────────────────────────────────────────────

/// [`ResPQ`](https://core.telegram.org/type/ResPQ)
#[derive(Clone, Debug, PartialEq)]
pub enum ResPq {
    ResPq(types::ResPq),
}

impl Serializable for ResPq {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::ResPq(x) => {
                types::ResPq::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for ResPq {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::ResPq::CONSTRUCTOR_ID => Self::ResPq(types::ResPq::deserialize(buf)?),
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::ResPq> for ResPq {
    fn from(x: types::ResPq) -> Self {
        Self::ResPq(x)
    }
}

/// [`P_Q_inner_data`](https://core.telegram.org/type/P_Q_inner_data)
#[derive(Clone, Debug, PartialEq)]
pub enum PQInnerData {
    PQInnerData(types::PQInnerData),
    Dc(types::PQInnerDataDc),
    Temp(types::PQInnerDataTemp),
    TempDc(types::PQInnerDataTempDc),
}

impl Serializable for PQInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::PQInnerData(x) => {
                types::PQInnerData::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::Dc(x) => {
                types::PQInnerDataDc::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::Temp(x) => {
                types::PQInnerDataTemp::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::TempDc(x) => {
                types::PQInnerDataTempDc::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for PQInnerData {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::PQInnerData::CONSTRUCTOR_ID => {
                Self::PQInnerData(types::PQInnerData::deserialize(buf)?)
            }
            types::PQInnerDataDc::CONSTRUCTOR_ID => {
                Self::Dc(types::PQInnerDataDc::deserialize(buf)?)
            }
            types::PQInnerDataTemp::CONSTRUCTOR_ID => {
                Self::Temp(types::PQInnerDataTemp::deserialize(buf)?)
            }
            types::PQInnerDataTempDc::CONSTRUCTOR_ID => {
                Self::TempDc(types::PQInnerDataTempDc::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::PQInnerData> for PQInnerData {
    fn from(x: types::PQInnerData) -> Self {
        Self::PQInnerData(x)
    }
}

impl From<types::PQInnerDataDc> for PQInnerData {
    fn from(x: types::PQInnerDataDc) -> Self {
        Self::Dc(x)
    }
}

impl From<types::PQInnerDataTemp> for PQInnerData {
    fn from(x: types::PQInnerDataTemp) -> Self {
        Self::Temp(x)
    }
}

impl From<types::PQInnerDataTempDc> for PQInnerData {
    fn from(x: types::PQInnerDataTempDc) -> Self {
        Self::TempDc(x)
    }
}

/// [`BindAuthKeyInner`](https://core.telegram.org/type/BindAuthKeyInner)
#[derive(Clone, Debug, PartialEq)]
pub enum BindAuthKeyInner {
    BindAuthKeyInner(types::BindAuthKeyInner),
}

impl Serializable for BindAuthKeyInner {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::BindAuthKeyInner(x) => {
                types::BindAuthKeyInner::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for BindAuthKeyInner {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::BindAuthKeyInner::CONSTRUCTOR_ID => {
                Self::BindAuthKeyInner(types::BindAuthKeyInner::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::BindAuthKeyInner> for BindAuthKeyInner {
    fn from(x: types::BindAuthKeyInner) -> Self {
        Self::BindAuthKeyInner(x)
    }
}

/// [`Server_DH_Params`](https://core.telegram.org/type/Server_DH_Params)
#[derive(Clone, Debug, PartialEq)]
pub enum ServerDhParams {
    Fail(types::ServerDhParamsFail),
    Ok(types::ServerDhParamsOk),
}

impl Serializable for ServerDhParams {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::Fail(x) => {
                types::ServerDhParamsFail::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::Ok(x) => {
                types::ServerDhParamsOk::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for ServerDhParams {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::ServerDhParamsFail::CONSTRUCTOR_ID => {
                Self::Fail(types::ServerDhParamsFail::deserialize(buf)?)
            }
            types::ServerDhParamsOk::CONSTRUCTOR_ID => {
                Self::Ok(types::ServerDhParamsOk::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::ServerDhParamsFail> for ServerDhParams {
    fn from(x: types::ServerDhParamsFail) -> Self {
        Self::Fail(x)
    }
}

impl From<types::ServerDhParamsOk> for ServerDhParams {
    fn from(x: types::ServerDhParamsOk) -> Self {
        Self::Ok(x)
    }
}

/// [`Server_DH_inner_data`](https://core.telegram.org/type/Server_DH_inner_data)
#[derive(Clone, Debug, PartialEq)]
pub enum ServerDhInnerData {
    ServerDhInnerData(types::ServerDhInnerData),
}

impl Serializable for ServerDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::ServerDhInnerData(x) => {
                types::ServerDhInnerData::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for ServerDhInnerData {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::ServerDhInnerData::CONSTRUCTOR_ID => {
                Self::ServerDhInnerData(types::ServerDhInnerData::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::ServerDhInnerData> for ServerDhInnerData {
    fn from(x: types::ServerDhInnerData) -> Self {
        Self::ServerDhInnerData(x)
    }
}

/// [`Client_DH_Inner_Data`](https://core.telegram.org/type/Client_DH_Inner_Data)
#[derive(Clone, Debug, PartialEq)]
pub enum ClientDhInnerData {
    ClientDhInnerData(types::ClientDhInnerData),
}

impl Serializable for ClientDhInnerData {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::ClientDhInnerData(x) => {
                types::ClientDhInnerData::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for ClientDhInnerData {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::ClientDhInnerData::CONSTRUCTOR_ID => {
                Self::ClientDhInnerData(types::ClientDhInnerData::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::ClientDhInnerData> for ClientDhInnerData {
    fn from(x: types::ClientDhInnerData) -> Self {
        Self::ClientDhInnerData(x)
    }
}

/// [`Set_client_DH_params_answer`](https://core.telegram.org/type/Set_client_DH_params_answer)
#[derive(Clone, Debug, PartialEq)]
pub enum SetClientDhParamsAnswer {
    DhGenOk(types::DhGenOk),
    DhGenRetry(types::DhGenRetry),
    DhGenFail(types::DhGenFail),
}

impl Serializable for SetClientDhParamsAnswer {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::DhGenOk(x) => {
                types::DhGenOk::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::DhGenRetry(x) => {
                types::DhGenRetry::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::DhGenFail(x) => {
                types::DhGenFail::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for SetClientDhParamsAnswer {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::DhGenOk::CONSTRUCTOR_ID => Self::DhGenOk(types::DhGenOk::deserialize(buf)?),
            types::DhGenRetry::CONSTRUCTOR_ID => {
                Self::DhGenRetry(types::DhGenRetry::deserialize(buf)?)
            }
            types::DhGenFail::CONSTRUCTOR_ID => {
                Self::DhGenFail(types::DhGenFail::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::DhGenOk> for SetClientDhParamsAnswer {
    fn from(x: types::DhGenOk) -> Self {
        Self::DhGenOk(x)
    }
}

impl From<types::DhGenRetry> for SetClientDhParamsAnswer {
    fn from(x: types::DhGenRetry) -> Self {
        Self::DhGenRetry(x)
    }
}

impl From<types::DhGenFail> for SetClientDhParamsAnswer {
    fn from(x: types::DhGenFail) -> Self {
        Self::DhGenFail(x)
    }
}

/// [`DestroyAuthKeyRes`](https://core.telegram.org/type/DestroyAuthKeyRes)
///
/// All three constructors are zero-field: the variant *is* the payload.
#[derive(Clone, Debug, PartialEq)]
pub enum DestroyAuthKeyRes {
    DestroyAuthKeyOk,
    DestroyAuthKeyNone,
    DestroyAuthKeyFail,
}

impl Serializable for DestroyAuthKeyRes {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::DestroyAuthKeyOk => types::DestroyAuthKeyOk::CONSTRUCTOR_ID.serialize(buf),
            Self::DestroyAuthKeyNone => types::DestroyAuthKeyNone::CONSTRUCTOR_ID.serialize(buf),
            Self::DestroyAuthKeyFail => types::DestroyAuthKeyFail::CONSTRUCTOR_ID.serialize(buf),
        }
    }
}

impl Deserializable for DestroyAuthKeyRes {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::DestroyAuthKeyOk::CONSTRUCTOR_ID => Self::DestroyAuthKeyOk,
            types::DestroyAuthKeyNone::CONSTRUCTOR_ID => Self::DestroyAuthKeyNone,
            types::DestroyAuthKeyFail::CONSTRUCTOR_ID => Self::DestroyAuthKeyFail,
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::DestroyAuthKeyOk> for DestroyAuthKeyRes {
    fn from(_x: types::DestroyAuthKeyOk) -> Self {
        Self::DestroyAuthKeyOk
    }
}

impl From<types::DestroyAuthKeyNone> for DestroyAuthKeyRes {
    fn from(_x: types::DestroyAuthKeyNone) -> Self {
        Self::DestroyAuthKeyNone
    }
}

impl From<types::DestroyAuthKeyFail> for DestroyAuthKeyRes {
    fn from(_x: types::DestroyAuthKeyFail) -> Self {
        Self::DestroyAuthKeyFail
    }
}

// ─── Service messages ─────────────────────────────────────────────────────────

/// [`MsgsAck`](https://core.telegram.org/type/MsgsAck)
#[derive(Clone, Debug, PartialEq)]
pub enum MsgsAck {
    MsgsAck(types::MsgsAck),
}

impl Serializable for MsgsAck {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::MsgsAck(x) => {
                types::MsgsAck::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for MsgsAck {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::MsgsAck::CONSTRUCTOR_ID => Self::MsgsAck(types::MsgsAck::deserialize(buf)?),
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::MsgsAck> for MsgsAck {
    fn from(x: types::MsgsAck) -> Self {
        Self::MsgsAck(x)
    }
}

/// [`BadMsgNotification`](https://core.telegram.org/type/BadMsgNotification)
#[derive(Clone, Debug, PartialEq)]
pub enum BadMsgNotification {
    BadMsgNotification(types::BadMsgNotification),
    BadServerSalt(types::BadServerSalt),
}

impl Serializable for BadMsgNotification {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::BadMsgNotification(x) => {
                types::BadMsgNotification::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::BadServerSalt(x) => {
                types::BadServerSalt::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for BadMsgNotification {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::BadMsgNotification::CONSTRUCTOR_ID => {
                Self::BadMsgNotification(types::BadMsgNotification::deserialize(buf)?)
            }
            types::BadServerSalt::CONSTRUCTOR_ID => {
                Self::BadServerSalt(types::BadServerSalt::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::BadMsgNotification> for BadMsgNotification {
    fn from(x: types::BadMsgNotification) -> Self {
        Self::BadMsgNotification(x)
    }
}

impl From<types::BadServerSalt> for BadMsgNotification {
    fn from(x: types::BadServerSalt) -> Self {
        Self::BadServerSalt(x)
    }
}

/// [`MsgsStateReq`](https://core.telegram.org/type/MsgsStateReq)
#[derive(Clone, Debug, PartialEq)]
pub enum MsgsStateReq {
    MsgsStateReq(types::MsgsStateReq),
}

impl Serializable for MsgsStateReq {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::MsgsStateReq(x) => {
                types::MsgsStateReq::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for MsgsStateReq {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::MsgsStateReq::CONSTRUCTOR_ID => {
                Self::MsgsStateReq(types::MsgsStateReq::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::MsgsStateReq> for MsgsStateReq {
    fn from(x: types::MsgsStateReq) -> Self {
        Self::MsgsStateReq(x)
    }
}

/// [`MsgsStateInfo`](https://core.telegram.org/type/MsgsStateInfo)
#[derive(Clone, Debug, PartialEq)]
pub enum MsgsStateInfo {
    MsgsStateInfo(types::MsgsStateInfo),
}

impl Serializable for MsgsStateInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::MsgsStateInfo(x) => {
                types::MsgsStateInfo::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for MsgsStateInfo {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::MsgsStateInfo::CONSTRUCTOR_ID => {
                Self::MsgsStateInfo(types::MsgsStateInfo::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::MsgsStateInfo> for MsgsStateInfo {
    fn from(x: types::MsgsStateInfo) -> Self {
        Self::MsgsStateInfo(x)
    }
}

/// [`MsgsAllInfo`](https://core.telegram.org/type/MsgsAllInfo)
#[derive(Clone, Debug, PartialEq)]
pub enum MsgsAllInfo {
    MsgsAllInfo(types::MsgsAllInfo),
}

impl Serializable for MsgsAllInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::MsgsAllInfo(x) => {
                types::MsgsAllInfo::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for MsgsAllInfo {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::MsgsAllInfo::CONSTRUCTOR_ID => {
                Self::MsgsAllInfo(types::MsgsAllInfo::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::MsgsAllInfo> for MsgsAllInfo {
    fn from(x: types::MsgsAllInfo) -> Self {
        Self::MsgsAllInfo(x)
    }
}

/// [`MsgDetailedInfo`](https://core.telegram.org/type/MsgDetailedInfo)
#[derive(Clone, Debug, PartialEq)]
pub enum MsgDetailedInfo {
    MsgDetailedInfo(types::MsgDetailedInfo),
    MsgNewDetailedInfo(types::MsgNewDetailedInfo),
}

impl Serializable for MsgDetailedInfo {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::MsgDetailedInfo(x) => {
                types::MsgDetailedInfo::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::MsgNewDetailedInfo(x) => {
                types::MsgNewDetailedInfo::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for MsgDetailedInfo {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::MsgDetailedInfo::CONSTRUCTOR_ID => {
                Self::MsgDetailedInfo(types::MsgDetailedInfo::deserialize(buf)?)
            }
            types::MsgNewDetailedInfo::CONSTRUCTOR_ID => {
                Self::MsgNewDetailedInfo(types::MsgNewDetailedInfo::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::MsgDetailedInfo> for MsgDetailedInfo {
    fn from(x: types::MsgDetailedInfo) -> Self {
        Self::MsgDetailedInfo(x)
    }
}

impl From<types::MsgNewDetailedInfo> for MsgDetailedInfo {
    fn from(x: types::MsgNewDetailedInfo) -> Self {
        Self::MsgNewDetailedInfo(x)
    }
}

/// [`MsgResendReq`](https://core.telegram.org/type/MsgResendReq)
#[derive(Clone, Debug, PartialEq)]
pub enum MsgResendReq {
    MsgResendReq(types::MsgResendReq),
}

impl Serializable for MsgResendReq {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::MsgResendReq(x) => {
                types::MsgResendReq::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for MsgResendReq {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::MsgResendReq::CONSTRUCTOR_ID => {
                Self::MsgResendReq(types::MsgResendReq::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::MsgResendReq> for MsgResendReq {
    fn from(x: types::MsgResendReq) -> Self {
        Self::MsgResendReq(x)
    }
}

// ─── RPC plumbing ─────────────────────────────────────────────────────────────

/// [`RpcResult`](https://core.telegram.org/type/RpcResult)
#[derive(Clone, Debug, PartialEq)]
pub enum RpcResult {
    RpcResult(types::RpcResult),
}

impl Serializable for RpcResult {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::RpcResult(x) => {
                types::RpcResult::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for RpcResult {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::RpcResult::CONSTRUCTOR_ID => {
                Self::RpcResult(types::RpcResult::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::RpcResult> for RpcResult {
    fn from(x: types::RpcResult) -> Self {
        Self::RpcResult(x)
    }
}

/// [`RpcError`](https://core.telegram.org/type/RpcError)
#[derive(Clone, Debug, PartialEq)]
pub enum RpcError {
    RpcError(types::RpcError),
}

impl Serializable for RpcError {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::RpcError(x) => {
                types::RpcError::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for RpcError {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::RpcError::CONSTRUCTOR_ID => Self::RpcError(types::RpcError::deserialize(buf)?),
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::RpcError> for RpcError {
    fn from(x: types::RpcError) -> Self {
        Self::RpcError(x)
    }
}

/// [`RpcDropAnswer`](https://core.telegram.org/type/RpcDropAnswer)
#[derive(Clone, Debug, PartialEq)]
pub enum RpcDropAnswer {
    RpcAnswerUnknown,
    RpcAnswerDroppedRunning,
    RpcAnswerDropped(types::RpcAnswerDropped),
}

impl Serializable for RpcDropAnswer {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::RpcAnswerUnknown => types::RpcAnswerUnknown::CONSTRUCTOR_ID.serialize(buf),
            Self::RpcAnswerDroppedRunning => {
                types::RpcAnswerDroppedRunning::CONSTRUCTOR_ID.serialize(buf)
            }
            Self::RpcAnswerDropped(x) => {
                types::RpcAnswerDropped::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for RpcDropAnswer {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::RpcAnswerUnknown::CONSTRUCTOR_ID => Self::RpcAnswerUnknown,
            types::RpcAnswerDroppedRunning::CONSTRUCTOR_ID => Self::RpcAnswerDroppedRunning,
            types::RpcAnswerDropped::CONSTRUCTOR_ID => {
                Self::RpcAnswerDropped(types::RpcAnswerDropped::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::RpcAnswerUnknown> for RpcDropAnswer {
    fn from(_x: types::RpcAnswerUnknown) -> Self {
        Self::RpcAnswerUnknown
    }
}

impl From<types::RpcAnswerDroppedRunning> for RpcDropAnswer {
    fn from(_x: types::RpcAnswerDroppedRunning) -> Self {
        Self::RpcAnswerDroppedRunning
    }
}

impl From<types::RpcAnswerDropped> for RpcDropAnswer {
    fn from(x: types::RpcAnswerDropped) -> Self {
        Self::RpcAnswerDropped(x)
    }
}

// ─── Session bookkeeping ──────────────────────────────────────────────────────

/// [`Pong`](https://core.telegram.org/type/Pong)
#[derive(Clone, Debug, PartialEq)]
pub enum Pong {
    Pong(types::Pong),
}

impl Serializable for Pong {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::Pong(x) => {
                types::Pong::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for Pong {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::Pong::CONSTRUCTOR_ID => Self::Pong(types::Pong::deserialize(buf)?),
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::Pong> for Pong {
    fn from(x: types::Pong) -> Self {
        Self::Pong(x)
    }
}

/// [`DestroySessionRes`](https://core.telegram.org/type/DestroySessionRes)
#[derive(Clone, Debug, PartialEq)]
pub enum DestroySessionRes {
    DestroySessionOk(types::DestroySessionOk),
    DestroySessionNone(types::DestroySessionNone),
}

impl Serializable for DestroySessionRes {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::DestroySessionOk(x) => {
                types::DestroySessionOk::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::DestroySessionNone(x) => {
                types::DestroySessionNone::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for DestroySessionRes {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::DestroySessionOk::CONSTRUCTOR_ID => {
                Self::DestroySessionOk(types::DestroySessionOk::deserialize(buf)?)
            }
            types::DestroySessionNone::CONSTRUCTOR_ID => {
                Self::DestroySessionNone(types::DestroySessionNone::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::DestroySessionOk> for DestroySessionRes {
    fn from(x: types::DestroySessionOk) -> Self {
        Self::DestroySessionOk(x)
    }
}

impl From<types::DestroySessionNone> for DestroySessionRes {
    fn from(x: types::DestroySessionNone) -> Self {
        Self::DestroySessionNone(x)
    }
}

/// [`NewSession`](https://core.telegram.org/type/NewSession)
#[derive(Clone, Debug, PartialEq)]
pub enum NewSession {
    Created(types::NewSessionCreated),
}

impl Serializable for NewSession {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::Created(x) => {
                types::NewSessionCreated::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for NewSession {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::NewSessionCreated::CONSTRUCTOR_ID => {
                Self::Created(types::NewSessionCreated::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::NewSessionCreated> for NewSession {
    fn from(x: types::NewSessionCreated) -> Self {
        Self::Created(x)
    }
}

/// [`HttpWait`](https://core.telegram.org/type/HttpWait)
#[derive(Clone, Debug, PartialEq)]
pub enum HttpWait {
    HttpWait(types::HttpWait),
}

impl Serializable for HttpWait {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::HttpWait(x) => {
                types::HttpWait::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for HttpWait {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::HttpWait::CONSTRUCTOR_ID => Self::HttpWait(types::HttpWait::deserialize(buf)?),
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::HttpWait> for HttpWait {
    fn from(x: types::HttpWait) -> Self {
        Self::HttpWait(x)
    }
}

// ─── DC discovery ─────────────────────────────────────────────────────────────

/// [`IpPort`](https://core.telegram.org/type/IpPort)
#[derive(Clone, Debug, PartialEq)]
pub enum IpPort {
    IpPort(types::IpPort),
    Secret(types::IpPortSecret),
}

impl Serializable for IpPort {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::IpPort(x) => {
                types::IpPort::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
            Self::Secret(x) => {
                types::IpPortSecret::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for IpPort {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::IpPort::CONSTRUCTOR_ID => Self::IpPort(types::IpPort::deserialize(buf)?),
            types::IpPortSecret::CONSTRUCTOR_ID => {
                Self::Secret(types::IpPortSecret::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::IpPort> for IpPort {
    fn from(x: types::IpPort) -> Self {
        Self::IpPort(x)
    }
}

impl From<types::IpPortSecret> for IpPort {
    fn from(x: types::IpPortSecret) -> Self {
        Self::Secret(x)
    }
}

/// [`AccessPointRule`](https://core.telegram.org/type/AccessPointRule)
#[derive(Clone, Debug, PartialEq)]
pub enum AccessPointRule {
    AccessPointRule(types::AccessPointRule),
}

impl Serializable for AccessPointRule {
    fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
        match self {
            Self::AccessPointRule(x) => {
                types::AccessPointRule::CONSTRUCTOR_ID.serialize(buf)?;
                x.serialize(buf)
            }
        }
    }
}

impl Deserializable for AccessPointRule {
    fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
        let id = u32::deserialize(buf)?;
        Ok(match id {
            types::AccessPointRule::CONSTRUCTOR_ID => {
                Self::AccessPointRule(types::AccessPointRule::deserialize(buf)?)
            }
            _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
        })
    }
}

impl From<types::AccessPointRule> for AccessPointRule {
    fn from(x: types::AccessPointRule) -> Self {
        Self::AccessPointRule(x)
    }
}

// ─── help.* namespace ─────────────────────────────────────────────────────────

pub mod help {
    //! Boxed types in the `help.*` schema namespace.

    use wiregram_tl_types::deserialize::{self, Buffer};
    use wiregram_tl_types::{Deserializable, Identifiable, Serializable, serialize};

    use crate::types;

    /// [`help.ConfigSimple`](https://core.telegram.org/type/help.ConfigSimple)
    #[derive(Clone, Debug, PartialEq)]
    pub enum ConfigSimple {
        ConfigSimple(types::help::ConfigSimple),
    }

    impl Serializable for ConfigSimple {
        fn serialize(&self, buf: &mut impl Extend<u8>) -> serialize::Result {
            match self {
                Self::ConfigSimple(x) => {
                    types::help::ConfigSimple::CONSTRUCTOR_ID.serialize(buf)?;
                    x.serialize(buf)
                }
            }
        }
    }

    impl Deserializable for ConfigSimple {
        fn deserialize(buf: Buffer) -> deserialize::Result<Self> {
            let id = u32::deserialize(buf)?;
            Ok(match id {
                types::help::ConfigSimple::CONSTRUCTOR_ID => {
                    Self::ConfigSimple(types::help::ConfigSimple::deserialize(buf)?)
                }
                _ => return Err(deserialize::Error::UnexpectedConstructor { id }),
            })
        }
    }

    impl From<types::help::ConfigSimple> for ConfigSimple {
        fn from(x: types::help::ConfigSimple) -> Self {
            Self::ConfigSimple(x)
        }
    }
}

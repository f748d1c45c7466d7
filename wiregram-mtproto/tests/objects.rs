use wiregram_mtproto::{Object, enums, read, types};
use wiregram_tl_types::{Cursor, RawVec, Serializable};

fn roundtrip(obj: Object) {
    let bytes = obj.to_bytes().unwrap();
    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(read(&mut cursor).unwrap(), obj);
    assert_eq!(cursor.remaining(), 0, "object must consume its whole encoding");
}

// ── Literal wire vectors ──────────────────────────────────────────────────────

#[test]
fn destroy_auth_key_ok_is_exactly_its_tag() {
    let obj = Object::from(enums::DestroyAuthKeyRes::DestroyAuthKeyOk);
    let bytes = obj.to_bytes().unwrap();
    assert_eq!(bytes, [0xD4, 0xE1, 0x60, 0xF6], "constructor 0xf660e1d4, LE");

    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(read(&mut cursor).unwrap(), obj);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn pong_wire_layout() {
    let obj = Object::from(enums::Pong::Pong(types::Pong { msg_id: 1, ping_id: 2 }));
    let bytes = obj.to_bytes().unwrap();

    let mut expected = Vec::new();
    expected.extend(0x347773c5u32.to_le_bytes());
    expected.extend(1i64.to_le_bytes());
    expected.extend(2i64.to_le_bytes());
    assert_eq!(bytes, expected);
    assert_eq!(bytes.len(), 20);
}

#[test]
fn msgs_ack_wire_layout() {
    let obj = Object::from(enums::MsgsAck::MsgsAck(types::MsgsAck { msg_ids: vec![100, 200] }));
    let bytes = obj.to_bytes().unwrap();

    let mut expected = Vec::new();
    expected.extend(0x62d6b459u32.to_le_bytes()); // msgs_ack
    expected.extend(0x1cb5c415u32.to_le_bytes()); // Vector
    expected.extend(2i32.to_le_bytes());
    expected.extend(100i64.to_le_bytes());
    expected.extend(200i64.to_le_bytes());
    assert_eq!(bytes, expected);

    match read(&mut Cursor::from_slice(&bytes)).unwrap() {
        Object::MsgsAck(enums::MsgsAck::MsgsAck(ack)) => assert_eq!(ack.msg_ids, vec![100, 200]),
        other => panic!("decoded to the wrong type: {other:?}"),
    }
}

// ── Key exchange objects ──────────────────────────────────────────────────────

#[test]
fn roundtrip_res_pq() {
    roundtrip(Object::from(enums::ResPq::ResPq(types::ResPq {
        nonce: [1; 16],
        server_nonce: [2; 16],
        pq: vec![0x17, 0xED, 0x48, 0x94, 0x1A, 0x08, 0xF9, 0x81],
        server_public_key_fingerprints: vec![-4344800451088585951],
    })));
}

#[test]
fn roundtrip_pq_inner_data_variants() {
    let base = types::PQInnerData {
        pq: vec![1, 2, 3, 4, 5, 6, 7, 8],
        p: vec![1, 2, 3, 4],
        q: vec![5, 6, 7, 8],
        nonce: [7; 16],
        server_nonce: [8; 16],
        new_nonce: [9; 32],
    };
    roundtrip(Object::from(enums::PQInnerData::from(base)));
    roundtrip(Object::from(enums::PQInnerData::TempDc(types::PQInnerDataTempDc {
        pq: vec![1, 2, 3, 4, 5, 6, 7, 8],
        p: vec![1, 2, 3, 4],
        q: vec![5, 6, 7, 8],
        nonce: [7; 16],
        server_nonce: [8; 16],
        new_nonce: [9; 32],
        dc: 2,
        expires_in: 86400,
    })));
}

#[test]
fn roundtrip_server_dh_params() {
    roundtrip(Object::from(enums::ServerDhParams::Ok(types::ServerDhParamsOk {
        nonce: [3; 16],
        server_nonce: [4; 16],
        encrypted_answer: vec![0xAA; 592],
    })));
    roundtrip(Object::from(enums::ServerDhParams::Fail(types::ServerDhParamsFail {
        nonce: [3; 16],
        server_nonce: [4; 16],
        new_nonce_hash: [5; 16],
    })));
}

#[test]
fn roundtrip_dh_inner_data_and_answers() {
    roundtrip(Object::from(enums::ServerDhInnerData::ServerDhInnerData(
        types::ServerDhInnerData {
            nonce: [1; 16],
            server_nonce: [2; 16],
            g: 3,
            dh_prime: vec![0xFF; 256],
            g_a: vec![0xEE; 256],
            server_time: 1_700_000_000,
        },
    )));
    roundtrip(Object::from(enums::ClientDhInnerData::ClientDhInnerData(
        types::ClientDhInnerData {
            nonce: [1; 16],
            server_nonce: [2; 16],
            retry_id: 0,
            g_b: vec![0xDD; 256],
        },
    )));
    roundtrip(Object::from(enums::SetClientDhParamsAnswer::DhGenOk(types::DhGenOk {
        nonce: [1; 16],
        server_nonce: [2; 16],
        new_nonce_hash1: [3; 16],
    })));
    roundtrip(Object::from(enums::BindAuthKeyInner::BindAuthKeyInner(
        types::BindAuthKeyInner {
            nonce: 99,
            temp_auth_key_id: 1,
            perm_auth_key_id: 2,
            temp_session_id: 3,
            expires_at: 4,
        },
    )));
}

// ── Service messages ──────────────────────────────────────────────────────────

#[test]
fn roundtrip_bad_msg_notification() {
    // error_code 16: msg_id too low
    let obj = Object::from(enums::BadMsgNotification::BadMsgNotification(
        types::BadMsgNotification { bad_msg_id: 5, bad_msg_seqno: 1, error_code: 16 },
    ));
    let bytes = obj.to_bytes().unwrap();
    match read(&mut Cursor::from_slice(&bytes)).unwrap() {
        Object::BadMsgNotification(enums::BadMsgNotification::BadMsgNotification(n)) => {
            assert_eq!(n.bad_msg_id, 5);
            assert_eq!(n.bad_msg_seqno, 1);
            assert_eq!(n.error_code, 16);
        }
        other => panic!("decoded to the wrong type: {other:?}"),
    }

    roundtrip(Object::from(enums::BadMsgNotification::BadServerSalt(types::BadServerSalt {
        bad_msg_id: 5,
        bad_msg_seqno: 1,
        error_code: 48,
        new_server_salt: -1,
    })));
}

#[test]
fn roundtrip_msg_state_family() {
    roundtrip(Object::from(enums::MsgsStateReq::MsgsStateReq(types::MsgsStateReq {
        msg_ids: vec![1, 2, 3],
    })));
    roundtrip(Object::from(enums::MsgsStateInfo::MsgsStateInfo(types::MsgsStateInfo {
        req_msg_id: 10,
        info: vec![1, 4, 4],
    })));
    roundtrip(Object::from(enums::MsgsAllInfo::MsgsAllInfo(types::MsgsAllInfo {
        msg_ids: vec![10, 20],
        info: vec![4, 4],
    })));
    roundtrip(Object::from(enums::MsgDetailedInfo::MsgNewDetailedInfo(
        types::MsgNewDetailedInfo { answer_msg_id: 7, bytes: 128, status: 0 },
    )));
    roundtrip(Object::from(enums::MsgResendReq::MsgResendReq(types::MsgResendReq {
        msg_ids: vec![42],
    })));
}

#[test]
fn roundtrip_session_notices() {
    roundtrip(Object::from(enums::NewSession::Created(types::NewSessionCreated {
        first_msg_id: 1,
        unique_id: 2,
        server_salt: 3,
    })));
    roundtrip(Object::from(enums::DestroySessionRes::DestroySessionOk(
        types::DestroySessionOk { session_id: 123 },
    )));
    roundtrip(Object::from(enums::DestroySessionRes::DestroySessionNone(
        types::DestroySessionNone { session_id: 123 },
    )));
    roundtrip(Object::from(enums::HttpWait::HttpWait(types::HttpWait {
        max_delay: 0,
        wait_after: 0,
        max_wait: 25000,
    })));
}

#[test]
fn roundtrip_zero_payload_constructors() {
    // Not degenerate no-ops: each is a complete, valid message of 4 bytes.
    for obj in [
        Object::from(enums::DestroyAuthKeyRes::DestroyAuthKeyOk),
        Object::from(enums::DestroyAuthKeyRes::DestroyAuthKeyNone),
        Object::from(enums::DestroyAuthKeyRes::DestroyAuthKeyFail),
        Object::from(enums::RpcDropAnswer::RpcAnswerUnknown),
        Object::from(enums::RpcDropAnswer::RpcAnswerDroppedRunning),
    ] {
        assert_eq!(obj.to_bytes().unwrap().len(), 4);
        roundtrip(obj);
    }
}

#[test]
fn roundtrip_rpc_error_and_drop() {
    roundtrip(Object::from(enums::RpcError::RpcError(types::RpcError {
        error_code: 420,
        error_message: "FLOOD_WAIT_17".to_owned(),
    })));
    roundtrip(Object::from(enums::RpcDropAnswer::RpcAnswerDropped(types::RpcAnswerDropped {
        msg_id: 1,
        seq_no: 3,
        bytes: 64,
    })));
}

// ── DC discovery (bare vectors of boxed elements) ─────────────────────────────

#[test]
fn roundtrip_access_point_rule() {
    let rule = types::AccessPointRule {
        phone_prefix_rules: "+7 +380".to_owned(),
        dc_id: 2,
        ips: RawVec(vec![
            enums::IpPort::IpPort(types::IpPort { ipv4: 0x5BCD_1503u32 as i32, port: 443 }),
            enums::IpPort::Secret(types::IpPortSecret {
                ipv4: 0x5BCD_1504u32 as i32,
                port: 443,
                secret: vec![0xEE; 16],
            }),
        ]),
    };
    roundtrip(Object::from(enums::AccessPointRule::AccessPointRule(rule)));
}

#[test]
fn roundtrip_config_simple() {
    let config = types::help::ConfigSimple {
        date: 1_700_000_000,
        expires: 1_700_086_400,
        rules: RawVec(vec![enums::AccessPointRule::AccessPointRule(types::AccessPointRule {
            phone_prefix_rules: String::new(),
            dc_id: 1,
            ips: RawVec(vec![enums::IpPort::IpPort(types::IpPort { ipv4: 16843009, port: 80 })]),
        })]),
    };
    roundtrip(Object::from(enums::help::ConfigSimple::ConfigSimple(config)));
}

// ── Bare body vs boxed object ─────────────────────────────────────────────────

#[test]
fn bare_struct_encoding_has_no_tag() {
    let pong = types::Pong { msg_id: 8, ping_id: 9 };
    let bare = pong.to_bytes().unwrap();
    assert_eq!(bare.len(), 16, "two longs, no constructor id");

    let boxed = Object::from(enums::Pong::Pong(pong)).to_bytes().unwrap();
    assert_eq!(&boxed[4..], &bare[..], "boxed form is tag + bare body");
}

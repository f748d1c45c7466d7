use std::collections::HashSet;

use wiregram_mtproto::{Object, enums, known_constructors, name_for_id, read, types};
use wiregram_tl_types::deserialize::Error;
use wiregram_tl_types::{Cursor, Deserializable, Serializable};

fn pong(msg_id: i64, ping_id: i64) -> Object {
    Object::from(enums::Pong::Pong(types::Pong { msg_id, ping_id }))
}

// ── Sequential reads over one stream ──────────────────────────────────────────

#[test]
fn two_objects_read_back_to_back() {
    let mut stream = pong(1, 10).to_bytes().unwrap();
    stream.extend(pong(2, 20).to_bytes().unwrap());

    let mut cursor = Cursor::from_slice(&stream);
    assert_eq!(read(&mut cursor).unwrap(), pong(1, 10));
    assert_eq!(read(&mut cursor).unwrap(), pong(2, 20));
    assert_eq!(cursor.remaining(), 0, "both objects fully consumed");
}

#[test]
fn mixed_stream_reads_in_order() {
    let objects = [
        Object::from(enums::MsgsAck::MsgsAck(types::MsgsAck { msg_ids: vec![1] })),
        Object::from(enums::DestroyAuthKeyRes::DestroyAuthKeyNone),
        Object::from(enums::RpcError::RpcError(types::RpcError {
            error_code: 401,
            error_message: "AUTH_KEY_UNREGISTERED".to_owned(),
        })),
    ];

    let mut stream = Vec::new();
    for obj in &objects {
        obj.serialize(&mut stream).unwrap();
    }

    let mut cursor = Cursor::from_slice(&stream);
    for expected in &objects {
        assert_eq!(&read(&mut cursor).unwrap(), expected);
    }
    assert_eq!(cursor.remaining(), 0);
}

// ── Generic nesting through rpc_result ────────────────────────────────────────

#[test]
fn rpc_result_nests_the_inner_object_verbatim() {
    let inner = pong(42, 7);
    let result = Object::from(enums::RpcResult::RpcResult(types::RpcResult {
        req_msg_id: 42,
        result: Box::new(inner.clone()),
    }));

    let bytes = result.to_bytes().unwrap();

    // Layout: rpc_result tag, req_msg_id, then the inner object's own boxed
    // encoding with nothing wrapped around it.
    let mut expected = Vec::new();
    expected.extend(0xf35c6d01u32.to_le_bytes());
    expected.extend(42i64.to_le_bytes());
    expected.extend(inner.to_bytes().unwrap());
    assert_eq!(bytes, expected);

    // Decoding re-dispatches generically on the inner tag.
    match read(&mut Cursor::from_slice(&bytes)).unwrap() {
        Object::RpcResult(enums::RpcResult::RpcResult(r)) => {
            assert_eq!(r.req_msg_id, 42);
            assert_eq!(*r.result, inner);
        }
        other => panic!("decoded to the wrong type: {other:?}"),
    }
}

#[test]
fn rpc_result_can_carry_a_boxed_vector() {
    let result = Object::from(enums::RpcResult::RpcResult(types::RpcResult {
        req_msg_id: 1,
        result: Box::new(Object::Vector(vec![pong(1, 1), pong(2, 2)])),
    }));

    let bytes = result.to_bytes().unwrap();
    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(read(&mut cursor).unwrap(), result);
    assert_eq!(cursor.remaining(), 0);
}

// ── Failure modes ─────────────────────────────────────────────────────────────

#[test]
fn unknown_constructor_is_an_error() {
    let mut bytes = Vec::new();
    bytes.extend(0xdeadbeefu32.to_le_bytes());
    bytes.extend(1i64.to_le_bytes());

    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(read(&mut cursor), Err(Error::UnknownConstructor { id: 0xdeadbeef }));
    assert_eq!(cursor.pos(), 4, "cursor sits just past the offending tag");
}

#[test]
fn truncated_object_is_never_partially_returned() {
    let bytes = Object::from(enums::MsgsAck::MsgsAck(types::MsgsAck { msg_ids: vec![100, 200] }))
        .to_bytes()
        .unwrap();

    // Removing the final byte must fail, not yield an ack with one id.
    let mut cursor = Cursor::from_slice(&bytes[..bytes.len() - 1]);
    assert_eq!(read(&mut cursor), Err(Error::UnexpectedEof));

    // Same for a header-only stream.
    let mut cursor = Cursor::from_slice(&bytes[..4]);
    assert_eq!(read(&mut cursor), Err(Error::UnexpectedEof));
}

#[test]
fn vector_field_with_wrong_inner_tag_fails() {
    let mut bytes = Object::from(enums::MsgsAck::MsgsAck(types::MsgsAck { msg_ids: vec![1] }))
        .to_bytes()
        .unwrap();
    // Corrupt the Vector tag inside the body
    bytes[4..8].copy_from_slice(&0x0badc0deu32.to_le_bytes());

    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(read(&mut cursor), Err(Error::UnexpectedConstructor { id: 0x0badc0de }));
}

#[test]
fn boxed_enum_rejects_foreign_tags() {
    // A pong tag is a perfectly fine object, but not a MsgsAck.
    let bytes = pong(1, 2).to_bytes().unwrap();
    assert_eq!(
        enums::MsgsAck::from_bytes(&bytes),
        Err(Error::UnexpectedConstructor { id: 0x347773c5 })
    );
}

// ── Top-level boxed vectors ───────────────────────────────────────────────────

#[test]
fn top_level_vector_of_objects() {
    let vector = Object::Vector(vec![
        pong(1, 1),
        Object::from(enums::DestroyAuthKeyRes::DestroyAuthKeyOk),
    ]);

    let bytes = vector.to_bytes().unwrap();
    assert_eq!(&bytes[..4], &0x1cb5c415u32.to_le_bytes());

    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(read(&mut cursor).unwrap(), vector);
    assert_eq!(cursor.remaining(), 0);
}

// ── Registry properties ───────────────────────────────────────────────────────

#[test]
fn constructor_ids_are_unique() {
    let mut seen = HashSet::new();
    for (id, name) in known_constructors() {
        assert!(seen.insert(id), "constructor id {id:#010x} ({name}) registered twice");
    }
    assert_eq!(seen.len(), 39, "every service schema constructor is registered");
}

#[test]
fn name_lookup_matches_the_registry() {
    for (id, name) in known_constructors() {
        assert_eq!(name_for_id(id), Some(name));
    }
    assert_eq!(name_for_id(0x1cb5c415), Some("vector"));
    assert_eq!(name_for_id(0xdeadbeef), None);
}

#[test]
fn every_registered_name_is_resolvable_through_read() {
    // Spot-check a few well-known ids against their schema names.
    assert_eq!(name_for_id(0xf660e1d4), Some("destroy_auth_key_ok"));
    assert_eq!(name_for_id(0x62d6b459), Some("msgs_ack"));
    assert_eq!(name_for_id(0x347773c5), Some("pong"));
    assert_eq!(name_for_id(0xf35c6d01), Some("rpc_result"));
    assert_eq!(name_for_id(0x5a592a6c), Some("help.configSimple"));
}

use wiregram_tl_types::{Blob, Cursor, Deserializable, RawVec, Serializable};

// ── Primitive round-trips ─────────────────────────────────────────────────────

#[test]
fn roundtrip_i32() {
    for v in [0i32, -1, i32::MAX, i32::MIN, 42] {
        let bytes = v.to_bytes().unwrap();
        assert_eq!(i32::from_bytes(&bytes).unwrap(), v);
    }
}

#[test]
fn roundtrip_u32() {
    for v in [0u32, 1, 0x1cb5c415, u32::MAX] {
        let bytes = v.to_bytes().unwrap();
        assert_eq!(u32::from_bytes(&bytes).unwrap(), v);
    }
}

#[test]
fn roundtrip_i64() {
    for v in [0i64, -1, i64::MAX, i64::MIN, 1_234_567_890] {
        let bytes = v.to_bytes().unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(i64::from_bytes(&bytes).unwrap(), v);
    }
}

#[test]
fn roundtrip_f64() {
    for v in [0.0f64, -1.5, f64::MAX, f64::MIN_POSITIVE] {
        let bytes = v.to_bytes().unwrap();
        assert_eq!(f64::from_bytes(&bytes).unwrap(), v);
    }
}

#[test]
fn roundtrip_bool_true() {
    let bytes = true.to_bytes().unwrap();
    assert_eq!(bytes, 0x997275b5u32.to_le_bytes());
    assert!(bool::from_bytes(&bytes).unwrap());
}

#[test]
fn roundtrip_bool_false() {
    let bytes = false.to_bytes().unwrap();
    assert_eq!(bytes, 0xbc799737u32.to_le_bytes());
    assert!(!bool::from_bytes(&bytes).unwrap());
}

#[test]
fn bool_rejects_other_tags() {
    use wiregram_tl_types::deserialize::Error;
    let result = bool::from_bytes(&0xdeadbeefu32.to_le_bytes());
    assert_eq!(result, Err(Error::UnexpectedConstructor { id: 0xdeadbeef }));
}

// ── String / bytes ────────────────────────────────────────────────────────────

#[test]
fn roundtrip_empty_string() {
    let s = String::new();
    let bytes = s.to_bytes().unwrap();
    assert_eq!(bytes, [0, 0, 0, 0], "empty string is one length byte + padding");
    assert_eq!(String::from_bytes(&bytes).unwrap(), s);
}

#[test]
fn roundtrip_short_string() {
    let s = "hello world".to_owned();
    let bytes = s.to_bytes().unwrap();
    assert_eq!(bytes.len() % 4, 0, "must be 4-byte aligned");
    assert_eq!(String::from_bytes(&bytes).unwrap(), s);
}

#[test]
fn short_bytes_layout_and_zero_padding() {
    let bytes = b"a".to_vec().to_bytes().unwrap();
    assert_eq!(bytes, [1, b'a', 0, 0]);

    // Every short-form length keeps the stream 4-byte aligned with zero pads
    for len in 0usize..=16 {
        let data = vec![0xABu8; len];
        let enc = data.to_bytes().unwrap();
        assert_eq!(enc.len() % 4, 0, "len {len} not aligned");
        let padding = (4 - (1 + len) % 4) % 4;
        assert!(
            enc[1 + len..].iter().all(|&b| b == 0),
            "padding bytes must be zero (len {len})"
        );
        assert_eq!(enc.len(), 1 + len + padding);
    }
}

#[test]
fn bytes_length_form_switches_at_254() {
    // 253 still fits the single length byte…
    let short = vec![7u8; 253].to_bytes().unwrap();
    assert_eq!(short[0], 253);
    assert_eq!(short.len(), (1 + 253) + 2, "1-byte header + data + 2 pad");

    // …254 switches to the 0xfe + 3-byte LE length form
    let long = vec![7u8; 254].to_bytes().unwrap();
    assert_eq!(&long[..4], &[0xfe, 254, 0, 0]);
    assert_eq!(long.len() % 4, 0);

    assert_eq!(Vec::<u8>::from_bytes(&short).unwrap(), vec![7u8; 253]);
    assert_eq!(Vec::<u8>::from_bytes(&long).unwrap(), vec![7u8; 254]);
}

#[test]
fn roundtrip_long_string() {
    let s = "x".repeat(300);
    let bytes = s.clone().to_bytes().unwrap();
    assert_eq!(bytes.len() % 4, 0);
    assert_eq!(String::from_bytes(&bytes).unwrap(), s);
}

#[test]
fn roundtrip_bytes_vec() {
    let v: Vec<u8> = (0u8..=255).collect();
    let bytes = v.clone().to_bytes().unwrap();
    assert_eq!(Vec::<u8>::from_bytes(&bytes).unwrap(), v);
}

#[test]
fn oversized_bytes_fail_to_encode() {
    use wiregram_tl_types::serialize::Error;
    let v = vec![0u8; 1 << 24]; // one past what the 3-byte header can express
    assert_eq!(v.to_bytes(), Err(Error::BytesTooLong { len: 1 << 24 }));
}

#[test]
fn invalid_utf8_is_reported() {
    use wiregram_tl_types::deserialize::Error;
    // length 2, payload 0xFF 0xFF, one pad byte
    let result = String::from_bytes(&[2, 0xFF, 0xFF, 0]);
    assert_eq!(result, Err(Error::InvalidUtf8));
}

// ── Vectors ───────────────────────────────────────────────────────────────────

#[test]
fn roundtrip_vec_i32() {
    let v: Vec<i32> = vec![1, 2, 3, -99];
    let bytes = v.to_bytes().unwrap();
    assert_eq!(&bytes[..4], &0x1cb5c415u32.to_le_bytes());
    assert_eq!(Vec::<i32>::from_bytes(&bytes).unwrap(), vec![1, 2, 3, -99]);
}

#[test]
fn roundtrip_empty_vec() {
    let v: Vec<i64> = vec![];
    let bytes = v.to_bytes().unwrap();
    assert_eq!(Vec::<i64>::from_bytes(&bytes).unwrap(), Vec::<i64>::new());
}

#[test]
fn vector_requires_its_constructor_tag() {
    use wiregram_tl_types::deserialize::Error;
    let mut bytes = vec![1i64, 2].to_bytes().unwrap();
    bytes[..4].copy_from_slice(&0x11223344u32.to_le_bytes());
    assert_eq!(
        Vec::<i64>::from_bytes(&bytes),
        Err(Error::UnexpectedConstructor { id: 0x11223344 })
    );
}

#[test]
fn raw_vec_has_no_tag() {
    let raw = RawVec(vec![5i32, 6]);
    let bytes = raw.to_bytes().unwrap();
    assert_eq!(bytes.len(), 4 + 8, "count + elements, no constructor id");
    assert_eq!(RawVec::<i32>::from_bytes(&bytes).unwrap(), raw);
}

// ── Fixed-size arrays ─────────────────────────────────────────────────────────

#[test]
fn roundtrip_int128() {
    let v: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
    let bytes = v.to_bytes().unwrap();
    assert_eq!(bytes, v, "raw bytes go to the wire verbatim");
    assert_eq!(<[u8; 16]>::from_bytes(&bytes).unwrap(), v);
}

#[test]
fn roundtrip_int256() {
    let v: [u8; 32] = core::array::from_fn(|i| i as u8);
    assert_eq!(<[u8; 32]>::from_bytes(&v.to_bytes().unwrap()).unwrap(), v);
}

// ── Blob ──────────────────────────────────────────────────────────────────────

#[test]
fn blob_passes_through_verbatim() {
    let blob = Blob(vec![0xDE, 0xAD, 0xBE, 0xEF]);
    let bytes = blob.to_bytes().unwrap();
    assert_eq!(bytes, blob.0, "no header, no padding");
    assert_eq!(Blob::from_bytes(&bytes).unwrap(), blob);
}

// ── Cursor EOF detection ──────────────────────────────────────────────────────

#[test]
fn deserialize_truncated_returns_eof() {
    use wiregram_tl_types::deserialize::Error;
    let result = i32::from_bytes(&[0x01, 0x02]); // only 2 bytes, need 4
    assert_eq!(result, Err(Error::UnexpectedEof));
}

#[test]
fn truncated_bytes_payload_returns_eof() {
    use wiregram_tl_types::deserialize::Error;
    // header says 8 bytes follow, only 3 do
    let result = Vec::<u8>::from_bytes(&[8, 1, 2, 3]);
    assert_eq!(result, Err(Error::UnexpectedEof));
}

#[test]
fn cursor_position_is_preserved_on_failure() {
    let bytes = 77i32.to_bytes().unwrap();
    let mut cursor = Cursor::from_slice(&bytes);
    assert_eq!(i32::deserialize(&mut cursor).unwrap(), 77);

    let failed_at = cursor.pos();
    assert!(i64::deserialize(&mut cursor).is_err());
    assert_eq!(cursor.pos(), failed_at, "failed read must not move the cursor");
}

// ── Option passthrough ────────────────────────────────────────────────────────

#[test]
fn option_none_writes_nothing() {
    let v: Option<i32> = None;
    assert_eq!(v.to_bytes().unwrap(), b"");
}

#[test]
fn option_some_writes_inner() {
    let v: Option<i32> = Some(42);
    assert_eq!(v.to_bytes().unwrap(), 42i32.to_bytes().unwrap());
}

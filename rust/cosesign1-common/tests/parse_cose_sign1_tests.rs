// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 parsing tests.
//!
//! These cover accepted encodings (tagged/untagged, detached payload) and the
//! structural failures that must surface as `MalformedEnvelope`.

use cosesign1_common::{parse_cose_sign1, CoseError, HeaderKey, HeaderValue};
use minicbor::data::Tag;
use minicbor::Encoder;

fn protected_es256() -> Vec<u8> {
    let mut buf = Vec::new();
    let mut enc = Encoder::new(&mut buf);
    enc.map(1).unwrap();
    enc.i64(1).unwrap(); // alg
    enc.i64(-7).unwrap(); // ES256
    buf
}

// Helper to build a minimal, well-formed COSE_Sign1.
fn make_basic_sign1(tagged: bool, detached: bool) -> Vec<u8> {
    let protected = protected_es256();

    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    if tagged {
        enc.tag(Tag::new(18)).unwrap();
    }
    enc.array(4).unwrap();
    enc.bytes(&protected).unwrap();
    enc.map(0).unwrap();
    if detached {
        enc.null().unwrap();
    } else {
        enc.bytes(b"payload").unwrap();
    }
    enc.bytes(b"sig").unwrap();
    out
}

fn assert_malformed(bytes: &[u8], needle: &str) {
    match parse_cose_sign1(bytes) {
        Err(CoseError::MalformedEnvelope(msg)) => assert!(msg.contains(needle), "{msg}"),
        other => panic!("expected MalformedEnvelope containing '{needle}', got {other:?}"),
    }
}

#[test]
fn parse_accepts_tagged_and_untagged() {
    for tagged in [false, true] {
        let cose = make_basic_sign1(tagged, false);
        let parsed = parse_cose_sign1(&cose).unwrap();
        assert_eq!(parsed.signature, b"sig");
        assert_eq!(parsed.payload.as_deref(), Some(b"payload".as_slice()));
        assert_eq!(parsed.protected_headers.get_i64(1), Some(-7));
        assert_eq!(parsed.protected_bytes(), protected_es256().as_slice());
    }
}

#[test]
fn parse_supports_detached_payload() {
    let parsed = parse_cose_sign1(&make_basic_sign1(false, true)).unwrap();
    assert!(parsed.payload.is_none());
    assert!(parsed.is_detached());
}

#[test]
fn parse_does_not_check_the_algorithm() {
    let protected = {
        let mut buf = Vec::new();
        let mut enc = Encoder::new(&mut buf);
        enc.map(1).unwrap();
        enc.i64(1).unwrap();
        enc.i64(-999).unwrap();
        buf
    };
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&protected).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    let parsed = parse_cose_sign1(&out).unwrap();
    assert_eq!(parsed.algorithm_id(), Some(-999));
}

#[test]
fn parse_accepts_empty_protected_headers_bstr() {
    let mut sign1 = Vec::new();
    let mut enc = Encoder::new(&mut sign1);
    enc.array(4).unwrap();
    enc.bytes(&[]).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(&[0u8; 64]).unwrap();

    let parsed = parse_cose_sign1(&sign1).unwrap();
    assert!(parsed.protected_headers.is_empty());
    assert!(parsed.protected_bytes().is_empty());
}

#[test]
fn parse_decodes_unprotected_header_values() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&protected_es256()).unwrap();
    enc.map(3).unwrap();
    enc.i64(4).unwrap();
    enc.bytes(b"kid-1").unwrap();
    enc.str("note").unwrap();
    enc.str("hi").unwrap();
    enc.i64(-70000).unwrap();
    enc.array(2).unwrap();
    enc.bool(true).unwrap();
    enc.null().unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    let parsed = parse_cose_sign1(&out).unwrap();
    let map = parsed.unprotected_headers.map();
    assert_eq!(parsed.unprotected_headers.get_bytes(4), Some(b"kid-1".as_slice()));
    assert_eq!(map.get(&HeaderKey::from("note")), Some(&HeaderValue::Text("hi".into())));
    assert_eq!(
        map.get(&HeaderKey::Int(-70000)),
        Some(&HeaderValue::Array(vec![HeaderValue::Bool(true), HeaderValue::Null]))
    );
}

#[test]
fn parse_rejects_empty_input() {
    assert_malformed(&[], "empty");
}

#[test]
fn parse_rejects_wrong_array_length() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(3).unwrap();
    enc.bytes(&[]).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"x").unwrap();

    assert_malformed(&out, "array length");
}

#[test]
fn parse_rejects_non_array() {
    let mut out = Vec::new();
    Encoder::new(&mut out).map(0).unwrap();
    assert_malformed(&out, "not a definite-length array");
}

#[test]
fn parse_rejects_indefinite_array() {
    // 0x9f = indefinite-length array start
    let mut out = vec![0x9f];
    let mut enc = Encoder::new(&mut out);
    enc.bytes(&[]).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();
    out.push(0xff);

    assert!(matches!(parse_cose_sign1(&out), Err(CoseError::MalformedEnvelope(_))));
}

#[test]
fn parse_rejects_unexpected_tag() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.tag(Tag::new(999)).unwrap();
    enc.array(4).unwrap();
    enc.bytes(&[]).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    assert_malformed(&out, "unexpected CBOR tag");
}

#[test]
fn parse_rejects_protected_that_is_not_bstr() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.map(0).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    assert_malformed(&out, "protected headers are not a bstr");
}

#[test]
fn parse_rejects_protected_bstr_that_is_not_a_map() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&[0x01]).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    assert_malformed(&out, "not a map");
}

#[test]
fn parse_rejects_trailing_bytes_inside_protected() {
    let mut protected = protected_es256();
    protected.push(0x00);

    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&protected).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    assert_malformed(&out, "trailing bytes after protected header map");
}

#[test]
fn parse_rejects_unprotected_that_is_not_map() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&protected_es256()).unwrap();
    enc.bytes(b"oops").unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    assert_malformed(&out, "unprotected headers are not a map");
}

#[test]
fn parse_rejects_payload_of_wrong_type() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&protected_es256()).unwrap();
    enc.map(0).unwrap();
    enc.str("text payload").unwrap();
    enc.bytes(b"s").unwrap();

    assert_malformed(&out, "payload");
}

#[test]
fn parse_rejects_signature_that_is_not_bstr() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&protected_es256()).unwrap();
    enc.map(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.null().unwrap();

    assert_malformed(&out, "signature is not a bstr");
}

#[test]
fn parse_rejects_trailing_bytes() {
    let mut cose = make_basic_sign1(false, false);
    cose.push(0x00);
    assert_malformed(&cose, "trailing bytes after COSE_Sign1");
}

#[test]
fn parse_rejects_truncated_input() {
    let cose = make_basic_sign1(true, false);
    for len in 1..cose.len() {
        assert!(
            matches!(parse_cose_sign1(&cose[..len]), Err(CoseError::MalformedEnvelope(_))),
            "prefix of length {len} parsed"
        );
    }
}

#[test]
fn parse_rejects_duplicate_header_labels() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&protected_es256()).unwrap();
    enc.map(2).unwrap();
    enc.i64(4).unwrap();
    enc.bytes(b"a").unwrap();
    enc.i64(4).unwrap();
    enc.bytes(b"b").unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    assert_malformed(&out, "duplicate header label");
}

#[test]
fn parse_rejects_excessive_nesting() {
    let mut out = Vec::new();
    let mut enc = Encoder::new(&mut out);
    enc.array(4).unwrap();
    enc.bytes(&protected_es256()).unwrap();
    enc.map(1).unwrap();
    enc.i64(100).unwrap();
    for _ in 0..64 {
        enc.array(1).unwrap();
    }
    enc.i64(0).unwrap();
    enc.bytes(b"p").unwrap();
    enc.bytes(b"s").unwrap();

    assert_malformed(&out, "nesting too deep");
}

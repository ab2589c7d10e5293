// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use cosesign1_common::{
    encode_sig_structure, encode_signature1_sig_structure, parse_cose_sign1, CoseError, CoseSign1Message,
    SIG_STRUCTURE_CONTEXT_SIGNATURE1,
};

fn detached_sign1() -> CoseSign1Message {
    // Minimal COSE_Sign1 with detached payload (null): [h'A10126', {}, null, h'00..']
    let mut sign1 = Vec::new();
    let mut enc = minicbor::Encoder::new(&mut sign1);
    enc.array(4).unwrap();
    enc.bytes(&[0xa1, 0x01, 0x26]).unwrap();
    enc.map(0).unwrap();
    enc.null().unwrap();
    enc.bytes(&[0u8; 64]).unwrap();
    parse_cose_sign1(&sign1).unwrap()
}

#[test]
fn sig_structure_has_exact_layout() {
    let mut msg = detached_sign1();
    msg.payload = Some(b"hello".to_vec());

    let bytes = encode_signature1_sig_structure(&msg, &[], None).unwrap();

    let mut expected = vec![0x84, 0x6a];
    expected.extend_from_slice(b"Signature1");
    expected.extend_from_slice(&[0x43, 0xa1, 0x01, 0x26]);
    expected.push(0x40);
    expected.push(0x45);
    expected.extend_from_slice(b"hello");
    assert_eq!(bytes, expected);
}

#[test]
fn sig_structure_includes_external_aad() {
    let mut msg = detached_sign1();
    msg.payload = Some(b"hello".to_vec());

    let without = encode_signature1_sig_structure(&msg, &[], None).unwrap();
    let with = encode_signature1_sig_structure(&msg, b"aad", None).unwrap();
    assert_ne!(without, with);
    assert!(with.windows(4).any(|w| w == [0x43, b'a', b'a', b'd']));
}

#[test]
fn signature1_sig_structure_view_exposes_expected_fields() {
    let mut msg = CoseSign1Message::default();
    msg.payload = Some(b"payload".to_vec());

    let view = msg.signature1_sig_structure_view(b"aad", None).unwrap();
    assert_eq!(view.context, SIG_STRUCTURE_CONTEXT_SIGNATURE1);
    assert_eq!(view.external_aad, b"aad");
    assert_eq!(view.payload, b"payload");
    assert!(view.body_protected.is_empty());
}

#[test]
fn embedded_payload_wins_over_external() {
    let mut msg = detached_sign1();
    msg.payload = Some(b"embedded".to_vec());

    let a = encode_signature1_sig_structure(&msg, &[], Some(b"external".as_slice())).unwrap();
    let b = encode_signature1_sig_structure(&msg, &[], None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn detached_payload_uses_external_bytes() {
    let msg = detached_sign1();
    let view = msg.signature1_sig_structure_view(&[], Some(b"external".as_slice())).unwrap();
    let from_view = encode_sig_structure(&view).unwrap();
    let from_msg = encode_signature1_sig_structure(&msg, &[], Some(b"external".as_slice())).unwrap();
    assert_eq!(from_view, from_msg);
}

#[test]
fn encode_sig_structure_requires_external_payload_for_detached() {
    let err = encode_signature1_sig_structure(&detached_sign1(), &[], None).unwrap_err();
    assert_eq!(err, CoseError::DetachedPayloadRequired);
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 encoding, parsing and Sig_structure encoding.
//!
//! COSE_Sign1 is defined (originally) in RFC 8152 and updated in RFC 9052.
//! At a high level, the structure is:
//!
//! ```text
//! COSE_Sign1 = [ protected : bstr,
//!               unprotected : map,
//!               payload : bstr / null,
//!               signature : bstr ]
//!
//! Sig_structure = [ "Signature1",
//!                   body_protected : bstr,
//!                   external_aad : bstr,
//!                   payload : bstr ]
//! ```

use minicbor::data::{Tag, Type};
use minicbor::{Decoder, Encoder};

use cosesign1_abstractions::{
    CoseError, CoseHeaderMap, CoseSign1Message, SigStructureView, COSE_SIGN1_TAG,
};

use crate::header_map::{
    decode_header_map_from_cbor, decode_header_map_from_decoder, encoding, malformed, write_header_map,
};

/// Encode a COSE_Sign1 message as an untagged 4-element array.
///
/// The protected header bytes are written as-is; they are never re-encoded.
pub fn encode_cose_sign1(msg: &CoseSign1Message) -> Result<Vec<u8>, CoseError> {
    let mut enc = Encoder::new(Vec::new());
    write_cose_sign1(&mut enc, msg)?;
    Ok(enc.into_writer())
}

/// Encode a COSE_Sign1 message prefixed with the COSE_Sign1 CBOR tag (18).
pub fn encode_cose_sign1_tagged(msg: &CoseSign1Message) -> Result<Vec<u8>, CoseError> {
    let mut enc = Encoder::new(Vec::new());
    enc.tag(Tag::new(COSE_SIGN1_TAG)).map_err(encoding)?;
    write_cose_sign1(&mut enc, msg)?;
    Ok(enc.into_writer())
}

fn write_cose_sign1(enc: &mut Encoder<Vec<u8>>, msg: &CoseSign1Message) -> Result<(), CoseError> {
    enc.array(4).map_err(encoding)?;
    enc.bytes(msg.protected_bytes()).map_err(encoding)?;
    write_header_map(enc, msg.unprotected_headers.map())?;
    match &msg.payload {
        Some(payload) => enc.bytes(payload).map_err(encoding)?,
        None => enc.null().map_err(encoding)?,
    };
    enc.bytes(&msg.signature).map_err(encoding)?;
    Ok(())
}

/// Parse a COSE_Sign1 structure from its CBOR encoding.
///
/// This parser is deliberately strict:
/// - Rejects empty input.
/// - Accepts an optional COSE_Sign1 tag (18), but rejects any other tag.
/// - Requires the top-level array length to be exactly 4.
/// - Rejects indefinite-length arrays/maps.
/// - Rejects trailing bytes.
///
/// It does not look at the `alg` header; that is the verifier's job.
pub fn parse_cose_sign1(input: &[u8]) -> Result<CoseSign1Message, CoseError> {
    if input.is_empty() {
        return Err(malformed("empty input"));
    }

    let mut dec = Decoder::new(input);

    // COSE_Sign1 may be tagged (CBOR tag 18) or untagged.
    if matches!(datatype(&mut dec)?, Type::Tag) {
        let tag = dec
            .tag()
            .map_err(|e| malformed(format!("failed to read CBOR tag: {e}")))?;
        if tag != Tag::new(COSE_SIGN1_TAG) {
            return Err(malformed("unexpected CBOR tag (expected COSE_Sign1 tag 18 or no tag)"));
        }
    }

    if !matches!(datatype(&mut dec)?, Type::Array) {
        return Err(malformed("top-level item is not a definite-length array"));
    }
    let len = dec
        .array()
        .map_err(|e| malformed(format!("top-level item is not an array: {e}")))?
        .ok_or_else(|| malformed("indefinite-length arrays are not supported"))?;

    if len != 4 {
        return Err(malformed(format!("array length was {len}, expected 4")));
    }

    // protected headers (bstr)
    // This is a CBOR byte string that itself encodes a CBOR map.
    if !matches!(datatype(&mut dec)?, Type::Bytes) {
        return Err(malformed("protected headers are not a bstr"));
    }
    let protected_bstr = dec
        .bytes()
        .map_err(|e| malformed(format!("failed to read protected headers (bstr): {e}")))?
        .to_vec();
    let protected_map = decode_header_map_from_cbor(&protected_bstr)?;

    // unprotected headers (map)
    // This is an inline CBOR map (not wrapped in a bstr).
    if !matches!(datatype(&mut dec)?, Type::Map) {
        return Err(malformed("unprotected headers are not a map"));
    }
    let unprotected_map = decode_header_map_from_decoder(&mut dec)?;

    // payload (bstr or null)
    // COSE_Sign1 uses `null` to represent a detached payload.
    let payload = match datatype(&mut dec)? {
        Type::Null => {
            dec.null().map_err(|e| malformed(e.to_string()))?;
            None
        }
        Type::Bytes => Some(
            dec.bytes()
                .map_err(|e| malformed(format!("failed to read payload (bstr or null): {e}")))?
                .to_vec(),
        ),
        _ => return Err(malformed("payload is neither a bstr nor null")),
    };

    // signature (bstr)
    if !matches!(datatype(&mut dec)?, Type::Bytes) {
        return Err(malformed("signature is not a bstr"));
    }
    let signature = dec
        .bytes()
        .map_err(|e| malformed(format!("failed to read signature (bstr): {e}")))?
        .to_vec();

    if dec.position() != input.len() {
        return Err(malformed("trailing bytes after COSE_Sign1"));
    }

    Ok(CoseSign1Message {
        protected_headers: CoseHeaderMap::new_protected(protected_bstr, protected_map),
        unprotected_headers: CoseHeaderMap::new_unprotected(unprotected_map),
        payload,
        signature,
    })
}

fn datatype(dec: &mut Decoder<'_>) -> Result<Type, CoseError> {
    dec.datatype().map_err(|e| malformed(e.to_string()))
}

/// Encode the Sig_structure described by `view`.
///
/// These bytes are what signature algorithms hash and sign.
pub fn encode_sig_structure(view: &SigStructureView<'_>) -> Result<Vec<u8>, CoseError> {
    let capacity = 32 + view.body_protected.len() + view.external_aad.len() + view.payload.len();
    let mut enc = Encoder::new(Vec::with_capacity(capacity));
    enc.array(4).map_err(encoding)?;
    enc.str(view.context).map_err(encoding)?;
    enc.bytes(view.body_protected).map_err(encoding)?;
    enc.bytes(view.external_aad).map_err(encoding)?;
    enc.bytes(view.payload).map_err(encoding)?;
    Ok(enc.into_writer())
}

/// Encode the COSE Sig_structure bytes for a COSE_Sign1 message.
///
/// If the COSE_Sign1 payload is detached (`null`), callers must pass
/// `external_payload`.
pub fn encode_signature1_sig_structure(
    msg: &CoseSign1Message,
    external_aad: &[u8],
    external_payload: Option<&[u8]>,
) -> Result<Vec<u8>, CoseError> {
    let view = msg
        .signature1_sig_structure_view(external_aad, external_payload)
        .ok_or(CoseError::DetachedPayloadRequired)?;
    encode_sig_structure(&view)
}

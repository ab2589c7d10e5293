// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE header map encoding and decoding.
//!
//! COSE header parameters live in two header maps:
//! - Protected headers: encoded as a CBOR bstr containing a CBOR map
//! - Unprotected headers: encoded as an inline CBOR map
//!
//! Encoding is canonical: keys are emitted in `HeaderKey` order, so the same
//! logical map always yields the same bytes.
//!
//! Decoding is conservative:
//! - Only supports the CBOR types this project needs.
//! - Rejects indefinite-length arrays/maps and duplicate keys.
//! - Rejects nesting deeper than `MAX_NESTING_DEPTH`.

use std::collections::BTreeMap;

use cosesign1_abstractions::{CoseError, CoseHeaderMap, HeaderKey, HeaderValue};
use minicbor::data::Type;
use minicbor::{Decoder, Encoder};

const MAX_NESTING_DEPTH: usize = 16;

pub(crate) fn malformed(msg: impl Into<String>) -> CoseError {
    CoseError::MalformedEnvelope(msg.into())
}

pub(crate) fn encoding<E: std::fmt::Display>(e: E) -> CoseError {
    CoseError::Encoding(e.to_string())
}

/// Serialize a header map to its canonical CBOR encoding.
pub fn encode_header_map(map: &BTreeMap<HeaderKey, HeaderValue>) -> Result<Vec<u8>, CoseError> {
    let mut enc = Encoder::new(Vec::new());
    write_header_map(&mut enc, map)?;
    Ok(enc.into_writer())
}

/// Serialize a protected header map and freeze the resulting bytes.
///
/// An empty map is carried as a zero-length bstr rather than an encoded empty map.
pub fn encode_protected_header(map: BTreeMap<HeaderKey, HeaderValue>) -> Result<CoseHeaderMap, CoseError> {
    let bytes = if map.is_empty() {
        Vec::new()
    } else {
        encode_header_map(&map)?
    };
    Ok(CoseHeaderMap::new_protected(bytes, map))
}

pub(crate) fn write_header_map(
    enc: &mut Encoder<Vec<u8>>,
    map: &BTreeMap<HeaderKey, HeaderValue>,
) -> Result<(), CoseError> {
    enc.map(map.len() as u64).map_err(encoding)?;
    for (key, value) in map {
        write_header_key(enc, key)?;
        write_header_value(enc, value)?;
    }
    Ok(())
}

fn write_header_key(enc: &mut Encoder<Vec<u8>>, key: &HeaderKey) -> Result<(), CoseError> {
    match key {
        HeaderKey::Int(i) => enc.i64(*i).map_err(encoding)?,
        HeaderKey::Text(s) => enc.str(s).map_err(encoding)?,
    };
    Ok(())
}

fn write_header_value(enc: &mut Encoder<Vec<u8>>, value: &HeaderValue) -> Result<(), CoseError> {
    match value {
        HeaderValue::Int(i) => {
            enc.i64(*i).map_err(encoding)?;
        }
        HeaderValue::Bytes(b) => {
            enc.bytes(b).map_err(encoding)?;
        }
        HeaderValue::Text(s) => {
            enc.str(s).map_err(encoding)?;
        }
        HeaderValue::Bool(b) => {
            enc.bool(*b).map_err(encoding)?;
        }
        HeaderValue::Null => {
            enc.null().map_err(encoding)?;
        }
        HeaderValue::Array(items) => {
            enc.array(items.len() as u64).map_err(encoding)?;
            for item in items {
                write_header_value(enc, item)?;
            }
        }
        HeaderValue::Map(map) => write_header_map(enc, map)?,
    }
    Ok(())
}

/// Decode serialized protected header bytes into a header map.
///
/// Signature checks read headers through this, never through a cached map.
pub fn decode_protected_header(bytes: &[u8]) -> Result<BTreeMap<HeaderKey, HeaderValue>, CoseError> {
    decode_header_map_from_cbor(bytes)
}

/// Decode a header map from the CBOR bytes contained within a protected header bstr.
pub(crate) fn decode_header_map_from_cbor(bytes: &[u8]) -> Result<BTreeMap<HeaderKey, HeaderValue>, CoseError> {
    // Empty bstr means empty map for protected headers.
    if bytes.is_empty() {
        return Ok(BTreeMap::new());
    }

    let mut dec = Decoder::new(bytes);
    if !matches!(dec.datatype().map_err(|e| malformed(e.to_string()))?, Type::Map) {
        return Err(malformed("protected headers are not a map"));
    }
    let map = decode_map(&mut dec, 0)?;

    if dec.position() != bytes.len() {
        return Err(malformed("trailing bytes after protected header map"));
    }

    Ok(map)
}

/// Decode a header map directly from a CBOR decoder.
///
/// This is used for unprotected headers, which appear inline in COSE_Sign1.
pub(crate) fn decode_header_map_from_decoder(
    dec: &mut Decoder<'_>,
) -> Result<BTreeMap<HeaderKey, HeaderValue>, CoseError> {
    decode_map(dec, 0)
}

fn decode_map(dec: &mut Decoder<'_>, depth: usize) -> Result<BTreeMap<HeaderKey, HeaderValue>, CoseError> {
    let len = dec
        .map()
        .map_err(|e| malformed(format!("failed to read map: {e}")))?
        .ok_or_else(|| malformed("indefinite-length maps are not supported"))?;

    let mut map = BTreeMap::new();
    for _ in 0..len {
        let key = decode_header_key(dec)?;
        let value = decode_header_value(dec, depth)?;
        if map.insert(key.clone(), value).is_some() {
            return Err(malformed(format!("duplicate header label: {key:?}")));
        }
    }
    Ok(map)
}

/// Decode a COSE header map key.
///
/// COSE keys are most often small integers, but may also be text.
fn decode_header_key(dec: &mut Decoder<'_>) -> Result<HeaderKey, CoseError> {
    match dec.datatype().map_err(|e| malformed(e.to_string()))? {
        Type::I8
        | Type::I16
        | Type::I32
        | Type::I64
        | Type::Int
        | Type::U8
        | Type::U16
        | Type::U32
        | Type::U64 => {
            let i = dec
                .i64()
                .map_err(|e| malformed(format!("failed to decode int header key: {e}")))?;
            Ok(HeaderKey::Int(i))
        }
        Type::String => {
            let s = dec
                .str()
                .map_err(|e| malformed(format!("failed to decode text header key: {e}")))?;
            Ok(HeaderKey::Text(s.to_string()))
        }
        other => Err(malformed(format!("unsupported header key type: {other:?}"))),
    }
}

/// Decode a COSE header map value.
fn decode_header_value(dec: &mut Decoder<'_>, depth: usize) -> Result<HeaderValue, CoseError> {
    match dec.datatype().map_err(|e| malformed(e.to_string()))? {
        Type::Null => {
            dec.null().map_err(|e| malformed(e.to_string()))?;
            Ok(HeaderValue::Null)
        }
        Type::Bool => {
            let b = dec.bool().map_err(|e| malformed(e.to_string()))?;
            Ok(HeaderValue::Bool(b))
        }
        Type::Bytes => {
            let b = dec.bytes().map_err(|e| malformed(e.to_string()))?;
            Ok(HeaderValue::Bytes(b.to_vec()))
        }
        Type::String => {
            let s = dec.str().map_err(|e| malformed(e.to_string()))?;
            Ok(HeaderValue::Text(s.to_string()))
        }
        Type::I8
        | Type::I16
        | Type::I32
        | Type::I64
        | Type::Int
        | Type::U8
        | Type::U16
        | Type::U32
        | Type::U64 => {
            let i = dec.i64().map_err(|e| malformed(e.to_string()))?;
            Ok(HeaderValue::Int(i))
        }
        Type::Array => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(malformed("header value nesting too deep"));
            }
            let len = dec
                .array()
                .map_err(|e| malformed(format!("failed to read array: {e}")))?
                .ok_or_else(|| malformed("indefinite-length arrays are not supported"))?;
            let mut out = Vec::new();
            for _ in 0..len {
                out.push(decode_header_value(dec, depth + 1)?);
            }
            Ok(HeaderValue::Array(out))
        }
        Type::Map => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(malformed("header value nesting too deep"));
            }
            Ok(HeaderValue::Map(decode_map(dec, depth + 1)?))
        }
        other => Err(malformed(format!("unsupported header value type: {other:?}"))),
    }
}

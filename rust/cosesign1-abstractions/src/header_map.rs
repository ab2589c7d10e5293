// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Header labels, values and the two COSE header buckets.

use std::collections::BTreeMap;

/// `alg` (RFC 9052 §3.1).
pub const HEADER_LABEL_ALGORITHM: i64 = 1;

/// `content type` (RFC 9052 §3.1).
pub const HEADER_LABEL_CONTENT_TYPE: i64 = 3;

/// A header label.
///
/// Variant order matters: the derived `Ord` sorts every integer label
/// (ascending by value) ahead of every text label, which is the canonical
/// order the encoder writes maps in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeaderKey {
    Int(i64),
    Text(String),
}

impl From<i64> for HeaderKey {
    fn from(label: i64) -> Self {
        HeaderKey::Int(label)
    }
}

impl From<&str> for HeaderKey {
    fn from(label: &str) -> Self {
        HeaderKey::Text(label.to_string())
    }
}

/// A header value. Covers the CBOR shapes COSE headers use in practice.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Int(i64),
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<HeaderValue>),
    Map(BTreeMap<HeaderKey, HeaderValue>),
    Bool(bool),
    Null,
}

impl HeaderValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            HeaderValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            HeaderValue::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// One header bucket of a COSE_Sign1.
///
/// The protected bucket also keeps the exact bytes it was decoded from (or
/// encoded to). Those bytes, not a re-encoding of `map`, are what the
/// signature covers. The unprotected bucket leaves them empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CoseHeaderMap {
    encoded_map_cbor: Vec<u8>,
    map: BTreeMap<HeaderKey, HeaderValue>,
}

impl CoseHeaderMap {
    /// A protected bucket: serialized bytes plus their decoded form.
    ///
    /// The pair is frozen; changing a header means building a new bucket.
    pub fn new_protected(encoded_map_cbor: Vec<u8>, map: BTreeMap<HeaderKey, HeaderValue>) -> Self {
        Self { encoded_map_cbor, map }
    }

    pub fn new_unprotected(map: BTreeMap<HeaderKey, HeaderValue>) -> Self {
        Self {
            encoded_map_cbor: Vec::new(),
            map,
        }
    }

    /// Serialized protected bytes; empty for unprotected buckets.
    pub fn encoded_map_cbor(&self) -> &[u8] {
        &self.encoded_map_cbor
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn get(&self, key: &HeaderKey) -> Option<&HeaderValue> {
        self.map.get(key)
    }

    pub fn get_i64(&self, label: i64) -> Option<i64> {
        self.get(&HeaderKey::Int(label)).and_then(HeaderValue::as_i64)
    }

    pub fn get_bytes(&self, label: i64) -> Option<&[u8]> {
        self.get(&HeaderKey::Int(label)).and_then(HeaderValue::as_bytes)
    }

    pub fn get_text(&self, label: i64) -> Option<&str> {
        self.get(&HeaderKey::Int(label)).and_then(HeaderValue::as_text)
    }

    pub fn map(&self) -> &BTreeMap<HeaderKey, HeaderValue> {
        &self.map
    }
}

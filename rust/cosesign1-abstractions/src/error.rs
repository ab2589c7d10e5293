// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Every failure the COSE_Sign1 core can report.
///
/// None of these are retried or silently corrected; the caller decides how to react.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoseError {
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("malformed COSE_Sign1: {0}")]
    MalformedEnvelope(String),

    #[error("malformed signature: expected {expected} bytes, got {actual}")]
    MalformedSignature { expected: usize, actual: usize },

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("signature verification failed")]
    SignatureInvalid,

    #[error("invalid key type: expected '{expected}', found '{found}'")]
    InvalidKeyType { expected: String, found: String },

    #[error("random source failure: {0}")]
    RandomSourceFailure(String),

    #[error("detached payload requires external payload bytes")]
    DetachedPayloadRequired,

    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("signing failed: {0}")]
    SigningFailed(String),

    #[error("CBOR encoding failed: {0}")]
    Encoding(String),
}

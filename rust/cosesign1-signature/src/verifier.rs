// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 signature verification.
//!
//! 1) Decode `alg` from the protected header bytes and gate it.
//! 2) Build the Sig_structure from protected bytes, external AAD and payload.
//! 3) Verify the signature against the caller-provided public key.
//!
//! For detached payload COSE_Sign1, callers must provide the external payload.

use cosesign1_abstractions::{
    CoseAlgorithm, CoseError, CoseSign1Message, CoseVerifier, HeaderKey, HeaderValue, HEADER_LABEL_ALGORITHM,
};
use cosesign1_common::{decode_protected_header, encode_signature1_sig_structure};

use crate::algorithms::sig_structure_digest;

#[derive(Debug, Default, Clone, Copy)]
pub struct VerifyOptions<'a> {
    /// External additional authenticated data; must match what the signer used.
    pub external_aad: &'a [u8],

    /// External payload bytes.
    ///
    /// Only consulted when the message payload is detached (`null`).
    pub external_payload: Option<&'a [u8]>,

    /// If set, verification fails unless the COSE `alg` header equals this value.
    pub expected_alg: Option<CoseAlgorithm>,
}

/// Verify a COSE_Sign1 with an embedded or detached payload.
///
/// Returns the payload that was verified.
pub fn verify<'a, V: CoseVerifier + ?Sized>(
    verifier: &V,
    msg: &'a CoseSign1Message,
    external_aad: &'a [u8],
    external_payload: Option<&'a [u8]>,
) -> Result<&'a [u8], CoseError> {
    let options = VerifyOptions {
        external_aad,
        external_payload,
        expected_alg: None,
    };
    verify_cose_sign1(verifier, msg, &options)
}

pub fn verify_cose_sign1<'a, V: CoseVerifier + ?Sized>(
    verifier: &V,
    msg: &'a CoseSign1Message,
    options: &VerifyOptions<'a>,
) -> Result<&'a [u8], CoseError> {
    let result = verify_inner(verifier, msg, options);
    if let Err(e) = &result {
        tracing::debug!(error = %e, "COSE_Sign1 verification failed");
    }
    result
}

fn verify_inner<'a, V: CoseVerifier + ?Sized>(
    verifier: &V,
    msg: &'a CoseSign1Message,
    options: &VerifyOptions<'a>,
) -> Result<&'a [u8], CoseError> {
    let alg = cose_alg(msg)?;

    if let Some(expected) = options.expected_alg {
        if expected != alg {
            return Err(CoseError::UnsupportedAlgorithm(format!(
                "alg header mismatch: expected {expected}, got {alg}"
            )));
        }
    }

    if verifier.algorithm() != alg {
        return Err(CoseError::UnsupportedAlgorithm(format!(
            "message declares {alg} but the key verifies {}",
            verifier.algorithm()
        )));
    }

    if msg.payload.is_some() && options.external_payload.is_some() {
        tracing::warn!("COSE_Sign1 has an embedded payload; ignoring the external payload");
    }

    tracing::debug!(alg = %alg, detached = msg.is_detached(), "verifying COSE_Sign1");

    let sig_structure = encode_signature1_sig_structure(msg, options.external_aad, options.external_payload)?;
    let digest = sig_structure_digest(alg, &sig_structure);
    verifier.verify_digest(&digest, &msg.signature)?;

    msg.payload
        .as_deref()
        .or(options.external_payload)
        .ok_or(CoseError::DetachedPayloadRequired)
}

/// Read the COSE `alg` header out of the serialized protected header.
///
/// The bytes are the signed copy, so they are decoded here rather than
/// trusting `msg.protected_headers.map()`. An `alg` that only appears in the
/// unprotected header is not signed and is not accepted.
fn cose_alg(msg: &CoseSign1Message) -> Result<CoseAlgorithm, CoseError> {
    let protected = decode_protected_header(msg.protected_bytes())?;
    let v = protected
        .get(&HeaderKey::Int(HEADER_LABEL_ALGORITHM))
        .and_then(HeaderValue::as_i64)
        .ok_or_else(|| CoseError::UnsupportedAlgorithm("missing alg in protected header".to_string()))?;
    CoseAlgorithm::from_i64(v).ok_or_else(|| CoseError::UnsupportedAlgorithm(format!("unsupported alg: {v}")))
}

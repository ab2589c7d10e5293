// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use cosesign1_abstractions::{CoseError, CoseSigner, CoseVerifier};
use cosesign1_signature::{SignOptions, VerifyOptions};

use crate::CoseSign1;

/// Sign `payload` and return the tagged COSE_Sign1 encoding.
pub fn sign_to_bytes<S: CoseSigner + ?Sized>(
    signer: &S,
    payload: &[u8],
    options: &SignOptions,
) -> Result<Vec<u8>, CoseError> {
    CoseSign1::sign(signer, payload, options)?.to_tagged_bytes()
}

/// Decode and verify COSE_Sign1 bytes, returning an owned copy of the payload.
pub fn verify_bytes<V: CoseVerifier + ?Sized>(
    verifier: &V,
    cose_sign1: &[u8],
    options: &VerifyOptions<'_>,
) -> Result<Vec<u8>, CoseError> {
    let msg = CoseSign1::from_bytes(cose_sign1)?;
    let payload = msg.verify(verifier, options)?;
    Ok(payload.to_vec())
}

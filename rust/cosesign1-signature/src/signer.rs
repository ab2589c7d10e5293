// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 signing.

use std::collections::BTreeMap;

use cosesign1_abstractions::{
    CoseError, CoseHeaderMap, CoseSign1Message, CoseSigner, HeaderKey, HeaderValue, HEADER_LABEL_ALGORITHM,
    HEADER_LABEL_CONTENT_TYPE,
};
use cosesign1_common::{encode_protected_header, encode_signature1_sig_structure};

use crate::algorithms::sig_structure_digest;

/// Options for producing a COSE_Sign1.
#[derive(Debug, Default, Clone)]
pub struct SignOptions {
    /// External additional authenticated data. Signed but never carried in the message.
    pub external_aad: Vec<u8>,
    /// Content type to place in the protected header. Empty means "none".
    pub content_type: Option<String>,
    /// If true, the payload is signed but left out of the message (`null`).
    pub detached: bool,
    /// Unprotected header entries. Carried in the message, not signed.
    pub unprotected: BTreeMap<HeaderKey, HeaderValue>,
}

impl SignOptions {
    pub fn with_external_aad(mut self, aad: impl Into<Vec<u8>>) -> Self {
        self.external_aad = aad.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn detached(mut self) -> Self {
        self.detached = true;
        self
    }

    pub fn with_unprotected(mut self, key: HeaderKey, value: HeaderValue) -> Self {
        self.unprotected.insert(key, value);
        self
    }
}

/// Sign `payload` with an embedded payload and optional content type.
pub fn sign<S: CoseSigner + ?Sized>(
    signer: &S,
    payload: &[u8],
    external_aad: &[u8],
    content_type: Option<&str>,
) -> Result<CoseSign1Message, CoseError> {
    let mut options = SignOptions::default().with_external_aad(external_aad);
    options.content_type = content_type.map(str::to_string);
    sign_cose_sign1(signer, payload, &options)
}

/// Produce a COSE_Sign1 over `payload`.
///
/// 1) Build the protected header: `alg`, plus content type when non-empty.
/// 2) Serialize it once; those bytes are what gets signed and carried.
/// 3) Build the Sig_structure over protected bytes, external AAD and payload.
/// 4) Hash and sign it, yielding the fixed-width signature.
pub fn sign_cose_sign1<S: CoseSigner + ?Sized>(
    signer: &S,
    payload: &[u8],
    options: &SignOptions,
) -> Result<CoseSign1Message, CoseError> {
    let alg = signer.algorithm();
    tracing::debug!(
        alg = %alg,
        payload_len = payload.len(),
        aad_len = options.external_aad.len(),
        detached = options.detached,
        "signing COSE_Sign1"
    );

    let mut protected = BTreeMap::new();
    protected.insert(HeaderKey::Int(HEADER_LABEL_ALGORITHM), HeaderValue::Int(alg.id()));
    if let Some(content_type) = options.content_type.as_deref().filter(|ct| !ct.is_empty()) {
        protected.insert(
            HeaderKey::Int(HEADER_LABEL_CONTENT_TYPE),
            HeaderValue::Text(content_type.to_string()),
        );
    }

    let mut msg = CoseSign1Message {
        protected_headers: encode_protected_header(protected)?,
        unprotected_headers: CoseHeaderMap::new_unprotected(options.unprotected.clone()),
        payload: None,
        signature: Vec::new(),
    };

    let sig_structure = encode_signature1_sig_structure(&msg, &options.external_aad, Some(payload))?;
    let digest = sig_structure_digest(alg, &sig_structure);
    msg.signature = signer.sign_digest(&digest)?;

    if !options.detached {
        msg.payload = Some(payload.to_vec());
    }
    Ok(msg)
}

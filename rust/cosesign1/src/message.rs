// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use cosesign1_abstractions::{CoseError, CoseSign1Message, CoseSigner, CoseVerifier};
use cosesign1_common::{encode_cose_sign1, encode_cose_sign1_tagged, parse_cose_sign1};
use cosesign1_signature::{sign_cose_sign1, verify_cose_sign1, SignOptions, VerifyOptions};

/// A COSE_Sign1 message.
///
/// Owns the decoded structure; once signed or parsed it is only read.
#[derive(Debug, Clone, PartialEq)]
pub struct CoseSign1 {
    pub parsed: CoseSign1Message,
}

impl CoseSign1 {
    /// Parse COSE_Sign1 bytes (tagged or untagged).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoseError> {
        Ok(Self {
            parsed: parse_cose_sign1(bytes)?,
        })
    }

    /// Sign `payload` and wrap the result.
    pub fn sign<S: CoseSigner + ?Sized>(signer: &S, payload: &[u8], options: &SignOptions) -> Result<Self, CoseError> {
        Ok(Self {
            parsed: sign_cose_sign1(signer, payload, options)?,
        })
    }

    /// Untagged encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CoseError> {
        encode_cose_sign1(&self.parsed)
    }

    /// Encoding prefixed with CBOR tag 18.
    pub fn to_tagged_bytes(&self) -> Result<Vec<u8>, CoseError> {
        encode_cose_sign1_tagged(&self.parsed)
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.parsed.payload.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.parsed.content_type()
    }

    pub fn is_detached(&self) -> bool {
        self.parsed.is_detached()
    }

    /// Verify the signature and return the verified payload.
    pub fn verify<'a, V: CoseVerifier + ?Sized>(
        &'a self,
        verifier: &V,
        options: &VerifyOptions<'a>,
    ) -> Result<&'a [u8], CoseError> {
        verify_cose_sign1(verifier, &self.parsed, options)
    }
}

impl From<CoseSign1Message> for CoseSign1 {
    fn from(parsed: CoseSign1Message) -> Self {
        Self { parsed }
    }
}

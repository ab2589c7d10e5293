// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! The COSE_Sign1 envelope.

use crate::header_map::{CoseHeaderMap, HEADER_LABEL_ALGORITHM, HEADER_LABEL_CONTENT_TYPE};

/// Standard CBOR tag number used for COSE_Sign1.
pub const COSE_SIGN1_TAG: u64 = 18;

/// Context string for COSE Sig_structure for COSE_Sign1.
pub const SIG_STRUCTURE_CONTEXT_SIGNATURE1: &str = "Signature1";

/// Borrowed inputs of a Signature1 Sig_structure.
#[derive(Debug, Clone)]
pub struct SigStructureView<'a> {
    pub context: &'static str,
    pub body_protected: &'a [u8],
    pub external_aad: &'a [u8],
    pub payload: &'a [u8],
}

/// A COSE_Sign1 message: `[protected, unprotected, payload, signature]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoseSign1Message {
    pub protected_headers: CoseHeaderMap,
    pub unprotected_headers: CoseHeaderMap,
    /// Embedded payload bytes; `None` represents detached payload (`null`).
    pub payload: Option<Vec<u8>>,
    pub signature: Vec<u8>,
}

impl CoseSign1Message {
    /// The serialized protected header, exactly as carried in the envelope.
    pub fn protected_bytes(&self) -> &[u8] {
        self.protected_headers.encoded_map_cbor()
    }

    pub fn is_detached(&self) -> bool {
        self.payload.is_none()
    }

    /// The raw `alg` value from the decoded protected header map, if any.
    ///
    /// For display only; verification decodes `alg` from `protected_bytes()`.
    pub fn algorithm_id(&self) -> Option<i64> {
        self.protected_headers.get_i64(HEADER_LABEL_ALGORITHM)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.protected_headers.get_text(HEADER_LABEL_CONTENT_TYPE)
    }

    /// Build the Sig_structure view for this message.
    ///
    /// An embedded payload always wins; `external_payload` is only consulted
    /// for detached messages. Returns `None` when the message is detached and
    /// no external payload was given.
    pub fn signature1_sig_structure_view<'a>(
        &'a self,
        external_aad: &'a [u8],
        external_payload: Option<&'a [u8]>,
    ) -> Option<SigStructureView<'a>> {
        let payload = self.payload.as_deref().or(external_payload)?;
        Some(SigStructureView {
            context: SIG_STRUCTURE_CONTEXT_SIGNATURE1,
            body_protected: self.protected_bytes(),
            external_aad,
            payload,
        })
    }
}

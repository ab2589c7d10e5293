// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signing and verification capabilities.
//!
//! Envelope logic only ever talks to these traits. Key types in
//! `cosesign1-signature` implement them per algorithm, so a new curve only
//! touches the key variants and never the envelope code.

use crate::{CoseAlgorithm, CoseError};

/// Something that can produce a COSE signature over a message digest.
pub trait CoseSigner {
    fn algorithm(&self) -> CoseAlgorithm;

    /// Sign the digest of the Sig_structure.
    ///
    /// The returned bytes use the fixed-width COSE encoding (`r || s` for ECDSA).
    fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>, CoseError>;
}

/// Something that can check a COSE signature over a message digest.
pub trait CoseVerifier {
    fn algorithm(&self) -> CoseAlgorithm;

    /// Verify `signature` against the digest of the Sig_structure.
    ///
    /// Contract:
    /// - `MalformedSignature` when the signature has the wrong length.
    /// - `SignatureInvalid` for any cryptographic mismatch.
    fn verify_digest(&self, digest: &[u8], signature: &[u8]) -> Result<(), CoseError>;
}

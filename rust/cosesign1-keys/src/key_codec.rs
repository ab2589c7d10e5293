// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Key container encoding and decoding.
//!
//! Decoders fail closed on the type tag: a container must carry exactly the
//! tag for the key kind being loaded. Trailing bytes after a well-formed DER
//! structure are the one tolerated irregularity; they are logged and dropped.

use cosesign1_abstractions::CoseError;
use cosesign1_signature::{KeyPair, PrivateKey, PublicKey};
use p256::pkcs8::der::{Decode as _, Header, Reader as _, SliceReader};
use p256::pkcs8::{DecodePublicKey as _, EncodePublicKey as _};

use crate::container::{KeyContainer, KeyContainerKind};

/// Serialize a private key as an `EC PRIVATE KEY` container (SEC1 DER).
pub fn serialize_private(key: &PrivateKey) -> Result<KeyContainer, CoseError> {
    match key {
        PrivateKey::Es256(secret) => {
            let der = secret
                .to_sec1_der()
                .map_err(|e| CoseError::InvalidKeyEncoding(format!("failed to encode P-256 private key: {e}")))?;
            Ok(KeyContainer::new(KeyContainerKind::EcPrivateKey, der.to_vec()))
        }
    }
}

/// Serialize a public key as a `PUBLIC KEY` container (SPKI DER).
pub fn serialize_public(key: &PublicKey) -> Result<KeyContainer, CoseError> {
    match key {
        PublicKey::Es256(vk) => {
            let der = vk
                .to_public_key_der()
                .map_err(|e| CoseError::InvalidKeyEncoding(format!("failed to encode P-256 public key: {e}")))?;
            Ok(KeyContainer::new(KeyContainerKind::PublicKey, der.as_bytes().to_vec()))
        }
    }
}

/// Load a key pair from an `EC PRIVATE KEY` container.
pub fn deserialize_private(container: &KeyContainer) -> Result<KeyPair, CoseError> {
    expect_kind(container, KeyContainerKind::EcPrivateKey)?;
    let der = without_trailing_bytes(&container.der);
    let secret = p256::SecretKey::from_sec1_der(der)
        .map_err(|e| CoseError::InvalidKeyEncoding(format!("bad P-256 private key: {e}")))?;
    Ok(KeyPair::from_private(PrivateKey::Es256(secret)))
}

/// Load a public key from a `PUBLIC KEY` container.
pub fn deserialize_public(container: &KeyContainer) -> Result<PublicKey, CoseError> {
    expect_kind(container, KeyContainerKind::PublicKey)?;
    let der = without_trailing_bytes(&container.der);
    let pk = p256::PublicKey::from_public_key_der(der)
        .map_err(|e| CoseError::InvalidKeyEncoding(format!("bad P-256 public key: {e}")))?;
    Ok(PublicKey::Es256(p256::ecdsa::VerifyingKey::from(pk)))
}

fn expect_kind(container: &KeyContainer, expected: KeyContainerKind) -> Result<(), CoseError> {
    if container.kind != expected {
        return Err(CoseError::InvalidKeyType {
            expected: expected.label().to_string(),
            found: container.kind.label().to_string(),
        });
    }
    Ok(())
}

/// Trim anything after the outermost DER structure.
///
/// If the header itself cannot be read the input is returned unchanged and
/// the key parser reports the problem.
fn without_trailing_bytes(der: &[u8]) -> &[u8] {
    match der_structure_len(der) {
        Some(len) if len < der.len() => {
            tracing::warn!(trailing_bytes = der.len() - len, "trailing bytes after DER key structure");
            &der[..len]
        }
        _ => der,
    }
}

fn der_structure_len(der: &[u8]) -> Option<usize> {
    let mut reader = SliceReader::new(der).ok()?;
    let header = Header::decode(&mut reader).ok()?;
    let total = (reader.position() + header.length).ok()?;
    usize::try_from(total).ok()
}

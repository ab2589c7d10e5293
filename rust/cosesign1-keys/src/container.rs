// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

const LABEL_EC_PRIVATE_KEY: &str = "EC PRIVATE KEY";
const LABEL_PUBLIC_KEY: &str = "PUBLIC KEY";

/// The type tag of a key container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyContainerKind {
    /// SEC1 `ECPrivateKey`.
    EcPrivateKey,
    /// X.509 `SubjectPublicKeyInfo`.
    PublicKey,
    /// Any other tag. Carried so the decoders can reject it by name.
    Other(String),
}

impl KeyContainerKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            LABEL_EC_PRIVATE_KEY => KeyContainerKind::EcPrivateKey,
            LABEL_PUBLIC_KEY => KeyContainerKind::PublicKey,
            other => KeyContainerKind::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            KeyContainerKind::EcPrivateKey => LABEL_EC_PRIVATE_KEY,
            KeyContainerKind::PublicKey => LABEL_PUBLIC_KEY,
            KeyContainerKind::Other(label) => label,
        }
    }
}

impl fmt::Display for KeyContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A type-tagged DER key encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyContainer {
    pub kind: KeyContainerKind,
    pub der: Vec<u8>,
}

impl KeyContainer {
    pub fn new(kind: KeyContainerKind, der: Vec<u8>) -> Self {
        Self { kind, der }
    }
}

// Private key DER stays out of logs and panic messages.
impl fmt::Debug for KeyContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyContainer")
            .field("kind", &self.kind)
            .field("der_len", &self.der.len())
            .finish()
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Key variants and key-pair generation.
//!
//! Keys form a closed set: one variant per supported algorithm. Envelope code
//! only sees them through `CoseSigner` / `CoseVerifier`.

use std::str::FromStr;

use cosesign1_abstractions::{CoseAlgorithm, CoseError};
use rand_core::{OsRng, RngCore};

use crate::es256;

/// Key types that can be generated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyType {
    /// ECDSA over NIST P-256.
    P256,
}

impl KeyType {
    pub fn algorithm(self) -> CoseAlgorithm {
        match self {
            KeyType::P256 => CoseAlgorithm::ES256,
        }
    }
}

impl FromStr for KeyType {
    type Err = CoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecdsa" | "p256" | "P-256" => Ok(KeyType::P256),
            other => Err(CoseError::UnsupportedKeyType(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub enum PrivateKey {
    Es256(p256::SecretKey),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    Es256(p256::ecdsa::VerifyingKey),
}

impl PrivateKey {
    pub fn key_type(&self) -> KeyType {
        match self {
            PrivateKey::Es256(_) => KeyType::P256,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::Es256(secret) => PublicKey::Es256(p256::ecdsa::VerifyingKey::from(secret.public_key())),
        }
    }
}

impl PublicKey {
    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKey::Es256(_) => KeyType::P256,
        }
    }
}

/// A private key together with its public counterpart.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    pub fn from_private(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self { private, public }
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn key_type(&self) -> KeyType {
        self.private.key_type()
    }
}

impl From<PrivateKey> for KeyPair {
    fn from(private: PrivateKey) -> Self {
        Self::from_private(private)
    }
}

/// Generate a key pair for the named key type using the OS random source.
///
/// Accepted names: `ecdsa`, `p256`, `P-256`. Anything else is `UnsupportedKeyType`.
pub fn generate_keypair(key_type: &str) -> Result<KeyPair, CoseError> {
    generate_keypair_with_rng(key_type.parse()?, &mut OsRng)
}

/// Generate a key pair drawing entropy from `rng`.
///
/// A failing random source is reported as `RandomSourceFailure`.
pub fn generate_keypair_with_rng(key_type: KeyType, rng: &mut dyn RngCore) -> Result<KeyPair, CoseError> {
    tracing::debug!(?key_type, "generating key pair");
    let private = match key_type {
        KeyType::P256 => PrivateKey::Es256(es256::random_secret_key(rng)?),
    };
    Ok(KeyPair::from_private(private))
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 signature engine.
//!
//! - Generate key pairs for the supported curve.
//! - Build the protected header, the Sig_structure, and sign it.
//! - Verify a COSE_Sign1 against a public key, returning the payload on success.
//!
//! Nothing here keeps state between calls, and nothing performs I/O.

mod algorithms;
mod es256;
mod keys;
mod signer;
mod verifier;

pub use algorithms::sig_structure_digest;
pub use keys::{generate_keypair, generate_keypair_with_rng, KeyPair, KeyType, PrivateKey, PublicKey};
pub use signer::{sign, sign_cose_sign1, SignOptions};
pub use verifier::{verify, verify_cose_sign1, VerifyOptions};

pub use cosesign1_abstractions::{CoseAlgorithm, CoseError, CoseSign1Message, CoseSigner, CoseVerifier};

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! High-level COSE_Sign1 facade.
//!
//! This crate is the primary Rust entry point for producing and checking
//! COSE_Sign1 messages:
//!
//! ```text
//! sign:   key container -> KeyPair -> CoseSign1::sign -> bytes
//! verify: bytes -> CoseSign1::from_bytes -> verify(public key, aad) -> payload
//! ```
//!
//! Design note: to keep the public API simple, codec, engine and key codec
//! APIs are re-exported at the crate root.

mod api;
mod message;

pub use message::CoseSign1;

pub use api::{sign_to_bytes, verify_bytes};

pub use cosesign1_abstractions::{
    CoseAlgorithm, CoseError, CoseHeaderMap, CoseSign1Message, CoseSigner, CoseVerifier, HeaderKey, HeaderValue,
    SigStructureView, COSE_SIGN1_TAG, HEADER_LABEL_ALGORITHM, HEADER_LABEL_CONTENT_TYPE,
    SIG_STRUCTURE_CONTEXT_SIGNATURE1,
};
pub use cosesign1_common::{
    decode_protected_header, encode_cose_sign1, encode_cose_sign1_tagged, encode_header_map, encode_protected_header, encode_sig_structure,
    encode_signature1_sig_structure, parse_cose_sign1,
};
pub use cosesign1_keys::{
    decode_pem, decode_pem_block, deserialize_private, deserialize_public, encode_pem, serialize_private,
    serialize_public, KeyContainer, KeyContainerKind,
};
pub use cosesign1_signature::{
    generate_keypair, generate_keypair_with_rng, sig_structure_digest, sign, sign_cose_sign1, verify,
    verify_cose_sign1, KeyPair, KeyType, PrivateKey, PublicKey, SignOptions, VerifyOptions,
};

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Key serialization for COSE_Sign1 keys.
//!
//! The core format is a [`KeyContainer`]: a type tag plus DER bytes.
//! - Private keys: tag `EC PRIVATE KEY`, SEC1 `ECPrivateKey` DER.
//! - Public keys: tag `PUBLIC KEY`, X.509 `SubjectPublicKeyInfo` DER.
//!
//! [`armor`] frames containers as PEM text for storage; the core never needs it.

pub mod armor;
mod container;
mod key_codec;

pub use armor::{decode_pem, decode_pem_block, encode_pem};
pub use container::{KeyContainer, KeyContainerKind};
pub use key_codec::{deserialize_private, deserialize_public, serialize_private, serialize_public};

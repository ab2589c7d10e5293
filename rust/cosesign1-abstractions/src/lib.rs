// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared interfaces and datatypes for the COSE_Sign1 Rust crates.
//!
//! This crate exists to prevent circular dependencies across:
//! - the codec (`cosesign1-common`)
//! - the signature engine (`cosesign1-signature`)
//! - the key codec (`cosesign1-keys`)
//! - the high-level facade (`cosesign1`)
//!
//! It is intentionally kept small and free of cryptographic dependencies.

pub mod algorithm;
pub mod capability;
pub mod cose_sign1_message;
pub mod error;
pub mod header_map;

pub use algorithm::CoseAlgorithm;
pub use capability::{CoseSigner, CoseVerifier};
pub use cose_sign1_message::{CoseSign1Message, SigStructureView, COSE_SIGN1_TAG, SIG_STRUCTURE_CONTEXT_SIGNATURE1};
pub use error::CoseError;
pub use header_map::{CoseHeaderMap, HeaderKey, HeaderValue, HEADER_LABEL_ALGORITHM, HEADER_LABEL_CONTENT_TYPE};

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! COSE_Sign1 codec.
//!
//! Purely syntactic: nothing in this crate looks at algorithms or keys.

pub mod cose_sign1;
pub mod header_map;

pub use cosesign1_abstractions::{
    CoseError, CoseHeaderMap, CoseSign1Message, HeaderKey, HeaderValue, SigStructureView, COSE_SIGN1_TAG,
    SIG_STRUCTURE_CONTEXT_SIGNATURE1,
};

pub use cose_sign1::{
    encode_cose_sign1, encode_cose_sign1_tagged, encode_sig_structure, encode_signature1_sig_structure,
    parse_cose_sign1,
};
pub use header_map::{decode_protected_header, encode_header_map, encode_protected_header};

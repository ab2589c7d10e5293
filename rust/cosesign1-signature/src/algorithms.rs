// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use cosesign1_abstractions::CoseAlgorithm;
use sha2::{Digest as _, Sha256};

/// Hash the Sig_structure with the digest bound to `alg`.
pub fn sig_structure_digest(alg: CoseAlgorithm, sig_structure: &[u8]) -> Vec<u8> {
    match alg {
        CoseAlgorithm::ES256 => Sha256::digest(sig_structure).to_vec(),
    }
}

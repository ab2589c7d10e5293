// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;

/// Supported COSE algorithms (IANA COSE Algorithms registry).
///
/// The set is closed: adding an algorithm means adding a variant here and a
/// matching key variant in `cosesign1-signature`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum CoseAlgorithm {
    /// ECDSA w/ SHA-256 over P-256.
    ES256 = -7,
}

impl CoseAlgorithm {
    /// Map a COSE `alg` header value onto a supported algorithm.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            -7 => Some(CoseAlgorithm::ES256),
            _ => None,
        }
    }

    /// The COSE `alg` header value.
    pub fn id(self) -> i64 {
        self as i64
    }

    /// Byte width of one signature scalar (`r` or `s`).
    pub fn coordinate_len(self) -> usize {
        match self {
            CoseAlgorithm::ES256 => 32,
        }
    }

    /// Length of the fixed-width `r || s` signature.
    pub fn signature_len(self) -> usize {
        2 * self.coordinate_len()
    }
}

impl fmt::Display for CoseAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoseAlgorithm::ES256 => write!(f, "ES256"),
        }
    }
}

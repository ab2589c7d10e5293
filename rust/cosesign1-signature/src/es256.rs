// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! ES256: ECDSA w/ SHA-256 over P-256.

use cosesign1_abstractions::{CoseAlgorithm, CoseError, CoseSigner, CoseVerifier};
use p256::ecdsa::{Signature, SigningKey};
use p256::elliptic_curve::zeroize::Zeroize as _;
use rand_core::{CryptoRng, OsRng, RngCore};
use signature::hazmat::{PrehashVerifier, RandomizedPrehashSigner};

use crate::keys::{PrivateKey, PublicKey};

/// Rejection sampling bound. A uniformly random 256-bit string is a valid
/// P-256 scalar with probability ~1 - 2^-32.
const MAX_SCALAR_ATTEMPTS: usize = 8;

pub(crate) fn random_secret_key(rng: &mut dyn RngCore) -> Result<p256::SecretKey, CoseError> {
    let mut bytes = p256::FieldBytes::default();
    for _ in 0..MAX_SCALAR_ATTEMPTS {
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| CoseError::RandomSourceFailure(e.to_string()))?;
        let candidate = p256::SecretKey::from_bytes(&bytes);
        bytes.as_mut_slice().zeroize();
        if let Ok(secret) = candidate {
            return Ok(secret);
        }
    }
    Err(CoseError::RandomSourceFailure(
        "random source did not yield a valid P-256 scalar".to_string(),
    ))
}

/// Additional signing entropy drawn with a fallible read before signing.
///
/// The hedged ECDSA nonce derivation reads one field element of additional
/// data from its RNG; serving it from this buffer means a broken OS source is
/// reported as an error rather than a panic inside the primitive.
struct DrawnEntropy {
    buf: [u8; 32],
    pos: usize,
}

impl DrawnEntropy {
    fn draw() -> Result<Self, CoseError> {
        let mut buf = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| CoseError::RandomSourceFailure(e.to_string()))?;
        Ok(Self { buf, pos: 0 })
    }
}

impl RngCore for DrawnEntropy {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.buf[self.pos % self.buf.len()];
            self.pos += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for DrawnEntropy {}

impl Drop for DrawnEntropy {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

fn sign_digest(secret: &p256::SecretKey, digest: &[u8]) -> Result<Vec<u8>, CoseError> {
    let signing_key = SigningKey::from(secret);
    let mut entropy = DrawnEntropy::draw()?;
    let signature: Signature = signing_key
        .sign_prehash_with_rng(&mut entropy, digest)
        .map_err(|e| CoseError::SigningFailed(format!("ES256: {e}")))?;
    // COSE carries ECDSA signatures as the fixed-width `r || s` concatenation.
    Ok(signature.to_bytes().to_vec())
}

fn verify_digest(vk: &p256::ecdsa::VerifyingKey, digest: &[u8], sig: &[u8]) -> Result<(), CoseError> {
    let expected = CoseAlgorithm::ES256.signature_len();
    if sig.len() != expected {
        return Err(CoseError::MalformedSignature {
            expected,
            actual: sig.len(),
        });
    }
    // Out-of-range r or s is a corrupted signature, not a framing problem.
    let signature = Signature::from_slice(sig).map_err(|_| CoseError::SignatureInvalid)?;
    vk.verify_prehash(digest, &signature)
        .map_err(|_| CoseError::SignatureInvalid)
}

impl CoseSigner for PrivateKey {
    fn algorithm(&self) -> CoseAlgorithm {
        self.key_type().algorithm()
    }

    fn sign_digest(&self, digest: &[u8]) -> Result<Vec<u8>, CoseError> {
        match self {
            PrivateKey::Es256(secret) => sign_digest(secret, digest),
        }
    }
}

impl CoseVerifier for PublicKey {
    fn algorithm(&self) -> CoseAlgorithm {
        self.key_type().algorithm()
    }

    fn verify_digest(&self, digest: &[u8], signature: &[u8]) -> Result<(), CoseError> {
        match self {
            PublicKey::Es256(vk) => verify_digest(vk, digest, signature),
        }
    }
}

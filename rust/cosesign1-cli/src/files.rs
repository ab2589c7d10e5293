// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cosesign1::{
    decode_pem, deserialize_private, deserialize_public, encode_pem, serialize_private, serialize_public, KeyPair,
    PublicKey,
};

pub const SIGNATURE_FILE: &str = "sig.cbor";
pub const PRIVATE_KEY_FILE: &str = "private.pem";
pub const PUBLIC_KEY_FILE: &str = "public.pem";

pub fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "wrote file");
    Ok(path)
}

fn read_pem(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn load_private_key(path: &Path) -> Result<KeyPair> {
    let container = decode_pem(&read_pem(path)?).with_context(|| format!("{} is not PEM", path.display()))?;
    deserialize_private(&container).with_context(|| format!("failed to load private key from {}", path.display()))
}

pub fn load_public_key(path: &Path) -> Result<PublicKey> {
    let container = decode_pem(&read_pem(path)?).with_context(|| format!("{} is not PEM", path.display()))?;
    deserialize_public(&container).with_context(|| format!("failed to load public key from {}", path.display()))
}

pub fn store_private_key(dir: &Path, key: &KeyPair) -> Result<PathBuf> {
    let pem = encode_pem(&serialize_private(key.private_key())?);
    write(dir, PRIVATE_KEY_FILE, pem.as_bytes())
}

pub fn store_public_key(dir: &Path, key: &PublicKey) -> Result<PathBuf> {
    let pem = encode_pem(&serialize_public(key)?);
    write(dir, PUBLIC_KEY_FILE, pem.as_bytes())
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::Engine as _;
use cosesign1::{generate_keypair, sign_to_bytes, verify_bytes, CoseAlgorithm, SignOptions, VerifyOptions};

use crate::args::Cli;
use crate::error::UsageError;
use crate::files;
use crate::output::render_payload;

/// What a successful invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    KeysWritten {
        private_key: PathBuf,
        public_key: PathBuf,
    },
    Signed {
        signature: PathBuf,
        /// Set when no key was supplied and a throwaway key signed the content.
        public_key: Option<PathBuf>,
    },
    /// The rendered payload line.
    Verified(String),
}

/// Execute one `coset` invocation.
pub fn run(cli: &Cli) -> Result<Outcome> {
    if let Some(key_type) = &cli.generate {
        return generate(cli, key_type);
    }

    if !cli.sign && cli.key.is_none() {
        return Err(UsageError::NoKey.into());
    }
    let content = read_content(cli)?;
    let aad = decode_aad(cli.aad.as_deref())?;

    if cli.sign {
        sign(cli, &content, aad)
    } else {
        verify(cli, &content, &aad)
    }
}

fn generate(cli: &Cli, key_type: &str) -> Result<Outcome> {
    let key = generate_keypair(key_type).context("could not generate key")?;
    let private_key = files::store_private_key(&cli.out_dir, &key)?;
    let public_key = files::store_public_key(&cli.out_dir, key.public_key())?;
    Ok(Outcome::KeysWritten {
        private_key,
        public_key,
    })
}

fn read_content(cli: &Cli) -> Result<Vec<u8>> {
    match (&cli.message, &cli.file) {
        (Some(_), Some(_)) => Err(UsageError::BothMessageAndFile.into()),
        (Some(message), None) => Ok(message.as_bytes().to_vec()),
        (None, Some(path)) => files::read(path),
        (None, None) => Err(UsageError::NoContent.into()),
    }
}

fn decode_aad(aad: Option<&str>) -> Result<Vec<u8>> {
    match aad {
        None => Ok(Vec::new()),
        Some(encoded) => base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .context("failed to extract external AAD"),
    }
}

fn sign(cli: &Cli, content: &[u8], aad: Vec<u8>) -> Result<Outcome> {
    let key = match &cli.key {
        Some(path) => files::load_private_key(path)?,
        None => generate_keypair("ecdsa").context("could not generate key")?,
    };

    let mut options = SignOptions::default().with_external_aad(aad);
    if let Some(content_type) = &cli.content_type {
        options = options.with_content_type(content_type.as_str());
    }
    if cli.detached {
        options = options.detached();
    }

    let envelope = sign_to_bytes(key.private_key(), content, &options).context("failed to sign content")?;
    let signature = files::write(&cli.out_dir, files::SIGNATURE_FILE, &envelope)?;

    let public_key = match cli.key {
        Some(_) => None,
        None => Some(files::store_public_key(&cli.out_dir, key.public_key())?),
    };
    Ok(Outcome::Signed {
        signature,
        public_key,
    })
}

fn verify(cli: &Cli, envelope: &[u8], aad: &[u8]) -> Result<Outcome> {
    let Some(key_path) = &cli.key else {
        return Err(UsageError::NoKey.into());
    };
    let key = files::load_public_key(key_path)?;
    let external_payload = cli.payload.as_deref().map(files::read).transpose()?;

    let options = VerifyOptions {
        external_aad: aad,
        external_payload: external_payload.as_deref(),
        expected_alg: Some(CoseAlgorithm::ES256),
    };
    let payload = verify_bytes(&key, envelope, &options).context("verification failed")?;
    Ok(Outcome::Verified(render_payload(&payload, &cli.output)))
}

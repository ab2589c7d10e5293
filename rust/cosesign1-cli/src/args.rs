// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "coset", version, about = "Sign and verify COSE_Sign1 messages")]
pub struct Cli {
    /// Generate a key pair of the given type and write private.pem / public.pem.
    #[arg(short = 'g', value_name = "KEYTYPE")]
    pub generate: Option<String>,

    /// Sign content instead of verifying it.
    #[arg(short = 's')]
    pub sign: bool,

    /// Key file (private key when signing, public key when verifying).
    #[arg(short = 'k', value_name = "FILE")]
    pub key: Option<PathBuf>,

    /// External AAD, base64 encoded.
    #[arg(short = 'e', value_name = "AAD")]
    pub aad: Option<String>,

    /// Message (string) to sign.
    #[arg(short = 'm', value_name = "MSG")]
    pub message: Option<String>,

    /// File with content to sign, or the COSE_Sign1 envelope to verify.
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Content type of the message.
    #[arg(short = 't', value_name = "CONTENT_TYPE")]
    pub content_type: Option<String>,

    /// Output the verified payload as text, hex or base64.
    #[arg(short = 'o', value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Directory for sig.cbor, private.pem and public.pem.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Leave the payload out of the signed envelope.
    #[arg(long)]
    pub detached: bool,

    /// Out-of-band payload for verifying a detached envelope.
    #[arg(long, value_name = "FILE")]
    pub payload: Option<PathBuf>,
}

impl Cli {
    pub fn usage_line() -> &'static str {
        "usage: coset [-g keytype] [-s] -m msg|-f file [-k file] [-e aad] [-t content-type] [-o format] \
         [--out-dir dir] [--detached] [--payload file]"
    }
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! PEM armor for key containers.
//!
//! ```text
//! -----BEGIN <label>-----
//! <base64 DER, 64 columns>
//! -----END <label>-----
//! ```
//!
//! Text before the BEGIN line is skipped. Text after the END line is
//! reported with a warning and otherwise ignored.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cosesign1_abstractions::CoseError;

use crate::container::{KeyContainer, KeyContainerKind};

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const DASHES: &str = "-----";
const LINE_WIDTH: usize = 64;

/// Frame a key container as PEM text.
pub fn encode_pem(container: &KeyContainer) -> String {
    let label = container.kind.label();
    let body = STANDARD.encode(&container.der);

    let mut out = String::with_capacity(body.len() + body.len() / LINE_WIDTH + 2 * label.len() + 40);
    out.push_str(&format!("{BEGIN_PREFIX}{label}{DASHES}\n"));
    // base64 output is ASCII, so every split point is a char boundary.
    let mut rest = body.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(LINE_WIDTH));
        out.push_str(line);
        out.push('\n');
        rest = tail;
    }
    out.push_str(&format!("{END_PREFIX}{label}{DASHES}\n"));
    out
}

/// Decode the first PEM block in `text`, warning about any trailing bytes.
pub fn decode_pem(text: &str) -> Result<KeyContainer, CoseError> {
    let (container, rest) = decode_pem_block(text)?;
    if !rest.is_empty() {
        tracing::warn!(trailing_bytes = rest.len(), "trailing bytes after PEM block");
    }
    Ok(container)
}

/// Decode the first PEM block in `text` and return the remaining input.
pub fn decode_pem_block(text: &str) -> Result<(KeyContainer, &str), CoseError> {
    let begin = text
        .find(BEGIN_PREFIX)
        .ok_or_else(|| CoseError::InvalidKeyEncoding("no PEM block found".to_string()))?;
    let after_begin = &text[begin + BEGIN_PREFIX.len()..];

    let (label_line, mut rest) = split_line(after_begin);
    let label = label_line
        .strip_suffix(DASHES)
        .ok_or_else(|| CoseError::InvalidKeyEncoding("malformed PEM BEGIN line".to_string()))?;
    let end_line = format!("{END_PREFIX}{label}{DASHES}");

    let mut body = String::new();
    loop {
        if rest.is_empty() {
            return Err(CoseError::InvalidKeyEncoding(format!("missing PEM END line for '{label}'")));
        }
        let (line, next) = split_line(rest);
        rest = next;
        if line == end_line {
            break;
        }
        body.extend(line.chars().filter(|c| !c.is_ascii_whitespace()));
    }

    let der = STANDARD
        .decode(body.as_bytes())
        .map_err(|e| CoseError::InvalidKeyEncoding(format!("bad PEM base64 body: {e}")))?;

    Ok((KeyContainer::new(KeyContainerKind::from_label(label), der), rest))
}

/// Split off the first line, dropping its `\n` or `\r\n` terminator.
fn split_line(text: &str) -> (&str, &str) {
    let (line, rest) = match text.find('\n') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => (text, ""),
    };
    (line.strip_suffix('\r').unwrap_or(line), rest)
}

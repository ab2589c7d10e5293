// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use base64::Engine as _;

/// Render a verified payload for stdout.
///
/// Unknown formats are not an error; the caller still prints the returned line.
pub fn render_payload(payload: &[u8], format: &str) -> String {
    match format {
        "text" => String::from_utf8_lossy(payload).into_owned(),
        "hex" => hex::encode(payload),
        "base64" => base64::engine::general_purpose::STANDARD.encode(payload),
        other => format!("Output format '{other}' not supported"),
    }
}

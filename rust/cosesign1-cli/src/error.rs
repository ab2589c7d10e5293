// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Invalid flag combinations. `main` prints these with the usage line and exits 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("No key provided")]
    NoKey,

    #[error("No content provided")]
    NoContent,

    #[error("Both message and file provided")]
    BothMessageAndFile,
}

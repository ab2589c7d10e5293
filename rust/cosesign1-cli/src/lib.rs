// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! `coset`: a small command line front end over the `cosesign1` crates.
//!
//! The binary only parses flags, installs logging and prints; everything else
//! lives here so it can be driven from tests.

pub mod args;
mod commands;
mod error;
mod files;
pub mod output;

pub use args::Cli;
pub use commands::{run, Outcome};
pub use error::UsageError;
pub use files::{PRIVATE_KEY_FILE, PUBLIC_KEY_FILE, SIGNATURE_FILE};

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::process::ExitCode;

use clap::Parser;
use cosesign1_cli::{run, Cli, Outcome, UsageError};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(Outcome::Verified(line)) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Ok(outcome) => {
            tracing::debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Some(usage) = err.downcast_ref::<UsageError>() {
                println!("{usage}");
                println!("{}", Cli::usage_line());
                return ExitCode::from(1);
            }
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

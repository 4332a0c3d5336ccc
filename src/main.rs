//! codemagic-sync - upload Firebase secrets to Codemagic.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use codemagic_sync::cli::output;
use codemagic_sync::cli::{execute, Cli};
use codemagic_sync::core::constants;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only confirmation lines
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("codemagic_sync=debug")
        } else {
            EnvFilter::new("codemagic_sync=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

//! Freetier - main entry point.
//!
//! Starts the interactive catalog browser by default; `list`, `open` and
//! `completion` work without a terminal.

use anyhow::Result;
use clap::Parser;

use freetier_cli::cli::{Cli, ColorMode, dispatch_command};
use freetier_cli::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // SAFETY: Environment variable mutations happen early before threads spawn
    match cli.color {
        ColorMode::Never => unsafe { std::env::set_var("NO_COLOR", "1") },
        ColorMode::Always => unsafe { std::env::remove_var("NO_COLOR") },
        ColorMode::Auto => {}
    }

    let _debug_guard = init_logging(&cli)?;

    dispatch_command(cli).await
}

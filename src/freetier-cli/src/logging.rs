//! Tracing setup.
//!
//! The TUI owns the terminal, so it only logs when `--debug` sends
//! everything to `./debug.txt`. Subcommands log to stderr.

use std::fs::File;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::Cli;

/// Keeps the debug log writer alive; dropping it flushes the file.
pub struct DebugLogGuard {
    _guard: WorkerGuard,
}

/// Install the subscriber for this invocation.
pub fn init_logging(cli: &Cli) -> Result<Option<DebugLogGuard>> {
    if cli.debug {
        return setup_debug_file_logging().map(Some);
    }

    if cli.command.is_some() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(cli.effective_log_level().as_filter_str()));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(None)
}

/// Write ALL trace-level logs to ./debug.txt.
fn setup_debug_file_logging() -> Result<DebugLogGuard> {
    let debug_file_path = std::env::current_dir()?.join("debug.txt");

    let file = File::create(&debug_file_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create debug.txt: {}. Check write permissions.",
            e
        )
    })?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(EnvFilter::new("trace"))
        .with(file_layer)
        .init();

    eprintln!(
        "Debug mode enabled: logging to {}",
        debug_file_path.display()
    );

    Ok(DebugLogGuard { _guard: guard })
}

//! Command dispatch and execution handlers.
//!
//! Routes the parsed [`Cli`] to the interactive TUI or to a subcommand.

use std::io;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use freetier_tui::TuiConfig;

use super::args::*;

/// Dispatch a CLI command to its handler.
pub async fn dispatch_command(cli: Cli) -> Result<()> {
    match cli.command {
        None => run_tui(cli.interactive).await,
        Some(Commands::List(list_cli)) => list_cli.run().await,
        Some(Commands::Open(open_cli)) => open_cli.run().await,
        Some(Commands::Completion(completion_cli)) => {
            generate_completions(completion_cli.shell);
            Ok(())
        }
    }
}

/// Load the TUI config and apply command-line overrides.
pub fn resolve_tui_config(args: &InteractiveArgs) -> Result<TuiConfig> {
    let mut config = match &args.config {
        Some(path) => TuiConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => TuiConfig::load_default()?,
    };

    if args.no_background {
        config.background.enabled = false;
    }
    if let Some(fps) = args.fps {
        if fps == 0 {
            anyhow::bail!("--fps must be at least 1");
        }
        config.background.fps = fps;
    }
    Ok(config)
}

async fn run_tui(args: InteractiveArgs) -> Result<()> {
    let config = resolve_tui_config(&args)?;
    let exit_info = freetier_tui::run(config).await?;

    tracing::debug!(reason = %exit_info.exit_reason, "tui exited");
    if let Some(message) = &exit_info.exit_message {
        eprintln!("{message}");
    }
    Ok(())
}

/// Write a completion script for `shell` to stdout.
fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "freetier", &mut io::stdout());
}

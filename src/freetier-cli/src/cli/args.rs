//! CLI argument structures and parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use super::styles::{AFTER_HELP, BEFORE_HELP, get_styles};
use crate::list_cmd::ListCommand;
use crate::open_cmd::OpenCommand;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Color output mode for CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Automatically detect if output is a terminal
    #[default]
    Auto,
    /// Always output with colors
    Always,
    /// Never output with colors
    Never,
}

/// Freetier - free AI providers and hosting platforms
///
/// If no subcommand is specified, starts the interactive TUI.
#[derive(Parser, Debug)]
#[command(name = "freetier")]
#[command(author, version)]
#[command(about = "Browse free-tier AI providers, trial credits and hosting platforms", long_about = None)]
#[command(styles = get_styles(), before_help = BEFORE_HELP, after_help = AFTER_HELP)]
pub struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Enable trace-level logging for debugging
    #[arg(long = "trace", global = true)]
    pub trace: bool,

    /// Set log verbosity level
    #[arg(
        long = "log-level",
        short = 'L',
        global = true,
        value_enum,
        default_value = "info",
        help_heading = "Debugging"
    )]
    pub log_level: LogLevel,

    /// Enable debug mode: writes ALL trace-level logs to ./debug.txt
    #[arg(long = "debug", global = true, help_heading = "Debugging")]
    pub debug: bool,

    /// Control color output: auto (default), always, or never
    #[arg(long = "color", global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[clap(flatten)]
    pub interactive: InteractiveArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Effective log level: `--trace`, then `--verbose`, then
    /// `FREETIER_LOG_LEVEL`, then `--log-level`.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.trace {
            LogLevel::Trace
        } else if self.verbose {
            LogLevel::Debug
        } else if let Ok(env_level) = std::env::var("FREETIER_LOG_LEVEL") {
            LogLevel::from_str_loose(&env_level).unwrap_or(self.log_level)
        } else {
            self.log_level
        }
    }
}

/// Arguments for interactive mode.
#[derive(Args, Debug, Default)]
pub struct InteractiveArgs {
    /// Config file to use instead of $FREETIER_HOME/config.toml
    #[arg(long = "config", value_name = "PATH", help_heading = "Interactive")]
    pub config: Option<PathBuf>,

    /// Start with the background animation turned off
    #[arg(long = "no-background", help_heading = "Interactive")]
    pub no_background: bool,

    /// Background frame rate (1-120)
    #[arg(long = "fps", value_name = "N", help_heading = "Interactive")]
    pub fps: Option<u32>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a catalog, optionally filtered
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Open an entry's website in the browser
    Open(OpenCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),
}

/// Arguments for `completion`.
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use freetier_catalog::CatalogKind;
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["freetier", "--no-background", "--fps", "10"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.interactive.no_background);
        assert_eq!(cli.interactive.fps, Some(10));
    }

    #[test]
    fn test_list_args() {
        let cli =
            Cli::try_parse_from(["freetier", "list", "--tab", "deployment", "-q", "cloud", "--json"])
                .unwrap();
        match cli.command {
            Some(Commands::List(list)) => {
                assert_eq!(list.tab, CatalogKind::Deployment);
                assert_eq!(list.query, "cloud");
                assert!(list.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_bad_tab_rejected() {
        assert!(Cli::try_parse_from(["freetier", "list", "--tab", "nope"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["freetier", "list", "--verbose", "--color", "never"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorMode::Never);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::from_str_loose("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str_loose("loud"), None);
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
    }

    #[test]
    #[serial]
    fn test_effective_log_level_precedence() {
        unsafe { std::env::remove_var("FREETIER_LOG_LEVEL") };
        let cli = Cli::try_parse_from(["freetier", "-L", "warn", "list"]).unwrap();
        assert_eq!(cli.effective_log_level(), LogLevel::Warn);

        unsafe { std::env::set_var("FREETIER_LOG_LEVEL", "error") };
        assert_eq!(cli.effective_log_level(), LogLevel::Error);
        let cli = Cli::try_parse_from(["freetier", "--verbose", "list"]).unwrap();
        assert_eq!(cli.effective_log_level(), LogLevel::Debug);
        unsafe { std::env::remove_var("FREETIER_LOG_LEVEL") };

        let cli = Cli::try_parse_from(["freetier", "--trace", "-v", "list"]).unwrap();
        assert_eq!(cli.effective_log_level(), LogLevel::Trace);
    }
}

//! CLI argument parsing and command dispatch.
//!
//! - `args` - Command-line argument structures
//! - `styles` - ANSI styling for help output
//! - `handlers` - Command execution handlers

pub mod args;
pub mod handlers;
pub mod styles;

pub use args::{Cli, ColorMode, Commands, CompletionCommand, InteractiveArgs, LogLevel};
pub use handlers::dispatch_command;
pub use styles::{AFTER_HELP, BEFORE_HELP, get_styles};

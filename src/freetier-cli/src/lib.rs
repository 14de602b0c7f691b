//! Freetier CLI library.
//!
//! - `cli/` - Argument parsing and dispatch
//! - `list_cmd` - `freetier list`
//! - `open_cmd` - `freetier open`
//! - `logging` - Tracing subscriber setup

pub mod cli;
pub mod list_cmd;
pub mod logging;
pub mod open_cmd;

pub use cli::{Cli, dispatch_command};

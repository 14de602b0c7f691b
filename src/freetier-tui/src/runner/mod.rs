//! Terminal ownership, the event loop and link opening.

mod app_runner;
pub mod browser;
mod event_loop;
mod exit_info;
pub mod terminal;

pub use app_runner::AppRunner;
pub use browser::{OpenLinkError, open_link, validate_link};
pub use event_loop::{EventLoop, LinkOpener};
pub use exit_info::{AppExitInfo, ExitReason};
pub use terminal::{FreetierTerminal, TerminalGuard, TerminalModes};

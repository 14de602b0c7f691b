//! Freetier terminal user interface.
//!
//! A tabbed, searchable browser over the free-tier catalogs, drawn over a
//! digital rain background.
//!
//! ```text
//! FrameEngine ──EngineEvent──┐
//!                            ├──► EventLoop ──dispatch──► AppState + CategoryState
//! RepaintTimer ──frame no.───┘        │
//!                                     └──render──► MainView (background, header, cards, footer)
//! ```
//!
//! - [`app`]: query, active tab and the action dispatcher
//! - [`views`]: the widgets, including the card grid and its accordion state
//! - [`runner`]: terminal setup, the event loop and link opening
//! - [`config`]: the optional `config.toml`

pub mod app;
pub mod config;
pub mod runner;
pub mod views;

pub use app::{AppState, Effect, TabController, dispatch};
pub use config::{BackgroundConfig, ConfigError, TuiConfig, UiConfig};
pub use runner::{AppExitInfo, AppRunner, ExitReason, OpenLinkError, open_link};
pub use views::{CategoryState, MainView};

/// Run the interactive TUI with `config`.
pub async fn run(config: TuiConfig) -> anyhow::Result<AppExitInfo> {
    AppRunner::new(config).run().await
}

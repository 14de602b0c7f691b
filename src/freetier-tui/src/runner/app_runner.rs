//! Top-level entry point for the interactive TUI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, bail};
use freetier_core::frame_engine::{FrameEngine, create_event_channel};

use super::event_loop::EventLoop;
use super::exit_info::{AppExitInfo, ExitReason};
use super::terminal::{FreetierTerminal, TerminalModes, is_interactive};
use crate::config::TuiConfig;

/// Owns the terminal for the lifetime of one TUI session.
///
/// ```rust,ignore
/// let exit = AppRunner::new(TuiConfig::load_default()?).run().await?;
/// ```
pub struct AppRunner {
    config: TuiConfig,
    modes: TerminalModes,
}

impl AppRunner {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            config,
            modes: TerminalModes::default(),
        }
    }

    /// Take over the terminal and run until the user quits.
    ///
    /// # Errors
    ///
    /// Fails if stdin or stdout is not a terminal, or if the terminal cannot
    /// be set up or drawn to.
    pub async fn run(self) -> Result<AppExitInfo> {
        if !is_interactive() {
            bail!("the interactive view needs a terminal; use `freetier list` for plain output");
        }

        let mut terminal = FreetierTerminal::enter(self.modes)?;
        let (width, height) = terminal.size()?;
        tracing::info!(width, height, "starting tui");

        let (event_tx, event_rx) = create_event_channel();
        let running = Arc::new(AtomicBool::new(true));
        let mut engine = FrameEngine::new(event_tx, running.clone());
        let engine_task = tokio::spawn(async move {
            if let Err(e) = engine.run().await {
                tracing::error!(error = %e, "frame engine failed");
            }
        });

        let mut event_loop = EventLoop::new(self.config, width, height);
        let result = event_loop.run(&mut terminal, event_rx).await;

        running.store(false, Ordering::SeqCst);
        drop(event_loop);
        let _ = engine_task.await;
        drop(terminal);

        let reason = result?;
        tracing::info!(%reason, "tui exited");
        let info = AppExitInfo::default().with_exit_reason(reason);
        Ok(match reason {
            ExitReason::Interrupted => info.with_exit_message("Interrupted."),
            _ => info,
        })
    }
}

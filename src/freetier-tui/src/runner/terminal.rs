//! Taking over and handing back the terminal.
//!
//! [`FreetierTerminal::enter`] switches to raw mode, the alternate screen and
//! bracketed paste. Whatever was switched on is switched off again when the
//! [`TerminalGuard`] drops, or by the panic hook if the process panics first.

use std::io::{IsTerminal, Stdout, stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Window title set while the TUI runs.
pub const WINDOW_TITLE: &str = "Freetier";

/// Terminal modes switched on for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalModes {
    pub alternate_screen: bool,
    /// Pasted text arrives as one event instead of keystrokes
    pub bracketed_paste: bool,
}

impl Default for TerminalModes {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            bracketed_paste: true,
        }
    }
}

impl TerminalModes {
    fn enable(self) -> Result<()> {
        enable_raw_mode()?;
        let mut out = stdout();
        if self.alternate_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        if self.bracketed_paste {
            execute!(out, EnableBracketedPaste)?;
        }
        execute!(out, cursor::Hide, SetTitle(WINDOW_TITLE))?;
        Ok(())
    }

    fn disable(self) -> Result<()> {
        let mut out = stdout();
        execute!(out, cursor::Show)?;
        if self.bracketed_paste {
            execute!(out, DisableBracketedPaste)?;
        }
        if self.alternate_screen {
            execute!(out, LeaveAlternateScreen)?;
        }
        disable_raw_mode()?;
        Ok(())
    }
}

/// Restores the terminal on drop.
pub struct TerminalGuard {
    modes: TerminalModes,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.modes.disable() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}

/// The ratatui terminal plus the guard that hands it back.
pub struct FreetierTerminal {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl FreetierTerminal {
    /// Take over stdout with `modes`.
    ///
    /// # Errors
    ///
    /// Fails if raw mode cannot be enabled or the backend cannot be created.
    pub fn enter(modes: TerminalModes) -> Result<Self> {
        install_panic_hook(modes);
        modes.enable()?;
        // The guard owns cleanup from here, even if backend creation fails.
        let guard = TerminalGuard { modes };
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            terminal,
            _guard: guard,
        })
    }

    /// Current size as `(width, height)` in cells.
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

/// Restore the terminal before the previous hook prints the panic.
fn install_panic_hook(modes: TerminalModes) {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = modes.disable();
        previous(info);
        if std::env::var_os("RUST_BACKTRACE").is_none() {
            eprintln!("\nRun with RUST_BACKTRACE=1 for a backtrace.");
        }
    }));
}

/// Returns true if both stdin and stdout are terminals.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && stdout().is_terminal()
}

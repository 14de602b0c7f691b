//! How the TUI ended.

/// The reason the application exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitReason {
    /// User quit via Esc on an empty query.
    #[default]
    Normal,
    /// User pressed Ctrl+C.
    Interrupted,
    /// The terminal input stream closed.
    InputClosed,
}

impl std::fmt::Display for ExitReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitReason::Normal => write!(f, "normal exit"),
            ExitReason::Interrupted => write!(f, "interrupted"),
            ExitReason::InputClosed => write!(f, "input closed"),
        }
    }
}

/// Returned by [`AppRunner::run`](super::AppRunner::run).
#[derive(Debug, Clone, Default)]
pub struct AppExitInfo {
    pub exit_reason: ExitReason,
    /// Message to print once the terminal is restored.
    pub exit_message: Option<String>,
}

impl AppExitInfo {
    pub fn with_exit_reason(mut self, reason: ExitReason) -> Self {
        self.exit_reason = reason;
        self
    }

    pub fn with_exit_message(mut self, message: impl Into<String>) -> Self {
        self.exit_message = Some(message.into());
        self
    }

    pub fn is_normal(&self) -> bool {
        self.exit_reason == ExitReason::Normal
    }
}

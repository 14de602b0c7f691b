//! Application state owned by the event loop.

use freetier_catalog::CatalogKind;
use freetier_tui_components::input::InputState;

use super::tabs::TabController;

/// Placeholder shown in the empty search box.
pub const SEARCH_PLACEHOLDER: &str = "Search providers or models...";

/// Severity of a status line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One transient message shown under the cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Query, active tab and session flags.
///
/// Nothing here is persisted; every launch starts on the providers tab with
/// an empty query.
#[derive(Debug, Clone)]
pub struct AppState {
    pub tabs: TabController,
    pub search: InputState,
    pub status: Option<StatusMessage>,
    pub background_enabled: bool,
    quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tabs: TabController::new(),
            search: InputState::new().with_placeholder(SEARCH_PLACEHOLDER),
            status: None,
            background_enabled: true,
            quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> CatalogKind {
        self.tabs.active()
    }

    pub fn query(&self) -> &str {
        &self.search.value
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.active_tab(), CatalogKind::Providers);
        assert_eq!(state.query(), "");
        assert_eq!(state.search.placeholder.as_deref(), Some(SEARCH_PLACEHOLDER));
        assert!(state.status.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_status_constructors() {
        assert_eq!(StatusMessage::info("ok").kind, StatusKind::Info);
        assert_eq!(StatusMessage::error("no").kind, StatusKind::Error);
    }
}

//! Application state and the action dispatcher.

mod dispatch;
mod state;
mod tabs;

pub use dispatch::{Effect, dispatch};
pub use state::{AppState, SEARCH_PLACEHOLDER, StatusKind, StatusMessage};
pub use tabs::TabController;

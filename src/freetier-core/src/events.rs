//! Actions and key mapping.
//!
//! - [`Action`] - what a key press asks the app to do
//! - [`InputAction`] - edits to the search query
//! - [`KeyMapper`] - trait for mapping key events to actions
//! - [`DefaultKeyMapper`] - the standard Freetier bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Edits to the single-line search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// A character was typed
    Char(char),
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Clear the input
    Clear,
    /// Pasted text, inserted at the cursor
    Paste(String),
}

/// Actions the TUI can dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,

    /// Search input edit
    Input(InputAction),

    // Tabs
    NextTab,
    PrevTab,
    /// Jump straight to the tab at this index
    SelectTab(usize),

    // Card selection
    SelectPrev,
    SelectNext,
    PageUp,
    PageDown,

    // Model accordion inside a provider card
    ModelPrev,
    ModelNext,
    ToggleModel,

    /// Open the selected entry's link in the system browser
    OpenLink,

    /// Mount or unmount the background renderer
    ToggleBackground,

    /// Clear the query, or quit if it is already empty
    Cancel,

    /// No operation
    #[default]
    None,
}

/// Trait for mapping key events to actions.
pub trait KeyMapper {
    /// Map a key event to an action.
    ///
    /// Returns [`Action::None`] if the key should not trigger any action.
    fn map_key(&self, key: KeyEvent) -> Action;
}

/// Default key mapper.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | printable, `Backspace`, `Delete`, `Left`, `Right`, `Home`, `End` | edit query |
/// | `Ctrl+u` | Clear query |
/// | `Tab` / `Shift+Tab` | Next / previous tab |
/// | `F1` `F2` `F3` | Select tab |
/// | `Up` `Down` `PageUp` `PageDown` | Move card selection |
/// | `Ctrl+n` / `Ctrl+p` | Move model cursor |
/// | `Enter` | Toggle model accordion |
/// | `Ctrl+o` | Open link |
/// | `Ctrl+b` | Toggle background |
/// | `Esc` | Cancel |
/// | `Ctrl+c` | Quit |
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultKeyMapper;

impl DefaultKeyMapper {
    pub fn new() -> Self {
        Self
    }
}

impl KeyMapper for DefaultKeyMapper {
    fn map_key(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                KeyCode::Char('u') => Action::Input(InputAction::Clear),
                KeyCode::Char('n') => Action::ModelNext,
                KeyCode::Char('p') => Action::ModelPrev,
                KeyCode::Char('o') => Action::OpenLink,
                KeyCode::Char('b') => Action::ToggleBackground,
                _ => Action::None,
            };
        }

        // Alt chords are left to the terminal
        if key.modifiers.contains(KeyModifiers::ALT) {
            return Action::None;
        }

        match key.code {
            KeyCode::Char(c) => Action::Input(InputAction::Char(c)),
            KeyCode::Backspace => Action::Input(InputAction::Backspace),
            KeyCode::Delete => Action::Input(InputAction::Delete),
            KeyCode::Left => Action::Input(InputAction::Left),
            KeyCode::Right => Action::Input(InputAction::Right),
            KeyCode::Home => Action::Input(InputAction::Home),
            KeyCode::End => Action::Input(InputAction::End),

            KeyCode::Tab => Action::NextTab,
            KeyCode::BackTab => Action::PrevTab,
            KeyCode::F(n @ 1..=3) => Action::SelectTab(usize::from(n - 1)),

            KeyCode::Up => Action::SelectPrev,
            KeyCode::Down => Action::SelectNext,
            KeyCode::PageUp => Action::PageUp,
            KeyCode::PageDown => Action::PageDown,

            KeyCode::Enter => Action::ToggleModel,
            KeyCode::Esc => Action::Cancel,

            _ => Action::None,
        }
    }
}

//! Applying user actions to the application state.
//!
//! [`dispatch`] is synchronous and never touches the terminal. Anything with
//! an outside effect (opening a browser, mounting the background, quitting)
//! is returned as an [`Effect`] for the runner to carry out.

use freetier_core::events::{Action, InputAction};

use super::state::AppState;
use crate::views::CategoryState;

/// Work left for the runner after an action has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open this link in the system browser
    OpenLink(String),
    /// Mount or unmount the background renderer
    ToggleBackground,
    Quit,
}

fn refresh(app: &AppState, category: &mut CategoryState) {
    category.refresh(app.active_tab(), app.query());
}

/// Apply `action` to `app` and `category`.
pub fn dispatch(app: &mut AppState, category: &mut CategoryState, action: Action) -> Effect {
    match action {
        Action::Quit => {
            app.request_quit();
            Effect::Quit
        }
        Action::Input(input) => {
            if app.search.apply(&input) {
                tracing::trace!(query = app.query(), "query changed");
                refresh(app, category);
            }
            Effect::None
        }
        Action::NextTab => {
            if app.tabs.next() {
                refresh(app, category);
            }
            Effect::None
        }
        Action::PrevTab => {
            if app.tabs.prev() {
                refresh(app, category);
            }
            Effect::None
        }
        Action::SelectTab(index) => {
            if app.tabs.select_index(index) {
                refresh(app, category);
            }
            Effect::None
        }
        Action::SelectNext => {
            category.select_next();
            Effect::None
        }
        Action::SelectPrev => {
            category.select_prev();
            Effect::None
        }
        Action::PageDown => {
            category.page_down();
            Effect::None
        }
        Action::PageUp => {
            category.page_up();
            Effect::None
        }
        Action::ModelNext => {
            category.model_next();
            Effect::None
        }
        Action::ModelPrev => {
            category.model_prev();
            Effect::None
        }
        Action::ToggleModel => {
            category.toggle_model();
            Effect::None
        }
        Action::OpenLink => match category.selected_entry() {
            Some(entry) => Effect::OpenLink(entry.link().to_string()),
            None => Effect::None,
        },
        Action::ToggleBackground => {
            app.background_enabled = !app.background_enabled;
            Effect::ToggleBackground
        }
        Action::Cancel => {
            if app.search.is_empty() {
                app.request_quit();
                Effect::Quit
            } else {
                dispatch(app, category, Action::Input(InputAction::Clear))
            }
        }
        Action::None => Effect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freetier_catalog::{CatalogKind, DEPLOYMENT_PROVIDERS, EntryRef};
    use pretty_assertions::assert_eq;

    fn setup() -> (AppState, CategoryState) {
        let app = AppState::new();
        let category = CategoryState::new(app.active_tab(), app.query());
        (app, category)
    }

    fn type_str(app: &mut AppState, category: &mut CategoryState, text: &str) {
        for c in text.chars() {
            dispatch(app, category, Action::Input(InputAction::Char(c)));
        }
    }

    #[test]
    fn test_typing_filters() {
        let (mut app, mut category) = setup();
        type_str(&mut app, &mut category, "deepseek");
        assert_eq!(app.query(), "deepseek");
        assert_eq!(category.query(), "deepseek");
        assert!(
            category
                .entries()
                .iter()
                .any(|e| e.name() == "OpenRouter")
        );

        type_str(&mut app, &mut category, "xyz123");
        assert!(category.is_empty());
    }

    #[test]
    fn test_tab_switch_preserves_query() {
        let (mut app, mut category) = setup();
        assert_eq!(app.active_tab(), CatalogKind::Providers);
        type_str(&mut app, &mut category, "cloud");

        dispatch(&mut app, &mut category, Action::SelectTab(2));

        assert_eq!(app.active_tab(), CatalogKind::Deployment);
        assert_eq!(app.query(), "cloud");
        assert_eq!(category.kind(), CatalogKind::Deployment);
        let expected: Vec<&str> = DEPLOYMENT_PROVIDERS
            .iter()
            .filter(|d| d.name.to_lowercase().contains("cloud"))
            .map(|d| d.name)
            .collect();
        let names: Vec<&str> = category.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, expected);
        assert!(
            category
                .entries()
                .iter()
                .all(|e| matches!(e, EntryRef::Deployment(_)))
        );
    }

    #[test]
    fn test_next_and_prev_tab_refilter() {
        let (mut app, mut category) = setup();
        dispatch(&mut app, &mut category, Action::NextTab);
        assert_eq!(category.kind(), CatalogKind::TrialCredits);
        dispatch(&mut app, &mut category, Action::PrevTab);
        dispatch(&mut app, &mut category, Action::PrevTab);
        assert_eq!(category.kind(), CatalogKind::Deployment);
    }

    #[test]
    fn test_query_edit_discards_accordions() {
        let (mut app, mut category) = setup();
        dispatch(&mut app, &mut category, Action::ToggleModel);
        assert_eq!(category.expanded_count(), 1);

        type_str(&mut app, &mut category, "o");
        assert_eq!(category.expanded_count(), 0);
    }

    #[test]
    fn test_tab_switch_discards_accordions() {
        let (mut app, mut category) = setup();
        dispatch(&mut app, &mut category, Action::ToggleModel);
        dispatch(&mut app, &mut category, Action::NextTab);
        dispatch(&mut app, &mut category, Action::SelectTab(0));
        assert_eq!(category.expanded_count(), 0);
    }

    #[test]
    fn test_cursor_moves_do_not_refilter() {
        let (mut app, mut category) = setup();
        dispatch(&mut app, &mut category, Action::ToggleModel);
        dispatch(
            &mut app,
            &mut category,
            Action::Input(InputAction::Left),
        );
        assert_eq!(category.expanded_count(), 1);
    }

    #[test]
    fn test_open_link_uses_selected_entry() {
        let (mut app, mut category) = setup();
        dispatch(&mut app, &mut category, Action::SelectNext);
        let expected = category.selected_entry().unwrap().link().to_string();
        assert_eq!(
            dispatch(&mut app, &mut category, Action::OpenLink),
            Effect::OpenLink(expected)
        );

        type_str(&mut app, &mut category, "xyz123");
        assert_eq!(
            dispatch(&mut app, &mut category, Action::OpenLink),
            Effect::None
        );
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let (mut app, mut category) = setup();
        type_str(&mut app, &mut category, "groq");
        assert_eq!(
            dispatch(&mut app, &mut category, Action::Cancel),
            Effect::None
        );
        assert_eq!(app.query(), "");
        assert!(!app.should_quit());
        assert_eq!(category.len(), freetier_catalog::PROVIDERS.len());

        assert_eq!(
            dispatch(&mut app, &mut category, Action::Cancel),
            Effect::Quit
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_toggle_background() {
        let (mut app, mut category) = setup();
        assert_eq!(
            dispatch(&mut app, &mut category, Action::ToggleBackground),
            Effect::ToggleBackground
        );
        assert!(!app.background_enabled);
    }
}

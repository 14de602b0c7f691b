//! The full screen: background, header, card grid and footer.

use freetier_core::RainField;
use freetier_core::style::VOID;
use freetier_tui_components::borders::BorderStyle;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{StatefulWidget, Widget};

use super::background::BackgroundView;
use super::category::{CategoryState, CategoryView};
use super::footer::{FOOTER_HEIGHT, Footer};
use super::header::{HEADER_HEIGHT, Header};
use crate::app::AppState;
use crate::config::UiConfig;

/// Screen composition. Renders into the [`CategoryState`] of the active tab.
pub struct MainView<'a> {
    app: &'a AppState,
    ui: &'a UiConfig,
    background: Option<&'a RainField>,
}

impl<'a> MainView<'a> {
    pub fn new(app: &'a AppState, ui: &'a UiConfig) -> Self {
        Self {
            app,
            ui,
            background: None,
        }
    }

    /// Draw this rain frame behind everything.
    pub fn background(mut self, field: Option<&'a RainField>) -> Self {
        self.background = field;
        self
    }

    /// Cards per row for a terminal `width` columns wide.
    pub fn columns_for(&self, width: u16) -> u16 {
        if width >= self.ui.two_columns_min_width {
            2
        } else {
            1
        }
    }
}

impl StatefulWidget for MainView<'_> {
    type State = CategoryState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        match self.background {
            Some(field) => BackgroundView::new(field).render(area, buf),
            None => buf.set_style(area, Style::default().bg(VOID)),
        }

        let border = BorderStyle::from_ascii(self.ui.ascii_borders);
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        Header::new(self.app, state.len())
            .border(border)
            .render(header, buf);

        let body = Rect::new(
            body.x + 1,
            body.y,
            body.width.saturating_sub(2),
            body.height,
        );
        CategoryView::new()
            .columns(self.columns_for(area.width))
            .border(border)
            .render(body, buf, state);

        Footer::new(self.app.status.as_ref()).render(footer, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Effect, dispatch};
    use crate::config::{BackgroundConfig, TuiConfig};
    use crate::views::background::MatrixBackground;
    use freetier_catalog::CatalogKind;
    use freetier_core::events::{Action, InputAction};

    fn screen(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &AppState, state: &mut CategoryState, ui: &UiConfig, w: u16, h: u16) -> Buffer {
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        MainView::new(app, ui).render(area, &mut buf, state);
        buf
    }

    #[test]
    fn test_renders_providers_first() {
        let app = AppState::new();
        let mut state = CategoryState::new(app.active_tab(), app.query());
        let text = screen(&draw(&app, &mut state, &UiConfig::default(), 80, 40));
        assert!(text.contains("Free Development Resources"));
        assert!(text.contains("OpenRouter"));
        assert!(text.contains("Tab Switch tab"));
    }

    #[test]
    fn test_deployment_tab_renders_deployment_catalog_with_same_query() {
        let mut app = AppState::new();
        let mut state = CategoryState::new(app.active_tab(), app.query());
        for c in "ver".chars() {
            dispatch(&mut app, &mut state, Action::Input(InputAction::Char(c)));
        }
        let effect = dispatch(&mut app, &mut state, Action::SelectTab(2));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.active_tab(), CatalogKind::Deployment);
        assert_eq!(app.query(), "ver");

        let text = screen(&draw(&app, &mut state, &UiConfig::default(), 80, 30));
        assert!(text.contains("Vercel"));
        assert!(text.contains("Features:"));
        assert!(text.contains("> ver"));
        assert!(!text.contains("Available Models:"));
    }

    #[test]
    fn test_column_count_follows_width() {
        let app = AppState::new();
        let ui = UiConfig::default();
        let view = MainView::new(&app, &ui);
        assert_eq!(view.columns_for(99), 1);
        assert_eq!(view.columns_for(100), 2);
    }

    #[test]
    fn test_status_line_shown() {
        let mut app = AppState::new();
        app.set_status(crate::app::StatusMessage::info("Opened https://groq.com"));
        let mut state = CategoryState::new(app.active_tab(), app.query());
        let text = screen(&draw(&app, &mut state, &UiConfig::default(), 80, 30));
        assert!(text.contains("Opened https://groq.com"));
    }

    #[test]
    fn test_background_glyphs_visible_outside_cards() {
        let app = AppState::new();
        let mut state = CategoryState::new(CatalogKind::Providers, "xyz123");
        let config = TuiConfig::default();
        let mut bg = MatrixBackground::with_seed(80, 30, &BackgroundConfig::default(), 5);
        for _ in 0..30 {
            bg.tick();
        }

        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        MainView::new(&app, &config.ui)
            .background(Some(bg.field()))
            .render(area, &mut buf, &mut state);

        // The empty grid leaves the body rows mostly untouched.
        let y = HEADER_HEIGHT + 10;
        let lit = (0..80u16)
            .filter(|x| bg.field().cell(*x, y).is_some())
            .filter(|x| buf[(*x, y)].symbol() != " ")
            .count();
        assert!(lit > 0);
    }
}

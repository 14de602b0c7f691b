//! Page header: title, subtitle, search box and tab bar.

use freetier_catalog::CatalogKind;
use freetier_core::style::FreetierStyle;
use freetier_tui_components::borders::{BorderStyle, RoundedBorder};
use freetier_tui_components::input::SearchInput;
use freetier_tui_components::page_layout::{Badge, Navbar};
use freetier_tui_components::text::{truncate_to_width, wrap_to_width};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Widget;

use crate::app::AppState;

pub const TITLE: &str = "Free Development Resources";

pub const SUBTITLE: &str = "Explore a curated list of free LLM providers and hosting platforms \
for your next project. All services offer generous free tiers to help you get started.";

/// Rows taken by the header.
pub const HEADER_HEIGHT: u16 = 7;

/// Header widget.
pub struct Header<'a> {
    app: &'a AppState,
    matches: usize,
    border: BorderStyle,
}

impl<'a> Header<'a> {
    /// `matches` is the number of entries visible on the active tab.
    pub fn new(app: &'a AppState, matches: usize) -> Self {
        Self {
            app,
            matches,
            border: BorderStyle::Rounded,
        }
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    fn navbar(&self) -> Navbar {
        let active = self.app.active_tab();
        CatalogKind::ALL
            .iter()
            .fold(Navbar::new(), |bar, kind| {
                let key = format!("F{}", kind.index() + 1);
                bar.keyed_item(key, kind.label(), *kind == active)
            })
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < HEADER_HEIGHT || area.width < 10 {
            return;
        }
        let width = area.width.saturating_sub(2) as usize;
        let x = area.x + 1;

        buf.set_stringn(
            x,
            area.y,
            truncate_to_width(TITLE, width),
            width,
            FreetierStyle::title(),
        );
        for (i, line) in wrap_to_width(SUBTITLE, width).into_iter().take(2).enumerate() {
            buf.set_stringn(x, area.y + 1 + i as u16, line, width, FreetierStyle::dim());
        }

        let search_area = Rect::new(area.x, area.y + 3, area.width, 3);
        let frame = RoundedBorder::new()
            .title("Search")
            .focused(true)
            .style(self.border);
        let input_area = frame.inner(search_area);
        frame.render(search_area, buf);
        SearchInput::new(&self.app.search).render(input_area, buf);

        let mut tabs = self.navbar().to_line();
        tabs.spans.push(Span::raw("  "));
        let noun = if self.matches == 1 { "result" } else { "results" };
        tabs.spans
            .push(Badge::new(format!("{} {noun}", self.matches)).to_span());
        buf.set_line(area.x, area.y + 6, &tabs, area.width);
    }
}

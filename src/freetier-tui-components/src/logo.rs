//! Placeholder logo tile.
//!
//! Character-cell surfaces can't show the remote logo image, so each card
//! draws a small colored tile with the entry's initial instead.

use freetier_core::style::{ACCENT, VOID};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

/// Width of the tile in cells.
pub const LOGO_WIDTH: u16 = 3;

/// A one-line tile showing a single character, e.g. ` O `.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoBadge {
    label: char,
    style: Style,
}

impl LogoBadge {
    pub fn new(label: char) -> Self {
        Self {
            label,
            style: Style::default()
                .fg(VOID)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn label(&self) -> char {
        self.label
    }
}

impl Widget for LogoBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < LOGO_WIDTH {
            return;
        }
        let tile = format!(" {} ", self.label);
        buf.set_stringn(area.x, area.y, tile, LOGO_WIDTH as usize, self.style);
    }
}

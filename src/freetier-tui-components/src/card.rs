//! Card container component.
//!
//! A bordered, filled container with an optional title. Content is drawn by
//! the caller into [`Card::inner`].

use crate::borders::{BorderStyle, RoundedBorder};
use freetier_core::style::FreetierStyle;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// A bordered card container.
pub struct Card<'a> {
    title: Option<&'a str>,
    border_style: BorderStyle,
    focused: bool,
    filled: bool,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self {
            title: None,
            border_style: BorderStyle::Rounded,
            focused: false,
            filled: true,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set whether the card is the selected one.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn border(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Whether to paint the card background. Unfilled cards let the
    /// background animation show through.
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Calculate the inner content area.
    pub fn inner(&self, area: Rect) -> Rect {
        RoundedBorder::new().style(self.border_style).inner(area)
    }
}

impl Default for Card<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 5 {
            return;
        }

        if self.filled {
            buf.set_style(area, FreetierStyle::card_fill(self.focused));
        }

        let border = RoundedBorder::new()
            .focused(self.focused)
            .style(self.border_style);

        match self.title {
            Some(title) => border.title(title).render(area, buf),
            None => border.render(area, buf),
        }
    }
}

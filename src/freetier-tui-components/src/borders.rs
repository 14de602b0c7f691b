//! Card and search box borders.
//!
//! Rounded box-drawing by default, plain ASCII when `ui.ascii_borders` is set.

use freetier_core::style::{ACCENT, BORDER, BORDER_FOCUS};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::border::Set as BorderSet;
use ratatui::widgets::{Block, Borders, Widget};

/// Rounded border character set used throughout the TUI.
pub const ROUNDED_BORDER: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal_top: "─",
    horizontal_bottom: "─",
    vertical_left: "│",
    vertical_right: "│",
};

/// ASCII-only border for terminals without box drawing glyphs.
pub const ASCII_BORDER: BorderSet = BorderSet {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal_top: "-",
    horizontal_bottom: "-",
    vertical_left: "|",
    vertical_right: "|",
};

/// Border style variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Rounded corners
    #[default]
    Rounded,
    /// ASCII-only for maximum terminal compatibility
    Ascii,
}

impl BorderStyle {
    /// Pick the style from the `ascii_borders` setting.
    pub fn from_ascii(ascii: bool) -> Self {
        if ascii {
            BorderStyle::Ascii
        } else {
            BorderStyle::Rounded
        }
    }

    pub fn border_set(&self) -> BorderSet<'static> {
        match self {
            BorderStyle::Rounded => ROUNDED_BORDER,
            BorderStyle::Ascii => ASCII_BORDER,
        }
    }
}

/// A pre-configured bordered block.
#[derive(Clone)]
pub struct RoundedBorder<'a> {
    title: Option<&'a str>,
    focused: bool,
    border_style: BorderStyle,
}

impl<'a> RoundedBorder<'a> {
    pub fn new() -> Self {
        Self {
            title: None,
            focused: false,
            border_style: BorderStyle::Rounded,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    /// Create a ratatui Block from this configuration.
    pub fn to_block(&self) -> Block<'a> {
        let border_color = if self.focused { BORDER_FOCUS } else { BORDER };
        let title_color = if self.focused { ACCENT } else { BORDER_FOCUS };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(self.border_style.border_set())
            .border_style(Style::default().fg(border_color));

        if let Some(title) = self.title {
            block = block
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(title_color));
        }

        block
    }

    /// Calculate the inner area after accounting for borders.
    pub fn inner(&self, area: Rect) -> Rect {
        self.to_block().inner(area)
    }
}

impl Default for RoundedBorder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for RoundedBorder<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_block().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii() {
        assert_eq!(BorderStyle::from_ascii(true), BorderStyle::Ascii);
        assert_eq!(BorderStyle::from_ascii(false), BorderStyle::Rounded);
    }

    #[test]
    fn test_rounded_border_builder() {
        let border = RoundedBorder::new()
            .title("Test")
            .focused(true)
            .style(BorderStyle::Ascii);

        assert_eq!(border.title, Some("Test"));
        assert!(border.focused);
        assert_eq!(border.border_style, BorderStyle::Ascii);
    }

    #[test]
    fn test_rounded_border_inner() {
        let border = RoundedBorder::new();
        let inner = border.inner(Rect::new(0, 0, 10, 5));
        assert_eq!(inner, Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn test_ascii_corners_render() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        RoundedBorder::new()
            .style(BorderStyle::Ascii)
            .render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "+");
        assert_eq!(buf[(5, 2)].symbol(), "+");
        assert_eq!(buf[(2, 0)].symbol(), "-");
    }
}

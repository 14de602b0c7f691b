//! Footer shortcut hints.

use freetier_core::style::{ACCENT, SURFACE_0, TEXT_DIM, TEXT_MUTED};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

/// A single key hint (key + description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The key or key combination
    pub key: String,
    /// What the key does
    pub description: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }

    /// Display width: key, a space, description.
    fn width(&self) -> usize {
        self.key.width() + 1 + self.description.width()
    }
}

impl<'a, 'b> From<(&'a str, &'b str)> for KeyHint {
    fn from((key, desc): (&'a str, &'b str)) -> Self {
        Self::new(key, desc)
    }
}

/// A horizontal bar of key hints.
///
/// Renders as `Tab Next tab · Ctrl+O Open · Esc Quit`. Hints that do not fit
/// are dropped from the end.
pub struct KeyHintsBar {
    hints: Vec<KeyHint>,
}

const SEPARATOR: &str = " · ";

impl KeyHintsBar {
    pub fn new() -> Self {
        Self { hints: Vec::new() }
    }

    /// Create from a slice of (key, description) tuples.
    pub fn from_tuples(hints: &[(&str, &str)]) -> Self {
        Self::new().hints(hints.iter().map(|&h| h.into()))
    }

    pub fn hint(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.hints.push(KeyHint::new(key, description));
        self
    }

    pub fn hints(mut self, hints: impl IntoIterator<Item = KeyHint>) -> Self {
        self.hints.extend(hints);
        self
    }

    /// Leading hints that fit within `max_width`.
    fn hints_that_fit(&self, max_width: usize) -> &[KeyHint] {
        let sep = SEPARATOR.width();
        let mut used = 0;
        let mut count = 0;
        for hint in &self.hints {
            let needed = if count == 0 {
                hint.width()
            } else {
                sep + hint.width()
            };
            if used + needed > max_width {
                break;
            }
            used += needed;
            count += 1;
        }
        &self.hints[..count]
    }
}

impl Default for KeyHintsBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for KeyHintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 10 {
            return;
        }

        let line = Rect::new(area.x, area.y, area.width, 1);
        buf.set_style(line, Style::default().bg(SURFACE_0));

        let key_style = Style::default().fg(ACCENT).bg(SURFACE_0);
        let desc_style = Style::default().fg(TEXT_DIM).bg(SURFACE_0);
        let sep_style = Style::default().fg(TEXT_MUTED).bg(SURFACE_0);

        let mut x = area.x + 1;
        let right = area.right();
        let fits = self.hints_that_fit(area.width.saturating_sub(2) as usize);

        for (i, hint) in fits.iter().enumerate() {
            if i > 0 {
                x = buf.set_stringn(x, area.y, SEPARATOR, (right - x) as usize, sep_style).0;
            }
            x = buf.set_stringn(x, area.y, &hint.key, (right - x) as usize, key_style).0;
            x = buf.set_stringn(x, area.y, " ", (right - x) as usize, desc_style).0;
            x = buf
                .set_stringn(x, area.y, &hint.description, (right - x) as usize, desc_style)
                .0;
        }
    }
}

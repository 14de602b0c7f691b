//! Header chrome: the tab strip and the result count badge.

use freetier_core::style::{ACCENT, FreetierStyle, TEXT_MUTED, VOID};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

/// Inverted pill, e.g. ` 12 results `.
#[derive(Debug, Clone)]
pub struct Badge {
    text: String,
}

impl Badge {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn to_span(&self) -> Span<'static> {
        Span::styled(
            format!(" {} ", self.text),
            Style::default().fg(VOID).bg(ACCENT),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Tab {
    key: Option<String>,
    label: String,
    active: bool,
}

/// One row of tabs, each optionally prefixed by its shortcut key.
///
/// ```ignore
/// let strip = Navbar::new()
///     .item("LLM Providers", true)
///     .keyed_item("F2", "Trial Credits", false);
/// buf.set_line(x, y, &strip.to_line(), width);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Navbar {
    tabs: Vec<Tab>,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(self, label: impl Into<String>, active: bool) -> Self {
        self.push(None, label.into(), active)
    }

    pub fn keyed_item(self, key: impl Into<String>, label: impl Into<String>, active: bool) -> Self {
        self.push(Some(key.into()), label.into(), active)
    }

    fn push(mut self, key: Option<String>, label: String, active: bool) -> Self {
        self.tabs.push(Tab { key, label, active });
        self
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn to_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, tab) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if let Some(key) = &tab.key {
                spans.push(Span::styled(
                    format!("{key} "),
                    Style::default().fg(TEXT_MUTED),
                ));
            }
            let style = if tab.active {
                FreetierStyle::active_tab()
            } else {
                FreetierStyle::inactive_tab()
            };
            spans.push(Span::styled(format!(" {} ", tab.label), style));
        }
        Line::from(spans)
    }
}

impl Widget for Navbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height > 0 {
            buf.set_line(area.x, area.y, &self.to_line(), area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_span() {
        let span = Badge::new("10").to_span();
        assert_eq!(span.content, " 10 ");
        assert_eq!(span.style.bg, Some(ACCENT));
    }

    #[test]
    fn test_active_tab_style() {
        let line = Navbar::new()
            .item("Providers", false)
            .item("Deployment", true)
            .to_line();
        let style_of = |label: &str| {
            line.spans
                .iter()
                .find(|s| s.content.contains(label))
                .map(|s| s.style)
        };
        assert_eq!(style_of("Deployment"), Some(FreetierStyle::active_tab()));
        assert_eq!(style_of("Providers"), Some(FreetierStyle::inactive_tab()));
    }

    #[test]
    fn test_keyed_items_render() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        Navbar::new()
            .keyed_item("F1", "A", true)
            .keyed_item("F2", "B", false)
            .render(area, &mut buf);
        let line: String = (0..30).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(line.trim_end(), " F1  A  F2  B");
    }
}

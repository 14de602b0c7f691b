//! Footer: status line and key hints.

use freetier_core::style::FreetierStyle;
use freetier_tui_components::key_hints::KeyHintsBar;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::app::{StatusKind, StatusMessage};

pub const FOOTER_HEIGHT: u16 = 2;

const HINTS: &[(&str, &str)] = &[
    ("Tab", "Switch tab"),
    ("↑↓", "Select"),
    ("Enter", "Expand model"),
    ("Ctrl+N/P", "Model"),
    ("Ctrl+O", "Open link"),
    ("Ctrl+B", "Background"),
    ("Esc", "Clear/Quit"),
];

pub struct Footer<'a> {
    status: Option<&'a StatusMessage>,
}

impl<'a> Footer<'a> {
    pub fn new(status: Option<&'a StatusMessage>) -> Self {
        Self { status }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < FOOTER_HEIGHT {
            return;
        }

        if let Some(status) = self.status {
            let style = match status.kind {
                StatusKind::Info => FreetierStyle::success(),
                StatusKind::Error => FreetierStyle::error(),
            };
            buf.set_stringn(
                area.x + 1,
                area.y,
                &status.text,
                area.width.saturating_sub(2) as usize,
                style,
            );
        }

        KeyHintsBar::from_tuples(HINTS).render(
            Rect::new(area.x, area.y + 1, area.width, 1),
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_hints_without_status() {
        let area = Rect::new(0, 0, 60, FOOTER_HEIGHT);
        let mut buf = Buffer::empty(area);
        Footer::new(None).render(area, &mut buf);
        assert_eq!(row(&buf, 0).trim(), "");
        assert!(row(&buf, 1).contains("Tab Switch tab"));
    }

    #[test]
    fn test_error_status_styled() {
        let status = StatusMessage::error("Could not open link");
        let area = Rect::new(0, 0, 60, FOOTER_HEIGHT);
        let mut buf = Buffer::empty(area);
        Footer::new(Some(&status)).render(area, &mut buf);
        assert!(row(&buf, 0).contains("Could not open link"));
        assert_eq!(buf[(1, 0)].fg, FreetierStyle::error().fg.unwrap());
    }
}

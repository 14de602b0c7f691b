//! Search input component.
//!
//! Single-line text input with a grapheme-aware cursor.

use freetier_core::events::InputAction;
use freetier_core::style::{ACCENT, SURFACE_1, TEXT, TEXT_MUTED};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// State for a text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Current text value
    pub value: String,
    /// Cursor position (in graphemes)
    pub cursor: usize,
    /// Placeholder text
    pub placeholder: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value, cursor at the end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        let v = value.into();
        self.cursor = v.graphemes(true).count();
        self.value = v;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Apply an edit. Returns true if the value changed.
    pub fn apply(&mut self, action: &InputAction) -> bool {
        let before = self.value.len();
        match action {
            InputAction::Char(c) => {
                self.insert(*c);
                true
            }
            InputAction::Paste(text) => {
                self.insert_str(text);
                !text.is_empty()
            }
            InputAction::Backspace => {
                self.backspace();
                self.value.len() != before
            }
            InputAction::Delete => {
                self.delete();
                self.value.len() != before
            }
            InputAction::Clear => {
                self.clear();
                before != 0
            }
            InputAction::Left => {
                self.move_left();
                false
            }
            InputAction::Right => {
                self.move_right();
                false
            }
            InputAction::Home => {
                self.move_home();
                false
            }
            InputAction::End => {
                self.move_end();
                false
            }
        }
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        // A combining mark joins the previous grapheme instead of adding one.
        self.cursor = self.value[..byte_offset + c.len_utf8()]
            .graphemes(true)
            .count();
    }

    /// Insert text at cursor (for paste).
    pub fn insert_str(&mut self, text: &str) {
        let byte_offset = self.grapheme_to_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, text);
        self.cursor = self.value[..byte_offset + text.len()].graphemes(true).count();
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let new_cursor = self.cursor - 1;
            let start_byte = self.grapheme_to_byte_offset(new_cursor);
            let end_byte = self.grapheme_to_byte_offset(self.cursor);
            self.value.replace_range(start_byte..end_byte, "");
            self.cursor = new_cursor;
        }
    }

    /// Delete the grapheme at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let start_byte = self.grapheme_to_byte_offset(self.cursor);
            let end_byte = self.grapheme_to_byte_offset(self.cursor + 1);
            self.value.replace_range(start_byte..end_byte, "");
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Length in graphemes.
    pub fn len(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Display width of the text left of the cursor.
    pub fn cursor_column(&self) -> usize {
        let byte = self.grapheme_to_byte_offset(self.cursor);
        self.value[..byte].width()
    }

    fn grapheme_to_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.value.len())
    }
}

/// The search box line: a prompt, then the query or its placeholder.
pub struct SearchInput<'a> {
    state: &'a InputState,
    focused: bool,
    prompt: &'a str,
}

impl<'a> SearchInput<'a> {
    pub fn new(state: &'a InputState) -> Self {
        Self {
            state,
            focused: true,
            prompt: "> ",
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = prompt;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 5 {
            return;
        }

        let bg = Style::default().bg(SURFACE_1);
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), bg);

        let (x, _) = buf.set_stringn(
            area.x,
            area.y,
            self.prompt,
            area.width as usize,
            Style::default().fg(ACCENT).bg(SURFACE_1),
        );

        let remaining = area.right().saturating_sub(x) as usize;
        if self.state.is_empty() {
            let placeholder = self.state.placeholder.as_deref().unwrap_or("");
            buf.set_stringn(
                x,
                area.y,
                placeholder,
                remaining,
                Style::default().fg(TEXT_MUTED).bg(SURFACE_1),
            );
        } else {
            buf.set_stringn(
                x,
                area.y,
                &self.state.value,
                remaining,
                Style::default().fg(TEXT).bg(SURFACE_1),
            );
        }

        if self.focused {
            let cursor_x = x.saturating_add(self.state.cursor_column() as u16);
            if cursor_x < area.right()
                && let Some(cell) = buf.cell_mut((cursor_x, area.y))
            {
                cell.set_bg(ACCENT).set_fg(SURFACE_1);
            }
        }
    }
}

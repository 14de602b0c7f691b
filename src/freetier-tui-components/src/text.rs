//! Width-aware text helpers.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncate `text` to at most `max_width` display columns, ending in `…` when
/// anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w + 1 > max_width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `max_width` display columns.
///
/// Words longer than a line are truncated. Always returns at least one line.
pub fn wrap_to_width(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word = truncate_to_width(word, max_width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("Groq", 10), "Groq");
        assert_eq!(truncate_to_width("Groq", 4), "Groq");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("OpenRouter", 5), "Open…");
        assert_eq!(truncate_to_width("OpenRouter", 1), "…");
        assert_eq!(truncate_to_width("OpenRouter", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(
            wrap_to_width("20 requests/minute 200 requests/day", 18),
            vec!["20 requests/minute", "200 requests/day"]
        );
        assert_eq!(wrap_to_width("", 10), vec![String::new()]);
        assert_eq!(wrap_to_width("abcdefghij", 4), vec!["abc…"]);
    }
}

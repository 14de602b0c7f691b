//! Freetier theme: green glyphs on a black void.
//!
//! All colors are constants. [`FreetierStyle`] bundles the handful of styles
//! the views reuse so they don't rebuild them ad hoc.

use ratatui::style::{Color, Modifier, Style};

// ============================================================
// RAIN PALETTE
// ============================================================

/// Shades a rain glyph is drawn in, picked uniformly per glyph.
pub const MATRIX_GREENS: [Color; 5] = [
    Color::Rgb(0, 255, 0),  // #00FF00 bright
    Color::Rgb(0, 255, 0),  // #0F0 classic
    Color::Rgb(0, 51, 0),   // #003300 dark
    Color::Rgb(0, 204, 0),  // #00CC00 medium
    Color::Rgb(0, 255, 51), // #00FF33 light
];

/// Highlight color for the occasional bright glyph.
pub const MATRIX_WHITE: Color = Color::Rgb(255, 255, 255);

// ============================================================
// BACKGROUND COLORS
// ============================================================

/// Main background
pub const VOID: Color = Color::Rgb(0, 0, 0);

/// Card fill
pub const SURFACE_0: Color = Color::Rgb(10, 14, 12);

/// Selected card fill
pub const SURFACE_1: Color = Color::Rgb(18, 28, 22);

// ============================================================
// TEXT COLORS
// ============================================================

pub const TEXT: Color = Color::Rgb(236, 253, 245);

pub const TEXT_DIM: Color = Color::Rgb(156, 186, 168);

/// Very dim text for hints and empty states
pub const TEXT_MUTED: Color = Color::Rgb(90, 120, 100);

// ============================================================
// ACCENTS
// ============================================================

/// Emerald accent used for titles, badges and the active tab
pub const ACCENT: Color = Color::Rgb(52, 211, 153); // #34D399

pub const SUCCESS: Color = Color::Rgb(0, 245, 160);

pub const WARNING: Color = Color::Rgb(255, 200, 87);

pub const ERROR: Color = Color::Rgb(255, 107, 107);

/// Unselected card border
pub const BORDER: Color = Color::Rgb(22, 78, 52);

/// Selected card border
pub const BORDER_FOCUS: Color = Color::Rgb(0, 255, 120);

/// Reusable styles for the Freetier views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreetierStyle;

impl FreetierStyle {
    pub fn text() -> Style {
        Style::default().fg(TEXT)
    }

    pub fn dim() -> Style {
        Style::default().fg(TEXT_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(TEXT_MUTED)
    }

    /// Page and card titles.
    pub fn title() -> Style {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    /// Card fill, lighter when selected.
    pub fn card_fill(selected: bool) -> Style {
        Style::default().bg(if selected { SURFACE_1 } else { SURFACE_0 })
    }

    pub fn active_tab() -> Style {
        Style::default()
            .fg(VOID)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn inactive_tab() -> Style {
        Style::default().fg(TEXT_DIM)
    }

    /// Status line after a successful link open.
    pub fn success() -> Style {
        Style::default().fg(SUCCESS)
    }

    /// Status line after a failed link open.
    pub fn error() -> Style {
        Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default().fg(WARNING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_green() {
        for color in MATRIX_GREENS {
            match color {
                Color::Rgb(r, g, b) => {
                    assert_eq!(r, 0);
                    assert!(g > b);
                }
                other => panic!("expected RGB, got {other:?}"),
            }
        }
    }
}

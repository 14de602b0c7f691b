//! Digital rain field.
//!
//! One drop per terminal column. Each frame every lit cell fades, then every
//! column draws a random glyph at its drop row and the drop moves down one row.
//! A drop that has left the screen returns to the top with a small chance per
//! frame, which is what staggers the columns.

use rand::Rng;
use ratatui::style::Color;

use super::easing::scale_color;
use crate::style::{MATRIX_GREENS, MATRIX_WHITE};

/// Glyph set: binary digits plus half-width katakana (all one cell wide).
pub const GLYPHS: &[char] = &[
    '0', '1', 'ｱ', 'ｲ', 'ｳ', 'ｴ', 'ｵ', 'ｶ', 'ｷ', 'ｸ', 'ｹ', 'ｺ', 'ｻ', 'ｼ', 'ｽ', 'ｾ', 'ｿ', 'ﾀ',
    'ﾁ', 'ﾂ', 'ﾃ', 'ﾄ', 'ﾅ', 'ﾆ', 'ﾇ', 'ﾈ', 'ﾉ', 'ﾊ', 'ﾋ', 'ﾌ', 'ﾍ', 'ﾎ', 'ﾏ', 'ﾐ', 'ﾑ', 'ﾒ',
    'ﾓ', 'ﾔ', 'ﾕ', 'ﾖ', 'ﾗ', 'ﾘ', 'ﾙ', 'ﾚ', 'ﾛ', 'ﾜ', 'ｦ', 'ﾝ',
];

/// Cells dimmer than this are cleared.
const MIN_INTENSITY: f32 = 0.03;

/// Tunables for the rain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainConfig {
    /// Chance a freshly drawn glyph is white instead of green
    pub highlight_chance: f64,
    /// Per-frame chance an off-screen drop returns to the top
    pub reset_chance: f64,
    /// Intensity kept by each cell per frame
    pub fade: f32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            highlight_chance: 0.05,
            reset_chance: 0.02,
            fade: 0.95,
        }
    }
}

impl RainConfig {
    /// Clamp every field into its valid range.
    pub fn sanitized(self) -> Self {
        let unit = |p: f64| if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            highlight_chance: unit(self.highlight_chance),
            reset_chance: unit(self.reset_chance),
            fade: if self.fade.is_finite() {
                self.fade.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }
}

/// A lit cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainCell {
    pub glyph: char,
    /// Color the glyph was drawn in
    pub color: Color,
    /// 1.0 when drawn, decays every frame
    pub intensity: f32,
}

impl RainCell {
    /// The drawn color dimmed by the cell's remaining intensity.
    pub fn display_color(&self) -> Color {
        scale_color(self.color, self.intensity)
    }
}

/// The rain surface for a `width` x `height` viewport.
#[derive(Debug, Clone)]
pub struct RainField {
    width: u16,
    height: u16,
    cells: Vec<Option<RainCell>>,
    drops: Vec<u16>,
    config: RainConfig,
}

impl RainField {
    /// Build a field with one drop per column at a random row.
    pub fn new<R: Rng>(width: u16, height: u16, config: RainConfig, rng: &mut R) -> Self {
        let drops = (0..width)
            .map(|_| {
                if height == 0 {
                    0
                } else {
                    rng.random_range(0..height)
                }
            })
            .collect();

        Self {
            width,
            height,
            cells: vec![None; usize::from(width) * usize::from(height)],
            drops,
            config: config.sanitized(),
        }
    }

    /// Rebuild the surface and drops for a new viewport. Nothing carries over.
    pub fn resize<R: Rng>(&mut self, width: u16, height: u16, rng: &mut R) {
        *self = Self::new(width, height, self.config, rng);
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn config(&self) -> RainConfig {
        self.config
    }

    /// Current drop row of every column. Rows at or past `height` are off-screen.
    pub fn drops(&self) -> &[u16] {
        &self.drops
    }

    /// The lit cell at (`x`, `y`), if any.
    pub fn cell(&self, x: u16, y: u16) -> Option<&RainCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)].as_ref()
    }

    /// Number of lit cells.
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Advance one frame.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.fade();

        for x in 0..self.width {
            let col = usize::from(x);
            let row = self.drops[col];

            let glyph = GLYPHS[rng.random_range(0..GLYPHS.len())];
            let mut color = MATRIX_GREENS[rng.random_range(0..MATRIX_GREENS.len())];
            if rng.random_bool(self.config.highlight_chance) {
                color = MATRIX_WHITE;
            }

            if row < self.height {
                let idx = self.index(x, row);
                self.cells[idx] = Some(RainCell {
                    glyph,
                    color,
                    intensity: 1.0,
                });
            }

            self.drops[col] = if row >= self.height && rng.random_bool(self.config.reset_chance) {
                0
            } else {
                row.saturating_add(1).min(self.height)
            };
        }
    }

    fn fade(&mut self) {
        let factor = self.config.fade;
        for slot in &mut self.cells {
            if let Some(cell) = slot {
                cell.intensity *= factor;
                if cell.intensity < MIN_INTENSITY {
                    *slot = None;
                }
            }
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        usize::from(y) * usize::from(self.width) + usize::from(x)
    }
}

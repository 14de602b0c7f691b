//! Digital rain background.
//!
//! [`MatrixBackground`] owns the rain surface and its repaint timer. Mounting
//! starts the timer, unmounting cancels it; a resize throws the surface away
//! and builds a new one. [`BackgroundView`] paints the current frame.

use std::time::Duration;

use freetier_core::animation::interval_for_fps;
use freetier_core::style::VOID;
use freetier_core::{RainConfig, RainField, RepaintTimer};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use tokio::sync::mpsc;

use crate::config::BackgroundConfig;

pub struct MatrixBackground {
    field: RainField,
    timer: Option<RepaintTimer>,
    period: Duration,
    rng: StdRng,
}

impl MatrixBackground {
    /// Build a background for a `width` x `height` viewport.
    pub fn new(width: u16, height: u16, config: &BackgroundConfig) -> Self {
        Self::with_rng(width, height, config, StdRng::from_os_rng())
    }

    /// Like [`MatrixBackground::new`] with a fixed seed.
    pub fn with_seed(width: u16, height: u16, config: &BackgroundConfig, seed: u64) -> Self {
        Self::with_rng(width, height, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: u16, height: u16, config: &BackgroundConfig, mut rng: StdRng) -> Self {
        let field = RainField::new(width, height, config.rain(), &mut rng);
        Self {
            field,
            timer: None,
            period: interval_for_fps(config.fps()),
            rng,
        }
    }

    pub fn field(&self) -> &RainField {
        &self.field
    }

    pub fn rain_config(&self) -> RainConfig {
        self.field.config()
    }

    /// Time between repaint ticks.
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.as_ref().is_some_and(RepaintTimer::is_running)
    }

    /// Start the repaint timer, sending frame numbers into `tx`.
    ///
    /// Must be called from within a tokio runtime. Mounting twice keeps the
    /// running timer.
    pub fn mount(&mut self, tx: mpsc::Sender<u64>) {
        if self.is_mounted() {
            return;
        }
        self.timer = Some(RepaintTimer::start(self.period, tx));
        tracing::debug!(
            width = self.field.width(),
            height = self.field.height(),
            "background mounted"
        );
    }

    /// Cancel the repaint timer. The last frame is kept but no longer drawn.
    pub fn unmount(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.stop();
            tracing::debug!("background unmounted");
        }
    }

    /// Rebuild the surface for a new viewport size.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.field.width() && height == self.field.height() {
            return;
        }
        self.field.resize(width, height, &mut self.rng);
        tracing::debug!(width, height, "background resized");
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.field.step(&mut self.rng);
    }
}

impl Drop for MatrixBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Paints a [`RainField`] over black.
pub struct BackgroundView<'a> {
    field: &'a RainField,
}

impl<'a> BackgroundView<'a> {
    pub fn new(field: &'a RainField) -> Self {
        Self { field }
    }
}

impl Widget for BackgroundView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(VOID));

        let width = area.width.min(self.field.width());
        let height = area.height.min(self.field.height());
        for y in 0..height {
            for x in 0..width {
                if let Some(rain) = self.field.cell(x, y)
                    && let Some(cell) = buf.cell_mut((area.x + x, area.y + y))
                {
                    cell.set_char(rain.glyph).set_fg(rain.display_color());
                }
            }
        }
    }
}

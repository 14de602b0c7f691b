//! Animation primitives for the decorative background.
//!
//! The [`RainField`] is a pure model advanced one frame per [`RainField::step`];
//! the [`RepaintTimer`] is the periodic task that says when to step it.

mod easing;
mod rain;
mod repaint_timer;

pub use easing::{interpolate_color, scale_color};
pub use rain::{GLYPHS, RainCell, RainConfig, RainField};
pub use repaint_timer::{DEFAULT_REPAINT_INTERVAL, RepaintTimer, interval_for_fps};

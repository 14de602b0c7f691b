//! # Freetier Core
//!
//! Terminal engine pieces shared by the Freetier TUI.
//!
//! ## Core Components
//!
//! - **Frame Engine**: pumps crossterm input into an mpsc channel as
//!   [`EngineEvent`]s, stopping when the shared running flag is cleared.
//! - **Events**: [`Action`]s and the [`KeyMapper`] trait with the default
//!   Freetier bindings.
//! - **Style**: the green-on-black Freetier palette.
//! - **Animation**: the digital rain field and the [`RepaintTimer`] that
//!   drives it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     freetier-tui                       │
//! │   AppState ── CategoryView ── MatrixBackground         │
//! └──────┬──────────────────────────────┬──────────────────┘
//!        │ EngineEvent                  │ repaint ticks
//! ┌──────▼──────────┐         ┌─────────▼─────────┐
//! │  FrameEngine    │         │   RepaintTimer    │
//! │ (input, resize) │         │ (interval task)   │
//! └──────┬──────────┘         └─────────┬─────────┘
//!        │                              │
//! ┌──────▼──────────────────────────────▼──────────────────┐
//! │                 Ratatui + Crossterm                    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod animation;
pub mod events;
pub mod frame_engine;
pub mod style;

pub use animation::{
    DEFAULT_REPAINT_INTERVAL, RainCell, RainConfig, RainField, RepaintTimer, interpolate_color,
    scale_color,
};
pub use events::{Action, DefaultKeyMapper, InputAction, KeyMapper};
pub use frame_engine::{
    DEFAULT_CHANNEL_BUFFER, EngineEvent, FrameEngine, create_event_channel,
    create_event_channel_with_capacity,
};
pub use style::{
    ACCENT, BORDER, BORDER_FOCUS, ERROR, FreetierStyle, MATRIX_GREENS, MATRIX_WHITE, SUCCESS,
    SURFACE_0, SURFACE_1, TEXT, TEXT_DIM, TEXT_MUTED, VOID, WARNING,
};

/// Default background frame rate.
pub const DEFAULT_FPS: u32 = 30;

//! # Freetier TUI Components
//!
//! Reusable widgets the Freetier views are built from. Every component takes
//! its colors from `freetier-core`'s style module so the views never pick
//! colors of their own.
//!
//! ## Component Categories
//!
//! ### Input
//! - [`SearchInput`](input::SearchInput) - single-line query box over an [`InputState`](input::InputState)
//!
//! ### Display
//! - [`Card`](card::Card) - bordered container with title and fill
//! - [`LogoBadge`](logo::LogoBadge) - placeholder logo tile
//! - [`Badge`](page_layout::Badge) and [`Navbar`](page_layout::Navbar) - tabs and counters
//! - [`KeyHintsBar`](key_hints::KeyHintsBar) - footer shortcuts
//!
//! ### Utilities
//! - [`truncate_to_width`](text::truncate_to_width) and [`wrap_to_width`](text::wrap_to_width)

pub mod borders;
pub mod card;
pub mod input;
pub mod key_hints;
pub mod logo;
pub mod page_layout;
pub mod text;

/// Common imports for view code.
pub mod prelude {
    pub use crate::borders::{BorderStyle, RoundedBorder};
    pub use crate::card::Card;
    pub use crate::input::{InputState, SearchInput};
    pub use crate::key_hints::{KeyHint, KeyHintsBar};
    pub use crate::logo::LogoBadge;
    pub use crate::page_layout::{Badge, Navbar};
    pub use crate::text::{truncate_to_width, wrap_to_width};
}

//! Widgets that make up the Freetier screen.

pub mod background;
pub mod category;
pub mod footer;
pub mod header;
pub mod main_view;

pub use background::{BackgroundView, MatrixBackground};
pub use category::{CategoryState, CategoryView};
pub use footer::Footer;
pub use header::Header;
pub use main_view::MainView;

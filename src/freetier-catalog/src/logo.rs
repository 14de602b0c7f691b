//! Logo resolution with a generated placeholder fallback.
//!
//! A logo URL may fail to load (404, offline, or a renderer that cannot draw
//! images at all). Any failure resolves to a placeholder labelled with the
//! first character of the entry's name. Failures are never reported and never
//! retried.

use serde::Serialize;

/// Base URL for generated placeholder images.
pub const PLACEHOLDER_BASE_URL: &str = "https://placehold.co/64x64";

/// Label used when a name has no characters to take.
pub const FALLBACK_LABEL: char = '?';

/// Outcome of trying to load a logo image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoLoad {
    /// The image is available for display
    Loaded,
    /// The image could not be fetched or decoded
    Failed,
    /// The renderer cannot show images
    Unsupported,
}

/// Loads logo images for a particular rendering surface.
pub trait LogoLoader {
    fn load(&self, url: &str) -> LogoLoad;
}

/// Loader for character-cell surfaces, which cannot draw remote images.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextSurfaceLoader;

impl LogoLoader for TextSurfaceLoader {
    fn load(&self, _url: &str) -> LogoLoad {
        LogoLoad::Unsupported
    }
}

/// What to show in a logo slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogoView {
    Image { url: String },
    Placeholder { label: char, url: String },
}

impl LogoView {
    /// Build the placeholder view for `name`.
    pub fn placeholder(name: &str) -> Self {
        LogoView::Placeholder {
            label: placeholder_label(name),
            url: placeholder_url(name),
        }
    }

    /// The single character to draw when no image is shown.
    pub fn label(&self) -> Option<char> {
        match self {
            LogoView::Image { .. } => None,
            LogoView::Placeholder { label, .. } => Some(*label),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, LogoView::Placeholder { .. })
    }
}

/// First character of `name`, uppercased.
pub fn placeholder_label(name: &str) -> char {
    name.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .unwrap_or(FALLBACK_LABEL)
}

/// URL of a generated placeholder image showing the name's first character.
pub fn placeholder_url(name: &str) -> String {
    let label = placeholder_label(name).to_string();
    let encoded: String = url::form_urlencoded::byte_serialize(label.as_bytes()).collect();
    format!("{PLACEHOLDER_BASE_URL}?text={encoded}")
}

/// Resolve the logo for an entry named `name` whose logo lives at `url`.
pub fn resolve_logo(name: &str, url: &str, loader: &dyn LogoLoader) -> LogoView {
    if url.is_empty() {
        return LogoView::placeholder(name);
    }
    match loader.load(url) {
        LogoLoad::Loaded => LogoView::Image {
            url: url.to_string(),
        },
        LogoLoad::Failed | LogoLoad::Unsupported => LogoView::placeholder(name),
    }
}

//! Color interpolation helpers.

use ratatui::style::Color;

/// Interpolates between two colors based on a factor t (0.0 to 1.0).
///
/// # Arguments
/// * `from` - Starting color (at t=0.0)
/// * `to` - Ending color (at t=1.0)
/// * `t` - Interpolation factor (clamped to 0.0-1.0)
pub fn interpolate_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);

    let (r1, g1, b1) = extract_rgb(from);
    let (r2, g2, b2) = extract_rgb(to);

    Color::Rgb(lerp_u8(r1, r2, t), lerp_u8(g1, g2, t), lerp_u8(b1, b2, t))
}

/// Darken `color` towards black by `intensity` (1.0 keeps it, 0.0 is black).
pub fn scale_color(color: Color, intensity: f32) -> Color {
    interpolate_color(Color::Rgb(0, 0, 0), color, intensity)
}

/// Extracts RGB components from a Color, defaulting to white for non-RGB colors.
pub(crate) fn extract_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (255, 255, 255),
    }
}

#[inline]
pub(crate) fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let a = a as f32;
    let b = b as f32;
    (a + (b - a) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(0, 200, 100);
        assert_eq!(interpolate_color(from, to, 0.0), from);
        assert_eq!(interpolate_color(from, to, 1.0), to);
        assert_eq!(interpolate_color(from, to, 0.5), Color::Rgb(0, 100, 50));
    }

    #[test]
    fn test_interpolate_clamps() {
        let to = Color::Rgb(10, 20, 30);
        assert_eq!(interpolate_color(Color::Rgb(0, 0, 0), to, 7.0), to);
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(Color::Rgb(0, 255, 0), 1.0), Color::Rgb(0, 255, 0));
        assert_eq!(scale_color(Color::Rgb(0, 255, 0), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(scale_color(Color::Rgb(0, 200, 0), 0.5), Color::Rgb(0, 100, 0));
    }
}

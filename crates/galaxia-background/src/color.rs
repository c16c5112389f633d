//! Color utility functions for the galaxy background.

use ratatui::style::Color;

/// Tint of the soft glow around stars.
const HALO_TINT: (f32, f32, f32) = (190.0, 205.0, 255.0);

/// White ink at the given opacity over a black background.
pub fn starlight_color(opacity: f32) -> Color {
    let v = channel(255.0, opacity);
    Color::Rgb(v, v, v)
}

/// Blue-white glow ink at the given opacity over a black background.
pub fn halo_color(opacity: f32) -> Color {
    let (r, g, b) = HALO_TINT;
    Color::Rgb(channel(r, opacity), channel(g, opacity), channel(b, opacity))
}

fn channel(full: f32, opacity: f32) -> u8 {
    (full * opacity.clamp(0.0, 1.0)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starlight_color() {
        assert_eq!(starlight_color(1.0), Color::Rgb(255, 255, 255));
        assert_eq!(starlight_color(0.0), Color::Rgb(0, 0, 0));
        assert_eq!(starlight_color(0.5), Color::Rgb(128, 128, 128));
        assert_eq!(starlight_color(3.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_halo_color_keeps_tint() {
        let Color::Rgb(r, g, b) = halo_color(1.0) else {
            panic!("expected rgb");
        };
        assert!(b > r && b > g);
        assert_eq!(halo_color(0.0), Color::Rgb(0, 0, 0));
    }
}

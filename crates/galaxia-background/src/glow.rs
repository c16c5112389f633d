//! Pointer glow.

use galaxia_core::Point;

/// Opacity added to something drawn at `point` because the pointer is near.
///
/// Falls off linearly from `max_intensity` at the pointer to zero at
/// `radius`. A missing pointer adds nothing.
pub fn glow_contribution(point: Point, pointer: Option<Point>, radius: f32, max_intensity: f32) -> f32 {
    let Some(pointer) = pointer else {
        return 0.0;
    };
    if radius <= 0.0 {
        return 0.0;
    }

    let distance = point.distance(pointer);
    if distance < radius {
        (1.0 - distance / radius) * max_intensity
    } else {
        0.0
    }
}

/// Final opacity of a glowing element, capped at 1 and scaled by the fade-in.
pub fn lit_opacity(base: f32, glow: f32, fade: f32) -> f32 {
    (base + glow).min(1.0) * fade
}

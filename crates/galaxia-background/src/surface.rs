//! Drawing surface abstraction.

use galaxia_core::{Point, SurfaceSize};

/// Primitive drawing operations the background paints with.
///
/// Coordinates are surface pixels. `opacity` is the final alpha of white
/// ink over the background, already scaled by glow and fade.
pub trait Surface {
    /// Size of the drawable area.
    fn size(&self) -> SurfaceSize;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Filled circle with a soft glow of `glow_blur` pixels around it.
    fn fill_circle(&mut self, center: Point, radius: f32, opacity: f32, glow_blur: f32);

    /// Straight line of the given stroke width.
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, opacity: f32);
}

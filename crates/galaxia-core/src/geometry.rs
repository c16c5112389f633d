//! Surface geometry.
//!
//! The background is simulated in surface pixels. A terminal cell is treated
//! as a fixed block of pixels so the pixel-based constants keep roughly the
//! proportions they would have on a browser canvas.

/// Surface pixels covered by one terminal column.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Surface pixels covered by one terminal row.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// A point on the drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Pixel at the centre of a terminal cell.
    pub fn from_cell(column: u16, row: u16) -> Point {
        Point::new(
            (column as f32 + 0.5) * CELL_WIDTH_PX,
            (row as f32 + 0.5) * CELL_HEIGHT_PX,
        )
    }
}

/// Size of a drawing surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Surface covering a block of terminal cells.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self::new(columns as f32 * CELL_WIDTH_PX, rows as f32 * CELL_HEIGHT_PX)
    }

    /// Whether the surface has no drawable area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether a point lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x < self.width && point.y >= 0.0 && point.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.midpoint(b), Point::new(1.5, 2.0));
    }

    #[test]
    fn test_cell_mapping() {
        let size = SurfaceSize::from_cells(80, 24);
        assert_eq!(size, SurfaceSize::new(640.0, 384.0));

        let p = Point::from_cell(0, 0);
        assert_eq!(p, Point::new(4.0, 8.0));
        assert!(size.contains(p));
        assert!(!size.contains(Point::new(640.0, 10.0)));
    }

    #[test]
    fn test_empty_surface() {
        assert!(SurfaceSize::from_cells(0, 10).is_empty());
        assert!(!SurfaceSize::from_cells(1, 1).is_empty());
    }
}

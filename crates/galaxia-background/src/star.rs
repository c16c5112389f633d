//! Drifting stars and the constellation graph between them.

use galaxia_core::{GalaxyTuning, Point, SurfaceSize};
use rand::Rng;

/// A background star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position in pixels.
    pub x: f32,
    /// Vertical position in pixels.
    pub y: f32,
    /// Radius, fixed at creation.
    pub size: f32,
    /// Base opacity, fixed at creation.
    pub opacity: f32,
    /// Horizontal velocity in pixels per frame.
    pub dx: f32,
    /// Vertical velocity in pixels per frame.
    pub dy: f32,
    /// Indices of the stars this one draws a constellation line to.
    pub connections: Vec<usize>,
}

impl Star {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Current velocity magnitude.
    pub fn speed(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

/// Sample uniformly from `[-span / 2, span / 2]`.
pub(crate) fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    if span <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-span / 2.0..=span / 2.0)
}

/// Generate `tuning.star_count` stars spread uniformly over the surface.
///
/// Returns no stars for an empty surface.
pub fn init_stars<R: Rng + ?Sized>(
    rng: &mut R,
    size: SurfaceSize,
    tuning: &GalaxyTuning,
) -> Vec<Star> {
    if size.is_empty() {
        return Vec::new();
    }

    (0..tuning.star_count)
        .map(|_| Star {
            x: rng.gen_range(0.0..size.width),
            y: rng.gen_range(0.0..size.height),
            size: rng.gen_range(tuning.min_star_size..=tuning.max_star_size),
            opacity: rng.gen_range(tuning.min_star_opacity..=tuning.max_star_opacity),
            dx: centered(rng, tuning.drift_speed),
            dy: centered(rng, tuning.drift_speed),
            connections: Vec::new(),
        })
        .collect()
}

/// Link every star to the stars within `connection_distance` of it.
///
/// Candidates are taken in index order until `max_connections` is reached.
/// Links are outbound only; the reverse link may or may not exist.
pub fn build_constellations(stars: &mut [Star], connection_distance: f32, max_connections: usize) {
    let positions: Vec<Point> = stars.iter().map(Star::position).collect();

    for (i, star) in stars.iter_mut().enumerate() {
        star.connections.clear();
        let origin = positions[i];
        for (j, &other) in positions.iter().enumerate() {
            if star.connections.len() >= max_connections {
                break;
            }
            if i != j && origin.distance(other) < connection_distance {
                star.connections.push(j);
            }
        }
    }
}

/// Move a star one frame: drift, bounce off the edges, jitter, speed cap.
pub fn advance_star<R: Rng + ?Sized>(
    star: &mut Star,
    rng: &mut R,
    size: SurfaceSize,
    tuning: &GalaxyTuning,
) {
    star.x += star.dx;
    star.y += star.dy;

    if star.x < 0.0 || star.x > size.width {
        star.dx = -star.dx;
    }
    if star.y < 0.0 || star.y > size.height {
        star.dy = -star.dy;
    }

    star.dx += centered(rng, tuning.drift_jitter);
    star.dy += centered(rng, tuning.drift_jitter);

    let speed = star.speed();
    if speed > tuning.drift_speed {
        star.dx = star.dx / speed * tuning.drift_speed;
        star.dy = star.dy / speed * tuning.drift_speed;
    }
}

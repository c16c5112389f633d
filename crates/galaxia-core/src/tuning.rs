//! Tunable constants for the animated background.

use std::f32::consts::FRAC_PI_4;
use std::ops::RangeInclusive;

/// Every constant the starfield simulation reads.
///
/// Distances are in surface pixels, speeds in pixels per frame and
/// durations in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyTuning {
    /// Number of stars generated per initialization.
    pub star_count: usize,
    /// Smallest star radius.
    pub min_star_size: f32,
    /// Largest star radius.
    pub max_star_size: f32,
    /// Lowest base opacity of a star.
    pub min_star_opacity: f32,
    /// Highest base opacity of a star.
    pub max_star_opacity: f32,
    /// Upper bound on a star's velocity magnitude.
    pub drift_speed: f32,
    /// Width of the random velocity perturbation added every frame.
    pub drift_jitter: f32,
    /// Hard cap on the shooting-star pool.
    pub max_shooting_stars: usize,
    /// Cooldown between shooting-star spawns.
    pub shooting_star_interval_ms: f64,
    /// Opacity lost by a shooting star every frame.
    pub shooting_star_fade: f32,
    /// Streak length range.
    pub shooting_star_length: RangeInclusive<f32>,
    /// Streak speed range.
    pub shooting_star_speed: RangeInclusive<f32>,
    /// Centre of the streak direction band, in radians.
    pub shooting_star_angle: f32,
    /// Half-width of the streak direction band, in radians.
    pub shooting_star_angle_spread: f32,
    /// Stars closer than this are joined into constellations.
    pub connection_distance: f32,
    /// Out-degree cap of a star in the constellation graph.
    pub max_connections_per_star: usize,
    /// Radius of the pointer glow.
    pub glow_radius: f32,
    /// Glow added at the pointer itself.
    pub max_glow_intensity: f32,
    /// Length of the fade-in after (re)initialization.
    pub fade_in_ms: f64,
}

impl Default for GalaxyTuning {
    fn default() -> Self {
        Self {
            star_count: 350,
            min_star_size: 0.5,
            max_star_size: 2.0,
            min_star_opacity: 0.4,
            max_star_opacity: 1.0,
            drift_speed: 0.08,
            drift_jitter: 0.001,
            max_shooting_stars: 5,
            shooting_star_interval_ms: 2000.0,
            shooting_star_fade: 0.015,
            shooting_star_length: 40.0..=120.0,
            shooting_star_speed: 4.0..=8.0,
            shooting_star_angle: FRAC_PI_4,
            shooting_star_angle_spread: 0.1,
            connection_distance: 100.0,
            max_connections_per_star: 5,
            glow_radius: 150.0,
            max_glow_intensity: 0.8,
            fade_in_ms: 3000.0,
        }
    }
}

impl GalaxyTuning {
    /// Number of shooting stars seeded at initialization.
    pub fn initial_shooting_stars(&self) -> usize {
        self.max_shooting_stars.div_ceil(2)
    }
}

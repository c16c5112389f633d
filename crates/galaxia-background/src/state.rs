//! Galaxy background state management.

use galaxia_core::{GalaxyTuning, Point, SurfaceSize};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Frame, layout::Rect, widgets::Paragraph};
use tracing::debug;

use crate::fade::{FadePhase, fade_factor};
use crate::glow::{glow_contribution, lit_opacity};
use crate::raster::CellRaster;
use crate::shooting::{self, ShootingStar};
use crate::star::{self, Star};
use crate::surface::Surface;

/// Stroke width of constellation lines.
const CONSTELLATION_WIDTH: f32 = 0.8;

/// State of one animated galaxy background.
///
/// Every instance owns its stars, shooting stars, timers and pointer, so
/// several backgrounds can run side by side with the same tuning. Until the
/// first [`resize`](Self::resize) there is no surface and every operation is
/// a no-op.
#[derive(Debug)]
pub struct GalaxyState {
    /// Constants the simulation reads.
    tuning: GalaxyTuning,
    /// Whether constellation lines are built and drawn.
    constellations: bool,
    /// Source of every random draw.
    rng: StdRng,
    /// Current surface, if one is available.
    surface: Option<SurfaceSize>,
    /// Drifting stars.
    stars: Vec<Star>,
    /// Shooting-star pool.
    shooting_stars: Vec<ShootingStar>,
    /// Time the current fade-in started, in milliseconds.
    fade_started_ms: f64,
    /// Time the last shooting star was appended to the pool.
    last_spawn_ms: f64,
    /// Pointer position on the surface.
    pointer: Option<Point>,
}

impl GalaxyState {
    /// Create a galaxy seeded from the system clock.
    pub fn new(tuning: GalaxyTuning, constellations: bool) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(tuning, constellations, seed)
    }

    /// Create a galaxy with a fixed random seed.
    pub fn with_seed(tuning: GalaxyTuning, constellations: bool, seed: u64) -> Self {
        Self {
            tuning,
            constellations,
            rng: StdRng::seed_from_u64(seed),
            surface: None,
            stars: Vec::new(),
            shooting_stars: Vec::new(),
            fade_started_ms: 0.0,
            last_spawn_ms: 0.0,
            pointer: None,
        }
    }

    /// Regenerate everything for a new surface and restart the fade-in.
    ///
    /// An empty surface drops all state until a usable one arrives.
    pub fn resize(&mut self, size: SurfaceSize, now_ms: f64) {
        if size.is_empty() {
            self.surface = None;
            self.stars.clear();
            self.shooting_stars.clear();
            return;
        }

        let mut stars = star::init_stars(&mut self.rng, size, &self.tuning);
        if self.constellations {
            star::build_constellations(
                &mut stars,
                self.tuning.connection_distance,
                self.tuning.max_connections_per_star,
            );
        }
        self.stars = stars;

        self.shooting_stars = (0..self.tuning.initial_shooting_stars())
            .map(|_| shooting::create_shooting_star(&mut self.rng, size, &self.tuning))
            .collect();

        self.surface = Some(size);
        self.fade_started_ms = now_ms;

        debug!(
            width = size.width,
            height = size.height,
            stars = self.stars.len(),
            constellations = self.constellations,
            "galaxy initialized"
        );
    }

    /// Resize only when the surface differs from the current one.
    ///
    /// Returns `true` when the galaxy was regenerated.
    pub fn ensure_size(&mut self, size: SurfaceSize, now_ms: f64) -> bool {
        if self.surface == Some(size) || (self.surface.is_none() && size.is_empty()) {
            return false;
        }
        self.resize(size, now_ms);
        true
    }

    /// Move the pointer, or take it off the surface with `None`.
    pub fn set_pointer(&mut self, pointer: Option<Point>) {
        if self.surface.is_none() {
            return;
        }
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn surface_size(&self) -> Option<SurfaceSize> {
        self.surface
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    pub fn tuning(&self) -> &GalaxyTuning {
        &self.tuning
    }

    pub fn has_constellations(&self) -> bool {
        self.constellations
    }

    /// Fade-in multiplier at `now_ms`; zero without a surface.
    pub fn fade_factor(&self, now_ms: f64) -> f32 {
        if self.surface.is_none() {
            return 0.0;
        }
        fade_factor(now_ms, self.fade_started_ms, self.tuning.fade_in_ms)
    }

    /// Fade-in phase at `now_ms`, if the galaxy has a surface.
    pub fn phase(&self, now_ms: f64) -> Option<FadePhase> {
        self.surface
            .map(|_| FadePhase::at(now_ms, self.fade_started_ms, self.tuning.fade_in_ms))
    }

    /// Advance the simulation by one frame without drawing.
    pub fn advance(&mut self, now_ms: f64) {
        let Some(size) = self.surface else {
            return;
        };

        for star in &mut self.stars {
            star::advance_star(star, &mut self.rng, size, &self.tuning);
        }

        if self.shooting_stars.len() < self.tuning.max_shooting_stars
            && now_ms - self.last_spawn_ms > self.tuning.shooting_star_interval_ms
        {
            self.shooting_stars
                .push(shooting::create_shooting_star(&mut self.rng, size, &self.tuning));
            self.last_spawn_ms = now_ms;
            debug!(pool = self.shooting_stars.len(), "shooting star spawned");
        }

        for streak in &mut self.shooting_stars {
            shooting::advance_shooting_star(streak, &mut self.rng, size, &self.tuning);
        }
    }

    /// Paint the current state onto `surface`.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, now_ms: f64) {
        if self.surface.is_none() {
            return;
        }
        let fade = self.fade_factor(now_ms);
        let tuning = &self.tuning;

        for star in &self.stars {
            let glow = glow_contribution(
                star.position(),
                self.pointer,
                tuning.glow_radius,
                tuning.max_glow_intensity,
            );
            surface.fill_circle(
                star.position(),
                star.size,
                lit_opacity(star.opacity, glow, fade),
                star.size * 5.0 + glow * 10.0,
            );
        }

        if self.constellations {
            for star in &self.stars {
                for &other in &star.connections {
                    let Some(other) = self.stars.get(other) else {
                        continue;
                    };
                    let (from, to) = (star.position(), other.position());
                    let base = (1.0 - from.distance(to) / tuning.connection_distance).max(0.0);
                    let glow = glow_contribution(
                        from.midpoint(to),
                        self.pointer,
                        tuning.glow_radius,
                        tuning.max_glow_intensity,
                    );
                    surface.stroke_line(from, to, CONSTELLATION_WIDTH, lit_opacity(base, glow, fade));
                }
            }
        }

        for streak in &self.shooting_stars {
            shooting::draw_shooting_star(streak, surface, fade);
        }
    }

    /// Run one full frame: clear, advance, paint.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) {
        if self.surface.is_none() {
            return;
        }
        surface.clear();
        self.advance(now_ms);
        self.paint(surface, now_ms);
    }

    /// Run one frame on a terminal area and render it to the frame.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, now_ms: f64) {
        self.ensure_size(SurfaceSize::from_cells(area.width, area.height), now_ms);
        if self.surface.is_none() {
            return;
        }

        let mut raster = CellRaster::new(area.width, area.height);
        self.frame(&mut raster, now_ms);
        frame.render_widget(Paragraph::new(raster.to_lines()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Mark, Recorder};

    const SIZE: SurfaceSize = SurfaceSize::new(1000.0, 800.0);

    fn galaxy(constellations: bool) -> GalaxyState {
        GalaxyState::with_seed(GalaxyTuning::default(), constellations, 42)
    }

    #[test]
    fn test_no_surface_is_noop() {
        let mut state = galaxy(true);
        let mut surface = Recorder::new(SIZE);

        state.advance(100.0);
        state.frame(&mut surface, 100.0);
        state.paint(&mut surface, 100.0);
        state.set_pointer(Some(Point::new(1.0, 1.0)));

        assert!(state.stars().is_empty());
        assert!(state.shooting_stars().is_empty());
        assert!(surface.marks.is_empty());
        assert_eq!(surface.clears, 0);
        assert_eq!(state.pointer(), None);
        assert_eq!(state.fade_factor(5000.0), 0.0);
        assert_eq!(state.phase(5000.0), None);
    }

    #[test]
    fn test_initialize_scenario() {
        let mut state = galaxy(true);
        state.resize(SIZE, 0.0);

        assert_eq!(state.stars().len(), 350);
        assert_eq!(state.shooting_stars().len(), 3);
        for (i, star) in state.stars().iter().enumerate() {
            assert!(SIZE.contains(star.position()));
            assert!(star.connections.len() <= 5);
            assert!(!star.connections.contains(&i));
        }
    }

    #[test]
    fn test_without_constellations_no_edges() {
        let mut state = galaxy(false);
        state.resize(SIZE, 0.0);
        assert!(state.stars().iter().all(|s| s.connections.is_empty()));

        let mut surface = Recorder::new(SIZE);
        state.paint(&mut surface, 5000.0);
        // Only shooting-star streaks are lines.
        assert_eq!(surface.lines().count(), state.shooting_stars().len());
    }

    #[test]
    fn test_fade_in_restarts_on_resize() {
        let mut state = galaxy(false);
        state.resize(SIZE, 1000.0);
        assert_eq!(state.fade_factor(1000.0), 0.0);
        assert_eq!(state.phase(1000.0), Some(FadePhase::FadingIn));
        assert_eq!(state.fade_factor(4000.0), 1.0);
        assert_eq!(state.phase(10_000.0), Some(FadePhase::Steady));

        state.resize(SurfaceSize::new(640.0, 480.0), 10_000.0);
        assert_eq!(state.fade_factor(10_000.0), 0.0);
        assert!(state.stars().iter().all(|s| s.x < 640.0 && s.y < 480.0));
    }

    #[test]
    fn test_nothing_visible_at_fade_start() {
        let mut state = galaxy(true);
        state.resize(SIZE, 0.0);
        let mut surface = Recorder::new(SIZE);
        state.paint(&mut surface, 0.0);

        assert!(!surface.marks.is_empty());
        for mark in &surface.marks {
            let opacity = match mark {
                Mark::Circle { opacity, .. } | Mark::Line { opacity, .. } => *opacity,
            };
            assert_eq!(opacity, 0.0);
        }
    }

    #[test]
    fn test_paint_order_and_counts() {
        let mut state = galaxy(true);
        state.resize(SIZE, 0.0);
        let edges: usize = state.stars().iter().map(|s| s.connections.len()).sum();

        let mut surface = Recorder::new(SIZE);
        state.paint(&mut surface, 5000.0);

        assert_eq!(surface.circles().count(), 350);
        assert_eq!(surface.lines().count(), edges + state.shooting_stars().len());
        assert!(matches!(surface.marks[0], Mark::Circle { .. }));
        assert!(matches!(surface.marks.last(), Some(Mark::Line { width, .. }) if *width == 2.0));
    }

    #[test]
    fn test_pointer_glow_brightens_star() {
        let mut state = galaxy(false);
        state.resize(SIZE, 0.0);
        let target = state.stars()[0].clone();

        let mut dark = Recorder::new(SIZE);
        state.paint(&mut dark, 5000.0);

        state.set_pointer(Some(target.position()));
        let mut lit = Recorder::new(SIZE);
        state.paint(&mut lit, 5000.0);

        let Some(Mark::Circle {
            opacity: before,
            glow_blur: blur_before,
            ..
        }) = dark.marks.first().cloned()
        else {
            panic!("expected circle");
        };
        let Some(Mark::Circle {
            opacity: after,
            glow_blur: blur_after,
            ..
        }) = lit.marks.first().cloned()
        else {
            panic!("expected circle");
        };

        assert_eq!(before, target.opacity);
        assert_eq!(after, 1.0);
        assert!((blur_after - blur_before - 8.0).abs() < 1e-4);

        state.set_pointer(None);
        assert_eq!(state.pointer(), None);
    }

    #[test]
    fn test_frame_clears_then_draws() {
        let mut state = galaxy(false);
        state.resize(SIZE, 0.0);
        let mut surface = Recorder::new(SIZE);

        state.frame(&mut surface, 16.0);
        state.frame(&mut surface, 32.0);

        assert_eq!(surface.clears, 2);
        assert_eq!(surface.circles().count(), 350);
    }

    #[test]
    fn test_speed_bound_over_many_frames() {
        let mut state = galaxy(true);
        state.resize(SurfaceSize::new(200.0, 150.0), 0.0);
        let drift = state.tuning().drift_speed;

        for frame in 0..1000 {
            state.advance(frame as f64 * 16.0);
        }
        assert!(state.stars().iter().all(|s| s.speed() <= drift + 1e-6));
    }

    #[test]
    fn test_shooting_pool_growth() {
        let mut state = galaxy(false);
        state.resize(SIZE, 0.0);
        assert_eq!(state.shooting_stars().len(), 3);

        // The cooldown is measured from the last spawn, which starts at 0.
        state.advance(1000.0);
        assert_eq!(state.shooting_stars().len(), 3);
        state.advance(2500.0);
        assert_eq!(state.shooting_stars().len(), 4);
        state.advance(3000.0);
        assert_eq!(state.shooting_stars().len(), 4);
        state.advance(5000.0);
        assert_eq!(state.shooting_stars().len(), 5);

        for step in 0..200 {
            state.advance(8000.0 + step as f64 * 2500.0);
            assert_eq!(state.shooting_stars().len(), 5);
        }
    }

    #[test]
    fn test_shooting_stars_keep_resetting() {
        let mut state = galaxy(false);
        state.resize(SIZE, 0.0);

        // Opacity runs out after ~67 frames, so every streak resets at least once.
        for frame in 0..300 {
            state.advance(frame as f64);
            for streak in state.shooting_stars() {
                assert!(streak.opacity > 0.0 && streak.opacity <= 1.0);
            }
        }
    }

    #[test]
    fn test_ensure_size_only_on_change() {
        let mut state = galaxy(false);
        assert!(!state.ensure_size(SurfaceSize::new(0.0, 0.0), 0.0));
        assert!(state.ensure_size(SIZE, 0.0));
        let first = state.stars()[0].clone();
        assert!(!state.ensure_size(SIZE, 500.0));
        assert_eq!(state.stars()[0], first);
        assert_eq!(state.fade_factor(0.0), 0.0);

        assert!(state.ensure_size(SurfaceSize::new(0.0, 0.0), 600.0));
        assert_eq!(state.surface_size(), None);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = galaxy(false);
        let mut b = galaxy(false);
        a.resize(SIZE, 0.0);
        b.resize(SIZE, 0.0);
        assert_eq!(a.stars(), b.stars());

        a.advance(16.0);
        a.set_pointer(Some(Point::new(5.0, 5.0)));
        assert_ne!(a.stars(), b.stars());
        assert_eq!(b.pointer(), None);
    }
}

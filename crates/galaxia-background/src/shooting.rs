//! Shooting stars: short streaks that cross the surface and get reseeded.
//!
//! Records live in a pooled `Vec` owned by the galaxy state. A record that
//! fades out or leaves the surface is reseeded in place, so pool entries are
//! never removed.

use galaxia_core::{GalaxyTuning, Point, SurfaceSize};
use rand::Rng;

use crate::star::centered;
use crate::surface::Surface;

/// Stroke width of a shooting-star streak.
const STREAK_WIDTH: f32 = 2.0;

/// A single shooting star.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub x: f32,
    pub y: f32,
    /// Streak length in pixels.
    pub length: f32,
    /// Pixels travelled per frame.
    pub speed: f32,
    /// Direction of travel in radians, y pointing down.
    pub angle: f32,
    pub opacity: f32,
}

impl ShootingStar {
    /// Start of the streak.
    pub fn tail(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// End of the streak, `length` pixels along the direction of travel.
    pub fn head(&self) -> Point {
        Point::new(
            self.x + self.angle.cos() * self.length,
            self.y + self.angle.sin() * self.length,
        )
    }
}

/// Create a shooting star just off the left or the top edge.
pub fn create_shooting_star<R: Rng + ?Sized>(
    rng: &mut R,
    size: SurfaceSize,
    tuning: &GalaxyTuning,
) -> ShootingStar {
    let (x, y) = if rng.gen_bool(0.5) {
        (
            -rng.gen_range(0.0..=1.0) * size.width * 0.5,
            rng.gen_range(0.0..1.0) * size.height,
        )
    } else {
        (
            rng.gen_range(0.0..1.0) * size.width,
            -rng.gen_range(0.0..=1.0) * size.height * 0.5,
        )
    };

    ShootingStar {
        x,
        y,
        length: rng.gen_range(tuning.shooting_star_length.clone()),
        speed: rng.gen_range(tuning.shooting_star_speed.clone()),
        angle: tuning.shooting_star_angle + centered(rng, tuning.shooting_star_angle_spread * 2.0),
        opacity: 1.0,
    }
}

/// Reseed a shooting star in place from the creation distributions.
pub fn reset_shooting_star<R: Rng + ?Sized>(
    star: &mut ShootingStar,
    rng: &mut R,
    size: SurfaceSize,
    tuning: &GalaxyTuning,
) {
    *star = create_shooting_star(rng, size, tuning);
}

/// Move a shooting star one frame and fade it.
///
/// Returns `true` when the star faded out or left the surface and was reseeded.
pub fn advance_shooting_star<R: Rng + ?Sized>(
    star: &mut ShootingStar,
    rng: &mut R,
    size: SurfaceSize,
    tuning: &GalaxyTuning,
) -> bool {
    star.x += star.angle.cos() * star.speed;
    star.y += star.angle.sin() * star.speed;
    star.opacity -= tuning.shooting_star_fade;

    let gone = star.x > size.width + star.length
        || star.y > size.height + star.length
        || star.opacity <= 0.0;
    if gone {
        reset_shooting_star(star, rng, size, tuning);
    }
    gone
}

/// Paint the streak, scaled by the fade-in factor.
pub fn draw_shooting_star<S: Surface + ?Sized>(star: &ShootingStar, surface: &mut S, fade: f32) {
    surface.stroke_line(star.tail(), star.head(), STREAK_WIDTH, star.opacity * fade);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Mark, Recorder};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SIZE: SurfaceSize = SurfaceSize::new(1000.0, 800.0);

    fn assert_off_surface_origin(star: &ShootingStar) {
        let left_band = star.x <= 0.0
            && star.x >= -SIZE.width * 0.5
            && (0.0..SIZE.height).contains(&star.y);
        let top_band = star.y <= 0.0
            && star.y >= -SIZE.height * 0.5
            && (0.0..SIZE.width).contains(&star.x);
        assert!(left_band || top_band, "bad origin: {star:?}");
    }

    #[test]
    fn test_create_distributions() {
        let tuning = GalaxyTuning::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let star = create_shooting_star(&mut rng, SIZE, &tuning);
            assert_off_surface_origin(&star);
            assert!(tuning.shooting_star_length.contains(&star.length));
            assert!(tuning.shooting_star_speed.contains(&star.speed));
            assert!((star.angle - tuning.shooting_star_angle).abs() <= 0.1 + 1e-6);
            assert_eq!(star.opacity, 1.0);
        }
    }

    #[test]
    fn test_advance_moves_and_fades() {
        let tuning = GalaxyTuning::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut star = ShootingStar {
            x: 100.0,
            y: 100.0,
            length: 50.0,
            speed: 5.0,
            angle: 0.0,
            opacity: 1.0,
        };

        let reset = advance_shooting_star(&mut star, &mut rng, SIZE, &tuning);
        assert!(!reset);
        assert!((star.x - 105.0).abs() < 1e-4);
        assert!((star.y - 100.0).abs() < 1e-4);
        assert!((star.opacity - 0.985).abs() < 1e-6);
    }

    #[test]
    fn test_reset_when_faded() {
        let tuning = GalaxyTuning::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut star = ShootingStar {
            x: 100.0,
            y: 100.0,
            length: 50.0,
            speed: 5.0,
            angle: 0.5,
            opacity: 0.01,
        };

        assert!(advance_shooting_star(&mut star, &mut rng, SIZE, &tuning));
        assert_eq!(star.opacity, 1.0);
        assert_off_surface_origin(&star);
    }

    #[test]
    fn test_reset_when_past_advancing_edge() {
        let tuning = GalaxyTuning::default();
        let mut rng = StdRng::seed_from_u64(6);
        let mut star = ShootingStar {
            x: SIZE.width + 49.0,
            y: 10.0,
            length: 40.0,
            speed: 5.0,
            angle: 0.0,
            opacity: 0.9,
        };

        assert!(advance_shooting_star(&mut star, &mut rng, SIZE, &tuning));
        assert_eq!(star.opacity, 1.0);
        assert_off_surface_origin(&star);

        let mut below = ShootingStar {
            x: 10.0,
            y: SIZE.height + 39.0,
            length: 40.0,
            speed: 5.0,
            angle: std::f32::consts::FRAC_PI_2,
            opacity: 0.9,
        };
        assert!(advance_shooting_star(&mut below, &mut rng, SIZE, &tuning));
        assert_off_surface_origin(&below);
    }

    #[test]
    fn test_draw_scales_by_fade() {
        let star = ShootingStar {
            x: 0.0,
            y: 0.0,
            length: 10.0,
            speed: 5.0,
            angle: 0.0,
            opacity: 0.8,
        };
        let mut surface = Recorder::new(SIZE);
        draw_shooting_star(&star, &mut surface, 0.5);

        assert_eq!(
            surface.marks,
            vec![Mark::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 0.0),
                width: STREAK_WIDTH,
                opacity: 0.4,
            }]
        );
    }
}

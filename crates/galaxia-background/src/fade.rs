//! Fade-in after (re)initialization.

/// Where a galaxy is in its fade-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Still ramping up from transparent.
    FadingIn,
    /// Fully visible until the next resize.
    Steady,
}

impl FadePhase {
    pub fn at(now_ms: f64, started_ms: f64, fade_in_ms: f64) -> FadePhase {
        if fade_factor(now_ms, started_ms, fade_in_ms) < 1.0 {
            FadePhase::FadingIn
        } else {
            FadePhase::Steady
        }
    }
}

/// Multiplier applied to every drawn opacity, ramping from 0 to 1.
pub fn fade_factor(now_ms: f64, started_ms: f64, fade_in_ms: f64) -> f32 {
    if fade_in_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - started_ms) / fade_in_ms).clamp(0.0, 1.0) as f32
}

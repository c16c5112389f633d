//! Config validation.
//!
//! Checks numeric ranges and collects every problem instead of stopping at
//! the first.

use std::fmt::Display;

use crate::error::ConfigError;
use crate::schema::Config;

/// Run all validations on a config.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();
    let bg = &config.background;

    validate_range(&mut errors, "background.star_count", bg.star_count, 1, 5000);
    validate_positive(&mut errors, "background.drift_speed", bg.drift_speed, 10.0);
    validate_positive(
        &mut errors,
        "background.connection_distance",
        bg.connection_distance,
        1000.0,
    );
    validate_range(
        &mut errors,
        "background.max_connections_per_star",
        bg.max_connections_per_star,
        0,
        50,
    );
    validate_range(&mut errors, "background.max_shooting_stars", bg.max_shooting_stars, 0, 50);
    validate_positive(&mut errors, "background.glow_radius", bg.glow_radius, 2000.0);
    validate_range(
        &mut errors,
        "background.max_glow_intensity",
        bg.max_glow_intensity,
        0.0,
        1.0,
    );
    validate_range(&mut errors, "background.fade_in_ms", bg.fade_in_ms, 1, 60_000);
    validate_range(&mut errors, "display.fps", config.display.fps, 1, 240);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}

fn validate_range<T: PartialOrd + Display>(
    errors: &mut Vec<String>,
    field: &str,
    value: T,
    min: T,
    max: T,
) {
    // Written as a negated check so NaN fails too.
    if !(value >= min && value <= max) {
        errors.push(format!("{field} must be between {min} and {max}, got {value}"));
    }
}

/// Value in `(0, max]`.
fn validate_positive(errors: &mut Vec<String>, field: &str, value: f32, max: f32) {
    if !(value > 0.0 && value <= max) {
        errors.push(format!("{field} must be greater than 0 and at most {max}, got {value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = Config::default();
        config.background.star_count = 0;
        config.background.drift_speed = 0.0;
        config.background.max_glow_intensity = 1.5;
        config.display.fps = 1000;

        let Err(ConfigError::Validation(errors)) = validate(&config) else {
            panic!("expected validation errors");
        };
        assert_eq!(errors.len(), 4);
        assert!(errors[0].starts_with("background.star_count"));
    }

    #[test]
    fn test_nan_rejected() {
        let mut config = Config::default();
        config.background.glow_radius = f32::NAN;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_bounds_inclusive() {
        let mut config = Config::default();
        config.background.star_count = 5000;
        config.background.max_glow_intensity = 0.0;
        config.display.fps = 240;
        assert!(validate(&config).is_ok());
    }
}

//! Config file schema.

use galaxia_core::GalaxyTuning;
use serde::{Deserialize, Serialize};

/// Top-level config.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub background: BackgroundConfig,
    pub display: DisplayConfig,
    pub profile: ProfileConfig,
}

/// `[background]`: the tunable part of the galaxy simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub star_count: usize,
    pub drift_speed: f32,
    pub connection_distance: f32,
    pub max_connections_per_star: usize,
    pub max_shooting_stars: usize,
    pub shooting_star_interval_ms: u64,
    pub glow_radius: f32,
    pub max_glow_intensity: f32,
    pub fade_in_ms: u64,
    /// Draw constellation lines on the sections that have them.
    pub constellations: bool,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        let tuning = GalaxyTuning::default();
        Self {
            star_count: tuning.star_count,
            drift_speed: tuning.drift_speed,
            connection_distance: tuning.connection_distance,
            max_connections_per_star: tuning.max_connections_per_star,
            max_shooting_stars: tuning.max_shooting_stars,
            shooting_star_interval_ms: tuning.shooting_star_interval_ms as u64,
            glow_radius: tuning.glow_radius,
            max_glow_intensity: tuning.max_glow_intensity,
            fade_in_ms: tuning.fade_in_ms as u64,
            constellations: true,
        }
    }
}

impl BackgroundConfig {
    /// Simulation constants with these overrides applied.
    pub fn tuning(&self) -> GalaxyTuning {
        GalaxyTuning {
            star_count: self.star_count,
            drift_speed: self.drift_speed,
            connection_distance: self.connection_distance,
            max_connections_per_star: self.max_connections_per_star,
            max_shooting_stars: self.max_shooting_stars,
            shooting_star_interval_ms: self.shooting_star_interval_ms as f64,
            glow_radius: self.glow_radius,
            max_glow_intensity: self.max_glow_intensity,
            fade_in_ms: self.fade_in_ms as f64,
            ..GalaxyTuning::default()
        }
    }
}

/// `[display]`: terminal refresh settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Frames drawn per second.
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { fps: 60 }
    }
}

/// `[profile]`: the person the portfolio is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub links: Vec<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "Sai Sarthak".into(),
            tagline: "AI & Data Science Learner".into(),
            email: "hello@example.com".into(),
            phone: String::new(),
            links: vec!["LinkedIn".into(), "GitHub".into(), "x".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_round_trips() {
        assert_eq!(BackgroundConfig::default().tuning(), GalaxyTuning::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [background]
            star_count = 120

            [profile]
            name = "Ada"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.background.star_count, 120);
        assert_eq!(config.background.glow_radius, 150.0);
        assert!(config.background.constellations);
        assert_eq!(config.display.fps, 60);
        assert_eq!(config.profile.name, "Ada");
        assert_eq!(config.profile.tagline, ProfileConfig::default().tagline);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").expect("valid toml");
        assert_eq!(config, Config::default());
    }
}

//! TOML config file loading and creation.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::schema::Config;
use crate::validation;

/// Template written when no config file exists yet.
const DEFAULT_CONFIG_TOML: &str = r#"# galaxia configuration
#
# Every field is optional; anything left out uses the value shown here.

[background]
# Stars generated per section.
star_count = 350
# Maximum drift per frame, in pixels (one terminal cell is 8x16 pixels).
drift_speed = 0.08
# Stars closer than this are joined by constellation lines.
connection_distance = 100.0
max_connections_per_star = 5
max_shooting_stars = 5
shooting_star_interval_ms = 2000
# Pointer glow radius and strength.
glow_radius = 150.0
max_glow_intensity = 0.8
fade_in_ms = 3000
constellations = true

[display]
fps = 60

[profile]
name = "Sai Sarthak"
tagline = "AI & Data Science Learner"
email = "hello@example.com"
phone = ""
links = ["LinkedIn", "GitHub", "x"]
"#;

/// Load config from a specific TOML file.
///
/// A file that parses but fails validation logs a warning and yields the
/// defaults.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(Config::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path, creating it if missing.
///
/// On Linux: `~/.config/galaxia/config.toml`
/// On macOS: `~/Library/Application Support/galaxia/config.toml`
pub fn load_default() -> Result<Config, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        save_default(&path)?;
        return Ok(Config::default());
    }

    load_from_path(&path)
}

/// Platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("", "", "galaxia").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Write the commented default config to `path`, creating parent directories.
pub fn save_default(path: &Path) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_matches_defaults() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TOML).expect("template parses");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.toml");
        assert!(matches!(load_from_path(&path), Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nfps = 30\n").expect("write");

        let config = load_from_path(&path).expect("loads");
        assert_eq!(config.display.fps, 30);
        assert_eq!(config.background.star_count, 350);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[background]\nstar_count = 0\n").expect("write");

        assert_eq!(load_from_path(&path).expect("loads"), Config::default());
    }

    #[test]
    fn test_malformed_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[background\nstar_count = ").expect("write");

        assert!(matches!(load_from_path(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_default_creates_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        save_default(&path).expect("saves");
        assert_eq!(load_from_path(&path).expect("loads"), Config::default());
    }
}

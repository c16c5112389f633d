//! galaxia configuration.
//!
//! A TOML file with three optional sections: `[background]` tunes the
//! animated galaxy, `[display]` sets the frame rate and `[profile]` holds the
//! text shown on the page. Missing fields fall back to defaults, so an empty
//! file is a valid config.

mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::ConfigError;
pub use loader::{default_config_path, load_default, load_from_path, save_default};
pub use schema::{BackgroundConfig, Config, DisplayConfig, ProfileConfig};

use std::path::Path;

/// Load the config from `path`, or from the platform default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}

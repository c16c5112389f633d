//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to a file in the
//! platform data directory.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "galaxia=info";

/// Install the global subscriber.
///
/// `directive` wins over `RUST_LOG`. Returns the log file path, or `None`
/// when no log file could be opened, in which case nothing is logged.
pub fn init(directive: Option<&str>) -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "galaxia")?;
    let dir = dirs.data_dir();
    std::fs::create_dir_all(dir).ok()?;

    let path = dir.join("galaxia.log");
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}

fn filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
        }
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

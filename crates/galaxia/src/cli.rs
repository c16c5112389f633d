//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// A terminal portfolio drawn over an animated galaxy.
#[derive(Debug, Parser)]
#[command(name = "galaxia", version, about)]
pub struct Args {
    /// Read the config from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed the backgrounds for a reproducible sky.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter directive, e.g. `galaxia=debug`.
    #[arg(long, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,

    /// Draw no constellation lines on any section.
    #[arg(long)]
    pub no_constellations: bool,
}

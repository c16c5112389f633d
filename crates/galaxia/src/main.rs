mod app;
mod cli;
mod content;
mod logging;
mod view;

use std::io::stdout;

use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use galaxia_config::{Config, load_config};
use tracing::{info, warn};

use crate::{app::App, cli::Args};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let log_file = logging::init(args.log_level.as_deref());
    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = ?log_file,
        "galaxia starting"
    );

    // An explicit --config must load; the default location falls back quietly.
    let config = match args.config.as_deref() {
        Some(path) => load_config(Some(path))?,
        None => load_config(None).unwrap_or_else(|e| {
            warn!("failed to load config, using defaults: {e}");
            Config::default()
        }),
    };

    let app = App::new(&config, args.seed, !args.no_constellations);

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
    let result = app.run(terminal);
    let cleanup = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();

    info!("galaxia exiting");
    result?;
    cleanup?;
    Ok(())
}

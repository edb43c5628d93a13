use anyhow::{Context, Result};
use clap::Parser;
use cli::app::{App, Commands};
use config::Config;
use tracing::debug;

mod cli;
mod config;
mod logging;
mod ui;

fn main() -> Result<()> {
    let app = App::parse();
    if let Some(dir) = &app.working_dir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to enter working directory {}", dir.display()))?;
    }
    let config =
        Config::load(&app.config).with_context(|| format!("Failed to load config from {}", app.config.display()))?;
    logging::init(&config.log);
    debug!(?config, privileged_relaunch = app.privileged_relaunch, working_dir = ?app.working_dir, "configuration loaded");

    match app.cmd {
        Commands::Bootstrap(arg) => cli::bootstrap::bootstrap(arg, &config),
        Commands::Platform(arg) => cli::platform::platform(arg, &config),
    }
}

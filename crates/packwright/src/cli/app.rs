use crate::cli::bootstrap::BootstrapArg;
use crate::cli::platform::PlatformArg;
use crate::config::CONFIG_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(name = "packwright", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Set on the elevated copy of the installer.
    #[arg(long = "privileged-relaunch", global = true, hide = true)]
    pub privileged_relaunch: bool,

    /// Directory the elevated copy resolves relative paths against.
    #[arg(long = "working-dir", global = true, hide = true, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "b", name = "bootstrap", about = "Bootstrap an installer session from a resource directory")]
    Bootstrap(BootstrapArg),
    #[command(alias = "p", name = "platform", about = "Show detected platform facts")]
    Platform(PlatformArg),
}

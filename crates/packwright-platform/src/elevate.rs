//! Relaunching the installer with administrator rights.
//!
//! - Windows: PowerShell `Start-Process -Verb RunAs -Wait`
//! - macOS: `osascript` with administrator privileges
//! - Linux: `pkexec`, when installed
//!
//! The relaunched child carries [`PRIVILEGED_MARKER_ENV`] and
//! [`PRIVILEGED_MARKER_ARG`] so it never tries to elevate again. The elevation
//! helpers do not keep the working directory, so the parent's directory is
//! forwarded as [`WORKING_DIR_ARG`] and relative arguments keep their meaning.

use crate::command::Command;
use crate::error::{Error, Result};
use crate::os::{OS, Platform};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PRIVILEGED_MARKER_ENV: &str = "PACKWRIGHT_PRIVILEGED";
pub const PRIVILEGED_MARKER_ARG: &str = "--privileged-relaunch";
pub const WORKING_DIR_ARG: &str = "--working-dir";

/// Platform tooling needed to restart the process elevated.
pub trait Elevator {
    /// The running process is itself the product of an elevated relaunch.
    fn is_privileged_relaunch(&self) -> bool;

    fn is_platform_supported(&self) -> bool;

    /// False when the process already runs with administrator rights.
    fn is_elevation_needed(&self) -> bool;

    /// Spawns the elevated copy and blocks until it exits, returning its exit code.
    fn relaunch_elevated(&self) -> Result<i32>;
}

#[derive(Debug, Clone)]
pub struct PrivilegedRunner {
    platform:    Platform,
    /// Arguments of the running process, without the program name.
    args:        Vec<OsString>,
    working_dir: Option<PathBuf>,
}

impl Default for PrivilegedRunner {
    fn default() -> Self { Self::new(Platform::current()) }
}

impl PrivilegedRunner {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            args: env::args_os().skip(1).collect(),
            working_dir: env::current_dir().ok(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn relaunch_args(&self) -> Vec<OsString> {
        let mut args = self.args.clone();
        if let Some(dir) = self.working_dir.as_deref().and_then(|d| std::path::absolute(d).ok()) {
            args.push(WORKING_DIR_ARG.into());
            args.push(dir.into_os_string());
        }
        args.push(PRIVILEGED_MARKER_ARG.into());
        args
    }

    fn current_exe() -> Result<PathBuf> { env::current_exe().map_err(Error::CurrentExe) }

    fn build_command(&self, exe: &Path) -> Command {
        let args = self.relaunch_args();

        let cmd = match self.platform.os {
            OS::Windows => {
                let arg_list = args
                    .iter()
                    .map(|a| powershell_quote(&a.to_string_lossy()))
                    .collect::<Vec<_>>()
                    .join(",");
                let mut script = format!(
                    "$p = Start-Process -FilePath {} -Verb RunAs -Wait -PassThru",
                    powershell_quote(&exe.to_string_lossy())
                );
                if !arg_list.is_empty() {
                    script.push_str(&format!(" -ArgumentList {arg_list}"));
                }
                script.push_str("; exit $p.ExitCode");
                Command::new("powershell").args(["-NoProfile", "-NonInteractive", "-Command", &script])
            }
            OS::Macos => {
                let line = std::iter::once(OsString::from(format!("{PRIVILEGED_MARKER_ENV}=1")))
                    .chain(std::iter::once(exe.as_os_str().to_owned()))
                    .chain(args)
                    .map(|a| shell_quote(&a.to_string_lossy()))
                    .collect::<Vec<_>>()
                    .join(" ");
                let script = format!(
                    "do shell script \"{}\" with administrator privileges",
                    applescript_escape(&format!("env {line}"))
                );
                Command::new("osascript").args(["-e", &script])
            }
            OS::Linux(_) | OS::Unknown => Command::new("pkexec")
                .arg("env")
                .arg(format!("{PRIVILEGED_MARKER_ENV}=1"))
                .args(forwarded_display())
                .arg(exe)
                .args(args),
        };

        cmd.env(PRIVILEGED_MARKER_ENV, "1")
    }
}

impl Elevator for PrivilegedRunner {
    fn is_privileged_relaunch(&self) -> bool {
        env::var_os(PRIVILEGED_MARKER_ENV).is_some_and(|v| v == "1")
            || self.args.iter().any(|a| a.as_os_str() == OsStr::new(PRIVILEGED_MARKER_ARG))
    }

    fn is_platform_supported(&self) -> bool {
        match self.platform.os {
            OS::Windows | OS::Macos => true,
            OS::Linux(_) => Command::which("pkexec").is_ok(),
            OS::Unknown => false,
        }
    }

    fn is_elevation_needed(&self) -> bool {
        #[cfg(unix)]
        {
            !nix::unistd::geteuid().is_root()
        }
        #[cfg(windows)]
        {
            // `net session` only succeeds from an elevated token.
            Command::new("net")
                .arg("session")
                .output()
                .map(|out| !out.status.success())
                .unwrap_or(true)
        }
        #[cfg(not(any(unix, windows)))]
        {
            true
        }
    }

    fn relaunch_elevated(&self) -> Result<i32> {
        if !self.is_platform_supported() {
            return Err(Error::ElevationUnsupported);
        }
        let mut cmd = self.build_command(&Self::current_exe()?);
        debug!(program = cmd.program(), "relaunching with elevated rights");
        cmd.exit_code()
    }
}

fn forwarded_display() -> Vec<String> {
    ["DISPLAY", "XAUTHORITY", "WAYLAND_DISPLAY"]
        .iter()
        .filter_map(|key| env::var(key).ok().map(|v| format!("{key}={v}")))
        .collect()
}

fn shell_quote(s: &str) -> String { format!("'{}'", s.replace('\'', "'\\''")) }

fn powershell_quote(s: &str) -> String { format!("'{}'", s.replace('\'', "''")) }

fn applescript_escape(s: &str) -> String { s.replace('\\', "\\\\").replace('"', "\\\"") }

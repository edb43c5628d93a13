use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use packwright_platform::elevate::{Elevator, PrivilegedRunner};
use packwright_platform::{HostFacts, SystemHost};
use packwright_resource::DirResources;
use packwright_session::InstallRootResolver;
use serde_json::json;

#[derive(Args, Clone, Debug)]
pub struct PlatformArg {
    /// Print the facts as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn platform(arg: PlatformArg, config: &Config) -> Result<()> {
    let host = SystemHost::new();
    let resources = DirResources::new(&config.resources);
    let platform = host.platform();
    let default_root = InstallRootResolver::new(&host, &resources).default_install_root();
    let runner = PrivilegedRunner::new(platform.clone());
    let network = host.network_identity().ok();
    let locale = host.locale().lookup_keys().into_iter().next().unwrap_or_default();

    if arg.json {
        let value = json!({
            "family": platform.family().to_string(),
            "name": platform.name,
            "version": platform.version,
            "arch": platform.arch.to_string(),
            "locale": locale,
            "user_home": host.user_home(),
            "user_name": host.user_name(),
            "host_name": network.as_ref().map(|n| &n.host_name),
            "ip_address": network.as_ref().map(|n| &n.ip_address),
            "default_install_root": default_root,
            "elevation_supported": runner.is_platform_supported(),
            "elevated": !runner.is_elevation_needed(),
        });
        let out = serde_json::to_string_pretty(&value).context("Failed to serialize platform facts")?;
        println!("{out}");
        return Ok(());
    }

    let row = |key: &str, value: &dyn std::fmt::Display| println!("  {:<22}{value}", style(key).bold());
    row("family", &platform.family());
    row("os", &format!("{} {}", platform.name, platform.version));
    row("arch", &platform.arch);
    row("locale", &locale);
    if let Some(home) = host.user_home() {
        row("user home", &home.display());
    }
    if let Some(network) = &network {
        row("host", &format!("{} ({})", network.host_name, network.ip_address));
    }
    row("default install root", &default_root.display());
    row("elevation supported", &runner.is_platform_supported());
    row("elevated", &!runner.is_elevation_needed());
    Ok(())
}

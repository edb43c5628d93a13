use crate::config::Config;
use crate::ui::ConsoleNotifier;
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use packwright_platform::{Locale, SystemHost};
use packwright_resource::DirResources;
use packwright_session::{Bootstrap, InstallSession, SessionBootstrap, StaticConditions};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Clone, Debug)]
pub struct BootstrapArg {
    /// Resource directory, overrides the configured one
    #[arg(short, long)]
    pub resources: Option<PathBuf>,

    /// Locale such as `fr_FR`, overrides the configured one
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Print the session as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn bootstrap(arg: BootstrapArg, config: &Config) -> Result<()> {
    let root = arg.resources.unwrap_or_else(|| config.resources.clone());
    if !root.is_dir() {
        anyhow::bail!("resource directory {} does not exist", root.display());
    }
    let resources = DirResources::new(&root);

    let mut host = SystemHost::new();
    if let Some(tag) = arg.locale.as_deref().or(config.locale.as_deref()) {
        let locale = Locale::parse(tag).with_context(|| format!("invalid locale '{tag}'"))?;
        host = host.with_locale(locale);
    }

    let conditions: StaticConditions = config.conditions.clone().into_iter().collect();
    let notifier = ConsoleNotifier;

    let outcome = SessionBootstrap::new(&resources, &host)
        .conditions(&conditions)
        .notifier(&notifier)
        .run()
        .with_context(|| format!("Failed to bootstrap installer from {}", root.display()))?;

    match outcome {
        Bootstrap::Ready(session) if arg.json => print_json(&session),
        Bootstrap::Ready(session) => {
            print_summary(&session);
            Ok(())
        }
        Bootstrap::HandedOff => {
            info!("elevated installer finished, exiting");
            std::process::exit(0);
        }
    }
}

fn print_json(session: &InstallSession) -> Result<()> {
    let names = |packs: &[packwright_model::Pack]| packs.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
    let actions = session.custom_actions();
    let value = json!({
        "app_name": session.info().app_name,
        "app_version": session.info().app_version,
        "install_path": session.install_path(),
        "platform": session.platform().name,
        "locale": session.locale().lookup_keys().first().cloned(),
        "panels": session.panels_order().iter().map(|p| &p.class_name).collect::<Vec<_>>(),
        "available_packs": names(session.available_packs()),
        "selected_packs": names(session.selected_packs()),
        "custom_actions": {
            "installer_listeners": actions.installer_listeners().iter().map(|l| l.name()).collect::<Vec<_>>(),
            "uninstaller_listeners": actions.uninstaller_listeners().len(),
            "uninstaller_jars": actions.uninstaller_jars().len(),
            "uninstaller_libs": actions.uninstaller_libs().len(),
        },
        "reboot_action": session.info().reboot_action,
        "requirements": session.installer_requirements(),
        "dynamic_variables": session.dynamic_variables(),
        "variables": session.variables(),
    });
    let out = serde_json::to_string_pretty(&value).context("Failed to serialize session")?;
    println!("{out}");
    Ok(())
}

fn print_summary(session: &InstallSession) {
    let info = session.info();
    println!(
        "{} {} {}",
        style("Installer").bold(),
        style(&info.app_name).cyan().bold(),
        style(&info.app_version).dim()
    );
    println!("  install path   {}", session.install_path().display());
    println!("  panels         {}", session.panels_order().len());
    println!(
        "  packs          {} available, {} selected",
        session.available_packs().len(),
        session.selected_packs().len()
    );
    for pack in session.available_packs() {
        let mark = if session.selected_packs().iter().any(|p| p.name == pack.name) {
            style("[x]").green()
        } else {
            style("[ ]").dim()
        };
        println!("    {mark} {}", pack.name);
    }
    let actions = session.custom_actions();
    println!(
        "  custom actions {} listeners, {} uninstaller listeners, {} jars, {} libs",
        actions.installer_listeners().len(),
        actions.uninstaller_listeners().len(),
        actions.uninstaller_jars().len(),
        actions.uninstaller_libs().len()
    );
    println!("  requirements   {}", session.installer_requirements().len());
    println!("  variables      {}", session.variables().len());
}

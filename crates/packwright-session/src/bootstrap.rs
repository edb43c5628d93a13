//! Session bootstrap pipeline.
//!
//! Runs once per process, before the first panel is shown:
//!
//! 1. application info and the first variable layer
//! 2. default install root, host facts, system properties
//! 3. install path, panel order, packs
//! 4. author defaults from `vars`
//! 5. custom actions, then privilege elevation
//! 6. reboot action, langpack, dynamic variables, requirements

use crate::condition::{ConditionEngine, StaticConditions};
use crate::elevation::{ElevationOutcome, ElevationResolver};
use crate::environment;
use crate::error::Result;
use crate::install_root::InstallRootResolver;
use crate::notify::{LogNotifier, Notifier};
use crate::reboot::resolve_reboot_action;
use crate::registry::{CustomActionRegistry, ListenerFactories};
use crate::session::InstallSession;
use packwright_model::{
    ApplicationInfo, CustomActionRecord, DynamicVariables, InstallerRequirement, Pack, Panel, VariableEnvironment,
    keys,
};
use packwright_platform::HostFacts;
use packwright_platform::elevate::{Elevator, PrivilegedRunner};
use packwright_resource::{ResourceProvider, load, load_optional, names};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

static NO_CONDITIONS: StaticConditions = StaticConditions::new();
static NO_LISTENERS: ListenerFactories = ListenerFactories::new();
static LOG_NOTIFIER: LogNotifier = LogNotifier;
static PRIVILEGED_RUNNER: Lazy<PrivilegedRunner> = Lazy::new(PrivilegedRunner::default);

/// Author defaults; a `null` value leaves the variable untouched.
type UserDefaults = BTreeMap<String, Option<String>>;

#[derive(Debug)]
pub enum Bootstrap {
    Ready(Box<InstallSession>),
    /// An elevated copy of the installer completed the installation; this
    /// process should exit with code 0.
    HandedOff,
}

impl Bootstrap {
    pub fn session(self) -> Option<InstallSession> {
        match self {
            Self::Ready(session) => Some(*session),
            Self::HandedOff => None,
        }
    }
}

pub struct SessionBootstrap<'a> {
    resources:  &'a dyn ResourceProvider,
    host:       &'a dyn HostFacts,
    conditions: &'a dyn ConditionEngine,
    notifier:   &'a dyn Notifier,
    elevator:   &'a dyn Elevator,
    listeners:  &'a ListenerFactories,
}

impl<'a> SessionBootstrap<'a> {
    /// Bootstrap with no conditions, no listeners, log-only warnings and the
    /// platform's own elevation tooling.
    pub fn new(resources: &'a dyn ResourceProvider, host: &'a dyn HostFacts) -> Self {
        Self {
            resources,
            host,
            conditions: &NO_CONDITIONS,
            notifier: &LOG_NOTIFIER,
            elevator: &*PRIVILEGED_RUNNER,
            listeners: &NO_LISTENERS,
        }
    }

    pub fn conditions(mut self, conditions: &'a dyn ConditionEngine) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn notifier(mut self, notifier: &'a dyn Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn elevator(mut self, elevator: &'a dyn Elevator) -> Self {
        self.elevator = elevator;
        self
    }

    pub fn listeners(mut self, listeners: &'a ListenerFactories) -> Self {
        self.listeners = listeners;
        self
    }

    pub fn run(&self) -> Result<Bootstrap> {
        let platform = self.host.platform();
        let locale = self.host.locale();
        info!(platform = %platform.name, version = %platform.version, arch = %platform.arch, "bootstrapping installer session");

        let user_defaults: UserDefaults = load(self.resources, names::VARIABLES)?;
        let mut info: ApplicationInfo = load(self.resources, names::INFO)?;
        debug!(app = %info.app_name, version = %info.app_version, "loaded application info");

        let mut variables = VariableEnvironment::new();
        environment::apply_info(&mut variables, &info);

        let default_root = InstallRootResolver::new(self.host, self.resources).default_install_root();
        environment::apply_host_facts(&mut variables, self.host, &default_root);
        environment::apply_system_properties(&mut variables, self.host.system_properties());

        let install_path = self.install_path(&info, &variables, &default_root);
        variables.set(keys::INSTALL_PATH, install_path.as_str());

        let panels_order: Vec<Panel> = load(self.resources, names::PANELS_ORDER)?;
        let all_packs: Vec<Pack> = load(self.resources, names::PACKS)?;
        let available_packs: Vec<Pack> = all_packs.iter().filter(|p| p.applies_to(&platform)).cloned().collect();
        let selected_packs: Vec<Pack> = available_packs.iter().filter(|p| p.preselected).cloned().collect();
        debug!(
            declared = all_packs.len(),
            available = available_packs.len(),
            selected = selected_packs.len(),
            "loaded packs"
        );

        environment::apply_user_defaults(&mut variables, user_defaults);

        let records: Vec<CustomActionRecord> =
            load_optional(self.resources, names::CUSTOM_DATA)?.unwrap_or_default();
        let custom_actions = CustomActionRegistry::build(records, &platform, self.listeners)?;

        let elevation = ElevationResolver::new(self.elevator, self.conditions, self.notifier);
        if elevation.resolve(&info) == ElevationOutcome::HandOff {
            info!("installation handed off to elevated installer");
            return Ok(Bootstrap::HandedOff);
        }

        let reboot_action = resolve_reboot_action(&mut info, self.conditions);
        debug!(?reboot_action, "resolved reboot action");

        let custom_langpack = self.optional_bytes(names::CUSTOM_LANGPACK);
        let dynamic_variables: DynamicVariables = self.optional_record(names::DYNAMIC_VARIABLES);
        let installer_requirements: Vec<InstallerRequirement> = load(self.resources, names::INSTALLER_REQUIREMENTS)?;

        // Author defaults may have replaced INSTALL_PATH.
        let install_path = PathBuf::from(variables.get(keys::INSTALL_PATH).unwrap_or(install_path.as_str()));
        info!(install_path = %install_path.display(), "installer session ready");

        Ok(Bootstrap::Ready(Box::new(InstallSession {
            info,
            variables,
            platform,
            locale,
            install_path,
            panels_order,
            all_packs,
            available_packs,
            selected_packs,
            custom_actions,
            custom_langpack,
            dynamic_variables,
            installer_requirements,
        })))
    }

    /// `<root><sep><app_name>`, or `<root><sep><sub_path>` with variables
    /// substituted and separators translated for the host.
    fn install_path(&self, info: &ApplicationInfo, variables: &VariableEnvironment, root: &Path) -> String {
        let sep = self.host.file_separator();
        let leaf = match info.installation_sub_path.as_deref() {
            Some(sub_path) => variables.substitute(sub_path).replace(['/', '\\'], sep),
            None => info.app_name.clone(),
        };
        let leaf = leaf.trim_start_matches(sep);

        let mut path = root.to_string_lossy().into_owned();
        if !path.ends_with(sep) {
            path.push_str(sep);
        }
        path.push_str(leaf);
        path
    }

    fn optional_bytes(&self, name: &str) -> Option<Vec<u8>> {
        match self.resources.open(name) {
            Ok(Some(bytes)) => Some(bytes),
            Ok(None) => {
                debug!("no {name} resource");
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to read {name}, skipping");
                None
            }
        }
    }

    fn optional_record<T: serde::de::DeserializeOwned + Default>(&self, name: &str) -> T {
        match load_optional(self.resources, name) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!("no {name} resource");
                T::default()
            }
            Err(e) => {
                warn!(error = %e, "failed to load {name}, using defaults");
                T::default()
            }
        }
    }
}

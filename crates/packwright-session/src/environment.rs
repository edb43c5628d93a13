//! Variable merge steps, applied in this order by the bootstrap:
//!
//! 1. application info
//! 2. host facts
//! 3. system properties as `SYSTEM_*`
//! 4. author supplied defaults
//!
//! Each step overwrites what earlier steps stored under the same name.

use packwright_model::{ApplicationInfo, VariableEnvironment, keys, system_variable_name};
use packwright_platform::HostFacts;
use std::path::Path;
use tracing::debug;

pub fn apply_info(env: &mut VariableEnvironment, info: &ApplicationInfo) {
    env.set(keys::APP_NAME, info.app_name.as_str());
    env.set(keys::APP_VER, info.app_version.as_str());
    env.set_opt(keys::APP_URL, info.app_url.as_deref());
    env.set_opt(keys::UNINSTALLER_CONDITION, info.uninstaller_condition.as_deref());
}

pub fn apply_host_facts(env: &mut VariableEnvironment, host: &dyn HostFacts, default_root: &Path) {
    let (host_name, ip_address) = match host.network_identity() {
        Ok(id) => (id.host_name, id.ip_address),
        Err(e) => {
            debug!(error = %e, "host name lookup failed");
            (String::new(), String::new())
        }
    };

    env.set(keys::APPLICATIONS_DEFAULT_ROOT, default_root.to_string_lossy());
    env.set_opt(keys::JAVA_HOME, host.property("java.home"));
    env.set_opt(keys::CLASS_PATH, host.property("java.class.path"));
    env.set_opt(
        keys::USER_HOME,
        host.user_home().map(|p| p.to_string_lossy().into_owned()),
    );
    env.set_opt(keys::USER_NAME, host.user_name());
    env.set(keys::IP_ADDRESS, ip_address);
    env.set(keys::HOST_NAME, host_name);
    env.set(keys::FILE_SEPARATOR, host.file_separator());
}

pub fn apply_system_properties<I>(env: &mut VariableEnvironment, properties: I)
where
    I: IntoIterator<Item = (String, Option<String>)>,
{
    for (name, value) in properties {
        env.set_opt(system_variable_name(&name), value);
    }
}

pub fn apply_user_defaults<I>(env: &mut VariableEnvironment, defaults: I)
where
    I: IntoIterator<Item = (String, Option<String>)>,
{
    for (name, value) in defaults {
        env.set_opt(name, value);
    }
}

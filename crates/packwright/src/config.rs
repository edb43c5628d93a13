//! Layered configuration: built-in defaults, then `packwright.toml`, then
//! `PACKWRIGHT_*` environment variables.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "packwright.toml";
pub const ENV_PREFIX: &str = "PACKWRIGHT_";
/// Log filter variable, read directly by the subscriber.
pub const LOG_ENV: &str = "PACKWRIGHT_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the installer resources.
    pub resources:  PathBuf,
    /// Locale override such as `fr_FR`; detected from the host when unset.
    pub locale:     Option<String>,
    /// Default log filter when `PACKWRIGHT_LOG` is not set.
    pub log:        String,
    /// Fixed values for guard conditions.
    pub conditions: BTreeMap<String, bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resources:  PathBuf::from("resources"),
            locale:     None,
            log:        "info".to_string(),
            conditions: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["log", "privileged"]))
    }

    pub fn load(path: &Path) -> Result<Self, figment::Error> { Self::figment(path).extract() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(Path::new(CONFIG_FILE))?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_values() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                resources = "dist/resources"
                locale = "de_AT"
                log = "debug"

                [conditions]
                "has.java" = true
                "is.server" = false
                "#,
            )?;
            let config = Config::load(Path::new(CONFIG_FILE))?;
            assert_eq!(config.resources, PathBuf::from("dist/resources"));
            assert_eq!(config.locale.as_deref(), Some("de_AT"));
            assert_eq!(config.log, "debug");
            assert_eq!(config.conditions.get("has.java"), Some(&true));
            assert_eq!(config.conditions.get("is.server"), Some(&false));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, r#"resources = "from-file""#)?;
            jail.set_env("PACKWRIGHT_RESOURCES", "from-env");
            let config = Config::load(Path::new(CONFIG_FILE))?;
            assert_eq!(config.resources, PathBuf::from("from-env"));
            Ok(())
        });
    }

    #[test]
    fn test_privileged_marker_not_config() {
        Jail::expect_with(|jail| {
            jail.set_env("PACKWRIGHT_PRIVILEGED", "1");
            jail.set_env("PACKWRIGHT_LOG", "trace");
            let config = Config::load(Path::new(CONFIG_FILE))?;
            assert_eq!(config.log, "info");
            Ok(())
        });
    }
}

//! Installer variables.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static REFERENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{(?<braced>[A-Za-z0-9_.\-]+)\}|\$(?<bare>[A-Za-z_][A-Za-z0-9_]*)").unwrap()
});

/// Built-in variable names.
pub mod keys {
    pub const APP_NAME: &str = "APP_NAME";
    pub const APP_VER: &str = "APP_VER";
    pub const APP_URL: &str = "APP_URL";
    pub const UNINSTALLER_CONDITION: &str = "UNINSTALLER_CONDITION";
    pub const APPLICATIONS_DEFAULT_ROOT: &str = "APPLICATIONS_DEFAULT_ROOT";
    pub const INSTALL_PATH: &str = "INSTALL_PATH";
    pub const JAVA_HOME: &str = "JAVA_HOME";
    pub const CLASS_PATH: &str = "CLASS_PATH";
    pub const USER_HOME: &str = "USER_HOME";
    pub const USER_NAME: &str = "USER_NAME";
    pub const IP_ADDRESS: &str = "IP_ADDRESS";
    pub const HOST_NAME: &str = "HOST_NAME";
    pub const FILE_SEPARATOR: &str = "FILE_SEPARATOR";

    /// Prefix of variables mirrored from system properties.
    pub const SYSTEM_PREFIX: &str = "SYSTEM_";
}

/// Name/value store. A later `set` always replaces an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableEnvironment {
    vars: BTreeMap<String, String>,
}

impl VariableEnvironment {
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Stores `value` if present; an absent value leaves the store untouched.
    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    /// Stores every pair in order, each overwriting what came before.
    pub fn merge<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in entries {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> { self.vars.get(name).map(String::as_str) }

    pub fn contains(&self, name: &str) -> bool { self.vars.contains_key(name) }

    pub fn len(&self) -> usize { self.vars.len() }

    pub fn is_empty(&self) -> bool { self.vars.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replaces `$NAME` and `${NAME}` with known values. Unknown references
    /// are kept verbatim.
    pub fn substitute(&self, input: &str) -> String {
        REFERENCE_REGEX
            .replace_all(input, |caps: &Captures| {
                let name = caps
                    .name("braced")
                    .or_else(|| caps.name("bare"))
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                match self.get(name) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

/// System property `name` as a variable name: `java.version` becomes `SYSTEM_java_version`.
pub fn system_variable_name(property: &str) -> String {
    format!("{}{}", keys::SYSTEM_PREFIX, property.replace('.', "_"))
}

//! Read-only facts about the host the installer runs on.
//!
//! [`HostFacts`] is the seam every platform-dependent decision goes through,
//! so resolvers can be exercised against a fake host in tests.

use crate::dir;
use crate::error::{Error, Result};
use crate::os::Platform;
use std::env;
use std::net::{IpAddr, ToSocketAddrs};
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};
use tracing::debug;

/// Language and optional country of the user's locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub country:  Option<String>,
}

impl Locale {
    pub const ENGLISH: &'static str = "en";

    pub fn new(language: impl Into<String>, country: Option<&str>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            country:  country.filter(|c| !c.is_empty()).map(str::to_ascii_uppercase),
        }
    }

    /// Parses POSIX tags such as `fr_FR.UTF-8` and BCP 47 tags such as
    /// `de-AT` or `zh-Hans-CN`. Script and variant subtags are skipped.
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.split(['.', '@']).next()?.trim();
        if tag.is_empty() || tag == "C" || tag == "POSIX" {
            return None;
        }
        let mut parts = tag.split(['_', '-']);
        let language = parts.next()?;
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let country = parts.find(|part| is_region(part));
        Some(Self::new(language, country))
    }

    /// Lookup keys from most to least specific: `language_COUNTRY`, `language`, `en`.
    pub fn lookup_keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(3);
        if let Some(country) = &self.country {
            keys.push(format!("{}_{}", self.language, country));
        }
        keys.push(self.language.clone());
        if self.language != Self::ENGLISH {
            keys.push(Self::ENGLISH.to_string());
        }
        keys
    }
}

/// Two-letter country code or three-digit area code.
fn is_region(subtag: &str) -> bool {
    match subtag.len() {
        2 => subtag.chars().all(|c| c.is_ascii_alphabetic()),
        3 => subtag.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

impl Default for Locale {
    fn default() -> Self { Self::new(Self::ENGLISH, None) }
}

/// Resolved local host name and address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkIdentity {
    pub host_name:  String,
    pub ip_address: String,
}

pub trait HostFacts {
    fn platform(&self) -> Platform;

    fn env_var(&self, key: &str) -> Option<String>;

    /// Named system properties. A `None` value means the property exists but
    /// has no value on this host.
    fn system_properties(&self) -> Vec<(String, Option<String>)>;

    fn user_home(&self) -> Option<PathBuf>;

    fn user_name(&self) -> Option<String>;

    fn network_identity(&self) -> Result<NetworkIdentity>;

    fn locale(&self) -> Locale;

    fn is_writable(&self, path: &Path) -> bool;

    fn property(&self, name: &str) -> Option<String> {
        self.system_properties()
            .into_iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value)
    }

    fn file_separator(&self) -> &'static str {
        if self.platform().is_windows() { "\\" } else { "/" }
    }
}

/// Facts read from the real process environment.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    locale: Option<Locale>,
}

impl SystemHost {
    pub fn new() -> Self { Self::default() }

    /// Pins the locale instead of reading it from the environment.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }
}

impl HostFacts for SystemHost {
    fn platform(&self) -> Platform { Platform::current() }

    fn env_var(&self, key: &str) -> Option<String> { env::var(key).ok() }

    fn system_properties(&self) -> Vec<(String, Option<String>)> {
        let platform = self.platform();
        let locale = self.locale();
        let path = |p: Option<PathBuf>| p.map(|p| p.to_string_lossy().into_owned());

        vec![
            ("os.name".into(), Some(platform.name.clone())),
            ("os.version".into(), Some(platform.version.clone()).filter(|v| !v.is_empty())),
            ("os.arch".into(), Some(platform.arch.to_string())),
            ("os.family".into(), Some(platform.family().to_string())),
            ("file.separator".into(), Some(MAIN_SEPARATOR_STR.to_string())),
            ("path.separator".into(), Some(if cfg!(windows) { ";" } else { ":" }.to_string())),
            ("line.separator".into(), Some(if cfg!(windows) { "\r\n" } else { "\n" }.to_string())),
            ("user.home".into(), path(self.user_home())),
            ("user.name".into(), self.user_name()),
            ("user.dir".into(), path(env::current_dir().ok())),
            ("user.language".into(), Some(locale.language.clone())),
            ("user.country".into(), locale.country.clone()),
            ("java.home".into(), self.env_var("JAVA_HOME")),
            ("java.class.path".into(), self.env_var("CLASSPATH")),
            ("java.io.tmpdir".into(), path(Some(env::temp_dir()))),
            ("packwright.exe".into(), path(env::current_exe().ok())),
        ]
    }

    fn user_home(&self) -> Option<PathBuf> { dir::user_home() }

    fn user_name(&self) -> Option<String> {
        self.env_var("USER")
            .or_else(|| self.env_var("USERNAME"))
            .or_else(|| self.env_var("LOGNAME"))
    }

    fn network_identity(&self) -> Result<NetworkIdentity> {
        let host_name = sysinfo::System::host_name().ok_or(Error::NoHostName)?;
        let ip = resolve_ip(&host_name)?;
        Ok(NetworkIdentity {
            host_name,
            ip_address: ip.to_string(),
        })
    }

    fn locale(&self) -> Locale {
        if let Some(locale) = &self.locale {
            return locale.clone();
        }
        detect_locale(|key| self.env_var(key), sys_locale::get_locale)
    }

    fn is_writable(&self, path: &Path) -> bool { dir::is_writable(path) }
}

/// POSIX locale variables win, then the user locale reported by the OS.
/// Windows and macOS keep their setting outside the environment.
fn detect_locale(
    env_var: impl Fn(&str) -> Option<String>,
    os_locale: impl FnOnce() -> Option<String>,
) -> Locale {
    let from_env = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| env_var(key))
        .find_map(|tag| Locale::parse(&tag));
    if let Some(locale) = from_env {
        return locale;
    }
    match os_locale().as_deref().and_then(Locale::parse) {
        Some(locale) => locale,
        None => {
            debug!("no user locale found, using English");
            Locale::default()
        }
    }
}

fn resolve_ip(host: &str) -> Result<IpAddr> {
    let mut addrs = (host, 0).to_socket_addrs().map_err(|source| Error::HostLookup {
        host: host.to_string(),
        source,
    })?;
    addrs
        .next()
        .map(|addr| addr.ip())
        .ok_or_else(|| Error::NoAddress(host.to_string()))
}

//! In-crate test doubles.

use crate::notify::Notifier;
use packwright_platform::arch::Arch;
use packwright_platform::elevate::Elevator;
use packwright_platform::os::Distro;
use packwright_platform::{HostFacts, Locale, NetworkIdentity, OS, Platform};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub struct FakeHost {
    pub platform:   Platform,
    pub env:        BTreeMap<String, String>,
    pub properties: Vec<(String, Option<String>)>,
    pub home:       Option<PathBuf>,
    pub user:       Option<String>,
    pub network:    Option<NetworkIdentity>,
    pub locale:     Locale,
    pub writable:   Vec<PathBuf>,
}

impl FakeHost {
    pub fn linux() -> Self {
        Self {
            platform:   Platform::new(OS::Linux(Distro::Debian), Arch::X86_64, "Linux", "6.1"),
            env:        BTreeMap::new(),
            properties: Vec::new(),
            home:       Some(PathBuf::from("/home/ada")),
            user:       Some("ada".into()),
            network:    None,
            locale:     Locale::default(),
            writable:   Vec::new(),
        }
    }

    pub fn windows() -> Self {
        Self {
            platform: Platform::new(OS::Windows, Arch::X86_64, "Windows", "10.0"),
            home: Some(PathBuf::from("D:\\Users\\ada")),
            ..Self::linux()
        }
    }

    pub fn mac() -> Self {
        Self {
            platform: Platform::new(OS::Macos, Arch::ARM64, "macOS", "14.4"),
            home: Some(PathBuf::from("/Users/ada")),
            ..Self::linux()
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_network(mut self, host_name: &str, ip_address: &str) -> Self {
        self.network = Some(NetworkIdentity {
            host_name:  host_name.into(),
            ip_address: ip_address.into(),
        });
        self
    }

    pub fn writable(mut self, path: &str) -> Self {
        self.writable.push(PathBuf::from(path));
        self
    }
}

impl HostFacts for FakeHost {
    fn platform(&self) -> Platform { self.platform.clone() }

    fn env_var(&self, key: &str) -> Option<String> { self.env.get(key).cloned() }

    fn system_properties(&self) -> Vec<(String, Option<String>)> { self.properties.clone() }

    fn user_home(&self) -> Option<PathBuf> { self.home.clone() }

    fn user_name(&self) -> Option<String> { self.user.clone() }

    fn network_identity(&self) -> packwright_platform::Result<NetworkIdentity> {
        self.network.clone().ok_or(packwright_platform::Error::NoHostName)
    }

    fn locale(&self) -> Locale { self.locale.clone() }

    fn is_writable(&self, path: &Path) -> bool { self.writable.iter().any(|p| p == path) }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub warnings: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) { self.warnings.borrow_mut().push(message.to_string()); }
}

pub struct FakeElevator {
    pub privileged_relaunch: bool,
    pub supported:           bool,
    pub needed:              bool,
    pub exit_code:           Option<i32>,
    pub relaunches:          Cell<usize>,
}

impl FakeElevator {
    /// Supported, needed, child exits with `exit_code` (`None` fails to spawn).
    pub fn returning(exit_code: Option<i32>) -> Self {
        Self {
            privileged_relaunch: false,
            supported: true,
            needed: true,
            exit_code,
            relaunches: Cell::new(0),
        }
    }
}

impl Elevator for FakeElevator {
    fn is_privileged_relaunch(&self) -> bool { self.privileged_relaunch }

    fn is_platform_supported(&self) -> bool { self.supported }

    fn is_elevation_needed(&self) -> bool { self.needed }

    fn relaunch_elevated(&self) -> packwright_platform::Result<i32> {
        self.relaunches.set(self.relaunches.get() + 1);
        self.exit_code.ok_or(packwright_platform::Error::CommandNotFound {
            cmd: "pkexec".into(),
        })
    }
}

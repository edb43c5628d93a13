//! Operating system, distribution and platform family detection.

use crate::arch::{self, Arch};
use once_cell::sync::Lazy;
use std::fmt;
use std::fs;
use sysinfo::System;

/// Operating system types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OS {
    Windows,
    Macos,
    Linux(Distro),
    Unknown,
}

/// Linux distribution types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distro {
    Debian,
    Ubuntu,
    LinuxMint,
    Fedora,
    RedHatEnterpriseLinux,
    CentOS,
    ArchLinux,
    Manjaro,
    OpenSUSE,
    Gentoo,
    AlpineLinux,
    KaliLinux,
    Unknown,
}

/// Coarse platform family used by install-root defaults and constraint tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Windows,
    Mac,
    Unix,
}

impl Family {
    /// Matches a family tag as written in pack and custom-action constraints.
    ///
    /// `unix` covers every non-Windows family, `linux` only plain unix hosts.
    pub fn matches_tag(self, tag: &str) -> bool {
        match tag.trim().to_ascii_lowercase().as_str() {
            "windows" | "win" => self == Family::Windows,
            "mac" | "macos" | "macosx" | "osx" | "darwin" => self == Family::Mac,
            "unix" => self != Family::Windows,
            "linux" => self == Family::Unix,
            _ => false,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Family::Windows => "windows",
            Family::Mac => "mac",
            Family::Unix => "unix",
        };
        f.write_str(s)
    }
}

impl OS {
    pub fn family(self) -> Family {
        match self {
            OS::Windows => Family::Windows,
            OS::Macos => Family::Mac,
            OS::Linux(_) | OS::Unknown => Family::Unix,
        }
    }
}

/// Snapshot of the platform the installer runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os:      OS,
    pub arch:    Arch,
    pub name:    String,
    pub version: String,
}

impl Platform {
    pub fn new(os: OS, arch: Arch, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            os,
            arch,
            name: name.into(),
            version: version.into(),
        }
    }

    /// The platform of the running process.
    pub fn current() -> Self { SYSTEM_INFO.platform.clone() }

    pub fn family(&self) -> Family { self.os.family() }

    pub fn is_windows(&self) -> bool { self.family() == Family::Windows }

}

static SYSTEM_INFO: Lazy<SystemInfo> = Lazy::new(SystemInfo::load);

struct SystemInfo {
    platform: Platform,
}

impl SystemInfo {
    fn load() -> Self {
        let os = match std::env::consts::OS {
            "windows" => OS::Windows,
            "macos" => OS::Macos,
            "linux" => OS::Linux(detect_distro()),
            _ => OS::Unknown,
        };

        let name = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
        let version = System::os_version().unwrap_or_default();

        Self {
            platform: Platform::new(os, arch::detect(), name, version),
        }
    }
}

fn detect_distro() -> Distro {
    let content = fs::read_to_string("/etc/os-release").unwrap_or_default();
    parse_distro(&content)
}

fn parse_distro(os_release: &str) -> Distro {
    for line in os_release.lines() {
        if let Some(id) = line.strip_prefix("ID=") {
            return match id.trim_matches('"') {
                "debian" => Distro::Debian,
                "ubuntu" => Distro::Ubuntu,
                "linuxmint" => Distro::LinuxMint,
                "fedora" => Distro::Fedora,
                "rhel" | "redhat" => Distro::RedHatEnterpriseLinux,
                "centos" => Distro::CentOS,
                "arch" => Distro::ArchLinux,
                "manjaro" => Distro::Manjaro,
                "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" => Distro::OpenSUSE,
                "gentoo" => Distro::Gentoo,
                "alpine" => Distro::AlpineLinux,
                "kali" => Distro::KaliLinux,
                _ => Distro::Unknown,
            };
        }
    }

    Distro::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_platform_matches_cfg() {
        let platform = Platform::current();
        #[cfg(target_os = "windows")]
        assert_eq!(platform.family(), Family::Windows);
        #[cfg(target_os = "macos")]
        assert_eq!(platform.family(), Family::Mac);
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        assert_eq!(platform.family(), Family::Unix);
    }

    #[test]
    fn test_parse_distro_quoted_id() {
        let content = "NAME=\"CentOS Linux\"\nID=\"centos\"\n";
        assert_eq!(parse_distro(content), Distro::CentOS);
    }

    #[test]
    fn test_parse_distro_ignores_id_like() {
        let content = "ID_LIKE=debian\nID=ubuntu\n";
        assert_eq!(parse_distro(content), Distro::Ubuntu);
    }

    #[test]
    fn test_parse_distro_missing() {
        assert_eq!(parse_distro(""), Distro::Unknown);
    }

    #[test]
    fn test_family_tags() {
        assert!(Family::Windows.matches_tag("Windows"));
        assert!(!Family::Windows.matches_tag("unix"));
        assert!(Family::Mac.matches_tag("osx"));
        assert!(Family::Mac.matches_tag("unix"));
        assert!(!Family::Mac.matches_tag("linux"));
        assert!(Family::Unix.matches_tag("linux"));
        assert!(Family::Unix.matches_tag("unix"));
        assert!(!Family::Unix.matches_tag("solaris"));
    }

    #[test]
    fn test_linux_family() {
        assert_eq!(OS::Linux(Distro::Debian).family(), Family::Unix);
        assert_eq!(OS::Unknown.family(), Family::Unix);
    }
}

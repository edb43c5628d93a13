//! Default installation root per platform family.
//!
//! - Windows: `%ProgramFiles%`, else `<drive>` + localized name from the
//!   `win32-defaultpaths.properties` table, else `C:\Program Files`
//! - macOS: `/Applications`
//! - Unix: `/usr/local` when writable, else the user's home
//!
//! Resolution never fails; every error falls through to the next candidate.

use packwright_platform::{Family, HostFacts};
use packwright_resource::{Properties, ResourceProvider, names};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const WINDOWS_FALLBACK_ROOT: &str = "C:\\Program Files";
pub const MAC_ROOT: &str = "/Applications";
pub const UNIX_SYSTEM_ROOT: &str = "/usr/local";

const PROGRAM_FILES_ENV: &str = "ProgramFiles";

pub struct InstallRootResolver<'a> {
    host:      &'a dyn HostFacts,
    resources: &'a dyn ResourceProvider,
}

impl<'a> InstallRootResolver<'a> {
    pub fn new(host: &'a dyn HostFacts, resources: &'a dyn ResourceProvider) -> Self { Self { host, resources } }

    pub fn default_install_root(&self) -> PathBuf {
        let root = match self.host.platform().family() {
            Family::Windows => self.windows_root(),
            Family::Mac => MAC_ROOT.to_string(),
            Family::Unix => self.unix_root(),
        };
        debug!(root = %root, "resolved default install root");
        PathBuf::from(root)
    }

    fn windows_root(&self) -> String {
        match self.host.env_var(PROGRAM_FILES_ENV) {
            Some(path) if !path.is_empty() => path,
            _ => self.windows_root_from_table(),
        }
    }

    fn windows_root_from_table(&self) -> String {
        match self.localized_program_files() {
            Some(path) => path,
            None => {
                warn!("no localized program files directory, using {WINDOWS_FALLBACK_ROOT}");
                WINDOWS_FALLBACK_ROOT.to_string()
            }
        }
    }

    fn localized_program_files(&self) -> Option<String> {
        let name = names::WINDOWS_DEFAULT_PATHS;
        let bytes = match self.resources.open(name) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                debug!(error = %e, "failed to load {name}");
                return None;
            }
        };
        let table = Properties::from_bytes(name, &bytes).ok()?;

        let home = self.host.user_home()?;
        let mut path = drive_prefix(&home.to_string_lossy());

        let keys = self.host.locale().lookup_keys();
        let suffix = table.first_of(keys.iter().map(String::as_str))?;
        path.push_str(suffix);
        Some(path)
    }

    fn unix_root(&self) -> String {
        if self.host.is_writable(Path::new(UNIX_SYSTEM_ROOT)) {
            return UNIX_SYSTEM_ROOT.to_string();
        }
        match self.host.user_home() {
            Some(home) => home.to_string_lossy().into_owned(),
            None => {
                warn!("user home unknown, falling back to {UNIX_SYSTEM_ROOT}");
                UNIX_SYSTEM_ROOT.to_string()
            }
        }
    }
}

/// Drive part of a Windows home path: its first three characters, with a
/// backslash added when only `X:` is available.
fn drive_prefix(home: &str) -> String {
    let mut drive: String = home.chars().take(3).collect();
    if drive.chars().count() == 2 {
        drive.push('\\');
    }
    drive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeHost;
    use packwright_platform::Locale;
    use packwright_resource::MemoryResources;

    const TABLE: &str = "# default program files per locale\nen=Program Files\nfr=Programmes\nde=Programme\n";

    fn table() -> MemoryResources { MemoryResources::new().with(names::WINDOWS_DEFAULT_PATHS, TABLE) }

    fn resolve(host: &FakeHost, resources: &MemoryResources) -> String {
        InstallRootResolver::new(host, resources)
            .default_install_root()
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_windows_env_wins() {
        let host = FakeHost::windows().with_env("ProgramFiles", "E:\\Apps");
        assert_eq!(resolve(&host, &table()), "E:\\Apps");
    }

    #[test]
    fn test_windows_empty_env_uses_table() {
        let host = FakeHost::windows().with_env("ProgramFiles", "");
        assert_eq!(resolve(&host, &table()), "D:\\Program Files");
    }

    #[test]
    fn test_windows_language_fallback() {
        let host = FakeHost::windows().with_locale(Locale::new("fr", Some("FR")));
        assert_eq!(resolve(&host, &table()), "D:\\Programmes");
    }

    #[test]
    fn test_windows_country_specific_key_first() {
        let resources = MemoryResources::new().with(
            names::WINDOWS_DEFAULT_PATHS,
            format!("{TABLE}de_AT=Programme AT\n"),
        );
        let host = FakeHost::windows().with_locale(Locale::new("de", Some("AT")));
        assert_eq!(resolve(&host, &resources), "D:\\Programme AT");
    }

    #[test]
    fn test_windows_english_fallback() {
        let host = FakeHost::windows().with_locale(Locale::new("ja", Some("JP")));
        assert_eq!(resolve(&host, &table()), "D:\\Program Files");
    }

    #[test]
    fn test_windows_missing_table_uses_literal() {
        let host = FakeHost::windows();
        assert_eq!(resolve(&host, &MemoryResources::new()), WINDOWS_FALLBACK_ROOT);
    }

    #[test]
    fn test_windows_table_without_match_uses_literal() {
        let resources = MemoryResources::new().with(names::WINDOWS_DEFAULT_PATHS, "it=Programmi\n");
        let host = FakeHost::windows().with_locale(Locale::new("fr", Some("FR")));
        assert_eq!(resolve(&host, &resources), WINDOWS_FALLBACK_ROOT);
    }

    #[test]
    fn test_windows_bare_drive_home() {
        let mut host = FakeHost::windows();
        host.home = Some(PathBuf::from("C:"));
        assert_eq!(resolve(&host, &table()), "C:\\Program Files");
    }

    #[test]
    fn test_mac_is_fixed() {
        assert_eq!(resolve(&FakeHost::mac(), &MemoryResources::new()), MAC_ROOT);
    }

    #[test]
    fn test_unix_writable_system_root() {
        let host = FakeHost::linux().writable(UNIX_SYSTEM_ROOT);
        assert_eq!(resolve(&host, &MemoryResources::new()), UNIX_SYSTEM_ROOT);
    }

    #[test]
    fn test_unix_falls_back_to_home() {
        assert_eq!(resolve(&FakeHost::linux(), &MemoryResources::new()), "/home/ada");
    }

    #[test]
    fn test_drive_prefix_full_path() {
        assert_eq!(drive_prefix("D:\\Users\\ada"), "D:\\");
    }

    #[test]
    fn test_drive_prefix_bare_drive() {
        assert_eq!(drive_prefix("E:"), "E:\\");
    }

    #[test]
    fn test_drive_prefix_exactly_three() {
        assert_eq!(drive_prefix("C:\\"), "C:\\");
    }
}

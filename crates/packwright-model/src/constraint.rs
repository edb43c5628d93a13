//! Platform constraints on packs, panels and custom actions.

use packwright_platform::Platform;
use serde::{Deserialize, Serialize};

/// One platform a constrained entity is restricted to.
///
/// Every attribute that is set must match; unset attributes match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsConstraint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family:  Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:    Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch:    Option<String>,
}

impl OsConstraint {
    pub fn family(family: impl Into<String>) -> Self {
        Self {
            family: Some(family.into()),
            ..Self::default()
        }
    }

    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    pub fn matches(&self, platform: &Platform) -> bool {
        let family = self
            .family
            .as_deref()
            .is_none_or(|f| platform.family().matches_tag(f));
        let name = self
            .name
            .as_deref()
            .is_none_or(|n| n.trim().eq_ignore_ascii_case(&platform.name));
        let version = self.version.as_deref().is_none_or(|v| {
            platform
                .version
                .to_ascii_lowercase()
                .starts_with(&v.trim().to_ascii_lowercase())
        });
        let arch = self.arch.as_deref().is_none_or(|a| platform.arch.matches_tag(a));

        family && name && version && arch
    }
}

/// Whether an entity carrying `constraints` applies on `platform`.
///
/// No constraints means no restriction. Otherwise a single matching
/// constraint is enough.
pub fn applies(constraints: &[OsConstraint], platform: &Platform) -> bool {
    constraints.is_empty() || constraints.iter().any(|c| c.matches(platform))
}

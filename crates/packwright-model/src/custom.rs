//! Custom actions registered by the installer author.

use crate::constraint::{self, OsConstraint};
use packwright_platform::Platform;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomActionRecord {
    #[serde(default)]
    pub os_constraints: Vec<OsConstraint>,
    #[serde(flatten)]
    pub action:         CustomAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomAction {
    /// Listener running inside the installer, built from its registered name.
    InstallerListener { class_name: String },
    /// Listener to embed into the uninstaller.
    UninstallerListener(CustomActionDescriptor),
    /// Archive whose entries are copied into the uninstaller.
    UninstallerJar(CustomActionDescriptor),
    /// Native library shipped with the uninstaller.
    UninstallerLib { contents: Vec<u8> },
}

/// Uninstaller-side payload, kept opaque by the installer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomActionDescriptor {
    #[serde(default)]
    pub listener_name: Option<String>,
    #[serde(default)]
    pub contents:      Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomActionKind {
    InstallerListener,
    UninstallerListener,
    UninstallerJar,
    UninstallerLib,
}

impl fmt::Display for CustomActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InstallerListener => "installer listener",
            Self::UninstallerListener => "uninstaller listener",
            Self::UninstallerJar => "uninstaller jar",
            Self::UninstallerLib => "uninstaller lib",
        };
        f.write_str(s)
    }
}

impl CustomAction {
    pub fn kind(&self) -> CustomActionKind {
        match self {
            Self::InstallerListener { .. } => CustomActionKind::InstallerListener,
            Self::UninstallerListener(_) => CustomActionKind::UninstallerListener,
            Self::UninstallerJar(_) => CustomActionKind::UninstallerJar,
            Self::UninstallerLib { .. } => CustomActionKind::UninstallerLib,
        }
    }
}

impl CustomActionRecord {
    pub fn new(action: CustomAction) -> Self {
        Self {
            os_constraints: Vec::new(),
            action,
        }
    }

    pub fn constraint(mut self, constraint: OsConstraint) -> Self {
        self.os_constraints.push(constraint);
        self
    }

    pub fn kind(&self) -> CustomActionKind { self.action.kind() }

    pub fn applies_to(&self, platform: &Platform) -> bool { constraint::applies(&self.os_constraints, platform) }
}

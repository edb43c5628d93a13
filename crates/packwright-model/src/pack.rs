use crate::constraint::{self, OsConstraint};
use packwright_platform::Platform;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An installable unit the user may select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub name:           String,
    #[serde(default)]
    pub id:             Option<String>,
    #[serde(default)]
    pub description:    String,
    #[serde(default)]
    pub os_constraints: Vec<OsConstraint>,
    #[serde(default)]
    pub preselected:    bool,
    #[serde(default)]
    pub required:       bool,
    #[serde(default)]
    pub hidden:         bool,
    /// Installed size in bytes.
    #[serde(default)]
    pub size:           u64,
    #[serde(default)]
    pub depends_on:     Vec<String>,
    #[serde(default)]
    pub condition:      Option<String>,
    #[serde(default)]
    pub metadata:       BTreeMap<String, String>,
}

impl Pack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            description: String::new(),
            os_constraints: Vec::new(),
            preselected: false,
            required: false,
            hidden: false,
            size: 0,
            depends_on: Vec::new(),
            condition: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn preselected(mut self, preselected: bool) -> Self {
        self.preselected = preselected;
        self
    }

    pub fn constraint(mut self, constraint: OsConstraint) -> Self {
        self.os_constraints.push(constraint);
        self
    }

    pub fn applies_to(&self, platform: &Platform) -> bool { constraint::applies(&self.os_constraints, platform) }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A precondition the installer checks before showing its first panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerRequirement {
    pub condition: String,
    pub message:   String,
}

/// One conditional assignment for a dynamic variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicVariable {
    pub value:      String,
    #[serde(default)]
    pub condition:  Option<String>,
    /// Evaluate only the first time the variable is refreshed.
    #[serde(default)]
    pub check_once: bool,
}

/// Dynamic variable rules keyed by variable name, in declaration order.
pub type DynamicVariables = BTreeMap<String, Vec<DynamicVariable>>;

use crate::constraint::OsConstraint;
use serde::{Deserialize, Serialize};

/// A UI panel in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub class_name:     String,
    #[serde(default)]
    pub id:             Option<String>,
    #[serde(default)]
    pub condition:      Option<String>,
    #[serde(default)]
    pub os_constraints: Vec<OsConstraint>,
}

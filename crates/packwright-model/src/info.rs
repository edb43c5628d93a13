use serde::{Deserialize, Serialize};

/// What the installer does about a reboot once installation finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebootAction {
    #[default]
    Ignore,
    Notice,
    Ask,
    Always,
}

/// Static description of the application being installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub app_name:    String,
    pub app_version: String,
    #[serde(default)]
    pub app_url:     Option<String>,
    #[serde(default)]
    pub authors:     Vec<Author>,
    #[serde(default)]
    pub web_dir_url: Option<String>,

    #[serde(default)]
    pub uninstaller_name:      Option<String>,
    #[serde(default)]
    pub uninstaller_condition: Option<String>,

    /// Install below the default root at this path instead of `app_name`.
    /// May reference variables.
    #[serde(default)]
    pub installation_sub_path: Option<String>,

    #[serde(default)]
    pub require_privileged_execution:   bool,
    #[serde(default)]
    pub privileged_execution_condition: Option<String>,

    #[serde(default)]
    pub reboot_action:           RebootAction,
    #[serde(default)]
    pub reboot_action_condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name:  String,
    #[serde(default)]
    pub email: Option<String>,
}

impl ApplicationInfo {
    pub fn new(app_name: impl Into<String>, app_version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_version: app_version.into(),
            app_url: None,
            authors: Vec::new(),
            web_dir_url: None,
            uninstaller_name: None,
            uninstaller_condition: None,
            installation_sub_path: None,
            require_privileged_execution: false,
            privileged_execution_condition: None,
            reboot_action: RebootAction::Ignore,
            reboot_action_condition: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_info_defaults() {
        let info: ApplicationInfo =
            serde_json::from_str(r#"{"app_name": "Demo", "app_version": "1.0"}"#).unwrap();
        assert_eq!(info, ApplicationInfo::new("Demo", "1.0"));
        assert_eq!(info.reboot_action, RebootAction::Ignore);
        assert!(!info.require_privileged_execution);
    }

    #[test]
    fn test_reboot_action_snake_case() {
        let action: RebootAction = serde_json::from_str(r#""always""#).unwrap();
        assert_eq!(action, RebootAction::Always);
    }
}

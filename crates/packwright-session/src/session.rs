use crate::registry::CustomActionRegistry;
use packwright_model::{ApplicationInfo, DynamicVariables, InstallerRequirement, Pack, Panel, VariableEnvironment};
use packwright_platform::{Locale, Platform};
use std::path::{Path, PathBuf};

/// Everything the installer needs once bootstrap has finished.
#[derive(Debug)]
pub struct InstallSession {
    pub(crate) info:                   ApplicationInfo,
    pub(crate) variables:              VariableEnvironment,
    pub(crate) platform:               Platform,
    pub(crate) locale:                 Locale,
    pub(crate) install_path:           PathBuf,
    pub(crate) panels_order:           Vec<Panel>,
    pub(crate) all_packs:              Vec<Pack>,
    pub(crate) available_packs:        Vec<Pack>,
    pub(crate) selected_packs:         Vec<Pack>,
    pub(crate) custom_actions:         CustomActionRegistry,
    pub(crate) custom_langpack:        Option<Vec<u8>>,
    pub(crate) dynamic_variables:      DynamicVariables,
    pub(crate) installer_requirements: Vec<InstallerRequirement>,
}

impl InstallSession {
    pub fn info(&self) -> &ApplicationInfo { &self.info }

    pub fn variables(&self) -> &VariableEnvironment { &self.variables }

    pub fn platform(&self) -> &Platform { &self.platform }

    pub fn locale(&self) -> &Locale { &self.locale }

    pub fn install_path(&self) -> &Path { &self.install_path }

    pub fn panels_order(&self) -> &[Panel] { &self.panels_order }

    /// Every declared pack, regardless of platform.
    pub fn all_packs(&self) -> &[Pack] { &self.all_packs }

    /// Packs that apply to this platform, in declaration order.
    pub fn available_packs(&self) -> &[Pack] { &self.available_packs }

    pub fn available_packs_mut(&mut self) -> &mut Vec<Pack> { &mut self.available_packs }

    /// Starts out as the preselected available packs.
    pub fn selected_packs(&self) -> &[Pack] { &self.selected_packs }

    pub fn selected_packs_mut(&mut self) -> &mut Vec<Pack> { &mut self.selected_packs }

    pub fn custom_actions(&self) -> &CustomActionRegistry { &self.custom_actions }

    pub fn custom_langpack(&self) -> Option<&[u8]> { self.custom_langpack.as_deref() }

    pub fn dynamic_variables(&self) -> &DynamicVariables { &self.dynamic_variables }

    pub fn installer_requirements(&self) -> &[InstallerRequirement] { &self.installer_requirements }
}

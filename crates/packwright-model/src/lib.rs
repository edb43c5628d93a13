//! Data model shared by the installer stages.
//!
//! Everything here is loaded once from installer resources and then read by
//! panels, pack selection and custom actions.

pub use constraint::{OsConstraint, applies};
pub use custom::{CustomAction, CustomActionDescriptor, CustomActionKind, CustomActionRecord};
pub use info::{ApplicationInfo, Author, RebootAction};
pub use pack::Pack;
pub use panel::Panel;
pub use requirement::{DynamicVariable, DynamicVariables, InstallerRequirement};
pub use vars::{VariableEnvironment, keys, system_variable_name};

pub mod constraint;
mod custom;
mod info;
mod pack;
mod panel;
mod requirement;
pub mod vars;

//! Installer session bootstrap.
//!
//! - `bootstrap.rs` - Ordered pipeline producing an [`InstallSession`]
//! - `environment.rs` - Variable layers and their precedence
//! - `install_root.rs` - Default install root per platform
//! - `registry.rs` - Custom actions and listener factories
//! - `elevation.rs` - Privileged relaunch decision
//! - `reboot.rs` - Reboot action guard
//!
//! Collaborators are passed in as trait objects: [`ConditionEngine`],
//! [`Notifier`], and the platform crate's `HostFacts` and `Elevator`.

pub use bootstrap::{Bootstrap, SessionBootstrap};
pub use condition::{ConditionEngine, StaticConditions};
pub use elevation::{ElevationOutcome, ElevationResolver};
pub use error::{Error, ListenerError, Result};
pub use install_root::InstallRootResolver;
pub use notify::{LogNotifier, Notifier};
pub use reboot::resolve_reboot_action;
pub use registry::{CustomActionRegistry, InstallerListener, ListenerFactories};
pub use session::InstallSession;

mod bootstrap;
mod condition;
mod elevation;
pub mod environment;
mod error;
#[cfg(test)]
mod fake;
pub mod install_root;
pub mod notify;
mod reboot;
mod registry;
mod session;

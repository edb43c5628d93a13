pub use error::{Error, Result};
pub use host::{HostFacts, Locale, NetworkIdentity, SystemHost};
pub use os::{Family, OS, Platform};

pub mod arch;
pub mod command;
pub mod dir;
pub mod elevate;
mod error;
pub mod host;
pub mod os;

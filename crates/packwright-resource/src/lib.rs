//! Installer resources.
//!
//! - `provider.rs` - Named resource lookup (directory and in-memory)
//! - `codec.rs` - Versioned JSON envelope decoding
//! - `properties.rs` - `key=value` property tables

pub use codec::{FORMAT_VERSION, decode, encode, load, load_optional};
pub use error::{Error, Result};
pub use properties::Properties;
pub use provider::{DirResources, MemoryResources, ResourceProvider};

pub mod codec;
mod error;
pub mod properties;
pub mod provider;

/// Well-known resource names.
pub mod names {
    pub const VARIABLES: &str = "vars";
    pub const INFO: &str = "info";
    pub const PANELS_ORDER: &str = "panelsOrder";
    pub const PACKS: &str = "packs.info";
    pub const CUSTOM_DATA: &str = "customData";
    pub const DYNAMIC_VARIABLES: &str = "dynvariables";
    pub const INSTALLER_REQUIREMENTS: &str = "installerrequirements";
    pub const WINDOWS_DEFAULT_PATHS: &str = "win32-defaultpaths.properties";
    pub const CUSTOM_LANGPACK: &str = "CustomLangpack.xml";
}

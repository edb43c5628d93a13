//! Errors that abort the bootstrap.
//!
//! Everything not listed here degrades instead: optional resources fall back
//! to empty values, host lookups to empty strings, elevation problems to a
//! warning.

use thiserror::Error;

/// Error raised by a listener factory.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Resource(#[from] packwright_resource::Error),

    #[error("custom action '{class_name}' is not bound to any listener")]
    ClassResolution { class_name: String },

    #[error("failed to instantiate custom action '{class_name}': {source}")]
    Instantiation {
        class_name: String,
        #[source]
        source:     ListenerError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

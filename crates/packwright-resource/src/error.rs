use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("resource '{name}' not found")]
    NotFound { name: String },

    #[error("resource name '{name}' escapes the resource root")]
    InvalidName { name: String },

    #[error("failed to read resource '{name}' from '{path}': {source}")]
    Read {
        name:   String,
        path:   PathBuf,
        source: io::Error,
    },

    #[error("resource '{name}' is corrupted: {source}")]
    Decode {
        name:   String,
        source: serde_json::Error,
    },

    #[error("resource '{name}' has format version {found}, expected {expected}")]
    UnsupportedVersion { name: String, found: u32, expected: u32 },

    #[error("resource '{name}' is not valid UTF-8")]
    InvalidUtf8 { name: String },

    #[error("failed to encode resource: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

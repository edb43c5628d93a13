use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("command not found: {cmd}")]
    CommandNotFound { cmd: String },

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("command terminated by signal: {cmd}")]
    Terminated { cmd: String },

    #[error("elevation is not supported on this platform")]
    ElevationUnsupported,

    #[error("failed to locate current executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("host lookup failed for '{host}': {source}")]
    HostLookup { host: String, source: std::io::Error },

    #[error("host name is not available")]
    NoHostName,

    #[error("host '{0}' resolved to no address")]
    NoAddress(String),
}

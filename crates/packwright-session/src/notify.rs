//! User-facing warnings raised during bootstrap.

use tracing::warn;

pub const ELEVATION_UNSUPPORTED: &str = "This installer should be run by an administrator.\n\
     The installation will still continue but you may encounter problems due to insufficient permissions.";

pub const ELEVATION_FAILED: &str = "The installer could not launch itself with administrator permissions.\n\
     The installation will still continue but you may encounter problems due to insufficient permissions.";

/// Shows non-fatal warnings to the user. Must not block bootstrap on an answer.
pub trait Notifier {
    fn warn(&self, message: &str);
}

/// Sends warnings to the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}

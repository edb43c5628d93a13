use console::style;
use packwright_session::Notifier;
use tracing::warn;

/// Prints bootstrap warnings to stderr and mirrors them to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&self, message: &str) {
        warn!("{message}");
        eprintln!("{} {}", style("warning:").yellow().bold(), message);
    }
}

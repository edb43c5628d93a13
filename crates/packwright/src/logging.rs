use crate::config::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber. `PACKWRIGHT_LOG` wins over
/// `default_filter`; an unparsable default falls back to `info`.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

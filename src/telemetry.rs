//! Log subscriber setup and span constructors.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Installs the global subscriber. Logs go to stderr; stdout carries the
/// classification stream.
///
/// `RUST_LOG` wins over the configured filter.
pub fn init(log: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span for one classification session.
    pub fn session(source: &str, target: &str) -> Span {
        info_span!("session", source = %source, target = %target)
    }
}

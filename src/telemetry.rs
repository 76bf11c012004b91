//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter. Logs go to stderr so that
/// machine-readable results on stdout stay clean. Calling this twice is a
/// no-op.
pub fn init_tracing(config: &LoggingConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            registry.with(layer).try_init().ok();
        }
        LogFormat::Pretty => {
            let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
            registry.with(layer).try_init().ok();
        }
    }
}

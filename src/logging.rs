//! Logging setup for the binary

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber
///
/// `RUST_LOG` wins over `level` when set. Calling this twice is harmless; the
/// second call leaves the first subscriber in place.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

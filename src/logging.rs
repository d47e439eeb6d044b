use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` is used, falling
/// back to `info` if it is not a valid filter directive.
pub fn setup_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

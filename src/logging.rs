//! Logging initialization and configuration.
//!
//! Log lines go to stderr; stdout is reserved for the result line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither config nor `RUST_LOG` say otherwise.
pub const DEFAULT_FILTER: &str = "authlink=info";

fn filter_for(level: &str) -> EnvFilter {
    // a bare level applies to this crate only
    let directive = match level {
        "error" | "warn" | "info" | "debug" | "trace" => format!("authlink={level}"),
        other => other.to_string(),
    };
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the logging system with the given level or filter directive.
///
/// An unparsable filter falls back to [`DEFAULT_FILTER`].
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber
/// has already been set.
pub fn init_with_filter(level: &str) {
    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Try to initialize the logging system.
///
/// Uses the `RUST_LOG` environment variable for filtering. Returns `Err`
/// if logging has already been initialized.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init()
}

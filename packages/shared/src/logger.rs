//! Logging setup utilities for Tayori binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The filter covers the server library crate, this crate and the binary itself.
/// `RUST_LOG` overrides the default when set.
///
/// # Examples
///
/// ```no_run
/// use tayori_shared::logger::setup_logger;
///
/// setup_logger("tayori_server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    let binary_target = binary_name.replace('-', "_");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "tayori_server={level},{shared}={level},{binary}={level},tower_http={level}",
                    level = default_log_level,
                    shared = env!("CARGO_PKG_NAME").replace('-', "_"),
                    binary = binary_target,
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

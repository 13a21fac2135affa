//! Bootstrap utilities for the report binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LOG_ENV_VAR;

/// Initialize tracing with the SALES_METRICS_LOG environment variable.
///
/// Defaults to "info" level if SALES_METRICS_LOG is not set. Logs go to
/// stderr so stdout carries only the rendered report.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Config file path from the command line.
///
/// Accepts either `--config <path>` or a single positional path.
pub fn parse_config_path() -> Option<String> {
    config_path_from_args(std::env::args().skip(1))
}

fn config_path_from_args(mut args: impl Iterator<Item = String>) -> Option<String> {
    let first = args.next()?;
    if first == "--config" || first == "-c" {
        args.next()
    } else if let Some(path) = first.strip_prefix("--config=") {
        Some(path.to_string())
    } else {
        Some(first)
    }
}

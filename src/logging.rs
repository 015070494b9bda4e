// src/logging.rs
//! Tracing setup and the `app_log!` macro used across the crate

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "cv_site=info,rocket::server=off";

/// Emit a tracing event at the given level: `app_log!(info, "...", args)`.
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// With `log_file` set, events are written as JSON lines to that file
/// (truncated on startup); otherwise they go to stderr in the plain format.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            Registry::default()
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(file)
                        .with_current_span(false)
                        .with_span_list(false),
                )
                .with(env_filter())
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
        None => {
            Registry::default()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(env_filter())
                .try_init()
                .context("Failed to install tracing subscriber")?;
        }
    }

    Ok(())
}

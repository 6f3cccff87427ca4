//! Structured logging setup using the `tracing` ecosystem.
//!
//! Configures a `tracing-subscriber` with either JSON output (for
//! production) or pretty-printed output (for TTY / local dev). Format
//! is auto-detected from the terminal but can be forced via `--json`
//! or `--pretty`. The sink's HTTP client crates are capped at `WARN`
//! unless `trace` is requested, so request logs stay readable.

use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[must_use]
pub fn resolve_format(pretty: bool, json: bool) -> LogFormat {
    if json {
        LogFormat::Json
    } else if pretty || std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

const CLIENT_TARGETS: &[&str] = &["hyper_util", "hyper_rustls", "rustls"];

#[must_use]
pub fn targets(level: &LogLevel) -> Targets {
    let tracing_level = level.to_tracing_level();
    let client_level = if tracing_level == Level::TRACE {
        Level::TRACE
    } else {
        Level::WARN.min(tracing_level)
    };
    CLIENT_TARGETS
        .iter()
        .fold(Targets::new().with_default(tracing_level), |t, target| {
            t.with_target(*target, client_level)
        })
}

pub fn init(level: &LogLevel, format: LogFormat) {
    let filter = targets(level);

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_target(false))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, validate, health), and their associated argument
//! structs. Every flag has an environment variable equivalent for
//! container deployments.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::model::{DeliveryPolicy, DEFAULT_API_BASE};

#[derive(Parser)]
#[command(
    name = "hookrelay",
    version,
    about = "Relay JSON webhooks to Telegram as readable messages",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        TG_API_TOKEN=... TG_CHAT_ID=... hookrelay run\n  \
        URL_PATH=orders ORDERS_FILTER_KEY=order_id,total hookrelay run\n  \
        URL_PATH=orders hookrelay validate"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay server
    Run(Box<RunArgs>),

    /// Validate the route configuration without starting
    Validate(ValidateArgs),

    /// Check health of a running instance
    Health(HealthArgs),
}

/// Route and sink settings shared by `run` and `validate`.
#[derive(Args)]
pub struct RouteArgs {
    /// Comma-separated route names; filter keys are read from
    /// `<NAME>_FILTER_KEY`
    #[arg(long, env = "URL_PATH", value_name = "ROUTES")]
    pub url_path: Option<String>,

    /// Telegram Bot API base URL
    #[arg(long, env = "TG_API_BASE", default_value = DEFAULT_API_BASE)]
    pub tg_api_base: String,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        hookrelay run                                  Serve /webhook only\n  \
        hookrelay run --url-path orders,payments       Extra routes\n  \
        hookrelay run -p 9000 --pretty                 Local dev mode")]
pub struct RunArgs {
    #[command(flatten)]
    pub routes: RouteArgs,

    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Telegram --
    /// Telegram Bot API token
    #[arg(
        long,
        env = "TG_API_TOKEN",
        hide_env_values = true,
        help_heading = "Telegram"
    )]
    pub tg_api_token: Option<String>,

    /// Destination chat ID
    #[arg(long, env = "TG_CHAT_ID", help_heading = "Telegram")]
    pub tg_chat_id: Option<String>,

    /// What a failed delivery does to the caller's response
    #[arg(
        long,
        env = "DELIVERY_POLICY",
        default_value = "best-effort",
        help_heading = "Telegram"
    )]
    pub delivery_policy: DeliveryPolicy,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Tuning --
    /// Telegram request timeout in milliseconds
    #[arg(
        long,
        env = "SINK_TIMEOUT_MS",
        default_value_t = 10_000,
        help_heading = "Tuning"
    )]
    pub sink_timeout: u64,

    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = 1_048_576,
        help_heading = "Tuning"
    )]
    pub max_body: usize,

    /// Max nesting depth of a payload before it is rejected (at most 127,
    /// the JSON decoder's own recursion limit)
    #[arg(
        long,
        env = "MAX_DEPTH",
        default_value_t = 64,
        value_parser = clap::value_parser!(u32).range(1..=127),
        help_heading = "Tuning"
    )]
    pub max_depth: u32,
}

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub routes: RouteArgs,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: ValidateFormat,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:8080")]
    pub url: String,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ValidateFormat {
    Text,
    Json,
}

//! hookrelay relays JSON webhooks to a Telegram chat.
//!
//! It receives JSON documents over HTTP at configured paths, flattens each
//! one into indented `key: value` text (optionally restricted to a route's
//! top-level filter keys), and sends the text through the Telegram Bot API.
//! Delivery is a single best-effort attempt; the caller's response reflects
//! whether the message could be shaped.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, validate, health).
//! - [`config`] -- Route configuration loading from `URL_PATH` and
//!   `<NAME>_FILTER_KEY` variables, plus validation.
//! - [`dispatch`] -- Per-request handling: route lookup, method and body
//!   checks, shaping, and delivery.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`health`] -- `GET /heartcheck` endpoint handler.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`middleware`] -- Correlation id layer wrapped around every request.
//! - [`registry`] -- Immutable path to filter-key lookup built at startup.
//! - [`server`] -- Axum server setup, shared application state, HTTP client, and
//!   graceful shutdown.
//! - [`shape`] -- Filter selection and JSON-to-text flattening.
//! - [`sink`] -- The [`Sink`](sink::Sink) delivery trait and the Telegram client.

// Binary crate: public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod health;
pub mod logging;
pub mod middleware;
pub mod registry;
pub mod server;
pub mod shape;
pub mod sink;

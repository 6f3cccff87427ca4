//! Data structures for route and sink configuration.
//!
//! Contains [`RouteConfig`] (the routes listed in `URL_PATH` with their
//! filter keys), [`RouteDefinition`], [`SinkSettings`] and the
//! [`DeliveryPolicy`] switch.

use crate::registry::RouteKey;
use crate::shape::FilterKeySet;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

const fn default_sink_timeout_ms() -> u64 {
    10_000
}

/// One route named in `URL_PATH`, with the filter keys read from its
/// derived variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    pub key: RouteKey,
    pub env_key: String,
    pub filter_keys: FilterKeySet,
}

impl RouteDefinition {
    #[must_use]
    pub fn new(key: RouteKey, filter_keys: FilterKeySet) -> Self {
        let env_key = key.filter_env_key();
        Self {
            key,
            env_key,
            filter_keys,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteConfig {
    /// User routes in `URL_PATH` order, duplicates included.
    pub routes: Vec<RouteDefinition>,

    /// Keys found under `WEBHOOK_FILTER_KEY`. Only kept so validation can
    /// reject them; the webhook route is never filtered.
    pub webhook_filter: FilterKeySet,
}

impl RouteConfig {
    #[must_use]
    pub fn filtered_routes(&self) -> usize {
        self.routes
            .iter()
            .filter(|r| !r.filter_keys.is_empty())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSettings {
    pub api_base: String,
    pub token: Option<String>,
    pub chat_id: Option<String>,
    pub timeout_ms: u64,
}

impl Default for SinkSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            chat_id: None,
            timeout_ms: default_sink_timeout_ms(),
        }
    }
}

impl SinkSettings {
    /// Blank credentials count as missing.
    #[must_use]
    pub fn new(
        api_base: &str,
        token: Option<String>,
        chat_id: Option<String>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            chat_id: chat_id.filter(|c| !c.trim().is_empty()),
            timeout_ms,
        }
    }

    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.token.is_some() && self.chat_id.is_some()
    }
}

/// Whether a failed delivery changes the response sent to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DeliveryPolicy {
    /// Always answer 200 once the message was shaped.
    #[default]
    BestEffort,
    /// Answer 502 when the sink attempt fails. Missing credentials still
    /// answer 200.
    Strict,
}

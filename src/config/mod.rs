//! Route configuration loading and validation.
//!
//! Routes come from `URL_PATH` (a comma-separated list of names) and, per
//! route, a `<NAME>_FILTER_KEY` variable listing the top-level fields to
//! keep. [`load_routes`] takes the variable lookup as a closure so callers
//! and tests decide where values come from; [`load_routes_from_env`] reads
//! the process environment.

pub mod model;
pub mod validation;

use model::{RouteConfig, RouteDefinition};

use crate::registry::{RouteKey, WEBHOOK_PATH};
use crate::shape::FilterKeySet;

pub fn load_routes<F>(url_path: Option<&str>, lookup: F) -> RouteConfig
where
    F: Fn(&str) -> Option<String>,
{
    let filter_for = |key: &RouteKey| {
        lookup(&key.filter_env_key())
            .map(|raw| FilterKeySet::parse(&raw))
            .unwrap_or_default()
    };

    let routes = url_path
        .unwrap_or_default()
        .split(',')
        .filter_map(RouteKey::normalize)
        .map(|key| {
            let filter_keys = filter_for(&key);
            RouteDefinition::new(key, filter_keys)
        })
        .collect();

    let webhook_filter = RouteKey::normalize(WEBHOOK_PATH)
        .map(|key| filter_for(&key))
        .unwrap_or_default();

    RouteConfig {
        routes,
        webhook_filter,
    }
}

#[must_use]
pub fn load_routes_from_env(url_path: Option<&str>) -> RouteConfig {
    load_routes(url_path, |name| std::env::var(name).ok())
}

//! Inbound path to filter-key lookup.
//!
//! [`RouteRegistry`] is built once at startup from the configured
//! [`RouteDefinition`]s and is read-only afterwards, so it is shared across
//! request tasks without locking. The `/webhook` route is always registered
//! after user routes with an empty filter set; `/heartcheck` is served by
//! the health responder and never reaches the registry.

use std::borrow::Borrow;
use std::collections::HashMap;

use serde::Serialize;

use crate::config::model::RouteDefinition;
use crate::shape::FilterKeySet;

pub const WEBHOOK_PATH: &str = "/webhook";
pub const HEARTCHECK_PATH: &str = "/heartcheck";
pub const FILTER_KEY_SUFFIX: &str = "_FILTER_KEY";

/// Normalized route path: trimmed, with exactly one leading `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RouteKey(String);

impl RouteKey {
    /// Returns `None` when nothing is left after trimming.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        let name = raw.trim().trim_start_matches('/').trim();
        if name.is_empty() {
            None
        } else {
            Some(Self(format!("/{name}")))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The route name without its leading separator.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0[1..]
    }

    /// Environment variable holding this route's filter keys,
    /// e.g. `/orders` becomes `ORDERS_FILTER_KEY`.
    #[must_use]
    pub fn filter_env_key(&self) -> String {
        format!("{}{FILTER_KEY_SUFFIX}", self.name().to_uppercase())
    }
}

impl Borrow<str> for RouteKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteKind {
    /// The built-in receive-everything route.
    Webhook,
    /// A route listed in `URL_PATH`.
    Dynamic,
}

impl RouteKind {
    #[must_use]
    pub const fn confirmation(self) -> &'static str {
        match self {
            Self::Webhook => "Webhook request processed",
            Self::Dynamic => "Dynamic request processed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    key: RouteKey,
    filter: FilterKeySet,
    kind: RouteKind,
}

impl RouteEntry {
    #[must_use]
    pub const fn new(key: RouteKey, filter: FilterKeySet, kind: RouteKind) -> Self {
        Self { key, filter, kind }
    }

    #[must_use]
    pub const fn key(&self) -> &RouteKey {
        &self.key
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterKeySet {
        &self.filter
    }

    #[must_use]
    pub const fn kind(&self) -> RouteKind {
        self.kind
    }
}

#[derive(Debug, Default)]
pub struct RouteRegistry {
    entries: HashMap<RouteKey, RouteEntry>,
    order: Vec<RouteKey>,
}

impl RouteRegistry {
    /// Register `definitions` in order, then the built-in webhook route.
    ///
    /// A repeated key replaces the earlier entry but keeps its original
    /// position in [`iter`](Self::iter).
    #[must_use]
    pub fn from_definitions(definitions: &[RouteDefinition]) -> Self {
        let mut registry = Self::default();
        for def in definitions {
            registry.insert(RouteEntry::new(
                def.key.clone(),
                def.filter_keys.clone(),
                RouteKind::Dynamic,
            ));
        }

        // Always last, so the webhook route can never end up filtered.
        if let Some(key) = RouteKey::normalize(WEBHOOK_PATH) {
            registry.insert(RouteEntry::new(
                key,
                FilterKeySet::default(),
                RouteKind::Webhook,
            ));
        }
        registry
    }

    fn insert(&mut self, entry: RouteEntry) {
        if self.entries.insert(entry.key.clone(), entry.clone()).is_some() {
            tracing::debug!(route = %entry.key, "route redefined, later definition wins");
        } else {
            self.order.push(entry.key);
        }
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }
}

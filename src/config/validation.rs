//! Route and sink configuration validation with detailed error reporting.
//!
//! The [`validate`] function checks a loaded [`RouteConfig`] for reserved
//! paths, filters on the webhook route, unusable route names and routes
//! whose derived filter variables collide, plus a malformed sink base URL.
//! Returns a list of [`ValidationError`] values with per-field suggestions.

use std::collections::HashMap;

use url::Url;

use super::model::{RouteConfig, SinkSettings};
use crate::error::ValidationError;
use crate::registry::{RouteKey, RouteRegistry, HEARTCHECK_PATH, WEBHOOK_PATH};

/// Validate a single normalized route name. Returns `Ok(())` or a
/// human-readable error.
pub fn validate_route_key(key: &RouteKey) -> Result<(), String> {
    let name = key.name();
    if name.chars().any(char::is_whitespace) {
        return Err("route name cannot contain whitespace".into());
    }
    if let Some(c) = name.chars().find(|c| matches!(*c, '?' | '#')) {
        return Err(format!("route name cannot contain '{c}'"));
    }
    Ok(())
}

/// Validate the sink API base URL. Returns `Ok(())` or a human-readable error.
pub fn validate_api_base(url: &str) -> Result<(), String> {
    match Url::parse(url) {
        Ok(parsed) => {
            let scheme = parsed.scheme();
            if scheme != "http" && scheme != "https" {
                Err(format!(
                    "unsupported scheme '{scheme}' (expected http or https)"
                ))
            } else {
                Ok(())
            }
        }
        Err(_) => Err(format!("'{url}' is not a valid URL")),
    }
}

pub fn validate(routes: &RouteConfig, sink: &SinkSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(msg) = validate_api_base(&sink.api_base) {
        errors.push(ValidationError {
            route: "(sink)".into(),
            field: "TG_API_BASE".into(),
            message: msg,
            suggestion: None,
        });
    }

    if !routes.webhook_filter.is_empty() {
        errors.push(ValidationError {
            route: WEBHOOK_PATH.into(),
            field: "WEBHOOK_FILTER_KEY".into(),
            message: "the webhook route always relays the full payload".into(),
            suggestion: Some("list a separate route in URL_PATH and filter that one".into()),
        });
    }

    // Derived variable name -> first route that claimed it
    let mut env_owners: HashMap<&str, &RouteKey> = HashMap::new();

    for def in &routes.routes {
        let route_id = def.key.to_string();

        if def.key.as_str() == HEARTCHECK_PATH {
            errors.push(ValidationError {
                route: route_id.clone(),
                field: "URL_PATH".into(),
                message: "path is reserved for the health check".into(),
                suggestion: Some("rename the route".into()),
            });
        }

        if let Err(msg) = validate_route_key(&def.key) {
            errors.push(ValidationError {
                route: route_id.clone(),
                field: "URL_PATH".into(),
                message: msg,
                suggestion: None,
            });
        }

        match env_owners.get(def.env_key.as_str()) {
            Some(owner) if **owner != def.key => {
                errors.push(ValidationError {
                    route: route_id,
                    field: def.env_key.clone(),
                    message: format!("filter variable is already used by route {owner}"),
                    suggestion: Some("route names must differ after uppercasing".into()),
                });
            }
            Some(_) => {}
            None => {
                env_owners.insert(&def.env_key, &def.key);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[must_use]
pub fn format_validation_report(registry: &RouteRegistry) -> String {
    let mut lines = vec![format!("  {} routes\n", registry.len())];

    for entry in registry.iter() {
        let filter = if entry.filter().is_empty() {
            "none (full payload)".to_string()
        } else {
            entry.filter().to_string()
        };
        lines.push(format!("  {}", entry.key()));
        lines.push(format!("    filter: {filter}"));
        if entry.key().as_str() != WEBHOOK_PATH {
            lines.push(format!("    source: {}", entry.key().filter_env_key()));
        }
    }

    format!("route config is valid\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::RouteDefinition;
    use crate::shape::FilterKeySet;

    fn def(name: &str, keys: &[&str]) -> RouteDefinition {
        RouteDefinition::new(RouteKey::normalize(name).unwrap(), FilterKeySet::new(keys))
    }

    fn config(routes: Vec<RouteDefinition>) -> RouteConfig {
        RouteConfig {
            routes,
            webhook_filter: FilterKeySet::default(),
        }
    }

    #[test]
    fn valid_config_passes() {
        let routes = config(vec![def("orders", &["order_id"]), def("payments", &[])]);
        assert!(validate(&routes, &SinkSettings::default()).is_ok());
    }

    #[test]
    fn empty_config_passes() {
        assert!(validate(&RouteConfig::default(), &SinkSettings::default()).is_ok());
    }

    #[test]
    fn heartcheck_is_reserved() {
        let errors =
            validate(&config(vec![def("heartcheck", &[])]), &SinkSettings::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("reserved"));
    }

    #[test]
    fn webhook_filter_is_rejected() {
        let routes = RouteConfig {
            routes: vec![],
            webhook_filter: FilterKeySet::new(["a"]),
        };
        let errors = validate(&routes, &SinkSettings::default()).unwrap_err();
        assert_eq!(errors[0].field, "WEBHOOK_FILTER_KEY");
    }

    #[test]
    fn listing_webhook_without_filter_is_allowed() {
        assert!(validate(&config(vec![def("webhook", &[])]), &SinkSettings::default()).is_ok());
    }

    #[test]
    fn env_key_collision_fails() {
        let errors = validate(
            &config(vec![def("orders", &[]), def("Orders", &[])]),
            &SinkSettings::default(),
        )
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].route, "/Orders");
        assert!(errors[0].message.contains("/orders"));
    }

    #[test]
    fn duplicate_route_is_not_a_collision() {
        let routes = config(vec![def("orders", &[]), def("/orders", &[])]);
        assert!(validate(&routes, &SinkSettings::default()).is_ok());
    }

    #[test]
    fn bad_route_name_fails() {
        let errors =
            validate(&config(vec![def("a b", &[])]), &SinkSettings::default()).unwrap_err();
        assert!(errors[0].message.contains("whitespace"));

        let errors =
            validate(&config(vec![def("a?b", &[])]), &SinkSettings::default()).unwrap_err();
        assert!(errors[0].message.contains('?'));
    }

    #[test]
    fn bad_api_base_fails() {
        let sink = SinkSettings::new("ftp://example.com", None, None, 1000);
        let errors = validate(&RouteConfig::default(), &sink).unwrap_err();
        assert_eq!(errors[0].field, "TG_API_BASE");
        assert!(errors[0].message.contains("unsupported scheme"));

        let sink = SinkSettings::new("not a url", None, None, 1000);
        assert!(validate(&RouteConfig::default(), &sink).is_err());
    }

    #[test]
    fn report_lists_effective_routes() {
        let registry = RouteRegistry::from_definitions(&[def("orders", &["order_id", "total"])]);
        let report = format_validation_report(&registry);
        assert!(report.contains("2 routes"));
        assert!(report.contains("/orders"));
        assert!(report.contains("filter: order_id, total"));
        assert!(report.contains("ORDERS_FILTER_KEY"));
        assert!(report.contains("/webhook"));
    }
}

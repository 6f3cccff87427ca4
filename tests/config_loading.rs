//! Integration tests for building the route registry from environment-style
//! configuration.

use std::collections::HashMap;

use hookrelay::config::load_routes;
use hookrelay::config::model::SinkSettings;
use hookrelay::config::validation::validate;
use hookrelay::dispatch::shape;
use hookrelay::registry::{RouteKind, RouteRegistry};
use hookrelay::shape::Flattener;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn orders_route_drops_unlisted_fields() {
    let config = load_routes(
        Some("orders"),
        env(&[("ORDERS_FILTER_KEY", "order_id,total")]),
    );
    validate(&config, &SinkSettings::default()).unwrap();
    let registry = RouteRegistry::from_definitions(&config.routes);

    let entry = registry.get("/orders").unwrap();
    let text = shape(
        entry,
        &Flattener::default(),
        br#"{"order_id":"12345","total":27.97,"extra":"x"}"#,
    )
    .unwrap();

    assert!(text.contains("order_id: 12345\n"));
    assert!(text.contains("total: 27.97\n"));
    assert!(!text.contains("extra"));
}

#[test]
fn registry_holds_user_routes_then_webhook() {
    let config = load_routes(
        Some(" orders , /payments,refunds"),
        env(&[("PAYMENTS_FILTER_KEY", "id")]),
    );
    let registry = RouteRegistry::from_definitions(&config.routes);

    let keys: Vec<&str> = registry.iter().map(|e| e.key().as_str()).collect();
    assert_eq!(keys, vec!["/orders", "/payments", "/refunds", "/webhook"]);
    assert_eq!(registry.get("/payments").unwrap().filter().len(), 1);
    assert!(registry.get("/refunds").unwrap().filter().is_empty());
    assert_eq!(registry.get("/webhook").unwrap().kind(), RouteKind::Webhook);
    assert_eq!(registry.get("/orders").unwrap().kind(), RouteKind::Dynamic);
}

#[test]
fn blank_filter_variable_means_no_filtering() {
    let config = load_routes(Some("orders"), env(&[("ORDERS_FILTER_KEY", "")]));
    let registry = RouteRegistry::from_definitions(&config.routes);
    let entry = registry.get("/orders").unwrap();
    assert!(entry.filter().is_empty());

    let text = shape(entry, &Flattener::default(), br#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(text, "a: 1\nb: 2\n");
}

#[test]
fn colliding_route_names_fail_validation() {
    let config = load_routes(Some("orders,ORDERS"), env(&[]));
    let errors = validate(&config, &SinkSettings::default()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ORDERS_FILTER_KEY");
}

#[test]
fn reserved_routes_fail_validation() {
    let config = load_routes(
        Some("heartcheck"),
        env(&[("WEBHOOK_FILTER_KEY", "only_this")]),
    );
    let errors = validate(&config, &SinkSettings::default()).unwrap_err();
    assert_eq!(errors.len(), 2);
}

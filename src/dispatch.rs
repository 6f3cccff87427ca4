//! Inbound request handling: route lookup, shaping, and delivery.
//!
//! [`dispatch_handler`] is the Axum fallback that receives every
//! non-`/heartcheck` request. It resolves the path in the
//! [`RouteRegistry`](crate::registry::RouteRegistry), checks the method,
//! shapes the body with [`shape`], and hands the text to the configured
//! [`Sink`](crate::sink::Sink). Client errors never reach the sink.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Extension;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::config::model::DeliveryPolicy;
use crate::middleware::CorrelationId;
use crate::registry::RouteEntry;
use crate::server::AppState;
use crate::shape::{select, Flattener};

/// Why a request was turned away before any delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    UnknownRoute,
    BadMethod,
    BadBody,
    TooDeep,
}

impl Rejection {
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::UnknownRoute => StatusCode::NOT_FOUND,
            Self::BadMethod => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadBody => StatusCode::BAD_REQUEST,
            Self::TooDeep => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnknownRoute => "404 page not found\n",
            Self::BadMethod => "Invalid HTTP method\n",
            Self::BadBody => "Failed to decode JSON payload\n",
            Self::TooDeep => "JSON payload is nested too deeply\n",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message().trim_end())
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}

/// Decode `body` as a JSON object, apply the route's filter keys and
/// flatten the result.
pub fn shape(entry: &RouteEntry, flattener: &Flattener, body: &[u8]) -> Result<String, Rejection> {
    let Ok(Value::Object(doc)) = serde_json::from_slice::<Value>(body) else {
        return Err(Rejection::BadBody);
    };
    let selected = select(doc, entry.filter());
    flattener
        .flatten(&selected)
        .map_err(|_| Rejection::TooDeep)
}

pub async fn dispatch_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    Extension(correlation_id): Extension<CorrelationId>,
    body: Bytes,
) -> Response {
    let path = uri.path();

    let Some(entry) = state.registry.get(path) else {
        tracing::warn!(
            correlation_id = %correlation_id,
            method = %method,
            path = %path,
            "no route matched"
        );
        return Rejection::UnknownRoute.into_response();
    };
    let route = entry.key();

    if method != Method::POST {
        tracing::warn!(
            correlation_id = %correlation_id,
            method = %method,
            route = %route,
            "method not allowed"
        );
        return Rejection::BadMethod.into_response();
    }

    let message = match shape(entry, &state.flattener, &body) {
        Ok(message) => message,
        Err(rejection) => {
            tracing::warn!(
                correlation_id = %correlation_id,
                route = %route,
                body_bytes = body.len(),
                reason = %rejection,
                "request rejected"
            );
            return rejection.into_response();
        }
    };

    tracing::info!(
        correlation_id = %correlation_id,
        route = %route,
        filter_keys = entry.filter().len(),
        message_bytes = message.len(),
        "message shaped"
    );

    let start = Instant::now();
    let delivery = state.sink.deliver(route, &message).await;
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    match delivery {
        Ok(()) => tracing::info!(
            correlation_id = %correlation_id,
            route = %route,
            sink = state.sink.name(),
            latency_ms,
            "message delivered"
        ),
        Err(e) if e.is_configuration_gap() => tracing::warn!(
            correlation_id = %correlation_id,
            route = %route,
            sink = state.sink.name(),
            error = %e,
            "delivery skipped"
        ),
        Err(e) => {
            tracing::error!(
                correlation_id = %correlation_id,
                route = %route,
                sink = state.sink.name(),
                latency_ms,
                error = %e,
                "delivery failed"
            );
            if state.delivery_policy == DeliveryPolicy::Strict {
                return (StatusCode::BAD_GATEWAY, "Failed to deliver message\n").into_response();
            }
        }
    }

    let confirmation = format!("{}\n", entry.kind().confirmation());
    (StatusCode::OK, confirmation).into_response()
}

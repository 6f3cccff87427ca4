//! Telegram Bot API `sendMessage` client.
//!
//! Posts `{"chat_id": ..., "text": ...}` to `{api_base}/bot{token}/sendMessage`
//! on the shared hyper client. One attempt per message, bounded by the
//! configured timeout. Anything but `200 OK` is a delivery failure.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http_body_util::{BodyExt, Full};
use hyper::{Method, StatusCode};
use serde::Serialize;

use super::Sink;
use crate::config::model::SinkSettings;
use crate::error::DeliveryError;
use crate::registry::RouteKey;
use crate::server::HttpClient;

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

pub struct TelegramSink {
    client: HttpClient,
    settings: SinkSettings,
}

impl TelegramSink {
    #[must_use]
    pub const fn new(client: HttpClient, settings: SinkSettings) -> Self {
        Self { client, settings }
    }

    fn endpoint(&self, token: &str) -> String {
        format!("{}/bot{token}/sendMessage", self.settings.api_base)
    }
}

#[async_trait]
impl Sink for TelegramSink {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn deliver(&self, route: &RouteKey, text: &str) -> Result<(), DeliveryError> {
        let (Some(token), Some(chat_id)) = (
            self.settings.token.as_deref(),
            self.settings.chat_id.as_deref(),
        ) else {
            return Err(DeliveryError::MissingCredentials);
        };

        let payload = serde_json::to_vec(&SendMessage { chat_id, text })
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let req = hyper::Request::builder()
            .method(Method::POST)
            .uri(self.endpoint(token))
            .header(CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(payload)))
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        let timeout_ms = self.settings.timeout_ms;
        let response =
            tokio::time::timeout(Duration::from_millis(timeout_ms), self.client.request(req))
                .await
                .map_err(|_| DeliveryError::Timeout(timeout_ms))?
                .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::OK {
            tracing::debug!(route = %route, "telegram accepted message");
            return Ok(());
        }

        let body = match response.into_body().collect().await {
            Ok(collected) => String::from_utf8_lossy(&collected.to_bytes()).into_owned(),
            Err(e) => format!("<body read error: {e}>"),
        };
        Err(DeliveryError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::build_http_client;

    fn sink(token: Option<&str>, chat_id: Option<&str>) -> TelegramSink {
        TelegramSink::new(
            build_http_client(),
            SinkSettings::new(
                "https://api.telegram.org/",
                token.map(String::from),
                chat_id.map(String::from),
                1000,
            ),
        )
    }

    #[test]
    fn endpoint_embeds_token() {
        assert_eq!(
            sink(Some("T"), Some("1")).endpoint("T"),
            "https://api.telegram.org/botT/sendMessage"
        );
    }

    #[test]
    fn payload_escapes_text() {
        let body = serde_json::to_string(&SendMessage {
            chat_id: "42",
            text: "a: \"quoted\"\n  b: 2\n",
        })
        .unwrap();
        assert_eq!(
            body,
            r#"{"chat_id":"42","text":"a: \"quoted\"\n  b: 2\n"}"#
        );
    }

    #[tokio::test]
    async fn missing_credentials_skip_delivery() {
        let route = RouteKey::normalize("orders").unwrap();
        for s in [sink(None, Some("1")), sink(Some("T"), None), sink(Some(" "), Some("1"))] {
            let err = s.deliver(&route, "text").await.unwrap_err();
            assert!(err.is_configuration_gap());
        }
    }
}

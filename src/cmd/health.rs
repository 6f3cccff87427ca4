//! `hookrelay health`: check that a running instance answers `/heartcheck`.
//!
//! A healthy instance returns `200` with the fixed heartcheck text. Any
//! other status or body is reported as a failure.

use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::StatusCode;

use crate::cli::HealthArgs;
use crate::error::RelayError;
use crate::health::HEARTCHECK_BODY;
use crate::registry::HEARTCHECK_PATH;
use crate::server::build_http_client;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn execute(args: HealthArgs) -> Result<(), RelayError> {
    let base = args.url.trim_end_matches('/');
    let (status, body) = fetch(&format!("{base}{HEARTCHECK_PATH}")).await?;
    verify(status, &body)?;

    println!("\u{2713} hookrelay is healthy ({base})");
    Ok(())
}

async fn fetch(url: &str) -> Result<(StatusCode, Bytes), RelayError> {
    let uri: hyper::Uri = url.parse().map_err(|e: hyper::http::uri::InvalidUri| {
        RelayError::UriParse {
            source: Box::new(e),
        }
    })?;
    let req = hyper::Request::get(uri)
        .body(Full::new(Bytes::new()))
        .map_err(|e| RelayError::HttpRequest {
            source: Box::new(e),
        })?;

    let response = tokio::time::timeout(HEALTH_TIMEOUT, build_http_client().request(req))
        .await
        .map_err(|_| RelayError::HttpRequest {
            source: format!("health check timed out after {}s", HEALTH_TIMEOUT.as_secs()).into(),
        })?
        .map_err(|e| RelayError::HttpRequest {
            source: Box::new(e),
        })?;

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| RelayError::HttpRequest {
            source: Box::new(e),
        })?
        .to_bytes();
    Ok((status, body))
}

fn verify(status: StatusCode, body: &[u8]) -> Result<(), RelayError> {
    if status != StatusCode::OK {
        return Err(RelayError::HealthCheckFailed(status));
    }
    if body != HEARTCHECK_BODY.as_bytes() {
        return Err(RelayError::UnexpectedHealthBody(
            String::from_utf8_lossy(body).into_owned(),
        ));
    }
    Ok(())
}

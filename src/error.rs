//! Unified error types for hookrelay.
//!
//! Defines [`RelayError`] (the main crate error enum), [`ValidationError`]
//! for route configuration failures, [`ShapeError`] for message shaping and
//! [`DeliveryError`] for the outbound sink. All use `thiserror` for
//! `Display` and `Error` derives. Validation messages carry contextual
//! hints to guide the user toward a fix.

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub route: String,
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  route {}: {}: {}", self.route, self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn format_errors(errors: &[ValidationError]) -> String {
    use std::fmt::Write;
    let mut buf = String::new();
    for (i, e) in errors.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        // write! to String is infallible (only fails on OOM which is unrecoverable)
        let _ = write!(buf, "{e}");
    }
    buf
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RelayError {
    #[error("Route config validation failed:\n{}", format_errors(.errors))]
    ConfigValidation { errors: Vec<ValidationError> },

    #[error("Invalid address: {0}")]
    AddressParse(#[from] std::net::AddrParseError),

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),

    #[error("Health check got an unexpected body: {0:?}")]
    UnexpectedHealthBody(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("payload nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DeliveryError {
    #[error("Telegram API token or chat ID is missing")]
    MissingCredentials,

    #[error("failed to build sink request: {0}")]
    Request(String),

    #[error("sink transport error: {0}")]
    Transport(String),

    #[error("sink request timed out after {0}ms")]
    Timeout(u64),

    #[error("sink responded with status {status}: {body}")]
    Status { status: u16, body: String },
}

impl DeliveryError {
    /// Whether the failure stems from missing sink configuration rather
    /// than from the delivery attempt itself.
    #[must_use]
    pub const fn is_configuration_gap(&self) -> bool {
        matches!(self, Self::MissingCredentials)
    }
}

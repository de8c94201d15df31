use axum::http::StatusCode;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}'")]
    Invalid { key: &'static str, value: String },

    #[error("MAX_RETRIES must be at least 1")]
    ZeroRetries,

    #[error("pong host must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchErrorKind {
    #[error("request failed")]
    Send,
    #[error("reading response body failed")]
    Body,
}

/// Transport-level failure talking to the pong service. Any of these is retried.
#[derive(Debug, Error)]
#[error("{kind}: {url}")]
pub struct FetchError {
    kind: FetchErrorKind,
    url: String,
    #[source]
    source: BoxError,
}

impl FetchError {
    pub fn send(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            kind: FetchErrorKind::Send,
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn body(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            kind: FetchErrorKind::Body,
            url: url.into(),
            source: source.into(),
        }
    }

    /// Status reported for a failed fetch
    pub fn status(&self) -> StatusCode {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

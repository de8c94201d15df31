use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
};

/// `{length}` path segment, digits only. Anything else is answered with 404
/// as if the route did not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Length(pub String);

impl Length {
    pub fn parse(raw: &str) -> Option<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Length(raw.to_string()))
        } else {
            None
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Length {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        Length::parse(&raw).ok_or(StatusCode::NOT_FOUND)
    }
}

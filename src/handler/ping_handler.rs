use crate::{
    handler::length::Length,
    service::forward_service::{ForwardOutcome, forward},
    state::AppState,
};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

// The pong body goes back untouched with 200, even when the pong service
// itself answered with an error status.
pub async fn ping_handler(
    State(app_state): State<AppState>,
    Length(length): Length,
) -> Response {
    match forward(&app_state, &length).await {
        ForwardOutcome::Delivered { response, .. } => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            response.body,
        )
            .into_response(),
        ForwardOutcome::Exhausted { status, .. } => {
            (status, "Service unavailable").into_response()
        }
    }
}

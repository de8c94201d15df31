use crate::{
    handler::length::Length,
    service::measure_service::{Diagnostic, measure},
    state::AppState,
};
use axum::{extract::State, response::Json};

/// Always 200; a failed forward is reported through `code` in the body
pub async fn mping_handler(
    State(app_state): State<AppState>,
    Length(length): Length,
) -> Json<Diagnostic> {
    Json(measure(&app_state, &length).await)
}

use crate::{
    handler::mping_handler::mping_handler, handler::ping_handler::ping_handler, state::AppState,
};
use axum::{Router, routing::get};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/ping/{length}", get(ping_handler))
        .route("/mping/{length}", get(mping_handler))
        .with_state(app_state)
}

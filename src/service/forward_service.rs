use crate::{
    pong::{PongResponse, pong_url},
    state::AppState,
    utils::retry::with_retry,
};
use axum::http::StatusCode;
use std::time::Instant;

#[derive(Debug, PartialEq)]
pub enum ForwardOutcome {
    /// The pong service answered, whatever its status code.
    Delivered {
        response: PongResponse,
        retries: u32,
    },
    /// Every attempt failed at the transport level. `status` comes from the
    /// last failure.
    Exhausted { attempts: u32, status: StatusCode },
}

pub async fn forward(app_state: &AppState, length: &str) -> ForwardOutcome {
    let now = Instant::now();
    let url = pong_url(&app_state.pong_url, length);

    let result = with_retry(
        "fetch_pong",
        || app_state.pong_client.fetch(url.clone()),
        app_state.max_retries,
    )
    .await;

    let outcome = match result {
        Ok(retried) => {
            app_state.metrics.record_forwarded(retried.retries);
            ForwardOutcome::Delivered {
                response: retried.value,
                retries: retried.retries,
            }
        }
        Err(exhausted) => {
            app_state.metrics.record_exhausted(exhausted.attempts);
            ForwardOutcome::Exhausted {
                attempts: exhausted.attempts,
                status: exhausted.last_error.status(),
            }
        }
    };

    app_state.metrics.record_forward_elapsed(now.elapsed());

    outcome
}

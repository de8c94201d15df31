use crate::{
    service::forward_service::{ForwardOutcome, forward},
    state::AppState,
};
use serde::Serialize;
use std::time::Instant;

/// Body of an `/mping` response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Byte length of the pong body, 0 when no attempt succeeded
    pub length: usize,
    pub code: u16,
    pub retries: u32,
    /// Milliseconds spent in the retry loop
    pub duration: f64,
}

pub async fn measure(app_state: &AppState, length: &str) -> Diagnostic {
    let start = Instant::now();
    let outcome = forward(app_state, length).await;
    let duration = start.elapsed().as_secs_f64() * 1000.0;

    match outcome {
        ForwardOutcome::Delivered { response, retries } => Diagnostic {
            length: response.body.len(),
            code: response.status.as_u16(),
            retries,
            duration,
        },
        ForwardOutcome::Exhausted { attempts, status } => Diagnostic {
            length: 0,
            code: status.as_u16(),
            retries: attempts,
            duration,
        },
    }
}

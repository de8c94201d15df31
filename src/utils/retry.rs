use std::future::Future;
use tracing::{trace, warn};

/// Value produced by a retried operation along with the 0-based index of
/// the attempt that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Retried<T> {
    pub value: T,
    pub retries: u32,
}

/// Last error of a retried operation and how many attempts were made.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhausted<E> {
    pub last_error: E,
    pub attempts: u32,
}

/// Runs `operation` up to `max_attempts` times back to back, with no delay
/// in between. Always makes at least one attempt.
pub async fn with_retry<F, Fut, T, E>(
    operation_name: &str,
    operation: F,
    max_attempts: u32,
) -> Result<Retried<T>, Exhausted<E>>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = max_attempts.max(1);
    let mut retries = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(Retried { value, retries }),
            Err(e) => {
                retries += 1;
                if retries >= max_attempts {
                    warn!(
                        "Operation '{}' failed after {} attempts: {}",
                        operation_name, retries, e
                    );
                    return Err(Exhausted {
                        last_error: e,
                        attempts: retries,
                    });
                }

                trace!(
                    "Operation '{}' failed (attempt {}/{}): {}",
                    operation_name, retries, max_attempts, e
                );
            }
        }
    }
}

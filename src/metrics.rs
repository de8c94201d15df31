use std::time::Duration;
use tracing::info;

pub trait Metrics: Send + Sync {
    fn record_forwarded(&self, retries: u32);
    fn record_exhausted(&self, attempts: u32);
    fn record_forward_elapsed(&self, elapsed: Duration);
}

pub struct LoggingMetrics;

impl Metrics for LoggingMetrics {
    fn record_forwarded(&self, retries: u32) {
        info!(target: "metrics", retries, "Recorded forwarded request");
    }

    fn record_exhausted(&self, attempts: u32) {
        info!(target: "metrics", attempts, "Recorded exhausted request");
    }

    fn record_forward_elapsed(&self, elapsed: Duration) {
        info!(target: "metrics", elapsed_us = elapsed.as_micros(), "Recorded forward duration");
    }
}

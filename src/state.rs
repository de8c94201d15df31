use crate::{metrics::Metrics, pong::PongApi};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pong_client: Arc<dyn PongApi + Send + Sync>,
    /// `http://{host}:{port}` of the pong service
    pub pong_url: Arc<str>,
    pub max_retries: u32,
    pub metrics: Arc<dyn Metrics + Send + Sync>,
}

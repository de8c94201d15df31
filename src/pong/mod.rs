pub mod pong_api;

pub use pong_api::{PongApi, PongResponse, build_client};

/// Outbound URL for a given length
pub fn pong_url(base_url: &str, length: &str) -> String {
    format!("{}/pong/{}", base_url, length)
}

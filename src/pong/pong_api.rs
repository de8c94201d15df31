use crate::error::FetchError;
use axum::{body::Bytes, http::StatusCode};
use reqwest::Client;
use std::{future::Future, pin::Pin, time::Duration};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct PongResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

pub trait PongApi: Send + Sync {
    /// GETs `url` and reads the whole body. Error statuses from the pong
    /// service are returned as responses, only transport failures are errors.
    fn fetch<'a>(
        &'a self,
        url: String,
    ) -> Pin<Box<dyn Future<Output = Result<PongResponse, FetchError>> + Send + 'a>>;
}

impl PongApi for Client {
    fn fetch<'a>(
        &'a self,
        url: String,
    ) -> Pin<Box<dyn Future<Output = Result<PongResponse, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::send(url.as_str(), e))?;

            let status = response.status();
            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::body(url.as_str(), e))?;

            Ok(PongResponse { status, body })
        })
    }
}

pub fn build_client(request_timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    info!("Init pong client, request timeout: {:?}", request_timeout);

    let builder = Client::builder();
    match request_timeout {
        Some(timeout) => builder.timeout(timeout).build(),
        None => builder.build(),
    }
}

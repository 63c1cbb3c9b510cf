use crate::errors::AppError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Sends a single configuration GET and reports the HTTP status code.
///
/// A returned `Err` means no response was received at all (refused, unreachable,
/// timed out). Any status, including error statuses, is an `Ok`.
#[async_trait]
pub trait ConfigTransport: Send + Sync {
    async fn send(&self, url: &str) -> Result<u16, AppError>;
}

#[derive(Clone)]
pub struct CameraController {
    http_client: Client,
}

impl CameraController {
    pub fn new(request_timeout: Duration) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| AppError::Http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(CameraController { http_client })
    }
}

#[async_trait]
impl ConfigTransport for CameraController {
    async fn send(&self, url: &str) -> Result<u16, AppError> {
        let start_time = Instant::now();
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        debug!("GET {} answered {} in {:?}", url, status, start_time.elapsed());
        Ok(status.as_u16())
    }
}

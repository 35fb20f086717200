//! Default HTTP transport.
//!
//! One POST per call: send the JSON payload, split reqwest failures into
//! timeout vs. network, map error statuses to the [`ApiError`] taxonomy,
//! return the body as text otherwise. No retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;

use crate::client::DEFAULT_BASE_URL;
use crate::error::{ApiError, Result};
use crate::traits::ApiRequester;
use crate::types::RequestPayload;
use crate::utils::truncate_for_log;

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Map an HTTP error status to the taxonomy. Returns `None` for statuses
/// below 300.
fn map_status(status: u16, body: &str) -> Option<ApiError> {
    let raw_message = if body.is_empty() {
        None
    } else {
        Some(body.to_string())
    };
    match status {
        401 | 402 | 403 => Some(ApiError::AuthError {
            status,
            raw_message,
        }),
        400 | 422 => Some(ApiError::BadRequest {
            status,
            raw_message,
        }),
        s if s >= 300 => Some(ApiError::HttpError {
            status,
            raw_message,
        }),
        _ => None,
    }
}

/// The reqwest-backed [`ApiRequester`] used by
/// [`Client::new`](crate::Client::new).
pub struct HttpTransport {
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport pointed at the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a transport pointed at a custom endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: ReqwestClient::builder()
                .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiRequester for HttpTransport {
    async fn post(&self, payload: &RequestPayload) -> Result<String> {
        log::debug!("POST {}", self.base_url);

        let response = self
            .client
            .post(&self.base_url)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    ApiError::NetworkError {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let body = response.text().await.map_err(|e| ApiError::NetworkError {
            detail: format!("failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        if let Some(error) = map_status(status, &body) {
            return Err(error);
        }

        Ok(body)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}

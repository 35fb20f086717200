use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::RequestPayload;

/// The transport collaborator that actually issues HTTP requests.
///
/// The [`Client`](crate::Client) owns one requester and funnels every call
/// through [`post`](Self::post). The default implementation is
/// [`HttpTransport`](crate::HttpTransport); custom implementations are the
/// seam for tests and instrumentation.
///
/// `post` must translate HTTP status codes into the
/// [`ApiError`](crate::ApiError) taxonomy (401/402/403 →
/// [`AuthError`](crate::ApiError::AuthError), 400/422 →
/// [`BadRequest`](crate::ApiError::BadRequest), any other status >= 300 →
/// [`HttpError`](crate::ApiError::HttpError)) and report network-level
/// failures as [`NetworkError`](crate::ApiError::NetworkError) or
/// [`Timeout`](crate::ApiError::Timeout). Retry policy, if any, belongs to
/// the implementation; the client never retries.
#[async_trait]
pub trait ApiRequester: Send + Sync {
    /// Send the payload as an HTTP POST and return the raw response body.
    async fn post(&self, payload: &RequestPayload) -> Result<String>;

    /// Endpoint URL requests are sent to.
    fn base_url(&self) -> &str;

    /// Replace the endpoint URL. `None` restores the default endpoint.
    fn set_base_url(&mut self, url: Option<String>);

    /// Request timeout.
    fn timeout(&self) -> Duration;

    /// Replace the request timeout.
    fn set_timeout(&mut self, timeout: Duration);
}

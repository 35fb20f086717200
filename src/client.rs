use std::time::Duration;

use crate::error::{ApiError, Result};
use crate::traits::ApiRequester;
use crate::transport::HttpTransport;
use crate::types::{OutputFormat, RequestPayload, SearchRequest, SearchResponse};
use crate::utils::truncate_for_log;
use crate::validate;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://reverse-dns.whoisxmlapi.com/api/v1";

/// Maximum (and default) number of records per request.
pub const MAX_LIMIT: u32 = 1000;

/// Reverse DNS API client.
///
/// Owns the API key and the transport it sends requests through. Every
/// call validates its options client-side, builds a fresh payload and
/// performs a single round trip; no state is shared between calls and no
/// retries are performed.
pub struct Client {
    api_key: String,
    requester: Box<dyn ApiRequester>,
}

impl Client {
    /// Create a client using the default HTTP transport and endpoint.
    ///
    /// A non-empty `api_key` must match the `at_` + 29 alphanumerics
    /// format. The empty string is accepted here and rejected with
    /// [`ApiError::EmptyApiKey`] when a request is issued.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_requester(api_key, Box::new(HttpTransport::new()))
    }

    /// Create a client with a custom transport.
    pub fn with_requester(
        api_key: impl Into<String>,
        requester: Box<dyn ApiRequester>,
    ) -> Result<Self> {
        let mut client = Self {
            api_key: String::new(),
            requester,
        };
        client.set_api_key(api_key)?;
        Ok(client)
    }

    /// The configured API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replace the API key, validating its format unless empty.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> Result<()> {
        let api_key = api_key.into();
        if !api_key.is_empty() {
            validate::api_key(&api_key)?;
        }
        self.api_key = api_key;
        Ok(())
    }

    /// The endpoint URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }

    /// Replace the endpoint URL. `None` restores [`DEFAULT_BASE_URL`].
    pub fn set_base_url(&mut self, url: Option<String>) {
        self.requester.set_base_url(url);
    }

    /// The request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.requester.timeout()
    }

    /// Replace the request timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.requester.set_timeout(timeout);
    }

    /// Fetch and decode a search response.
    ///
    /// Forces the output format to JSON regardless of what the request
    /// asks for (both `output_format` and the `response_format` alias are
    /// overridden), then decodes the body into a [`SearchResponse`].
    /// A body that is not valid JSON, or that lacks the `result` root
    /// element, fails with [`ApiError::UnparsableResponse`]; validation
    /// and transport errors are those of [`get_raw`](Self::get_raw).
    pub async fn get(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let mut request = request.clone();
        request.output_format = Some(OutputFormat::Json.as_str().to_string());
        request.response_format = None;

        let body = self.get_raw(&request).await?;

        let parsed: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(&body));
            ApiError::UnparsableResponse {
                detail: format!("could not parse API response: {e}"),
            }
        })?;

        if parsed.get("result").is_none() {
            log::error!("Response lacks the result root element");
            log::error!("Raw response: {}", truncate_for_log(&body));
            return Err(ApiError::UnparsableResponse {
                detail: "could not find the result root element".to_string(),
            });
        }

        serde_json::from_value(parsed).map_err(|e| ApiError::UnparsableResponse {
            detail: format!("could not decode API response: {e}"),
        })
    }

    /// Fetch the raw response body, in whatever format the request asks
    /// for.
    ///
    /// The empty-key check runs first, before any other validation; then
    /// terms, record type, output format and limit are validated in that
    /// order and the payload is handed to the transport. The body is
    /// returned untouched regardless of its shape. Fails with
    /// [`ApiError::EmptyApiKey`], [`ApiError::InvalidParameter`], or
    /// whatever the transport reports.
    pub async fn get_raw(&self, request: &SearchRequest) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(ApiError::EmptyApiKey);
        }

        let payload = self.build_payload(request)?;
        log::debug!(
            "Search: {} term(s), record type {}, limit {}",
            payload.terms.len(),
            payload.record_type,
            payload.limit
        );

        self.requester.post(&payload).await
    }

    /// Validate the request options and assemble the wire payload.
    fn build_payload(&self, request: &SearchRequest) -> Result<RequestPayload> {
        validate::terms(&request.terms)?;

        let record_type = match request.record_type.as_deref() {
            Some(value) => validate::record_type(value)?,
            None => {
                return Err(ApiError::InvalidParameter {
                    param: "record_type".to_string(),
                    detail: "record type required".to_string(),
                });
            }
        };

        // The response_format alias takes precedence when both are set.
        let format_option = request
            .response_format
            .as_deref()
            .or(request.output_format.as_deref());
        let output_format = match format_option {
            Some(value) => validate::output_format(value)?,
            None => OutputFormat::Json,
        };

        let limit = match request.limit {
            Some(value) => validate::limit(value)?,
            None => MAX_LIMIT,
        };

        Ok(RequestPayload {
            api_key: self.api_key.clone(),
            record_type,
            terms: request.terms.clone(),
            limit,
            output_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecordType, SearchField, SearchTerm};

    const KEY: &str = "at_abcdefghijklmnopqrstuvwxyz012";

    fn client() -> Client {
        Client::new(KEY).unwrap()
    }

    fn request() -> SearchRequest {
        SearchRequest::new(
            vec![SearchTerm::new(SearchField::Domain, "facebook.*")],
            "txt",
        )
    }

    // ---- construction & configuration ----

    #[test]
    fn new_accepts_valid_key() {
        assert!(Client::new(KEY).is_ok());
    }

    #[test]
    fn new_accepts_empty_key() {
        let client = Client::new("").unwrap();
        assert_eq!(client.api_key(), "");
    }

    #[test]
    fn new_rejects_malformed_key() {
        let result = Client::new("not-a-key");
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { ref param, .. }) if param == "api_key"
        ));
    }

    #[test]
    fn set_api_key_validates() {
        let mut client = client();
        assert!(client.set_api_key("at_x").is_err());
        assert_eq!(client.api_key(), KEY);
        assert!(client.set_api_key("").is_ok());
        assert_eq!(client.api_key(), "");
    }

    #[test]
    fn base_url_defaults_and_resets() {
        let mut client = client();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        client.set_base_url(Some("http://localhost:8080".to_string()));
        assert_eq!(client.base_url(), "http://localhost:8080");
        client.set_base_url(None);
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn timeout_configurable() {
        let mut client = client();
        client.set_timeout(Duration::from_secs(7));
        assert_eq!(client.timeout(), Duration::from_secs(7));
    }

    // ---- payload building ----

    #[test]
    fn payload_defaults_applied() {
        let payload = client().build_payload(&request()).unwrap();
        assert_eq!(payload.api_key, KEY);
        assert_eq!(payload.record_type, RecordType::Txt);
        assert_eq!(payload.limit, MAX_LIMIT);
        assert_eq!(payload.output_format, OutputFormat::Json);
    }

    #[test]
    fn payload_normalizes_record_type_case() {
        let mut req = request();
        req.record_type = Some("TXT".to_string());
        let payload = client().build_payload(&req).unwrap();
        assert_eq!(payload.record_type, RecordType::Txt);
    }

    #[test]
    fn payload_response_format_alias_wins() {
        let mut req = request();
        req.output_format = Some("json".to_string());
        req.response_format = Some("xml".to_string());
        let payload = client().build_payload(&req).unwrap();
        assert_eq!(payload.output_format, OutputFormat::Xml);
    }

    #[test]
    fn payload_missing_record_type_rejected() {
        let mut req = request();
        req.record_type = None;
        let result = client().build_payload(&req);
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { ref param, .. }) if param == "record_type"
        ));
    }

    #[test]
    fn terms_validated_before_record_type() {
        // Both invalid: the term-list failure must fire first.
        let req = SearchRequest {
            terms: vec![],
            record_type: Some("bogus".to_string()),
            ..SearchRequest::default()
        };
        let result = client().build_payload(&req);
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { ref param, .. }) if param == "terms"
        ));
    }

    #[test]
    fn format_validated_before_limit() {
        let mut req = request();
        req.output_format = Some("yaml".to_string());
        req.limit = Some(0);
        let result = client().build_payload(&req);
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { ref param, .. }) if param == "output_format"
        ));
    }

    #[test]
    fn payload_limit_out_of_range_rejected() {
        let mut req = request();
        req.limit = Some(1001);
        let result = client().build_payload(&req);
        assert!(matches!(
            result,
            Err(ApiError::InvalidParameter { ref param, .. }) if param == "limit"
        ));
    }
}

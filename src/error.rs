use serde::{Deserialize, Serialize};

/// Unified error type for all Reverse DNS API operations.
///
/// Validation failures ([`InvalidParameter`](Self::InvalidParameter),
/// [`EmptyApiKey`](Self::EmptyApiKey)) are raised before any network call.
/// Transport failures ([`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout)) and HTTP status errors
/// ([`AuthError`](Self::AuthError), [`BadRequest`](Self::BadRequest),
/// [`HttpError`](Self::HttpError)) propagate from the transport unchanged —
/// this library never retries.
///
/// All variants are serializable for structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, broken transfer, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The configured API key is the empty string.
    ///
    /// Raised at call time, before any other validation. Distinct from the
    /// format check, which reports [`InvalidParameter`](Self::InvalidParameter).
    EmptyApiKey,

    /// A request parameter failed client-side validation
    /// (bad term shape, unknown record type, limit out of range, etc.).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The server rejected the request with HTTP 401, 402 or 403.
    AuthError {
        /// HTTP status code.
        status: u16,
        /// Response body, if one was returned.
        raw_message: Option<String>,
    },

    /// The server rejected the request with HTTP 400 or 422.
    BadRequest {
        /// HTTP status code.
        status: u16,
        /// Response body, if one was returned.
        raw_message: Option<String>,
    },

    /// The server returned an HTTP status >= 300 not covered by
    /// [`AuthError`](Self::AuthError) or [`BadRequest`](Self::BadRequest).
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Response body, if one was returned.
        raw_message: Option<String>,
    },

    /// The response body carried an API-level error message.
    ///
    /// Not produced by [`Client::get`](crate::Client::get) — bodies without
    /// the success shape are reported as
    /// [`UnparsableResponse`](Self::UnparsableResponse) there. Callers
    /// decoding error payloads from
    /// [`Client::get_raw`](crate::Client::get_raw) output can obtain this
    /// variant through [`ErrorMessage`](crate::ErrorMessage).
    ResponseError {
        /// API error code.
        #[serde(rename = "error_code")]
        code: i64,
        /// API error message.
        message: String,
    },

    /// The response body could not be decoded as JSON, or decoded but
    /// lacked the expected success shape.
    UnparsableResponse {
        /// Details about the decode failure.
        detail: String,
    },
}

impl ApiError {
    /// Whether this error is expected behavior (caller input, credentials),
    /// used for log leveling.
    ///
    /// Returns `true` for `warn`-level conditions, `false` for `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::EmptyApiKey
                | Self::InvalidParameter { .. }
                | Self::AuthError { .. }
                | Self::BadRequest { .. }
                | Self::ResponseError { .. }
        )
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::EmptyApiKey => {
                write!(f, "API key is empty")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
            Self::AuthError {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Authentication failed (HTTP {status}): {msg}")
                } else {
                    write!(f, "Authentication failed (HTTP {status})")
                }
            }
            Self::BadRequest {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Bad request (HTTP {status}): {msg}")
                } else {
                    write!(f, "Bad request (HTTP {status})")
                }
            }
            Self::HttpError {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "HTTP {status}: {msg}")
                } else {
                    write!(f, "HTTP {status}")
                }
            }
            Self::ResponseError { code, message } => {
                write!(f, "API error {code}: {message}")
            }
            Self::UnparsableResponse { detail } => {
                write!(f, "Unparsable API response: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

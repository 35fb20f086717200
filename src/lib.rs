//! # reverse-dns-client
//!
//! Client library for the [WhoisXML Reverse DNS API](https://reverse-dns.whoisxmlapi.com/),
//! which searches reverse-DNS records by domain name or record value.
//!
//! Search options are validated client-side before anything touches the
//! network, the request is a single JSON POST, and the JSON response is
//! decoded into typed result objects. XML output can be fetched as raw
//! text but is never parsed.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! reverse-dns-client = "0.1"
//! ```
//!
//! ```rust,no_run
//! use reverse_dns_client::{Client, SearchField, SearchRequest, SearchTerm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("at_yourkey0000000000000000000000")?;
//!
//!     let request = SearchRequest::new(
//!         vec![SearchTerm::new(SearchField::Domain, "facebook.*")],
//!         "txt",
//!     );
//!
//!     // Typed access to the decoded response
//!     let response = client.get(&request).await?;
//!     println!("{} record(s)", response.size);
//!     for record in &response.result {
//!         println!("{} -> {}", record.name, record.value);
//!     }
//!
//!     // Or the raw body, e.g. as XML
//!     let mut raw_request = request.clone();
//!     raw_request.output_format = Some("xml".to_string());
//!     let xml = client.get_raw(&raw_request).await?;
//!     println!("{xml}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Search Options
//!
//! A request carries 1 to 4 [`SearchTerm`]s, each matching a
//! [`SearchField`] (`domain` or `value`) against a pattern of at least 3
//! characters, optionally negated with `exclude`. The record type is one
//! of `cname`, `soa` or `txt` (any casing); `limit` caps the result count
//! at 1..=1000 and defaults to 1000.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). The enum
//! provides structured variants for the common failure modes:
//!
//! - [`ApiError::InvalidParameter`] — client-side validation failed;
//!   nothing was sent
//! - [`ApiError::EmptyApiKey`] — no key configured at call time
//! - [`ApiError::AuthError`] — the server answered 401, 402 or 403
//! - [`ApiError::UnparsableResponse`] — the body was not the expected JSON
//!   shape
//! - [`ApiError::NetworkError`] / [`ApiError::Timeout`] — transport
//!   failure, propagated unchanged
//!
//! This library never retries; transient failures surface directly to the
//! caller.

mod client;
mod error;
mod traits;
mod transport;
mod types;
mod utils;
mod validate;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client and its constants
pub use client::{Client, DEFAULT_BASE_URL, MAX_LIMIT};

// Re-export the transport seam
pub use traits::ApiRequester;
pub use transport::HttpTransport;

// Re-export types
pub use types::{
    ErrorMessage, OutputFormat, Record, RecordType, RequestPayload, SearchField, SearchRequest,
    SearchResponse, SearchTerm,
};

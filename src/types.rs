use serde::{Deserialize, Deserializer, Serialize};

// ============ Search Fields ============

/// The closed set of field names a search term may target.
///
/// Serialized as lowercase strings (`"domain"`, `"value"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Match against the reverse-DNS domain name.
    Domain,
    /// Match against the DNS record value.
    Value,
}

impl SearchField {
    /// All recognized fields.
    pub const ALL: [Self; 2] = [Self::Domain, Self::Value];

    /// Wire name of this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Value => "value",
        }
    }

    /// Whether `name` is a recognized field name.
    #[must_use]
    pub fn is_valid_name(name: &str) -> bool {
        Self::ALL.iter().any(|f| f.as_str() == name)
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Search Terms ============

/// One field/value search condition, optionally negated via `exclude`.
///
/// The `field` is kept as a string and checked against [`SearchField`]
/// during validation; use [`SearchTerm::new`] to construct well-formed
/// terms from the typed field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    /// Field to match, one of the [`SearchField`] wire names.
    pub field: String,
    /// Search pattern, at least 3 characters (e.g. `"facebook.*"`).
    pub term: String,
    /// Negate the condition. Omitted from the wire payload when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<bool>,
}

impl SearchTerm {
    /// Create a term matching `field` against `term`.
    pub fn new(field: SearchField, term: impl Into<String>) -> Self {
        Self {
            field: field.as_str().to_string(),
            term: term.into(),
            exclude: None,
        }
    }

    /// Create a negated term (`exclude: true`).
    pub fn excluding(field: SearchField, term: impl Into<String>) -> Self {
        Self {
            field: field.as_str().to_string(),
            term: term.into(),
            exclude: Some(true),
        }
    }
}

// ============ Record Types & Output Formats ============

/// DNS record type accepted by the search endpoint.
///
/// Serialized as lowercase strings (`"cname"`, `"soa"`, `"txt"`).
/// Caller input is accepted case-insensitively and normalized during
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// Canonical name records.
    Cname,
    /// Start-of-authority records.
    Soa,
    /// Text records.
    Txt,
}

impl RecordType {
    /// Normalized wire name of this record type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cname => "cname",
            Self::Soa => "soa",
            Self::Txt => "txt",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response format of the API.
///
/// Only [`Json`](Self::Json) is decoded by this library; XML bodies are
/// returned verbatim from [`Client::get_raw`](crate::Client::get_raw).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON, the parsable format.
    Json,
    /// XML, returned as raw text only.
    Xml,
}

impl OutputFormat {
    /// Normalized wire name of this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Search Request ============

/// Options for [`Client::get`](crate::Client::get) and
/// [`Client::get_raw`](crate::Client::get_raw).
///
/// `terms` and `record_type` are required; the rest default server-side
/// to `limit = 1000` and JSON output. String options are validated and
/// normalized (case-insensitively) when the request is issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// 1 to 4 search terms.
    pub terms: Vec<SearchTerm>,
    /// Record type to search: `cname`, `soa` or `txt` (any casing).
    pub record_type: Option<String>,
    /// Maximum number of records to return, 1..=1000. Defaults to 1000.
    pub limit: Option<u32>,
    /// Response format: `json` or `xml` (any casing). Defaults to `json`.
    pub output_format: Option<String>,
    /// Alias for `output_format`; takes precedence when both are set.
    pub response_format: Option<String>,
}

impl SearchRequest {
    /// Create a request with the required options.
    pub fn new(terms: Vec<SearchTerm>, record_type: impl Into<String>) -> Self {
        Self {
            terms,
            record_type: Some(record_type.into()),
            ..Self::default()
        }
    }
}

// ============ Wire Payload ============

/// The exact payload POSTed to the API, built from validated inputs.
///
/// Custom [`ApiRequester`](crate::ApiRequester) implementations serialize
/// this as the JSON request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    /// API key, format-checked.
    pub api_key: String,
    /// Normalized record type.
    pub record_type: RecordType,
    /// Validated search terms.
    pub terms: Vec<SearchTerm>,
    /// Validated limit.
    pub limit: u32,
    /// Normalized response format.
    pub output_format: OutputFormat,
}

// ============ Response Model ============

// The live API is loose about response field types: timestamps arrive as
// integers, and error payloads have been observed with both numeric and
// string codes. Decoding is per-field with explicit fallbacks; only
// absent/null collapse to the zero value.

fn loose_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

fn loose_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => {
            n.as_u64().and_then(|v| u32::try_from(v).ok()).unwrap_or(0)
        }
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn loose_code<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// One reverse-DNS result entry.
///
/// All fields are strings; absent or `null` source fields decode to `""`,
/// numeric timestamps to their decimal form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record value (e.g. an SOA serial line or TXT content).
    #[serde(default, deserialize_with = "loose_string")]
    pub value: String,
    /// Record name.
    #[serde(default, deserialize_with = "loose_string")]
    pub name: String,
    /// Unix timestamp of the first observation.
    #[serde(default, deserialize_with = "loose_string")]
    pub first_seen: String,
    /// Unix timestamp of the most recent observation.
    #[serde(default, deserialize_with = "loose_string")]
    pub last_visit: String,
}

/// A successfully parsed API response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching records, in API order.
    #[serde(default)]
    pub result: Vec<Record>,
    /// Number of records matched, up to the requested limit.
    #[serde(default, deserialize_with = "loose_count")]
    pub size: u32,
}

/// An API-level error payload.
///
/// The wire field for the message is literally named `messages`.
/// Not decoded automatically; see
/// [`ApiError::ResponseError`](crate::ApiError::ResponseError).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorMessage {
    /// API error code.
    #[serde(default, deserialize_with = "loose_code")]
    pub code: i64,
    /// Human-readable error message.
    #[serde(rename = "messages", default, deserialize_with = "loose_string")]
    pub message: String,
}

impl From<ErrorMessage> for crate::error::ApiError {
    fn from(e: ErrorMessage) -> Self {
        Self::ResponseError {
            code: e.code,
            message: e.message,
        }
    }
}

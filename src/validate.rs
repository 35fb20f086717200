//! Client-side request validation.
//!
//! Pure functions, each returning the normalized value or
//! [`ApiError::InvalidParameter`] naming the offending parameter.
//! Everything here runs before any network traffic.

use crate::client::MAX_LIMIT;
use crate::error::{ApiError, Result};
use crate::types::{OutputFormat, RecordType, SearchField, SearchTerm};

/// Minimum length of a search term string.
const MIN_TERM_LEN: usize = 3;

/// API key prefix.
const KEY_PREFIX: &[u8] = b"at_";
/// Number of alphanumeric characters after the prefix.
const KEY_SUFFIX_LEN: usize = 29;

fn invalid(param: &str, detail: impl Into<String>) -> ApiError {
    ApiError::InvalidParameter {
        param: param.to_string(),
        detail: detail.into(),
    }
}

/// Check the API key format: `at_` followed by exactly 29 ASCII
/// alphanumeric characters, case-insensitive.
///
/// Key emptiness is a separate condition checked at call time and is not
/// this function's concern.
pub(crate) fn api_key(key: &str) -> Result<()> {
    let bytes = key.as_bytes();
    let well_formed = bytes.len() == KEY_PREFIX.len() + KEY_SUFFIX_LEN
        && bytes[..KEY_PREFIX.len()].eq_ignore_ascii_case(KEY_PREFIX)
        && bytes[KEY_PREFIX.len()..]
            .iter()
            .all(u8::is_ascii_alphanumeric);

    if well_formed {
        Ok(())
    } else {
        Err(invalid("api_key", "invalid API key format"))
    }
}

/// Check the term list: 1 to 4 entries, each with a recognized field name
/// and a term of at least 3 characters.
pub(crate) fn terms(terms: &[SearchTerm]) -> Result<()> {
    if terms.is_empty() {
        return Err(invalid("terms", "search terms required"));
    }
    if terms.len() > 4 {
        return Err(invalid(
            "terms",
            "search term list must contain between 1 and 4 items",
        ));
    }
    for term in terms {
        if !SearchField::is_valid_name(&term.field) {
            return Err(invalid(
                "terms",
                format!("unknown field name: '{}'", term.field),
            ));
        }
        if term.term.chars().count() < MIN_TERM_LEN {
            return Err(invalid(
                "terms",
                format!("term string must be at least {MIN_TERM_LEN} characters"),
            ));
        }
    }
    Ok(())
}

/// Parse a record type string, case-insensitively, into its normalized form.
pub(crate) fn record_type(value: &str) -> Result<RecordType> {
    match value.to_ascii_lowercase().as_str() {
        "cname" => Ok(RecordType::Cname),
        "soa" => Ok(RecordType::Soa),
        "txt" => Ok(RecordType::Txt),
        _ => Err(invalid(
            "record_type",
            format!("unknown record type: '{value}'"),
        )),
    }
}

/// Parse an output format string, case-insensitively, into its normalized
/// form.
pub(crate) fn output_format(value: &str) -> Result<OutputFormat> {
    match value.to_ascii_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "xml" => Ok(OutputFormat::Xml),
        _ => Err(invalid(
            "output_format",
            format!("response format must be json or xml, got '{value}'"),
        )),
    }
}

/// Check the result limit: 1..=[`MAX_LIMIT`].
pub(crate) fn limit(value: u32) -> Result<u32> {
    if (1..=MAX_LIMIT).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(
            "limit",
            format!("limit must be between 1 and {MAX_LIMIT}"),
        ))
    }
}

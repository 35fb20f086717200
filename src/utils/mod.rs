//! Utility helpers.
//!
//! Response bodies can run to hundreds of kilobytes and payloads carry the
//! API key; debug logging goes through [`truncate_for_log`] so neither
//! floods the log.

/// Maximum number of bytes of a value included in log output.
const LOG_LIMIT: usize = 256;

/// Bound a string for logging, keeping a char-boundary-safe prefix and
/// noting the original length when truncated.
pub(crate) fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_LIMIT {
        return s.to_string();
    }
    let mut end = LOG_LIMIT;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... ({} bytes total)", &s[..end], s.len())
}

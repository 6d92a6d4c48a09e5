//! Log sanitization utilities
//!
//! Keeps response bodies and user-typed sample strings from flooding
//! debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Maximum number of bytes of a sample string included in log output.
const SAMPLE_TEXT_LIMIT: usize = 32;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

fn shorten(s: &str, limit: usize) -> String {
    if s.len() <= limit {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, limit)],
            s.len()
        )
    }
}

/// Truncate a response body for safe logging.
pub fn truncate_for_log(s: &str) -> String {
    shorten(s, TRUNCATE_LIMIT)
}

/// Truncate a preview sample string for logging alongside a font id.
pub fn sample_text_for_log(s: &str) -> String {
    shorten(s, SAMPLE_TEXT_LIMIT)
}

//! Utility modules.

/// Log sanitization utilities to keep log lines short.
pub mod log_sanitizer;

use serde::{Deserialize, Serialize};

/// Unified error type for all font server requests.
///
/// Each variant carries the `endpoint` that produced it (see
/// [`Endpoint::name`](crate::Endpoint::name)) plus variant-specific context.
/// All variants are serializable for structured error reporting.
///
/// No variant is retried automatically. Callers decide what a failure means:
/// a failed listing is reported to the user, a failed per-font request is
/// simply attempted again the next time it is needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success status code.
    HttpStatus {
        /// Endpoint that produced the error.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for display.
        body: String,
    },

    /// Failed to parse the server's response.
    ParseError {
        /// Endpoint that produced the error.
        endpoint: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The configured base URL (or a URL derived from it) is not valid.
    InvalidUrl {
        /// Details about the malformed URL.
        detail: String,
    },
}

impl ClientError {
    /// 是否为瞬时故障（网络、超时、5xx），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => *status >= 500,
            Self::ParseError { .. } | Self::InvalidUrl { .. } => false,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { endpoint, detail } => {
                write!(f, "[{endpoint}] Network error: {detail}")
            }
            Self::Timeout { endpoint, detail } => {
                write!(f, "[{endpoint}] Request timed out: {detail}")
            }
            Self::HttpStatus {
                endpoint,
                status,
                body,
            } => {
                if body.is_empty() {
                    write!(f, "[{endpoint}] HTTP {status}")
                } else {
                    write!(f, "[{endpoint}] HTTP {status}: {body}")
                }
            }
            Self::ParseError { endpoint, detail } => {
                write!(f, "[{endpoint}] Parse error: {detail}")
            }
            Self::InvalidUrl { detail } => write!(f, "Invalid URL: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

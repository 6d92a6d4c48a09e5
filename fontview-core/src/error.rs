//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use fontview_client::ClientError;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// The fetched preview is not a complete, decodable image
    #[error("Invalid preview image: {0}")]
    InvalidImage(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration value out of range
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Server request failed (converting from client library)
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (transient server trouble, user input) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) => true,
            Self::Client(e) => e.is_transient(),
            Self::InvalidImage(_) | Self::ConfigError(_) => false,
        }
    }

    /// 日志级别：预期内的错误用 `warn`，其余用 `error`
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        if self.is_expected() {
            log::Level::Warn
        } else {
            log::Level::Error
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

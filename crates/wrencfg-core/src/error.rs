//! Shared error type across wrencfg crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Configuration source temporarily unavailable.
    Unavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Unavailable => "UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WrenCfgError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum WrenCfgError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("config unavailable: {0}")]
    Unavailable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl WrenCfgError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            WrenCfgError::BadRequest(_) => ClientCode::BadRequest,
            WrenCfgError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            WrenCfgError::Unavailable(_) => ClientCode::Unavailable,
            WrenCfgError::Internal(_) => ClientCode::Internal,
        }
    }
}

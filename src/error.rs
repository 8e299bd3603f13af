//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// A later step of a multi-record write failed after earlier steps landed.
    #[error("Write step `{step}` failed (compensated: {compensated}): {source}")]
    PartialWrite {
        step: &'static str,
        compensated: bool,
        #[source]
        source: Box<SdkError>,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// Whether this error forced the session to be cleared.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, SdkError::Auth(AuthError::SessionExpired))
    }
}

/// Backend configuration errors. Fatal at construction time.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing backend URL")]
    MissingUrl,

    #[error("Missing backend API key")]
    MissingApiKey,

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the backend's message, or `HTTP <status>`.
    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session expired. Please login again.")]
    SessionExpired,

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Account is not active")]
    AccountInactive,
}

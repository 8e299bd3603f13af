//! Backend configuration: base URL, API key, and defaults.

use crate::error::ConfigError;
use std::time::Duration;

/// Environment variable holding the backend base URL.
pub const ENV_BACKEND_URL: &str = "SUPABASE_URL";

/// Environment variable holding the backend API key.
pub const ENV_API_KEY: &str = "SUPABASE_ANON_KEY";

/// Path prefix of the backend's table REST interface.
pub const REST_PREFIX: &str = "/rest/v1";

/// How long a user's aggregated balances stay fresh.
pub const DEFAULT_BALANCE_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Default request timeout (native only).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the hosted backend.
///
/// Both values are required; an empty value is treated as missing.
#[derive(Clone)]
pub struct BackendConfig {
    url: String,
    api_key: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let api_key = api_key.into().trim().to_string();
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        #[cfg(feature = "http")]
        reqwest::header::HeaderValue::from_str(&api_key).map_err(|_| {
            ConfigError::InvalidHeader("API key contains characters not allowed in a header".to_string())
        })?;
        Ok(Self { url, api_key })
    }

    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(ENV_BACKEND_URL).map_err(|_| ConfigError::MissingUrl)?;
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingApiKey)?;
        Self::new(url, api_key)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Full REST root, e.g. `https://xyz.supabase.co/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}{}", self.url, REST_PREFIX)
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

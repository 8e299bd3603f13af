//! Low-level HTTP gateway: `BackofficeHttp`.
//!
//! Every backend call goes through [`BackofficeHttp::request`]: it builds the
//! table URL, attaches the API key and the session's bearer token, and
//! normalizes the outcome. Sub-clients wrap this with typed helpers.

use crate::auth::Session;
use crate::config::BackendConfig;
use crate::domain::balance::client::BalanceCache;
use crate::error::{AuthError, HttpError, SdkError};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

/// Called once when an expired token forces the session to be cleared.
///
/// Hosts use it to route back to their login view.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Message the backend sends with a 401 when the bearer token has expired.
const JWT_EXPIRED: &str = "JWT expired";

/// Per-call options: method, JSON body, extra headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn patch(body: serde_json::Value) -> Self {
        Self {
            method: Method::PATCH,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    /// Add a header. Overrides the gateway defaults, except `Authorization`
    /// while a session token is held.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub hint: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn is_token_expired(&self) -> bool {
        self.message.as_deref() == Some(JWT_EXPIRED)
    }
}

/// Low-level HTTP client for the backend's table REST interface.
#[derive(Clone)]
pub struct BackofficeHttp {
    rest_url: String,
    api_key: String,
    client: Client,
    session: Session,
    balance_cache: BalanceCache,
    on_session_expired: Option<SessionExpiredHook>,
}

impl BackofficeHttp {
    pub(crate) fn new(
        config: &BackendConfig,
        session: Session,
        balance_cache: BalanceCache,
        on_session_expired: Option<SessionExpiredHook>,
        #[allow(unused_variables)] timeout: std::time::Duration,
    ) -> Result<Self, SdkError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(timeout)
                .pool_max_idle_per_host(10)
                .connect_timeout(Duration::from_secs(10));
        }
        let client = builder.build().map_err(HttpError::from)?;

        tracing::debug!(url = %config.url(), "Backend client initialized");

        Ok(Self {
            rest_url: config.rest_url(),
            api_key: config.api_key().to_string(),
            client,
            session,
            balance_cache,
            on_session_expired,
        })
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Perform one call against `{rest_url}/{endpoint}`.
    ///
    /// - 204, or any 2xx with an empty body → `Ok(None)`.
    /// - Other 2xx → `Ok(Some(json))`.
    /// - 401 `JWT expired` → session cleared, hook fired, `SessionExpired`.
    /// - Other non-2xx → `HttpError::Backend` with the backend message, or
    ///   `HTTP <status>` when none was sent.
    ///
    /// No retries.
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<serde_json::Value>, SdkError> {
        let url = format!("{}/{}", self.rest_url, endpoint.trim_start_matches('/'));
        let headers = self.build_headers(&options.headers).await?;

        tracing::debug!(method = %options.method, endpoint, "Backend request");

        let mut req = self.client.request(options.method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(HttpError::from)?;
        let status = resp.status();

        tracing::debug!(status = status.as_u16(), endpoint, "Backend response");

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if status.is_success() {
            let bytes = resp.bytes().await.map_err(HttpError::from)?;
            if bytes.iter().all(|b| b.is_ascii_whitespace()) {
                return Ok(None);
            }
            return Ok(Some(serde_json::from_slice(&bytes)?));
        }

        let body_text = resp.text().await.unwrap_or_default();
        let error: ErrorBody = serde_json::from_str(&body_text).unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED && error.is_token_expired() {
            self.expire_session().await;
            return Err(AuthError::SessionExpired.into());
        }

        let message = error
            .message
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        tracing::warn!(
            status = status.as_u16(),
            endpoint,
            code = error.code.as_deref().unwrap_or(""),
            "Backend error: {}",
            message
        );

        Err(HttpError::Backend {
            status: status.as_u16(),
            message,
        }
        .into())
    }

    /// GET and deserialize. A no-content response is a validation error.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, SdkError> {
        self.get_with(endpoint, RequestOptions::get()).await
    }

    pub(crate) async fn get_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, SdkError> {
        match self.request(endpoint, options).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Err(SdkError::Validation(format!(
                "Empty response from {}",
                endpoint
            ))),
        }
    }

    pub async fn patch<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Option<serde_json::Value>, SdkError> {
        let body = serde_json::to_value(body)?;
        self.request(endpoint, RequestOptions::patch(body)).await
    }

    pub async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Option<serde_json::Value>, SdkError> {
        let body = serde_json::to_value(body)?;
        self.request(endpoint, RequestOptions::post(body)).await
    }

    async fn build_headers(&self, extra: &[(String, String)]) -> Result<HeaderMap, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(&self.api_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                HttpError::InvalidHeader(format!("Invalid header name '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value(value)?);
        }

        if let Some(token) = self.session.token().await {
            headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", token))?);
        }

        Ok(headers)
    }

    /// Same effect as logout: session and cached user data are dropped.
    async fn expire_session(&self) {
        let cleared = self.session.clear().await;
        self.balance_cache.write().await.clear();
        if cleared {
            tracing::warn!("Session expired, cleared admin session");
            if let Some(hook) = &self.on_session_expired {
                hook();
            }
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue, HttpError> {
    HeaderValue::from_str(value)
        .map_err(|_| HttpError::InvalidHeader("value contains invalid characters".to_string()))
}

impl std::fmt::Debug for BackofficeHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackofficeHttp")
            .field("rest_url", &self.rest_url)
            .field("has_expiry_hook", &self.on_session_expired.is_some())
            .finish()
    }
}

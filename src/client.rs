//! High-level client: `BackofficeClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the session handle, shared cache state, and
//! accessor methods.

use crate::auth::client::Auth;
use crate::auth::{Session, SessionState};
use crate::config::{BackendConfig, DEFAULT_BALANCE_CACHE_TTL, DEFAULT_TIMEOUT};
use crate::domain::audit::client::Audit;
use crate::domain::balance::client::{BalanceCache, Balances};
use crate::domain::dashboard::client::Dashboard;
use crate::domain::finance::client::Finance;
use crate::domain::kyc::client::Kyc;
use crate::domain::notification::client::Notifications;
use crate::domain::support::client::Support;
use crate::domain::trading::client::Trading;
use crate::domain::user::client::Users;
use crate::error::{ConfigError, SdkError};
use crate::http::{BackofficeHttp, SessionExpiredHook};

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::audit::client::Audit as AuditClient;
pub use crate::domain::balance::client::Balances as BalancesClient;
pub use crate::domain::dashboard::client::Dashboard as DashboardClient;
pub use crate::domain::finance::client::Finance as FinanceClient;
pub use crate::domain::kyc::client::Kyc as KycClient;
pub use crate::domain::notification::client::Notifications as NotificationsClient;
pub use crate::domain::support::client::Support as SupportClient;
pub use crate::domain::trading::client::Trading as TradingClient;
pub use crate::domain::user::client::Users as UsersClient;

/// The primary entry point for the back-office SDK.
///
/// Owns the admin [`Session`] and injects it into the HTTP gateway. Provides
/// nested sub-client accessors for each domain: `client.users()`,
/// `client.kyc()`, etc.
pub struct BackofficeClient {
    pub(crate) http: BackofficeHttp,
    pub(crate) session: Session,
    pub(crate) balance_cache: BalanceCache,
    pub(crate) balance_cache_ttl: Duration,
}

impl BackofficeClient {
    pub fn builder() -> BackofficeClientBuilder {
        BackofficeClientBuilder::default()
    }

    /// Build from `SUPABASE_URL` / `SUPABASE_ANON_KEY` with default settings.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::builder().config(BackendConfig::from_env()?).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn kyc(&self) -> Kyc<'_> {
        Kyc { client: self }
    }

    pub fn finance(&self) -> Finance<'_> {
        Finance { client: self }
    }

    pub fn trading(&self) -> Trading<'_> {
        Trading { client: self }
    }

    pub fn support(&self) -> Support<'_> {
        Support { client: self }
    }

    pub fn notifications(&self) -> Notifications<'_> {
        Notifications { client: self }
    }

    pub fn audit(&self) -> Audit<'_> {
        Audit { client: self }
    }

    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard { client: self }
    }

    pub fn balances(&self) -> Balances<'_> {
        Balances { client: self }
    }

    /// The raw gateway, for tables without a dedicated sub-client.
    pub fn http(&self) -> &BackofficeHttp {
        &self.http
    }

    /// The session handle shared with the gateway.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.balance_cache.write().await.clear();
    }

    /// Session state for an authenticated call, or `NotAuthenticated`.
    pub(crate) async fn require_session(&self) -> Result<SessionState, SdkError> {
        Ok(self.session.require().await?)
    }
}

impl Clone for BackofficeClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            balance_cache: self.balance_cache.clone(),
            balance_cache_ttl: self.balance_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BackofficeClientBuilder {
    url: Option<String>,
    api_key: Option<String>,
    config: Option<BackendConfig>,
    timeout: Duration,
    balance_cache_ttl: Duration,
    session: Option<SessionState>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl Default for BackofficeClientBuilder {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            config: None,
            timeout: DEFAULT_TIMEOUT,
            balance_cache_ttl: DEFAULT_BALANCE_CACHE_TTL,
            session: None,
            on_session_expired: None,
        }
    }
}

impl BackofficeClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Use a prepared config. Takes precedence over `base_url` / `api_key`.
    pub fn config(mut self, config: BackendConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Request timeout (ignored on WASM, where the browser decides).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn balance_cache_ttl(mut self, ttl: Duration) -> Self {
        self.balance_cache_ttl = ttl;
        self
    }

    /// Pre-set the session on construction.
    pub fn session(mut self, state: SessionState) -> Self {
        self.session = Some(state);
        self
    }

    /// Invoked once when the backend reports the session token as expired.
    pub fn on_session_expired<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> Result<BackofficeClient, SdkError> {
        let config = match self.config {
            Some(config) => config,
            None => BackendConfig::new(
                self.url.ok_or(ConfigError::MissingUrl)?,
                self.api_key.ok_or(ConfigError::MissingApiKey)?,
            )?,
        };

        let session = match self.session {
            Some(state) => Session::with_state(state),
            None => Session::new(),
        };

        let balance_cache: BalanceCache = Arc::new(RwLock::new(HashMap::new()));

        Ok(BackofficeClient {
            http: BackofficeHttp::new(
                &config,
                session.clone(),
                balance_cache.clone(),
                self.on_session_expired,
                self.timeout,
            )?,
            session,
            balance_cache,
            balance_cache_ttl: self.balance_cache_ttl,
        })
    }
}

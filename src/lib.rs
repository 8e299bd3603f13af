//! # Back-Office SDK
//!
//! A Rust client for the trading platform's back office: admin login,
//! dashboard statistics, user / KYC / deposit / withdrawal management,
//! trading reads, support tickets, notifications, and audit logging.
//!
//! All business logic and persistence live in the hosted backend, reached
//! over its table REST interface (`/rest/v1/<table>?<filters>`).
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Config, query builder, domain types (always available, WASM-safe)
//! 2. **Auth**: Admin identity, roles, the explicit [`Session`](auth::Session) handle
//! 3. **HTTP gateway**: `BackofficeHttp` with header injection, outcome normalization,
//!    expired-token detection
//! 4. **High-Level Client**: `BackofficeClient` with nested sub-clients and the
//!    balance cache
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice_sdk::prelude::*;
//!
//! let client = BackofficeClient::builder()
//!     .base_url("https://xyz.supabase.co")
//!     .api_key(&anon_key)
//!     .on_session_expired(|| router.go_to_login())
//!     .build()?;
//!
//! client.auth().login("ops@example.com").await?;
//! let stats = client.dashboard().stats().await?;
//! client.users().freeze("user-1", "chargeback fraud").await?;
//! let balances = client.balances().get("user-1").await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared query builder, formatting, and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Backend URL / API key configuration and defaults.
pub mod config;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Admin identity, roles, and session.
pub mod auth;

// ── Layer 3: HTTP gateway ────────────────────────────────────────────────────

/// Request gateway over the backend REST interface.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BackofficeClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{Order, Query, Record};

    // Config
    pub use crate::config::BackendConfig;

    // Domain types
    pub use crate::domain::audit::{AuditEntry, AuditOutcome};
    pub use crate::domain::balance::{
        UserBalances, WalletBalance, WalletKey, WalletSource, WalletType,
    };
    pub use crate::domain::dashboard::DashboardStats;
    pub use crate::domain::kyc::KycDecision;
    pub use crate::domain::user::{PasswordResetOutcome, UserProfile};

    // Errors
    pub use crate::error::{AuthError, ConfigError, HttpError, SdkError};

    // Auth
    pub use crate::auth::{AdminIdentity, AdminRole, SessionState};
    #[cfg(feature = "http")]
    pub use crate::auth::Session;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuditClient, AuthClient, BackofficeClient, BackofficeClientBuilder, BalancesClient,
        DashboardClient, FinanceClient, KycClient, NotificationsClient, SupportClient,
        TradingClient, UsersClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{BackofficeHttp, RequestOptions};
}

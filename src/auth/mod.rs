//! Authentication: admin identity, roles, and the session handle.
//!
//! ## Session Model
//!
//! The session is an explicit [`Session`] handle owned by
//! [`BackofficeClient`](crate::client::BackofficeClient) and shared with the
//! HTTP gateway. Nothing lives in ambient global storage.
//!
//! - **Login** fills the session (token, email, role, admin id).
//! - **Logout** clears it.
//! - **Expiry** is discovered reactively: the gateway clears the session the
//!   first time the backend answers `401 JWT expired`, then fires the
//!   configured session-expired hook.
//!
//! There is no local expiry timer.

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub use session::Session;

use serde::{Deserialize, Serialize};

// ============================================================================
// Roles
// ============================================================================

/// Role of a back-office admin, as stored in `admin_users.role`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AdminRole {
    Superadmin,
    Admin,
    Other(String),
}

impl AdminRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::Other(role) => role,
        }
    }

    /// Role written to `audit_log.actor_role`.
    ///
    /// The audit table's role enum has no plain `admin` member, so `admin`
    /// is recorded as `superadmin`. Every other role is recorded as itself.
    pub fn audit_actor_role(&self) -> &str {
        match self {
            Self::Superadmin | Self::Admin => "superadmin",
            Self::Other(role) => role,
        }
    }
}

impl From<String> for AdminRole {
    fn from(s: String) -> Self {
        match s.as_str() {
            "superadmin" => Self::Superadmin,
            "admin" => Self::Admin,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for AdminRole {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<AdminRole> for String {
    fn from(role: AdminRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Identity + session state
// ============================================================================

/// A row of `admin_users`. Fetched at login, never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: String,
    pub email: String,
    pub role: AdminRole,
    /// `NULL` in older rows; only an explicit `false` blocks login.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Everything an authenticated call needs to know about the current admin.
///
/// Debug output redacts the token.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: String,
    pub email: String,
    pub role: AdminRole,
    pub admin_id: String,
    pub logged_in: bool,
}

impl SessionState {
    pub fn for_admin(admin: &AdminIdentity, token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            email: admin.email.clone(),
            role: admin.role.clone(),
            admin_id: admin.id.clone(),
            logged_in: true,
        }
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .field("role", &self.role)
            .field("admin_id", &self.admin_id)
            .field("logged_in", &self.logged_in)
            .finish()
    }
}

#[cfg(feature = "http")]
mod session {
    use super::SessionState;
    use crate::error::AuthError;
    use async_lock::RwLock;
    use std::sync::Arc;

    /// Shared handle to the current admin session.
    ///
    /// Cloning shares the same underlying state.
    #[derive(Debug, Clone, Default)]
    pub struct Session {
        state: Arc<RwLock<Option<SessionState>>>,
    }

    impl Session {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_state(state: SessionState) -> Self {
            Self {
                state: Arc::new(RwLock::new(Some(state))),
            }
        }

        /// Replace the current session (login).
        pub async fn begin(&self, state: SessionState) {
            *self.state.write().await = Some(state);
        }

        /// Drop the session. Returns `true` if there was one to drop.
        pub async fn clear(&self) -> bool {
            self.state.write().await.take().is_some()
        }

        pub async fn state(&self) -> Option<SessionState> {
            self.state.read().await.clone()
        }

        pub async fn token(&self) -> Option<String> {
            self.state
                .read()
                .await
                .as_ref()
                .filter(|s| !s.token.is_empty())
                .map(|s| s.token.clone())
        }

        /// The session state, or `NotAuthenticated` when no token is held.
        pub async fn require(&self) -> Result<SessionState, AuthError> {
            match self.state.read().await.as_ref() {
                Some(s) if !s.token.is_empty() => Ok(s.clone()),
                _ => Err(AuthError::NotAuthenticated),
            }
        }

        pub async fn is_logged_in(&self) -> bool {
            self.state
                .read()
                .await
                .as_ref()
                .map(|s| s.logged_in && !s.token.is_empty())
                .unwrap_or(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!(AdminRole::from("admin"), AdminRole::Admin);
        assert_eq!(AdminRole::from("superadmin"), AdminRole::Superadmin);
        assert_eq!(
            AdminRole::from("compliance"),
            AdminRole::Other("compliance".to_string())
        );
    }

    #[test]
    fn test_audit_actor_role_mapping_is_total() {
        assert_eq!(AdminRole::Admin.audit_actor_role(), "superadmin");
        assert_eq!(AdminRole::Superadmin.audit_actor_role(), "superadmin");
        assert_eq!(
            AdminRole::Other("support".to_string()).audit_actor_role(),
            "support"
        );
    }

    #[test]
    fn test_identity_deserialize_null_active() {
        let json = r#"{"id": "a1", "email": "ops@example.com", "role": "admin", "is_active": null}"#;
        let admin: AdminIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(admin.role, AdminRole::Admin);
        assert_eq!(admin.is_active, None);

        let json = r#"{"id": "a2", "email": "x@example.com", "role": "auditor"}"#;
        let admin: AdminIdentity = serde_json::from_str(json).unwrap();
        assert_eq!(admin.role.as_str(), "auditor");
    }

    #[test]
    fn test_role_serializes_as_plain_string() {
        let json = serde_json::to_string(&AdminRole::Superadmin).unwrap();
        assert_eq!(json, r#""superadmin""#);
    }

    #[test]
    fn test_session_state_debug_redacts_token() {
        let admin = AdminIdentity {
            id: "a1".into(),
            email: "ops@example.com".into(),
            role: AdminRole::Admin,
            is_active: Some(true),
        };
        let state = SessionState::for_admin(&admin, "very-secret");
        assert!(state.logged_in);
        assert!(!format!("{:?}", state).contains("very-secret"));
    }

    #[cfg(feature = "http")]
    mod session {
        use super::super::*;
        use crate::error::AuthError;

        fn state() -> SessionState {
            SessionState {
                token: "tok".into(),
                email: "ops@example.com".into(),
                role: AdminRole::Admin,
                admin_id: "a1".into(),
                logged_in: true,
            }
        }

        #[test]
        fn test_require_without_session() {
            let session = Session::new();
            let result = tokio_test::block_on(session.require());
            assert!(matches!(result, Err(AuthError::NotAuthenticated)));
        }

        #[test]
        fn test_begin_then_clear_once() {
            tokio_test::block_on(async {
                let session = Session::new();
                session.begin(state()).await;
                assert!(session.is_logged_in().await);
                assert_eq!(session.token().await.as_deref(), Some("tok"));

                assert!(session.clear().await);
                assert!(!session.clear().await);
                assert!(session.state().await.is_none());
            });
        }

        #[test]
        fn test_clones_share_state() {
            tokio_test::block_on(async {
                let session = Session::new();
                let shared = session.clone();
                session.begin(state()).await;
                assert_eq!(shared.require().await.unwrap().admin_id, "a1");
            });
        }

        #[test]
        fn test_empty_token_is_not_authenticated() {
            let mut s = state();
            s.token.clear();
            let session = Session::with_state(s);
            assert!(tokio_test::block_on(session.require()).is_err());
        }
    }
}

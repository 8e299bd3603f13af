//! Auth sub-client: admin login, logout, session inspection.

use crate::auth::{AdminIdentity, SessionState};
use crate::client::BackofficeClient;
use crate::error::{AuthError, SdkError};
use crate::http::RequestOptions;
use crate::shared::Query;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Auth<'a> {
    /// Log in as the admin registered under `email`.
    ///
    /// Looks the admin up among active rows first, then among all rows so an
    /// admin whose `is_active` is `NULL` can still log in. Only an explicit
    /// `is_active = false` is refused.
    ///
    /// On success the session holds the backend API key as its bearer token,
    /// since admin rows carry no credential of their own.
    pub async fn login(&self, email: &str) -> Result<AdminIdentity, SdkError> {
        let active = Query::table("admin_users")
            .eq("email", email)
            .eq("is_active", true);
        let mut admins = self.lookup(&active.to_endpoint()).await?;

        if admins.is_empty() {
            let any = Query::table("admin_users").eq("email", email);
            admins = self.lookup(&any.to_endpoint()).await?;
        }

        let admin = admins.into_iter().next().ok_or_else(|| {
            AuthError::LoginFailed("Invalid credentials or account not found".to_string())
        })?;

        if admin.is_active == Some(false) {
            return Err(AuthError::AccountInactive.into());
        }

        let state = SessionState::for_admin(&admin, self.client.http.api_key());
        self.client.session.begin(state).await;

        tracing::info!(admin_id = %admin.id, role = %admin.role, "Admin logged in");
        Ok(admin)
    }

    /// Clear the session and all cached data.
    pub async fn logout(&self) {
        self.client.session.clear().await;
        self.client.clear_all_caches().await;
    }

    /// Current session state, if logged in.
    pub async fn session(&self) -> Option<SessionState> {
        self.client.session.state().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.session.is_logged_in().await
    }

    async fn lookup(&self, endpoint: &str) -> Result<Vec<AdminIdentity>, SdkError> {
        let options = RequestOptions::get().header(
            "Authorization",
            format!("Bearer {}", self.client.http.api_key()),
        );
        self.client.http.get_with(endpoint, options).await
    }
}

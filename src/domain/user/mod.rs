//! User domain: profiles, freeze state, email verification.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Columns selected for the admin user list.
pub(crate) const PROFILE_COLUMNS: &str = "id,user_id,email,display_name,first_name,last_name,phone,country,kyc_status,email_verified,is_frozen,freeze_reason,created_at,last_login";

/// A platform user as listed on the admin console.
///
/// Every column is optional so a single incomplete row never fails a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub kyc_status: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub is_frozen: Option<bool>,
    #[serde(default)]
    pub freeze_reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl UserProfile {
    pub fn is_frozen(&self) -> bool {
        self.is_frozen.unwrap_or(false)
    }

    /// Display name, falling back to first/last name, then email.
    pub fn name(&self) -> Option<String> {
        if let Some(name) = self.display_name.as_ref().filter(|n| !n.is_empty()) {
            return Some(name.clone());
        }
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return Some(full);
        }
        self.email.clone()
    }
}

/// Partial update toggling a user's freeze state.
///
/// All three fields are always written; unfreezing sends explicit `null`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreezeUpdate {
    pub is_frozen: bool,
    pub freeze_reason: Option<String>,
    pub frozen_at: Option<DateTime<Utc>>,
}

impl FreezeUpdate {
    pub fn freeze(reason: &str, at: DateTime<Utc>) -> Self {
        Self {
            is_frozen: true,
            freeze_reason: Some(reason.to_string()),
            frozen_at: Some(at),
        }
    }

    pub fn unfreeze() -> Self {
        Self {
            is_frozen: false,
            freeze_reason: None,
            frozen_at: None,
        }
    }
}

/// Result of a password reset request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordResetOutcome {
    pub success: bool,
    pub message: String,
    /// One-off reset token for the caller to deliver.
    pub token: String,
}

//! Finance domain: deposit and withdrawal request processing.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub(crate) const DEPOSIT_REQUESTS: &str = "deposit_requests";
pub(crate) const WITHDRAWAL_REQUESTS: &str = "withdrawal_requests";

/// Partial update written when an admin processes a funding request.
///
/// Deposits record a refusal in `rejection_reason`, withdrawals in
/// `admin_notes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingUpdate {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    pub processed_by: String,
    pub processed_at: DateTime<Utc>,
}

impl ProcessingUpdate {
    pub fn approved(admin_id: &str, at: DateTime<Utc>) -> Self {
        Self {
            status: "approved".to_string(),
            rejection_reason: None,
            admin_notes: None,
            processed_by: admin_id.to_string(),
            processed_at: at,
        }
    }

    pub fn deposit_rejected(admin_id: &str, reason: &str, at: DateTime<Utc>) -> Self {
        Self {
            status: "rejected".to_string(),
            rejection_reason: Some(reason.to_string()),
            ..Self::approved(admin_id, at)
        }
    }

    pub fn withdrawal_rejected(admin_id: &str, reason: &str, at: DateTime<Utc>) -> Self {
        Self {
            status: "rejected".to_string(),
            admin_notes: Some(reason.to_string()),
            ..Self::approved(admin_id, at)
        }
    }
}

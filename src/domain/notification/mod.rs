//! Notification domain: in-app messages to platform users.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "general";

/// Row inserted into `notifications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub unread: bool,
    pub created_at: DateTime<Utc>,
}

impl NewNotification {
    /// An unread informational notification.
    pub fn info(user_id: &str, title: &str, message: &str, category: Option<&str>) -> Self {
        Self {
            user_id: user_id.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
            kind: "info".to_string(),
            unread: true,
            created_at: Utc::now(),
        }
    }
}

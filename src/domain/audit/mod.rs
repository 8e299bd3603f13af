//! Audit domain: admin action trail.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An admin action to record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub action: String,
    pub target_user_id: Option<String>,
    pub reason: Option<String>,
    pub before: Option<serde_json::Value>,
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    pub fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
            ..Default::default()
        }
    }

    pub fn target(mut self, user_id: &str) -> Self {
        self.target_user_id = Some(user_id.to_string());
        self
    }

    pub fn reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Record state before and after the action.
    pub fn change(mut self, before: serde_json::Value, after: serde_json::Value) -> Self {
        self.before = Some(before);
        self.after = Some(after);
        self
    }
}

/// Row inserted into `audit_log`. Optional fields are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub actor_user_id: Option<String>,
    pub actor_role: String,
    pub action: String,
    pub target_user_id: Option<String>,
    pub reason: Option<String>,
    pub before: Option<serde_json::Value>,
    pub after: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(entry: &AuditEntry, actor_user_id: Option<String>, actor_role: &str) -> Self {
        Self {
            actor_user_id,
            actor_role: actor_role.to_string(),
            action: entry.action.clone(),
            target_user_id: entry.target_user_id.clone(),
            reason: entry.reason.clone(),
            before: entry.before.clone(),
            after: entry.after.clone(),
            created_at: Utc::now(),
        }
    }

    /// Same record with the actor reference dropped.
    pub fn without_actor(&self) -> Self {
        Self {
            actor_user_id: None,
            ..self.clone()
        }
    }
}

/// Result of a best-effort audit write. Never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditOutcome {
    Recorded(Option<serde_json::Value>),
    /// The first write was refused; the retry without `actor_user_id` landed.
    RecordedWithoutActor(Option<serde_json::Value>),
    Failed { error: String },
}

impl AuditOutcome {
    pub fn is_recorded(&self) -> bool {
        !matches!(self, AuditOutcome::Failed { .. })
    }
}

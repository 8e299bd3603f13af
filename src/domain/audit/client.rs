//! Audit sub-client: read the trail, record admin actions.

use crate::client::BackofficeClient;
use crate::domain::audit::{AuditEntry, AuditOutcome, AuditRecord};
use crate::error::SdkError;
use crate::shared::{Query, Record};

const AUDIT_LOG: &str = "audit_log";
const DEFAULT_LOG_LIMIT: u32 = 100;

pub struct Audit<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Audit<'a> {
    /// Most recent audit records. Defaults to 100.
    pub async fn logs(&self, limit: Option<u32>) -> Result<Vec<Record>, SdkError> {
        self.client.require_session().await?;
        let query = Query::table(AUDIT_LOG)
            .select("*")
            .newest_first()
            .limit(limit.unwrap_or(DEFAULT_LOG_LIMIT));
        self.client.http.get(&query.to_endpoint()).await
    }

    /// Record an admin action without ever blocking the action itself.
    ///
    /// A refused write (typically the actor's foreign key) is retried once with
    /// `actor_user_id` nulled. If the retry also fails the error is logged and
    /// returned as [`AuditOutcome::Failed`]. Only a missing session is an `Err`.
    pub async fn create(&self, entry: &AuditEntry) -> Result<AuditOutcome, SdkError> {
        let session = self.client.require_session().await?;
        let record = AuditRecord::new(
            entry,
            Some(session.admin_id.clone()),
            session.role.audit_actor_role(),
        );

        let first_error = match self.client.http.post(AUDIT_LOG, &record).await {
            Ok(result) => return Ok(AuditOutcome::Recorded(result)),
            Err(e) => e,
        };

        tracing::warn!(
            action = %entry.action,
            error = %first_error,
            "Audit write refused, retrying without actor_user_id"
        );

        match self.client.http.post(AUDIT_LOG, &record.without_actor()).await {
            Ok(result) => Ok(AuditOutcome::RecordedWithoutActor(result)),
            Err(e) => {
                tracing::error!(action = %entry.action, error = %e, "Failed to create audit log");
                Ok(AuditOutcome::Failed {
                    error: e.to_string(),
                })
            }
        }
    }
}

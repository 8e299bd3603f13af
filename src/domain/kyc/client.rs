//! KYC sub-client: list submissions, approve, reject.

use crate::client::BackofficeClient;
use crate::domain::kyc::{KycDecision, KycReview, KycStatusRow};
use crate::error::SdkError;
use crate::shared::{Query, Record};

use chrono::Utc;

/// Sub-client for KYC review.
pub struct Kyc<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Kyc<'a> {
    /// All KYC submissions, newest first.
    pub async fn list(&self) -> Result<Vec<Record>, SdkError> {
        self.client.require_session().await?;
        let query = Query::table("kyc_submissions").select("*").newest_first();
        self.client.http.get(&query.to_endpoint()).await
    }

    pub async fn approve(&self, user_id: &str) -> Result<Option<Record>, SdkError> {
        self.decide(user_id, KycDecision::Approved).await
    }

    pub async fn reject(&self, user_id: &str, reason: &str) -> Result<Option<Record>, SdkError> {
        self.decide(
            user_id,
            KycDecision::Rejected {
                reason: reason.to_string(),
            },
        )
        .await
    }

    /// Record a decision on both the profile and the submission.
    ///
    /// The two rows are written separately. If the submission write fails
    /// after the profile was updated, the profile's previous `kyc_status` is
    /// written back and `PartialWrite` reports whether that succeeded.
    pub async fn decide(
        &self,
        user_id: &str,
        decision: KycDecision,
    ) -> Result<Option<Record>, SdkError> {
        let session = self.client.require_session().await?;
        let users = self.client.users();

        let previous = self.current_status(user_id).await?;

        users
            .update(user_id, &serde_json::json!({ "kyc_status": decision.status() }))
            .await?;

        let review = KycReview::new(&decision, &session.admin_id, Utc::now());
        let submission = Query::table("kyc_submissions").eq("user_id", user_id);

        match self.client.http.patch(&submission.to_endpoint(), &review).await {
            Ok(result) => {
                tracing::info!(user_id, status = decision.status(), "KYC decision recorded");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    user_id,
                    error = %e,
                    "KYC submission update failed, restoring profile status"
                );
                let compensated = users
                    .update(user_id, &serde_json::json!({ "kyc_status": previous }))
                    .await
                    .map_err(|undo| {
                        tracing::error!(user_id, error = %undo, "KYC profile status restore failed");
                    })
                    .is_ok();
                Err(SdkError::PartialWrite {
                    step: "kyc_submission",
                    compensated,
                    source: Box::new(e),
                })
            }
        }
    }

    async fn current_status(&self, user_id: &str) -> Result<Option<String>, SdkError> {
        let query = Query::table("profiles")
            .select("kyc_status")
            .eq("user_id", user_id);
        let rows: Vec<KycStatusRow> = self.client.http.get(&query.to_endpoint()).await?;
        Ok(rows.into_iter().next().and_then(|r| r.kyc_status))
    }
}

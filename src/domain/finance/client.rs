//! Finance sub-client: deposit and withdrawal requests.

use crate::client::BackofficeClient;
use crate::domain::finance::{ProcessingUpdate, DEPOSIT_REQUESTS, WITHDRAWAL_REQUESTS};
use crate::error::SdkError;
use crate::shared::{Query, Record};

use chrono::Utc;

/// Sub-client for funding request review.
pub struct Finance<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Finance<'a> {
    /// Deposit requests, newest first. `None` lists every status.
    pub async fn deposits(&self, status: Option<&str>) -> Result<Vec<Record>, SdkError> {
        self.list(DEPOSIT_REQUESTS, status).await
    }

    /// Withdrawal requests, newest first. `None` lists every status.
    pub async fn withdrawals(&self, status: Option<&str>) -> Result<Vec<Record>, SdkError> {
        self.list(WITHDRAWAL_REQUESTS, status).await
    }

    pub async fn approve_deposit(&self, deposit_id: &str) -> Result<Option<Record>, SdkError> {
        let session = self.client.require_session().await?;
        let update = ProcessingUpdate::approved(&session.admin_id, Utc::now());
        self.process(DEPOSIT_REQUESTS, deposit_id, &update).await
    }

    pub async fn reject_deposit(
        &self,
        deposit_id: &str,
        reason: &str,
    ) -> Result<Option<Record>, SdkError> {
        let session = self.client.require_session().await?;
        let update = ProcessingUpdate::deposit_rejected(&session.admin_id, reason, Utc::now());
        self.process(DEPOSIT_REQUESTS, deposit_id, &update).await
    }

    pub async fn approve_withdrawal(
        &self,
        withdrawal_id: &str,
    ) -> Result<Option<Record>, SdkError> {
        let session = self.client.require_session().await?;
        let update = ProcessingUpdate::approved(&session.admin_id, Utc::now());
        self.process(WITHDRAWAL_REQUESTS, withdrawal_id, &update).await
    }

    pub async fn reject_withdrawal(
        &self,
        withdrawal_id: &str,
        reason: &str,
    ) -> Result<Option<Record>, SdkError> {
        let session = self.client.require_session().await?;
        let update =
            ProcessingUpdate::withdrawal_rejected(&session.admin_id, reason, Utc::now());
        self.process(WITHDRAWAL_REQUESTS, withdrawal_id, &update).await
    }

    async fn list(&self, table: &str, status: Option<&str>) -> Result<Vec<Record>, SdkError> {
        self.client.require_session().await?;
        let query = Query::table(table)
            .select("*")
            .newest_first()
            .eq_opt("status", status);
        self.client.http.get(&query.to_endpoint()).await
    }

    async fn process(
        &self,
        table: &str,
        id: &str,
        update: &ProcessingUpdate,
    ) -> Result<Option<Record>, SdkError> {
        let query = Query::table(table).eq("id", id);
        let result = self.client.http.patch(&query.to_endpoint(), update).await?;
        tracing::info!(table, id, status = %update.status, "Funding request processed");
        Ok(result)
    }
}

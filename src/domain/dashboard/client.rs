//! Dashboard sub-client: concurrent count fan-out.

use crate::client::BackofficeClient;
use crate::domain::dashboard::{count_from, kyc_tally, DashboardStats};
use crate::error::SdkError;
use crate::http::RequestOptions;
use crate::shared::Query;

pub struct Dashboard<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Dashboard<'a> {
    /// Headline counts.
    ///
    /// Issues all ten reads at once and waits for every one to settle. A read
    /// that fails contributes zero (or an empty KYC tally); the call itself
    /// only fails when there is no session.
    pub async fn stats(&self) -> Result<DashboardStats, SdkError> {
        self.client.require_session().await?;

        let count = |table: &str| Query::table(table).select("count");
        let (
            users,
            admins,
            kyc,
            deposits,
            pending_deposits,
            pending_withdrawals,
            positions,
            signals,
            audit,
            notifications,
        ) = futures_util::join!(
            self.settle(count("profiles")),
            self.settle(count("admin_users")),
            self.settle(Query::table("profiles").select("kyc_status")),
            self.settle(count("deposits")),
            self.settle(
                Query::table("deposit_requests")
                    .eq("status", "pending")
                    .select("count")
            ),
            self.settle(
                Query::table("withdrawal_requests")
                    .eq("status", "pending")
                    .select("count")
            ),
            self.settle(count("positions")),
            self.settle(Query::table("signals").eq("is_active", true).select("count")),
            self.settle(count("audit_log")),
            self.settle(count("notifications")),
        );

        Ok(DashboardStats {
            total_users: count_from(users.as_ref()),
            total_admins: count_from(admins.as_ref()),
            kyc_stats: kyc_tally(kyc.as_ref()),
            total_deposits: count_from(deposits.as_ref()),
            pending_deposits: count_from(pending_deposits.as_ref()),
            pending_withdrawals: count_from(pending_withdrawals.as_ref()),
            total_positions: count_from(positions.as_ref()),
            active_signals: count_from(signals.as_ref()),
            total_audit_logs: count_from(audit.as_ref()),
            total_notifications: count_from(notifications.as_ref()),
        })
    }

    /// One sub-query; failures are logged and become `None`.
    async fn settle(&self, query: Query) -> Option<serde_json::Value> {
        let endpoint = query.to_endpoint();
        match self.client.http.request(&endpoint, RequestOptions::get()).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(endpoint = %endpoint, error = %e, "Dashboard query failed");
                None
            }
        }
    }
}

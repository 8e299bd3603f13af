//! Trading sub-client: read positions and signals, manage investment tiers.

use crate::client::BackofficeClient;
use crate::error::SdkError;
use crate::shared::{Order, Query, Record};

use serde::Serialize;

pub struct Trading<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Trading<'a> {
    /// All positions, newest first.
    pub async fn positions(&self) -> Result<Vec<Record>, SdkError> {
        self.newest("positions").await
    }

    /// All trading signals, newest first.
    pub async fn signals(&self) -> Result<Vec<Record>, SdkError> {
        self.newest("signals").await
    }

    /// Investment tiers in display order.
    pub async fn investment_tiers(&self) -> Result<Vec<Record>, SdkError> {
        self.client.require_session().await?;
        let query = Query::table("investment_tiers")
            .select("*")
            .order("sort_order", Order::Asc);
        self.client.http.get(&query.to_endpoint()).await
    }

    pub async fn update_investment_tier<U: Serialize>(
        &self,
        tier_id: &str,
        updates: &U,
    ) -> Result<Option<Record>, SdkError> {
        self.client.require_session().await?;
        let query = Query::table("investment_tiers").eq("id", tier_id);
        self.client.http.patch(&query.to_endpoint(), updates).await
    }

    async fn newest(&self, table: &str) -> Result<Vec<Record>, SdkError> {
        self.client.require_session().await?;
        let query = Query::table(table).select("*").newest_first();
        self.client.http.get(&query.to_endpoint()).await
    }
}

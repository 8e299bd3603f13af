//! Support sub-client: list and update tickets.

use crate::client::BackofficeClient;
use crate::error::SdkError;
use crate::shared::{Query, Record};

use serde::Serialize;

pub struct Support<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Support<'a> {
    /// Support tickets, newest first. `None` lists every status.
    pub async fn tickets(&self, status: Option<&str>) -> Result<Vec<Record>, SdkError> {
        self.client.require_session().await?;
        let query = Query::table("support_tickets")
            .select("*")
            .newest_first()
            .eq_opt("status", status);
        self.client.http.get(&query.to_endpoint()).await
    }

    pub async fn update_ticket<U: Serialize>(
        &self,
        ticket_id: &str,
        updates: &U,
    ) -> Result<Option<Record>, SdkError> {
        self.client.require_session().await?;
        let query = Query::table("support_tickets").eq("id", ticket_id);
        self.client.http.patch(&query.to_endpoint(), updates).await
    }
}

//! Notifications sub-client.

use crate::client::BackofficeClient;
use crate::domain::notification::NewNotification;
use crate::error::SdkError;
use crate::shared::Record;

pub struct Notifications<'a> {
    pub(crate) client: &'a BackofficeClient,
}

impl<'a> Notifications<'a> {
    /// Send an informational notification. `category` defaults to `general`.
    pub async fn send(
        &self,
        user_id: &str,
        title: &str,
        message: &str,
        category: Option<&str>,
    ) -> Result<Option<Record>, SdkError> {
        self.client.require_session().await?;
        let notification = NewNotification::info(user_id, title, message, category);
        self.client.http.post("notifications", &notification).await
    }
}

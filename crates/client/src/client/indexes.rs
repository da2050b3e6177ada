//! Index listing for [`SplunkClient`].

use secrecy::ExposeSecret;

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Index;

impl SplunkClient {
    /// Log in and list the indexes visible to the configured user.
    pub async fn list_indexes(&self) -> Result<Vec<Index>> {
        let token = self.ensure_authenticated().await?;
        endpoints::list_indexes(&self.http, &self.base_url, token.expose_secret()).await
    }
}

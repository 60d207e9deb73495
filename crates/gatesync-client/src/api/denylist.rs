//! Denylist API endpoints.

use crate::NextDnsClient;
use gatesync_core::{DenyEntry, DenyList, RemoteRule, Result, Rule};

/// Denylist API endpoints
pub struct DenylistApi<'a> {
    client: &'a NextDnsClient,
}

impl<'a> DenylistApi<'a> {
    pub(crate) fn new(client: &'a NextDnsClient) -> Self {
        Self { client }
    }

    /// Fetch the complete current denylist
    pub async fn list(&self) -> Result<Vec<RemoteRule>> {
        let list: DenyList = self.client.get("/denylist").await?;
        Ok(list.data.into_iter().map(RemoteRule::from).collect())
    }

    /// Create a batch of denylist entries in one call
    ///
    /// The endpoint accepts a JSON array, so a whole chunk goes out per
    /// request.
    pub async fn create_batch(&self, rules: &[Rule]) -> Result<()> {
        let entries: Vec<DenyEntry> = rules.iter().map(DenyEntry::from).collect();
        self.client.post("/denylist", &entries).await
    }

    /// Delete one denylist entry by its remote id
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/denylist/{id}")).await
    }
}

//! Rewrite API endpoints.

use crate::NextDnsClient;
use gatesync_core::{CreateRewrite, RemoteRule, Result, RewriteList, Rule};

/// Rewrite API endpoints
pub struct RewritesApi<'a> {
    client: &'a NextDnsClient,
}

impl<'a> RewritesApi<'a> {
    pub(crate) fn new(client: &'a NextDnsClient) -> Self {
        Self { client }
    }

    /// Fetch the complete current rewrite set
    pub async fn list(&self) -> Result<Vec<RemoteRule>> {
        let list: RewriteList = self.client.get("/rewrites").await?;
        Ok(list.data.into_iter().map(RemoteRule::from).collect())
    }

    /// Create one rewrite entry (the endpoint has no bulk form)
    pub async fn create(&self, rule: &Rule) -> Result<()> {
        self.client
            .post("/rewrites", &CreateRewrite::from(rule))
            .await
    }

    /// Delete one rewrite entry by its remote id
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/rewrites/{id}")).await
    }
}

//! Run orchestration: deny phase, rewrite phase, remove-all fallback.

use gatesync_client::NextDnsClient;
use gatesync_core::{KindSummary, Result, RuleKind, RunSummary};
use tracing::info;

use crate::dispatch::{Dispatcher, Pacing};
use crate::{normalize, reconcile, sources};

/// What one run should synchronize
#[derive(Debug, Clone, Default)]
pub struct SyncSettings {
    /// Block list source descriptors (URLs or file paths)
    pub block_sources: Vec<String>,

    /// Rewrite list source descriptors (URLs or file paths)
    pub rewrite_sources: Vec<String>,

    /// Compute and report the plan without writing anything
    pub dry_run: bool,
}

impl SyncSettings {
    /// Returns true when no sources are configured at all, which switches
    /// the run into remove-all mode
    #[must_use]
    pub fn is_remove_all(&self) -> bool {
        self.block_sources.is_empty() && self.rewrite_sources.is_empty()
    }
}

/// Sequences one full reconciliation run against a profile.
///
/// Phases run in a fixed order: denylist, then rewrites. The first fatal
/// error aborts the whole run; a kind without configured sources is
/// neither read nor written, unless *neither* kind has sources, in which
/// case both are wiped.
pub struct SyncRunner {
    client: NextDnsClient,
    http: reqwest::Client,
    dispatcher: Dispatcher,
    settings: SyncSettings,
}

impl SyncRunner {
    /// Create a runner with default pacing
    #[must_use]
    pub fn new(client: NextDnsClient, settings: SyncSettings) -> Self {
        Self::with_pacing(client, settings, Pacing::default())
    }

    /// Create a runner with explicit pacing (tests, impatient operators)
    #[must_use]
    pub fn with_pacing(client: NextDnsClient, settings: SyncSettings, pacing: Pacing) -> Self {
        Self {
            client,
            http: reqwest::Client::new(),
            dispatcher: Dispatcher::new(pacing),
            settings,
        }
    }

    /// Execute the run and report what changed
    pub async fn run(&self) -> Result<RunSummary> {
        if self.settings.is_remove_all() {
            info!("no sources configured, removing all profile rules");
            return self.remove_all().await;
        }

        let mut summary = RunSummary::default();

        if self.settings.block_sources.is_empty() {
            info!("no block sources provided, denylist left untouched");
        } else {
            summary.deny = Some(self.sync_denylist().await?);
        }

        if self.settings.rewrite_sources.is_empty() {
            info!("no rewrite sources provided, rewrites left untouched");
        } else {
            summary.rewrite = Some(self.sync_rewrites().await?);
        }

        Ok(summary)
    }

    /// Deny phase: sources → desired state → diff → deletes, then batched
    /// bulk creates
    async fn sync_denylist(&self) -> Result<KindSummary> {
        info!(
            sources = self.settings.block_sources.len(),
            "obtaining block lists"
        );
        let raw = sources::fetch_block_lists(&self.http, &self.settings.block_sources).await?;
        let desired = normalize::desired_state(raw);
        let desired_count = desired.len();
        info!(desired = desired_count, "prepared denylist");

        info!(kind = %RuleKind::Deny, "fetching remote state");
        let remote = self.client.denylist().list().await?;
        let plan = reconcile::diff(desired, &remote);

        let summary = KindSummary {
            desired: desired_count,
            kept: desired_count - plan.missing.len(),
            deleted: plan.stale.len(),
            created: plan.missing.len(),
        };

        if self.settings.dry_run {
            info!(kind = %RuleKind::Deny, "dry run, skipping writes");
            return Ok(summary);
        }

        if !plan.stale.is_empty() {
            info!(count = plan.stale.len(), "removing outdated denylist entries");
        }
        let client = self.client.clone();
        self.dispatcher
            .run_each(&plan.stale, |id| {
                let client = client.clone();
                async move { client.denylist().delete(&id).await }
            })
            .await?;

        info!(count = plan.missing.len(), "saving denylist");
        let client = self.client.clone();
        self.dispatcher
            .run_batched(&plan.missing, |batch| {
                let client = client.clone();
                async move { client.denylist().create_batch(&batch).await }
            })
            .await?;

        Ok(summary)
    }

    /// Rewrite phase: same flow, but the endpoint has no bulk create
    async fn sync_rewrites(&self) -> Result<KindSummary> {
        info!(
            sources = self.settings.rewrite_sources.len(),
            "obtaining rewrite lists"
        );
        let raw = sources::fetch_rewrite_lists(&self.http, &self.settings.rewrite_sources).await?;
        let desired = normalize::desired_state(raw);
        let desired_count = desired.len();
        info!(desired = desired_count, "prepared rewrites");

        info!(kind = %RuleKind::Rewrite, "fetching remote state");
        let remote = self.client.rewrites().list().await?;
        let plan = reconcile::diff(desired, &remote);

        let summary = KindSummary {
            desired: desired_count,
            kept: desired_count - plan.missing.len(),
            deleted: plan.stale.len(),
            created: plan.missing.len(),
        };

        if self.settings.dry_run {
            info!(kind = %RuleKind::Rewrite, "dry run, skipping writes");
            return Ok(summary);
        }

        if !plan.stale.is_empty() {
            info!(count = plan.stale.len(), "removing outdated rewrites");
        }
        let client = self.client.clone();
        self.dispatcher
            .run_each(&plan.stale, |id| {
                let client = client.clone();
                async move { client.rewrites().delete(&id).await }
            })
            .await?;

        info!(count = plan.missing.len(), "saving rewrites");
        let client = self.client.clone();
        self.dispatcher
            .run_each(&plan.missing, |rule| {
                let client = client.clone();
                async move { client.rewrites().create(&rule).await }
            })
            .await?;

        Ok(summary)
    }

    /// Remove-all mode: empty both kinds, creating nothing
    async fn remove_all(&self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            removed_all: true,
            ..RunSummary::default()
        };

        info!(kind = %RuleKind::Deny, "fetching remote state");
        let deny_ids: Vec<String> = self
            .client
            .denylist()
            .list()
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();
        let deleted = if self.settings.dry_run {
            deny_ids.len()
        } else {
            info!(count = deny_ids.len(), "removing denylist entries");
            let client = self.client.clone();
            self.dispatcher
                .run_each(&deny_ids, |id| {
                    let client = client.clone();
                    async move { client.denylist().delete(&id).await }
                })
                .await?
        };
        summary.deny = Some(KindSummary {
            deleted,
            ..KindSummary::default()
        });

        info!(kind = %RuleKind::Rewrite, "fetching remote state");
        let rewrite_ids: Vec<String> = self
            .client
            .rewrites()
            .list()
            .await?
            .into_iter()
            .map(|r| r.id)
            .collect();
        let deleted = if self.settings.dry_run {
            rewrite_ids.len()
        } else {
            info!(count = rewrite_ids.len(), "removing rewrites");
            let client = self.client.clone();
            self.dispatcher
                .run_each(&rewrite_ids, |id| {
                    let client = client.clone();
                    async move { client.rewrites().delete(&id).await }
                })
                .await?
        };
        summary.rewrite = Some(KindSummary {
            deleted,
            ..KindSummary::default()
        });

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_all_mode_requires_both_kinds_empty() {
        assert!(SyncSettings::default().is_remove_all());
        let settings = SyncSettings {
            block_sources: vec!["hosts.txt".into()],
            ..SyncSettings::default()
        };
        assert!(!settings.is_remove_all());
    }
}

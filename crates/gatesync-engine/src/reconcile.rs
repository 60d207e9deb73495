//! Diffing desired state against the profile's remote state.

use gatesync_core::{RemoteRule, Rule, SyncPlan};
use std::collections::BTreeMap;

/// Compute the sync plan for one rule kind.
///
/// Single linear pass over the remote records:
/// - key present with the same target: already satisfied, drop it from the
///   desired map and never touch the remote entry;
/// - key present with a different target: stage the remote id for deletion
///   and keep the desired rule, so the entry is replaced delete-then-create;
/// - key absent from desired state: leave the remote entry alone (remove-all
///   mode is the orchestrator's business, not ours).
///
/// Whatever survives in the map afterwards is missing remotely and goes
/// into the create set.
#[must_use]
pub fn diff(mut desired: BTreeMap<String, String>, remote: &[RemoteRule]) -> SyncPlan {
    let mut stale = Vec::new();

    for record in remote {
        match desired.get(&record.domain) {
            Some(target) if *target == record.target => {
                desired.remove(&record.domain);
            }
            Some(_) => stale.push(record.id.clone()),
            None => {}
        }
    }

    let missing = desired
        .into_iter()
        .map(|(domain, target)| Rule { domain, target })
        .collect();

    SyncPlan { stale, missing }
}

use serde::Serialize;

/// Outcome counts for one rule kind in one run
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct KindSummary {
    /// Desired rules built from the sources (after dedup)
    pub desired: usize,

    /// Remote entries already satisfying a desired rule
    pub kept: usize,

    /// Remote entries deleted
    pub deleted: usize,

    /// Rules created
    pub created: usize,
}

impl KindSummary {
    /// Returns true when the run changed nothing for this kind
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.deleted == 0 && self.created == 0
    }
}

/// Per-kind outcome of one full run
///
/// A kind with no configured sources is skipped entirely and stays `None`,
/// except in remove-all mode where both kinds are wiped.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    /// Denylist outcome, if the deny phase ran
    pub deny: Option<KindSummary>,

    /// Rewrites outcome, if the rewrite phase ran
    pub rewrite: Option<KindSummary>,

    /// Whether the run wiped both kinds instead of syncing
    pub removed_all: bool,
}

impl RunSummary {
    /// Total write operations issued across both kinds
    #[must_use]
    pub fn total_writes(&self) -> usize {
        [self.deny, self.rewrite]
            .into_iter()
            .flatten()
            .map(|k| k.deleted + k.created)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_writes_spans_both_kinds() {
        let summary = RunSummary {
            deny: Some(KindSummary {
                desired: 10,
                kept: 8,
                deleted: 2,
                created: 2,
            }),
            rewrite: Some(KindSummary {
                desired: 1,
                kept: 0,
                deleted: 0,
                created: 1,
            }),
            removed_all: false,
        };
        assert_eq!(summary.total_writes(), 5);
    }

    #[test]
    fn skipped_kind_contributes_nothing() {
        let summary = RunSummary::default();
        assert_eq!(summary.total_writes(), 0);
    }
}

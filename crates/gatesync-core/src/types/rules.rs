use serde::{Deserialize, Serialize};

/// Target value marking a rule as a plain block (denylist entry)
pub const BLOCK_TARGET: &str = "block";

/// The two kinds of filtering rules a profile holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Denylist entry: block the domain outright
    Deny,
    /// Rewrite entry: answer the domain with a fixed address
    Rewrite,
}

impl RuleKind {
    /// Human-readable name, as used in log and progress output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deny => "denylist",
            Self::Rewrite => "rewrites",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A desired rule computed from configured sources
///
/// `target` is either [`BLOCK_TARGET`] or a redirect address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Domain the rule applies to
    pub domain: String,

    /// Block marker or redirect destination
    pub target: String,
}

impl Rule {
    /// A plain blocking rule for `domain`
    #[must_use]
    pub fn block(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            target: BLOCK_TARGET.to_string(),
        }
    }

    /// A redirect rule answering `domain` with `target`
    #[must_use]
    pub fn rewrite(domain: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            target: target.into(),
        }
    }

    /// Returns true if this rule blocks rather than redirects
    #[must_use]
    pub fn is_block(&self) -> bool {
        self.target == BLOCK_TARGET
    }
}

/// A rule currently held by the remote service
///
/// `id` is owned by NextDNS; we only ever read it and delete by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRule {
    /// Opaque remote identifier
    pub id: String,

    /// Domain the rule applies to
    pub domain: String,

    /// Block marker or redirect destination
    pub target: String,
}

/// The difference between desired and remote state for one rule kind
///
/// Built by the reconciler, consumed exactly once by the dispatcher:
/// `stale` ids are deleted first, then `missing` rules are created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Remote ids to delete, in remote-scan order
    pub stale: Vec<String>,

    /// Desired rules to create, in domain order
    pub missing: Vec<Rule>,
}

impl SyncPlan {
    /// Returns true when there is nothing left to do
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.stale.is_empty() && self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_rule_uses_marker_target() {
        let rule = Rule::block("ads.example.com");
        assert!(rule.is_block());
        assert_eq!(rule.target, BLOCK_TARGET);
    }

    #[test]
    fn rewrite_rule_is_not_a_block() {
        let rule = Rule::rewrite("nas.lan.example", "192.168.1.10");
        assert!(!rule.is_block());
    }

    #[test]
    fn empty_plan_is_converged() {
        assert!(SyncPlan::default().is_converged());
        let plan = SyncPlan {
            stale: vec!["abc".into()],
            missing: vec![],
        };
        assert!(!plan.is_converged());
    }
}

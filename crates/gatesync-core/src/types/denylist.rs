use serde::{Deserialize, Serialize};

use super::rules::{RemoteRule, Rule, BLOCK_TARGET};

/// A denylist entry as NextDNS stores it
///
/// The entry `id` is the blocked domain itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenyEntry {
    /// Blocked domain (doubles as the remote identifier)
    pub id: String,

    /// Whether the entry is currently enforced
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl DenyEntry {
    /// Entry blocking `domain`, active from creation
    #[must_use]
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            id: domain.into(),
            active: true,
        }
    }
}

impl From<&Rule> for DenyEntry {
    fn from(rule: &Rule) -> Self {
        Self::new(rule.domain.clone())
    }
}

impl From<DenyEntry> for RemoteRule {
    fn from(entry: DenyEntry) -> Self {
        Self {
            domain: entry.id.clone(),
            id: entry.id,
            target: BLOCK_TARGET.to_string(),
        }
    }
}

/// Response envelope for `GET /profiles/{id}/denylist`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DenyList {
    /// Current denylist entries
    #[serde(default)]
    pub data: Vec<DenyEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deny_entry_maps_to_block_rule() {
        let remote: RemoteRule = DenyEntry::new("ads.example.com").into();
        assert_eq!(remote.id, "ads.example.com");
        assert_eq!(remote.domain, "ads.example.com");
        assert_eq!(remote.target, BLOCK_TARGET);
    }

    #[test]
    fn missing_active_flag_defaults_to_true() {
        let entry: DenyEntry = serde_json::from_str(r#"{"id":"ads.example.com"}"#).unwrap();
        assert!(entry.active);
    }
}

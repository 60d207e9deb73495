use serde::{Deserialize, Serialize};

use super::rules::{RemoteRule, Rule};

/// A rewrite entry as NextDNS stores it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteEntry {
    /// Opaque remote identifier
    pub id: String,

    /// Domain the rewrite answers for
    pub name: String,

    /// Address the domain resolves to
    pub content: String,

    /// Record type, when the API reports it
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
}

impl From<RewriteEntry> for RemoteRule {
    fn from(entry: RewriteEntry) -> Self {
        Self {
            id: entry.id,
            domain: entry.name,
            target: entry.content,
        }
    }
}

/// Response envelope for `GET /profiles/{id}/rewrites`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RewriteList {
    /// Current rewrite entries
    #[serde(default)]
    pub data: Vec<RewriteEntry>,
}

/// Request body for `POST /profiles/{id}/rewrites`
#[derive(Debug, Clone, Serialize)]
pub struct CreateRewrite {
    /// Domain to answer for
    pub name: String,

    /// Address to answer with
    pub content: String,
}

impl From<&Rule> for CreateRewrite {
    fn from(rule: &Rule) -> Self {
        Self {
            name: rule.domain.clone(),
            content: rule.target.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_entry_maps_domain_and_target() {
        let entry: RewriteEntry = serde_json::from_str(
            r#"{"id":"rw_1","name":"nas.lan.example","content":"192.168.1.10","type":"A"}"#,
        )
        .unwrap();
        let remote: RemoteRule = entry.into();
        assert_eq!(remote.id, "rw_1");
        assert_eq!(remote.domain, "nas.lan.example");
        assert_eq!(remote.target, "192.168.1.10");
    }

    #[test]
    fn create_request_from_rule() {
        let rule = Rule::rewrite("nas.lan.example", "192.168.1.10");
        let req = CreateRewrite::from(&rule);
        assert_eq!(req.name, "nas.lan.example");
        assert_eq!(req.content, "192.168.1.10");
    }
}

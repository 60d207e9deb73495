//! Desired-state construction from raw source rules.

use gatesync_core::Rule;
use std::collections::BTreeMap;

/// Collapse raw rules into a desired-state mapping, domain → target.
///
/// Duplicate domains keep the first-seen target; later occurrences are
/// discarded. Domains are canonicalized before lookup, so `Ads.Example.com.`
/// and `ads.example.com` collide.
#[must_use]
pub fn desired_state(rules: Vec<Rule>) -> BTreeMap<String, String> {
    let mut desired = BTreeMap::new();
    for rule in rules {
        let domain = canonical(&rule.domain);
        if domain.is_empty() {
            continue;
        }
        desired.entry(domain).or_insert(rule.target);
    }
    desired
}

/// Canonical form of a domain: trimmed, lowercased, one trailing dot removed.
#[must_use]
pub fn canonical(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('.');
    domain.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_keep_first_seen_target() {
        let rules = vec![
            Rule::rewrite("a.example.com", "1.2.3.4"),
            Rule::rewrite("a.example.com", "5.6.7.8"),
        ];
        let desired = desired_state(rules);
        assert_eq!(desired.len(), 1);
        assert_eq!(desired["a.example.com"], "1.2.3.4");
    }

    #[test]
    fn domains_are_canonicalized_before_dedup() {
        let rules = vec![
            Rule::block("Ads.Example.com."),
            Rule::block("ads.example.com"),
        ];
        let desired = desired_state(rules);
        assert_eq!(desired.len(), 1);
        assert!(desired.contains_key("ads.example.com"));
    }

    #[test]
    fn empty_domains_are_dropped() {
        let rules = vec![Rule::block("  "), Rule::block(".")];
        assert!(desired_state(rules).is_empty());
    }
}

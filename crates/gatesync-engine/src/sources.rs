//! Fetching and parsing block/rewrite source lists.
//!
//! A source descriptor is either an `http(s)://` URL or a local file path.
//! Block sources use the common hosts format (`0.0.0.0 domain`, plain
//! domain lists); rewrite sources are `address domain` override lists.

use gatesync_core::{GateError, Result, Rule};
use tracing::info;

use crate::normalize::canonical;

/// Host names that appear in hosts files but are never real rules
const SKIP_DOMAINS: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "local",
    "broadcasthost",
    "ip6-localhost",
    "ip6-loopback",
    "ip6-localnet",
    "ip6-mcastprefix",
    "ip6-allnodes",
    "ip6-allrouters",
    "ip6-allhosts",
    "0.0.0.0",
];

/// Fetch all block sources and parse them into blocking rules.
///
/// Any fetch or read failure is fatal for the calling phase.
pub async fn fetch_block_lists(http: &reqwest::Client, descriptors: &[String]) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for descriptor in descriptors {
        let content = load_source(http, descriptor).await?;
        let before = rules.len();
        rules.extend(parse_hosts(&content).into_iter().map(Rule::block));
        info!(
            source = %descriptor,
            entries = rules.len() - before,
            "parsed block list"
        );
    }
    Ok(rules)
}

/// Fetch all rewrite sources and parse them into redirect rules.
pub async fn fetch_rewrite_lists(
    http: &reqwest::Client,
    descriptors: &[String],
) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    for descriptor in descriptors {
        let content = load_source(http, descriptor).await?;
        let before = rules.len();
        rules.extend(parse_overrides(&content));
        info!(
            source = %descriptor,
            entries = rules.len() - before,
            "parsed rewrite list"
        );
    }
    Ok(rules)
}

/// Load one source as text, from the network or the filesystem
async fn load_source(http: &reqwest::Client, descriptor: &str) -> Result<String> {
    if descriptor.starts_with("http://") || descriptor.starts_with("https://") {
        let response = http
            .get(descriptor)
            .send()
            .await
            .map_err(|e| GateError::Source(format!("{descriptor}: {e}")))?;
        if !response.status().is_success() {
            return Err(GateError::Source(format!(
                "{descriptor}: HTTP {}",
                response.status().as_u16()
            )));
        }
        response
            .text()
            .await
            .map_err(|e| GateError::Source(format!("{descriptor}: {e}")))
    } else {
        std::fs::read_to_string(descriptor)
            .map_err(|e| GateError::Source(format!("{descriptor}: {e}")))
    }
}

/// Parse a hosts-format block list into domains.
///
/// Handles `0.0.0.0 domain`, `127.0.0.1 domain`, `::1 domain`, plain
/// domain lines, `#`/`!` comments, and skips loopback names.
fn parse_hosts(content: &str) -> Vec<String> {
    let mut domains = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let first = match fields.next() {
            Some(f) => f,
            None => continue,
        };

        // "ip domain" entry or a bare domain line
        let candidate = if first.parse::<std::net::IpAddr>().is_ok() {
            fields.next()
        } else if fields.next().is_none() {
            Some(first)
        } else {
            None
        };

        if let Some(raw) = candidate {
            let domain = canonical(raw);
            if !domain.is_empty()
                && domain.contains('.')
                && domain.len() <= 253
                && !SKIP_DOMAINS.contains(&domain.as_str())
            {
                domains.push(domain);
            }
        }
    }

    domains
}

/// Parse an `address domain` override list into redirect rules
fn parse_overrides(content: &str) -> Vec<Rule> {
    let mut rules = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(target), Some(raw)) = (fields.next(), fields.next()) else {
            continue;
        };

        let domain = canonical(raw);
        if !domain.is_empty() && domain.contains('.') {
            rules.push(Rule::rewrite(domain, target));
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn hosts_format_keeps_real_domains_only() {
        let content = "\
# StevenBlack-style list
0.0.0.0 0.0.0.0
0.0.0.0 ads.example.com
127.0.0.1 localhost
::1 ip6-localhost
tracker.example.com
! adblock-style comment
";
        let domains = parse_hosts(content);
        assert_eq!(domains, vec!["ads.example.com", "tracker.example.com"]);
    }

    #[test]
    fn hosts_domains_are_lowercased() {
        assert_eq!(parse_hosts("0.0.0.0 Ads.Example.COM"), vec!["ads.example.com"]);
    }

    #[test]
    fn override_lines_become_rewrite_rules() {
        let content = "\
# bypass routes
192.168.1.10 nas.lan.example
10.0.0.5 printer.lan.example
";
        let rules = parse_overrides(content);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0], Rule::rewrite("nas.lan.example", "192.168.1.10"));
    }

    #[tokio::test]
    async fn file_sources_are_read_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.0.0.0 ads.example.com").unwrap();

        let http = reqwest::Client::new();
        let descriptors = vec![file.path().to_string_lossy().into_owned()];
        let rules = fetch_block_lists(&http, &descriptors).await.unwrap();
        assert_eq!(rules, vec![Rule::block("ads.example.com")]);
    }

    #[tokio::test]
    async fn missing_file_is_a_source_error() {
        let http = reqwest::Client::new();
        let descriptors = vec!["/nonexistent/blocklist.txt".to_string()];
        let err = fetch_block_lists(&http, &descriptors).await.unwrap_err();
        assert!(matches!(err, GateError::Source(_)));
    }
}

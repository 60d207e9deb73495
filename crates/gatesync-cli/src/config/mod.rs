//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// NextDNS API key.
    pub api_key: Option<String>,

    /// NextDNS profile id.
    pub profile: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Block list sources (URLs or file paths).
    #[serde(default)]
    pub block_sources: Vec<String>,

    /// Rewrite list sources (URLs or file paths).
    #[serde(default)]
    pub rewrite_sources: Vec<String>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "novibe", "gatesync")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }
}

/// Split a comma-separated env value into source descriptors.
#[must_use]
pub fn split_sources(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separated_sources_are_split_and_trimmed() {
        let sources = split_sources(" https://a.example/hosts , ./local.txt ,, ");
        assert_eq!(sources, vec!["https://a.example/hosts", "./local.txt"]);
    }

    #[test]
    fn empty_value_yields_no_sources() {
        assert!(split_sources("").is_empty());
        assert!(split_sources(" , ").is_empty());
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = Config {
            api_key: Some("key".into()),
            profile: Some("abc123".into()),
            output_format: Some(OutputFormat::Json),
            block_sources: vec!["hosts.txt".into()],
            rewrite_sources: vec![],
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.api_key.as_deref(), Some("key"));
        assert_eq!(back.block_sources, vec!["hosts.txt"]);
    }
}

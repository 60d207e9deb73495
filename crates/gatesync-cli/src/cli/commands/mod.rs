//! Command implementations.

pub mod config;
pub mod status;
pub mod sync;
pub mod wipe;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// NextDNS API key
    pub api_key: Option<String>,

    /// NextDNS profile id
    pub profile: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "API key required.\n\n\
                 Set it with one of:\n  \
                 1. --api-key <KEY>\n  \
                 2. NEXTDNS_API_KEY environment variable\n  \
                 3. gatesync config set api_key <KEY>\n\n\
                 Get your key at: https://my.nextdns.io/account"
            )
        })
    }

    /// Get the profile id, returning an error if not set.
    pub fn require_profile(&self) -> anyhow::Result<&str> {
        self.profile.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Profile id required.\n\n\
                 Set it with one of:\n  \
                 1. --profile <ID>\n  \
                 2. NEXTDNS_PROFILE environment variable\n  \
                 3. gatesync config set profile <ID>"
            )
        })
    }

    /// Create a NextDNS client for the configured profile.
    pub fn client(&self) -> anyhow::Result<gatesync::NextDnsClient> {
        let key = self.require_api_key()?;
        let profile = self.require_profile()?;
        Ok(gatesync::NextDnsClient::new(key, profile))
    }
}

//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Keep a NextDNS profile's denylist and rewrites in sync
///
/// Block and rewrite rules are built from hosts-format source lists and
/// pushed through the rate-limited NextDNS API. Re-running converges.
///
/// Get your API key at: https://my.nextdns.io/account
#[derive(Parser, Debug)]
#[command(name = "gatesync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// NextDNS API key (or set NEXTDNS_API_KEY env var)
    #[arg(short = 'k', long, env = "NEXTDNS_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// NextDNS profile id (or set NEXTDNS_PROFILE env var)
    #[arg(short = 'p', long, env = "NEXTDNS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile the profile against configured source lists
    Sync(SyncArgs),

    /// Show the profile's current denylist and rewrites
    Status,

    /// Remove every denylist and rewrite entry from the profile
    Wipe(WipeArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Sync command
// ============================================================================

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Block list source, repeatable (URL or file path;
    /// or set GATESYNC_BLOCK_SOURCES, comma-separated)
    #[arg(short, long = "block", value_name = "SOURCE")]
    pub block: Vec<String>,

    /// Rewrite list source, repeatable (URL or file path;
    /// or set GATESYNC_REWRITE_SOURCES, comma-separated)
    #[arg(short, long = "rewrite", value_name = "SOURCE")]
    pub rewrite: Vec<String>,

    /// Compute and print the plan without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Entries per bulk create call
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Seconds to pause after each successful API call
    #[arg(long, value_name = "SECS")]
    pub throttle: Option<u64>,

    /// Seconds to wait after a rate-limit rejection
    #[arg(long, value_name = "SECS")]
    pub cooldown: Option<u64>,
}

// ============================================================================
// Wipe command
// ============================================================================

#[derive(Args, Debug)]
pub struct WipeArgs {
    /// Confirm the removal of every rule
    #[arg(long)]
    pub yes: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (api_key, profile, output_format,
        /// block_sources, rewrite_sources)
        key: String,

        /// Value to set (sources are comma-separated)
        value: String,
    },

    /// Show the config file path
    Path,
}

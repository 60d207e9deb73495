//! # gatesync-cli
//!
//! Command-line NextDNS denylist/rewrite synchronizer.
//!
//! ## Commands
//!
//! - **sync**: reconcile the profile against configured source lists
//! - **status**: read-only view of the profile's current rules
//! - **wipe**: remove every denylist and rewrite entry
//! - **config**: manage the TOML config file

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;

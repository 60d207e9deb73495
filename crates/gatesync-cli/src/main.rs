//! gatesync - NextDNS denylist/rewrite synchronizer
//!
//! Reconciles a profile's rules against configured source lists.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    gatesync_cli::run().await
}

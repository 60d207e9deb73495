//! `gatesync status` - read-only view of the profile's current rules.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use super::Context;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context) -> Result<()> {
    let client = ctx.client()?;

    let denylist = client.denylist().list().await?;
    let rewrites = client.rewrites().list().await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "profile": client.profile(),
                    "denylist": denylist,
                    "rewrites": rewrites,
                }))?
            );
        }
        OutputFormat::Pretty => {
            println!(
                "{} {}",
                "Profile:".bold(),
                client.profile().cyan()
            );
            println!();

            println!("{} ({})", "Denylist".bold(), denylist.len());
            for rule in &denylist {
                println!("  {}", rule.domain);
            }
            println!();

            println!("{} ({})", "Rewrites".bold(), rewrites.len());
            for rule in &rewrites {
                println!("  {} {} {}", rule.domain, "->".dimmed(), rule.target);
            }
        }
    }

    Ok(())
}

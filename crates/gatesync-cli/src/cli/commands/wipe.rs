//! `gatesync wipe` - explicit remove-all for both rule kinds.

use anyhow::Result;
use colored::Colorize;
use gatesync::{SyncRunner, SyncSettings};

use super::Context;
use crate::cli::args::WipeArgs;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: WipeArgs) -> Result<()> {
    if !args.yes {
        anyhow::bail!(
            "This removes every denylist and rewrite entry from the profile.\n\
             Re-run with --yes to confirm."
        );
    }

    let client = ctx.client()?;

    // An empty source set is exactly remove-all mode.
    let summary = SyncRunner::new(client, SyncSettings::default())
        .run()
        .await?;

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Pretty => {
            let deleted = summary.total_writes();
            println!(
                "{} removed {} entries.",
                "Wipe complete:".green().bold(),
                deleted
            );
        }
    }

    Ok(())
}

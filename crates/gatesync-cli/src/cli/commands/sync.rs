//! `gatesync sync` - reconcile the profile against source lists.

use anyhow::Result;
use colored::Colorize;
use gatesync::{KindSummary, Pacing, RunSummary, SyncRunner, SyncSettings};
use std::time::Duration;

use super::Context;
use crate::cli::args::SyncArgs;
use crate::config::{split_sources, Config};
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: SyncArgs) -> Result<()> {
    let config = Config::load()?;

    let block_sources = resolve_sources(args.block, "GATESYNC_BLOCK_SOURCES", config.block_sources);
    let rewrite_sources = resolve_sources(
        args.rewrite,
        "GATESYNC_REWRITE_SOURCES",
        config.rewrite_sources,
    );

    let client = ctx.client()?;

    let mut pacing = Pacing::default();
    if let Some(n) = args.batch_size {
        pacing.batch_size = n;
    }
    if let Some(secs) = args.throttle {
        pacing.throttle = Duration::from_secs(secs);
    }
    if let Some(secs) = args.cooldown {
        pacing.cooldown = Duration::from_secs(secs);
    }

    let settings = SyncSettings {
        block_sources,
        rewrite_sources,
        dry_run: args.dry_run,
    };

    if ctx.output_format == OutputFormat::Pretty {
        print_banner(&settings);
    }

    let summary = SyncRunner::with_pacing(client, settings, pacing)
        .run()
        .await?;

    match ctx.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Pretty => print_summary(&summary),
    }

    Ok(())
}

/// Flags win over the environment, the environment over the config file.
fn resolve_sources(flags: Vec<String>, env_var: &str, config: Vec<String>) -> Vec<String> {
    if !flags.is_empty() {
        return flags;
    }
    if let Ok(value) = std::env::var(env_var) {
        let sources = split_sources(&value);
        if !sources.is_empty() {
            return sources;
        }
    }
    config
}

fn print_banner(settings: &SyncSettings) {
    println!("{}", "NextDNS sync".bold());
    println!(
        "  Old block/redirect settings are about to be updated from the \
         configured sources."
    );
    if settings.is_remove_all() {
        println!(
            "  {} no sources configured: every denylist and rewrite entry \
             will be removed.",
            "Warning:".yellow().bold()
        );
    } else {
        println!(
            "  A rule kind without sources is left untouched. The NextDNS \
             rate limiter resets 60 seconds after the last request."
        );
    }
    if settings.dry_run {
        println!("  {} no writes will be issued.", "Dry run:".cyan().bold());
    }
    println!();
}

fn print_summary(summary: &RunSummary) {
    println!("{}", "Sync complete.".green().bold());
    print_kind("denylist", summary.deny.as_ref());
    print_kind("rewrites", summary.rewrite.as_ref());
}

fn print_kind(name: &str, kind: Option<&KindSummary>) {
    match kind {
        None => println!("  {} skipped (no sources)", name.bold()),
        Some(k) => println!(
            "  {} desired {}, kept {}, deleted {}, created {}",
            name.bold(),
            k.desired,
            k.kept,
            k.deleted,
            k.created
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_beat_env_and_config() {
        let sources = resolve_sources(
            vec!["from-flag".into()],
            "GATESYNC_TEST_UNSET_VAR",
            vec!["from-config".into()],
        );
        assert_eq!(sources, vec!["from-flag"]);
    }

    #[test]
    fn config_is_the_fallback() {
        let sources = resolve_sources(vec![], "GATESYNC_TEST_UNSET_VAR", vec!["from-config".into()]);
        assert_eq!(sources, vec!["from-config"]);
    }
}

//! `gatesync config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::{split_sources, Config};
use crate::output::OutputFormat;

pub async fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: Context) -> Result<()> {
    let config = Config::load()?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();

            // API Key (masked)
            let api_display = config
                .api_key
                .as_ref()
                .map(|k| {
                    if k.len() > 8 {
                        format!("{}...{}", &k[..4], &k[k.len() - 4..])
                    } else {
                        "****".to_string()
                    }
                })
                .unwrap_or_else(|| "(not set)".dimmed().to_string());
            println!("  {} {}", "api_key:".bold(), api_display);

            println!(
                "  {} {}",
                "profile:".bold(),
                config.profile.as_deref().unwrap_or("(not set)")
            );
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!(
                "  {} {}",
                "block_sources:".bold(),
                config.block_sources.join(", ")
            );
            println!(
                "  {} {}",
                "rewrite_sources:".bold(),
                config.rewrite_sources.join(", ")
            );
        }
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "api_key" => {
            config.api_key = Some(value.to_string());
            println!("{} API key set.", "Success:".green().bold());
        }
        "profile" => {
            config.profile = Some(value.to_string());
            println!("{} Profile set to {}.", "Success:".green().bold(), value.cyan());
        }
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!(
                "{} Output format set to {}.",
                "Success:".green().bold(),
                value.cyan()
            );
        }
        "block_sources" => {
            config.block_sources = split_sources(value);
            println!(
                "{} {} block sources configured.",
                "Success:".green().bold(),
                config.block_sources.len()
            );
        }
        "rewrite_sources" => {
            config.rewrite_sources = split_sources(value);
            println!(
                "{} {} rewrite sources configured.",
                "Success:".green().bold(),
                config.rewrite_sources.len()
            );
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 api_key          - Your NextDNS API key\n  \
                 profile          - NextDNS profile id\n  \
                 output_format    - Default output format (pretty/json)\n  \
                 block_sources    - Comma-separated block list sources\n  \
                 rewrite_sources  - Comma-separated rewrite list sources",
                key
            );
        }
    }

    config.save()?;

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}

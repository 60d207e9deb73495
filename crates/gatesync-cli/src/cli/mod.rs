//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Get API key and profile from CLI/env (clap) or config
    let api_key = cli.api_key.or_else(|| config.api_key.clone());
    let profile = cli.profile.or_else(|| config.profile.clone());

    // Create context for commands
    let ctx = commands::Context {
        api_key,
        profile,
        output_format,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Sync(args) => commands::sync::execute(ctx, args).await,
        Commands::Status => commands::status::execute(ctx).await,
        Commands::Wipe(args) => commands::wipe::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}

/// Install the tracing subscriber, honoring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "gatesync=debug,info"
    } else {
        "gatesync=info,warn"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

// src/main.rs

use anyhow::Result;
use clap::Parser;
use tracing::debug;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Notices go to stdout; logs default to warnings only on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert(args)) => commands::cmd_convert(&args),
        Some(Commands::Completions { shell }) => commands::cmd_completions(shell),
        None => {
            debug!("No subcommand given, converting {}", cli.convert.root.display());
            commands::cmd_convert(&cli.convert)
        }
    }
}

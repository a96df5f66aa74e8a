// src/cli.rs
//! CLI definitions for printconv
//!
//! Running without a subcommand converts the current directory with the
//! default settings. The actual command implementations are in the
//! `commands` module.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use printconv::DEFAULT_SUFFIX;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "printconv")]
#[command(author = "printconv contributors")]
#[command(version)]
#[command(about = "Convert statement-style print lines into call-style print()", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

/// Arguments for a conversion run
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Directory to convert recursively
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// File name suffix of files to convert
    #[arg(short, long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Show which files would change without writing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Continue past files that cannot be read or written
    #[arg(short, long)]
    pub keep_going: bool,

    /// Send all notices to info-level logs instead of stdout (shown with RUST_LOG=info)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a directory tree (the default when no subcommand is given)
    Convert(ConvertArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

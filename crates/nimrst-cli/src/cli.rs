//! Command-line interface definition.
//!
//! The CLI structure uses clap v4's derive macros for type-safe argument
//! parsing.
//!
//! # Command Structure
//!
//! - `nimrst generate` - Run the full documentation pipeline
//! - `nimrst check` - Validate the configuration without generating

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// nimrst - Sphinx RST API reference pages from nim jsondoc
#[derive(Parser, Debug)]
#[command(
    name = "nimrst",
    version,
    about = "Generate Sphinx RST API reference pages from nim jsondoc",
    long_about = "nimrst runs `nim jsondoc` over a configured list of modules and turns\n\
                  the exported JSON into cross-referenced RST reference pages plus a\n\
                  toctree index, ready for a Sphinx site build."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the documentation pipeline over every configured module
    Generate(GenerateArgs),
    /// Validate the configuration and module sources without generating
    Check(CheckArgs),
}

/// Arguments for `nimrst generate`.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Path to the configuration file (default: nimrst.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Destination directory for generated RST pages
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Cache directory for the raw jsondoc JSON bundles
    #[arg(long)]
    pub json_dir: Option<PathBuf>,

    /// Nim compiler executable to invoke
    #[arg(long)]
    pub nim: Option<String>,

    /// Per-module exporter timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Arguments for `nimrst check`.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to the configuration file (default: nimrst.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

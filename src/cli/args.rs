//! Command-line interface definition using the clap derive macros. Specifies
//! all commands (edit, generate, info) and their arguments.
//!
//! The --config and --verbose flags are global and propagate to all
//! subcommands; --config falls back to shellsmith.toml and then to
//! ./config.json in main.rs. The generate command's flags answer the
//! emission-time prompts up front so it can run without a terminal.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shellsmith")]
#[command(author, version, about = "Interactive generator for cmd-style shell applications")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the saved application model (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an application model in the interactive editing shell
    Edit(EditArgs),

    /// Generate the shell script from a saved application model
    Generate(GenerateArgs),

    /// Show a saved application model
    Info(InfoArgs),
}

#[derive(Args, Default)]
pub struct EditArgs {
    /// Start from a fresh model even if the config file exists
    #[arg(long)]
    pub fresh: bool,
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Write the script here instead of the model's script path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wrap generated handlers in exception-handling blocks
    #[arg(long)]
    pub exceptions: bool,

    /// Print caught exceptions in red (only meaningful with --exceptions)
    #[arg(long)]
    pub red_errors: bool,

    /// Append the styling library's init statement after the import block
    #[arg(long)]
    pub styling_init: bool,

    /// Auto-generate the reserved quit handler
    #[arg(long)]
    pub auto_quit: bool,

    /// Auto-generate the reserved clear handler
    #[arg(long)]
    pub auto_clear: bool,

    /// Answer the emission prompts on the terminal instead of from flags
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Args, Default)]
pub struct InfoArgs {
    /// Print the raw JSON record instead of the summary
    #[arg(long)]
    pub json: bool,
}

//! CLI entry point for shellsmith. Parses command-line arguments using clap,
//! resolves the model config path (the --config flag, then shellsmith.toml,
//! then ./config.json), and dispatches to the appropriate command handler
//! (edit, generate, or info).

use anyhow::Context;
use clap::Parser;
use shellsmith::cli::{Cli, Commands};
use shellsmith::commands::{run_edit, run_generate, run_info};
use shellsmith::config::Config;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = env::current_dir().context("Failed to get current directory")?;
    let config = Config::load(&root);

    let config_path = cli
        .config
        .clone()
        .or_else(|| config.config.clone())
        .unwrap_or_else(|| PathBuf::from("./config.json"));

    match cli.command {
        Commands::Edit(args) => run_edit(&args, &config_path, &config, cli.verbose),
        Commands::Generate(args) => run_generate(&args, &config_path, cli.verbose),
        Commands::Info(args) => run_info(&args, &config_path),
    }
}

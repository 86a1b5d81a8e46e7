//! The info command: shows what a saved application model contains.

use crate::cli::InfoArgs;
use crate::emitter::render_import;
use crate::store;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn run_info(args: &InfoArgs, config_path: &Path) -> Result<()> {
    let model = store::load(config_path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    println!("{} {}", "script path:".cyan(), model.script_path.display());
    println!("{} {}", "config path:".cyan(), model.config_path.display());
    println!("{} {:?}", "intro:".cyan(), model.intro);
    println!("{} {:?}", "prompt:".cyan(), model.prompt);
    println!("{} {}", "file:".cyan(), model.file_attribute);

    println!("{}", format!("imports ({}):", model.imports.len()).cyan());
    for decl in &model.imports {
        println!("  {}", render_import(decl));
    }

    println!("{}", format!("commands ({}):", model.commands.len()).cyan());
    for spec in &model.commands {
        let arg_text = if spec.arg_spec.is_empty() {
            "-"
        } else {
            spec.arg_spec.as_str()
        };
        println!(
            "  {}  args: {}  {}",
            spec.name.bold(),
            arg_text,
            spec.documentation
        );
    }

    Ok(())
}

//! The generate command: runs the generation engine over a saved model
//! without entering the editing shell.
//!
//! Emission-time answers come from the command-line flags by default, so this
//! path needs no terminal; --interactive switches back to stdin prompts.

use crate::cli::GenerateArgs;
use crate::confirm::{PresetAnswers, TerminalConfirmer};
use crate::generator::Generator;
use crate::store;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

pub fn run_generate(args: &GenerateArgs, config_path: &Path, verbose: bool) -> Result<()> {
    let mut model = store::load(config_path).with_context(|| {
        format!(
            "Cannot load application model from {}",
            config_path.display()
        )
    })?;

    if let Some(ref output) = args.output {
        model.script_path = output.clone();
    }

    if verbose {
        println!(
            "Loaded {} imports and {} commands from {}",
            model.imports.len(),
            model.commands.len(),
            config_path.display()
        );
    }

    let path = if args.interactive {
        let mut confirmer = TerminalConfirmer;
        Generator::new(&model, &mut confirmer).generate()?
    } else {
        let mut confirmer = preset_answers(args);
        Generator::new(&model, &mut confirmer).generate()?
    };

    println!("{} {}", "Generation complete:".green(), path.display());
    Ok(())
}

fn preset_answers(args: &GenerateArgs) -> PresetAnswers {
    PresetAnswers {
        exceptions: args.exceptions,
        red_errors: args.red_errors,
        styling_init: args.styling_init,
        auto_quit: args.auto_quit,
        auto_clear: args.auto_clear,
    }
}

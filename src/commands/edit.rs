//! The interactive editing shell. A rustyline REPL builds up the application
//! model command by command, persists it as JSON, and hands it read-only to
//! the generation engine on `gen`.
//!
//! Line grammar: the first whitespace-delimited token is the operation, the
//! rest of the line is its argument text. A rejected operation leaves the
//! model unchanged.

use crate::cli::EditArgs;
use crate::config::Config;
use crate::confirm::{is_affirmative, TerminalConfirmer};
use crate::generator::Generator;
use crate::store;
use crate::types::{ApplicationModel, CommandSpec, ImportDeclaration};
use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

const ABOUT: &str = "\
shellsmith is a command-line tool for building command-line tools: describe an
interactive shell application (banner, prompt, imports, commands) and generate
a complete Python script implementing it on top of the cmd/cmd2 class pattern.
Generated handlers are stubs; the algorithms behind your commands are yours to
fill in. Models can be saved to JSON and loaded back later.";

enum LoopAction {
    Continue,
    Quit,
}

pub fn run_edit(args: &EditArgs, config_path: &Path, cfg: &Config, verbose: bool) -> Result<()> {
    let mut model = if !args.fresh && config_path.exists() {
        match store::load(config_path) {
            Ok(model) => {
                if verbose {
                    println!("Loaded model from {}", config_path.display());
                }
                model
            }
            Err(e) => {
                eprintln!("{} {:#}", "Warning:".yellow(), e);
                cfg.fresh_model()
            }
        }
    } else {
        cfg.fresh_model()
    };
    model.config_path = config_path.to_path_buf();

    println!("{}", "Welcome to shellsmith".green().bold());
    println!(
        "Type {} for the command list, {} to leave.\n",
        "help".cyan(),
        "quit".cyan()
    );

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(&format!("{} ", "|>".blue().bold())) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                let (op, arg) = split_operation(line);
                match dispatch(&mut model, cfg, &mut rl, op, arg) {
                    LoopAction::Continue => {}
                    LoopAction::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("{} {:?}", "Error:".red(), err);
                break;
            }
        }
    }

    Ok(())
}

/// Split a REPL line into operation and argument text.
fn split_operation(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((op, rest)) => (op, rest.trim()),
        None => (line, ""),
    }
}

fn dispatch(
    model: &mut ApplicationModel,
    cfg: &Config,
    rl: &mut DefaultEditor,
    op: &str,
    arg: &str,
) -> LoopAction {
    match op {
        "help" | "?" => print_help(),
        "about" => println!("{}", ABOUT),
        "intro" => model.intro = arg.to_string(),
        "prompt" => model.prompt = arg.to_string(),
        "path" => set_path(&mut model.script_path, arg, "usage: path <file>"),
        "jsonpath" => set_path(&mut model.config_path, arg, "usage: jsonpath <file>"),
        "import" => import_op(model, rl, arg),
        "add" => add_op(model, rl, arg),
        "info" => print_model(model),
        "save" => save_op(model),
        "load" => load_op(model, rl, arg),
        "reset" => {
            *model = cfg.fresh_model();
            clear_screen();
            println!("{}", "Model reset to defaults.".green());
        }
        "open" => open_op(model, arg),
        "clear" => clear_screen(),
        "gen" => gen_op(model),
        "quit" | "exit" => return LoopAction::Quit,
        _ => println!(
            "{} unknown command {:?}; type {} for the list",
            "Error:".red(),
            op,
            "help".cyan()
        ),
    }
    LoopAction::Continue
}

/// Read one follow-up answer; `None` when the line cannot be read.
fn ask(rl: &mut DefaultEditor, label: &str) -> Option<String> {
    match rl.readline(&format!("{} ", label.blue())) {
        Ok(line) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

fn set_path(slot: &mut PathBuf, arg: &str, usage: &str) {
    if arg.is_empty() {
        println!("{} {}", "Error:".red(), usage);
    } else {
        *slot = PathBuf::from(arg);
    }
}

fn import_op(model: &mut ApplicationModel, rl: &mut DefaultEditor, arg: &str) {
    let (flag, name) = split_operation(arg);
    match flag {
        "-m" | "--module" if !name.is_empty() => {
            let wants_alias = ask(rl, "Would you like to add a namespace? (y/n)")
                .map(|answer| is_affirmative(&answer))
                .unwrap_or(false);
            if wants_alias {
                match ask(rl, "Namespace:") {
                    Some(alias) if !alias.is_empty() => {
                        model.add_import(ImportDeclaration::Aliased {
                            module: name.to_string(),
                            alias,
                        });
                    }
                    _ => println!(
                        "{} the namespace must not be empty; import dropped",
                        "Error:".red()
                    ),
                }
            } else {
                model.add_import(ImportDeclaration::Plain(name.to_string()));
            }
        }
        "-p" | "--package" if !name.is_empty() => {
            match ask(rl, "What module is this package located in?") {
                Some(module) if !module.is_empty() => {
                    model.add_import(ImportDeclaration::Selective {
                        module,
                        symbol: name.to_string(),
                    });
                }
                _ => println!(
                    "{} the module must not be empty; import dropped",
                    "Error:".red()
                ),
            }
        }
        _ => println!(
            "{} usage: import -m <module> | import -p <symbol>",
            "Error:".red()
        ),
    }
}

fn add_op(model: &mut ApplicationModel, rl: &mut DefaultEditor, arg: &str) {
    let name = arg.trim();
    if name.is_empty() {
        println!("{} usage: add <name>", "Error:".red());
        return;
    }

    let documentation = match ask(rl, "Documentation:") {
        Some(text) => text,
        None => return,
    };
    let arg_spec = match ask(rl, "Arguments (csv):") {
        Some(text) => text,
        None => return,
    };

    if let Err(e) = model.add_command(CommandSpec::new(name, documentation, arg_spec)) {
        println!("{} {}", "Error:".red(), e);
    }
}

fn print_model(model: &ApplicationModel) {
    match serde_json::to_string_pretty(model) {
        Ok(text) => println!("{}", text),
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
}

fn save_op(model: &ApplicationModel) {
    match store::save(model, &model.config_path) {
        Ok(()) => println!("{}", "Saved successfully.".green()),
        Err(e) => println!("{} {:#}", "Error:".red(), e),
    }
}

fn load_op(model: &mut ApplicationModel, rl: &mut DefaultEditor, arg: &str) {
    let path = if arg.is_empty() {
        match ask(rl, "Path:") {
            Some(answer) if !answer.is_empty() => PathBuf::from(answer),
            _ => return,
        }
    } else {
        PathBuf::from(arg)
    };

    match store::load(&path) {
        Ok(loaded) => {
            *model = loaded;
            println!("{}", "Loaded successfully.".green());
        }
        Err(e) => println!("{} {:#}", "Error:".red(), e),
    }
}

fn open_op(model: &ApplicationModel, arg: &str) {
    let target = match arg {
        "-c" | "--code" => model.script_path.clone(),
        "-j" | "--json" => model.config_path.clone(),
        "" => {
            println!("{} usage: open -c | -j | <path>", "Error:".red());
            return;
        }
        path => PathBuf::from(path),
    };

    if let Err(e) = open_with_system(&target) {
        println!("{} cannot open {}: {}", "Error:".red(), target.display(), e);
    }
}

/// Hand a path to the platform opener.
fn open_with_system(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "the file does not exist; check the path or create the file",
        ));
    }

    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };
    cmd.spawn().map(|_| ())
}

fn gen_op(model: &ApplicationModel) {
    let mut confirmer = TerminalConfirmer;
    match Generator::new(model, &mut confirmer).generate() {
        Ok(path) => println!("{} {}", "Generation complete:".green(), path.display()),
        Err(e) => println!("{} {}", "Error:".red(), e),
    }
}

fn clear_screen() {
    // ANSI erase-display + cursor-home
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

fn print_help() {
    println!("{}", "Model".yellow().bold());
    println!("  {}   set the banner of the generated shell", "intro <text>".cyan());
    println!("  {}  set the prompt of the generated shell", "prompt <text>".cyan());
    println!("  {}   set the script output path", "path <file>".cyan());
    println!("  {}   add an import (-m module, -p package symbol)", "import ...".cyan());
    println!("  {}     add a command (asks for docs and arguments)", "add <name>".cyan());
    println!("  {}          show the current model", "info".cyan());
    println!("  {}         restore the model to defaults", "reset".cyan());
    println!();
    println!("{}", "Persistence".yellow().bold());
    println!("  {}  set the JSON save path", "jsonpath <file>".cyan());
    println!("  {}          save the model as JSON", "save".cyan());
    println!("  {}   load a model from JSON", "load [path]".cyan());
    println!();
    println!("{}", "Tools".yellow().bold());
    println!("  {}           generate the shell script", "gen".cyan());
    println!("  {}  open the script, config, or a path", "open -c|-j|<path>".cyan());
    println!("  {}         clear the terminal", "clear".cyan());
    println!("  {}         about this tool", "about".cyan());
    println!("  {}          leave the editing shell", "quit".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_operation() {
        assert_eq!(split_operation("intro Welcome home"), ("intro", "Welcome home"));
        assert_eq!(split_operation("save"), ("save", ""));
        assert_eq!(split_operation("path   ./code.py"), ("path", "./code.py"));
    }

    #[test]
    fn test_set_path_requires_argument() {
        let mut slot = PathBuf::from("./code.py");
        set_path(&mut slot, "", "usage");
        assert_eq!(slot, PathBuf::from("./code.py"));
        set_path(&mut slot, "./other.py", "usage");
        assert_eq!(slot, PathBuf::from("./other.py"));
    }
}

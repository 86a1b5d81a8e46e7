//! The generation driver: sequences one full emission run and owns every
//! emission-time interactive decision.
//!
//! Emission order is fixed: import block, optional styling initializer, class
//! header, command handlers, entry-point footer. Import and command blocks
//! appear in exactly model order. The run-wide handler choices are asked once
//! up front and threaded through every generic emission; reserved-name
//! confirmations are asked inline, at most once per distinct name.
//!
//! The whole artifact is buffered and written temp-then-rename, so a failed
//! write leaves any existing script untouched.

use crate::confirm::{Confirmer, Prompt};
use crate::emitter::{
    emit_clear_handler, emit_generic_handler, emit_quit_handler, references_styling_library,
    render_import, STYLING_INIT,
};
use crate::types::{ApplicationModel, CommandKind, ModelError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("failed to write generated script to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One generation run over a read-only model.
///
/// The confirmer answers the run's prompts; inject [`PresetAnswers`] or
/// [`ScriptedConfirmer`] for non-interactive use.
///
/// [`PresetAnswers`]: crate::confirm::PresetAnswers
/// [`ScriptedConfirmer`]: crate::confirm::ScriptedConfirmer
pub struct Generator<'a> {
    model: &'a ApplicationModel,
    confirmer: &'a mut dyn Confirmer,
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a ApplicationModel, confirmer: &'a mut dyn Confirmer) -> Self {
        Self { model, confirmer }
    }

    /// Produce the complete script text without touching the filesystem.
    pub fn render(&mut self) -> Result<String, GenerateError> {
        self.model.validate()?;

        // Run-wide handler choices, asked once and never re-asked per command.
        let exceptions = self.confirmer.confirm(Prompt::ExceptionHandling);
        let red_errors = exceptions && self.confirmer.confirm(Prompt::RedErrorOutput);

        let mut lines: Vec<String> = Vec::new();

        for decl in &self.model.imports {
            lines.push(render_import(decl));
        }

        let styling_referenced = self.model.imports.iter().any(references_styling_library);
        if styling_referenced && self.confirmer.confirm(Prompt::StylingInit) {
            lines.push(String::new());
            lines.push(STYLING_INIT.to_string());
        }

        if !lines.is_empty() {
            lines.push(String::new());
            lines.push(String::new());
        }
        lines.push("class App(Cmd):".to_string());
        lines.push(format!("    intro = \"{}\"", self.model.intro));
        lines.push(format!("    prompt = \"{}\"", self.model.prompt));
        lines.push(format!("    file = {}", self.model.file_attribute));

        // Reserved-name confirmations are cached so a name is asked at most
        // once per run.
        let mut quit_choice: Option<bool> = None;
        let mut clear_choice: Option<bool> = None;

        for spec in &self.model.commands {
            let block = match spec.kind() {
                CommandKind::Quit => {
                    let accepted = match quit_choice {
                        Some(accepted) => accepted,
                        None => {
                            let accepted = self.confirmer.confirm(Prompt::AutoQuit);
                            quit_choice = Some(accepted);
                            accepted
                        }
                    };
                    // Declined reserved names contribute nothing; they are
                    // never downgraded to the generic path.
                    accepted.then(emit_quit_handler)
                }
                CommandKind::Clear => {
                    let accepted = match clear_choice {
                        Some(accepted) => accepted,
                        None => {
                            let accepted = self.confirmer.confirm(Prompt::AutoClear);
                            clear_choice = Some(accepted);
                            accepted
                        }
                    };
                    accepted.then(emit_clear_handler)
                }
                CommandKind::Generic => Some(emit_generic_handler(spec, exceptions, red_errors)),
            };

            if let Some(block) = block {
                lines.push(String::new());
                lines.extend(block);
            }
        }

        lines.push(String::new());
        lines.push(String::new());
        lines.push("if __name__ == \"__main__\":".to_string());
        lines.push("    app = App()".to_string());
        lines.push("    app.cmdloop()".to_string());

        Ok(lines.join("\n") + "\n")
    }

    /// Run the full generation: render, then write the artifact to the
    /// model's script path.
    pub fn generate(&mut self) -> Result<PathBuf, GenerateError> {
        let text = self.render()?;
        let path = self.model.script_path.clone();
        write_atomic(&path, &text).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Write `contents` to a sibling temp file, then rename it onto `path`.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "script".into());
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, contents)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::ScriptedConfirmer;
    use crate::types::{CommandSpec, ImportDeclaration};
    use tempfile::TempDir;

    fn sample_model() -> ApplicationModel {
        let mut model = ApplicationModel::default();
        model.intro = "Welcome".to_string();
        model.prompt = "|>".to_string();
        model.add_import(ImportDeclaration::Selective {
            module: "cmd2".to_string(),
            symbol: "Cmd".to_string(),
        });
        model.add_import(ImportDeclaration::Plain("os".to_string()));
        model
            .add_command(CommandSpec::new("greet", "Say hello", "arg"))
            .unwrap();
        model
    }

    #[test]
    fn test_render_minimal_model() {
        let model = ApplicationModel::default();
        let mut confirmer = ScriptedConfirmer::new();
        let text = Generator::new(&model, &mut confirmer).render().unwrap();
        let expected = [
            "class App(Cmd):",
            "    intro = \"\"",
            "    prompt = \"\"",
            "    file = None",
            "",
            "",
            "if __name__ == \"__main__\":",
            "    app = App()",
            "    app.cmdloop()",
        ]
        .join("\n")
            + "\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_imports_keep_model_order() {
        let model = sample_model();
        let mut confirmer = ScriptedConfirmer::new();
        let text = Generator::new(&model, &mut confirmer).render().unwrap();
        let cmd2 = text.find("from cmd2 import Cmd").unwrap();
        let os = text.find("import os").unwrap();
        assert!(cmd2 < os);
    }

    #[test]
    fn test_commands_keep_model_order() {
        let mut model = sample_model();
        model
            .add_command(CommandSpec::new("farewell", "Say goodbye", "arg"))
            .unwrap();
        let mut confirmer = ScriptedConfirmer::new();
        let text = Generator::new(&model, &mut confirmer).render().unwrap();
        let greet = text.find("def do_greet").unwrap();
        let farewell = text.find("def do_farewell").unwrap();
        assert!(greet < farewell);
    }

    #[test]
    fn test_class_header_carries_literal_attributes() {
        let model = sample_model();
        let mut confirmer = ScriptedConfirmer::new();
        let text = Generator::new(&model, &mut confirmer).render().unwrap();
        assert!(text.contains("class App(Cmd):"));
        assert!(text.contains("    intro = \"Welcome\""));
        assert!(text.contains("    prompt = \"|>\""));
        assert!(text.contains("    file = None"));
        assert!(text.ends_with("if __name__ == \"__main__\":\n    app = App()\n    app.cmdloop()\n"));
    }

    #[test]
    fn test_red_question_only_follows_accepted_exception_handling() {
        let model = sample_model();

        let mut declined = ScriptedConfirmer::new();
        Generator::new(&model, &mut declined).render().unwrap();
        assert_eq!(declined.asked, vec![Prompt::ExceptionHandling]);

        let mut accepted = ScriptedConfirmer::new().answer(Prompt::ExceptionHandling, true);
        Generator::new(&model, &mut accepted).render().unwrap();
        assert_eq!(
            accepted.asked,
            vec![Prompt::ExceptionHandling, Prompt::RedErrorOutput]
        );
    }

    #[test]
    fn test_styling_init_asked_only_when_library_imported() {
        let mut model = sample_model();
        let mut confirmer = ScriptedConfirmer::new().answer(Prompt::StylingInit, true);
        Generator::new(&model, &mut confirmer).render().unwrap();
        assert!(!confirmer.asked.contains(&Prompt::StylingInit));

        model.add_import(ImportDeclaration::Selective {
            module: "colorama".to_string(),
            symbol: "init".to_string(),
        });
        let mut confirmer = ScriptedConfirmer::new().answer(Prompt::StylingInit, true);
        let text = Generator::new(&model, &mut confirmer).render().unwrap();
        assert!(confirmer.asked.contains(&Prompt::StylingInit));
        assert!(text.contains("from colorama import init\n\ninit(autoreset=True)"));
    }

    #[test]
    fn test_styling_init_declined_is_not_appended() {
        let mut model = sample_model();
        model.add_import(ImportDeclaration::Plain("colorama".to_string()));
        let mut confirmer = ScriptedConfirmer::new();
        let text = Generator::new(&model, &mut confirmer).render().unwrap();
        assert!(!text.contains("init(autoreset=True)"));
    }

    #[test]
    fn test_declined_quit_contributes_zero_lines() {
        let mut with_quit = sample_model();
        with_quit
            .add_command(CommandSpec::new("quit", "Leave", "arg"))
            .unwrap();

        let mut confirmer = ScriptedConfirmer::new().answer(Prompt::AutoQuit, false);
        let text = Generator::new(&with_quit, &mut confirmer).render().unwrap();

        // No generic stub either: declined reserved names vanish entirely.
        assert!(!text.contains("do_quit"));

        let without_quit = sample_model();
        let mut confirmer = ScriptedConfirmer::new();
        let baseline = Generator::new(&without_quit, &mut confirmer).render().unwrap();
        assert_eq!(text, baseline);
    }

    #[test]
    fn test_accepted_quit_emits_fixed_handler() {
        let mut model = sample_model();
        model
            .add_command(CommandSpec::new("quit", "ignored", "ignored"))
            .unwrap();
        let mut confirmer = ScriptedConfirmer::new().answer(Prompt::AutoQuit, true);
        let text = Generator::new(&model, &mut confirmer).render().unwrap();
        assert!(text.contains("    def do_quit(self, arg):"));
        assert!(text.contains("        \"\"\"Quit the console.\"\"\""));
        assert!(text.contains("        quit()"));
        assert!(!text.contains("ignored"));
    }

    #[test]
    fn test_accepted_clear_ignores_documentation_and_args() {
        let mut first = sample_model();
        first
            .add_command(CommandSpec::new("clear", "Wipe it", "a, b, c"))
            .unwrap();
        let mut second = sample_model();
        second
            .add_command(CommandSpec::new("clear", "", ""))
            .unwrap();

        let mut c1 = ScriptedConfirmer::new().answer(Prompt::AutoClear, true);
        let mut c2 = ScriptedConfirmer::new().answer(Prompt::AutoClear, true);
        let t1 = Generator::new(&first, &mut c1).render().unwrap();
        let t2 = Generator::new(&second, &mut c2).render().unwrap();

        assert_eq!(t1, t2);
        assert!(t1.contains("            os.system('cls')"));
        assert!(t1.contains("            os.system('clear')"));
    }

    #[test]
    fn test_reserved_prompt_asked_once_per_run() {
        let mut model = sample_model();
        model
            .add_command(CommandSpec::new("quit", "", ""))
            .unwrap();
        let mut confirmer = ScriptedConfirmer::new().answer(Prompt::AutoQuit, true);
        Generator::new(&model, &mut confirmer).render().unwrap();
        let quit_asks = confirmer
            .asked
            .iter()
            .filter(|p| **p == Prompt::AutoQuit)
            .count();
        assert_eq!(quit_asks, 1);
    }

    #[test]
    fn test_render_is_deterministic_for_same_answers() {
        let mut model = sample_model();
        model.add_import(ImportDeclaration::Plain("colorama".to_string()));
        model
            .add_command(CommandSpec::new("quit", "", ""))
            .unwrap();

        let script = || {
            ScriptedConfirmer::new()
                .answer(Prompt::ExceptionHandling, true)
                .answer(Prompt::RedErrorOutput, true)
                .answer(Prompt::StylingInit, true)
                .answer(Prompt::AutoQuit, false)
        };

        let mut c1 = script();
        let mut c2 = script();
        let t1 = Generator::new(&model, &mut c1).render().unwrap();
        let t2 = Generator::new(&model, &mut c2).render().unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn test_render_rejects_colliding_command_names() {
        let mut model = sample_model();
        model.commands.push(CommandSpec::new("greet", "", ""));
        let mut confirmer = ScriptedConfirmer::new();
        let err = Generator::new(&model, &mut confirmer).render().unwrap_err();
        assert!(matches!(err, GenerateError::Model(_)));
    }

    #[test]
    fn test_generate_writes_script_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut model = sample_model();
        model.script_path = temp_dir.path().join("code.py");

        let mut confirmer = ScriptedConfirmer::new();
        let path = Generator::new(&model, &mut confirmer).generate().unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("class App(Cmd):"));
        assert!(written.ends_with("app.cmdloop()\n"));
        // No stray temp file left behind
        assert!(!temp_dir.path().join("code.py.tmp").exists());
    }

    #[test]
    fn test_generate_reports_unwritable_destination() {
        let temp_dir = TempDir::new().unwrap();
        let mut model = sample_model();
        model.script_path = temp_dir.path().join("missing").join("code.py");

        let mut confirmer = ScriptedConfirmer::new();
        let err = Generator::new(&model, &mut confirmer).generate().unwrap_err();
        match err {
            GenerateError::Write { path, .. } => {
                assert_eq!(path, model.script_path);
            }
            other => panic!("expected write error, got {other:?}"),
        }
    }
}

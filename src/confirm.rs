//! The confirmation capability consumed by the generation driver.
//!
//! Every emission-time decision is a typed [`Prompt`] answered through the
//! [`Confirmer`] trait, so the driver never talks to a terminal directly.
//! Three implementations cover the tool's surfaces: [`TerminalConfirmer`] asks
//! the operator on stdin, [`PresetAnswers`] maps command-line flags for
//! non-interactive runs, and [`ScriptedConfirmer`] is the test double that
//! also records which prompts were asked and in what order.

use colored::Colorize;
use std::collections::HashMap;
use std::io::{self, Write};

/// An emission-time yes/no decision owned by the generation driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prompt {
    /// Wrap generated handlers in exception-handling blocks?
    ExceptionHandling,
    /// Print caught exceptions in red?
    RedErrorOutput,
    /// Append the styling library's initializer after the import block?
    StylingInit,
    /// Auto-generate the reserved `quit` handler?
    AutoQuit,
    /// Auto-generate the reserved `clear` handler?
    AutoClear,
}

impl Prompt {
    /// Operator-facing question text.
    pub fn question(self) -> &'static str {
        match self {
            Self::ExceptionHandling => "Do you want exception handling in all your functions?",
            Self::RedErrorOutput => "Do you want your exceptions to be printed in red font color?",
            Self::StylingInit => "Do you want to add the init statement?",
            Self::AutoQuit => "Automatically generate the quit function?",
            Self::AutoClear => "Automatically generate the clear function?",
        }
    }
}

/// Answers emission-time prompts. Anything but an explicit yes is a no.
pub trait Confirmer {
    fn confirm(&mut self, prompt: Prompt) -> bool;
}

/// Whether a free-text answer counts as an explicit yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Asks the operator on the terminal, blocking until answered.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, prompt: Prompt) -> bool {
        print!("{} ", format!("{} (y/n)", prompt.question()).blue());
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        is_affirmative(&answer)
    }
}

/// Fixed answers supplied up front, for non-interactive generation runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetAnswers {
    pub exceptions: bool,
    pub red_errors: bool,
    pub styling_init: bool,
    pub auto_quit: bool,
    pub auto_clear: bool,
}

impl Confirmer for PresetAnswers {
    fn confirm(&mut self, prompt: Prompt) -> bool {
        match prompt {
            Prompt::ExceptionHandling => self.exceptions,
            Prompt::RedErrorOutput => self.red_errors,
            Prompt::StylingInit => self.styling_init,
            Prompt::AutoQuit => self.auto_quit,
            Prompt::AutoClear => self.auto_clear,
        }
    }
}

/// Scripted double for tests: answers from a fixed table (default no) and
/// records every prompt asked, in order.
#[derive(Debug, Default)]
pub struct ScriptedConfirmer {
    answers: HashMap<Prompt, bool>,
    pub asked: Vec<Prompt>,
}

impl ScriptedConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: register an answer for a prompt.
    pub fn answer(mut self, prompt: Prompt, yes: bool) -> Self {
        self.answers.insert(prompt, yes);
        self
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, prompt: Prompt) -> bool {
        self.asked.push(prompt);
        self.answers.get(&prompt).copied().unwrap_or(false)
    }
}

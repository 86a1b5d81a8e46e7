//! shellsmith: an interactive generator for cmd-style command-line shell
//! applications.
//!
//! The library exposes the application model, the emitters, and the
//! generation driver for programmatic use; the CLI in main.rs wires them to a
//! terminal. The generation engine is deterministic with respect to its
//! inputs: one read-only [`ApplicationModel`] plus one [`Confirmer`] for the
//! emission-time choices fully determine the emitted script.

pub mod cli;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod emitter;
pub mod generator;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use cli::{Cli, Commands, EditArgs, GenerateArgs, InfoArgs};
pub use config::Config;
pub use confirm::{
    is_affirmative, Confirmer, PresetAnswers, Prompt, ScriptedConfirmer, TerminalConfirmer,
};
pub use emitter::{references_styling_library, render_import, STYLING_INIT, STYLING_LIBRARY};
pub use generator::{GenerateError, Generator};
pub use types::{
    is_identifier, ApplicationModel, CommandKind, CommandSpec, ImportDeclaration, ModelError,
};

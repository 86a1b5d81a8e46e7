//! Core data types for the application model: the structured description of
//! the shell application to be generated. The model is built up by the editing
//! shell, persisted as a flat JSON record, and consumed read-only by the
//! generation engine.
//!
//! Import declarations are resolved into explicit tagged variants here, at the
//! model boundary. Records that match no known shape are dropped during
//! deserialization, so the emitters downstream never have to sniff element
//! counts or tags.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Tag marking an aliased module import in the persisted record.
const TAG_NAMESPACE: &str = "namespace";
/// Tag marking a selective (from-module) import in the persisted record.
const TAG_PACKAGE: &str = "package";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate command name: {0}")]
    DuplicateCommand(String),
    #[error("invalid command name: {0:?} (must be a non-empty identifier)")]
    InvalidCommandName(String),
}

/// One import to be emitted into the generated script.
///
/// The persisted record shape is a short string array: `["os"]`,
/// `["namespace", "numpy", "np"]`, or `["package", "collections",
/// "OrderedDict"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDeclaration {
    /// A single module name: `import os`.
    Plain(String),
    /// A module imported under a local alias: `import numpy as np`.
    Aliased { module: String, alias: String },
    /// One symbol imported from a module: `from collections import OrderedDict`.
    Selective { module: String, symbol: String },
}

impl ImportDeclaration {
    /// Resolve a raw persisted record into a declaration.
    ///
    /// Returns `None` for records matching no known shape (wrong element
    /// count, unrecognized tag, non-string elements). Malformed records are
    /// tolerated, not errors.
    pub fn from_record(record: &Value) -> Option<Self> {
        let elements = record.as_array()?;
        let strings: Vec<&str> = elements
            .iter()
            .map(|v| v.as_str())
            .collect::<Option<Vec<_>>>()?;

        match strings.as_slice() {
            [module] => Some(Self::Plain((*module).to_string())),
            [TAG_NAMESPACE, module, alias] => Some(Self::Aliased {
                module: (*module).to_string(),
                alias: (*alias).to_string(),
            }),
            [TAG_PACKAGE, module, symbol] => Some(Self::Selective {
                module: (*module).to_string(),
                symbol: (*symbol).to_string(),
            }),
            _ => None,
        }
    }

    /// Convert back to the persisted record shape.
    pub fn to_record(&self) -> Value {
        let parts: Vec<&str> = match self {
            Self::Plain(module) => vec![module.as_str()],
            Self::Aliased { module, alias } => {
                vec![TAG_NAMESPACE, module.as_str(), alias.as_str()]
            }
            Self::Selective { module, symbol } => {
                vec![TAG_PACKAGE, module.as_str(), symbol.as_str()]
            }
        };
        Value::Array(parts.into_iter().map(|s| Value::String(s.to_string())).collect())
    }

    /// Whether any textual field of this declaration contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        match self {
            Self::Plain(module) => module.contains(needle),
            Self::Aliased { module, alias } => module.contains(needle) || alias.contains(needle),
            Self::Selective { module, symbol } => module.contains(needle) || symbol.contains(needle),
        }
    }
}

/// Classification of a command name, resolved once per command before emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Reserved name with an auto-generated process-terminating handler.
    Quit,
    /// Reserved name with an auto-generated console-clearing handler.
    Clear,
    /// Any other name; gets a generic handler stub.
    Generic,
}

impl CommandKind {
    /// Classify a command name. Reserved names are matched exactly.
    pub fn classify(name: &str) -> Self {
        match name {
            "quit" => Self::Quit,
            "clear" => Self::Clear,
            _ => Self::Generic,
        }
    }
}

/// One user-defined command of the generated shell.
///
/// Persisted as a `[name, documentation, arg_spec]` string array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Handler name; must be a non-empty identifier, unique within the model.
    pub name: String,
    /// Free text rendered as the handler's docstring. May be empty.
    pub documentation: String,
    /// Free-text parameter list inserted verbatim into the handler signature.
    pub arg_spec: String,
}

impl CommandSpec {
    pub fn new(
        name: impl Into<String>,
        documentation: impl Into<String>,
        arg_spec: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            documentation: documentation.into(),
            arg_spec: arg_spec.into(),
        }
    }

    /// Classification of this command's name.
    pub fn kind(&self) -> CommandKind {
        CommandKind::classify(&self.name)
    }
}

/// Whether `name` is a plain ASCII identifier (letter or underscore, then
/// letters, digits, underscores).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The complete description of a shell application to generate.
///
/// Field names in the persisted JSON keep the original record's key spelling
/// (`"app path"`, `"json path"`, `"file"`) so existing configs load unchanged.
/// Ordering of `imports` and `commands` is significant: insertion order is
/// emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationModel {
    /// Where the generated script is written.
    #[serde(rename = "app path")]
    pub script_path: PathBuf,

    /// Where this model is saved as JSON.
    #[serde(rename = "json path")]
    pub config_path: PathBuf,

    /// Banner printed when the generated shell starts.
    pub intro: String,

    /// Prompt string of the generated shell.
    pub prompt: String,

    /// Class-level `file` attribute, placed verbatim in the generated source.
    #[serde(rename = "file")]
    pub file_attribute: String,

    /// Imports, in emission order. Malformed persisted records are dropped.
    #[serde(
        serialize_with = "serialize_imports",
        deserialize_with = "deserialize_imports"
    )]
    pub imports: Vec<ImportDeclaration>,

    /// User commands, in emission order.
    #[serde(
        serialize_with = "serialize_commands",
        deserialize_with = "deserialize_commands"
    )]
    pub commands: Vec<CommandSpec>,
}

impl Default for ApplicationModel {
    fn default() -> Self {
        Self {
            script_path: PathBuf::from("./code.py"),
            config_path: PathBuf::from("./config.json"),
            intro: String::new(),
            prompt: String::new(),
            file_attribute: "None".to_string(),
            imports: Vec::new(),
            commands: Vec::new(),
        }
    }
}

impl ApplicationModel {
    /// Append an import declaration, preserving insertion order.
    pub fn add_import(&mut self, decl: ImportDeclaration) {
        self.imports.push(decl);
    }

    /// Append a command after checking its name.
    ///
    /// Rejects non-identifier names and names already present in the model;
    /// the model is left unchanged on rejection.
    pub fn add_command(&mut self, spec: CommandSpec) -> Result<(), ModelError> {
        if !is_identifier(&spec.name) {
            return Err(ModelError::InvalidCommandName(spec.name));
        }
        if self.commands.iter().any(|c| c.name == spec.name) {
            return Err(ModelError::DuplicateCommand(spec.name));
        }
        self.commands.push(spec);
        Ok(())
    }

    /// Check the whole model's command list for invalid or colliding names.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.commands.len());
        for spec in &self.commands {
            if !is_identifier(&spec.name) {
                return Err(ModelError::InvalidCommandName(spec.name.clone()));
            }
            if seen.contains(&spec.name.as_str()) {
                return Err(ModelError::DuplicateCommand(spec.name.clone()));
            }
            seen.push(&spec.name);
        }
        Ok(())
    }
}

fn serialize_imports<S>(imports: &[ImportDeclaration], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(imports.iter().map(ImportDeclaration::to_record))
}

fn deserialize_imports<'de, D>(deserializer: D) -> Result<Vec<ImportDeclaration>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<Value>::deserialize(deserializer)?;
    Ok(records
        .iter()
        .filter_map(ImportDeclaration::from_record)
        .collect())
}

fn serialize_commands<S>(commands: &[CommandSpec], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(
        commands
            .iter()
            .map(|c| (&c.name, &c.documentation, &c.arg_spec)),
    )
}

fn deserialize_commands<'de, D>(deserializer: D) -> Result<Vec<CommandSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Vec::<(String, String, String)>::deserialize(deserializer)?;
    Ok(records
        .into_iter()
        .map(|(name, documentation, arg_spec)| CommandSpec {
            name,
            documentation,
            arg_spec,
        })
        .collect())
}

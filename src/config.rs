//! Configuration file parsing for shellsmith.toml. Supplies the default
//! script/config paths and the intro/prompt values applied to freshly created
//! models.
//!
//! Config::load returns the default configuration if shellsmith.toml doesn't
//! exist; a malformed file produces a warning on stderr and the defaults, so a
//! broken config never blocks the tool.

use crate::types::ApplicationModel;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure matching shellsmith.toml
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Default output path for the generated script
    pub script: Option<PathBuf>,

    /// Default path where the model is saved as JSON
    pub config: Option<PathBuf>,

    /// Values applied to freshly created models
    pub defaults: Defaults,
}

/// The `[defaults]` table: initial banner and prompt for new models
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Defaults {
    pub intro: String,
    pub prompt: String,
}

impl Config {
    /// Load configuration from shellsmith.toml in the given root directory
    pub fn load(root: &Path) -> Self {
        let config_path = root.join("shellsmith.toml");

        if !config_path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse shellsmith.toml: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read shellsmith.toml: {}", e);
                Self::default()
            }
        }
    }

    /// Create a fresh model carrying this configuration's defaults.
    pub fn fresh_model(&self) -> ApplicationModel {
        let mut model = ApplicationModel::default();
        if let Some(ref script) = self.script {
            model.script_path = script.clone();
        }
        if let Some(ref config) = self.config {
            model.config_path = config.clone();
        }
        model.intro = self.defaults.intro.clone();
        model.prompt = self.defaults.prompt.clone();
        model
    }
}

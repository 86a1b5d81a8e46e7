//! JSON persistence for the application model.
//!
//! The persisted record keeps the original flat shape (string-array imports
//! and commands, `"app path"`/`"json path"` keys), so configs saved by older
//! builds load unchanged. Loading validates command names and silently drops
//! malformed import records; generation itself never calls into this module.

use crate::types::ApplicationModel;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialize the model as pretty-printed JSON, creating or truncating `path`.
pub fn save(model: &ApplicationModel, path: &Path) -> Result<()> {
    let text =
        serde_json::to_string_pretty(model).context("Failed to serialize application model")?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Load and validate a model from `path`.
pub fn load(path: &Path) -> Result<ApplicationModel> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let model: ApplicationModel = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    model
        .validate()
        .with_context(|| format!("Invalid application model in {}", path.display()))?;
    Ok(model)
}

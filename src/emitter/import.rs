//! Import emission: each declaration renders to exactly one source line.
//!
//! This module also recognizes imports of the console-styling library. The
//! emitter only observes the reference; whether the styling initializer is
//! appended after the import block is the generation driver's decision.

use crate::types::ImportDeclaration;

/// Name of the console-styling library recognized in import declarations.
pub const STYLING_LIBRARY: &str = "colorama";

/// The styling library's initializer statement, appended after the import
/// block when the operator confirms it.
pub const STYLING_INIT: &str = "init(autoreset=True)";

/// Render one import declaration as a single source line (no trailing newline).
pub fn render_import(decl: &ImportDeclaration) -> String {
    match decl {
        ImportDeclaration::Plain(module) => format!("import {}", module),
        ImportDeclaration::Aliased { module, alias } => {
            format!("import {} as {}", module, alias)
        }
        ImportDeclaration::Selective { module, symbol } => {
            format!("from {} import {}", module, symbol)
        }
    }
}

/// Whether a declaration references the console-styling library.
pub fn references_styling_library(decl: &ImportDeclaration) -> bool {
    decl.mentions(STYLING_LIBRARY)
}

//! One-file index: package name plus classified declarations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::{ClassifyOptions, classify, package_name};
use crate::error::ParserError;
use crate::parser::{first_layout_error, first_syntax_error, is_go_path, parse_source};
use crate::types::DeclarationRecord;

/// Declarations of a single Go source file, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceIndex {
    pub package: String,
    pub declarations: Vec<DeclarationRecord>,
}

impl SourceIndex {
    /// First declaration whose span contains `line` (1-based).
    #[must_use]
    pub fn declaration_at(&self, line: u32) -> Option<&DeclarationRecord> {
        self.declarations.iter().find(|d| d.contains_line(line))
    }
}

/// Read and index a Go file from disk.
///
/// # Errors
/// Returns `ParserError::Io` if the file cannot be read, or a parse error
/// from [`index_source`].
pub fn index_file(path: &Path, options: &ClassifyOptions) -> Result<SourceIndex, ParserError> {
    let label = path.display().to_string();
    if !is_go_path(&label) {
        tracing::warn!(path = %label, "file does not have a .go extension, parsing as Go anyway");
    }
    let source = std::fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: label.clone(),
        source,
    })?;
    index_source(&label, &source, options)
}

/// Index Go source text. `path` only labels error messages.
///
/// # Errors
/// Returns `ParserError::Syntax` if the grammar had to recover from an error
/// anywhere in the file or the file-scope layout is not valid Go, or
/// `ParserError::MissingPackage` if there is no `package` clause. No partial
/// index is returned in any of these cases.
pub fn index_source(
    path: &str,
    source: &str,
    options: &ClassifyOptions,
) -> Result<SourceIndex, ParserError> {
    let root = parse_source(source);

    if let Some(error) = first_syntax_error(&root) {
        return Err(ParserError::Syntax {
            path: path.to_string(),
            line: error.line,
            message: error.message,
        });
    }

    let package = package_name(&root).ok_or_else(|| ParserError::MissingPackage {
        path: path.to_string(),
    })?;

    if let Some(error) = first_layout_error(&root) {
        return Err(ParserError::Syntax {
            path: path.to_string(),
            line: error.line,
            message: error.message,
        });
    }

    let declarations = classify(&root, options);
    tracing::debug!(%path, %package, declarations = declarations.len(), "indexed source");

    Ok(SourceIndex {
        package,
        declarations,
    })
}

//! # declmap-parser
//!
//! ast-grep-based indexing of Go top-level declarations.
//!
//! Given one Go source file, produces its package name and one
//! [`DeclarationRecord`] per top-level declaration (imports, const/var/type
//! groups, functions and receiver-qualified methods) with inclusive 1-based
//! line spans, in document order.

pub mod classify;
pub mod error;
pub mod format;
pub mod index;
pub mod parser;
pub mod types;

pub use classify::ClassifyOptions;
pub use error::ParserError;
pub use format::{OutputFormat, render_index, write_index, write_records};
pub use index::{SourceIndex, index_file, index_source};
pub use types::{DeclKind, DeclarationRecord, Taxonomy};

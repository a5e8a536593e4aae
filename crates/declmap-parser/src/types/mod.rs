//! Core data types for indexed declarations.

mod decl_kind;
mod record;
mod taxonomy;

pub use decl_kind::DeclKind;
pub use record::DeclarationRecord;
pub use taxonomy::{GroupKeyword, Taxonomy};

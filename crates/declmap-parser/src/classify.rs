//! Go top-level declaration classifier.
//!
//! Walks the direct children of `source_file` in document order and turns
//! every declaration into exactly one [`DeclarationRecord`]: grouped
//! declarations are labelled by their keyword, callables become functions or
//! receiver-qualified methods, anything else is `Unclassified`.
//! Nested declarations inside function bodies are never visited.

use ast_grep_core::Node;
use ast_grep_language::SupportLang;

use crate::types::{DeclKind, DeclarationRecord, GroupKeyword, Taxonomy};

mod helpers;

/// Top-level nodes that are part of the file but not declarations.
const NON_DECLARATION_KINDS: &[&str] = &["comment", "package_clause"];

/// Immutable knobs for one classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub taxonomy: Taxonomy,
    /// Name methods `Receiver.Method` instead of just `Method`.
    pub qualify_methods: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            taxonomy: Taxonomy::Detailed,
            qualify_methods: true,
        }
    }
}

/// Structural shape of a top-level node.
enum Shape {
    Group(GroupKeyword),
    Function,
    Method,
    Other,
}

impl Shape {
    fn of(kind: &str) -> Self {
        if let Some(keyword) = GroupKeyword::from_node_kind(kind) {
            return Self::Group(keyword);
        }
        match kind {
            "function_declaration" => Self::Function,
            "method_declaration" => Self::Method,
            _ => Self::Other,
        }
    }
}

/// Classify every top-level declaration of a parsed Go file.
pub fn classify<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
    options: &ClassifyOptions,
) -> Vec<DeclarationRecord> {
    let records: Vec<DeclarationRecord> = root
        .root()
        .children()
        .filter(is_declaration)
        .map(|node| classify_declaration(&node, options))
        .collect();
    tracing::debug!(count = records.len(), "classified top-level declarations");
    records
}

/// Name from the file's `package` clause, if there is one.
pub fn package_name<D: ast_grep_core::Doc<Lang = SupportLang>>(
    root: &ast_grep_core::AstGrep<D>,
) -> Option<String> {
    root.root()
        .children()
        .find(|c| c.kind().as_ref() == "package_clause")?
        .children()
        .find(|c| c.kind().as_ref() == "package_identifier")
        .map(|n| n.text().to_string())
}

fn is_declaration<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    node.is_named() && !NON_DECLARATION_KINDS.contains(&node.kind().as_ref())
}

/// Classify a single top-level node. Total: every shape yields a record.
pub fn classify_declaration<D: ast_grep_core::Doc>(
    node: &Node<D>,
    options: &ClassifyOptions,
) -> DeclarationRecord {
    let start_line = node.start_pos().line() as u32 + 1;
    let end_line = node.end_pos().line() as u32 + 1;

    let (kind, name) = match Shape::of(node.kind().as_ref()) {
        Shape::Group(keyword) => {
            let kind = options.taxonomy.group_kind(keyword);
            let name = match keyword {
                GroupKeyword::Type => helpers::first_type_name(node),
                GroupKeyword::Import | GroupKeyword::Const | GroupKeyword::Var => None,
            };
            (kind, name)
        }
        Shape::Function => (DeclKind::Function, helpers::callable_name(node)),
        Shape::Method => classify_method(node, options),
        Shape::Other => (DeclKind::Unclassified, None),
    };

    DeclarationRecord::new(kind, start_line, end_line, name)
}

fn classify_method<D: ast_grep_core::Doc>(
    node: &Node<D>,
    options: &ClassifyOptions,
) -> (DeclKind, Option<String>) {
    let method = helpers::callable_name(node);
    match (helpers::receiver_type_name(node), method) {
        (Some(receiver), Some(method)) if options.qualify_methods => {
            (DeclKind::Method, Some(format!("{receiver}.{method}")))
        }
        (Some(_), method) => (DeclKind::Method, method),
        (None, method) => {
            tracing::trace!(
                line = node.start_pos().line() + 1,
                "receiver is not a simple type name, reporting as function"
            );
            (DeclKind::Function, method)
        }
    }
}

#[cfg(test)]
mod tests;

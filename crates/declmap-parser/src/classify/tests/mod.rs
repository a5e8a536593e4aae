use pretty_assertions::assert_eq;

use super::*;
use crate::parser::parse_source;

mod receivers;

fn classify_with(source: &str, options: &ClassifyOptions) -> Vec<DeclarationRecord> {
    let root = parse_source(source);
    classify(&root, options)
}

fn classify_source(source: &str) -> Vec<DeclarationRecord> {
    classify_with(source, &ClassifyOptions::default())
}

fn record(kind: DeclKind, start: u32, end: u32, name: &str) -> DeclarationRecord {
    let name = (!name.is_empty()).then(|| name.to_string());
    DeclarationRecord::new(kind, start, end, name)
}

// ── Package clause ─────────────────────────────────────────────

#[test]
fn package_name_is_read_from_clause() {
    let root = parse_source("// Package demo does things.\npackage demo\n");
    assert_eq!(package_name(&root).as_deref(), Some("demo"));
}

#[test]
fn package_clause_is_not_a_declaration() {
    assert!(classify_source("package demo\n").is_empty());
}

#[test]
fn comments_between_declarations_are_skipped() {
    let source = "package demo

// Answer is documented.
const Answer = 42

/* block comment */
";
    assert_eq!(
        classify_source(source),
        vec![record(DeclKind::Constant, 4, 4, "")]
    );
}

// ── Non-declarations ───────────────────────────────────────────

#[test]
fn file_scope_statements_are_unclassified() {
    let source = "package demo\n\nx := 1\n\nfunc f() {}\n";
    assert_eq!(
        classify_source(source),
        vec![
            record(DeclKind::Unclassified, 3, 3, ""),
            record(DeclKind::Function, 5, 5, "f"),
        ]
    );
}

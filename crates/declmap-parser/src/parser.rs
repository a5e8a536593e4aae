//! ast-grep wrapper around the tree-sitter Go grammar.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Longest snippet of offending source quoted in a syntax error.
const NEAR_SNIPPET_LEN: usize = 24;

/// Node kinds Go allows at file scope after the package clause.
const TOP_LEVEL_DECLARATION_KINDS: &[&str] = &[
    "import_declaration",
    "const_declaration",
    "type_declaration",
    "var_declaration",
    "function_declaration",
    "method_declaration",
];

/// Whether a file path looks like Go source.
///
/// Only used for diagnostics: any path is still handed to the Go grammar.
#[must_use]
pub fn is_go_path(file_path: &str) -> bool {
    file_path
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext == "go")
}

/// Parse Go source code into an ast-grep tree.
///
/// Tree-sitter never rejects input; malformed regions show up as `ERROR`
/// nodes, see [`first_syntax_error`].
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}

/// A recovered parse error: 1-based line plus a short description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub line: u32,
    pub message: String,
}

/// Find the first `ERROR` or missing node of the tree in document order.
#[must_use]
pub fn first_syntax_error(tree: &AstTree) -> Option<SyntaxError> {
    let root = tree.root();
    root.children().find_map(|child| find_error(&child))
}

fn find_error<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<SyntaxError> {
    if node.is_missing() {
        return Some(SyntaxError {
            line: line_of(node),
            message: format!("missing `{}`", node.kind()),
        });
    }
    if node.is_error() {
        return Some(SyntaxError {
            line: line_of(node),
            message: format!("unexpected `{}`", snippet(&node.text())),
        });
    }
    node.children().find_map(|child| find_error(&child))
}

/// Check the file-scope layout the Go grammar proper enforces but
/// tree-sitter tolerates: the package clause comes first and only once,
/// only declarations follow it, and imports precede every other
/// declaration.
///
/// A file with no package clause at all passes; callers report that
/// separately.
#[must_use]
pub fn first_layout_error(tree: &AstTree) -> Option<SyntaxError> {
    let root = tree.root();
    let mut seen_package = false;
    let mut seen_non_import = false;

    for node in root
        .children()
        .filter(|n| n.is_named() && n.kind().as_ref() != "comment")
    {
        let kind = node.kind();
        let message = match kind.as_ref() {
            "package_clause" if seen_package => "expected declaration, found `package`".to_string(),
            "package_clause" => {
                seen_package = true;
                continue;
            }
            _ if !seen_package => {
                format!("expected `package`, found `{}`", snippet(&node.text()))
            }
            "import_declaration" if seen_non_import => {
                "imports must appear before other declarations".to_string()
            }
            k if TOP_LEVEL_DECLARATION_KINDS.contains(&k) => {
                seen_non_import |= k != "import_declaration";
                continue;
            }
            _ => format!(
                "non-declaration statement outside function body: `{}`",
                snippet(&node.text())
            ),
        };
        return Some(SyntaxError {
            line: line_of(&node),
            message,
        });
    }
    None
}

fn line_of<D: ast_grep_core::Doc>(node: &Node<D>) -> u32 {
    node.start_pos().line() as u32 + 1
}

fn snippet(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default().trim();
    first_line.chars().take(NEAR_SNIPPET_LEN).collect()
}

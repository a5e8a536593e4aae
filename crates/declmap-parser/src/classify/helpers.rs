use ast_grep_core::Node;

/// Identifier of a function or method declaration.
pub(super) fn callable_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.field("name").map(|n| n.text().to_string())
}

/// Name bound by the first spec of a `type` group.
///
/// Covers both definitions (`type_spec`) and aliases (`type_alias`); an empty
/// `type ()` group has no name.
pub(super) fn first_type_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    node.children()
        .find(|c| matches!(c.kind().as_ref(), "type_spec" | "type_alias"))?
        .field("name")
        .map(|n| n.text().to_string())
}

/// Receiver type name of a method declaration, with one pointer level removed.
///
/// Returns `None` unless the receiver list holds exactly one parameter and
/// its type (after stripping a single `*`) is a plain `type_identifier`.
/// Generic (`T[K]`), qualified, parenthesised and `**T` receivers all fail.
pub(super) fn receiver_type_name<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<String> {
    let receiver_list = node.field("receiver")?;
    let mut params = receiver_list.children().filter(|c| {
        matches!(
            c.kind().as_ref(),
            "parameter_declaration" | "variadic_parameter_declaration"
        )
    });
    let param = params.next()?;
    if params.next().is_some() || param.kind().as_ref() != "parameter_declaration" {
        return None;
    }

    let mut ty = param.field("type")?;
    if ty.kind().as_ref() == "pointer_type" {
        ty = pointee(&ty)?;
    }
    (ty.kind().as_ref() == "type_identifier").then(|| ty.text().to_string())
}

/// Operand of a `pointer_type` (the node after `*`).
fn pointee<'r, D: ast_grep_core::Doc>(pointer: &Node<'r, D>) -> Option<Node<'r, D>> {
    pointer
        .children()
        .find(|c| c.is_named() && c.kind().as_ref() != "comment")
}

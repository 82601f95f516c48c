// src/analysis/functions.rs
//! Function discovery over a parsed tree.

use tree_sitter::Node;

/// Sentinel name for functions without a declared identifier.
pub const ANONYMOUS: &str = "<anonymous>";

#[must_use]
pub fn is_function_kind(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration"
            | "generator_function_declaration"
            | "function"
            | "generator_function"
            | "arrow_function"
            | "method_definition"
    )
}

/// Declared name of a function-like node, or the anonymous sentinel.
#[must_use]
pub fn name_of(node: Node, source: &str) -> String {
    node.child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
        .unwrap_or(ANONYMOUS)
        .to_string()
}

/// Pre-order search for the first function-like declaration with the given
/// name (case-sensitive). First match wins when names repeat.
#[must_use]
pub fn find_by_name<'t>(node: Node<'t>, source: &str, name: &str) -> Option<Node<'t>> {
    if is_function_kind(node.kind()) {
        let found = node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(source.as_bytes()).ok())
            .is_some_and(|text| text == name);
        if found {
            return Some(node);
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_by_name(child, source, name) {
            return Some(found);
        }
    }
    None
}

/// All function-like nodes in pre-order traversal order.
#[must_use]
pub fn find_all(root: Node) -> Vec<Node> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    if is_function_kind(node.kind()) {
        out.push(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, out);
    }
}

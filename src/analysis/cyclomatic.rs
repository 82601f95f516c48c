// src/analysis/cyclomatic.rs
//! McCabe cyclomatic complexity.
//!
//! Counts decision points in the syntax tree. Each branch construct adds one
//! to the base complexity of 1 (a body with no branches still has one path).

use tree_sitter::Node;

/// Calculates McCabe cyclomatic complexity for a node and its descendants.
///
/// Result is always >= 1.
#[must_use]
pub fn calculate(node: Node, source: &str) -> usize {
    1 + count_decisions(node, source)
}

fn count_decisions(node: Node, source: &str) -> usize {
    let mut count = usize::from(is_decision_point(node, source));
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        count += count_decisions(child, source);
    }
    count
}

fn is_decision_point(node: Node, source: &str) -> bool {
    match node.kind() {
        // for_in_statement covers both for-in and for-of.
        "if_statement" | "ternary_expression" | "while_statement" | "do_statement"
        | "for_statement" | "for_in_statement" | "switch_case" | "catch_clause" => true,
        "binary_expression" => is_logical_op(node, source),
        _ => false,
    }
}

/// True when a binary expression's operator is short-circuiting (`&&`/`||`).
pub(crate) fn is_logical_op(node: Node, source: &str) -> bool {
    let Some(op) = node.child_by_field_name("operator") else {
        return false;
    };

    op.utf8_text(source.as_bytes())
        .is_ok_and(|text| text == "&&" || text == "||")
}

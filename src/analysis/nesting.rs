// src/analysis/nesting.rs
//! Maximum structural nesting depth.
//!
//! Control-flow constructs deepen nesting. Bare blocks (a `{ ... }` statement
//! that is not the body of a control construct, function, or clause) also
//! deepen nesting; blocks owned by a construct do not, so `if (x) { ... }`
//! counts one level, not two.

use tree_sitter::Node;

/// Calculates the maximum nesting depth of a node.
#[must_use]
pub fn calculate(node: Node) -> usize {
    walk_depth(node, 0)
}

fn walk_depth(node: Node, current: usize) -> usize {
    let mut max = current;
    let mut cursor = node.walk();

    for child in node.children(&mut cursor) {
        let next = if increments_depth(child) {
            current + 1
        } else {
            current
        };
        max = std::cmp::max(max, walk_depth(child, next));
    }
    max
}

fn increments_depth(node: Node) -> bool {
    match node.kind() {
        "if_statement" | "while_statement" | "do_statement" | "for_statement"
        | "for_in_statement" => true,
        "statement_block" => is_bare_block(node),
        _ => false,
    }
}

fn is_bare_block(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return true;
    };

    !matches!(
        parent.kind(),
        "if_statement"
            | "else_clause"
            | "while_statement"
            | "do_statement"
            | "for_statement"
            | "for_in_statement"
            | "switch_statement"
            | "try_statement"
            | "catch_clause"
            | "finally_clause"
            | "labeled_statement"
            | "function_declaration"
            | "generator_function_declaration"
            | "function"
            | "generator_function"
            | "arrow_function"
            | "method_definition"
    )
}

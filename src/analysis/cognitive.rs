// src/analysis/cognitive.rs
//! Cognitive complexity metric implementation.
//!
//! Nesting-weighted complexity in the spirit of the `SonarSource` metric:
//! structural nesting is penalized more than flat sequences of conditionals.
//!
//! Key Rules:
//! 1. Nesting constructs (if, while, do, for) add `1 + nesting`, then deepen
//!    the nesting level for their subtree.
//! 2. Catch clauses, ternaries, and `&&`/`||` add `1 + nesting` without
//!    deepening nesting.
//! 3. Everything else recurses without scoring.

use tree_sitter::Node;

use super::cyclomatic::is_logical_op;

pub struct CognitiveAnalyzer;

impl CognitiveAnalyzer {
    /// Calculates the cognitive complexity of a node.
    #[must_use]
    pub fn calculate(node: Node, source: &str) -> usize {
        let mut scorer = Scorer::new(source);
        scorer.visit(node, 0);
        scorer.score
    }
}

struct Scorer<'a> {
    source: &'a str,
    score: usize,
}

impl<'a> Scorer<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, score: 0 }
    }

    fn visit(&mut self, node: Node, nesting: usize) {
        let (increment, next_nesting) = self.assess_node(node, nesting);
        self.score += increment;

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, next_nesting);
        }
    }

    fn assess_node(&self, node: Node, nesting: usize) -> (usize, usize) {
        match node.kind() {
            "if_statement" | "while_statement" | "do_statement" | "for_statement"
            | "for_in_statement" => (1 + nesting, nesting + 1),
            "catch_clause" | "ternary_expression" => (1 + nesting, nesting),
            "binary_expression" if is_logical_op(node, self.source) => (1 + nesting, nesting),
            _ => (0, nesting),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Lang;
    use tree_sitter::Parser;

    fn parse(code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(Lang::JavaScript.grammar())
            .expect("Failed to set language");
        parser.parse(code, None).expect("Failed to parse code")
    }

    fn score(code: &str) -> usize {
        let tree = parse(code);
        CognitiveAnalyzer::calculate(tree.root_node(), code)
    }

    #[test]
    fn test_linear_flow() {
        assert_eq!(score("function f() { const a = 1; return a; }"), 0);
    }

    #[test]
    fn test_single_if() {
        assert_eq!(score("function f(x) { if (x) { return 1; } }"), 1);
    }

    #[test]
    fn test_nested_if_penalized() {
        // while (1) + nested if (1 + 1) = 3
        assert_eq!(score("while (a) { if (b) { f(); } }"), 3);
        // two flat ifs cost only 2
        assert_eq!(score("if (a) { f(); } if (b) { g(); }"), 2);
    }

    #[test]
    fn test_boolean_ops_score_without_deepening() {
        // Plain walk: the if adds 1 and deepens; the && in its condition
        // adds 1 + 1 but does not deepen further.
        assert_eq!(score("if (a && b) { f(); }"), 3);
        // At top level a logical operator costs exactly 1.
        assert_eq!(score("const v = a && b;"), 1);
    }

    #[test]
    fn test_catch_and_ternary_do_not_deepen() {
        // catch adds 1 but does not deepen, so the inner if adds 1 + 0
        assert_eq!(score("try { f(); } catch (e) { if (a) { g(); } }"), 2);
        assert_eq!(score("const v = a ? 1 : 2;"), 1);
    }

    #[test]
    fn test_deep_nesting_accumulates() {
        // for (1) + while (1+1) + if (1+2) = 6
        let code = "for (;;) { while (a) { if (b) { f(); } } }";
        assert_eq!(score(code), 6);
    }
}

// src/analysis/halstead.rs
//! Halstead operator/operand counts and derived measures.
//!
//! Operators are the operator tokens of binary, unary, and update
//! expressions. Operands are identifier references and literals, keyed by
//! their source text. Totals count every occurrence; the distinct sets
//! deduplicate within their own category only.

use std::collections::HashSet;
use tree_sitter::Node;

/// Raw Halstead counts for a subtree. Internal to the analyzer; callers
/// receive only the derived difficulty through `ComplexityMetrics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HalsteadCounts {
    pub distinct_operators: usize,
    pub distinct_operands: usize,
    pub total_operators: usize,
    pub total_operands: usize,
}

impl HalsteadCounts {
    /// Vocabulary: n = n1 + n2.
    #[must_use]
    pub fn vocabulary(&self) -> usize {
        self.distinct_operators + self.distinct_operands
    }

    /// Program length: N = N1 + N2.
    #[must_use]
    pub fn length(&self) -> usize {
        self.total_operators + self.total_operands
    }

    /// Volume: V = N * log2(n). Zero vocabulary yields 0 (guards log(0)).
    #[must_use]
    pub fn volume(&self) -> f64 {
        let vocabulary = self.vocabulary();
        if vocabulary == 0 {
            return 0.0;
        }
        self.length() as f64 * (vocabulary as f64).log2()
    }

    /// Difficulty: D = (n1 * N2) / (2 * n2). A body with no operands has no
    /// meaningful difficulty and yields 0.
    #[must_use]
    pub fn difficulty(&self) -> f64 {
        if self.distinct_operands == 0 {
            return 0.0;
        }
        (self.distinct_operators as f64 * self.total_operands as f64)
            / (2.0 * self.distinct_operands as f64)
    }
}

/// Tallies operators and operands over a subtree.
#[must_use]
pub fn count(node: Node, source: &str) -> HalsteadCounts {
    let mut tally = Tally::new(source);
    tally.visit(node);
    tally.into_counts()
}

struct Tally<'a> {
    source: &'a str,
    operators: HashSet<&'a str>,
    operands: HashSet<&'a str>,
    total_operators: usize,
    total_operands: usize,
}

impl<'a> Tally<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            operators: HashSet::new(),
            operands: HashSet::new(),
            total_operators: 0,
            total_operands: 0,
        }
    }

    fn visit(&mut self, node: Node) {
        match node.kind() {
            "binary_expression" | "unary_expression" | "update_expression" => {
                if let Some(op) = node.child_by_field_name("operator") {
                    self.record_operator(op);
                }
            }
            // Literals are leaves for counting purposes: template substitutions
            // and string internals are not tallied separately.
            "identifier" | "property_identifier" | "shorthand_property_identifier"
            | "number" | "string" | "template_string" | "regex" | "true" | "false"
            | "null" | "undefined" => {
                self.record_operand(node);
                return;
            }
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child);
        }
    }

    fn record_operator(&mut self, node: Node) {
        if let Ok(text) = node.utf8_text(self.source.as_bytes()) {
            self.operators.insert(text);
            self.total_operators += 1;
        }
    }

    fn record_operand(&mut self, node: Node) {
        if let Ok(text) = node.utf8_text(self.source.as_bytes()) {
            self.operands.insert(text);
            self.total_operands += 1;
        }
    }

    fn into_counts(self) -> HalsteadCounts {
        HalsteadCounts {
            distinct_operators: self.operators.len(),
            distinct_operands: self.operands.len(),
            total_operators: self.total_operators,
            total_operands: self.total_operands,
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

    fn counts(code: &str) -> HalsteadCounts {
        let tree = parse(code);
        count(tree.root_node(), code)
    }

    #[test]
    fn test_empty_source() {
        let c = counts("");
        assert_eq!(c, HalsteadCounts::default());
        assert!((c.volume() - 0.0).abs() < f64::EPSILON);
        assert!((c.difficulty() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_repeated_operand_dedupes_distinct_only() {
        // `a` appears twice: totals grow, distinct does not
        let c = counts("a + a;");
        assert_eq!(c.distinct_operands, 1);
        assert_eq!(c.total_operands, 2);
        assert_eq!(c.distinct_operators, 1);
        assert_eq!(c.total_operators, 1);
    }

    #[test]
    fn test_operators_and_literals() {
        let c = counts("x = 1 + 2;");
        // operator: + (assignment_expression's `=` is not a binary operator here)
        assert!(c.distinct_operators >= 1);
        // operands: x, 1, 2
        assert_eq!(c.distinct_operands, 3);
        assert_eq!(c.total_operands, 3);
    }

    #[test]
    fn test_unary_and_update() {
        let c = counts("!a; b++;");
        assert_eq!(c.distinct_operators, 2);
        assert_eq!(c.total_operators, 2);
    }

    #[test]
    fn test_volume_formula() {
        let c = HalsteadCounts {
            distinct_operators: 2,
            distinct_operands: 2,
            total_operators: 3,
            total_operands: 5,
        };
        // V = 8 * log2(4) = 16
        assert!((c.volume() - 16.0).abs() < 1e-9);
        // D = (2 * 5) / (2 * 2) = 2.5
        assert!((c.difficulty() - 2.5).abs() < 1e-9);
    }
}

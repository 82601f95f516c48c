// src/analysis/mod.rs
//! Complexity analysis over parsed source trees.
//!
//! `ComplexityAnalyzer` is the public contract: parse once, then run the
//! per-metric calculators over the tree. Stateless and call-and-return; two
//! concurrent calls share nothing.

pub mod cognitive;
pub mod cyclomatic;
pub mod dependencies;
pub mod functions;
pub mod halstead;
pub mod maintainability;
pub mod nesting;

use crate::error::{GnarlyError, Result};
use crate::lang::Lang;
use crate::types::{ComplexityMetrics, FunctionAnalysis};
use tree_sitter::{Node, Parser, Tree};

pub struct ComplexityAnalyzer {
    lang: Lang,
}

impl ComplexityAnalyzer {
    #[must_use]
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    /// Whole-file metrics for `source`. `file` identifies the input in parse
    /// errors only.
    ///
    /// # Errors
    ///
    /// Returns `GnarlyError::Parse` when the source is not syntactically
    /// valid. No partial results are produced.
    pub fn analyze_code(&self, source: &str, file: &str) -> Result<ComplexityMetrics> {
        let tree = self.parse(source, file)?;
        let lines = maintainability::line_count(source);
        Ok(Self::metrics_for(tree.root_node(), source, lines))
    }

    /// Whole-tree metrics for a raw fragment without file metadata.
    ///
    /// # Errors
    ///
    /// Returns `GnarlyError::Parse` when the source is not syntactically valid.
    pub fn analyze_metrics(&self, source: &str) -> Result<ComplexityMetrics> {
        self.analyze_code(source, "<fragment>")
    }

    /// Analyzes the first function-like declaration named `name` (exact,
    /// case-sensitive, pre-order). `Ok(None)` when no such function exists;
    /// this is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns `GnarlyError::Parse` when the source is not syntactically valid.
    pub fn analyze_function(&self, source: &str, name: &str) -> Result<Option<FunctionAnalysis>> {
        let tree = self.parse(source, "<fragment>")?;
        let Some(node) = functions::find_by_name(tree.root_node(), source, name) else {
            return Ok(None);
        };
        Ok(Some(Self::function_analysis(node, source)))
    }

    /// Analyzes every function-like declaration in the source, in traversal
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `GnarlyError::Parse` when the source is not syntactically valid.
    pub fn analyze_functions(&self, source: &str) -> Result<Vec<FunctionAnalysis>> {
        let tree = self.parse(source, "<fragment>")?;
        Ok(functions::find_all(tree.root_node())
            .into_iter()
            .map(|node| Self::function_analysis(node, source))
            .collect())
    }

    fn parse(&self, source: &str, file: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(self.lang.grammar())
            .map_err(|e| GnarlyError::Other(e.to_string()))?;

        let Some(tree) = parser.parse(source, None) else {
            return Err(GnarlyError::Parse { file: file.into() });
        };
        if tree.root_node().has_error() {
            return Err(GnarlyError::Parse { file: file.into() });
        }
        Ok(tree)
    }

    fn metrics_for(node: Node, source: &str, line_count: usize) -> ComplexityMetrics {
        let counts = halstead::count(node, source);
        let cyclomatic = cyclomatic::calculate(node, source);

        ComplexityMetrics {
            cyclomatic_complexity: cyclomatic,
            cognitive_complexity: cognitive::CognitiveAnalyzer::calculate(node, source),
            halstead_difficulty: counts.difficulty(),
            maintainability_index: maintainability::index(counts.volume(), cyclomatic, line_count),
            nesting_depth: nesting::calculate(node),
            line_count,
        }
    }

    fn function_analysis(node: Node, source: &str) -> FunctionAnalysis {
        // Per-function line count spans the function's own text, not the file.
        let lines = node.end_position().row - node.start_position().row + 1;

        FunctionAnalysis {
            name: functions::name_of(node, source),
            row: node.start_position().row + 1,
            parameters: dependencies::parameters(node, source),
            return_type: dependencies::return_type(node, source),
            dependencies: dependencies::dependencies(node, source),
            metrics: Self::metrics_for(node, source, lines),
        }
    }
}

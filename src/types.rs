// src/types.rs
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Metrics for one analyzed node (whole file or a single function).
///
/// Constructed fresh per analysis call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityMetrics {
    pub cyclomatic_complexity: usize,
    pub cognitive_complexity: usize,
    pub halstead_difficulty: f64,
    /// Composite score clamped to [0, 100].
    pub maintainability_index: f64,
    pub nesting_depth: usize,
    pub line_count: usize,
}

/// Per-function metrics plus signature and dependency information.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionAnalysis {
    /// Declared name, or `"<anonymous>"` for nameless functions.
    pub name: String,
    /// 1-based start line of the declaration.
    pub row: usize,
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// Textual return-type annotation, or `"any"` when absent.
    pub return_type: String,
    /// Identifiers referenced in the body, excluding the function's own
    /// parameters. No scope resolution: locals and loop counters are
    /// over-reported, member-access property names are not counted.
    pub dependencies: BTreeSet<String>,
    pub metrics: ComplexityMetrics,
}

/// Grade buckets over a complexity score. Thresholds are fixed (10/20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplexityGrade {
    Low,
    Medium,
    High,
}

impl ComplexityGrade {
    #[must_use]
    pub fn from_score(score: usize) -> Self {
        match score {
            0..=10 => Self::Low,
            11..=20 => Self::Medium,
            _ => Self::High,
        }
    }
}

impl std::fmt::Display for ComplexityGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A single threshold breach detected during a scan.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub row: usize,
    pub message: String,
    pub rule: &'static str,
}

impl Violation {
    #[must_use]
    pub fn new(row: usize, message: String, rule: &'static str) -> Self {
        Self { row, message, rule }
    }
}

/// Analysis results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub metrics: Option<ComplexityMetrics>,
    pub grade: Option<ComplexityGrade>,
    pub functions: Vec<FunctionAnalysis>,
    pub violations: Vec<Violation>,
}

impl FileReport {
    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Aggregated results from scanning multiple files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_functions: usize,
    pub total_violations: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Returns true if any violations were found.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        self.total_violations > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(ComplexityGrade::from_score(1), ComplexityGrade::Low);
        assert_eq!(ComplexityGrade::from_score(10), ComplexityGrade::Low);
        assert_eq!(ComplexityGrade::from_score(11), ComplexityGrade::Medium);
        assert_eq!(ComplexityGrade::from_score(20), ComplexityGrade::Medium);
        assert_eq!(ComplexityGrade::from_score(21), ComplexityGrade::High);
    }
}

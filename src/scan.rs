// src/scan.rs
//! Directory scanning: enumerate source files, analyze them in parallel,
//! and collect threshold violations.

use crate::analysis::ComplexityAnalyzer;
use crate::config::{Config, Thresholds, PRUNE_DIRS};
use crate::lang::Lang;
use crate::types::{ComplexityGrade, FileReport, FunctionAnalysis, ScanReport, Violation};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct ScanEngine {
    config: Config,
}

impl ScanEngine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scans the target paths and produces an aggregated report. Files that
    /// cannot be read or parsed surface as reports with a single violation;
    /// everything else is independent per-file work.
    #[must_use]
    pub fn scan(&self, targets: &[PathBuf]) -> ScanReport {
        let start = std::time::Instant::now();
        let files = self.enumerate(targets);

        let results: Vec<FileReport> = files
            .par_iter()
            .map(|path| self.analyze_file(path))
            .collect();

        let total_functions = results.iter().map(|r| r.functions.len()).sum();
        let total_violations = results.iter().map(|r| r.violations.len()).sum();

        ScanReport {
            files: results,
            total_functions,
            total_violations,
            duration_ms: start.elapsed().as_millis(),
        }
    }

    fn enumerate(&self, targets: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for target in targets {
            if target.is_file() {
                files.push(target.clone());
                continue;
            }
            let walker = WalkDir::new(target).into_iter().filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                !(e.file_type().is_dir() && PRUNE_DIRS.contains(&name.as_ref()))
            });
            for entry in walker.flatten() {
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.into_path();
                if self.is_source_file(&path) && !self.config.is_excluded(&path) {
                    files.push(path);
                }
            }
        }
        files.sort();
        files
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Lang::from_ext)
            .is_some()
    }

    fn analyze_file(&self, path: &Path) -> FileReport {
        let mut report = FileReport {
            path: path.to_path_buf(),
            metrics: None,
            grade: None,
            functions: Vec::new(),
            violations: Vec::new(),
        };

        let Ok(source) = std::fs::read_to_string(path) else {
            return report;
        };
        let Some(lang) = path
            .extension()
            .and_then(|s| s.to_str())
            .and_then(Lang::from_ext)
        else {
            return report;
        };

        let analyzer = ComplexityAnalyzer::new(lang);
        let file_name = path.to_string_lossy();

        let Ok(metrics) = analyzer.analyze_code(&source, &file_name) else {
            report.violations.push(Violation::new(
                1,
                "File does not parse; metrics skipped".to_string(),
                "PARSE",
            ));
            return report;
        };

        report.grade = Some(ComplexityGrade::from_score(metrics.cyclomatic_complexity));
        report.metrics = Some(metrics);

        // The file parsed above, so per-function analysis cannot fail.
        report.functions = analyzer.analyze_functions(&source).unwrap_or_default();
        for function in &report.functions {
            check_function(function, &self.config.thresholds, &mut report.violations);
        }

        report
    }
}

fn check_function(function: &FunctionAnalysis, limits: &Thresholds, out: &mut Vec<Violation>) {
    let name = &function.name;
    let metrics = &function.metrics;

    if metrics.cyclomatic_complexity > limits.max_cyclomatic_complexity {
        out.push(Violation::new(
            function.row,
            format!(
                "Function '{name}' has cyclomatic complexity {} (Max: {})",
                metrics.cyclomatic_complexity, limits.max_cyclomatic_complexity
            ),
            "COMPLEXITY",
        ));
    }

    if metrics.cognitive_complexity > limits.max_cognitive_complexity {
        out.push(Violation::new(
            function.row,
            format!(
                "Function '{name}' has cognitive complexity {} (Max: {})",
                metrics.cognitive_complexity, limits.max_cognitive_complexity
            ),
            "COGNITIVE",
        ));
    }

    if metrics.maintainability_index < limits.min_maintainability_index {
        out.push(Violation::new(
            function.row,
            format!(
                "Function '{name}' has maintainability index {:.1} (Min: {:.1})",
                metrics.maintainability_index, limits.min_maintainability_index
            ),
            "MAINTAINABILITY",
        ));
    }
}

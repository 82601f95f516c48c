// src/reporting.rs
//! Console output formatting for analysis results.

use crate::error::{GnarlyError, Result};
use crate::types::{ComplexityGrade, ComplexityMetrics, FileReport, FunctionAnalysis, ScanReport};
use colored::Colorize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders a scan report in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_scan(report: &ScanReport, format: OutputFormat, verbose: bool) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Text => Ok(render_scan_text(report, verbose)),
    }
}

fn render_scan_text(report: &ScanReport, verbose: bool) -> String {
    let mut out = String::new();

    for file in &report.files {
        render_file(&mut out, file, verbose);
    }

    let violations = if report.total_violations == 0 {
        "0 violations".green().to_string()
    } else {
        format!("{} violations", report.total_violations)
            .red()
            .to_string()
    };
    let _ = writeln!(
        out,
        "\n{} files, {} functions, {violations} ({} ms)",
        report.files.len(),
        report.total_functions,
        report.duration_ms
    );
    out
}

fn render_file(out: &mut String, file: &FileReport, verbose: bool) {
    let path = file.path.display();
    match (&file.metrics, file.grade) {
        (Some(metrics), Some(grade)) => {
            let _ = writeln!(
                out,
                "{} {}  cyclo {} cognitive {} depth {} MI {:.1}",
                grade_tag(grade),
                path.to_string().bold(),
                metrics.cyclomatic_complexity,
                metrics.cognitive_complexity,
                metrics.nesting_depth,
                metrics.maintainability_index
            );
        }
        _ => {
            let _ = writeln!(out, "{} {}", "[ -- ]".dimmed(), path);
        }
    }

    if verbose {
        for function in &file.functions {
            render_function_line(out, function);
        }
    }

    for violation in &file.violations {
        let _ = writeln!(
            out,
            "  {} L{}: {}",
            violation.rule.red().bold(),
            violation.row,
            violation.message
        );
    }
}

fn render_function_line(out: &mut String, function: &FunctionAnalysis) {
    let metrics = &function.metrics;
    let _ = writeln!(
        out,
        "    {:<30} L{:<5} cyclo {:<3} cognitive {:<3} MI {:.1}",
        function.name,
        function.row,
        metrics.cyclomatic_complexity,
        metrics.cognitive_complexity,
        metrics.maintainability_index
    );
}

fn grade_tag(grade: ComplexityGrade) -> String {
    match grade {
        ComplexityGrade::Low => "[ ok ]".green().to_string(),
        ComplexityGrade::Medium => "[ !! ]".yellow().to_string(),
        ComplexityGrade::High => "[HIGH]".red().bold().to_string(),
    }
}

/// Renders whole-file metrics for the `file` subcommand.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_metrics(metrics: &ComplexityMetrics, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(metrics),
        OutputFormat::Text => {
            let grade = ComplexityGrade::from_score(metrics.cyclomatic_complexity);
            let mut out = String::new();
            let _ = writeln!(out, "cyclomatic complexity  {}", metrics.cyclomatic_complexity);
            let _ = writeln!(out, "cognitive complexity   {}", metrics.cognitive_complexity);
            let _ = writeln!(out, "halstead difficulty    {:.2}", metrics.halstead_difficulty);
            let _ = writeln!(out, "maintainability index  {:.1}", metrics.maintainability_index);
            let _ = writeln!(out, "nesting depth          {}", metrics.nesting_depth);
            let _ = writeln!(out, "lines                  {}", metrics.line_count);
            let _ = writeln!(out, "grade                  {}", grade_tag(grade));
            Ok(out)
        }
    }
}

/// Renders a single function analysis for the `fn` subcommand.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_function(analysis: &FunctionAnalysis, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(analysis),
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{} ({}) -> {}",
                analysis.name.bold(),
                analysis.parameters.join(", "),
                analysis.return_type
            );
            if !analysis.dependencies.is_empty() {
                let deps: Vec<&str> = analysis.dependencies.iter().map(String::as_str).collect();
                let _ = writeln!(out, "depends on: {}", deps.join(", "));
            }
            out.push_str(&render_metrics(&analysis.metrics, OutputFormat::Text)?);
            Ok(out)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| GnarlyError::Other(e.to_string()))
}

// src/analysis/maintainability.rs
//! SEI maintainability index.
//!
//! `MI = (171 - 5.2*ln(V) - 0.23*G - 16.2*ln(L)) * 100 / 171`, clamped to
//! [0, 100]. V is the Halstead volume, G the cyclomatic complexity, L the
//! line count. V and L are clamped to a minimum of 1 before the logarithm,
//! so empty input contributes ln(1) = 0 instead of an undefined term.

/// Computes the maintainability index from its three inputs.
#[must_use]
pub fn index(volume: f64, cyclomatic: usize, line_count: usize) -> f64 {
    let v = volume.max(1.0);
    let l = line_count.max(1) as f64;

    let raw = 171.0 - 5.2 * v.ln() - 0.23 * cyclomatic as f64 - 16.2 * l.ln();
    (raw * 100.0 / 171.0).clamp(0.0, 100.0)
}

/// Number of newline-delimited segments in a source text, minimum 1.
#[must_use]
pub fn line_count(source: &str) -> usize {
    source.split('\n').count().max(1)
}

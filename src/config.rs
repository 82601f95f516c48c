// src/config.rs
//! Scan configuration: thresholds and path exclusions, loaded from
//! `gnarly.toml` when present.

use crate::error::{GnarlyError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Directories never descended into during a scan.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "out",
    "coverage",
    ".cache",
    ".next",
    "vendor",
    "third_party",
];

/// Limits that turn metrics into violations. Grade buckets (10/20) are fixed
/// in the library; these only drive CLI reporting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub max_cyclomatic_complexity: usize,
    pub max_cognitive_complexity: usize,
    pub min_maintainability_index: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_cyclomatic_complexity: 10,
            max_cognitive_complexity: 15,
            min_maintainability_index: 20.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub thresholds: Thresholds,
    pub exclude_patterns: Vec<Regex>,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            thresholds: Thresholds::default(),
            exclude_patterns: Vec::new(),
            verbose: false,
        }
    }

    /// Loads `gnarly.toml` from `root`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `GnarlyError::Config` for unparsable config, `Io` for an
    /// unreadable file, `Regex` for an invalid exclude pattern.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join("gnarly.toml");
        if !path.exists() {
            return Ok(Self::new());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| GnarlyError::Io {
            source,
            path: path.clone(),
        })?;
        let raw: RawConfig =
            toml::from_str(&text).map_err(|e| GnarlyError::Config(e.to_string()))?;

        let mut exclude_patterns = Vec::new();
        for pattern in &raw.scan.exclude {
            exclude_patterns.push(Regex::new(pattern)?);
        }

        Ok(Self {
            thresholds: raw.thresholds,
            exclude_patterns,
            verbose: false,
        })
    }

    /// True when a path matches any configured exclude pattern.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude_patterns.iter().any(|p| p.is_match(&path_str))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    thresholds: Thresholds,
    scan: RawScan,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawScan {
    exclude: Vec<String>,
}

// tests/scan.rs
use gnarly_core::config::Config;
use gnarly_core::scan::ScanEngine;
use gnarly_core::types::ScanReport;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let mut file = File::create(path).unwrap();
    write!(file, "{content}").unwrap();
}

fn scan_dir(dir: &Path, config: Config) -> ScanReport {
    ScanEngine::new(config).scan(&[dir.to_path_buf()])
}

#[test]
fn test_scan_picks_up_source_files_only() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.ts", "function f() { return 1; }");
    write_file(dir.path(), "b.js", "const x = 1;");
    write_file(dir.path(), "notes.md", "# not code");

    let report = scan_dir(dir.path(), Config::default());
    assert_eq!(report.files.len(), 2);
    assert!(report.files.iter().all(|f| f.metrics.is_some()));
    assert_eq!(report.total_functions, 1);
}

#[test]
fn test_scan_prunes_node_modules() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.ts", "const x = 1;");
    write_file(dir.path(), "node_modules/dep/index.js", "const y = 2;");

    let report = scan_dir(dir.path(), Config::default());
    assert_eq!(report.files.len(), 1);
}

#[test]
fn test_threshold_violations_reported() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "hot.ts",
        "function hot(x) { if (x) { f(); } if (!x) { g(); } }",
    );

    let mut config = Config::default();
    config.thresholds.max_cyclomatic_complexity = 1;

    let report = scan_dir(dir.path(), config);
    assert!(report.has_violations());
    let violations = &report.files[0].violations;
    assert!(violations.iter().any(|v| v.rule == "COMPLEXITY"));
    assert!(violations[0].message.contains("hot"));
}

#[test]
fn test_clean_scan_has_no_violations() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "calm.ts", "function calm() { return 1; }");

    let report = scan_dir(dir.path(), Config::default());
    assert!(!report.has_violations());
    assert!(report.files[0].is_clean());
}

#[test]
fn test_unparsable_file_reports_parse_violation() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "broken.ts", "function f( {");

    let report = scan_dir(dir.path(), Config::default());
    assert_eq!(report.files.len(), 1);
    assert!(report.files[0].metrics.is_none());
    assert!(report.files[0].violations.iter().any(|v| v.rule == "PARSE"));
}

#[test]
fn test_config_load_defaults_when_absent() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.thresholds.max_cyclomatic_complexity, 10);
    assert!(config.exclude_patterns.is_empty());
}

#[test]
fn test_config_exclude_patterns_apply() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a.ts", "const x = 1;");
    write_file(dir.path(), "a.spec.ts", "const y = 2;");
    write_file(
        dir.path(),
        "gnarly.toml",
        "[scan]\nexclude = [\"\\\\.spec\\\\.ts$\"]\n",
    );

    let config = Config::load(dir.path()).unwrap();
    let report = scan_dir(dir.path(), config);
    assert_eq!(report.files.len(), 1);
    assert!(report.files[0].path.ends_with("a.ts"));
}

#[test]
fn test_config_threshold_override() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "gnarly.toml",
        "[thresholds]\nmax_cognitive_complexity = 3\n",
    );

    let config = Config::load(dir.path()).unwrap();
    assert_eq!(config.thresholds.max_cognitive_complexity, 3);
    // untouched keys keep their defaults
    assert_eq!(config.thresholds.max_cyclomatic_complexity, 10);
}

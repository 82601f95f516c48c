// src/bin/gnarly.rs
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;

use gnarly_core::analysis::ComplexityAnalyzer;
use gnarly_core::config::Config;
use gnarly_core::lang::Lang;
use gnarly_core::reporting::{self, OutputFormat};
use gnarly_core::scan::ScanEngine;

#[derive(Parser)]
#[command(name = "gnarly", version, about = "Complexity metrics for TypeScript/JavaScript")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan files or directories and report per-file metrics and violations
    Scan {
        /// Files or directories to scan
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Show per-function metrics for every file
        #[arg(long, short)]
        verbose: bool,
    },
    /// Report whole-file metrics for a single source file
    File {
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Analyze one named function in a source file
    Fn {
        file: PathBuf,
        name: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            paths,
            format,
            verbose,
        } => run_scan(&paths, format, verbose),
        Commands::File { file, format } => run_file(&file, format),
        Commands::Fn { file, name, format } => run_function(&file, &name, format),
    }
}

fn run_scan(paths: &[PathBuf], format: OutputFormat, verbose: bool) -> Result<()> {
    let config = Config::load(Path::new("."))?;
    let engine = ScanEngine::new(config);
    let report = engine.scan(paths);

    print!("{}", reporting::render_scan(&report, format, verbose)?);

    if report.has_violations() {
        process::exit(1);
    }
    Ok(())
}

fn run_file(file: &Path, format: OutputFormat) -> Result<()> {
    let (analyzer, source) = load(file)?;
    let metrics = analyzer.analyze_code(&source, &file.to_string_lossy())?;
    print!("{}", reporting::render_metrics(&metrics, format)?);
    Ok(())
}

fn run_function(file: &Path, name: &str, format: OutputFormat) -> Result<()> {
    let (analyzer, source) = load(file)?;
    match analyzer.analyze_function(&source, name)? {
        Some(analysis) => print!("{}", reporting::render_function(&analysis, format)?),
        None => println!("function '{name}' not found in {}", file.display()),
    }
    Ok(())
}

fn load(file: &Path) -> Result<(ComplexityAnalyzer, String)> {
    let ext = file.extension().and_then(|s| s.to_str()).unwrap_or("");
    let Some(lang) = Lang::from_ext(ext) else {
        bail!("unsupported file type: {}", file.display());
    };
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    Ok((ComplexityAnalyzer::new(lang), source))
}

//! `schema-check` - Syntax checker for SpatialOS schema files.
//!
//! Parses schema files with the error-tolerant parser and reports every
//! syntax error, or dumps the tree and highlight ranges of a single file.

mod cli;
mod config;
mod files;
mod report;
mod style;

use anyhow::Context;
use clap::Parser;
use schema_syntax::highlight::highlight;
use schema_syntax::{parse_with_options, ParseOptions};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, OutputFormat};
use config::CheckConfig;
use report::{FileDiagnostic, LineIndex};

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{}", style::error(&format!("Error: {err:#}")));
            std::process::exit(2);
        }
    }
}

/// Runs the CLI; returns `false` when syntax errors were reported.
fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let config = CheckConfig::load(&cwd, cli.config.as_deref())?;
    if let Some(path) = &config.config_path {
        info!("Using config {}", path.display());
    }

    match cli.command {
        Command::Check { paths, format } => check(&config, &paths, format),
        Command::Tree { path } => {
            let (source, parse) = parse_file(&path, config.parser)?;
            print!("{}", parse.debug_tree());
            let diagnostics = diagnostics_for(&path, &source, &parse);
            print!("{}", report::render_text(&diagnostics, style::error));
            Ok(diagnostics.is_empty())
        }
        Command::Highlight { path } => {
            let (source, parse) = parse_file(&path, config.parser)?;
            print!("{}", report::render_highlights(&source, &highlight(&parse)));
            Ok(true)
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check(config: &CheckConfig, paths: &[String], format: OutputFormat) -> anyhow::Result<bool> {
    let patterns = if paths.is_empty() {
        config.include.as_slice()
    } else {
        paths
    };
    let files = files::collect_files(&config.root, patterns)?;

    let mut diagnostics = Vec::new();
    for path in &files {
        let (source, parse) = parse_file(path, config.parser)?;
        diagnostics.extend(diagnostics_for(path, &source, &parse));
    }
    debug!(
        files = files.len(),
        diagnostics = diagnostics.len(),
        "check finished"
    );

    match format {
        OutputFormat::Text => {
            print!("{}", report::render_text(&diagnostics, style::error));
            if diagnostics.is_empty() {
                eprintln!(
                    "{}",
                    style::success(&format!("Checked {} file(s), no errors", files.len()))
                );
            }
        }
        OutputFormat::Json => println!("{}", report::render_json(&diagnostics)?),
    }
    Ok(diagnostics.is_empty())
}

fn parse_file(path: &Path, options: ParseOptions) -> anyhow::Result<(String, schema_syntax::Parse)> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parse = parse_with_options(&source, options);
    debug!(path = %path.display(), errors = parse.errors().len(), "parsed file");
    Ok((source, parse))
}

fn diagnostics_for(path: &Path, source: &str, parse: &schema_syntax::Parse) -> Vec<FileDiagnostic> {
    let index = LineIndex::new(source);
    parse
        .errors()
        .iter()
        .map(|error| FileDiagnostic::new(path, &index, error))
        .collect()
}

//! CLI definitions for schema-check.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "schema-check",
    version,
    about = "Check SpatialOS schema files for syntax errors",
    after_help = "Examples:\n  schema-check check                    # files from schema-check.toml\n  schema-check check schema/            # every .schema file under a folder\n  schema-check check 'schema/**/*.schema' --format json\n  schema-check tree schema/player.schema"
)]
pub struct Cli {
    /// Config file (defaults to schema-check.toml in the working directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Log filter, e.g. `debug` or `schema_syntax=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse files and report syntax errors.
    Check {
        /// Files, folders or glob patterns (defaults to `[files].include`).
        paths: Vec<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the syntax tree of one file.
    Tree {
        /// Schema file.
        path: PathBuf,
    },
    /// Print highlight ranges of one file.
    Highlight {
        /// Schema file.
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `path:line:col: error: message` lines.
    Text,
    /// A single JSON array.
    Json,
}

//! Project configuration for schema-check.

use anyhow::Context;
use schema_syntax::ParseOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub(crate) const CONFIG_FILES: &[&str] = &["schema-check.toml", ".schema-check.toml"];

const DEFAULT_INCLUDE: &str = "**/*.schema";

/// Configuration loaded from `schema-check.toml`.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Directory that include patterns are relative to.
    pub root: PathBuf,
    /// Config file path (if found).
    pub config_path: Option<PathBuf>,
    /// Parser behaviour switches.
    pub parser: ParseOptions,
    /// Glob patterns checked when no paths are given.
    pub include: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    parser: ParserSection,
    files: FilesSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParserSection {
    legacy_string_strip: bool,
    report_invalid_numbers: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FilesSection {
    include: Vec<String>,
}

impl From<ParserSection> for ParseOptions {
    fn from(section: ParserSection) -> Self {
        Self {
            legacy_string_strip: section.legacy_string_strip,
            report_invalid_numbers: section.report_invalid_numbers,
        }
    }
}

impl CheckConfig {
    /// Load configuration, from `explicit` if given, otherwise from the first
    /// config file found in `root`.
    pub fn load(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let root = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(root);
            return Ok(Self::from_contents(root, Some(path.to_path_buf()), &contents));
        }

        let Some(path) = find_config_file(root) else {
            return Ok(Self::base(root, None));
        };
        let Ok(contents) = std::fs::read_to_string(&path) else {
            warn!("Failed to read schema-check config at {}", path.display());
            return Ok(Self::base(root, Some(path)));
        };
        Ok(Self::from_contents(root, Some(path), &contents))
    }

    pub fn from_contents(root: &Path, config_path: Option<PathBuf>, contents: &str) -> Self {
        let mut config = Self::base(root, config_path);
        let parsed: ConfigFile = match toml::from_str(contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                match &config.config_path {
                    Some(path) => warn!(
                        "Failed to parse schema-check config at {}: {err}",
                        path.display()
                    ),
                    None => warn!("Failed to parse schema-check config: {err}"),
                }
                return config;
            }
        };

        config.parser = parsed.parser.into();
        if !parsed.files.include.is_empty() {
            config.include = parsed.files.include;
        }
        config
    }

    fn base(root: &Path, config_path: Option<PathBuf>) -> Self {
        Self {
            root: root.to_path_buf(),
            config_path,
            parser: ParseOptions::default(),
            include: vec![DEFAULT_INCLUDE.to_string()],
        }
    }
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

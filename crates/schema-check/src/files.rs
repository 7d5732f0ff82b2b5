//! Resolution of command-line paths and include patterns to schema files.

use anyhow::Context;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA_EXTENSION: &str = "schema";

/// Expands files, folders and glob patterns into a sorted, de-duplicated
/// list of files. Relative patterns are resolved against `root`.
pub fn collect_files(root: &Path, patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let path = resolve(root, pattern);
        if is_glob(pattern) {
            let expanded = glob::glob(&path.to_string_lossy())
                .with_context(|| format!("invalid pattern {pattern}"))?;
            for entry in expanded {
                let entry = entry?;
                if entry.is_file() {
                    files.insert(entry);
                }
            }
        } else if path.is_dir() {
            let nested = format!("{}/**/*.{SCHEMA_EXTENSION}", path.display());
            for entry in glob::glob(&nested)? {
                files.insert(entry?);
            }
        } else if path.is_file() {
            files.insert(path);
        } else {
            anyhow::bail!("no such file or directory: {pattern}");
        }
    }
    debug!(count = files.len(), "collected schema files");
    Ok(files.into_iter().collect())
}

fn resolve(root: &Path, pattern: &str) -> PathBuf {
    let path = Path::new(pattern);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

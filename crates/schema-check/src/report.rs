//! Diagnostic rendering for schema-check.

use schema_syntax::highlight::HighlightRange;
use schema_syntax::ParseError;
use serde::Serialize;
use std::path::Path;
use text_size::TextSize;

/// Maps byte offsets to 1-based line and column numbers.
pub struct LineIndex<'src> {
    text: &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(text: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(index, _)| index + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Line and column of `offset`; columns count characters.
    pub fn line_col(&self, offset: TextSize) -> (usize, usize) {
        let offset = usize::from(offset).min(self.text.len());
        let line = self
            .line_starts
            .partition_point(|start| *start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line];
        let column = self
            .text
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }
}

/// One syntax error located in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiagnostic {
    pub path: String,
    pub line: usize,
    pub column: usize,
    pub start: u32,
    pub end: u32,
    pub message: String,
}

impl FileDiagnostic {
    pub fn new(path: &Path, index: &LineIndex<'_>, error: &ParseError) -> Self {
        let (line, column) = index.line_col(error.range.start());
        Self {
            path: path.display().to_string(),
            line,
            column,
            start: error.range.start().into(),
            end: error.range.end().into(),
            message: error.message.clone(),
        }
    }
}

/// Renders diagnostics as `path:line:col: error: message` lines.
pub fn render_text(diagnostics: &[FileDiagnostic], label: impl Fn(&str) -> String) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| {
            format!(
                "{}:{}:{}: {} {}\n",
                diagnostic.path,
                diagnostic.line,
                diagnostic.column,
                label("error:"),
                diagnostic.message
            )
        })
        .collect()
}

pub fn render_json(diagnostics: &[FileDiagnostic]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(diagnostics)?)
}

/// Renders highlight ranges as `line:col kind "text"` lines.
pub fn render_highlights(source: &str, ranges: &[HighlightRange]) -> String {
    let index = LineIndex::new(source);
    ranges
        .iter()
        .map(|highlight| {
            let (line, column) = index.line_col(highlight.range.start());
            let range = usize::from(highlight.range.start())..usize::from(highlight.range.end());
            let text = source.get(range).unwrap_or_default();
            format!("{line}:{column} {:?} {text:?}\n", highlight.category)
        })
        .collect()
}

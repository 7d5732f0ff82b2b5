//! Parser for the schema language.
//!
//! This module provides a hand-written recursive descent parser that builds
//! a lossless concrete syntax tree (CST) using the `rowan` library.
//!
//! # Design
//!
//! The parser is designed for IDE use:
//!
//! - **Error-tolerant**: Malformed constructs become `Error` nodes and parsing
//!   resumes at a statement, brace or top-level boundary
//! - **Lossless**: Preserves all source text including whitespace and comments
//! - **Partial trees**: A construct that fails halfway keeps the children it
//!   already parsed
//!
//! # Architecture
//!
//! The parser uses a three-phase approach:
//!
//! 1. **Lexing**: Tokenize source text (see `lexer` module)
//! 2. **Parsing**: Build a flat stream of events (start node, add token, finish node)
//! 3. **Tree Building**: Convert events into a `rowan` green tree

#![allow(clippy::module_inception)]

pub mod event;
mod grammar;
mod parser;
mod sink;
mod source;

pub use parser::{parse, parse_with_options};
pub(crate) use parser::{PResult, Parser, Recovered, Recovery};

use std::fmt::Write as _;

use rustc_hash::FxHashMap;
use text_size::TextRange;

use crate::highlight::{HighlightSegment, TaggedName};
use crate::syntax::SyntaxNode;

/// Knobs for behaviour that existing tooling may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Strip import filenames the historical way, dropping the closing quote
    /// and one more trailing character. Only affects diagnostic text.
    pub legacy_string_strip: bool,
    /// Report integer literals that do not fit an `i32` instead of silently
    /// treating them as zero.
    pub report_invalid_numbers: bool,
}

/// Result of parsing source text.
#[derive(Debug)]
pub struct Parse {
    /// The root syntax node.
    green_node: rowan::GreenNode,
    /// Parsing errors.
    errors: Vec<ParseError>,
    /// Dotted names tagged with highlight segments, in source order.
    tagged_names: Vec<TaggedName>,
    tagged_by_range: FxHashMap<TextRange, usize>,
}

impl Parse {
    pub(crate) fn new(
        green_node: rowan::GreenNode,
        errors: Vec<ParseError>,
        tagged_names: Vec<TaggedName>,
    ) -> Self {
        let tagged_by_range = tagged_names
            .iter()
            .enumerate()
            .map(|(index, tagged)| (tagged.range, index))
            .collect();
        Self {
            green_node,
            errors,
            tagged_names,
            tagged_by_range,
        }
    }

    /// Returns the root syntax node.
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green_node.clone())
    }

    /// Returns the parsing errors.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns `true` if parsing produced no errors.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns every tagged dotted name.
    #[must_use]
    pub fn tagged_names(&self) -> &[TaggedName] {
        &self.tagged_names
    }

    /// Returns the highlight segments of the leaf covering exactly `range`.
    #[must_use]
    pub fn segments_for(&self, range: TextRange) -> Option<&[HighlightSegment]> {
        self.tagged_by_range
            .get(&range)
            .map(|index| self.tagged_names[*index].segments.as_slice())
    }

    /// Renders the tree as indented `Kind@range` lines, skipping trivia.
    #[must_use]
    pub fn debug_tree(&self) -> String {
        let mut out = String::new();
        write_node(&self.syntax(), &mut out, 0);
        out
    }
}

fn write_node(node: &SyntaxNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(out, "{indent}{:?}@{:?}", node.kind(), node.text_range());

    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => write_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                if !t.kind().is_trivia() {
                    let _ = writeln!(
                        out,
                        "{indent}  {:?}@{:?} {:?}",
                        t.kind(),
                        t.text_range(),
                        t.text()
                    );
                }
            }
        }
    }
}

/// A parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} at {}..{}", .message, u32::from(.range.start()), u32::from(.range.end()))]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The byte range where the error occurred.
    pub range: TextRange,
}

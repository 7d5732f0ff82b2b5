//! Highlight categories for editor colouring.
//!
//! Two layers live here:
//!
//! - **Tagged names**: dotted identifiers inside annotations whose segments
//!   render differently (`Color.RED`, `improbable.Foo(...)`). The parser
//!   records them as it consumes the token; they are plain metadata a host may
//!   ignore.
//! - **[`highlight`]**: a walk over a finished tree that assigns a category to
//!   every interesting token, splitting tagged names into their segments.

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::parser::Parse;
use crate::syntax::{SyntaxKind, SyntaxToken};

/// Display category of a highlighted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    /// `package`, `type`, `component`, ...
    Keyword,
    /// A type reference.
    Type,
    /// The name introduced by a definition.
    Definition,
    /// Field, option, command and package names.
    Property,
    /// Identifier used as a value (`option x = foo;`, `true`).
    Constant,
    /// Integer literals and enum value segments.
    Number,
    /// String literals.
    String,
    /// Comments.
    Comment,
    /// Annotation syntax and qualifier segments of dotted names.
    Metadata,
}

/// A sub-range of one token's text, relative to the token start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSegment {
    /// Range relative to the start of the token.
    pub range: TextRange,
    /// Category for this segment.
    pub category: HighlightCategory,
}

impl HighlightSegment {
    fn new(start: usize, end: usize, category: HighlightCategory) -> Self {
        Self {
            range: TextRange::new(offset(start), offset(end)),
            category,
        }
    }
}

/// A leaf whose text is a dotted compound name, with per-segment categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedName {
    /// Token text.
    pub text: SmolStr,
    /// Absolute range of the token.
    pub range: TextRange,
    /// Segments, relative to `range.start()`.
    pub segments: Vec<HighlightSegment>,
}

/// An absolute range with its category, as produced by [`highlight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    /// Absolute byte range.
    pub range: TextRange,
    /// Display category.
    pub category: HighlightCategory,
}

fn offset(value: usize) -> TextSize {
    TextSize::try_from(value).unwrap_or(TextSize::from(u32::MAX))
}

/// Segments of a constructor name: every `.`-separated part is metadata,
/// the dots themselves are left untagged.
pub(crate) fn constructor_segments(text: &str) -> Vec<HighlightSegment> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if ch == '.' {
            segments.push(HighlightSegment::new(start, index, HighlightCategory::Metadata));
            start = index + 1;
        }
    }
    segments.push(HighlightSegment::new(
        start,
        text.len(),
        HighlightCategory::Metadata,
    ));
    segments
}

/// Segments of an enum reference: the part before the first dot is
/// metadata and everything after it is a number. `None` if there is no dot.
pub(crate) fn enum_reference_segments(text: &str) -> Option<Vec<HighlightSegment>> {
    let dot = text.find('.')?;
    Some(vec![
        HighlightSegment::new(0, dot, HighlightCategory::Metadata),
        HighlightSegment::new(dot + 1, text.len(), HighlightCategory::Number),
    ])
}

/// Computes highlight ranges for every categorised token, in source order.
#[must_use]
pub fn highlight(parse: &Parse) -> Vec<HighlightRange> {
    let root = parse.syntax();
    let mut ranges = Vec::new();

    for token in root
        .descendants_with_tokens()
        .filter_map(rowan::NodeOrToken::into_token)
    {
        let range = token.text_range();
        if let Some(segments) = parse.segments_for(range) {
            ranges.extend(segments.iter().map(|segment| HighlightRange {
                range: segment.range + range.start(),
                category: segment.category,
            }));
            continue;
        }
        if let Some(category) = token_category(&token) {
            ranges.push(HighlightRange { range, category });
        }
    }

    ranges
}

fn token_category(token: &SyntaxToken) -> Option<HighlightCategory> {
    let parent = token.parent().map(|node| node.kind());
    match token.kind() {
        SyntaxKind::LineComment | SyntaxKind::BlockComment => Some(HighlightCategory::Comment),
        SyntaxKind::StringLiteral => Some(HighlightCategory::String),
        SyntaxKind::IntLiteral => Some(HighlightCategory::Number),
        SyntaxKind::LBracket | SyntaxKind::RBracket
            if parent == Some(SyntaxKind::AnnotationDefinition) =>
        {
            Some(HighlightCategory::Metadata)
        }
        SyntaxKind::Ident => ident_category(token, parent?),
        _ => None,
    }
}

fn ident_category(token: &SyntaxToken, parent: SyntaxKind) -> Option<HighlightCategory> {
    let category = match parent {
        SyntaxKind::Keyword => HighlightCategory::Keyword,
        SyntaxKind::DefinitionName => HighlightCategory::Definition,
        SyntaxKind::TypeName => {
            let grandparent = token
                .parent()
                .and_then(|node| node.parent())
                .map(|node| node.kind());
            if grandparent == Some(SyntaxKind::AnnotationDefinition) {
                HighlightCategory::Metadata
            } else {
                HighlightCategory::Type
            }
        }
        SyntaxKind::TypeParameterName => HighlightCategory::Type,
        SyntaxKind::FieldName
        | SyntaxKind::OptionName
        | SyntaxKind::CommandName
        | SyntaxKind::PackageName => HighlightCategory::Property,
        SyntaxKind::OptionValue => HighlightCategory::Constant,
        SyntaxKind::ConstructorName | SyntaxKind::EnumReference => HighlightCategory::Metadata,
        _ => return None,
    };
    Some(category)
}

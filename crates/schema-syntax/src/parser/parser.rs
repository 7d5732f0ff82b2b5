//! Main parser implementation.

use drop_bomb::DropBomb;
use text_size::{TextRange, TextSize};
use tracing::{debug, trace};

use crate::highlight::{HighlightSegment, TaggedName};
use crate::lexer::{lex, Token, TokenKind};
use crate::parser::event::Event;
use crate::parser::sink::Sink;
use crate::parser::source::{Source, SourceCheckpoint};
use crate::parser::{Parse, ParseError, ParseOptions};
use crate::syntax::SyntaxKind;

/// Parses source text into a syntax tree.
#[must_use]
pub fn parse(source: &str) -> Parse {
    parse_with_options(source, ParseOptions::default())
}

/// Parses source text into a syntax tree with explicit options.
#[must_use]
pub fn parse_with_options(source: &str, options: ParseOptions) -> Parse {
    let tokens = lex(source);
    let parser = Parser::new(&tokens, source, options);
    let output = parser.parse();

    let green_node = Sink::new(&tokens, source, output.events).finish();
    debug!(
        tokens = tokens.len(),
        errors = output.errors.len(),
        tagged = output.tagged_names.len(),
        "parsed schema source"
    );

    Parse::new(green_node, output.errors, output.tagged_names)
}

/// Which tokens end an error-recovery scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Recovery {
    /// Stop after `;`, or before `}` so the enclosing block can close.
    Statement,
    /// Stop after `}`.
    Braces,
    /// Stop after `;` or `}`.
    TopLevel,
}

/// Returned by the recovery routine once it has reported an error and
/// resynchronized; productions propagate it to abandon enclosing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Recovered;

pub(crate) type PResult<T = ()> = Result<T, Recovered>;

struct Output {
    events: Vec<Event>,
    errors: Vec<ParseError>,
    tagged_names: Vec<TaggedName>,
}

/// The parser state.
pub(crate) struct Parser<'t, 'src> {
    source: Source<'t, 'src>,
    events: Vec<Event>,
    errors: Vec<ParseError>,
    tagged_names: Vec<TaggedName>,
    options: ParseOptions,
    /// End of the last consumed non-trivia token.
    last_end: TextSize,
}

pub(crate) struct Marker {
    pos: usize,
    start: TextSize,
    bomb: DropBomb,
}

impl Marker {
    /// Closes the node as `kind`.
    pub(crate) fn complete(mut self, parser: &mut Parser<'_, '_>, kind: SyntaxKind) {
        self.bomb.defuse();
        parser.events[self.pos] = Event::start(kind);
        parser.events.push(Event::Finish);
    }

    /// Discards the marker; anything parsed since it was opened stays in the
    /// enclosing node.
    pub(crate) fn abandon(mut self, parser: &mut Parser<'_, '_>) {
        self.bomb.defuse();
        if self.pos + 1 == parser.events.len() {
            parser.events.pop();
        }
    }

    /// Closes the node as an `Error` node carrying `message`.
    pub(crate) fn error(self, parser: &mut Parser<'_, '_>, message: String) {
        let range = TextRange::new(self.start, parser.last_end.max(self.start));
        self.complete(parser, SyntaxKind::Error);
        parser.errors.push(ParseError { message, range });
    }
}

/// Saved parser position for speculative scanning.
pub(crate) struct Checkpoint {
    source: SourceCheckpoint,
    events: usize,
    errors: usize,
    tagged_names: usize,
    last_end: TextSize,
}

impl<'t, 'src> Parser<'t, 'src> {
    fn new(tokens: &'t [Token], source: &'src str, options: ParseOptions) -> Self {
        Self {
            source: Source::new(tokens, source),
            events: Vec::new(),
            errors: Vec::new(),
            tagged_names: Vec::new(),
            options,
            last_end: TextSize::from(0),
        }
    }

    fn parse(mut self) -> Output {
        let root = self.start();
        while !self.at_end() {
            self.parse_top_level_definition();
        }
        root.complete(&mut self, SyntaxKind::SchemaFile);

        Output {
            events: self.events,
            errors: self.errors,
            tagged_names: self.tagged_names,
        }
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    pub(crate) fn current(&self) -> TokenKind {
        self.source.current()
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    /// Returns `true` if the current token is the identifier `keyword`.
    pub(crate) fn at_keyword(&self, keyword: &str) -> bool {
        self.at(TokenKind::Ident) && self.current_text() == keyword
    }

    pub(crate) fn at_end(&self) -> bool {
        self.source.at_end()
    }

    pub(crate) fn peek_kind_n(&self, n: usize) -> TokenKind {
        self.source.peek_kind_n(n)
    }

    /// Text of the current token, `""` at end of input.
    pub(crate) fn current_text(&self) -> &'src str {
        self.source.current_text()
    }

    /// Text of the current token for diagnostics, `<EOF>` at end of input.
    pub(crate) fn current_text_or_eof(&self) -> &'src str {
        if self.at_end() {
            "<EOF>"
        } else {
            self.current_text()
        }
    }

    /// Value of the current integer token; text that does not fit an `i32`
    /// yields zero.
    pub(crate) fn current_int(&mut self) -> i32 {
        let text = self.current_text();
        if let Ok(value) = text.parse::<i32>() {
            return value;
        }
        if self.options.report_invalid_numbers {
            let range = self.current_range();
            self.errors.push(ParseError {
                message: format!("Invalid integer literal '{text}'"),
                range,
            });
        }
        0
    }

    /// Contents of the current string token without its quotes.
    pub(crate) fn current_string(&self) -> &'src str {
        let text = self.current_text();
        let trim = if self.options.legacy_string_strip { 2 } else { 1 };
        text.get(1..text.len().saturating_sub(trim)).unwrap_or("")
    }

    fn current_range(&self) -> TextRange {
        self.source
            .current_token()
            .map_or(TextRange::empty(self.last_end), |token| token.range)
    }

    pub(crate) fn bump(&mut self) {
        let Some(token) = self.source.current_token().copied() else {
            return;
        };
        self.events.push(Event::token(SyntaxKind::from(token.kind)));
        self.last_end = token.range.end();
        self.source.bump();
    }

    /// Consumes the current token wrapped in a node of `kind`.
    pub(crate) fn bump_node(&mut self, kind: SyntaxKind) {
        let marker = self.start();
        self.bump();
        marker.complete(self, kind);
    }

    /// Like [`Parser::bump_node`], also recording highlight segments for the
    /// token text.
    pub(crate) fn bump_tagged(&mut self, kind: SyntaxKind, segments: Vec<HighlightSegment>) {
        let range = self.current_range();
        self.tagged_names.push(TaggedName {
            text: self.current_text().into(),
            range,
            segments,
        });
        self.bump_node(kind);
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len();
        self.events.push(Event::Placeholder);
        Marker {
            pos,
            start: self.current_range().start(),
            bomb: DropBomb::new("uncompleted marker"),
        }
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            source: self.source.checkpoint(),
            events: self.events.len(),
            errors: self.errors.len(),
            tagged_names: self.tagged_names.len(),
            last_end: self.last_end,
        }
    }

    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        self.source.rollback(checkpoint.source);
        self.events.truncate(checkpoint.events);
        self.errors.truncate(checkpoint.errors);
        self.tagged_names.truncate(checkpoint.tagged_names);
        self.last_end = checkpoint.last_end;
    }

    // =========================================================================
    // Error Recovery
    // =========================================================================

    /// Reports `message` and skips input up to the boundary of `recovery`.
    ///
    /// `marker`, if given, is closed as `kind` first so its children survive.
    /// The skipped tokens become a single `Error` node. Every iteration
    /// either consumes a token or returns.
    pub(crate) fn recover(
        &mut self,
        marker: Option<Marker>,
        kind: SyntaxKind,
        recovery: Recovery,
        message: impl Into<String>,
    ) -> Recovered {
        if let Some(marker) = marker {
            marker.complete(self, kind);
        }
        let message = message.into();
        trace!(?recovery, ?kind, %message, "recovering");

        let error = self.start();
        while !self.at_end() {
            match (recovery, self.current()) {
                (Recovery::Statement | Recovery::TopLevel, TokenKind::Semicolon)
                | (Recovery::Braces | Recovery::TopLevel, TokenKind::RBrace) => {
                    self.bump();
                    break;
                }
                (Recovery::Statement, TokenKind::RBrace) => break,
                _ => self.bump(),
            }
        }
        error.error(self, message);
        Recovered
    }

    pub(crate) fn recover_statement(
        &mut self,
        marker: Marker,
        kind: SyntaxKind,
        message: impl Into<String>,
    ) -> Recovered {
        self.recover(Some(marker), kind, Recovery::Statement, message)
    }

    pub(crate) fn recover_braces(
        &mut self,
        marker: Marker,
        kind: SyntaxKind,
        message: impl Into<String>,
    ) -> Recovered {
        self.recover(Some(marker), kind, Recovery::Braces, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxNode;

    fn error_nodes(root: &SyntaxNode) -> Vec<String> {
        root.descendants()
            .filter(|node| node.kind() == SyntaxKind::Error)
            .map(|node| node.text().to_string())
            .collect()
    }

    #[test]
    fn test_parse_empty() {
        let parse = parse("");
        assert!(parse.ok());
        assert_eq!(parse.syntax().kind(), SyntaxKind::SchemaFile);
    }

    #[test]
    fn test_parse_trivia_only() {
        let source = "  // nothing here\n";
        let parse = parse(source);
        assert!(parse.ok());
        assert_eq!(parse.syntax().text().to_string(), source);
    }

    #[test]
    fn test_top_level_recovery_consumes_semicolon() {
        let parse = parse("bogus stuff; package a;");
        assert_eq!(parse.errors().len(), 1);
        assert_eq!(
            parse.errors()[0].message,
            "Expected 'package', 'import', 'enum', 'type' or 'component' definition at top-level."
        );
        assert_eq!(error_nodes(&parse.syntax()), vec!["bogus stuff;"]);
        assert!(parse
            .syntax()
            .children()
            .any(|node| node.kind() == SyntaxKind::PackageDefinition));
    }

    #[test]
    fn test_top_level_recovery_consumes_close_brace() {
        let parse = parse("} package a;");
        assert_eq!(parse.errors().len(), 1);
        assert_eq!(error_nodes(&parse.syntax()), vec!["}"]);
    }

    #[test]
    fn test_statement_recovery_stops_before_close_brace() {
        let parse = parse("type T { int32 x = }");
        assert_eq!(parse.errors().len(), 1);
        assert_eq!(
            parse.errors()[0].message,
            "Expected field number after 'int32 x = '."
        );
        let error = &parse.errors()[0];
        assert!(error.range.is_empty());
        let type_def = parse
            .syntax()
            .children()
            .find(|node| node.kind() == SyntaxKind::TypeDefinition)
            .expect("type definition");
        assert_eq!(type_def.text().to_string(), "type T { int32 x = }");
    }

    #[test]
    fn test_braces_recovery_consumes_close_brace() {
        let parse = parse("enum { A = 1; } package a;");
        assert_eq!(parse.errors().len(), 1);
        assert_eq!(parse.errors()[0].message, "Expected identifier after 'enum'.");
        assert_eq!(error_nodes(&parse.syntax()), vec!["{ A = 1; }"]);
    }

    #[test]
    fn test_recovery_at_end_of_input() {
        let parse = parse("package");
        assert_eq!(parse.errors().len(), 1);
        let error = &parse.errors()[0];
        assert_eq!(error.message, "Expected a package name after 'package'.");
        assert_eq!(error.range, TextRange::empty(7.into()));
    }

    #[test]
    fn test_failed_node_keeps_children() {
        let parse = parse("package foo");
        let package = parse
            .syntax()
            .children()
            .find(|node| node.kind() == SyntaxKind::PackageDefinition)
            .expect("package definition survives");
        let kinds: Vec<_> = package.children().map(|node| node.kind()).collect();
        assert_eq!(kinds, vec![SyntaxKind::Keyword, SyntaxKind::PackageName]);
    }

    #[test]
    fn test_invalid_number_is_zero_by_default() {
        let parse = parse("type T { int32 x = 99999999999 }");
        assert_eq!(
            parse.errors()[0].message,
            "Expected ';' after 'int32 x = 0'."
        );
    }

    #[test]
    fn test_invalid_number_reported_when_enabled() {
        let options = ParseOptions {
            report_invalid_numbers: true,
            ..ParseOptions::default()
        };
        let parse = parse_with_options("type T { int32 x = 99999999999; }", options);
        assert_eq!(parse.errors().len(), 1);
        assert_eq!(
            parse.errors()[0].message,
            "Invalid integer literal '99999999999'"
        );
        assert_eq!(parse.errors()[0].range, TextRange::new(19.into(), 30.into()));
        assert!(error_nodes(&parse.syntax()).is_empty());
    }

    #[test]
    fn test_import_filename_stripping() {
        let source = "import \"foo.schema\"";
        let default = parse(source);
        assert_eq!(
            default.errors()[0].message,
            "Expected ';' after 'import \"foo.schema\"'."
        );

        let legacy = parse_with_options(
            source,
            ParseOptions {
                legacy_string_strip: true,
                ..ParseOptions::default()
            },
        );
        assert_eq!(
            legacy.errors()[0].message,
            "Expected ';' after 'import \"foo.schem\"'."
        );
    }
}

//! Lexer for the schema language.
//!
//! This module provides a lexer that tokenizes schema source code into a
//! stream of tokens with their positions in the source text.

mod tokens;

pub use tokens::TokenKind;

use logos::Logos;
use std::collections::VecDeque;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the length of the token in bytes.
    #[must_use]
    pub fn len(&self) -> TextSize {
        self.range.len()
    }

    /// Returns true if the token has zero length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Lexer for schema source code.
///
/// The lexer is an iterator over tokens. Unrecognized characters are
/// returned as `TokenKind::Error`. Identifier segments joined by `.` with no
/// trivia in between (`improbable.Coordinates`) are returned as a single
/// `TokenKind::Ident`.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    pending: VecDeque<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            pending: VecDeque::new(),
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    fn lex_raw(&mut self) -> Option<Token> {
        let kind = self.inner.next()?;
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::from(span.start as u32),
            TextSize::from(span.end as u32),
        );
        Some(Token::new(kind.unwrap_or(TokenKind::Error), range))
    }

    /// Returns the `n`th raw token after the current one without consuming it.
    fn peek_raw(&mut self, n: usize) -> Option<Token> {
        while self.pending.len() <= n {
            let token = self.lex_raw()?;
            self.pending.push_back(token);
        }
        self.pending.get(n).copied()
    }

    fn next_raw(&mut self) -> Option<Token> {
        match self.pending.pop_front() {
            Some(token) => Some(token),
            None => self.lex_raw(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_raw()?;
        if token.kind != TokenKind::Ident {
            return Some(token);
        }

        let start = token.range.start();
        let mut end = token.range.end();
        while let (Some(dot), Some(segment)) = (self.peek_raw(0), self.peek_raw(1)) {
            let joins = dot.kind == TokenKind::Dot
                && dot.range.start() == end
                && segment.kind == TokenKind::Ident
                && segment.range.start() == dot.range.end();
            if !joins {
                break;
            }
            end = segment.range.end();
            self.pending.pop_front();
            self.pending.pop_front();
        }

        Some(Token::new(TokenKind::Ident, TextRange::new(start, end)))
    }
}

/// Lex the entire source and return all tokens.
///
/// This is a convenience function for testing and simple use cases.
/// For the parser, use the `Lexer` iterator directly.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Lex source and return tokens paired with their text.
///
/// Useful for debugging and testing.
#[must_use]
pub fn lex_with_text(source: &str) -> Vec<(Token, &str)> {
    Lexer::new(source)
        .map(|token| {
            let text = &source[usize::from(token.range.start())..usize::from(token.range.end())];
            (token, text)
        })
        .collect()
}

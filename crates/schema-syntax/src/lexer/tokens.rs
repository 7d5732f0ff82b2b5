//! Token definitions for the schema language.
//!
//! The token kinds are designed to work with both the `logos` lexer generator
//! and the `rowan` lossless syntax tree library. Keywords are not separate
//! token kinds: `package`, `type`, `option` and friends lex as identifiers and
//! the parser tells them apart by their text.

use logos::Logos;

/// Block comments do not nest; an unterminated comment runs to end of input.
fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

/// All token kinds in the schema language.
///
/// Token kinds are divided into categories:
/// - Trivia (whitespace, comments) - preserved but not semantically significant
/// - Punctuation
/// - Literals (integers, strings)
/// - Identifiers
/// - Special tokens (errors, EOF)
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u16)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*", allow_greedy = true)]
    LineComment,

    /// Block comment: /* ... */
    #[token("/*", lex_block_comment)]
    BlockComment,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    /// `;`
    #[token(";")]
    Semicolon,

    /// `:`
    #[token(":")]
    Colon,

    /// `,`
    #[token(",")]
    Comma,

    /// `.`
    #[token(".")]
    Dot,

    /// `=`
    #[token("=")]
    Eq,

    /// `<`
    #[token("<")]
    LAngle,

    /// `>`
    #[token(">")]
    RAngle,

    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `[`
    #[token("[")]
    LBracket,

    /// `]`
    #[token("]")]
    RBracket,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    // =========================================================================
    // LITERALS
    // =========================================================================
    /// Integer literal: `42`, `-1`
    #[regex(r"-?[0-9]+")]
    IntLiteral,

    /// Double-quoted string: `"foo.schema"`
    #[regex(r#""([^"\\\r\n]|\\.)*""#, priority = 2)]
    StringLiteral,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier segment. Dotted names are joined by the `Lexer` iterator.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // =========================================================================
    // SPECIAL TOKENS
    // =========================================================================
    /// Lexer error - unrecognized character or unterminated string
    #[regex(r#""([^"\\\r\n]|\\.)*"#, priority = 1)]
    #[default]
    Error,

    /// End of file marker (not produced by lexer, synthesised by the parser)
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token is trivia (whitespace or comment).
    #[inline]
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Returns `true` if this token is a literal.
    #[must_use]
    pub fn is_literal(self) -> bool {
        matches!(self, Self::IntLiteral | Self::StringLiteral)
    }

    /// Returns `true` if this token is a punctuation symbol.
    #[must_use]
    pub fn is_punct(self) -> bool {
        matches!(
            self,
            Self::Semicolon
                | Self::Colon
                | Self::Comma
                | Self::Dot
                | Self::Eq
                | Self::LAngle
                | Self::RAngle
                | Self::LParen
                | Self::RParen
                | Self::LBracket
                | Self::RBracket
                | Self::LBrace
                | Self::RBrace
        )
    }
}

impl From<TokenKind> for rowan::SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<(TokenKind, &str)> {
        TokenKind::lexer(input)
            .spanned()
            .map(|(tok, span)| (tok.unwrap_or(TokenKind::Error), &input[span]))
            .collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input)
            .into_iter()
            .map(|(k, _)| k)
            .filter(|k| !k.is_trivia())
            .collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("; : , . = < > ( ) [ ] { }"),
            vec![
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Eq,
                TokenKind::LAngle,
                TokenKind::RAngle,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::LBrace,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn test_keywords_are_identifiers() {
        let tokens = kinds("package import enum type component option id data event command");
        assert_eq!(tokens.len(), 10);
        assert!(tokens.iter().all(|kind| *kind == TokenKind::Ident));
    }

    #[test]
    fn test_integer_literals() {
        let tokens = lex("0 42 -1 1234567890123");
        let ints: Vec<_> = tokens
            .iter()
            .filter(|(k, _)| !k.is_trivia())
            .collect();
        assert!(ints.iter().all(|(k, _)| *k == TokenKind::IntLiteral));
        assert_eq!(ints[2].1, "-1");
    }

    #[test]
    fn test_strings() {
        let tokens = lex(r#""foo.schema" "with \"escape\"""#);
        let strings: Vec<_> = tokens
            .iter()
            .filter(|(k, _)| !k.is_trivia())
            .collect();
        assert_eq!(strings.len(), 2);
        assert!(strings.iter().all(|(k, _)| *k == TokenKind::StringLiteral));
        assert_eq!(strings[1].1, r#""with \"escape\"""#);
    }

    #[test]
    fn test_unterminated_string_is_error() {
        assert_eq!(kinds("\"oops"), vec![TokenKind::Error]);
    }

    #[test]
    fn test_comments() {
        let tokens = lex("// line\n/* block\n comment */ x");
        let all: Vec<_> = tokens.iter().map(|(k, _)| *k).collect();
        assert!(all.contains(&TokenKind::LineComment));
        assert!(all.contains(&TokenKind::BlockComment));
        assert_eq!(kinds("// line\n/* block */ x"), vec![TokenKind::Ident]);
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        let tokens = lex("x /* never closed");
        assert_eq!(tokens.last().map(|(_, text)| *text), Some("/* never closed"));
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(kinds("@"), vec![TokenKind::Error]);
    }
}

//! Single source of truth for the token kind list.
//!
//! `SyntaxKind` starts with one variant per `TokenKind`, in the same order,
//! so the two enums share discriminants for tokens. The macro below feeds the
//! list to every place that needs to stay in sync.

macro_rules! for_each_token_kind {
    ($callback:ident) => {
        $callback! {
            Whitespace,
            LineComment,
            BlockComment,
            Semicolon,
            Colon,
            Comma,
            Dot,
            Eq,
            LAngle,
            RAngle,
            LParen,
            RParen,
            LBracket,
            RBracket,
            LBrace,
            RBrace,
            IntLiteral,
            StringLiteral,
            Ident,
            Error,
            Eof,
        }
    };
}

pub(crate) use for_each_token_kind;

//! `schema-syntax` - Lexer, parser, and concrete syntax tree for the SpatialOS
//! schema language.
//!
//! This crate provides the syntactic analysis used by editor tooling for
//! `.schema` files:
//!
//! - **Lexer**: Tokenizes source text into a stream of tokens
//! - **Parser**: Builds a concrete syntax tree (CST) from tokens, recovering
//!   from errors at statement and block boundaries
//! - **Syntax Tree**: Lossless representation of the source code
//! - **Highlighting**: Display categories for tokens and dotted names
//!
//! # Design Principles
//!
//! This crate follows the design of `rust-analyzer` and uses the `rowan` library
//! for building lossless syntax trees:
//!
//! - **Lossless**: All source text is preserved, including whitespace and comments
//! - **Error-tolerant**: Parsing continues after errors, producing a partial tree
//! - **Stable diagnostics**: Error messages are part of the public contract
//!
//! # Example
//!
//! ```
//! use schema_syntax::{parse, SyntaxKind};
//!
//! let parse = parse("package improbable.example;\ntype Foo { int32 x = 1; }");
//! assert!(parse.ok());
//!
//! let kinds: Vec<_> = parse.syntax().children().map(|node| node.kind()).collect();
//! assert_eq!(kinds, [SyntaxKind::PackageDefinition, SyntaxKind::TypeDefinition]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod highlight;
pub mod lexer;
pub mod parser;
pub mod syntax;
mod token_kinds;

pub use lexer::{lex, Lexer, Token, TokenKind};
pub use parser::{parse, parse_with_options, Parse, ParseError, ParseOptions};
pub use syntax::{SchemaLanguage, SyntaxKind, SyntaxNode, SyntaxToken};

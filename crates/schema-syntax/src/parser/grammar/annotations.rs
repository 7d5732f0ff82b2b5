//! Annotation parsing.
//!
//! Handles:
//! - `[Type]`, `[Type(value, ...)]` and `[Type(name = value, ...)]`
//! - Dotted heads: `[pkg.Value]` and `[pkg.Type(...)]`
//! - Scalar, array, map, constructor and enum reference values
//!
//! A failure inside a value reports once and aborts the rest of the
//! enclosing annotation; callers only close their own nodes on the way out.

use crate::highlight::{constructor_segments, enum_reference_segments};
use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::{PResult, Parser, Recovered, Recovery};

impl Parser<'_, '_> {
    /// Parse an annotation starting at `[`.
    pub(crate) fn parse_annotation(&mut self) {
        let m = self.start();
        self.bump(); // [

        if !self.at(TokenKind::Ident) {
            self.recover_statement(m, SyntaxKind::AnnotationDefinition, "Expected type after '['.");
            return;
        }
        self.parse_annotation_head();

        if self.at(TokenKind::LParen) {
            let arguments = if self.peek_kind_n(2) == TokenKind::Eq {
                self.parse_named_annotation_fields()
            } else {
                self.parse_annotation_field_array()
            };
            if arguments.is_err() {
                m.complete(self, SyntaxKind::AnnotationDefinition);
                return;
            }
        }

        if !self.at(TokenKind::RBracket) {
            self.recover_statement(
                m,
                SyntaxKind::AnnotationDefinition,
                "Expected end of annotation ']'",
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::AnnotationDefinition);
    }

    /// The identifier after `[`. A dotted head is tagged like a value: a
    /// constructor when `(` follows, an enum reference otherwise.
    fn parse_annotation_head(&mut self) {
        let head = self.current_text();
        match enum_reference_segments(head) {
            Some(_) if self.peek_kind_n(1) == TokenKind::LParen => {
                self.bump_tagged(SyntaxKind::ConstructorName, constructor_segments(head));
            }
            Some(segments) => self.bump_tagged(SyntaxKind::EnumReference, segments),
            None => self.bump_node(SyntaxKind::TypeName),
        }
    }

    /// Parse `(name = value, ...)`. The fields belong to the annotation node.
    fn parse_named_annotation_fields(&mut self) -> PResult {
        self.bump(); // (
        loop {
            if !self.at(TokenKind::Ident) {
                return Err(self.recover_annotation_error("Expected field identifier"));
            }
            self.bump_node(SyntaxKind::FieldName);

            if !self.at(TokenKind::Eq) {
                return Err(self.recover_annotation_error("Expected '='"));
            }
            self.bump();

            self.parse_annotation_field()?;

            if self.at(TokenKind::RParen) {
                self.bump();
                return Ok(());
            }
            if !self.at(TokenKind::Comma) {
                return Err(self.recover_annotation_error("Expected ',' or end of annotation"));
            }
            self.bump();
        }
    }

    fn recover_annotation_error(&mut self, message: &str) -> Recovered {
        self.recover(None, SyntaxKind::Error, Recovery::Statement, message)
    }

    /// Parse `(value, ...)` at `(` into an `AnnotationFieldArray` node.
    fn parse_annotation_field_array(&mut self) -> PResult {
        let m = self.start();
        self.bump(); // (

        if !self.at(TokenKind::RParen) {
            while !self.at_end() {
                if let Err(recovered) = self.parse_annotation_field() {
                    m.complete(self, SyntaxKind::AnnotationFieldArray);
                    return Err(recovered);
                }
                if self.at(TokenKind::RParen) {
                    break;
                }
                if !self.at(TokenKind::Comma) {
                    return Err(self.recover_statement(
                        m,
                        SyntaxKind::AnnotationFieldArray,
                        "Expected ',' or end of array",
                    ));
                }
                self.bump();
            }
        }

        self.bump(); // )
        m.complete(self, SyntaxKind::AnnotationFieldArray);
        Ok(())
    }

    /// Returns `true` at a value that is a single literal token.
    fn at_scalar_value(&self) -> bool {
        match self.current() {
            TokenKind::IntLiteral | TokenKind::StringLiteral => true,
            TokenKind::Ident => {
                let text = self.current_text();
                text == "_" || text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
            }
            _ => false,
        }
    }

    /// Parse one annotation value into an `AnnotationField` node.
    fn parse_annotation_field(&mut self) -> PResult {
        if !self.at_scalar_value()
            && !matches!(
                self.current(),
                TokenKind::LBracket | TokenKind::LBrace | TokenKind::Ident
            )
        {
            let message = format!(
                "Expected annotation value, found '{}'",
                self.current_text_or_eof()
            );
            return Err(self.recover_annotation_error(&message));
        }

        let m = self.start();
        let result = if self.at_scalar_value() {
            self.parse_scalar_value()
        } else if self.at(TokenKind::LBracket) {
            self.parse_array_value()
        } else if self.at(TokenKind::LBrace) {
            self.parse_map_value()
        } else {
            self.parse_named_value()
        };
        m.complete(self, SyntaxKind::AnnotationField);
        result
    }

    fn parse_scalar_value(&mut self) -> PResult {
        let numeric = self.at(TokenKind::IntLiteral);
        self.bump_node(SyntaxKind::OptionValue);

        if numeric && self.at(TokenKind::Dot) {
            self.bump_node(SyntaxKind::OptionValue);
            if !self.at(TokenKind::IntLiteral) {
                return Err(
                    self.recover_annotation_error("Cannot have a decimal with no decimal point")
                );
            }
            self.bump_node(SyntaxKind::OptionValue);
        }
        Ok(())
    }

    /// Parse `[ ]` or `[v, ...]`.
    fn parse_array_value(&mut self) -> PResult {
        self.bump(); // [
        if self.at(TokenKind::RBracket) {
            self.bump();
            return Ok(());
        }
        loop {
            self.parse_annotation_field()?;
            if self.at(TokenKind::RBracket) {
                self.bump();
                return Ok(());
            }
            if !self.at(TokenKind::Comma) {
                return Err(self.recover_annotation_error("Expected ',' or end of array"));
            }
            self.bump();
        }
    }

    /// Parse `{ }` or `{k: v, ...}`.
    fn parse_map_value(&mut self) -> PResult {
        self.bump(); // {
        if self.at(TokenKind::RBrace) {
            self.bump();
            return Ok(());
        }
        loop {
            self.parse_annotation_field()?;
            if !self.at(TokenKind::Colon) {
                return Err(self.recover_annotation_error("Expected ':' in map"));
            }
            self.bump();
            self.parse_annotation_field()?;

            if self.at(TokenKind::RBrace) {
                self.bump();
                return Ok(());
            }
            if !self.at(TokenKind::Comma) {
                return Err(self.recover_annotation_error("Expected ',' or end of map"));
            }
            self.bump();
        }
    }

    /// Parse a constructor call, an enum reference or a bare type name.
    fn parse_named_value(&mut self) -> PResult {
        let text = self.current_text();
        if self.peek_kind_n(1) == TokenKind::LParen {
            self.bump_tagged(SyntaxKind::ConstructorName, constructor_segments(text));
            return self.parse_annotation_field_array();
        }
        match enum_reference_segments(text) {
            Some(segments) => self.bump_tagged(SyntaxKind::EnumReference, segments),
            None => self.bump_node(SyntaxKind::TypeName),
        }
        Ok(())
    }
}

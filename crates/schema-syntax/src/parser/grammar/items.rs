//! Top-level items and block definitions.
//!
//! Handles:
//! - `package`, `import` and `option` statements
//! - `enum`, `type` and `component` blocks and their bodies

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::{Parser, Recovery};
use super::{
    KW_COMMAND, KW_COMPONENT, KW_DATA, KW_ENUM, KW_EVENT, KW_ID, KW_IMPORT, KW_OPTION,
    KW_PACKAGE, KW_TYPE,
};

impl Parser<'_, '_> {
    /// Parse one top-level definition, or skip to the next `;` or `}`.
    pub(crate) fn parse_top_level_definition(&mut self) {
        if self.at_keyword(KW_PACKAGE) {
            self.parse_package_definition();
        } else if self.at_keyword(KW_IMPORT) {
            self.parse_import_definition();
        } else if self.at_keyword(KW_OPTION) {
            self.parse_option_definition();
        } else if self.at_keyword(KW_ENUM) {
            self.parse_enum_definition();
        } else if self.at_keyword(KW_TYPE) {
            self.parse_type_definition();
        } else if self.at_keyword(KW_COMPONENT) {
            self.parse_component_definition();
        } else if self.at(TokenKind::LBracket) {
            self.parse_annotation();
        } else {
            self.recover(
                None,
                SyntaxKind::Error,
                Recovery::TopLevel,
                format!(
                    "Expected '{KW_PACKAGE}', '{KW_IMPORT}', '{KW_ENUM}', '{KW_TYPE}' or \
                     '{KW_COMPONENT}' definition at top-level."
                ),
            );
        }
    }

    /// Parse `package a.b.c;`.
    pub(crate) fn parse_package_definition(&mut self) {
        let m = self.start();
        self.bump_node(SyntaxKind::Keyword);

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::PackageDefinition,
                format!("Expected a package name after '{KW_PACKAGE}'."),
            );
            return;
        }
        self.bump_node(SyntaxKind::PackageName);

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::PackageDefinition,
                format!("Expected ';' after {KW_PACKAGE} definition."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::PackageDefinition);
    }

    /// Parse `import "file.schema";`.
    pub(crate) fn parse_import_definition(&mut self) {
        let m = self.start();
        self.bump_node(SyntaxKind::Keyword);

        if !self.at(TokenKind::StringLiteral) {
            self.recover_statement(
                m,
                SyntaxKind::ImportDefinition,
                format!("Expected a quoted filename after '{KW_IMPORT}'."),
            );
            return;
        }
        let filename = self.current_string();
        self.bump_node(SyntaxKind::ImportFilename);

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::ImportDefinition,
                format!("Expected ';' after '{KW_IMPORT} \"{filename}\"'."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::ImportDefinition);
    }

    /// Parse `option name = value;`.
    pub(crate) fn parse_option_definition(&mut self) {
        let m = self.start();
        self.bump_node(SyntaxKind::Keyword);

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::OptionDefinition,
                format!("Expected identifier after '{KW_OPTION}'."),
            );
            return;
        }
        let name = self.current_text();
        self.bump_node(SyntaxKind::OptionName);

        if !self.at(TokenKind::Eq) {
            self.recover_statement(
                m,
                SyntaxKind::OptionDefinition,
                format!("Expected '=' after '{KW_OPTION} {name}'."),
            );
            return;
        }
        self.bump();

        if !matches!(
            self.current(),
            TokenKind::Ident | TokenKind::IntLiteral | TokenKind::StringLiteral
        ) {
            self.recover_statement(
                m,
                SyntaxKind::OptionDefinition,
                format!("Expected option value after '{KW_OPTION} {name} = '."),
            );
            return;
        }
        let value = self.current_text();
        self.bump_node(SyntaxKind::OptionValue);

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::OptionDefinition,
                format!("Expected ';' after '{KW_OPTION} {name} = {value}'."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::OptionDefinition);
    }

    /// Returns `true` at an option statement rather than a field whose type
    /// is a generic named `option`.
    fn at_option_definition(&mut self) -> bool {
        if !self.at_keyword(KW_OPTION) {
            return false;
        }
        let checkpoint = self.checkpoint();
        self.bump();
        let is_option = !self.at(TokenKind::LAngle);
        self.rollback(checkpoint);
        is_option
    }

    pub(crate) fn parse_enum_definition(&mut self) {
        self.parse_block_definition(KW_ENUM, SyntaxKind::EnumDefinition, Self::parse_enum_body);
    }

    pub(crate) fn parse_type_definition(&mut self) {
        self.parse_block_definition(KW_TYPE, SyntaxKind::TypeDefinition, Self::parse_type_body);
    }

    pub(crate) fn parse_component_definition(&mut self) {
        self.parse_block_definition(
            KW_COMPONENT,
            SyntaxKind::ComponentDefinition,
            Self::parse_component_body,
        );
    }

    /// Parse `keyword Name { body }`. Failures skip past the next `}`.
    fn parse_block_definition(&mut self, keyword: &str, kind: SyntaxKind, body: fn(&mut Self)) {
        let m = self.start();
        self.bump_node(SyntaxKind::Keyword);

        if !self.at(TokenKind::Ident) {
            self.recover_braces(m, kind, format!("Expected identifier after '{keyword}'."));
            return;
        }
        let name = match self.parse_definition_name() {
            Ok(name) => name,
            Err(message) => {
                self.recover_braces(m, kind, message);
                return;
            }
        };

        if !self.at(TokenKind::LBrace) {
            self.recover_braces(m, kind, format!("Expected '{{' after '{keyword} {name}'."));
            return;
        }
        self.bump();

        body(self);

        if !self.at(TokenKind::RBrace) {
            let message = format!(
                "Invalid '{}' inside {keyword} {name}.",
                self.current_text_or_eof()
            );
            self.recover_braces(m, kind, message);
            return;
        }
        self.bump();
        m.complete(self, kind);
    }

    /// Parse `Name` or a generic `Name<T, U>` into a `DefinitionName` node.
    fn parse_definition_name(&mut self) -> Result<String, String> {
        let m = self.start();
        let mut name = self.current_text().to_string();
        self.bump();

        let arguments = if self.at(TokenKind::LAngle) {
            self.parse_type_arguments(&mut name)
        } else {
            Ok(())
        };
        m.complete(self, SyntaxKind::DefinitionName);
        arguments.map(|()| name)
    }

    fn parse_enum_body(&mut self) {
        while self.at(TokenKind::Ident) {
            self.parse_enum_value_definition();
        }
    }

    fn parse_type_body(&mut self) {
        loop {
            if self.at_option_definition() {
                self.parse_option_definition();
            } else if self.at_keyword(KW_ENUM) {
                self.parse_enum_definition();
            } else if self.at_keyword(KW_TYPE) {
                self.parse_type_definition();
            } else if self.at(TokenKind::LBracket) {
                self.parse_annotation();
            } else if self.at(TokenKind::Ident) {
                self.parse_field_definition();
            } else {
                break;
            }
        }
    }

    fn parse_component_body(&mut self) {
        loop {
            if self.at_option_definition() {
                self.parse_option_definition();
            } else if self.at_keyword(KW_ID) {
                self.parse_component_id_definition();
            } else if self.at_keyword(KW_DATA) {
                self.parse_data_definition();
            } else if self.at_keyword(KW_EVENT) {
                self.parse_event_definition();
            } else if self.at_keyword(KW_COMMAND) {
                self.parse_command_definition();
            } else if self.at(TokenKind::LBracket) {
                self.parse_annotation();
            } else if self.at(TokenKind::Ident) {
                self.parse_field_definition();
            } else {
                break;
            }
        }
    }
}

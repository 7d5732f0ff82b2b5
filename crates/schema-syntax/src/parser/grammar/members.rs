//! Statements inside `type`, `enum` and `component` blocks.

use crate::lexer::TokenKind;
use crate::syntax::SyntaxKind;

use super::super::Parser;
use super::{KW_COMMAND, KW_DATA, KW_EVENT, KW_ID};

impl Parser<'_, '_> {
    /// Parse `Name` or `Name<A, B>` at an identifier into a `FieldType` node.
    ///
    /// Returns the rendered type name on success. On failure the `FieldType`
    /// node is dropped and the message is returned for the caller to recover
    /// with on its own node.
    pub(crate) fn parse_type_name(&mut self) -> Result<String, String> {
        let m = self.start();
        let mut name = self.current_text().to_string();
        self.bump_node(SyntaxKind::TypeName);

        if self.at(TokenKind::LAngle) {
            if let Err(message) = self.parse_type_arguments(&mut name) {
                m.abandon(self);
                return Err(message);
            }
        }
        m.complete(self, SyntaxKind::FieldType);
        Ok(name)
    }

    /// Parse `<A, B>` at `<`, appending the rendered arguments to `name`.
    pub(crate) fn parse_type_arguments(&mut self, name: &mut String) -> Result<(), String> {
        name.push('<');
        self.bump();

        if !self.at(TokenKind::Ident) {
            return Err(format!("Expected typename after '{name}'."));
        }
        name.push_str(self.current_text());
        self.bump_node(SyntaxKind::TypeParameterName);

        loop {
            if self.at(TokenKind::RAngle) {
                name.push('>');
                self.bump();
                return Ok(());
            }
            if !self.at(TokenKind::Comma) {
                return Err(format!("Invalid '{}' inside <>.", self.current_text_or_eof()));
            }
            self.bump();

            if !self.at(TokenKind::Ident) {
                return Err("Expected typename after ','.".to_string());
            }
            name.push_str(", ");
            name.push_str(self.current_text());
            self.bump_node(SyntaxKind::TypeParameterName);
        }
    }

    /// Parse `Type name = 1;`.
    pub(crate) fn parse_field_definition(&mut self) {
        let m = self.start();
        let type_name = match self.parse_type_name() {
            Ok(type_name) => type_name,
            Err(message) => {
                self.recover_statement(m, SyntaxKind::FieldDefinition, message);
                return;
            }
        };

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::FieldDefinition,
                format!("Expected field name after '{type_name}'."),
            );
            return;
        }
        let field_name = self.current_text();
        self.bump_node(SyntaxKind::FieldName);

        if !self.at(TokenKind::Eq) {
            self.recover_statement(
                m,
                SyntaxKind::FieldDefinition,
                format!("Expected '=' after '{type_name} {field_name}'."),
            );
            return;
        }
        self.bump();

        if !self.at(TokenKind::IntLiteral) {
            self.recover_statement(
                m,
                SyntaxKind::FieldDefinition,
                format!("Expected field number after '{type_name} {field_name} = '."),
            );
            return;
        }
        let number = self.current_int();
        self.bump_node(SyntaxKind::FieldNumber);

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::FieldDefinition,
                format!("Expected ';' after '{type_name} {field_name} = {number}'."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::FieldDefinition);
    }

    /// Parse `NAME = 1;` inside an enum.
    pub(crate) fn parse_enum_value_definition(&mut self) {
        let m = self.start();
        let name = self.current_text();
        self.bump_node(SyntaxKind::FieldName);

        if !self.at(TokenKind::Eq) {
            self.recover_statement(
                m,
                SyntaxKind::EnumValueDefinition,
                format!("Expected '=' after '{name}'."),
            );
            return;
        }
        self.bump();

        if !self.at(TokenKind::IntLiteral) {
            self.recover_statement(
                m,
                SyntaxKind::EnumValueDefinition,
                format!("Expected integer enum value after '{name} = '."),
            );
            return;
        }
        let value = self.current_int();
        self.bump_node(SyntaxKind::FieldNumber);

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::EnumValueDefinition,
                format!("Expected ';' after '{name} = {value}'."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::EnumValueDefinition);
    }

    /// Parse `id = 1000;`.
    pub(crate) fn parse_component_id_definition(&mut self) {
        let m = self.start();
        self.bump_node(SyntaxKind::Keyword);

        if !self.at(TokenKind::Eq) {
            self.recover_statement(
                m,
                SyntaxKind::ComponentIdDefinition,
                format!("Expected '=' after '{KW_ID}'."),
            );
            return;
        }
        self.bump();

        if !self.at(TokenKind::IntLiteral) {
            self.recover_statement(
                m,
                SyntaxKind::ComponentIdDefinition,
                format!("Expected integer ID value after '{KW_ID} = '."),
            );
            return;
        }
        let id = self.current_int();
        self.bump_node(SyntaxKind::FieldNumber);

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::ComponentIdDefinition,
                format!("Expected ';' after '{KW_ID} = {id}'."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::ComponentIdDefinition);
    }

    /// Parse `data Type;`.
    pub(crate) fn parse_data_definition(&mut self) {
        let m = self.start();
        self.bump_node(SyntaxKind::Keyword);

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::DataDefinition,
                format!("Expected typename after '{KW_DATA}'."),
            );
            return;
        }
        let type_name = match self.parse_type_name() {
            Ok(type_name) => type_name,
            Err(message) => {
                self.recover_statement(m, SyntaxKind::DataDefinition, message);
                return;
            }
        };

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::DataDefinition,
                format!("Expected ';' after '{KW_DATA} {type_name}'."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::DataDefinition);
    }

    /// Parse `event Type name;`.
    pub(crate) fn parse_event_definition(&mut self) {
        let m = self.start();
        self.bump_node(SyntaxKind::Keyword);

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::EventDefinition,
                format!("Expected typename after '{KW_EVENT}'."),
            );
            return;
        }
        let type_name = match self.parse_type_name() {
            Ok(type_name) => type_name,
            Err(message) => {
                self.recover_statement(m, SyntaxKind::EventDefinition, message);
                return;
            }
        };

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::EventDefinition,
                format!("Expected field name after '{KW_EVENT} {type_name}'."),
            );
            return;
        }
        let event_name = self.current_text();
        self.bump_node(SyntaxKind::FieldName);

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::EventDefinition,
                format!("Expected ';' after '{KW_EVENT} {type_name} {event_name}'."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::EventDefinition);
    }

    /// Parse `command Response name(Request);`.
    pub(crate) fn parse_command_definition(&mut self) {
        let m = self.start();
        self.bump_node(SyntaxKind::Keyword);

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::CommandDefinition,
                format!("Expected command response after '{KW_COMMAND}'."),
            );
            return;
        }
        let response = self.current_text();
        self.bump_node(SyntaxKind::TypeName);

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::CommandDefinition,
                format!("Expected command name after '{KW_COMMAND} {response}'."),
            );
            return;
        }
        let name = self.current_text();
        self.bump_node(SyntaxKind::CommandName);

        if !self.at(TokenKind::LParen) {
            self.recover_statement(
                m,
                SyntaxKind::CommandDefinition,
                format!("Expected '(' after '{KW_COMMAND} {response} {name}'."),
            );
            return;
        }
        self.bump();

        if !self.at(TokenKind::Ident) {
            self.recover_statement(
                m,
                SyntaxKind::CommandDefinition,
                format!("Expected command request after '{KW_COMMAND} {response} {name}('."),
            );
            return;
        }
        let request = self.current_text();
        self.bump_node(SyntaxKind::TypeName);

        if !self.at(TokenKind::RParen) {
            self.recover_statement(
                m,
                SyntaxKind::CommandDefinition,
                format!("Expected ')' after '{KW_COMMAND} {response} {name}({request}'."),
            );
            return;
        }
        self.bump();

        if !self.at(TokenKind::Semicolon) {
            self.recover_statement(
                m,
                SyntaxKind::CommandDefinition,
                format!("Expected ';' after '{KW_COMMAND} {response} {name}({request})'."),
            );
            return;
        }
        self.bump();
        m.complete(self, SyntaxKind::CommandDefinition);
    }
}

//! Syntax tree types for the schema language.
//!
//! This module provides the `rowan`-based syntax tree implementation,
//! including the `SyntaxKind` enum that covers both tokens and composite nodes.

use crate::lexer::TokenKind;
use crate::token_kinds::for_each_token_kind;

macro_rules! define_syntax_kind {
    ($($token:ident),* $(,)?) => {
        /// All syntax node and token kinds in the schema language.
        ///
        /// This enum includes both token kinds (from the lexer) and composite
        /// node kinds (produced by the parser). `Error` doubles as the kind of
        /// lexer error tokens and of recovery nodes.
        // Variants mirror lexer/token names; documenting each would be noisy.
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum SyntaxKind {
            // =========================================================================
            // TOKEN KINDS (mirrors TokenKind)
            // =========================================================================
            $($token,)*

            // COMPOSITE NODE KINDS (produced by parser)
            // =========================================================================
            /// Root node of a schema file
            SchemaFile,

            /// A keyword identifier such as `package` or `component`
            Keyword,

            /// The name introduced by an enum, type or component definition
            DefinitionName,

            /// `package improbable.foo;`
            PackageDefinition,
            PackageName,

            /// `import "improbable/standard_library.schema";`
            ImportDefinition,
            ImportFilename,

            /// `option name = value;`
            OptionDefinition,
            OptionName,
            OptionValue,

            /// A plain type name, also used for annotation types
            TypeName,

            /// A type argument inside `<...>`
            TypeParameterName,

            /// `int32 x = 1;`
            FieldDefinition,
            FieldType,
            FieldName,
            FieldNumber,

            /// `enum Color { RED = 1; }`
            EnumDefinition,

            /// `RED = 1;`
            EnumValueDefinition,

            /// `type Foo { ... }`
            TypeDefinition,

            /// `component Position { ... }`
            ComponentDefinition,

            /// `id = 54;`
            ComponentIdDefinition,

            /// `data Coordinates;`
            DataDefinition,

            /// `event Empty fired;`
            EventDefinition,

            /// `command Response name(Request);`
            CommandDefinition,
            CommandName,

            /// `[Annotation(...)]`
            AnnotationDefinition,

            /// One value inside an annotation
            AnnotationField,

            /// Parenthesized positional value list: `(1, 2)`
            AnnotationFieldArray,

            /// Identifier that starts a constructor call: `foo.Bar(...)`
            ConstructorName,

            /// Dotted enum value reference: `Color.RED`
            EnumReference,
        }
    };
}

for_each_token_kind!(define_syntax_kind);

impl SyntaxKind {
    /// Returns `true` if this is a trivia kind.
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    /// Returns `true` if this is a token kind (not a composite node).
    #[must_use]
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::Eof as u16)
    }

    /// Returns `true` if this is a composite node kind.
    #[must_use]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns `true` for nodes that represent a complete statement or
    /// definition (the units error recovery resynchronizes between).
    #[must_use]
    pub fn is_definition(self) -> bool {
        matches!(
            self,
            Self::PackageDefinition
                | Self::ImportDefinition
                | Self::OptionDefinition
                | Self::FieldDefinition
                | Self::EnumDefinition
                | Self::EnumValueDefinition
                | Self::TypeDefinition
                | Self::ComponentDefinition
                | Self::ComponentIdDefinition
                | Self::DataDefinition
                | Self::EventDefinition
                | Self::CommandDefinition
                | Self::AnnotationDefinition
        )
    }
}

macro_rules! map_token_kinds {
    ($($name:ident),* $(,)?) => {
        impl From<TokenKind> for SyntaxKind {
            fn from(kind: TokenKind) -> Self {
                match kind {
                    $(TokenKind::$name => SyntaxKind::$name,)*
                }
            }
        }
    };
}

for_each_token_kind!(map_token_kinds);

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The language type for schema files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaLanguage {}

macro_rules! define_syntax_kinds {
    ($($token:ident),* $(,)?) => {
        const SYNTAX_KINDS: &[SyntaxKind] = &[
            $(SyntaxKind::$token,)*
            SyntaxKind::SchemaFile,
            SyntaxKind::Keyword,
            SyntaxKind::DefinitionName,
            SyntaxKind::PackageDefinition,
            SyntaxKind::PackageName,
            SyntaxKind::ImportDefinition,
            SyntaxKind::ImportFilename,
            SyntaxKind::OptionDefinition,
            SyntaxKind::OptionName,
            SyntaxKind::OptionValue,
            SyntaxKind::TypeName,
            SyntaxKind::TypeParameterName,
            SyntaxKind::FieldDefinition,
            SyntaxKind::FieldType,
            SyntaxKind::FieldName,
            SyntaxKind::FieldNumber,
            SyntaxKind::EnumDefinition,
            SyntaxKind::EnumValueDefinition,
            SyntaxKind::TypeDefinition,
            SyntaxKind::ComponentDefinition,
            SyntaxKind::ComponentIdDefinition,
            SyntaxKind::DataDefinition,
            SyntaxKind::EventDefinition,
            SyntaxKind::CommandDefinition,
            SyntaxKind::CommandName,
            SyntaxKind::AnnotationDefinition,
            SyntaxKind::AnnotationField,
            SyntaxKind::AnnotationFieldArray,
            SyntaxKind::ConstructorName,
            SyntaxKind::EnumReference,
        ];
    };
}

for_each_token_kind!(define_syntax_kinds);

impl rowan::Language for SchemaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        SYNTAX_KINDS
            .get(raw.0 as usize)
            .copied()
            .unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A syntax node in the schema syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<SchemaLanguage>;

/// A syntax token in the schema syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<SchemaLanguage>;

/// A syntax element (either node or token) in the schema syntax tree.
pub type SyntaxElement = rowan::SyntaxElement<SchemaLanguage>;

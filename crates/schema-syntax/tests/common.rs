//! Shared helpers for parser tests.
#![allow(dead_code, unused_imports)]

pub use schema_syntax::parser::{parse, parse_with_options, Parse, ParseOptions};
#[allow(unused_imports)]
pub use schema_syntax::syntax::{SyntaxKind, SyntaxNode};

/// Helper to format a parse result for snapshot testing.
pub fn snapshot_parse(source: &str) -> String {
    let parsed = parse(source);
    let syntax = parsed.syntax();

    let mut output = String::new();
    format_node(&syntax, &mut output, 0);

    if !parsed.ok() {
        output.push_str("---\nErrors:\n");
        for err in parsed.errors() {
            output.push_str(&format!("  - {}\n", err));
        }
    }

    output
}

fn format_node(node: &SyntaxNode, out: &mut String, depth: usize) {
    let indent = "  ".repeat(depth);

    out.push_str(&format!(
        "{}{:?}@{:?}\n",
        indent,
        node.kind(),
        node.text_range()
    ));

    for child in node.children_with_tokens() {
        match child {
            rowan::NodeOrToken::Node(n) => format_node(&n, out, depth + 1),
            rowan::NodeOrToken::Token(t) => {
                let kind = t.kind();
                if !kind.is_trivia() {
                    out.push_str(&format!(
                        "{}{:?}@{:?} {:?}\n",
                        "  ".repeat(depth + 1),
                        kind,
                        t.text_range(),
                        t.text()
                    ));
                }
            }
        }
    }
}

/// Error messages in the order they were reported.
pub fn error_messages(source: &str) -> Vec<String> {
    parse(source)
        .errors()
        .iter()
        .map(|error| error.message.clone())
        .collect()
}

/// Kinds of the direct child nodes of `node`.
pub fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.children().map(|child| child.kind()).collect()
}

/// First descendant node of `kind`, depth-first.
pub fn find(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.descendants().find(|child| child.kind() == kind)
}

/// Every descendant node of `kind`.
pub fn find_all(node: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
    node.descendants()
        .filter(|child| child.kind() == kind)
        .collect()
}

/// Text of `node` with surrounding trivia trimmed.
pub fn text(node: &SyntaxNode) -> String {
    node.text().to_string().trim().to_string()
}

/// Asserts the tree reproduces the input exactly.
pub fn assert_lossless(source: &str) -> Parse {
    let parsed = parse(source);
    assert_eq!(parsed.syntax().text().to_string(), source);
    assert_eq!(
        u32::from(parsed.syntax().text_range().len()) as usize,
        source.len()
    );
    parsed
}

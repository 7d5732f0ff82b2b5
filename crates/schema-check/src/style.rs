//! Shared styling helpers for CLI output.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

fn should_color() -> bool {
    std::io::stdout().is_terminal()
}

pub fn error(text: &str) -> String {
    if should_color() {
        format!("{}", text.red().bold())
    } else {
        text.to_string()
    }
}

pub fn success(text: &str) -> String {
    if should_color() {
        format!("{}", text.green())
    } else {
        text.to_string()
    }
}

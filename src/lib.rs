#![allow(clippy::module_inception)]

use serde::Serialize;

pub mod config;
pub mod errors;
pub mod frontend;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::{tokenize, Lexer, TokenizeResult};

/// Line (1-based) and column (0-based, in characters) of a token's first
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    #[serde(rename = "position")]
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Returns the text of the 1-based `line` in `source`, without its line
/// terminator. Lines are split on `\n` only, matching the lexer's line count.
pub fn get_line_text(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

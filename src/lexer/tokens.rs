use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashSet, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for keyword in [
            // control flow
            "if", "else", "elif", "while", "for", "return", "break", "continue", "pass",
            "switch", "case", "default", "do", "goto",
            // exceptions and generators
            "try", "except", "finally", "raise", "with", "lambda", "yield",
            // types
            "int", "float", "char", "void", "long", "short", "signed", "unsigned", "double",
            // declarations
            "class", "public", "private", "protected", "def", "import", "from", "as",
            "struct", "union", "enum", "typedef", "const", "static", "extern", "volatile",
            "auto", "register", "sizeof",
        ] {
            set.insert(keyword);
        }
        set
    };
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    Operator,
    Delimiter,
    String,
    Comment,
    Whitespace,
    Invalid,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Invalid => "INVALID",
        }
    }

    /// Whether tokens of this kind are consumed without being emitted.
    pub fn is_skipped(&self) -> bool {
        *self == TokenKind::Whitespace
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified, positioned span of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    #[serde(flatten)]
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{}, '{}', Line: {}, Pos: {}>",
            self.kind, self.value, self.position.line, self.position.column
        )
    }
}

impl Token {
    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

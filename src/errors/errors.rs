use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A positioned, non-fatal lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { character } if character.is_whitespace() => {
                ErrorTip::Suggestion(format!(
                    "only space, tab, newline and carriage return separate tokens, found {:?}",
                    character
                ))
            }
            ErrorImpl::InvalidCharacter { character } if *character == '"' || *character == '\'' => {
                ErrorTip::Suggestion(String::from("unterminated string literal?"))
            }
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lexical Error at Line {}, Position {}: {}",
            self.position.line, self.position.column, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid character '{character}'")]
    InvalidCharacter { character: char },
}

/// Failures of the input boundary. The lexer never produces these.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Empty code input")]
    EmptyInput,
    #[error("File type not allowed. Allowed types: {allowed}")]
    UnsupportedExtension { allowed: String },
    #[error("File too large. Maximum size is {}.", format_limit(.limit))]
    TooLarge { size: usize, limit: usize },
    #[error("File encoding not supported. Please use UTF-8 encoded files.")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {message}")]
    Config { path: String, message: String },
}

fn format_limit(limit: &usize) -> String {
    const MIB: usize = 1024 * 1024;

    if *limit >= MIB && *limit % MIB == 0 {
        format!("{}MB", limit / MIB)
    } else {
        format!("{} bytes", limit)
    }
}

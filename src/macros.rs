//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a regex backed lexical rule
//!
//! These macros reduce boilerplate in the rule table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$position` - The line/column the token starts at
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), Position::new(1, 0));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a lexical rule from a regex pattern.
///
/// The pattern is anchored by the rule itself, so it must not start with `^`.
///
/// # Arguments
///
/// * `$pattern` - The regex source
/// * `$kind` - The TokenKind produced on a match
/// * `$priority` - Higher priorities are tried first
///
/// # Example
///
/// ```ignore
/// let rule = MK_RULE!("[0-9]+", TokenKind::Integer, 7);
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:expr, $kind:expr, $priority:expr) => {
        $crate::lexer::rules::LexicalRule::new(
            Box::new($crate::lexer::rules::RegexMatcher::new($pattern)),
            $kind,
            $priority,
        )
    };
}

//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat stream of classified tokens. It handles:
//!
//! - A priority ordered table of regex backed lexical rules
//! - First-match (not longest-match) ambiguity resolution
//! - Reclassification of reserved words from identifiers to keywords
//! - Line and column tracking, including across multi-line comments and strings
//! - Recovery from unrecognised characters without stopping the scan

pub mod lexer;
pub mod rules;
pub mod tokens;

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    rules::RuleTable,
    tokens::{Token, TokenKind},
};

lazy_static! {
    static ref DEFAULT_LEXER: Lexer = Lexer::default();
}

/// Outcome of one scan. Lexical errors are data here, never a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<String>,
    pub total_tokens: usize,
}

impl TokenizeResult {
    pub fn kind_counts(&self) -> BTreeMap<TokenKind, usize> {
        let mut counts = BTreeMap::new();
        for token in &self.tokens {
            *counts.entry(token.kind).or_insert(0) += 1;
        }
        counts
    }
}

/// The tokenization engine. Holds only the immutable rule table, so one
/// instance can be shared between threads; all scan state lives in a
/// per-call scanner.
#[derive(Debug, Default)]
pub struct Lexer {
    table: RuleTable,
}

impl Lexer {
    pub fn new(table: RuleTable) -> Lexer {
        Lexer { table }
    }

    pub fn tokenize(&self, source: &str) -> TokenizeResult {
        let mut scanner = Scanner::new(source);

        while !scanner.at_eof() {
            match self.table.first_match(source, scanner.pos) {
                Some((rule, matched, end)) => {
                    let mut kind = rule.kind();
                    if kind == TokenKind::Identifier && self.table.is_keyword(matched) {
                        kind = TokenKind::Keyword;
                    }

                    if !kind.is_skipped() {
                        scanner.push(MK_TOKEN!(kind, matched.to_string(), scanner.position()));
                    }

                    scanner.advance_over(matched, end);
                }
                None => scanner.recover(),
            }
        }

        let result = scanner.finish();
        debug!(
            bytes = source.len(),
            tokens = result.total_tokens,
            errors = result.errors.len(),
            "tokenized source"
        );
        result
    }
}

/// Mutable state of a single scan.
struct Scanner<'a> {
    source: &'a str,
    /// Byte offset of the cursor.
    pos: usize,
    /// Characters consumed so far.
    char_pos: usize,
    line: usize,
    /// Character offset of the first character of the current line.
    line_start: usize,
    tokens: Vec<Token>,
    errors: Vec<String>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Scanner {
            source,
            pos: 0,
            char_pos: 0,
            line: 1,
            line_start: 0,
            tokens: vec![],
            errors: vec![],
        }
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.char_pos - self.line_start)
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn advance_over(&mut self, matched: &str, end: usize) {
        let length = matched.chars().count();

        self.line += matched.matches('\n').count();
        if let Some(last_newline) = matched.rfind('\n') {
            let tail = matched[last_newline + 1..].chars().count();
            self.line_start = self.char_pos + length - tail;
        }

        self.char_pos += length;
        self.pos = end;
    }

    /// Emits an INVALID token for the character under the cursor and steps
    /// over it.
    fn recover(&mut self) {
        let Some(character) = self.at() else {
            self.pos = self.source.len();
            return;
        };

        let position = self.position();
        let error = Error::new(ErrorImpl::InvalidCharacter { character }, position);
        warn!("{}", error);

        self.errors.push(error.to_string());
        self.push(MK_TOKEN!(TokenKind::Invalid, character.to_string(), position));

        self.char_pos += 1;
        self.pos += character.len_utf8();
    }

    fn finish(self) -> TokenizeResult {
        TokenizeResult {
            total_tokens: self.tokens.len(),
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}

/// Tokenizes `source` with the built-in rule table.
pub fn tokenize(source: &str) -> TokenizeResult {
    DEFAULT_LEXER.tokenize(source)
}

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::MK_RULE;

use super::tokens::{TokenKind, RESERVED_KEYWORDS};

/// Anchored prefix matching. Implementations must only report a match that
/// starts exactly at `offset` and must never search past it.
pub trait Matcher: Send + Sync {
    /// Returns the matched text and the byte offset just past it.
    fn try_match<'a>(&self, text: &'a str, offset: usize) -> Option<(&'a str, usize)>;
}

#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex. Use [`RegexMatcher::try_new`]
    /// for patterns that are not compile-time constants.
    pub fn new(pattern: &str) -> Self {
        match Self::try_new(pattern) {
            Ok(matcher) => matcher,
            Err(err) => panic!("invalid built-in pattern {pattern:?}: {err}"),
        }
    }

    pub fn try_new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(RegexMatcher {
            regex: Regex::new(&format!("^(?:{pattern})"))?,
        })
    }
}

impl Matcher for RegexMatcher {
    fn try_match<'a>(&self, text: &'a str, offset: usize) -> Option<(&'a str, usize)> {
        let remainder = text.get(offset..)?;
        let found = self.regex.find(remainder)?;

        if found.is_empty() {
            return None;
        }

        Some((found.as_str(), offset + found.end()))
    }
}

pub struct LexicalRule {
    matcher: Box<dyn Matcher>,
    kind: TokenKind,
    priority: i32,
}

impl LexicalRule {
    pub fn new(matcher: Box<dyn Matcher>, kind: TokenKind, priority: i32) -> Self {
        LexicalRule {
            matcher,
            kind,
            priority,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn try_match<'a>(&self, text: &'a str, offset: usize) -> Option<(&'a str, usize)> {
        self.matcher.try_match(text, offset)
    }
}

impl std::fmt::Debug for LexicalRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalRule")
            .field("kind", &self.kind)
            .field("priority", &self.priority)
            .finish()
    }
}

/// The built-in rules in registration order.
pub fn default_rules() -> Vec<LexicalRule> {
    vec![
        // Comments
        MK_RULE!(r"//[^\n]*", TokenKind::Comment, 10),
        MK_RULE!(r"/\*[\s\S]*?\*/", TokenKind::Comment, 10),
        MK_RULE!(r"#[^\n]*", TokenKind::Comment, 10),
        // Strings, backslash escapes anything including the quote
        MK_RULE!(r#""(?:[^"\\]|\\.)*""#, TokenKind::String, 9),
        MK_RULE!(r"'(?:[^'\\]|\\.)*'", TokenKind::String, 9),
        // Numbers
        MK_RULE!(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?", TokenKind::Float, 8),
        MK_RULE!(r"[0-9]+[eE][+-]?[0-9]+", TokenKind::Float, 8),
        MK_RULE!(r"[0-9]+", TokenKind::Integer, 7),
        // Operators
        MK_RULE!(
            r"\+\+|--|==|!=|<=|>=|&&|\|\||<<|>>|\+=|-=|\*=|/=|%=|&=|\|=|\^=|->|::",
            TokenKind::Operator,
            6
        ),
        MK_RULE!(r"[+\-*/%=<>!&|^~]", TokenKind::Operator, 5),
        MK_RULE!(r"[(){}\[\];,.:@]", TokenKind::Delimiter, 4),
        MK_RULE!(r"[a-zA-Z_][a-zA-Z0-9_]*", TokenKind::Identifier, 3),
        MK_RULE!(r"[ \t\n\r]+", TokenKind::Whitespace, 1),
    ]
}

/// Priority ordered lexical rules plus the reserved keyword set. Built once
/// and read-only afterwards.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<LexicalRule>,
    keywords: HashSet<String>,
}

impl RuleTable {
    /// Sorts `rules` by descending priority. The sort is stable so rules
    /// sharing a priority keep their registration order.
    pub fn new(mut rules: Vec<LexicalRule>, keywords: HashSet<String>) -> Self {
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));

        let table = RuleTable { rules, keywords };
        debug!(
            rules = table.rules.len(),
            keywords = table.keyword_count(),
            "built rule table"
        );
        table
    }

    /// The default table extended with `extra` reserved words.
    pub fn with_extra_keywords<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keywords = default_keywords();
        keywords.extend(extra.into_iter().map(Into::into));
        RuleTable::new(default_rules(), keywords)
    }

    pub fn rules(&self) -> &[LexicalRule] {
        &self.rules
    }

    /// Exact, case-sensitive keyword lookup.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// First rule, in priority order, that matches anchored at `offset`.
    ///
    /// A match only counts if it consumes at least one byte and ends on a
    /// character boundary inside `text`; anything else from a matcher is
    /// treated as no match so the scan always advances.
    pub fn first_match<'a>(
        &self,
        text: &'a str,
        offset: usize,
    ) -> Option<(&LexicalRule, &'a str, usize)> {
        self.rules.iter().find_map(|rule| {
            let (_, end) = rule.try_match(text, offset)?;
            if end <= offset || !text.is_char_boundary(end) {
                return None;
            }
            Some((rule, text.get(offset..end)?, end))
        })
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::new(default_rules(), default_keywords())
    }
}

fn default_keywords() -> HashSet<String> {
    RESERVED_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

//! Input boundary around the lexer.
//!
//! Validates what is handed to the tokenizer (size, encoding, file type,
//! emptiness) and renders results as JSON or as a plain-text table. None of
//! these checks exist inside the lexer itself.

use std::{
    fmt::{self, Write},
    fs,
    path::Path,
};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::FrontendConfig,
    errors::errors::{Error, ErrorImpl, ErrorTip, InputError},
    get_line_text,
    lexer::{lexer::Lexer, rules::RuleTable, tokens::TokenKind},
    TokenizeResult,
};

/// JSON body of a successful run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(flatten)]
    pub result: TokenizeResult,
}

/// JSON body of a rejected input.
#[derive(Debug, Serialize)]
pub struct Failure {
    pub success: bool,
    pub error: String,
}

impl From<&InputError> for Failure {
    fn from(error: &InputError) -> Self {
        Failure {
            success: false,
            error: error.to_string(),
        }
    }
}

pub struct Frontend {
    config: FrontendConfig,
    lexer: Lexer,
}

impl Frontend {
    pub fn new(config: FrontendConfig) -> Self {
        let table = RuleTable::with_extra_keywords(config.extra_keywords.iter().cloned());

        Frontend {
            config,
            lexer: Lexer::new(table),
        }
    }

    /// Tokenizes pasted text.
    pub fn tokenize_code(&self, code: &str) -> Result<Report, InputError> {
        self.check_size(code.len())?;
        let result = self.run(code)?;

        Ok(Report {
            success: true,
            filename: None,
            result,
        })
    }

    /// Tokenizes the raw contents of an uploaded or on-disk file.
    pub fn tokenize_file_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<Report, InputError> {
        if !self.config.is_allowed_file(file_name) {
            return Err(InputError::UnsupportedExtension {
                allowed: self.config.allowed_list(),
            });
        }
        self.check_size(bytes.len())?;

        let code = String::from_utf8(bytes)?;
        let result = self.run(&code)?;

        Ok(Report {
            success: true,
            filename: Some(file_name.to_string()),
            result,
        })
    }

    pub fn tokenize_path(&self, path: &Path) -> Result<(Report, String), InputError> {
        let bytes = fs::read(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        // The lexer only sees validated UTF-8, so the lossy copy is exact.
        let source = String::from_utf8_lossy(&bytes).into_owned();
        let report = self.tokenize_file_bytes(&file_name, bytes)?;
        Ok((report, source))
    }

    fn check_size(&self, size: usize) -> Result<(), InputError> {
        if size > self.config.max_input_bytes {
            return Err(InputError::TooLarge {
                size,
                limit: self.config.max_input_bytes,
            });
        }
        Ok(())
    }

    fn run(&self, code: &str) -> Result<TokenizeResult, InputError> {
        if code.trim().is_empty() {
            return Err(InputError::EmptyInput);
        }

        debug!(bytes = code.len(), "tokenizing input");
        let result = self.lexer.tokenize(code);
        info!(
            tokens = result.total_tokens,
            errors = result.errors.len(),
            "tokenization finished"
        );
        Ok(result)
    }
}

/// Renders a numbered token table, the totals, and every lexical error with
/// the offending source line underneath.
pub fn render_table(report: &Report, source: &str) -> String {
    let mut out = String::new();
    // Formatting into a String cannot fail.
    let _ = write_table(&mut out, report, source);
    out
}

fn write_table(out: &mut String, report: &Report, source: &str) -> fmt::Result {
    let result = &report.result;

    if let Some(filename) = &report.filename {
        writeln!(out, "-> {}", filename)?;
    }

    writeln!(out, "{:>5}  {:<10}  {:<30}  {:>5}  {:>5}", "#", "TYPE", "VALUE", "LINE", "POS")?;
    for (index, token) in result.tokens.iter().enumerate() {
        writeln!(
            out,
            "{:>5}  {:<10}  {:<30}  {:>5}  {:>5}",
            index + 1,
            token.kind,
            escape_value(&token.value),
            token.line(),
            token.column()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Total tokens: {}", result.total_tokens)?;
    let counts = result
        .kind_counts()
        .iter()
        .map(|(kind, count)| format!("{}={}", kind, count))
        .collect::<Vec<_>>()
        .join(" ");
    if !counts.is_empty() {
        writeln!(out, "By type: {}", counts)?;
    }
    writeln!(out, "Errors: {}", result.errors.len())?;

    for token in result.tokens.iter().filter(|t| t.kind == TokenKind::Invalid) {
        let Some(character) = token.value.chars().next() else {
            continue;
        };
        let error = Error::new(ErrorImpl::InvalidCharacter { character }, token.position);

        writeln!(out)?;
        match error.get_tip() {
            ErrorTip::None => writeln!(out, "{}", error)?,
            tip => writeln!(out, "{} ({})", error, tip)?,
        }

        /*
           3 | int a = $;
             | --------^
        */
        if let Some(line_text) = get_line_text(source, token.line()) {
            let line_string = token.line().to_string();
            let padding = line_string.len() + 2;
            let arrows = token.column() + 1;

            writeln!(out, "{} | {}", line_string, line_text)?;
            writeln!(out, "{:>padding$} {:->arrows$}", "|", "^")?;
        }
    }

    Ok(())
}

fn escape_value(value: &str) -> String {
    value.escape_debug().to_string()
}

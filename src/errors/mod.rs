//! Error types for the tokenizer.
//!
//! This module defines two disjoint error categories:
//!
//! - Lexical errors: a single unrecognised character, carried as ordinary
//!   data in the scan result together with its line and column
//! - Input errors: problems with the text handed to the tokenizer (empty,
//!   oversized, wrong encoding or file type), raised by the front end only

pub mod errors;

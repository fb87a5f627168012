//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using anchored regex patterns, one token per call
//! - Recognition of the `int`/`float` keywords, identifiers and numerals
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;

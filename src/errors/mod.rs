//! Error types and error handling for the interpreter.
//!
//! Every phase of the pipeline reports failures through the same positioned
//! [`errors::Error`] type:
//!
//! - Lexical errors (unsupported characters, malformed numerals)
//! - Syntax errors (token kind mismatches)
//! - Semantic errors raised by the scope checker
//! - Runtime errors raised by the evaluator
//!
//! Errors are never recovered from; the first one aborts the run.

pub mod errors;

#[cfg(test)]
mod tests;

//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a recursive-descent parser that pulls tokens from
//! the lexer with one token of lookahead and builds the AST for a single
//! function definition. It handles:
//!
//! - The function header and its parameter list
//! - Compound, declaration, assignment and empty statements
//! - Arithmetic expressions with `+ -` below `* /`, left-associative,
//!   and chained prefix `+`/`-`
//!
//! Parsing aborts on the first token that does not fit the grammar.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

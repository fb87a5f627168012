//! Tree-walking evaluation module.
//!
//! This module executes an AST that the scope checker has accepted and
//! produces the program's result together with the final variable bindings.
//!
//! - `value`: numbers tagged as integer or float
//! - `environment`: the insertion-ordered runtime store
//! - `evaluator`: the walk itself
//!
//! Operands of a binary operator must share a kind; mixing an integer and a
//! float is a runtime error, never an implicit conversion.

pub mod environment;
pub mod evaluator;
pub mod value;

#[cfg(test)]
mod tests;

//! Type definitions for the AST.
//!
//! The language knows exactly two numeric types. They appear twice in the
//! tree: as the declared type of a variable or parameter, and as the kind of
//! a numeric literal.

use std::fmt::Display;

/// A type named by a `int` / `float` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Int,
    Float,
}

impl DeclaredType {
    /// The literal kind a value of this type carries at runtime.
    pub fn number_kind(&self) -> NumberKind {
        match self {
            DeclaredType::Int => NumberKind::Int,
            DeclaredType::Float => NumberKind::Float,
        }
    }
}

impl Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclaredType::Int => write!(f, "int"),
            DeclaredType::Float => write!(f, "float"),
        }
    }
}

/// Distinguishes integer from floating-point numerals and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Int,
    Float,
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberKind::Int => write!(f, "int"),
            NumberKind::Float => write!(f, "float"),
        }
    }
}

use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::FUNCTION_KEYWORD;

use super::{
    expressions::{Expr, Variable},
    types::DeclaredType,
};

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declare {
        name: String,
        declared_type: DeclaredType,
    },
    Assign {
        target: Variable,
        value: Expr,
    },
    Compound(Compound),
    /// Produced for a body with no statements.
    Empty,
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Declare {
                name,
                declared_type,
            } => write!(f, "{} {};", declared_type, name),
            Stmt::Assign { target, value } => write!(f, "{} = {};", target, value),
            Stmt::Compound(compound) => write!(f, "{}", compound),
            Stmt::Empty => Ok(()),
        }
    }
}

/// A braced, ordered list of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    pub statements: Vec<Stmt>,
}

impl Compound {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Display for Compound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for statement in self.iter() {
            write!(f, " {}", statement)?;
        }
        write!(f, " }}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub declared_type: DeclaredType,
    pub name: String,
}

impl Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.declared_type, self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Compound,
}

impl Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self
            .params
            .iter()
            .map(|param| param.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "{} {}({}) {}", FUNCTION_KEYWORD, self.name, params, self.body)
    }
}

/// The root of the tree. A program is exactly one function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub function: FunctionDef,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.function)
    }
}

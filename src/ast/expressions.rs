use std::fmt::Display;

use super::types::NumberKind;

/// Binary arithmetic operators, in the order `+ - * /`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Sub => write!(f, "-"),
            BinaryOperator::Mul => write!(f, "*"),
            BinaryOperator::Div => write!(f, "/"),
        }
    }
}

/// Prefix operators. Only `+` and `-` may be applied to a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Add,
    Sub,
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Add => write!(f, "+"),
            UnaryOperator::Sub => write!(f, "-"),
        }
    }
}

/// Variable Reference
/// A named variable, either read in an expression or written by an assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeral, stored as written in the source.
    NumberLiteral { kind: NumberKind, text: String },
    Variable(Variable),
    BinaryOp {
        op: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
}

impl Expr {
    pub fn int(text: impl Into<String>) -> Self {
        Expr::NumberLiteral {
            kind: NumberKind::Int,
            text: text.into(),
        }
    }

    pub fn float(text: impl Into<String>) -> Self {
        Expr::NumberLiteral {
            kind: NumberKind::Float,
            text: text.into(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(Variable::new(name))
    }

    pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOperator, operand: Expr) -> Self {
        Expr::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }
}

// Binary operations are always parenthesised so the printed form re-parses to the same tree.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::NumberLiteral { text, .. } => write!(f, "{}", text),
            Expr::Variable(variable) => write!(f, "{}", variable),
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::UnaryOp { op, operand } => write!(f, "{}{}", op, operand),
        }
    }
}

use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Creates an error for a pass that has no source positions to report.
    pub fn unpositioned(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl, Position::null())
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::UnexpectedTokenDetailed { .. } => {
                ErrorKind::Syntax
            }
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::UnknownScope { .. }
            | ErrorImpl::ScopeAlreadyExists { .. }
            | ErrorImpl::ExitRootScope => ErrorKind::Semantic,
            ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::VariableNotBound { .. }
            | ErrorImpl::VariableAlreadyBound { .. } => ErrorKind::Runtime,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::UnknownScope { .. } => "UnknownScope",
            ErrorImpl::ScopeAlreadyExists { .. } => "ScopeAlreadyExists",
            ErrorImpl::ExitRootScope => "ExitRootScope",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::VariableNotBound { .. } => "VariableNotBound",
            ErrorImpl::VariableAlreadyBound { .. } => "VariableAlreadyBound",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, does it contain more than one decimal point?",
                token
            )),
            ErrorImpl::UnexpectedToken { expected, received } => ErrorTip::Suggestion(format!(
                "Expected `{}`, found `{}`",
                expected, received
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::VariableAlreadyDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is declared more than once",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is undefined, declare it before use",
                variable
            )),
            ErrorImpl::UnknownScope { scope } => {
                ErrorTip::Suggestion(format!("Scope `{}` does not exist", scope))
            }
            ErrorImpl::ScopeAlreadyExists { scope } => {
                ErrorTip::Suggestion(format!("Scope `{}` already exists", scope))
            }
            ErrorImpl::ExitRootScope => {
                ErrorTip::Suggestion(String::from("Cannot exit the global scope"))
            }
            ErrorImpl::TypeMatchError {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Operands of `{}` must have the same type, found `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::VariableNotBound { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` does not exist", variable))
            }
            ErrorImpl::VariableAlreadyBound { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already exists", variable))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.internal_error)
    }
}

impl std::error::Error for Error {}

/// The phase of the pipeline an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
    Runtime,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "LexicalError"),
            ErrorKind::Syntax => write!(f, "SyntaxError"),
            ErrorKind::Semantic => write!(f, "SemanticError"),
            ErrorKind::Runtime => write!(f, "RuntimeError"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unsupported character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("malformed numeral: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token: expected {expected}, got {received}")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
    },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("variable {variable:?} is declared more than once")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} is undefined")]
    VariableNotDeclared { variable: String },
    #[error("scope {scope:?} does not exist")]
    UnknownScope { scope: String },
    #[error("scope {scope:?} already exists")]
    ScopeAlreadyExists { scope: String },
    #[error("cannot exit the global scope")]
    ExitRootScope,
    #[error("cannot apply {operator} to {left} and {right}")]
    TypeMatchError {
        operator: String,
        left: String,
        right: String,
    },
    #[error("variable {variable:?} does not exist")]
    VariableNotBound { variable: String },
    #[error("variable {variable:?} already exists")]
    VariableAlreadyBound { variable: String },
}

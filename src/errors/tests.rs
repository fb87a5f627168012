//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.c".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.c".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semi,
            received: TokenKind::RBrace,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_unpositioned_error() {
    let error = Error::unpositioned(ErrorImpl::VariableNotDeclared {
        variable: "x".to_string(),
    });

    assert!(error.get_position().is_null());
    assert_eq!(error.kind(), ErrorKind::Semantic);
}

#[test]
fn test_malformed_numeral_is_lexical() {
    let error = Error::unpositioned(ErrorImpl::NumberParseError {
        token: "1.2.3".to_string(),
    });

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_scope_errors_are_semantic() {
    for error_impl in [
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        ErrorImpl::UnknownScope {
            scope: "inner".to_string(),
        },
        ErrorImpl::ScopeAlreadyExists {
            scope: "inner".to_string(),
        },
        ErrorImpl::ExitRootScope,
    ] {
        assert_eq!(Error::unpositioned(error_impl).kind(), ErrorKind::Semantic);
    }
}

#[test]
fn test_evaluation_errors_are_runtime() {
    for error_impl in [
        ErrorImpl::TypeMatchError {
            operator: "+".to_string(),
            left: "int".to_string(),
            right: "float".to_string(),
        },
        ErrorImpl::VariableNotBound {
            variable: "x".to_string(),
        },
        ErrorImpl::VariableAlreadyBound {
            variable: "x".to_string(),
        },
    ] {
        assert_eq!(Error::unpositioned(error_impl).kind(), ErrorKind::Runtime);
    }
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.c".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semi,
            received: TokenKind::RBrace,
        },
        Position(0, Rc::new("test.c".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `Semi`, found `RBrace`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::unpositioned(ErrorImpl::VariableNotBound {
        variable: "z".to_string(),
    });

    assert_eq!(error.to_string(), "RuntimeError: variable \"z\" does not exist");
}

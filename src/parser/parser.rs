//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct and the parsing entry point.
//! The parser pulls tokens from the lexer on demand and keeps exactly one
//! token of lookahead; the grammar productions live in `stmt`, `expr` and
//! `types`, one function per non-terminal.

use log::debug;

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_program;

/// The parser state: the token source and the current lookahead token.
pub struct Parser {
    /// The lexer tokens are pulled from
    lexer: Lexer,
    /// The lookahead token
    current: Token,
}

impl Parser {
    /// Creates a new Parser, reading the first lookahead token.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer positioned at the start of the source
    ///
    /// # Returns
    ///
    /// The parser, or the lexical error raised by the first token.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Pulls the next token from the lexer and returns the previous one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `error` - Optional custom error to return if expectation fails
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let kind = self.current_token_kind();
        if kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected_kind,
                        received: kind,
                    },
                    self.get_position(),
                )),
            }
        } else {
            self.advance()
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds a syntax error about the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        let token = if self.current.lexeme.is_empty() {
            self.current.kind.to_string()
        } else {
            self.current.lexeme.clone()
        };

        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token,
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }
}

/// Parses one program from the lexer's token stream.
///
/// This is the main entry point for parsing. Parsing stops at the first
/// mismatch; there is no error recovery.
///
/// # Arguments
///
/// * `lexer` - The lexer over the program source
///
/// # Returns
///
/// The program root, or the first lexical or syntax error encountered.
pub fn parse(lexer: Lexer) -> Result<Program, Error> {
    let mut parser = Parser::new(lexer)?;

    let program = parse_program(&mut parser)?;
    parser.expect(TokenKind::EOF)?;

    debug!(
        "parsed program with {} top-level statement(s)",
        program.function.body.statements.len()
    );

    Ok(program)
}

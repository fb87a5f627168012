use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("int", TokenKind::Int);
        map.insert("float", TokenKind::Float);
        map
    };
}

/// The word that opens a function definition.
///
/// Recognised by the parser from an `Ident` token's text rather than by a
/// token kind of its own.
pub const FUNCTION_KEYWORD: &str = "function";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Type keywords
    Int,
    Float,

    IntConst,
    FloatConst,

    Mul,
    Div,
    Add,
    Sub,

    EOF,

    LParen,
    RParen,
    LBrace,
    RBrace,
    Semi,
    Assign, // =
    Comma,

    Ident,

    // Reserved, never produced by the lexer
    FuncDef,
    Arg,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nlexeme: {}}}", self.kind, self.lexeme)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// One-line rendering used by the token echo of the binary.
    pub fn debug_line(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Ident,
            TokenKind::IntConst,
            TokenKind::FloatConst,
        ]) {
            format!("{} ({})", self.kind, self.lexeme)
        } else {
            format!("{} ()", self.kind)
        }
    }
}

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        expressions::{BinaryOperator, UnaryOperator},
        types::DeclaredType,
    },
    lexer::tokens::TokenKind,
};

// Operator tables, one per precedence level of the grammar
lazy_static! {
    pub static ref ADDITIVE_LOOKUP: HashMap<TokenKind, BinaryOperator> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Add, BinaryOperator::Add);
        map.insert(TokenKind::Sub, BinaryOperator::Sub);
        map
    };
    pub static ref MULTIPLICATIVE_LOOKUP: HashMap<TokenKind, BinaryOperator> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Mul, BinaryOperator::Mul);
        map.insert(TokenKind::Div, BinaryOperator::Div);
        map
    };
    pub static ref UNARY_LOOKUP: HashMap<TokenKind, UnaryOperator> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Add, UnaryOperator::Add);
        map.insert(TokenKind::Sub, UnaryOperator::Sub);
        map
    };
    pub static ref TYPE_LOOKUP: HashMap<TokenKind, DeclaredType> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Int, DeclaredType::Int);
        map.insert(TokenKind::Float, DeclaredType::Float);
        map
    };
}

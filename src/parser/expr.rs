use log::trace;

use crate::{
    ast::{
        expressions::{Expr, Variable},
        types::NumberKind,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{ADDITIVE_LOOKUP, MULTIPLICATIVE_LOOKUP, UNARY_LOOKUP},
    parser::Parser,
};

/// Expr := Term (("+"|"-") Term)*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    // Fold into a left-leaning chain
    while let Some(op) = ADDITIVE_LOOKUP.get(&parser.current_token_kind()).copied() {
        parser.advance()?;
        let right = parse_term(parser)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

/// Term := Factor (("*"|"/") Factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    while let Some(op) = MULTIPLICATIVE_LOOKUP.get(&parser.current_token_kind()).copied() {
        parser.advance()?;
        let right = parse_factor(parser)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

/// Factor := ("+"|"-") Factor | INT_CONST | FLOAT_CONST | "(" Expr ")" | IDENT
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    trace!("parsing factor at {}", token_kind);

    if let Some(op) = UNARY_LOOKUP.get(&token_kind).copied() {
        parser.advance()?;
        let operand = parse_factor(parser)?;
        return Ok(Expr::unary(op, operand));
    }

    match token_kind {
        TokenKind::IntConst => Ok(Expr::NumberLiteral {
            kind: NumberKind::Int,
            text: parser.advance()?.lexeme,
        }),
        TokenKind::FloatConst => Ok(Expr::NumberLiteral {
            kind: NumberKind::Float,
            text: parser.advance()?.lexeme,
        }),
        TokenKind::LParen => parse_grouping_expr(parser),
        _ => Ok(Expr::Variable(parse_variable(parser)?)),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::LParen)?;
    let expr = parse_expr(parser)?;
    parser.expect(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_variable(parser: &mut Parser) -> Result<Variable, Error> {
    let token = parser.expect(TokenKind::Ident)?;
    Ok(Variable::new(token.lexeme))
}

use log::trace;

use crate::{
    ast::statements::{Compound, FunctionDef, Param, Program, Stmt},
    errors::errors::Error,
    lexer::tokens::{TokenKind, FUNCTION_KEYWORD},
};

use super::{
    expr::{parse_expr, parse_variable},
    parser::Parser,
    types::parse_type,
};

/// Program := FunctionDef
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    Ok(Program {
        function: parse_function_def(parser)?,
    })
}

/// FunctionDef := "function" IDENT "(" Params ")" Compound
pub fn parse_function_def(parser: &mut Parser) -> Result<FunctionDef, Error> {
    let token = parser.current_token();
    if token.kind != TokenKind::Ident || token.lexeme != FUNCTION_KEYWORD {
        return Err(parser.unexpected("expected `function`"));
    }
    parser.advance()?;

    let name = parser.expect(TokenKind::Ident)?.lexeme;
    trace!("parsing function `{}`", name);

    parser.expect(TokenKind::LParen)?;
    let params = parse_params(parser)?;
    parser.expect(TokenKind::RParen)?;

    let body = parse_compound_stmt(parser)?;

    Ok(FunctionDef { name, params, body })
}

/// Params := Param ("," Param)*
pub fn parse_params(parser: &mut Parser) -> Result<Vec<Param>, Error> {
    let mut params = vec![parse_param(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        params.push(parse_param(parser)?);
    }

    Ok(params)
}

/// Param := Type IDENT
pub fn parse_param(parser: &mut Parser) -> Result<Param, Error> {
    let declared_type = parse_type(parser)?;
    let name = parser.expect(TokenKind::Ident)?.lexeme;

    Ok(Param {
        declared_type,
        name,
    })
}

/// Compound := "{" Stmt+ "}"
pub fn parse_compound_stmt(parser: &mut Parser) -> Result<Compound, Error> {
    parser.expect(TokenKind::LBrace)?;
    let statements = parse_statement_list(parser)?;
    parser.expect(TokenKind::RBrace)?;

    Ok(Compound { statements })
}

/// At least one statement; an immediately closed body yields a single `Empty`.
pub fn parse_statement_list(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = vec![parse_stmt(parser)?];

    while parser.current_token_kind() != TokenKind::RBrace {
        statements.push(parse_stmt(parser)?);
    }

    Ok(statements)
}

/// Stmt := Compound | AssignStmt | DeclareStmt | EmptyStmt
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::LBrace => Ok(Stmt::Compound(parse_compound_stmt(parser)?)),
        TokenKind::Ident => parse_assign_stmt(parser),
        TokenKind::Int | TokenKind::Float => parse_declare_stmt(parser),
        TokenKind::RBrace => Ok(Stmt::Empty),
        _ => Err(parser.unexpected("expected a statement")),
    }
}

/// DeclareStmt := Type IDENT ";"
pub fn parse_declare_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let declared_type = parse_type(parser)?;
    let name = parse_variable(parser)?.name;
    parser.expect(TokenKind::Semi)?;

    trace!("parsed declaration of `{}`", name);

    Ok(Stmt::Declare {
        name,
        declared_type,
    })
}

/// AssignStmt := IDENT "=" Expr ";"
pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parse_variable(parser)?;
    parser.expect(TokenKind::Assign)?;
    let value = parse_expr(parser)?;
    parser.expect(TokenKind::Semi)?;

    trace!("parsed assignment to `{}`", target.name);

    Ok(Stmt::Assign { target, value })
}

//! Type parsing implementation.
//!
//! The only types are the `int` and `float` keywords, so a type is a
//! single token looked up in [`TYPE_LOOKUP`].

use crate::{ast::types::DeclaredType, errors::errors::Error};

use super::{lookups::TYPE_LOOKUP, parser::Parser};

/// Type := "int" | "float"
pub fn parse_type(parser: &mut Parser) -> Result<DeclaredType, Error> {
    match TYPE_LOOKUP.get(&parser.current_token_kind()).copied() {
        Some(declared_type) => {
            parser.advance()?;
            Ok(declared_type)
        }
        None => Err(parser.unexpected("expected a type (`int` or `float`)")),
    }
}

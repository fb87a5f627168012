#![allow(clippy::module_inception)]

use std::rc::Rc;

use log::debug;

use crate::{
    errors::errors::{Error, ErrorTip},
    evaluator::evaluator::{evaluate, Evaluation},
    lexer::lexer::Lexer,
    parser::parser::parse,
    scope_checker::scope_checker::check_scopes,
};

pub mod ast;
pub mod config;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope_checker;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn is_null(&self) -> bool {
        self.1.as_str() == "<null>"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline over `source`: lexing, parsing, the static scope
/// check and finally evaluation. The first error aborts the run.
pub fn run(source: String, file: Option<String>) -> Result<Evaluation, Error> {
    let program = parse(Lexer::new(source, file))?;
    debug!("parsed function `{}`", program.function.name);

    // The scope tree only exists to reject the program; evaluation keeps its own store.
    check_scopes(&program)?;

    evaluate(&program)
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within that line.
/// The end of input maps to the end of the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    if pos == content.len() {
        let (index, line) = content.split_inclusive('\n').enumerate().last()?;
        return Some((index + 1, line.to_string(), line.trim_end_matches('\n').len()));
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    /*
        Error: SyntaxError (Expected `Semi`, found `RBrace`)
        -> foobar.txt
           |
        3  | y = 5 }
           | ------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.kind());
    } else {
        eprintln!("Error: {} ({})", error.kind(), error.get_tip());
    }
    eprintln!("-> {}", file);

    let position = error.get_position();
    if position.is_null() {
        return;
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, _) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = caret_column(&line_text, line_pos);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

/// Character column of the caret for byte offset `line_pos`, counted after
/// the leading whitespace that the snippet strips.
fn caret_column(line_text: &str, line_pos: usize) -> usize {
    let prefix = line_text.get(..line_pos).unwrap_or(line_text);
    prefix.trim_start().chars().count() + 1
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start();
    let removed = string.len() - trimmed.len();

    (String::from(trimmed), removed)
}

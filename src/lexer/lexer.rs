use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Receives the matched text; returns `None` for skipped input such as whitespace.
pub type TextHandler = fn(&mut Lexer, String) -> Result<Option<Token>, Error>;

/// Optional hook invoked with every token the lexer hands out.
pub type TokenObserver = Box<dyn FnMut(&Token)>;

pub struct RegexPattern {
    regex: Regex,
    handler: TextHandler,
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the current position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\p{Alphabetic}[\p{Alphabetic}\p{N}]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9][0-9.]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{") },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}") },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semi, ";") },
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Div, "/") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Mul, "*") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Add, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Sub, "-") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
    ];
}

/// Forward-only scanner producing one token per `next_token` call.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    observer: Option<TokenObserver>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: TokenObserver) {
        self.observer = Some(observer);
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes of input.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    /// Scans the next token. Once the input is exhausted every call returns `EOF`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                let token = MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0));
                return Ok(self.emit(token));
            }

            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(self.remainder())
                    .map(|matched| (pattern.handler, matched.as_str().to_string()))
            });

            let Some((handler, matched)) = found else {
                let token = self.remainder().chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, self.position()));
            };

            if let Some(token) = handler(self, matched)? {
                return Ok(self.emit(token));
            }
        }
    }

    fn emit(&mut self, token: Token) -> Token {
        trace!("lexed {} at {}", token.debug_line(), token.span.start.0);

        if let Some(observer) = self.observer.as_mut() {
            observer(&token);
        }

        token
    }
}

fn skip_handler(lexer: &mut Lexer, matched: String) -> Result<Option<Token>, Error> {
    lexer.advance_n(matched.len());
    Ok(None)
}

fn number_handler(lexer: &mut Lexer, matched: String) -> Result<Option<Token>, Error> {
    let kind = if matched.parse::<i64>().is_ok() {
        TokenKind::IntConst
    } else if matched.parse::<f64>().is_ok() {
        TokenKind::FloatConst
    } else {
        return Err(Error::new(ErrorImpl::NumberParseError { token: matched }, lexer.position()));
    };

    let token = MK_TOKEN!(kind, matched.clone(), lexer.span_of(matched.len()));
    lexer.advance_n(matched.len());

    Ok(Some(token))
}

fn symbol_handler(lexer: &mut Lexer, matched: String) -> Result<Option<Token>, Error> {
    let kind = RESERVED_LOOKUP
        .get(matched.as_str())
        .copied()
        .unwrap_or(TokenKind::Ident);

    let token = MK_TOKEN!(kind, matched.clone(), lexer.span_of(matched.len()));
    lexer.advance_n(matched.len());

    Ok(Some(token))
}

/// Scans the whole source, returning every token up to and including `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let is_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if is_eof {
            return Ok(tokens);
        }
    }
}

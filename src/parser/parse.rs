//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! the error type, token-window helpers, and the [`Parser::parse_program`]
//! entry point.
//!
//! # Parser Architecture
//!
//! The parser keeps a two-token window (`cur_token`, `peek_token`) over the
//! lexer and advances both in lockstep. Grammar rules live in sibling modules
//! that extend [`Parser`] with further `impl` blocks:
//! - `statements`: `let`, `return`, and expression statements
//! - `expressions`: Pratt parsing via prefix/infix dispatch tables
//!
//! Errors never abort the parse. Each problem is appended to an ordered list
//! and the offending statement is dropped, so callers always receive a
//! [`Program`] alongside whatever diagnostics were collected.

use crate::parser::ast::*;
use crate::parser::expressions::{InfixParseFn, PrefixParseFn};
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace};

/// A syntactic problem recorded while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),

    /// Lexical error forwarded from an ILLEGAL token.
    #[error("illegal token: {0}")]
    Illegal(String),
}

/// Pratt parser for Monkey programs
pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
    pub(crate) errors: Vec<ParseError>,
    /// Whether an ILLEGAL `cur_token` / `peek_token` has already been reported.
    pub(crate) cur_reported: bool,
    peek_reported: bool,
    pub(crate) prefix_parse_fns: FxHashMap<TokenKind, PrefixParseFn<'a>>,
    pub(crate) infix_parse_fns: FxHashMap<TokenKind, InfixParseFn<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Build a parser over an already configured lexer.
    pub fn from_lexer(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
            cur_reported: false,
            peek_reported: false,
            prefix_parse_fns: FxHashMap::default(),
            infix_parse_fns: FxHashMap::default(),
        };
        parser.register_parse_fns();

        // Fill both lookahead slots
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Parse the entire program
    ///
    /// Always completes; check [`Parser::errors`] afterwards to find out
    /// whether any statements were dropped.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                trace!(statement = %stmt, "parsed statement");
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    /// Diagnostics collected so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Rendered form of [`Parser::errors`].
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    // Helper methods

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
        self.cur_reported = std::mem::take(&mut self.peek_reported);
    }

    pub(crate) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance if the peek token has the given kind, otherwise record an error
    /// and stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = match self.peek_token.kind {
            TokenKind::Illegal if self.peek_reported => return,
            TokenKind::Illegal => {
                self.peek_reported = true;
                ParseError::Illegal(self.peek_token.literal.clone())
            }
            found => ParseError::UnexpectedToken { expected, found },
        };
        self.record(error);
    }

    pub(crate) fn record(&mut self, error: ParseError) {
        debug!(%error, "parse error");
        self.errors.push(error);
    }

    /// Discard tokens up to the end of the current statement.
    ///
    /// Leaves `cur_token` on the terminating `;` (or EOF) so the program
    /// loop's own advance steps past it.
    pub(crate) fn skip_statement(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }
}

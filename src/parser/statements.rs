//! Statement parsing implementation
//!
//! Statements are selected by their leading token:
//! - `let <ident> = <expr>` builds a [`LetStatement`]
//! - `return <expr>` builds a [`ReturnStatement`]
//! - anything else is parsed as an expression and wrapped in an
//!   [`ExpressionStatement`]
//!
//! A trailing `;` is optional and consumed when present. On entry
//! `cur_token` is the first token of the statement; on exit it is the last
//! token that belongs to it.

use crate::parser::ast::*;
use crate::parser::expressions::Precedence;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;
use tracing::debug;

impl<'a> Parser<'a> {
    /// Parse a statement, `None` if it had to be dropped
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            self.abandon_let();
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            self.abandon_let();
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Let(LetStatement {
            token,
            name,
            value: Some(value),
        }))
    }

    fn abandon_let(&mut self) {
        debug!("skipping malformed let statement");
        self.skip_statement();
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        self.next_token();
        let return_value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Return(ReturnStatement {
            token,
            return_value: Some(return_value),
        }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}

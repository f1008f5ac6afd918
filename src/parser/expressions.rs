//! Expression parsing implementation
//!
//! Expressions are parsed with top-down operator precedence (Pratt parsing).
//! Every token kind that can start an expression has a prefix parse function,
//! and every token kind that can continue one as an operator has an infix
//! parse function plus a [`Precedence`]. Both tables are keyed by
//! [`TokenKind`] and filled once when the parser is built.
//!
//! # Precedence
//!
//! | Level         | Operators          |
//! |---------------|--------------------|
//! | `Equals`      | `==` `!=`          |
//! | `LessGreater` | `<` `>`            |
//! | `Sum`         | `+` `-`            |
//! | `Product`     | `*` `/`            |
//! | `Prefix`      | unary `!` `-`      |
//! | `Call`        | `(` after a callee |
//!
//! All binary operators are left-associative: the right operand is parsed
//! with the operator's own precedence as the minimum binding power, so an
//! equal-precedence operator to its right stops the inner loop.

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser};
use crate::parser::token::TokenKind;

/// Handler for a token that begins an expression; `cur_token` is that token.
pub(crate) type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;

/// Handler for an operator token; `cur_token` is the operator and the
/// argument is the already-parsed left operand.
pub(crate) type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

/// Binding power, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

impl Precedence {
    /// Binding power of `kind` in infix position.
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

impl<'a> Parser<'a> {
    pub(crate) fn register_parse_fns(&mut self) {
        self.register_prefix(TokenKind::Ident, Self::parse_identifier);
        self.register_prefix(TokenKind::Int, Self::parse_integer_literal);
        self.register_prefix(TokenKind::True, Self::parse_boolean);
        self.register_prefix(TokenKind::False, Self::parse_boolean);
        self.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            self.register_infix(kind, Self::parse_infix_expression);
        }
        self.register_infix(TokenKind::LParen, Self::parse_call_expression);
    }

    fn register_prefix(&mut self, kind: TokenKind, parse_fn: PrefixParseFn<'a>) {
        self.prefix_parse_fns.insert(kind, parse_fn);
    }

    fn register_infix(&mut self, kind: TokenKind, parse_fn: InfixParseFn<'a>) {
        self.infix_parse_fns.insert(kind, parse_fn);
    }

    /// Parse an expression whose operators all bind tighter than `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.cur_token.kind).copied() else {
            self.no_prefix_parse_fn_error();
            return None;
        };
        let mut left = prefix(self)?;

        while precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns.get(&self.peek_token.kind).copied() else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    fn no_prefix_parse_fn_error(&mut self) {
        let error = match self.cur_token.kind {
            // Already recorded while it was the peek token
            TokenKind::Illegal if self.cur_reported => return,
            TokenKind::Illegal => ParseError::Illegal(self.cur_token.literal.clone()),
            kind => ParseError::NoPrefixParseFn(kind),
        };
        self.record(error);
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral {
                token: self.cur_token.clone(),
                value,
            })),
            Err(_) => {
                self.record(ParseError::InvalidInteger(self.cur_token.literal.clone()));
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(Boolean {
            token: self.cur_token.clone(),
            value: self.cur_token_is(TokenKind::True),
        }))
    }

    /// `!<expr>` or `-<expr>`
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// `( <expr> )`, yielding the inner expression itself
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expr)
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(InfixExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// Comma-separated arguments up to and including the closing `)`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut args = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(args);
        }

        self.next_token();
        args.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            args.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(args)
    }
}

//! # Introduction
//!
//! `monkey-syntax` is the front end of a Monkey interpreter: it tokenizes
//! source text and parses it into a typed AST with correct operator
//! precedence and associativity. Nothing is evaluated.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program (+ errors)
//! ```
//!
//! 1. [`parser::lexer`] — a pull-based state machine producing one
//!    [`parser::token::Token`] per request; lexical errors travel in the
//!    stream as ILLEGAL tokens.
//! 2. [`parser::parse`] — a Pratt parser that always returns a
//!    [`parser::ast::Program`] and collects every problem it meets in
//!    [`parser::parse::Parser::errors`].
//!
//! ```
//! use monkey_syntax::parser::parse::Parser;
//!
//! let mut parser = Parser::new("a + b * c");
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "(a + (b * c))");
//! ```

pub mod parser;

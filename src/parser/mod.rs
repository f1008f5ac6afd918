//! Monkey source code parser
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with errors accumulated rather than raised
//! - [`ast`]: AST node definitions and their canonical rendering
//!
//! # Supported Language
//!
//! - Statements: `let <ident> = <expr>;`, `return <expr>;`, expression statements
//! - Expressions: identifiers, integers, booleans, prefix `!`/`-`, infix
//!   `+ - * / < > == !=`, parenthesized groups, and calls
//!
//! # Parser Implementation
//!
//! The lexer is a hand-written state machine with a small token queue. The
//! parser is a Pratt parser driven by prefix/infix dispatch tables keyed by
//! token kind. No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use expressions::Precedence;

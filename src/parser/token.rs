//! Token kinds and the keyword table
//!
//! A [`Token`] pairs a closed [`TokenKind`] classification with the exact
//! source text it was scanned from. Keywords are resolved through
//! [`lookup_ident`], backed by a process-wide table built on first use.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Classification of a scanned lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    Slash,    // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Maps an operator or delimiter lexeme to its kind.
    ///
    /// Operator kinds are named by their own text, so the lexer classifies a
    /// matched symbol by handing its lexeme straight to this lookup.
    pub fn from_symbol(symbol: &str) -> Option<TokenKind> {
        let kind = match symbol {
            "=" => TokenKind::Assign,
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "!" => TokenKind::Bang,
            "*" => TokenKind::Asterisk,
            "/" => TokenKind::Slash,
            "<" => TokenKind::Lt,
            ">" => TokenKind::Gt,
            "==" => TokenKind::Eq,
            "!=" => TokenKind::NotEq,
            "," => TokenKind::Comma,
            ";" => TokenKind::Semicolon,
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        };
        f.write_str(name)
    }
}

/// A classified lexeme.
///
/// For [`TokenKind::Illegal`] the literal holds the lexer's diagnostic rather
/// than raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// End-of-input marker, literal is empty.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        let mut table = FxHashMap::default();
        table.insert("fn", TokenKind::Function);
        table.insert("let", TokenKind::Let);
        table.insert("true", TokenKind::True);
        table.insert("false", TokenKind::False);
        table.insert("if", TokenKind::If);
        table.insert("else", TokenKind::Else);
        table.insert("return", TokenKind::Return);
        table
    })
}

/// Classify a scanned word as a keyword, or [`TokenKind::Ident`] otherwise.
pub fn lookup_ident(ident: &str) -> TokenKind {
    keywords().get(ident).copied().unwrap_or(TokenKind::Ident)
}

//! Lexer (tokenizer) for Monkey source code
//!
//! The lexer is a small state machine. Each [`State`] inspects the cursor,
//! pushes zero or more tokens onto an internal queue and names the state to
//! run next; `None` means scanning is finished. [`Lexer::next_token`] drives
//! the machine until the queue has something to hand out, so the parser
//! always pulls exactly one token at a time and never sees reordering.
//!
//! Lexical errors are not reported out of band: they surface as
//! [`TokenKind::Illegal`] tokens whose literal carries the diagnostic.

use super::token::{lookup_ident, Token, TokenKind};
use std::collections::VecDeque;
use tracing::trace;

/// Number of tokens a single scanning step may queue before the next pull.
pub const TOKEN_BUFFER_CAPACITY: usize = 2;

const DIGITS: &str = "0123456789";

/// What the lexer does after emitting an ILLEGAL token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Stop scanning; every later call yields EOF.
    #[default]
    Halt,
    /// Keep scanning from just past the offending input.
    Resume,
}

/// Scanning modes of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Lex,
    Identifier,
    Number,
}

/// Lexer for Monkey source code
///
/// `start..pos` delimits the lexeme being accumulated and `width` is the byte
/// width of the last character read, which allows a single [`Lexer::backup`].
pub struct Lexer<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    width: usize,
    state: Option<State>,
    pending: VecDeque<Token>,
    recovery: Recovery,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source string.
    pub fn new(input: &'a str) -> Self {
        Self::with_recovery(input, Recovery::default())
    }

    /// Create a lexer with an explicit policy for illegal input.
    pub fn with_recovery(input: &'a str, recovery: Recovery) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            width: 0,
            state: Some(State::Lex),
            pending: VecDeque::with_capacity(TOKEN_BUFFER_CAPACITY),
            recovery,
        }
    }

    /// Produce the next token, running the state machine as needed.
    ///
    /// Once input is exhausted this returns an EOF token on every call.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token;
            }

            match self.state {
                Some(state) => self.state = self.step(state),
                None => return Token::eof(),
            }
        }
    }

    /// Tokenize the remaining input, up to and including the first EOF.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }

    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Lex => self.lex(),
            State::Identifier => self.lex_identifier(),
            State::Number => self.lex_number(),
        }
    }

    /// Default state: operators, delimiters, and dispatch to the word states.
    fn lex(&mut self) -> Option<State> {
        self.skip_whitespace();

        if let Some(kind) = self.accept_symbol() {
            self.emit(kind);
            return Some(State::Lex);
        }

        match self.peek() {
            Some(ch) if is_alpha(ch) => Some(State::Identifier),
            Some(ch) if ch.is_ascii_digit() => Some(State::Number),
            Some(ch) => {
                self.next();
                self.error(format!("Illegal character: {:?}", ch))
            }
            None => None,
        }
    }

    fn lex_identifier(&mut self) -> Option<State> {
        while self.next().is_some_and(is_alpha) {}
        self.backup();

        let kind = lookup_ident(self.lexeme());
        self.emit(kind);
        Some(State::Lex)
    }

    fn lex_number(&mut self) -> Option<State> {
        self.accept_run(DIGITS);

        if self.peek().is_some_and(is_alpha) {
            self.next();
            return self.error(format!("bad number syntax: {:?}", self.lexeme()));
        }

        self.emit(TokenKind::Int);
        Some(State::Lex)
    }

    /// Queue an ILLEGAL token carrying `message` and pick the follow-up state.
    fn error(&mut self, message: String) -> Option<State> {
        trace!(%message, "illegal input");
        self.pending.push_back(Token::new(TokenKind::Illegal, message));
        self.ignore();

        match self.recovery {
            Recovery::Halt => None,
            Recovery::Resume => Some(State::Lex),
        }
    }

    /// Consume an operator or delimiter, classified by [`TokenKind::from_symbol`].
    fn accept_symbol(&mut self) -> Option<TokenKind> {
        let Some(single) = self
            .next()
            .and_then(|_| TokenKind::from_symbol(self.lexeme()))
        else {
            self.backup();
            return None;
        };

        // `!` and `=` may each be followed by `=`
        let kind = match single {
            TokenKind::Bang if self.accept("=") => TokenKind::NotEq,
            TokenKind::Assign if self.accept("=") => TokenKind::Eq,
            kind => kind,
        };
        Some(kind)
    }

    fn emit(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme());
        trace!(kind = %token.kind, literal = %token.literal, "emit");
        self.pending.push_back(token);
        self.start = self.pos;
    }

    fn lexeme(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Skip whitespace, leaving the first non-whitespace character unread
    fn skip_whitespace(&mut self) {
        while self.next().is_some_and(char::is_whitespace) {
            self.ignore();
        }
        self.backup();
    }

    /// Consume the next character if it is one of `valid`.
    fn accept(&mut self, valid: &str) -> bool {
        match self.next() {
            Some(ch) if valid.contains(ch) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consume a run of characters from `valid`.
    fn accept_run(&mut self, valid: &str) {
        while matches!(self.next(), Some(ch) if valid.contains(ch)) {}
        self.backup();
    }

    /// Read the next character, `None` at end of input.
    fn next(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(ch) => {
                self.width = ch.len_utf8();
                self.pos += self.width;
                Some(ch)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Step back over the character returned by the last [`Lexer::next`].
    ///
    /// Only one character of pushback exists; a second call is a no-op.
    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
        debug_assert!(self.start <= self.pos);
    }

    /// Peek at the next character without consuming it
    fn peek(&mut self) -> Option<char> {
        let ch = self.next();
        self.backup();
        ch
    }

    /// Drop the pending lexeme.
    fn ignore(&mut self) {
        self.start = self.pos;
    }
}

fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("=+(){},;"),
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(
            kinds("== != = ! =! !=="),
            vec![
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::Assign,
                TokenKind::Bang,
                TokenKind::Assign,
                TokenKind::Bang,
                TokenKind::NotEq,
                TokenKind::Assign,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_every_symbol_keeps_its_text() {
        for symbol in [";", "(", ")", ",", "+", "-", "/", "*", "<", ">", "{", "}", "!", "=", "==", "!="] {
            let tokens = Lexer::new(symbol).tokenize();
            let expected = TokenKind::from_symbol(symbol).map(|kind| Token::new(kind, symbol));

            assert_eq!(Some(tokens[0].clone()), expected, "symbol {:?}", symbol);
            assert_eq!(tokens[1], Token::eof());
        }
    }

    #[test]
    fn test_whitespace_only() {
        let mut lexer = Lexer::new(" \t\r\n  ");
        assert_eq!(lexer.next_token(), Token::eof());
        assert_eq!(lexer.next_token(), Token::eof());
    }

    #[test]
    fn test_identifiers_stop_at_digits() {
        let tokens = Lexer::new("foo_bar x1").tokenize();

        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "foo_bar"));
        assert_eq!(tokens[1], Token::new(TokenKind::Ident, "x"));
        assert_eq!(tokens[2], Token::new(TokenKind::Int, "1"));
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_bad_number_halts() {
        let tokens = Lexer::new("12abc + 3").tokenize();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert_eq!(tokens[0].literal, "bad number syntax: \"12a\"");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_illegal_character_resume() {
        let tokens = Lexer::with_recovery("a @ b", Recovery::Resume).tokenize();

        assert_eq!(tokens[0], Token::new(TokenKind::Ident, "a"));
        assert_eq!(
            tokens[1],
            Token::new(TokenKind::Illegal, "Illegal character: '@'")
        );
        assert_eq!(tokens[2], Token::new(TokenKind::Ident, "b"));
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_multibyte_illegal_character() {
        let tokens = Lexer::with_recovery("é5", Recovery::Resume).tokenize();

        assert_eq!(tokens[0].literal, "Illegal character: 'é'");
        assert_eq!(tokens[1], Token::new(TokenKind::Int, "5"));
    }

    #[test]
    fn test_backup_is_single_step() {
        let mut lexer = Lexer::new("ab");
        assert_eq!(lexer.next(), Some('a'));
        assert_eq!(lexer.next(), Some('b'));
        lexer.backup();
        lexer.backup();
        assert_eq!(lexer.pos, 1);
        assert_eq!(lexer.peek(), Some('b'));
    }
}

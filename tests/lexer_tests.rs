// Integration tests for the Monkey lexer

use monkey_syntax::parser::lexer::{Lexer, Recovery};
use monkey_syntax::parser::token::{Token, TokenKind};

#[test]
fn test_next_token_program() {
    let source = r#"
        let five = 5;
        let ten = 10;

        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);
        !-/*5;
        5 < 10 > 5;

        if (5 < 10) {
            return true;
        } else {
            return false;
        }

        10 == 10;
        10 != 9;
    "#;

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Ident, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Ident, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "ten"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Bang, "!"),
        (TokenKind::Minus, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::Gt, ">"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::LParen, "("),
        (TokenKind::Int, "5"),
        (TokenKind::Lt, "<"),
        (TokenKind::Int, "10"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Int, "10"),
        (TokenKind::Eq, "=="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Int, "10"),
        (TokenKind::NotEq, "!="),
        (TokenKind::Int, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    let mut lexer = Lexer::new(source);
    for (i, (kind, literal)) in expected.iter().enumerate() {
        let token = lexer.next_token();
        assert_eq!(token, Token::new(*kind, *literal), "token[{}]", i);
    }
}

#[test]
fn test_whitespace_yields_single_eof() {
    for source in ["", " ", "\n\t  \r\n", "     "] {
        let tokens = Lexer::new(source).tokenize();
        assert_eq!(tokens, vec![Token::eof()], "input {:?}", source);
    }
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
}

#[test]
fn test_bad_number_syntax() {
    let tokens = Lexer::new("12abc").tokenize();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert!(tokens[0].literal.contains("bad number syntax"));
    assert!(tokens[0].literal.contains("12a"));
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_bad_number_resume_continues_after_offender() {
    let tokens = Lexer::with_recovery("12abc;", Recovery::Resume).tokenize();

    assert!(matches!(tokens[0].kind, TokenKind::Illegal));
    assert_eq!(tokens[1], Token::new(TokenKind::Ident, "bc"));
    assert_eq!(tokens[2], Token::new(TokenKind::Semicolon, ";"));
    assert_eq!(tokens[3], Token::eof());
}

#[test]
fn test_illegal_character_halts_by_default() {
    let tokens = Lexer::new("x # y").tokenize();

    assert_eq!(tokens[0], Token::new(TokenKind::Ident, "x"));
    assert_eq!(
        tokens[1],
        Token::new(TokenKind::Illegal, "Illegal character: '#'")
    );
    assert_eq!(tokens[2], Token::eof());
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_minus_is_not_part_of_number() {
    let tokens = Lexer::new("-15").tokenize();

    assert_eq!(tokens[0], Token::new(TokenKind::Minus, "-"));
    assert_eq!(tokens[1], Token::new(TokenKind::Int, "15"));
}

#[test]
fn test_oversized_integer_is_kept_verbatim() {
    let tokens = Lexer::new("99999999999999999999").tokenize();
    assert_eq!(tokens[0], Token::new(TokenKind::Int, "99999999999999999999"));
}

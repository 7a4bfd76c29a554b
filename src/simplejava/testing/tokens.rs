//! Token constructors for hand-built streams

use crate::simplejava::token::{Token, TokenKind};

/// A fixed-spelling token
pub fn kw(kind: TokenKind) -> Token {
    Token::new(kind)
}

pub fn id(name: &str) -> Token {
    Token::with_value(TokenKind::Id, name)
}

pub fn num(digits: &str) -> Token {
    Token::with_value(TokenKind::Num, digits)
}

/// A `TYPE` token; the parser accepts `int`, `boolean` and `char`
pub fn ty(keyword: &str) -> Token {
    Token::with_value(TokenKind::Type, keyword)
}

/// `public class Main { public static void main ( String[] args ) {`
pub fn program_header() -> Vec<Token> {
    vec![
        kw(TokenKind::Public),
        kw(TokenKind::Class),
        id("Main"),
        kw(TokenKind::LeftBrace),
        kw(TokenKind::Public),
        kw(TokenKind::Static),
        kw(TokenKind::Void),
        kw(TokenKind::Main),
        kw(TokenKind::LeftParen),
        kw(TokenKind::StringArray),
        kw(TokenKind::Args),
        kw(TokenKind::RightParen),
        kw(TokenKind::LeftBrace),
    ]
}

/// Wrap statements in the class and main method skeleton
pub fn program(body: Vec<Token>) -> Vec<Token> {
    let mut tokens = program_header();
    tokens.extend(body);
    tokens.push(kw(TokenKind::RightBrace));
    tokens.push(kw(TokenKind::RightBrace));
    tokens
}

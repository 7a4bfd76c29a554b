//! Raw lexical tokens for SimpleJava source text
//!
//! These are the units logos recognises. They map almost one to one onto
//! [TokenKind](crate::simplejava::token::TokenKind); the exceptions are the quoted
//! literals, which are recognised whole and expanded later by
//! [lexer_impl](super::lexer_impl).
use crate::simplejava::token::TokenKind;
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum RawToken {
    #[token("public")]
    Public,
    #[token("class")]
    Class,
    #[token("static")]
    Static,
    #[token("void")]
    Void,
    #[token("main")]
    Main,
    #[token("String[]")]
    StringArray,
    #[token("args")]
    Args,

    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("System.out.println")]
    Print,

    #[token("int")]
    #[token("boolean")]
    #[token("char")]
    Type,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Id,
    #[regex(r"[0-9]+")]
    Num,

    // Whole literals, quotes included
    #[regex(r"'[^'\n]'")]
    CharLiteral,
    #[regex(r#""[^"\n]*""#)]
    StringLiteral,

    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Assign,

    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("&&")]
    And,
    #[token("||")]
    Or,

    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Divide,
    #[token("%")]
    Mod,
}

impl RawToken {
    /// The token kind this raw token becomes. Quoted literals map to their literal kind;
    /// the surrounding quote tokens are added during expansion.
    pub fn kind(self) -> TokenKind {
        match self {
            RawToken::Public => TokenKind::Public,
            RawToken::Class => TokenKind::Class,
            RawToken::Static => TokenKind::Static,
            RawToken::Void => TokenKind::Void,
            RawToken::Main => TokenKind::Main,
            RawToken::StringArray => TokenKind::StringArray,
            RawToken::Args => TokenKind::Args,
            RawToken::While => TokenKind::While,
            RawToken::For => TokenKind::For,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::Print => TokenKind::Print,
            RawToken::Type => TokenKind::Type,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::Id => TokenKind::Id,
            RawToken::Num => TokenKind::Num,
            RawToken::CharLiteral => TokenKind::CharLiteral,
            RawToken::StringLiteral => TokenKind::StringLiteral,
            RawToken::LeftBrace => TokenKind::LeftBrace,
            RawToken::RightBrace => TokenKind::RightBrace,
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Equal => TokenKind::Equal,
            RawToken::NotEqual => TokenKind::NotEqual,
            RawToken::And => TokenKind::And,
            RawToken::Or => TokenKind::Or,
            RawToken::Less => TokenKind::Less,
            RawToken::LessEqual => TokenKind::LessEqual,
            RawToken::Greater => TokenKind::Greater,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Times => TokenKind::Times,
            RawToken::Divide => TokenKind::Divide,
            RawToken::Mod => TokenKind::Mod,
        }
    }

    /// Check if this raw token is a quoted literal that expands into three tokens
    pub fn is_quoted_literal(self) -> bool {
        matches!(self, RawToken::CharLiteral | RawToken::StringLiteral)
    }
}

//! Token types consumed by the parser.
//!
//!     A token is an immutable pair of a kind and an optional literal payload. Tokens are
//!     produced outside the parser (see [lexer](crate::simplejava::lexer) for the reference
//!     tokenizer) and the parser only ever inspects them, never rewrites them: every
//!     terminal leaf of the parse tree carries the exact input token it matched.
//!
//! Kinds and Values
//!
//!     Every keyword, punctuation mark and operator has a kind of its own, so the production
//!     table can dispatch on the kind alone. Five kinds need a payload:
//!
//!         - Id and Num carry the identifier name and the digits.
//!         - CharLiteral and StringLiteral carry the literal body, without quotes.
//!         - Type carries the keyword (`int`, `boolean`, `char`). This is the one place where
//!           the table also looks at the value, see [table](crate::simplejava::grammar::table).
//!
//!     The remaining kinds have a fixed spelling, available through [TokenKind::lexeme].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of terminal kinds of the SimpleJava grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    // Program skeleton
    Public,
    Class,
    Static,
    Void,
    Main,
    StringArray,
    Args,

    // Statements
    While,
    For,
    If,
    Else,
    Print,

    // Literals and names
    Type,
    True,
    False,
    Id,
    Num,
    CharLiteral,
    StringLiteral,
    SingleQuote,
    DoubleQuote,

    // Punctuation
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Semicolon,
    Assign,

    // Boolean operators
    Equal,
    NotEqual,
    And,
    Or,

    // Relational operators
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Arithmetic operators
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 40] = [
        TokenKind::Public,
        TokenKind::Class,
        TokenKind::Static,
        TokenKind::Void,
        TokenKind::Main,
        TokenKind::StringArray,
        TokenKind::Args,
        TokenKind::While,
        TokenKind::For,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Print,
        TokenKind::Type,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Id,
        TokenKind::Num,
        TokenKind::CharLiteral,
        TokenKind::StringLiteral,
        TokenKind::SingleQuote,
        TokenKind::DoubleQuote,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Semicolon,
        TokenKind::Assign,
        TokenKind::Equal,
        TokenKind::NotEqual,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Divide,
        TokenKind::Mod,
    ];

    /// Stable kebab-case name, the same one serde uses.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Public => "public",
            TokenKind::Class => "class",
            TokenKind::Static => "static",
            TokenKind::Void => "void",
            TokenKind::Main => "main",
            TokenKind::StringArray => "string-array",
            TokenKind::Args => "args",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Print => "print",
            TokenKind::Type => "type",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Id => "id",
            TokenKind::Num => "num",
            TokenKind::CharLiteral => "char-literal",
            TokenKind::StringLiteral => "string-literal",
            TokenKind::SingleQuote => "single-quote",
            TokenKind::DoubleQuote => "double-quote",
            TokenKind::LeftBrace => "left-brace",
            TokenKind::RightBrace => "right-brace",
            TokenKind::LeftParen => "left-paren",
            TokenKind::RightParen => "right-paren",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Assign => "assign",
            TokenKind::Equal => "equal",
            TokenKind::NotEqual => "not-equal",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Less => "less",
            TokenKind::LessEqual => "less-equal",
            TokenKind::Greater => "greater",
            TokenKind::GreaterEqual => "greater-equal",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Times => "times",
            TokenKind::Divide => "divide",
            TokenKind::Mod => "mod",
        }
    }

    /// The fixed source spelling of this kind, `None` for kinds whose text is the token value.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Public => "public",
            TokenKind::Class => "class",
            TokenKind::Static => "static",
            TokenKind::Void => "void",
            TokenKind::Main => "main",
            TokenKind::StringArray => "String[]",
            TokenKind::Args => "args",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Print => "System.out.println",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::SingleQuote => "'",
            TokenKind::DoubleQuote => "\"",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Divide => "/",
            TokenKind::Mod => "%",
            TokenKind::Type
            | TokenKind::Id
            | TokenKind::Num
            | TokenKind::CharLiteral
            | TokenKind::StringLiteral => return None,
        };
        Some(text)
    }

    /// Whether tokens of this kind carry their text in the value payload.
    pub fn carries_value(self) -> bool {
        self.lexeme().is_none()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

/// A single input token: a kind plus an optional literal payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Token {
    /// A token without payload.
    pub fn new(kind: TokenKind) -> Self {
        Token { kind, value: None }
    }

    /// A token carrying a literal payload.
    pub fn with_value(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The source text of this token: the payload if present, otherwise the fixed lexeme.
    pub fn text(&self) -> &str {
        match (&self.value, self.kind.lexeme()) {
            (Some(value), _) => value,
            (None, Some(lexeme)) => lexeme,
            (None, None) => "",
        }
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token::new(kind)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {:?}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_uses_kebab_names() {
        assert_eq!(format!("{}", TokenKind::LeftBrace), "<left-brace>");
        assert_eq!(format!("{}", TokenKind::Print), "<print>");
        assert_eq!(format!("{}", TokenKind::GreaterEqual), "<greater-equal>");
    }

    #[test]
    fn test_names_match_serde() {
        for kind in TokenKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_value_kinds_have_no_lexeme() {
        let value_kinds: Vec<_> = TokenKind::ALL
            .into_iter()
            .filter(|kind| kind.carries_value())
            .collect();
        assert_eq!(
            value_kinds,
            vec![
                TokenKind::Type,
                TokenKind::Id,
                TokenKind::Num,
                TokenKind::CharLiteral,
                TokenKind::StringLiteral
            ]
        );
    }

    #[test]
    fn test_token_text() {
        assert_eq!(Token::new(TokenKind::Print).text(), "System.out.println");
        assert_eq!(Token::with_value(TokenKind::Id, "x").text(), "x");
        assert_eq!(Token::new(TokenKind::Id).text(), "");
    }

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", Token::new(TokenKind::Semicolon)), "<semicolon>");
        assert_eq!(
            format!("{}", Token::with_value(TokenKind::Type, "int")),
            "<type> \"int\""
        );
    }

    #[test]
    fn test_token_json_omits_missing_value() {
        let json = serde_json::to_string(&Token::new(TokenKind::LeftBrace)).unwrap();
        assert_eq!(json, r#"{"kind":"left-brace"}"#);
        let json = serde_json::to_string(&Token::with_value(TokenKind::Num, "5")).unwrap();
        assert_eq!(json, r#"{"kind":"num","value":"5"}"#);
    }
}

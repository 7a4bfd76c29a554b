//! Detokenizer for SimpleJava token streams
//!
//! Converts a token stream back into source text. Tokens are separated by a single space,
//! except that quotes hug the literal they enclose so the result lexes back to the same
//! stream.
use crate::simplejava::token::{Token, TokenKind};

/// Trait for converting a token to its source representation
pub trait ToSourceString {
    fn to_source_string(&self) -> String;
}

impl ToSourceString for Token {
    fn to_source_string(&self) -> String {
        self.text().to_string()
    }
}

fn is_quote(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::SingleQuote | TokenKind::DoubleQuote)
}

fn is_literal(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::CharLiteral | TokenKind::StringLiteral)
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    let mut previous: Option<TokenKind> = None;

    for token in tokens {
        if let Some(prev) = previous {
            let hugs = (is_quote(prev) && is_literal(token.kind))
                || (is_literal(prev) && is_quote(token.kind));
            if !hugs {
                result.push(' ');
            }
        }
        result.push_str(&token.to_source_string());
        previous = Some(token.kind);
    }

    result
}

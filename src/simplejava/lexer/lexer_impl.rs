//! Implementation of the SimpleJava lexer
//!
//! logos does the recognising; this module turns raw tokens into parser [Token]s, filling in
//! values from the source slice and expanding quoted literals into quote/literal/quote.

use super::tokens::RawToken;
use crate::simplejava::token::{Token, TokenKind};
use logos::Logos;
use thiserror::Error;

/// Byte range of a token in the source text
pub type Span = std::ops::Range<usize>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected input {text:?} at byte {}", span.start)]
    UnexpectedInput { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> &Span {
        match self {
            LexError::UnexpectedInput { span, .. } => span,
        }
    }
}

/// Tokenize a string into the parser's token stream
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize a string and keep the source span of every token
///
/// Expanded quote tokens get the span of the quote character itself, the literal gets the
/// span of its body.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();
        let raw = result.map_err(|_| LexError::UnexpectedInput {
            text: slice.to_string(),
            span: span.clone(),
        })?;

        if raw.is_quoted_literal() {
            push_quoted(&mut tokens, raw, slice, span);
            continue;
        }

        let kind = raw.kind();
        let token = if kind.carries_value() {
            Token::with_value(kind, slice)
        } else {
            Token::new(kind)
        };
        tokens.push((token, span));
    }

    Ok(tokens)
}

fn push_quoted(tokens: &mut Vec<(Token, Span)>, raw: RawToken, slice: &str, span: Span) {
    let quote = match raw {
        RawToken::CharLiteral => TokenKind::SingleQuote,
        _ => TokenKind::DoubleQuote,
    };
    // Both quote characters are one byte wide
    let body = &slice[1..slice.len() - 1];
    let open = span.start..span.start + 1;
    let inner = span.start + 1..span.end - 1;
    let close = span.end - 1..span.end;

    tokens.push((Token::new(quote), open));
    tokens.push((Token::with_value(raw.kind(), body), inner));
    tokens.push((Token::new(quote), close));
}

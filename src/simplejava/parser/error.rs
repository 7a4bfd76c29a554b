//! Syntax errors
//!
//! Parsing stops at the first error. Every variant names what the parser wanted and, where
//! there is one, the token it got, plus the index of that token in the input.

use crate::simplejava::grammar::{NonTerminal, Symbol};
use crate::simplejava::token::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// What a terminal mismatch expected to see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    /// The program was already complete
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("no production for {nonterminal} on {found} (token {position})")]
    NoApplicableRule {
        nonterminal: NonTerminal,
        found: Token,
        position: usize,
    },

    #[error("expected {expected}, found {found} (token {position})")]
    TerminalMismatch {
        expected: Expected,
        found: Token,
        position: usize,
    },

    #[error("input ended after {position} tokens, still expecting {}", join_symbols(.remaining))]
    UnconsumedStack {
        /// Pending symbols, top of the stack first
        remaining: Vec<Symbol>,
        position: usize,
    },
}

fn join_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|symbol| symbol.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl SyntaxError {
    /// Index of the offending token. For [SyntaxError::UnconsumedStack] this is the input
    /// length.
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::NoApplicableRule { position, .. }
            | SyntaxError::TerminalMismatch { position, .. }
            | SyntaxError::UnconsumedStack { position, .. } => *position,
        }
    }

    pub fn found(&self) -> Option<&Token> {
        match self {
            SyntaxError::NoApplicableRule { found, .. }
            | SyntaxError::TerminalMismatch { found, .. } => Some(found),
            SyntaxError::UnconsumedStack { .. } => None,
        }
    }

    /// Short machine-friendly name of the error kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            SyntaxError::NoApplicableRule { .. } => "no-applicable-rule",
            SyntaxError::TerminalMismatch { .. } => "terminal-mismatch",
            SyntaxError::UnconsumedStack { .. } => "unconsumed-stack",
        }
    }
}

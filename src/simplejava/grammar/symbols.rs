//! Grammar symbols
//!
//! [Symbol] is what the production table returns and what the parse stack holds. It is
//! `Copy`: a symbol is a tag plus, for terminals, a kind and an optional fixed keyword.

use crate::simplejava::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The nonterminals of the SimpleJava grammar. [NonTerminal::Program] is the start symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonTerminal {
    Program,
    StatementList,
    Statement,
    While,
    For,
    ForStart,
    ForArith,
    If,
    ElseIf,
    ElseOrElseIf,
    PossIf,
    Assign,
    Decl,
    PossAssign,
    Print,
    Type,
    Expr,
    CharExpr,
    BoolExpr,
    BoolOp,
    BoolEq,
    BoolLog,
    RelExpr,
    RelExprPrime,
    RelOp,
    ArithExpr,
    ArithExprPrime,
    Term,
    TermPrime,
    Factor,
    PrintExpr,
}

impl NonTerminal {
    pub const ALL: [NonTerminal; 31] = [
        NonTerminal::Program,
        NonTerminal::StatementList,
        NonTerminal::Statement,
        NonTerminal::While,
        NonTerminal::For,
        NonTerminal::ForStart,
        NonTerminal::ForArith,
        NonTerminal::If,
        NonTerminal::ElseIf,
        NonTerminal::ElseOrElseIf,
        NonTerminal::PossIf,
        NonTerminal::Assign,
        NonTerminal::Decl,
        NonTerminal::PossAssign,
        NonTerminal::Print,
        NonTerminal::Type,
        NonTerminal::Expr,
        NonTerminal::CharExpr,
        NonTerminal::BoolExpr,
        NonTerminal::BoolOp,
        NonTerminal::BoolEq,
        NonTerminal::BoolLog,
        NonTerminal::RelExpr,
        NonTerminal::RelExprPrime,
        NonTerminal::RelOp,
        NonTerminal::ArithExpr,
        NonTerminal::ArithExprPrime,
        NonTerminal::Term,
        NonTerminal::TermPrime,
        NonTerminal::Factor,
        NonTerminal::PrintExpr,
    ];

    /// The name used in the grammar, e.g. `los` or `rel-expr'`.
    pub fn name(self) -> &'static str {
        match self {
            NonTerminal::Program => "prog",
            NonTerminal::StatementList => "los",
            NonTerminal::Statement => "stat",
            NonTerminal::While => "while",
            NonTerminal::For => "for",
            NonTerminal::ForStart => "for-start",
            NonTerminal::ForArith => "for-arith",
            NonTerminal::If => "if",
            NonTerminal::ElseIf => "else-if",
            NonTerminal::ElseOrElseIf => "else-or-else-if",
            NonTerminal::PossIf => "poss-if",
            NonTerminal::Assign => "assign",
            NonTerminal::Decl => "decl",
            NonTerminal::PossAssign => "poss-assign",
            NonTerminal::Print => "print",
            NonTerminal::Type => "type",
            NonTerminal::Expr => "expr",
            NonTerminal::CharExpr => "char-expr",
            NonTerminal::BoolExpr => "bool-expr",
            NonTerminal::BoolOp => "bool-op",
            NonTerminal::BoolEq => "bool-eq",
            NonTerminal::BoolLog => "bool-log",
            NonTerminal::RelExpr => "rel-expr",
            NonTerminal::RelExprPrime => "rel-expr'",
            NonTerminal::RelOp => "rel-op",
            NonTerminal::ArithExpr => "arith-expr",
            NonTerminal::ArithExprPrime => "arith-expr'",
            NonTerminal::Term => "term",
            NonTerminal::TermPrime => "term'",
            NonTerminal::Factor => "factor",
            NonTerminal::PrintExpr => "print-expr",
        }
    }

    /// A name that is safe to use as an element name (primes spelled out).
    pub fn tag_name(self) -> &'static str {
        match self {
            NonTerminal::RelExprPrime => "rel-expr-prime",
            NonTerminal::ArithExprPrime => "arith-expr-prime",
            NonTerminal::TermPrime => "term-prime",
            other => other.name(),
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<<{}>>", self.name())
    }
}

/// An expected token. `value` is set for the keyword terminals of `type`; matching against
/// input compares the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Terminal {
    pub kind: TokenKind,
    pub value: Option<&'static str>,
}

impl Terminal {
    pub const fn new(kind: TokenKind) -> Self {
        Terminal { kind, value: None }
    }

    pub const fn keyword(kind: TokenKind, value: &'static str) -> Self {
        Terminal {
            kind,
            value: Some(value),
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{} {:?}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    NonTerminal(NonTerminal),
    Terminal(Terminal),
    Epsilon,
    /// Stack-only marker: the nonterminal above it is complete, move the cursor up.
    ScopeClose,
}

impl Symbol {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn is_scope_close(&self) -> bool {
        matches!(self, Symbol::ScopeClose)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(nonterminal: NonTerminal) -> Self {
        Symbol::NonTerminal(nonterminal)
    }
}

impl From<TokenKind> for Symbol {
    fn from(kind: TokenKind) -> Self {
        Symbol::Terminal(Terminal::new(kind))
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::NonTerminal(nonterminal) => write!(f, "{}", nonterminal),
            Symbol::Terminal(terminal) => write!(f, "{}", terminal),
            Symbol::Epsilon => write!(f, "ε"),
            Symbol::ScopeClose => write!(f, "<scope-close>"),
        }
    }
}

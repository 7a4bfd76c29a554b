//! The LL(1) production table
//!
//!     [predict] maps (nonterminal, lookahead) to the production to apply. It is an exhaustive
//!     match on the nonterminal with an inner match on the lookahead kind, so a nonterminal
//!     without a row does not compile and a kind without an entry falls into the explicit
//!     `_ => None` arm of its nonterminal.
//!
//!     Lookahead is the token kind, except for `type`: all three type keywords share
//!     [TokenKind::Type] and the token value picks the row.
//!
//!     Epsilon rows fire exactly on the FOLLOW set of their nonterminal:
//!
//!         los             }
//!         for-start       ;
//!         for-arith       )
//!         else-if         ID } ; while for if System.out.println TYPE
//!         poss-if         {
//!         poss-assign     ;
//!         bool-expr       ) ;
//!         rel-expr'       ) ; == != && ||
//!         arith-expr'     ) ; == != && || < <= > >=
//!         term'           + - ) ; == != && || < <= > >=
//!
//!     Rows that differ only by the lookahead are collapsed: single terminal rules use
//!     [Production::leaf] and the `+ - * / %` tails use [Production::operator_tail].

use super::symbols::NonTerminal as N;
use super::symbols::{NonTerminal, Symbol, Terminal};
use crate::simplejava::token::TokenKind as K;
use crate::simplejava::token::{Token, TokenKind};

/// One grammar rule: `head → body`. An epsilon rule has the body `[Symbol::Epsilon]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub head: NonTerminal,
    pub body: Vec<Symbol>,
}

impl Production {
    pub fn new(head: NonTerminal, body: impl IntoIterator<Item = Symbol>) -> Self {
        Production {
            head,
            body: body.into_iter().collect(),
        }
    }

    pub fn epsilon(head: NonTerminal) -> Self {
        Production::new(head, [Symbol::Epsilon])
    }

    /// `head → kind`
    pub fn leaf(head: NonTerminal, kind: TokenKind) -> Self {
        Production::new(head, [Symbol::from(kind)])
    }

    /// `head → value`, a keyword carried by a value token
    pub fn keyword(head: NonTerminal, kind: TokenKind, value: &'static str) -> Self {
        Production::new(head, [Symbol::from(Terminal::keyword(kind, value))])
    }

    /// `head → op operand head`
    pub fn operator_tail(head: NonTerminal, op: TokenKind, operand: NonTerminal) -> Self {
        Production::new(head, [Symbol::from(op), Symbol::from(operand), Symbol::from(head)])
    }

    /// `head → nonterminal`
    pub fn single(head: NonTerminal, nonterminal: NonTerminal) -> Self {
        Production::new(head, [Symbol::from(nonterminal)])
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self.body.as_slice(), [Symbol::Epsilon])
    }
}

fn n(nonterminal: NonTerminal) -> Symbol {
    Symbol::NonTerminal(nonterminal)
}

fn t(kind: TokenKind) -> Symbol {
    Symbol::from(kind)
}

/// `( rel-expr bool-expr )`, the condition shared by while, if and poss-if
fn condition() -> [Symbol; 4] {
    [
        t(K::LeftParen),
        n(N::RelExpr),
        n(N::BoolExpr),
        t(K::RightParen),
    ]
}

/// `{ los }`
fn block() -> [Symbol; 3] {
    [t(K::LeftBrace), n(N::StatementList), t(K::RightBrace)]
}

/// Select the production for `head` given the lookahead token, `None` if there is none.
pub fn predict(head: NonTerminal, lookahead: &Token) -> Option<Production> {
    let kind = lookahead.kind;
    let production = match head {
        N::Program => match kind {
            K::Public => Production::new(
                head,
                [
                    t(K::Public),
                    t(K::Class),
                    t(K::Id),
                    t(K::LeftBrace),
                    t(K::Public),
                    t(K::Static),
                    t(K::Void),
                    t(K::Main),
                    t(K::LeftParen),
                    t(K::StringArray),
                    t(K::Args),
                    t(K::RightParen),
                ]
                .into_iter()
                .chain(block())
                .chain([t(K::RightBrace)]),
            ),
            _ => return None,
        },

        N::StatementList => match kind {
            K::Id | K::Semicolon | K::While | K::For | K::If | K::Print | K::Type => {
                Production::new(head, [n(N::Statement), n(N::StatementList)])
            }
            K::RightBrace => Production::epsilon(head),
            _ => return None,
        },

        N::Statement => match kind {
            K::While => Production::single(head, N::While),
            K::For => Production::single(head, N::For),
            K::If => Production::single(head, N::If),
            K::Id => Production::new(head, [n(N::Assign), t(K::Semicolon)]),
            K::Type => Production::new(head, [n(N::Decl), t(K::Semicolon)]),
            K::Print => Production::new(head, [n(N::Print), t(K::Semicolon)]),
            K::Semicolon => Production::leaf(head, K::Semicolon),
            _ => return None,
        },

        N::While => match kind {
            K::While => Production::new(
                head,
                [t(K::While)].into_iter().chain(condition()).chain(block()),
            ),
            _ => return None,
        },

        N::For => match kind {
            K::For => Production::new(
                head,
                [
                    t(K::For),
                    t(K::LeftParen),
                    n(N::ForStart),
                    t(K::Semicolon),
                    n(N::RelExpr),
                    n(N::BoolExpr),
                    t(K::Semicolon),
                    n(N::ForArith),
                    t(K::RightParen),
                ]
                .into_iter()
                .chain(block()),
            ),
            _ => return None,
        },

        N::ForStart => match kind {
            K::Type => Production::single(head, N::Decl),
            K::Id => Production::single(head, N::Assign),
            K::Semicolon => Production::epsilon(head),
            _ => return None,
        },

        N::ForArith => match kind {
            K::Id | K::LeftParen | K::Num => Production::single(head, N::ArithExpr),
            K::RightParen => Production::epsilon(head),
            _ => return None,
        },

        N::If => match kind {
            K::If => Production::new(
                head,
                [t(K::If)]
                    .into_iter()
                    .chain(condition())
                    .chain(block())
                    .chain([n(N::ElseIf)]),
            ),
            _ => return None,
        },

        N::ElseIf => match kind {
            K::Else => Production::new(
                head,
                [n(N::ElseOrElseIf)]
                    .into_iter()
                    .chain(block())
                    .chain([n(N::ElseIf)]),
            ),
            K::Id
            | K::RightBrace
            | K::Semicolon
            | K::While
            | K::For
            | K::If
            | K::Print
            | K::Type => Production::epsilon(head),
            _ => return None,
        },

        N::ElseOrElseIf => match kind {
            K::Else => Production::new(head, [t(K::Else), n(N::PossIf)]),
            _ => return None,
        },

        N::PossIf => match kind {
            K::If => Production::new(head, [t(K::If)].into_iter().chain(condition())),
            K::LeftBrace => Production::epsilon(head),
            _ => return None,
        },

        N::Assign => match kind {
            K::Id => Production::new(head, [t(K::Id), t(K::Assign), n(N::Expr)]),
            _ => return None,
        },

        N::Decl => match kind {
            K::Type => Production::new(head, [n(N::Type), t(K::Id), n(N::PossAssign)]),
            _ => return None,
        },

        N::PossAssign => match kind {
            K::Assign => Production::new(head, [t(K::Assign), n(N::Expr)]),
            K::Semicolon => Production::epsilon(head),
            _ => return None,
        },

        N::Print => match kind {
            K::Print => Production::new(
                head,
                [
                    t(K::Print),
                    t(K::LeftParen),
                    n(N::PrintExpr),
                    t(K::RightParen),
                ],
            ),
            _ => return None,
        },

        N::Type => match (kind, lookahead.value().and_then(type_keyword)) {
            (K::Type, Some(keyword)) => Production::keyword(head, K::Type, keyword),
            _ => return None,
        },

        N::Expr => match kind {
            K::Id | K::LeftParen | K::True | K::False | K::Num => {
                Production::new(head, [n(N::RelExpr), n(N::BoolExpr)])
            }
            K::SingleQuote => Production::single(head, N::CharExpr),
            _ => return None,
        },

        N::CharExpr => match kind {
            K::SingleQuote => Production::new(
                head,
                [t(K::SingleQuote), t(K::CharLiteral), t(K::SingleQuote)],
            ),
            _ => return None,
        },

        N::BoolExpr => match kind {
            K::Equal | K::NotEqual | K::And | K::Or => {
                Production::new(head, [n(N::BoolOp), n(N::RelExpr), n(N::BoolExpr)])
            }
            K::RightParen | K::Semicolon => Production::epsilon(head),
            _ => return None,
        },

        N::BoolOp => match kind {
            K::Equal | K::NotEqual => Production::single(head, N::BoolEq),
            K::And | K::Or => Production::single(head, N::BoolLog),
            _ => return None,
        },

        N::BoolEq => match kind {
            K::Equal | K::NotEqual => Production::leaf(head, kind),
            _ => return None,
        },

        N::BoolLog => match kind {
            K::And | K::Or => Production::leaf(head, kind),
            _ => return None,
        },

        N::RelExpr => match kind {
            K::Id | K::LeftParen | K::Num => {
                Production::new(head, [n(N::ArithExpr), n(N::RelExprPrime)])
            }
            K::True | K::False => Production::leaf(head, kind),
            _ => return None,
        },

        N::RelExprPrime => match kind {
            K::Less | K::LessEqual | K::Greater | K::GreaterEqual => {
                Production::new(head, [n(N::RelOp), n(N::ArithExpr)])
            }
            K::RightParen | K::Semicolon | K::Equal | K::NotEqual | K::And | K::Or => {
                Production::epsilon(head)
            }
            _ => return None,
        },

        N::RelOp => match kind {
            K::Less | K::LessEqual | K::Greater | K::GreaterEqual => Production::leaf(head, kind),
            _ => return None,
        },

        N::ArithExpr => match kind {
            K::Id | K::LeftParen | K::Num => {
                Production::new(head, [n(N::Term), n(N::ArithExprPrime)])
            }
            _ => return None,
        },

        N::ArithExprPrime => match kind {
            K::Plus | K::Minus => Production::operator_tail(head, kind, N::Term),
            K::RightParen
            | K::Semicolon
            | K::Equal
            | K::NotEqual
            | K::And
            | K::Or
            | K::Less
            | K::LessEqual
            | K::Greater
            | K::GreaterEqual => Production::epsilon(head),
            _ => return None,
        },

        N::Term => match kind {
            K::Id | K::LeftParen | K::Num => {
                Production::new(head, [n(N::Factor), n(N::TermPrime)])
            }
            _ => return None,
        },

        N::TermPrime => match kind {
            K::Times | K::Divide | K::Mod => Production::operator_tail(head, kind, N::Factor),
            K::Plus
            | K::Minus
            | K::RightParen
            | K::Semicolon
            | K::Equal
            | K::NotEqual
            | K::And
            | K::Or
            | K::Less
            | K::LessEqual
            | K::Greater
            | K::GreaterEqual => Production::epsilon(head),
            _ => return None,
        },

        N::Factor => match kind {
            K::LeftParen => Production::new(
                head,
                [t(K::LeftParen), n(N::ArithExpr), t(K::RightParen)],
            ),
            K::Id | K::Num => Production::leaf(head, kind),
            _ => return None,
        },

        N::PrintExpr => match kind {
            K::Id | K::LeftParen | K::True | K::False | K::Num => {
                Production::new(head, [n(N::RelExpr), n(N::BoolExpr)])
            }
            K::DoubleQuote => Production::new(
                head,
                [t(K::DoubleQuote), t(K::StringLiteral), t(K::DoubleQuote)],
            ),
            _ => return None,
        },
    };
    Some(production)
}

/// The `'static` spelling of a type keyword
fn type_keyword(value: &str) -> Option<&'static str> {
    match value {
        "int" => Some("int"),
        "boolean" => Some("boolean"),
        "char" => Some("char"),
        _ => None,
    }
}

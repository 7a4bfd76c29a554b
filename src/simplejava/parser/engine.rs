//! The parse driver
//!
//! For every input token the driver first expands the top of the stack until a terminal is
//! exposed, then matches that terminal against the token:
//!
//!     - scope-close on top: pop it and move the cursor to its parent.
//!     - nonterminal on top: ask the table. An epsilon production pops the nonterminal and
//!       its scope-close marker and attaches the nonterminal with an epsilon child, leaving
//!       the cursor where it is. Any other production pops the nonterminal, opens its node,
//!       and pushes the body.
//!     - terminal on top: compare kinds. On a match the leaf is attached where the cursor
//!       now points, which is only known once expansion has settled.
//!
//! The parse succeeds when the input runs out with an empty stack.

use super::error::{Expected, SyntaxError};
use super::stack::ParseStack;
use super::tree::ParseTree;
use super::tree_builder::TreeBuilder;
use crate::simplejava::grammar::{predict, NonTerminal, Symbol};
use crate::simplejava::token::Token;
use tracing::{debug, trace};

/// Parse a token stream into its derivation tree
pub fn parse<I>(tokens: I) -> Result<ParseTree, SyntaxError>
where
    I: IntoIterator<Item = Token>,
{
    let mut stack = ParseStack::new(NonTerminal::Program);
    let mut builder = TreeBuilder::new(NonTerminal::Program);
    let mut consumed = 0;

    for (position, token) in tokens.into_iter().enumerate() {
        if let Err(err) = expand(&mut stack, &mut builder, &token, position)
            .and_then(|()| accept(&mut stack, &mut builder, token, position))
        {
            debug!(error = err.kind_name(), position, "parse failed");
            return Err(err);
        }
        consumed = position + 1;
    }

    if !stack.is_empty() {
        let err = SyntaxError::UnconsumedStack {
            remaining: stack.pending(),
            position: consumed,
        };
        debug!(error = err.kind_name(), position = consumed, "parse failed");
        return Err(err);
    }

    debug!(
        tokens = consumed,
        nodes = builder.node_count(),
        "parse complete"
    );
    Ok(builder.finish())
}

/// Rewrite the top of the stack until a terminal (or nothing) is exposed
fn expand(
    stack: &mut ParseStack,
    builder: &mut TreeBuilder,
    lookahead: &Token,
    position: usize,
) -> Result<(), SyntaxError> {
    loop {
        match stack.top() {
            Some(Symbol::ScopeClose) => {
                stack.pop();
                builder.close();
                trace!("scope close");
            }
            Some(Symbol::NonTerminal(head)) => {
                let production =
                    predict(head, lookahead).ok_or_else(|| SyntaxError::NoApplicableRule {
                        nonterminal: head,
                        found: lookahead.clone(),
                        position,
                    })?;
                stack.pop();

                if production.is_epsilon() {
                    stack.pop_scope_close();
                    builder.epsilon(head);
                    trace!(nonterminal = %head, lookahead = %lookahead, "expand to epsilon");
                    continue;
                }

                // The root node already stands for the start symbol
                if head != NonTerminal::Program {
                    builder.open(head);
                }
                stack.push_body(&production.body);
                trace!(
                    nonterminal = %head,
                    lookahead = %lookahead,
                    symbols = production.body.len(),
                    "expand"
                );
            }
            // Epsilon never reaches the stack, see ParseStack::push_body
            Some(Symbol::Terminal(_) | Symbol::Epsilon) | None => return Ok(()),
        }
    }
}

/// Match the exposed terminal against the current token
fn accept(
    stack: &mut ParseStack,
    builder: &mut TreeBuilder,
    token: Token,
    position: usize,
) -> Result<(), SyntaxError> {
    match stack.top() {
        Some(Symbol::Terminal(expected)) if expected.kind == token.kind => {
            stack.pop();
            trace!(token = %token, position, "match");
            builder.leaf(token);
            Ok(())
        }
        Some(Symbol::Terminal(expected)) => Err(SyntaxError::TerminalMismatch {
            expected: Expected::Token(expected.kind),
            found: token,
            position,
        }),
        _ => Err(SyntaxError::TerminalMismatch {
            expected: Expected::EndOfInput,
            found: token,
            position,
        }),
    }
}

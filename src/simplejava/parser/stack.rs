//! The parse stack
//!
//! Read top to bottom, the stack spells out what the rest of the input still has to derive,
//! with a scope-close marker under every nonterminal that came from a production body.

use crate::simplejava::grammar::{NonTerminal, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStack {
    symbols: Vec<Symbol>,
}

impl ParseStack {
    /// A stack holding only the start symbol. The start symbol is the tree root, so it gets
    /// no scope-close marker.
    pub fn new(start: NonTerminal) -> Self {
        ParseStack {
            symbols: vec![Symbol::NonTerminal(start)],
        }
    }

    pub fn top(&self) -> Option<Symbol> {
        self.symbols.last().copied()
    }

    pub fn pop(&mut self) -> Option<Symbol> {
        self.symbols.pop()
    }

    /// Pop a scope-close marker if one is on top
    pub fn pop_scope_close(&mut self) -> bool {
        if self.top() == Some(Symbol::ScopeClose) {
            self.symbols.pop();
            true
        } else {
            false
        }
    }

    /// Push a production body so that its first symbol ends up on top. Each nonterminal
    /// gets a scope-close marker directly beneath it; epsilon is never pushed.
    pub fn push_body(&mut self, body: &[Symbol]) {
        for symbol in body.iter().rev() {
            match symbol {
                Symbol::Epsilon => continue,
                Symbol::NonTerminal(_) => {
                    self.symbols.push(Symbol::ScopeClose);
                    self.symbols.push(*symbol);
                }
                Symbol::Terminal(_) | Symbol::ScopeClose => self.symbols.push(*symbol),
            }
        }
    }

    /// Grammar symbols still pending, top first, markers left out
    pub fn pending(&self) -> Vec<Symbol> {
        self.symbols
            .iter()
            .rev()
            .filter(|symbol| !symbol.is_scope_close())
            .copied()
            .collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

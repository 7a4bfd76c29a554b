//! Tree construction during a parse
//!
//! The tree grows in an [Arena]; the cursor is the index of the node new children are
//! attached to. Opening a nonterminal moves the cursor into it, closing moves it back to
//! the parent.

use super::arena::Arena;
use super::tree::{NodeLabel, ParseTree};
use crate::simplejava::grammar::NonTerminal;
use crate::simplejava::token::Token;

#[derive(Debug)]
pub struct TreeBuilder {
    arena: Arena,
    cursor: usize,
}

impl TreeBuilder {
    pub fn new(root: NonTerminal) -> Self {
        TreeBuilder {
            arena: Arena::new(NodeLabel::NonTerminal(root), None),
            cursor: 0,
        }
    }

    /// Attach a nonterminal under the cursor and descend into it
    pub fn open(&mut self, nonterminal: NonTerminal) {
        self.cursor = self
            .arena
            .push(self.cursor, NodeLabel::NonTerminal(nonterminal), None);
    }

    /// Attach a nonterminal with a single epsilon child; the cursor stays put
    pub fn epsilon(&mut self, nonterminal: NonTerminal) {
        let node = self
            .arena
            .push(self.cursor, NodeLabel::NonTerminal(nonterminal), None);
        self.arena.push(node, NodeLabel::Epsilon, None);
    }

    /// Attach a terminal leaf for a matched token
    pub fn leaf(&mut self, token: Token) {
        self.arena.push(self.cursor, NodeLabel::Terminal, Some(token));
    }

    /// Move the cursor to its parent. At the root this does nothing.
    pub fn close(&mut self) {
        if let Some(parent) = self.arena.get(self.cursor).parent {
            self.cursor = parent;
        }
    }

    #[cfg(test)]
    fn cursor_label(&self) -> NodeLabel {
        self.arena.get(self.cursor).label
    }

    #[cfg(test)]
    fn is_at_root(&self) -> bool {
        self.cursor == 0
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn finish(self) -> ParseTree {
        ParseTree::new(self.arena.into_tree())
    }
}

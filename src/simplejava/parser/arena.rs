//! Index-linked node storage
//!
//! Nodes point at their parent and children by index, and a child always has a larger
//! index than its parent. Both the parse and the flat serialized form produce trees in this
//! shape; [Arena::into_tree] turns one into an owned [TreeNode] bottom-up, without
//! recursion.

use super::tree::{NodeLabel, TreeNode};
use crate::simplejava::token::Token;

#[derive(Debug)]
pub(super) struct ArenaNode {
    pub label: NodeLabel,
    pub token: Option<Token>,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

impl ArenaNode {
    fn new(label: NodeLabel, token: Option<Token>, parent: Option<usize>) -> Self {
        ArenaNode {
            label,
            token,
            parent,
            children: Vec::new(),
        }
    }

    /// Build the owned node, taking its already-built children out of `built`
    fn assemble(self, built: &mut [Option<TreeNode>]) -> TreeNode {
        let children = self
            .children
            .iter()
            .filter_map(|&child| {
                child
                    .checked_sub(1)
                    .and_then(|slot| built.get_mut(slot))
                    .and_then(Option::take)
            })
            .collect();
        TreeNode {
            label: self.label,
            token: self.token,
            children,
        }
    }
}

/// The root is held apart from the rest, so a tree always has one. Index 0 is the root,
/// index `i > 0` lives in `rest[i - 1]`.
#[derive(Debug)]
pub(super) struct Arena {
    root: ArenaNode,
    rest: Vec<ArenaNode>,
}

impl Arena {
    pub fn new(label: NodeLabel, token: Option<Token>) -> Self {
        Arena {
            root: ArenaNode::new(label, token, None),
            rest: Vec::new(),
        }
    }

    /// Copy an owned tree into an arena, in derivation order
    pub fn from_tree(root: &TreeNode) -> Self {
        let mut arena = Arena::new(root.label, root.token.clone());
        let mut pending: Vec<(&TreeNode, usize)> =
            root.children.iter().rev().map(|child| (child, 0)).collect();
        while let Some((node, parent)) = pending.pop() {
            let index = arena.push(parent, node.label, node.token.clone());
            pending.extend(node.children.iter().rev().map(|child| (child, index)));
        }
        arena
    }

    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    pub fn get(&self, index: usize) -> &ArenaNode {
        match index.checked_sub(1) {
            None => &self.root,
            Some(slot) => &self.rest[slot],
        }
    }

    fn get_mut(&mut self, index: usize) -> &mut ArenaNode {
        match index.checked_sub(1) {
            None => &mut self.root,
            Some(slot) => &mut self.rest[slot],
        }
    }

    /// Append a node as the last child of `parent` and return its index
    pub fn push(&mut self, parent: usize, label: NodeLabel, token: Option<Token>) -> usize {
        let index = self.len();
        self.rest.push(ArenaNode::new(label, token, Some(parent)));
        self.get_mut(parent).children.push(index);
        index
    }

    pub fn into_tree(self) -> TreeNode {
        let Arena { root, rest } = self;
        let mut built: Vec<Option<TreeNode>> = Vec::with_capacity(rest.len());
        built.resize_with(rest.len(), || None);

        for (slot, node) in rest.into_iter().enumerate().rev() {
            let tree = node.assemble(&mut built);
            built[slot] = Some(tree);
        }
        root.assemble(&mut built)
    }
}

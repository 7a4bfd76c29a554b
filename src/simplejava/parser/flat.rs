//! Serialized form of a parse tree
//!
//!     A [ParseTree] is written as a flat list of nodes in derivation order. Every node but
//!     the root names its parent by index; children keep the order in which they appear:
//!
//!         nodes:
//!           - label: { non-terminal: program }
//!           - label: terminal
//!             parent: 0
//!             token: { kind: public }
//!           - ...
//!
//!     The encoding is two levels deep whatever the size of the program, so JSON and YAML
//!     readers and writers never hit a nesting limit. Reading checks that the list really
//!     describes a tree before building it.

use super::arena::Arena;
use super::tree::{NodeLabel, ParseTree, TreeNode};
use crate::simplejava::token::Token;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Serialize)]
struct FlatNodeRef<'a> {
    label: NodeLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a Token>,
}

#[derive(Serialize)]
struct FlatTreeRef<'a> {
    nodes: Vec<FlatNodeRef<'a>>,
}

#[derive(Deserialize)]
struct FlatNode {
    label: NodeLabel,
    #[serde(default)]
    parent: Option<usize>,
    #[serde(default)]
    token: Option<Token>,
}

#[derive(Deserialize)]
struct FlatTree {
    nodes: Vec<FlatNode>,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ShapeError {
    #[error("tree has no nodes")]
    Empty,
    #[error("the root node must not have a parent")]
    RootWithParent,
    #[error("node {0} has no parent")]
    Orphan(usize),
    #[error("node {index} names parent {parent}, which does not come before it")]
    ParentNotBefore { index: usize, parent: usize },
    #[error("node {index} hangs under node {parent}, which is not a nonterminal")]
    ParentNotNonTerminal { index: usize, parent: usize },
    #[error("node {0}: terminals need a token and other nodes must not have one")]
    TokenMismatch(usize),
}

fn check_token(index: usize, node: &FlatNode) -> Result<(), ShapeError> {
    match (node.label, &node.token) {
        (NodeLabel::Terminal, Some(_)) => Ok(()),
        (NodeLabel::NonTerminal(_) | NodeLabel::Epsilon, None) => Ok(()),
        _ => Err(ShapeError::TokenMismatch(index)),
    }
}

impl FlatTree {
    fn into_tree(self) -> Result<TreeNode, ShapeError> {
        let mut nodes = self.nodes.into_iter().enumerate();
        let (_, root) = nodes.next().ok_or(ShapeError::Empty)?;
        if root.parent.is_some() {
            return Err(ShapeError::RootWithParent);
        }
        check_token(0, &root)?;

        let mut arena = Arena::new(root.label, root.token);
        for (index, node) in nodes {
            check_token(index, &node)?;
            let parent = node.parent.ok_or(ShapeError::Orphan(index))?;
            if parent >= index {
                return Err(ShapeError::ParentNotBefore { index, parent });
            }
            if !matches!(arena.get(parent).label, NodeLabel::NonTerminal(_)) {
                return Err(ShapeError::ParentNotNonTerminal { index, parent });
            }
            arena.push(parent, node.label, node.token);
        }
        Ok(arena.into_tree())
    }
}

impl Serialize for ParseTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut nodes = Vec::new();
        let mut pending: Vec<(&TreeNode, Option<usize>)> = vec![(&self.root, None)];
        while let Some((node, parent)) = pending.pop() {
            let index = nodes.len();
            nodes.push(FlatNodeRef {
                label: node.label,
                parent,
                token: node.token.as_ref(),
            });
            pending.extend(node.children.iter().rev().map(|child| (child, Some(index))));
        }
        FlatTreeRef { nodes }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParseTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FlatTree::deserialize(deserializer)?
            .into_tree()
            .map(ParseTree::new)
            .map_err(D::Error::custom)
    }
}

//! The parse tree
//!
//! A [ParseTree] is the complete derivation of one program. Interior nodes are nonterminals
//! in the order they were expanded, leaves are either the input tokens the terminals matched
//! or an epsilon marker under a nonterminal that derived nothing.

use super::arena::Arena;
use crate::simplejava::grammar::NonTerminal;
use crate::simplejava::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeLabel {
    NonTerminal(NonTerminal),
    Terminal,
    Epsilon,
}

/// A node of the parse tree. Clone, comparison, debug output and drop all walk the tree
/// with an explicit stack; serialization goes through [ParseTree].
pub struct TreeNode {
    pub label: NodeLabel,
    /// Set on terminal leaves only
    pub token: Option<Token>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn branch(nonterminal: NonTerminal, children: Vec<TreeNode>) -> Self {
        TreeNode {
            label: NodeLabel::NonTerminal(nonterminal),
            token: None,
            children,
        }
    }

    pub fn leaf(token: Token) -> Self {
        TreeNode {
            label: NodeLabel::Terminal,
            token: Some(token),
            children: Vec::new(),
        }
    }

    pub fn epsilon() -> Self {
        TreeNode {
            label: NodeLabel::Epsilon,
            token: None,
            children: Vec::new(),
        }
    }

    pub fn nonterminal(&self) -> Option<NonTerminal> {
        match self.label {
            NodeLabel::NonTerminal(nonterminal) => Some(nonterminal),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.label == NodeLabel::Terminal
    }

    pub fn is_epsilon(&self) -> bool {
        self.label == NodeLabel::Epsilon
    }

    /// True for a nonterminal whose only child is epsilon
    pub fn derives_epsilon(&self) -> bool {
        matches!(self.children.as_slice(), [only] if only.is_epsilon())
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn child(&self, index: usize) -> Option<&TreeNode> {
        self.children.get(index)
    }

    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// All nodes labelled `nonterminal` in this subtree, in derivation order
    pub fn find_all(&self, nonterminal: NonTerminal) -> Vec<&TreeNode> {
        self.preorder()
            .filter(|node| node.nonterminal() == Some(nonterminal))
            .collect()
    }

    /// The tokens under this node, left to right
    pub fn leaves(&self) -> impl Iterator<Item = &Token> + '_ {
        self.preorder().filter_map(|node| node.token.as_ref())
    }
}

impl Clone for TreeNode {
    fn clone(&self) -> Self {
        Arena::from_tree(self).into_tree()
    }
}

/// Equal when both trees list the same nodes, with the same child counts, in preorder
impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.preorder();
        let mut right = other.preorder();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b))
                    if a.label == b.label
                        && a.token == b.token
                        && a.children.len() == b.children.len() => {}
                _ => return false,
            }
        }
    }
}

impl Eq for TreeNode {}

/// Compact bracketed form: `<<term>>[<<factor>>[<id> "x"], <<term'>>[ε]]`
impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Node(&'a TreeNode),
            Separator,
            Close,
        }

        let mut steps = vec![Step::Node(self)];
        while let Some(step) = steps.pop() {
            let node = match step {
                Step::Node(node) => node,
                Step::Separator => {
                    f.write_str(", ")?;
                    continue;
                }
                Step::Close => {
                    f.write_str("]")?;
                    continue;
                }
            };

            match (node.label, &node.token) {
                (NodeLabel::NonTerminal(nonterminal), _) => write!(f, "{}", nonterminal)?,
                (NodeLabel::Terminal, Some(token)) => write!(f, "{}", token)?,
                (NodeLabel::Terminal, None) => f.write_str("<terminal>")?,
                (NodeLabel::Epsilon, _) => f.write_str("ε")?,
            }
            if node.children.is_empty() {
                continue;
            }
            f.write_str("[")?;
            steps.push(Step::Close);
            for (index, child) in node.children.iter().enumerate().rev() {
                steps.push(Step::Node(child));
                if index > 0 {
                    steps.push(Step::Separator);
                }
            }
        }
        Ok(())
    }
}

// Statement lists nest one level per statement; tear down iteratively.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Depth-first, left-to-right traversal. Uses an explicit stack, so deep trees are fine.
pub struct Preorder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A complete derivation. Serializes as a flat node list, see [flat](super::flat).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    pub root: TreeNode,
}

impl ParseTree {
    pub fn new(root: TreeNode) -> Self {
        ParseTree { root }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Matched tokens in input order
    pub fn leaves(&self) -> impl Iterator<Item = &Token> + '_ {
        self.root.leaves()
    }

    pub fn tokens(&self) -> Vec<Token> {
        self.leaves().cloned().collect()
    }

    pub fn preorder(&self) -> Preorder<'_> {
        self.root.preorder()
    }

    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    pub fn find_all(&self, nonterminal: NonTerminal) -> Vec<&TreeNode> {
        self.root.find_all(nonterminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplejava::token::TokenKind;

    fn sample() -> ParseTree {
        // term → factor(x) term'(ε)
        ParseTree::new(TreeNode::branch(
            NonTerminal::Term,
            vec![
                TreeNode::branch(
                    NonTerminal::Factor,
                    vec![TreeNode::leaf(Token::with_value(TokenKind::Id, "x"))],
                ),
                TreeNode::branch(NonTerminal::TermPrime, vec![TreeNode::epsilon()]),
            ],
        ))
    }

    #[test]
    fn test_preorder_visits_left_to_right() {
        let tree = sample();
        let labels: Vec<_> = tree.preorder().map(|node| node.label).collect();
        assert_eq!(
            labels,
            vec![
                NodeLabel::NonTerminal(NonTerminal::Term),
                NodeLabel::NonTerminal(NonTerminal::Factor),
                NodeLabel::Terminal,
                NodeLabel::NonTerminal(NonTerminal::TermPrime),
                NodeLabel::Epsilon,
            ]
        );
    }

    #[test]
    fn test_counts() {
        let tree = sample();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.tokens(), vec![Token::with_value(TokenKind::Id, "x")]);
    }

    #[test]
    fn test_node_queries() {
        let tree = sample();
        let term_prime = tree.root().child(1).unwrap();
        assert!(term_prime.derives_epsilon());
        assert!(!tree.root().derives_epsilon());
        assert_eq!(tree.find_all(NonTerminal::Factor).len(), 1);
        assert!(tree.root().child(2).is_none());
    }

    fn deep(levels: usize) -> ParseTree {
        let mut node = TreeNode::epsilon();
        for _ in 0..levels {
            node = TreeNode::branch(NonTerminal::StatementList, vec![node]);
        }
        ParseTree::new(node)
    }

    #[test]
    fn test_equality_compares_shape() {
        let flat = TreeNode::branch(
            NonTerminal::Term,
            vec![TreeNode::epsilon(), TreeNode::epsilon()],
        );
        let nested = TreeNode::branch(
            NonTerminal::Term,
            vec![TreeNode::branch(NonTerminal::Term, vec![TreeNode::epsilon()])],
        );
        assert_ne!(flat, nested);
        assert_eq!(sample(), sample());
        assert_ne!(sample().root, sample().root.children[0]);
    }

    #[test]
    fn test_debug_form() {
        assert_eq!(
            format!("{:?}", sample().root),
            "<<term>>[<<factor>>[<id> \"x\"], <<term'>>[ε]]"
        );
    }

    #[test]
    fn test_deep_trees_clone_compare_and_print() {
        let tree = deep(100_000);
        let copy = tree.clone();
        assert_eq!(copy, tree);
        assert_eq!(copy.depth(), 100_001);
        let printed = format!("{:?}", copy.root);
        assert!(printed.starts_with("<<los>>[<<los>>["));
        assert!(printed.ends_with("ε]]"));
    }
}

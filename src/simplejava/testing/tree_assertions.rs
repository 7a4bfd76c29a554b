//! Fluent assertions over parse trees

use crate::simplejava::grammar::NonTerminal;
use crate::simplejava::lexer::detokenize;
use crate::simplejava::parser::{NodeLabel, ParseTree, TreeNode};
use crate::simplejava::token::{Token, TokenKind};

/// Start asserting at the root of a tree
pub fn assert_tree(tree: &ParseTree) -> NodeAssertion<'_> {
    NodeAssertion {
        node: tree.root(),
        context: describe(tree.root()),
    }
}

fn describe(node: &TreeNode) -> String {
    match (node.label, node.token()) {
        (NodeLabel::NonTerminal(nonterminal), _) => nonterminal.name().to_string(),
        (NodeLabel::Terminal, Some(token)) => token.kind.name().to_string(),
        (NodeLabel::Terminal, None) => "terminal".to_string(),
        (NodeLabel::Epsilon, _) => "ε".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a TreeNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn node(&self) -> &'a TreeNode {
        self.node
    }

    pub fn is(self, expected: NonTerminal) -> Self {
        assert_eq!(
            self.node.nonterminal(),
            Some(expected),
            "{}: expected {}, found {:?}",
            self.context,
            expected,
            self.node.label
        );
        self
    }

    /// The node derived ε: exactly one child, and that child is epsilon
    pub fn is_empty_production(self) -> Self {
        assert!(
            self.node.derives_epsilon(),
            "{}: expected an epsilon production, found {} children",
            self.context,
            self.node.children.len()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} children, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Continue at a child
    pub fn child(self, index: usize) -> NodeAssertion<'a> {
        let node = self.node.child(index).unwrap_or_else(|| {
            panic!(
                "{}: no child {} (has {})",
                self.context,
                index,
                self.node.children.len()
            )
        });
        NodeAssertion {
            context: format!("{}/{}[{}]", self.context, describe(node), index),
            node,
        }
    }

    /// Follow a path of child indices
    pub fn path(self, indices: &[usize]) -> NodeAssertion<'a> {
        indices.iter().fold(self, |assertion, &index| assertion.child(index))
    }

    /// Run assertions on a child and stay at this node
    pub fn with_child<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let node = self.node;
        let context = self.context.clone();
        check(self.child(index));
        NodeAssertion { node, context }
    }

    /// The node is a terminal leaf of this kind
    pub fn token(self, kind: TokenKind) -> Self {
        let actual = self.node.token().map(|token| token.kind);
        assert_eq!(
            actual,
            Some(kind),
            "{}: expected terminal {}, found {:?}",
            self.context,
            kind,
            self.node.label
        );
        self
    }

    /// The node is a terminal leaf carrying exactly this token
    pub fn token_value(self, kind: TokenKind, value: &str) -> Self {
        let expected = Token::with_value(kind, value);
        assert_eq!(
            self.node.token(),
            Some(&expected),
            "{}: expected {}",
            self.context,
            expected
        );
        self
    }

    /// Kinds of all tokens under this node, left to right
    pub fn leaf_kinds(self, expected: &[TokenKind]) -> Self {
        let actual: Vec<_> = self.node.leaves().map(|token| token.kind).collect();
        assert_eq!(actual, expected, "{}: leaf kinds differ", self.context);
        self
    }

    /// The tokens under this node, rendered back to source text
    pub fn text(self, expected: &str) -> Self {
        let tokens: Vec<Token> = self.node.leaves().cloned().collect();
        assert_eq!(detokenize(&tokens), expected, "{}: text differs", self.context);
        self
    }

    /// Number of `nonterminal` nodes in this subtree, this node included
    pub fn count(self, nonterminal: NonTerminal, expected: usize) -> Self {
        let actual = self.node.find_all(nonterminal).len();
        assert_eq!(
            actual, expected,
            "{}: expected {} {} nodes, found {}",
            self.context, expected, nonterminal, actual
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplejava::testing::tokens::{id, kw, program};
    use crate::simplejava::parser::parse;

    #[test]
    fn test_fluent_chain() {
        let tree = parse(program(vec![id("x"), kw(TokenKind::Assign), id("y"), kw(TokenKind::Semicolon)])).unwrap();
        assert_tree(&tree)
            .is(NonTerminal::Program)
            .child_count(16)
            .count(NonTerminal::Assign, 1)
            .with_child(13, |los| {
                los.is(NonTerminal::StatementList)
                    .child(0)
                    .is(NonTerminal::Statement)
                    .text("x = y ;")
                    .child(0)
                    .is(NonTerminal::Assign)
                    .child(0)
                    .token_value(TokenKind::Id, "x");
            })
            .path(&[13, 1])
            .is_empty_production();
    }

    #[test]
    #[should_panic(expected = "prog/los[13]: expected <<stat>>")]
    fn test_failure_names_the_path() {
        let tree = parse(program(vec![])).unwrap();
        assert_tree(&tree).child(13).is(NonTerminal::Statement);
    }
}

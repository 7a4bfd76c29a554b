//! Treeviz formatter for parse trees
//!
//! One node per line, children connected with box-drawing characters:
//!
//! ```text
//! <<decl>>
//! ├─ <<type>>
//! │ └─ <type> "int"
//! ├─ <id> "x"
//! └─ <<poss-assign>>
//!   └─ ε
//! ```
//!
//! The walk uses an explicit stack; statement lists nest one level per statement.

use super::registry::{FormatError, Formatter};
use crate::simplejava::parser::{NodeLabel, ParseTree, TreeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Print token values next to value-carrying terminals
    pub show_values: bool,
    /// Print the ε leaves of empty productions
    pub show_epsilon: bool,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        TreevizOptions {
            show_values: true,
            show_epsilon: true,
        }
    }
}

fn node_label(node: &TreeNode, options: TreevizOptions) -> String {
    match (node.label, node.token()) {
        (NodeLabel::NonTerminal(nonterminal), _) => nonterminal.to_string(),
        (NodeLabel::Terminal, Some(token)) if options.show_values => token.to_string(),
        (NodeLabel::Terminal, Some(token)) => token.kind.to_string(),
        (NodeLabel::Terminal, None) => "<?>".to_string(),
        (NodeLabel::Epsilon, _) => "ε".to_string(),
    }
}

fn push_children<'a>(
    stack: &mut Vec<(&'a TreeNode, String, bool)>,
    node: &'a TreeNode,
    prefix: &str,
    options: TreevizOptions,
) {
    let children: Vec<_> = node
        .children
        .iter()
        .filter(|child| options.show_epsilon || !child.is_epsilon())
        .collect();
    let last = children.len().saturating_sub(1);
    for (i, child) in children.into_iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), i == last));
    }
}

pub fn to_treeviz_str(tree: &ParseTree, options: TreevizOptions) -> String {
    let mut result = String::new();
    result.push_str(&node_label(tree.root(), options));
    result.push('\n');

    let mut stack = Vec::new();
    push_children(&mut stack, tree.root(), "", options);

    while let Some((node, prefix, is_last)) = stack.pop() {
        let connector = if is_last { "└─" } else { "├─" };
        result.push_str(&format!(
            "{}{} {}\n",
            prefix,
            connector,
            node_label(node, options)
        ));
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        push_children(&mut stack, node, &child_prefix, options);
    }

    result
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormatter {
    options: TreevizOptions,
}

impl TreevizFormatter {
    pub fn new(options: TreevizOptions) -> Self {
        TreevizFormatter { options }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tree, self.options))
    }

    fn description(&self) -> &str {
        "Box-drawing outline of the derivation"
    }
}

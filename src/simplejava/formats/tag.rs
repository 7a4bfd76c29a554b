//! XML-like tag serialization
//!
//! Nonterminals become elements named after the grammar symbol, terminals become empty
//! elements named after their kind (or elements wrapping their value), epsilon is
//! `<epsilon/>`.
//!
//! ```text
//! <decl>
//!   <type>
//!     <type>int</type>
//!   </type>
//!   <id>x</id>
//!   <poss-assign>
//!     <epsilon/>
//!   </poss-assign>
//! </decl>
//! ```

use super::registry::{FormatError, Formatter};
use crate::simplejava::parser::{NodeLabel, ParseTree, TreeNode};

enum Step<'a> {
    Open(&'a TreeNode, usize),
    Close(&'static str, usize),
}

/// Serialize a tree to tag format
pub fn serialize_tree(tree: &ParseTree) -> String {
    let mut output = String::new();
    let mut steps = vec![Step::Open(tree.root(), 0)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Open(node, depth) => {
                let indent = "  ".repeat(depth);
                match (node.label, node.token()) {
                    (NodeLabel::NonTerminal(nonterminal), _) => {
                        let tag = nonterminal.tag_name();
                        if node.children.is_empty() {
                            output.push_str(&format!("{}<{}/>\n", indent, tag));
                            continue;
                        }
                        output.push_str(&format!("{}<{}>\n", indent, tag));
                        steps.push(Step::Close(tag, depth));
                        steps.extend(
                            node.children
                                .iter()
                                .rev()
                                .map(|child| Step::Open(child, depth + 1)),
                        );
                    }
                    (NodeLabel::Terminal, Some(token)) => {
                        let tag = token.kind.name();
                        match token.value() {
                            Some(value) => output.push_str(&format!(
                                "{}<{}>{}</{}>\n",
                                indent,
                                tag,
                                escape_xml(value),
                                tag
                            )),
                            None => output.push_str(&format!("{}<{}/>\n", indent, tag)),
                        }
                    }
                    (NodeLabel::Terminal, None) => {
                        output.push_str(&format!("{}<terminal/>\n", indent));
                    }
                    (NodeLabel::Epsilon, _) => {
                        output.push_str(&format!("{}<epsilon/>\n", indent));
                    }
                }
            }
            Step::Close(tag, depth) => {
                output.push_str(&format!("{}</{}>\n", "  ".repeat(depth), tag));
            }
        }
    }

    output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        Ok(serialize_tree(tree))
    }

    fn description(&self) -> &str {
        "XML-like elements named after grammar symbols"
    }
}

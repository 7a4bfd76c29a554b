//! Table-driven LL(1) parser
//!
//!     [parse] turns a token stream into a [ParseTree] that records the full leftmost
//!     derivation of the input, or fails with the first [SyntaxError].
//!
//!     There is no recursion. The driver keeps an explicit [ParseStack] of grammar symbols
//!     and a [TreeBuilder] whose cursor marks where the next node is attached. Expanding a
//!     nonterminal opens a node and moves the cursor into it; every nonterminal pushed from a
//!     production body sits on a scope-close marker, and popping that marker moves the
//!     cursor back to the parent. This is the stack-machine version of a recursive descent
//!     function returning to its caller.
//!
//!     Layout:
//!
//!         - [engine]: the driver loop.
//!         - [stack]: the parse stack.
//!         - [tree_builder]: the cursor over the arena the tree grows in.
//!         - [tree]: the finished, owned parse tree.
//!         - `flat`: the serialized form of the tree, a node list with parent indices.
//!         - [error]: syntax errors.

mod arena;
pub mod engine;
pub mod error;
mod flat;
pub mod stack;
pub mod tree;
pub mod tree_builder;

pub use engine::parse;
pub use error::{Expected, SyntaxError};
pub use stack::ParseStack;
pub use tree::{NodeLabel, ParseTree, TreeNode};
pub use tree_builder::TreeBuilder;

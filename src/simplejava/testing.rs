//! Testing utilities for SimpleJava parse trees
//!
//!     Two pieces:
//!
//!         - [assert_tree]: a fluent assertion API over parse trees. Assertions panic with
//!           the path to the node that failed, e.g. `prog/los[13]/stat[0]`.
//!         - [samples]: the sample programs under `docs/samples/`, embedded at compile time
//!           and available as source, tokens or trees.
//!
//!     Tests should prefer the samples over inline source where a sample covers the case,
//!     so the same programs are exercised by every layer.
//!
//!     [tokens] has small constructors for building token streams by hand, for cases that
//!     the lexer cannot produce (value tokens without values, unknown type keywords).

mod tree_assertions;

pub mod samples;
pub mod tokens;

pub use samples::{SampleError, Samples};
pub use tree_assertions::{assert_tree, NodeAssertion};

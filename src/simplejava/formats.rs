//! Output formats for parse trees
//!
//! This module contains the serializers for [ParseTree](crate::simplejava::parser::ParseTree)s:
//! - treeviz: box-drawing outline, the default for the binary
//! - tag: XML-like elements named after the grammar symbols
//! - json and yaml: the serde representation of the tree

pub mod registry;
pub mod serde_formats;
pub mod tag;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serde_formats::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_tree as serialize_tree_tag, TagFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter, TreevizOptions};

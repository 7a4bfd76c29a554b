//! # simplejava
//!
//! A table-driven LL(1) parser for SimpleJava, a small imperative teaching language
//! (declarations, assignment, while/for/if-else, print, arithmetic, relational and
//! boolean expressions).
//!
//! File Layout
//!
//!     src/simplejava
//!       ├── token        Token kinds and the immutable token value
//!       ├── lexer        Reference tokenizer (logos) and detokenizer
//!       ├── grammar      Grammar symbols and the fixed production table
//!       ├── parser       Explicit-stack driver, tree builder and the parse tree
//!       ├── formats      Tree serializers behind a registry
//!       ├── processor    token/tree stage + format pipeline used by the CLI
//!       ├── config       Layered configuration
//!       ├── diagnostics  Source context for error reporting
//!       └── testing      Fluent tree assertions and the sample programs
//!
//! The parser proper only consumes tokens. Everything that starts from source text
//! (the lexer, the processor, the binary) is a convenience layer around it.
//!
//! For testing guidelines, see the [testing module](simplejava::testing).

pub mod simplejava;

pub use simplejava::parser::{parse, ParseTree, SyntaxError};
pub use simplejava::token::{Token, TokenKind};

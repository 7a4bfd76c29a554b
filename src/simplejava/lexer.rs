//! Reference tokenizer for SimpleJava source text
//!
//! The parser is specified over token streams and does not care where they come from.
//! This module is the tokenizer the binary, the sample library and the tests use to get
//! there from source text. It is a vanilla logos lexer plus one small expansion step:
//! quoted literals are lexed as a single unit (`'a'`, `"hi"`) and then split into the
//! three tokens the grammar expects (quote, literal, quote).
//!
//! Whitespace and `//` line comments are skipped. Anything else the lexer does not know
//! is an error; unlike a document format there is no sensible "text" fallback here.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::{detokenize, ToSourceString};
pub use lexer_impl::{tokenize, tokenize_with_spans, LexError, Span};
pub use tokens::RawToken;

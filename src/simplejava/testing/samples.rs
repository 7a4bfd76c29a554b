//! Sample SimpleJava programs
//!
//! The files under `docs/samples/` are embedded at compile time, so tests do not depend on
//! the working directory. Every sample is a valid program.

use crate::simplejava::lexer::{tokenize, LexError};
use crate::simplejava::parser::{parse, ParseTree, SyntaxError};
use crate::simplejava::token::Token;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use thiserror::Error;

static SAMPLES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "000-empty-main.sj",
            include_str!("../../../docs/samples/000-empty-main.sj"),
        ),
        (
            "010-declarations.sj",
            include_str!("../../../docs/samples/010-declarations.sj"),
        ),
        (
            "020-while.sj",
            include_str!("../../../docs/samples/020-while.sj"),
        ),
        ("030-for.sj", include_str!("../../../docs/samples/030-for.sj")),
        (
            "040-if-else.sj",
            include_str!("../../../docs/samples/040-if-else.sj"),
        ),
        (
            "050-expressions.sj",
            include_str!("../../../docs/samples/050-expressions.sj"),
        ),
    ])
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("Sample not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

pub struct Samples;

impl Samples {
    /// Sample file names, sorted
    pub fn names() -> Vec<&'static str> {
        SAMPLES.keys().copied().collect()
    }

    pub fn get_string(name: &str) -> Result<&'static str, SampleError> {
        SAMPLES
            .get(name)
            .copied()
            .ok_or_else(|| SampleError::NotFound(name.to_string()))
    }

    pub fn get_tokens(name: &str) -> Result<Vec<Token>, SampleError> {
        Ok(tokenize(Self::get_string(name)?)?)
    }

    pub fn get_tree(name: &str) -> Result<ParseTree, SampleError> {
        Ok(parse(Self::get_tokens(name)?)?)
    }
}

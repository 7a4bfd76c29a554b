//! Main module for simplejava library functionality

pub mod config;
pub mod diagnostics;
pub mod formats;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;
pub mod token;

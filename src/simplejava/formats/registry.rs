//! Format registry for parse tree serialization
//!
//! Each format implements [Formatter] and is looked up by name in a [FormatRegistry].

use crate::simplejava::config::SimpleJavaConfig;
use crate::simplejava::parser::ParseTree;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for parse tree formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "treeviz", "tag")
    fn name(&self) -> &str;

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a tree using the named format
    pub fn serialize(&self, tree: &ParseTree, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(tree)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// (name, description) pairs, sorted by name
    pub fn descriptions(&self) -> Vec<(String, String)> {
        self.list_formats()
            .into_iter()
            .filter_map(|name| {
                let description = self.get(&name)?.description().to_string();
                Some((name, description))
            })
            .collect()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::TreevizFormatter::default());
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Defaults, with the treeviz options taken from configuration
    pub fn from_config(config: &SimpleJavaConfig) -> Self {
        let mut registry = Self::with_defaults();
        registry.register(super::TreevizFormatter::new(super::TreevizOptions {
            show_values: config.treeviz.show_values,
            show_epsilon: config.treeviz.show_epsilon,
        }));
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

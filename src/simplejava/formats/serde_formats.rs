//! JSON and YAML output of the tree's flat node list (see [ParseTree]'s serde impls)

use super::registry::{FormatError, Formatter};
use crate::simplejava::parser::ParseTree;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tree).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, tree: &ParseTree) -> Result<String, FormatError> {
        serde_yaml::to_string(tree).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML"
    }
}

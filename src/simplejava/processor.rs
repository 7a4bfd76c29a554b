//! File processing API
//!
//! Runs source text through the pipeline up to a stage (tokens or tree) and renders the
//! result in one of the formats of that stage. A processing spec is written
//! `<stage>-<format>`:
//!
//!     token-simple    one token per line
//!     token-json      the token stream as JSON
//!     tree-treeviz    box-drawing outline of the parse tree
//!     tree-tag        XML-like tags
//!     tree-json       the parse tree as JSON
//!     tree-yaml       the parse tree as YAML
//!
//! Tree formats are looked up in a [FormatRegistry].

use crate::simplejava::diagnostics::{render_lex_error, render_syntax_error};
use crate::simplejava::formats::{FormatError, FormatRegistry};
use crate::simplejava::lexer::{tokenize_with_spans, LexError, Span};
use crate::simplejava::parser::{parse, ParseTree, SyntaxError};
use crate::simplejava::token::Token;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Tree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Treeviz,
    Tag,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Tag => "tag",
            OutputFormat::Yaml => "yaml",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a spec string like "token-simple" or "tree-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "tree" => ProcessingStage::Tree,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "treeviz" => OutputFormat::Treeviz,
            "tag" => OutputFormat::Tag,
            "yaml" => OutputFormat::Yaml,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json)
            | (
                ProcessingStage::Tree,
                OutputFormat::Treeviz | OutputFormat::Tag | OutputFormat::Json | OutputFormat::Yaml,
            ) => Ok(ProcessingSpec { stage, format }),
            _ => Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' is not available for the {} stage",
                format.as_str(),
                match stage {
                    ProcessingStage::Token => "token",
                    ProcessingStage::Tree => "tree",
                }
            ))),
        }
    }

    pub fn available_specs() -> Vec<ProcessingSpec> {
        [
            (ProcessingStage::Token, OutputFormat::Simple),
            (ProcessingStage::Token, OutputFormat::Json),
            (ProcessingStage::Tree, OutputFormat::Treeviz),
            (ProcessingStage::Tree, OutputFormat::Tag),
            (ProcessingStage::Tree, OutputFormat::Json),
            (ProcessingStage::Tree, OutputFormat::Yaml),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }

    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Tree => "tree",
        };
        format!("{}-{}", stage, self.format.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("{error}")]
    Lex { error: LexError, report: String },
    #[error("{error}")]
    Syntax { error: SyntaxError, report: String },
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ProcessingError {
    /// Message with source context where there is one
    pub fn report(&self) -> String {
        match self {
            ProcessingError::Lex { report, .. } | ProcessingError::Syntax { report, .. } => {
                report.clone()
            }
            other => format!("error: {}\n", other),
        }
    }
}

/// Tokenize and parse source text, keeping source context for errors
pub fn parse_source(source: &str) -> Result<ParseTree, ProcessingError> {
    let (tokens, spans) = lex_source(source)?;
    parse(tokens).map_err(|error| ProcessingError::Syntax {
        report: render_syntax_error(source, &error, &spans),
        error,
    })
}

fn lex_source(source: &str) -> Result<(Vec<Token>, Vec<Span>), ProcessingError> {
    let tokens = tokenize_with_spans(source).map_err(|error| ProcessingError::Lex {
        report: render_lex_error(source, &error),
        error,
    })?;
    Ok(tokens.into_iter().unzip())
}

/// Process source text according to the processing spec
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    debug!(spec = %spec.name(), bytes = source.len(), "processing source");
    match spec.stage {
        ProcessingStage::Token => {
            let (tokens, _) = lex_source(source)?;
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Tree => {
            let tree = parse_source(source)?;
            Ok(registry.serialize(&tree, spec.format.as_str())?)
        }
    }
}

/// Read a file and process it according to the processing spec
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path)
        .map_err(|e| ProcessingError::IoError(format!("{}: {}", file_path.display(), e)))?;
    process_source(&content, spec, registry)
}

fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::SerializationError(e.to_string()).into()),
        _ => Ok(tokens
            .iter()
            .map(|token| format!("{}\n", token))
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_parsing() {
        let spec = ProcessingSpec::from_string("tree-treeviz").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Tree);
        assert_eq!(spec.format, OutputFormat::Treeviz);
        assert_eq!(spec.name(), "tree-treeviz");

        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Token);
    }

    #[test]
    fn test_spec_errors() {
        assert_eq!(
            ProcessingSpec::from_string("tree"),
            Err(ProcessingError::InvalidFormat("tree".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("ast-tag"),
            Err(ProcessingError::InvalidStage("ast".to_string()))
        );
        assert!(matches!(
            ProcessingSpec::from_string("token-treeviz"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("tree-simple"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("tree-xml"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_all_available_specs_round_trip() {
        for spec in ProcessingSpec::available_specs() {
            assert_eq!(ProcessingSpec::from_string(&spec.name()).unwrap(), spec);
        }
    }

    #[test]
    fn test_token_simple() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process_source("x = 'a';", &spec, &FormatRegistry::default()).unwrap();
        assert_eq!(
            output,
            "<id> \"x\"\n<assign>\n<single-quote>\n<char-literal> \"a\"\n<single-quote>\n<semicolon>\n"
        );
    }

    #[test]
    fn test_syntax_error_carries_report() {
        let spec = ProcessingSpec::from_string("tree-tag").unwrap();
        let err = process_source("public class {", &spec, &FormatRegistry::default()).unwrap_err();
        match &err {
            ProcessingError::Syntax { error, report } => {
                assert_eq!(error.position(), 2);
                assert!(report.contains(">>   1 | public class {"));
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_lex_error_carries_report() {
        let spec = ProcessingSpec::from_string("token-json").unwrap();
        let err = process_source("x = #;", &spec, &FormatRegistry::default()).unwrap_err();
        assert!(matches!(err, ProcessingError::Lex { .. }));
        assert!(err.report().contains(" --> 1:5"));
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("tree-json").unwrap();
        let err = process_file("/nonexistent/x.sj", &spec, &FormatRegistry::default()).unwrap_err();
        assert!(matches!(err, ProcessingError::IoError(_)));
    }
}

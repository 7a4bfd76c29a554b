//! Configuration
//!
//!     Settings come in layers, each one overriding the ones before it:
//!
//!         1. `defaults/simplejava.default.toml`, embedded in the binary
//!         2. `simplejava.toml` in the directory of the program being processed, if any
//!         3. a file named with `--config`, which must exist
//!         4. command line flags (`--format`, `--hide-values`, `--hide-epsilon`)
//!
//!     [Loader] stacks the layers; [Loader::build] rejects a result whose output format is
//!     not a processing spec or whose log level is not a filter directive.

use crate::simplejava::processor::ProcessingSpec;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/simplejava.default.toml");

/// Name of the per-directory configuration file
pub const PROJECT_FILE: &str = "simplejava.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimpleJavaConfig {
    pub output: OutputConfig,
    pub treeviz: TreevizConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// Processing spec used by `parse` when no `--format` is given
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreevizConfig {
    pub show_values: bool,
    pub show_epsilon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl SimpleJavaConfig {
    /// The configured output as a processing spec
    pub fn output_spec(&self) -> Result<ProcessingSpec, ConfigError> {
        ProcessingSpec::from_string(&self.output.format)
            .map_err(|err| ConfigError::Message(format!("output.format: {}", err)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.output_spec()?;
        EnvFilter::try_new(&self.logging.level)
            .map_err(|err| ConfigError::Message(format!("logging.level: {}", err)))?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the embedded defaults
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    fn set<I: Into<ValueKind>>(mut self, key: &str, value: I) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Layer [PROJECT_FILE] from the directory that holds `source`, when there is one
    pub fn for_source(self, source: impl AsRef<Path>) -> Self {
        let dir = source
            .as_ref()
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.layer_file(&dir.join(PROJECT_FILE), false)
    }

    /// Layer an explicitly named file. A missing file is an error at [Loader::build].
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    pub fn with_format(self, spec: &str) -> Result<Self, ConfigError> {
        self.set("output.format", spec)
    }

    /// Treeviz output without token values
    pub fn hide_values(self) -> Result<Self, ConfigError> {
        self.set("treeviz.show_values", false)
    }

    /// Treeviz output without epsilon leaves
    pub fn hide_epsilon(self) -> Result<Self, ConfigError> {
        self.set("treeviz.show_epsilon", false)
    }

    pub fn build(self) -> Result<SimpleJavaConfig, ConfigError> {
        let config: SimpleJavaConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// A fresh directory under the system temp dir, removed on drop
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "simplejava-config-{}-{}",
                name,
                std::process::id()
            ));
            std::fs::create_dir_all(&path).unwrap();
            ScratchDir(path)
        }

        fn write(&self, file: &str, contents: &str) -> PathBuf {
            let path = self.0.join(file);
            std::fs::write(&path, contents).unwrap();
            path
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.output.format, "tree-treeviz");
        assert_eq!(config.output_spec().unwrap().name(), "tree-treeviz");
        assert!(config.treeviz.show_values);
        assert!(config.treeviz.show_epsilon);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Loader::new()
            .with_format("tree-tag")
            .unwrap()
            .hide_epsilon()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.output.format, "tree-tag");
        assert!(!config.treeviz.show_epsilon);
        assert!(config.treeviz.show_values);
    }

    #[test]
    fn picks_up_project_file_next_to_the_source() {
        let dir = ScratchDir::new("project");
        dir.write(PROJECT_FILE, "[output]\nformat = \"tree-yaml\"\n");
        let source = dir.write("Main.sj", "");

        let config = Loader::new().for_source(&source).build().unwrap();
        assert_eq!(config.output.format, "tree-yaml");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn explicit_file_and_flags_beat_project_file() {
        let dir = ScratchDir::new("layers");
        dir.write(
            PROJECT_FILE,
            "[output]\nformat = \"tree-yaml\"\n[logging]\nlevel = \"info\"\n",
        );
        let explicit = dir.write("ci.toml", "[logging]\nlevel = \"debug\"\n");
        let source = dir.write("Main.sj", "");

        let config = Loader::new()
            .for_source(&source)
            .with_file(&explicit)
            .with_format("tree-json")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.output.format, "tree-json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn missing_project_file_is_ignored() {
        let config = Loader::new()
            .for_source("/nonexistent/dir/Main.sj")
            .build()
            .unwrap();
        assert_eq!(config, Loader::new().build().unwrap());
    }

    #[test]
    fn missing_explicit_file_fails() {
        assert!(Loader::new()
            .with_file("/nonexistent/simplejava.toml")
            .build()
            .is_err());
    }

    #[test]
    fn rejects_unknown_output_format() {
        let err = Loader::new().with_format("tree-xml").unwrap().build().unwrap_err();
        assert!(err.to_string().contains("output.format"), "{}", err);
    }

    #[test]
    fn rejects_bad_log_level() {
        let dir = ScratchDir::new("level");
        let file = dir.write("bad.toml", "[logging]\nlevel = \"simplejava=loud\"\n");
        let err = Loader::new().with_file(&file).build().unwrap_err();
        assert!(err.to_string().contains("logging.level"), "{}", err);
    }
}

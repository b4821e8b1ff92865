//! Configuration types for indent-lint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for indent-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for test failure (default: "error").
    /// Violations at or above this severity cause the runner to fail.
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Indentation-style options.
    #[serde(default)]
    pub indentation: IndentOptions,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Indentation-style options, read-only for the whole analysis run and
/// shared by every handler tree built during it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndentOptions {
    /// Step applied per nesting level.
    #[serde(default = "default_basic_offset")]
    pub basic_offset: i32,

    /// Tolerance added when matching a closing brace's column to its
    /// opening brace's column (and when placing an opening brace on its
    /// own line, for styles that intentionally offset braces).
    #[serde(default)]
    pub brace_adjustment: i32,

    /// Step applied to case groups inside a `switch` body.
    #[serde(default = "default_basic_offset")]
    pub case_indent: i32,

    /// Step applied to a wrapped `throws` clause on a method definition.
    #[serde(default = "default_basic_offset")]
    pub throws_indent: i32,

    /// Step applied to elements of a brace-delimited array initializer.
    #[serde(default = "default_basic_offset")]
    pub array_init_indent: i32,

    /// Step applied to continuation lines of a multi-line header.
    #[serde(default = "default_basic_offset")]
    pub line_wrap_offset: i32,

    /// When true, only the single canonical column is accepted per
    /// position instead of the wider tolerant set.
    #[serde(default)]
    pub force_strict_condition: bool,

    /// Severity assigned to emitted violations.
    #[serde(default = "default_severity")]
    pub severity: Severity,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            basic_offset: default_basic_offset(),
            brace_adjustment: 0,
            case_indent: default_basic_offset(),
            throws_indent: default_basic_offset(),
            array_init_indent: default_basic_offset(),
            line_wrap_offset: default_basic_offset(),
            force_strict_condition: false,
            severity: default_severity(),
        }
    }
}

fn default_basic_offset() -> i32 {
    4
}

fn default_severity() -> Severity {
    Severity::Warning
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_documented_defaults() {
        let options = IndentOptions::default();
        assert_eq!(options.basic_offset, 4);
        assert_eq!(options.brace_adjustment, 0);
        assert_eq!(options.case_indent, 4);
        assert_eq!(options.throws_indent, 4);
        assert_eq!(options.array_init_indent, 4);
        assert_eq!(options.line_wrap_offset, 4);
        assert!(!options.force_strict_condition);
        assert_eq!(options.severity, Severity::Warning);
    }

    #[test]
    fn parse_fills_omitted_keys_with_defaults() {
        let toml = r#"
fail_on = "warning"

[indentation]
basic_offset = 2
line_wrap_offset = 8
"#;
        let config = Config::parse(toml).expect("valid config");
        assert_eq!(config.fail_on.as_deref(), Some("warning"));
        assert_eq!(config.indentation.basic_offset, 2);
        assert_eq!(config.indentation.line_wrap_offset, 8);
        // untouched keys keep their defaults
        assert_eq!(config.indentation.case_indent, 4);
        assert!(!config.indentation.force_strict_condition);
    }

    #[test]
    fn parse_ignores_unknown_keys() {
        let toml = r#"
[indentation]
basic_offset = 4
some_future_option = true
"#;
        let config = Config::parse(toml).expect("unknown keys are ignored");
        assert_eq!(config.indentation.basic_offset, 4);
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        let err = Config::parse("indentation = [").expect_err("invalid toml");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/indent-lint.toml"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

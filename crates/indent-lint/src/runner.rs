//! Runner for `cargo test` integration.
//!
//! Lets a code generator's test suite verify the indentation of trees it
//! produces: discovers an `indent-lint.toml` from the project root, runs
//! the engine over a caller-supplied tree, and panics with a formatted
//! report when violations reach the configured threshold.

use indent_lint_core::{Config, Severity, SyntaxNode};
use indent_lint_handlers::IndentationVerifier;
use std::path::{Path, PathBuf};

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["indent-lint.toml", ".indent-lint.toml"];

/// Runs an indentation check as part of `cargo test`.
///
/// Configuration is discovered from the project root; with no config file
/// present, defaults apply and only error-level violations fail.
///
/// # Panics
///
/// Panics with a formatted report if violations at or above the
/// configured `fail_on` severity are found, or if the config file cannot
/// be read or parsed.
pub fn run_check(tree: &SyntaxNode) {
    run_check_with(tree, None, None);
}

/// Runs an indentation check with explicit overrides.
///
/// `config_path` overrides config discovery; `fail_on` overrides the
/// failure threshold from the config file.
///
/// # Panics
///
/// Panics with a formatted report if violations at or above the effective
/// `fail_on` severity are found, or if the config cannot be loaded.
pub fn run_check_with(tree: &SyntaxNode, config_path: Option<&str>, fail_on: Option<&str>) {
    let root = find_project_root();
    let content = read_config_content(&root, config_path);
    let config = parse_config(&content);
    let effective_fail_on = resolve_fail_on(fail_on, &config);

    let result = IndentationVerifier::new(&config.indentation).verify(tree);
    if result.has_violations_at(effective_fail_on) {
        let report = result.format_test_report(effective_fail_on);
        panic!("{report}");
    }
}

/// Reads the raw TOML content from the config file.
///
/// Returns an empty string if no config file is found.
fn read_config_content(root: &Path, explicit_path: Option<&str>) -> String {
    if let Some(path) = explicit_path {
        let full_path = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            root.join(path)
        };
        return std::fs::read_to_string(&full_path).unwrap_or_else(|e| {
            panic!(
                "indent-lint: failed to read config from {}: {e}",
                full_path.display()
            );
        });
    }

    for candidate in CONFIG_CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            return std::fs::read_to_string(&path).unwrap_or_else(|e| {
                panic!(
                    "indent-lint: failed to read config from {}: {e}",
                    path.display()
                );
            });
        }
    }

    String::new()
}

/// Parses a `Config` from TOML content.
fn parse_config(content: &str) -> Config {
    if content.is_empty() {
        return Config::default();
    }
    Config::parse(content).unwrap_or_else(|e| {
        panic!("indent-lint: failed to parse config: {e}");
    })
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return false;
    };
    table.contains_key("workspace")
}

/// Finds the project root by looking for `Cargo.toml` from `CARGO_MANIFEST_DIR`.
fn find_project_root() -> PathBuf {
    // CARGO_MANIFEST_DIR points to the crate containing the test,
    // which may be a workspace member. Walk up to find workspace root.
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_path = PathBuf::from(&manifest_dir);

        let mut candidate = manifest_path.as_path();
        loop {
            let cargo_toml = candidate.join("Cargo.toml");
            if cargo_toml.exists() && has_workspace_section(&cargo_toml) {
                return candidate.to_path_buf();
            }
            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => break,
            }
        }

        // No workspace root found - use manifest dir itself
        return manifest_path;
    }

    // Fallback: current directory
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolves the effective `fail_on` severity from arg > config > default.
fn resolve_fail_on(arg: Option<&str>, config: &Config) -> Severity {
    let name = arg.or(config.fail_on.as_deref()).unwrap_or("error");

    match name {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        "info" => Severity::Info,
        other => {
            panic!("indent-lint: unknown severity `{other}`. Valid values: error, warning, info")
        }
    }
}

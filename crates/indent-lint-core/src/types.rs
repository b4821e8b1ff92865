//! Core types for indentation violations and check results.

use crate::level::IndentLevel;
use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Severity level for indentation violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail a check.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code position within the checked file.
///
/// The engine is handed one file's tree at a time; attributing the file
/// path is the reporting collaborator's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (0-indexed, as supplied by the parser).
    pub column: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// An indentation violation found during a check.
///
/// Produced, never mutated, handed to the reporting collaborator in the
/// order the handlers visit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Severity of this violation.
    pub severity: Severity,
    /// Position of the offending token.
    pub location: Location,
    /// Construct/token description (e.g. `"for condition"`).
    pub subject: String,
    /// The columns that would have been accepted here.
    pub expected: IndentLevel,
    /// The column actually observed.
    pub actual: usize,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        severity: Severity,
        location: Location,
        subject: impl Into<String>,
        expected: IndentLevel,
        actual: usize,
    ) -> Self {
        Self {
            severity,
            location,
            subject: subject.into(),
            expected,
            actual,
        }
    }

    /// Human-readable message for this violation.
    #[must_use]
    pub fn message(&self) -> String {
        if self.expected.is_multi_level() {
            format!(
                "'{}' has incorrect indentation level {}, expected one of the following levels: {}",
                self.subject, self.actual, self.expected
            )
        } else {
            format!(
                "'{}' has incorrect indentation level {}, expected level should be {}",
                self.subject, self.actual, self.expected
            )
        }
    }

    /// Converts this violation into a miette diagnostic, resolving the
    /// line/column against `source` (the checked file's text, which the
    /// caller holds - the engine itself never reads source).
    #[must_use]
    pub fn to_diagnostic(&self, source: &str) -> ViolationDiagnostic {
        let offset = offset_for(source, self.location.line, self.location.column);
        ViolationDiagnostic {
            message: self.message(),
            help: Some(format!("accepted column(s): {}", self.expected)),
            span: SourceSpan::from((offset, 1usize)),
            label_message: self.subject.clone(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.location.line,
            self.location.column,
            self.severity,
            self.message()
        )
    }
}

/// A [`Violation`] rendered as a miette [`Diagnostic`] for rich display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

/// Calculates the byte offset of a 1-indexed line / 0-indexed column.
fn offset_for(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (i, line_content) in source.lines().enumerate() {
        if i + 1 == line {
            return offset + column.min(line_content.len());
        }
        offset += line_content.len() + 1; // +1 for newline
    }
    offset
}

/// Result of verifying one syntax tree.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// All violations found, in handler visit order.
    pub violations: Vec<Violation>,
    /// Number of construct handlers built for this tree.
    pub handlers_checked: usize,
}

impl CheckResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no violations were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Checks if any violations meet or exceed the given severity.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts violations by severity as (errors, warnings, infos).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for v in &self.violations {
            match v.severity {
                Severity::Error => counts.0 += 1,
                Severity::Warning => counts.1 += 1,
                Severity::Info => counts.2 += 1,
            }
        }
        counts
    }

    /// Formats all violations for terminal output, one per line.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        for violation in &self.violations {
            let _ = writeln!(output, "{violation}");
        }
        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            output,
            "Found {errors} error(s), {warnings} warning(s), {infos} info(s)"
        );
        output
    }

    /// Formats violations as a test failure report.
    ///
    /// Produces a human-readable multi-line report suitable for `panic!()`
    /// messages in `cargo test` integration.
    #[must_use]
    pub fn format_test_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Violation> = self
            .violations
            .iter()
            .filter(|v| v.severity >= fail_on)
            .collect();

        let mut report = String::new();
        let _ = writeln!(
            report,
            "\n=== indent-lint: {} violation(s) ===\n",
            failing.len()
        );
        for v in &failing {
            let _ = writeln!(
                report,
                "{} at {}:{}",
                v.subject, v.location.line, v.location.column
            );
            let _ = writeln!(report, "  {}: {}", v.severity, v.message());
        }
        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "\nTotal: {errors} error(s), {warnings} warning(s), {infos} info(s)"
        );
        report
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.handlers_checked += other.handlers_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            severity,
            Location::new(2, 2),
            "for condition",
            IndentLevel::new(4),
            2,
        )
    }

    #[test]
    fn message_names_subject_and_levels() {
        let v = make_violation(Severity::Warning);
        assert_eq!(
            v.message(),
            "'for condition' has incorrect indentation level 2, expected level should be 4"
        );
    }

    #[test]
    fn message_for_multi_level_expectation() {
        let v = Violation::new(
            Severity::Warning,
            Location::new(3, 2),
            "for line wrap",
            IndentLevel::of(&[0, 8]),
            2,
        );
        assert!(v.message().contains("one of the following levels: 0, 8"));
    }

    #[test]
    fn display_leads_with_position() {
        let v = make_violation(Severity::Warning);
        assert!(v.to_string().starts_with("2:2: warning:"));
    }

    #[test]
    fn has_violations_at_respects_ordering() {
        let mut result = CheckResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(result.has_violations_at(Severity::Info));
    }

    #[test]
    fn count_by_severity_buckets() {
        let mut result = CheckResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Warning));
        assert_eq!(result.count_by_severity(), (1, 2, 0));
    }

    #[test]
    fn format_test_report_filters_by_severity() {
        let mut result = CheckResult::new();
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_violation(Severity::Error));
        let report = result.format_test_report(Severity::Error);
        assert!(report.contains("1 violation(s)"));
        assert!(report.contains("1 error(s), 1 warning(s)"));
    }

    #[test]
    fn offset_resolution_for_diagnostics() {
        let source = "for (int i = 0;\n  i < 10;\n  i++) {\n}\n";
        assert_eq!(offset_for(source, 1, 0), 0);
        assert_eq!(offset_for(source, 2, 2), 18);
        let diag = make_violation(Severity::Warning).to_diagnostic(source);
        assert!(diag.to_string().contains("for condition"));
    }
}

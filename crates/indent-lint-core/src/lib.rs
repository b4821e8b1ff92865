//! # indent-lint-core
//!
//! Core types for the indentation-verification engine.
//!
//! This crate holds the leaf value types and the external-interface
//! models the engine is built on:
//!
//! - [`SyntaxNode`]/[`NodeKind`] - the already-parsed, immutable tree the
//!   parser collaborator supplies
//! - [`IndentLevel`] - the set of columns accepted at a tree position
//! - [`Violation`]/[`CheckResult`] - what a check produces
//! - [`Config`]/[`IndentOptions`] - the read-only style options shared by
//!   every handler tree of an analysis run
//!
//! The engine itself lives in `indent-lint-handlers`; this crate has no
//! verification logic.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod level;
mod tree;
mod types;

pub use config::{Config, ConfigError, IndentOptions};
pub use level::IndentLevel;
pub use tree::{NodeKind, SyntaxNode};
pub use types::{CheckResult, Location, Severity, Violation, ViolationDiagnostic};

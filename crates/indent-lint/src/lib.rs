//! # indent-lint
//!
//! Indentation verification for C-family source trees.
//!
//! Given the already-parsed syntax tree of a source file and a set of
//! indentation-style options, the engine reports every place where a
//! token's column does not match one of the positions the style allows -
//! modeling how each construct (loops, conditionals, blocks, wrapped
//! headers, chained `else`/`catch` clauses) propagates an expected
//! indentation down through nested structure.
//!
//! This is the main facade crate, re-exporting the core types and the
//! engine.
//!
//! ## Programmatic Usage
//!
//! ```
//! use indent_lint::{IndentOptions, IndentationVerifier, NodeKind, SyntaxNode};
//!
//! // while (busy()) {
//! //   spin();          <- two columns, style wants four
//! // }
//! let tree = SyntaxNode::new(NodeKind::While, 1, 0)
//!     .with_child(SyntaxNode::new(NodeKind::Condition, 1, 7))
//!     .with_child(SyntaxNode::new(NodeKind::RParen, 1, 13))
//!     .with_child(
//!         SyntaxNode::new(NodeKind::Block, 1, 15)
//!             .with_child(SyntaxNode::new(NodeKind::Expr, 2, 2))
//!             .with_child(SyntaxNode::new(NodeKind::RBrace, 3, 0)),
//!     );
//!
//! let options = IndentOptions::default();
//! let result = IndentationVerifier::new(&options).verify(&tree);
//! assert_eq!(result.violations.len(), 1);
//! assert_eq!(result.violations[0].expected.to_string(), "4");
//! ```
//!
//! ## `cargo test` Integration
//!
//! A code generator can assert the trees it emits are well-indented:
//!
//! ```rust,ignore
//! // tests/indentation.rs
//! let tree = parse_generated_source();
//! indent_lint::run_check(&tree);
//! ```
//!
//! Configure via `indent-lint.toml` at the project root.

#![forbid(unsafe_code)]

// Re-export core types
pub use indent_lint_core::*;

// Re-export the engine entry point
pub use indent_lint_handlers::IndentationVerifier;

/// Construct handlers and the kind registry.
pub mod handlers {
    pub use indent_lint_handlers::*;
}

mod runner;
pub use runner::{run_check, run_check_with};

//! # indent-lint-handlers
//!
//! The indentation-verification engine: one handler behavior per syntax
//! construct, shared block-bearing logic, a generic line-wrapping
//! verifier, the construct registry, and the orchestrator that walks a
//! parsed tree and reports every token whose column is not among the
//! positions the configured style accepts.
//!
//! ## Example
//!
//! ```
//! use indent_lint_handlers::IndentationVerifier;
//! use indent_lint_core::{IndentOptions, NodeKind, SyntaxNode};
//!
//! // for (int i = 0; i < 10; i++) { foo(); }   - all on one line
//! let tree = SyntaxNode::new(NodeKind::For, 1, 0)
//!     .with_child(SyntaxNode::new(NodeKind::ForInit, 1, 5))
//!     .with_child(SyntaxNode::new(NodeKind::ForCondition, 1, 16))
//!     .with_child(SyntaxNode::new(NodeKind::ForIterator, 1, 25))
//!     .with_child(SyntaxNode::new(NodeKind::RParen, 1, 28))
//!     .with_child(
//!         SyntaxNode::new(NodeKind::Block, 1, 30)
//!             .with_child(SyntaxNode::new(NodeKind::Expr, 1, 32))
//!             .with_child(SyntaxNode::new(NodeKind::RBrace, 1, 39)),
//!     );
//!
//! let options = IndentOptions::default();
//! let result = IndentationVerifier::new(&options).verify(&tree);
//! assert!(result.is_clean());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod array_init;
mod block;
mod class_def;
mod conditional;
mod do_while;
mod for_loop;
mod handler;
mod line_wrap;
mod method_def;
mod registry;
mod switch_case;
mod synchronized;
mod try_catch;
mod verifier;
mod while_loop;

pub use array_init::ArrayInitHandler;
pub use block::BlockHandler;
pub use class_def::ClassDefHandler;
pub use conditional::{ElseHandler, IfHandler};
pub use do_while::DoWhileHandler;
pub use for_loop::ForHandler;
pub use handler::{HandlerBehavior, HandlerId};
pub use method_def::MethodDefHandler;
pub use registry::{behavior_for, handled};
pub use switch_case::{CaseGroupHandler, SwitchHandler};
pub use synchronized::SynchronizedHandler;
pub use try_catch::{CatchHandler, FinallyHandler, TryHandler};
pub use verifier::IndentationVerifier;
pub use while_loop::WhileHandler;

/// Re-export core types for convenience.
pub use indent_lint_core::{
    CheckResult, Config, IndentLevel, IndentOptions, NodeKind, Severity, SyntaxNode, Violation,
};

//! Handler for brace-delimited array initializers.

use crate::block;
use crate::handler::{HandlerBehavior, HandlerId};
use crate::registry;
use crate::verifier::IndentationVerifier;
use indent_lint_core::{IndentLevel, NodeKind, SyntaxNode};

/// Handler for array initializers.
///
/// Elements may legally sit at either of two bases: the initializer's
/// level plus the array-init step, or the same step taken from the
/// opening brace's own column (for initializers whose brace opens a
/// line). Strict conditions collapse the set to the level-based base.
pub struct ArrayInitHandler;

impl HandlerBehavior for ArrayInitHandler {
    fn name(&self) -> &'static str {
        "array initializer"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        let step = v.options().array_init_indent;

        let expected = block::with_brace_adjustment(v, &level);
        v.check_line_start(node, "array initializer lcurly", &expected);

        let level_base = level.shifted(step);
        let brace_base = IndentLevel::new(node.column()).shifted(step);
        let elements = if v.options().force_strict_condition {
            level_base
        } else {
            level_base.union(&brace_base)
        };
        for child in node.children() {
            if child.kind().is_punctuation() || registry::handled(child.kind()) {
                continue;
            }
            v.check_line_start(child, "array initializer child", &elements);
        }

        if let Some(close) = node.find_first(NodeKind::RBrace) {
            if close.line() != node.line() {
                let mut close_expected = if v.starts_line(node) {
                    IndentLevel::new(node.column())
                } else {
                    level.clone()
                };
                if !v.options().force_strict_condition {
                    close_expected = close_expected.union(&elements);
                }
                v.check_line_start(close, "array initializer rcurly", &close_expected);
            }
        }
    }

    fn suggested_child_level(
        &self,
        v: &IndentationVerifier<'_>,
        handler: HandlerId,
        child: &SyntaxNode,
    ) -> IndentLevel {
        let _ = child; // nested initializers sit at the element base
        v.level(handler).shifted(v.options().array_init_indent)
    }
}

//! Handlers for `if` statements and their chained alternative arms.

use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::verifier::IndentationVerifier;
use crate::{block, line_wrap};
use indent_lint_core::{IndentLevel, NodeKind, SyntaxNode};

/// Handler for `if` statements.
///
/// The alternative arm conventionally aligns with the `if` keyword rather
/// than nesting under it, so an `else` child receives the `if`'s own
/// level unchanged.
pub struct IfHandler;

impl HandlerBehavior for IfHandler {
    fn name(&self) -> &'static str {
        "if"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "if", &level);
        if let Some(condition) = node.find_first(NodeKind::Condition) {
            let expected = level.shifted(v.options().basic_offset);
            v.check_line_start(condition, "if condition", &expected);
        }
        block::check_block_body(v, handler, "if");
        line_wrap::check_header_wrapping(v, handler);
    }

    fn suggested_child_level(
        &self,
        v: &IndentationVerifier<'_>,
        handler: HandlerId,
        child: &SyntaxNode,
    ) -> IndentLevel {
        if child.kind().is_chained_clause() {
            v.level(handler)
        } else {
            v.level(handler).shifted(v.options().basic_offset)
        }
    }

    fn claims_child(
        &self,
        v: &IndentationVerifier<'_>,
        handler: HandlerId,
        child: &SyntaxNode,
    ) -> bool {
        claims_body_block(v, handler, child)
    }
}

/// Handler for the alternative arm chained after an `if`.
///
/// A directly-chained `if` (the `else if` form) receives this arm's level
/// unchanged, so the whole chain stays on one base column.
pub struct ElseHandler;

impl HandlerBehavior for ElseHandler {
    fn name(&self) -> &'static str {
        "else"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "else", &level);
        block::check_block_body(v, handler, "else");
    }

    fn suggested_child_level(
        &self,
        v: &IndentationVerifier<'_>,
        handler: HandlerId,
        child: &SyntaxNode,
    ) -> IndentLevel {
        if child.kind() == NodeKind::If {
            v.level(handler)
        } else {
            v.level(handler).shifted(v.options().basic_offset)
        }
    }

    fn claims_child(
        &self,
        v: &IndentationVerifier<'_>,
        handler: HandlerId,
        child: &SyntaxNode,
    ) -> bool {
        claims_body_block(v, handler, child)
    }
}

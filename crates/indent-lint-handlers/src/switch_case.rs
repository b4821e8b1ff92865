//! Handlers for `switch` statements and their case groups.

use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::registry;
use crate::verifier::IndentationVerifier;
use crate::{block, line_wrap};
use indent_lint_core::{IndentLevel, NodeKind, SyntaxNode};

/// Handler for `switch` statements.
///
/// Case groups are indented by their own configured step rather than the
/// basic offset.
pub struct SwitchHandler;

impl HandlerBehavior for SwitchHandler {
    fn name(&self) -> &'static str {
        "switch"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "switch", &level);
        if let Some(condition) = node.find_first(NodeKind::Condition) {
            let expected = level.shifted(v.options().basic_offset);
            v.check_line_start(condition, "switch expression", &expected);
        }
        block::check_block_body(v, handler, "switch");
        line_wrap::check_header_wrapping(v, handler);
    }

    fn suggested_child_level(
        &self,
        v: &IndentationVerifier<'_>,
        handler: HandlerId,
        child: &SyntaxNode,
    ) -> IndentLevel {
        if child.kind() == NodeKind::CaseGroup {
            v.level(handler).shifted(v.options().case_indent)
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

/// Handler for one or more case labels plus the statements they guard.
pub struct CaseGroupHandler;

impl HandlerBehavior for CaseGroupHandler {
    fn name(&self) -> &'static str {
        "case"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        let child_level = level.shifted(v.options().basic_offset);
        v.check_line_start(node, "case", &level);

        let body = block::body_of(node);
        for child in node.children() {
            match child.kind() {
                NodeKind::CaseLabel => v.check_line_start(child, "case label", &level),
                NodeKind::Block if body.is_some_and(|b| std::ptr::eq(b, child)) => {
                    block::check_embedded_block(v, "case", node.line(), child, &level, &child_level);
                }
                kind if kind.is_punctuation() || registry::handled(kind) => {}
                _ => v.check_line_start(child, "case child", &child_level),
            }
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

//! Handler for `while` loops.

use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::verifier::IndentationVerifier;
use crate::{block, line_wrap};
use indent_lint_core::{NodeKind, SyntaxNode};

/// Handler for `while` loops.
pub struct WhileHandler;

impl HandlerBehavior for WhileHandler {
    fn name(&self) -> &'static str {
        "while"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "while", &level);
        if let Some(condition) = node.find_first(NodeKind::Condition) {
            let expected = level.shifted(v.options().basic_offset);
            v.check_line_start(condition, "while condition", &expected);
        }
        block::check_block_body(v, handler, "while");
        line_wrap::check_header_wrapping(v, handler);
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

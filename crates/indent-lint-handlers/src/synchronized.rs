//! Handler for `synchronized` blocks.

use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::verifier::IndentationVerifier;
use crate::{block, line_wrap};
use indent_lint_core::{NodeKind, SyntaxNode};

/// Handler for `synchronized` blocks.
pub struct SynchronizedHandler;

impl HandlerBehavior for SynchronizedHandler {
    fn name(&self) -> &'static str {
        "synchronized"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "synchronized", &level);
        if let Some(monitor) = node.find_first(NodeKind::Condition) {
            let expected = level.shifted(v.options().basic_offset);
            v.check_line_start(monitor, "synchronized expression", &expected);
        }
        block::check_block_body(v, handler, "synchronized");
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

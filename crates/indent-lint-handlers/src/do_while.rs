//! Handler for `do`-`while` loops.

use crate::block;
use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::verifier::IndentationVerifier;
use indent_lint_core::{NodeKind, SyntaxNode};

/// Handler for `do`-`while` loops.
///
/// The body comes first in source order; the trailing `while` keyword
/// aligns with the `do` itself, like a chained clause. The condition
/// trails the body, so the header wrap pass does not apply here.
pub struct DoWhileHandler;

impl HandlerBehavior for DoWhileHandler {
    fn name(&self) -> &'static str {
        "do"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "do", &level);
        block::check_block_body(v, handler, "do");
        if let Some(keyword) = node.find_first(NodeKind::WhileKeyword) {
            v.check_line_start(keyword, "while", &level);
        }
        if let Some(condition) = node.find_first(NodeKind::Condition) {
            let expected = level.shifted(v.options().basic_offset);
            v.check_line_start(condition, "do-while condition", &expected);
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

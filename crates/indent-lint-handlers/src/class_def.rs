//! Handler for class definitions.

use crate::block;
use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::verifier::IndentationVerifier;
use indent_lint_core::SyntaxNode;

/// Handler for class definitions.
///
/// Members go through the shared block behavior: member definitions with
/// their own handler (methods, nested classes) check themselves at the
/// suggested level, plain field declarations are checked here.
pub struct ClassDefHandler;

impl HandlerBehavior for ClassDefHandler {
    fn name(&self) -> &'static str {
        "class def"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "class def", &level);
        block::check_block_body(v, handler, "class def");
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

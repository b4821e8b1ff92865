//! Handlers for guarded blocks and their chained handler/cleanup clauses.

use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::verifier::IndentationVerifier;
use crate::{block, line_wrap};
use indent_lint_core::{IndentLevel, NodeKind, SyntaxNode};

/// Handler for `try` blocks.
///
/// Chained `catch` and `finally` clauses align with the `try` keyword, so
/// they receive the `try`'s own level unchanged.
pub struct TryHandler;

impl HandlerBehavior for TryHandler {
    fn name(&self) -> &'static str {
        "try"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "try", &level);
        block::check_block_body(v, handler, "try");
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

/// Handler for a `catch` clause chained after a `try`.
pub struct CatchHandler;

impl HandlerBehavior for CatchHandler {
    fn name(&self) -> &'static str {
        "catch"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "catch", &level);
        if let Some(params) = node.find_first(NodeKind::ParamClause) {
            let expected = level.shifted(v.options().basic_offset);
            v.check_line_start(params, "catch parameters", &expected);
        }
        block::check_block_body(v, handler, "catch");
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

/// Handler for a `finally` clause chained after a `try`.
pub struct FinallyHandler;

impl HandlerBehavior for FinallyHandler {
    fn name(&self) -> &'static str {
        "finally"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "finally", &level);
        block::check_block_body(v, handler, "finally");
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

#[cfg(test)]
mod tests {
    use crate::verifier::IndentationVerifier;
    use indent_lint_core::{CheckResult, IndentOptions, NodeKind, SyntaxNode};

    fn check(tree: &SyntaxNode) -> CheckResult {
        let options = IndentOptions::default();
        IndentationVerifier::new(&options).verify(tree)
    }

    fn try_catch_finally(catch_column: usize, finally_column: usize) -> SyntaxNode {
        // try {
        //     risky();
        // }
        // catch (Oops e) {
        //     recover();
        // }
        // finally {
        //     cleanup();
        // }
        SyntaxNode::new(NodeKind::Try, 1, 0)
            .with_child(
                SyntaxNode::new(NodeKind::Block, 1, 4)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 2, 4))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 3, 0)),
            )
            .with_child(
                SyntaxNode::new(NodeKind::Catch, 4, catch_column)
                    .with_child(SyntaxNode::new(NodeKind::ParamClause, 4, catch_column + 7))
                    .with_child(SyntaxNode::new(NodeKind::RParen, 4, catch_column + 13))
                    .with_child(
                        SyntaxNode::new(NodeKind::Block, 4, catch_column + 15)
                            .with_child(SyntaxNode::new(NodeKind::Expr, 5, catch_column + 4))
                            .with_child(SyntaxNode::new(NodeKind::RBrace, 6, catch_column)),
                    ),
            )
            .with_child(
                SyntaxNode::new(NodeKind::Finally, 7, finally_column).with_child(
                    SyntaxNode::new(NodeKind::Block, 7, finally_column + 8)
                        .with_child(SyntaxNode::new(NodeKind::Expr, 8, finally_column + 4))
                        .with_child(SyntaxNode::new(NodeKind::RBrace, 9, finally_column)),
                ),
            )
    }

    #[test]
    fn aligned_chain_is_clean() {
        assert!(check(&try_catch_finally(0, 0)).is_clean());
    }

    #[test]
    fn nested_catch_is_flagged_at_the_try_level() {
        let result = check(&try_catch_finally(4, 0));
        // catch keyword, its statements, and its closing brace all sit one
        // step too deep
        assert!(result
            .violations
            .iter()
            .any(|v| v.subject == "catch" && v.expected.to_string() == "0" && v.actual == 4));
    }

    #[test]
    fn chained_clauses_receive_the_owner_level_unchanged() {
        // catch correctly aligned at 0 even though try body nests at 4
        let result = check(&try_catch_finally(0, 4));
        assert!(result.violations.iter().all(|v| v.subject != "catch"));
        assert!(result
            .violations
            .iter()
            .any(|v| v.subject == "finally" && v.expected.to_string() == "0"));
    }
}

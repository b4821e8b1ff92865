//! Handler for method definitions.

use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::verifier::IndentationVerifier;
use crate::{block, line_wrap};
use indent_lint_core::{NodeKind, SyntaxNode};

/// Handler for method definitions.
///
/// A wrapped `throws` clause takes its own configured step; a multi-line
/// parameter list gets the wrap pass like any other parenthesized header.
/// Abstract methods simply have no body to check.
pub struct MethodDefHandler;

impl HandlerBehavior for MethodDefHandler {
    fn name(&self) -> &'static str {
        "method def"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "method def", &level);
        if let Some(throws) = node.find_first(NodeKind::ThrowsClause) {
            let expected = level.shifted(v.options().throws_indent);
            v.check_line_start(throws, "throws", &expected);
        }
        block::check_block_body(v, handler, "method def");
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

#[cfg(test)]
mod tests {
    use crate::verifier::IndentationVerifier;
    use indent_lint_core::{CheckResult, IndentOptions, NodeKind, SyntaxNode};

    fn check_with(tree: &SyntaxNode, options: &IndentOptions) -> CheckResult {
        IndentationVerifier::new(options).verify(tree)
    }

    fn method_with_throws(throws_column: usize) -> SyntaxNode {
        // void run()
        //         throws Oops {
        //     step();
        // }
        SyntaxNode::new(NodeKind::MethodDef, 1, 0)
            .with_child(SyntaxNode::new(NodeKind::ParamClause, 1, 8))
            .with_child(SyntaxNode::new(NodeKind::RParen, 1, 9))
            .with_child(SyntaxNode::new(NodeKind::ThrowsClause, 2, throws_column))
            .with_child(
                SyntaxNode::new(NodeKind::Block, 2, throws_column + 12)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 3, 4))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 4, 0)),
            )
    }

    #[test]
    fn throws_clause_takes_the_throws_step() {
        let mut options = IndentOptions::default();
        options.throws_indent = 8;
        assert!(check_with(&method_with_throws(8), &options).is_clean());

        let result = check_with(&method_with_throws(4), &options);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].subject, "throws");
        assert_eq!(result.violations[0].expected.to_string(), "8");
        assert_eq!(result.violations[0].actual, 4);
    }

    #[test]
    fn abstract_method_has_no_body_to_check() {
        let tree = SyntaxNode::new(NodeKind::MethodDef, 1, 0)
            .with_child(SyntaxNode::new(NodeKind::ParamClause, 1, 12))
            .with_child(SyntaxNode::new(NodeKind::RParen, 1, 13))
            .with_child(SyntaxNode::new(NodeKind::EmptyStmt, 1, 14));
        let options = IndentOptions::default();
        assert!(check_with(&tree, &options).is_clean());
    }

    #[test]
    fn wrapped_parameter_list_gets_the_wrap_pass() {
        // void run(int a,
        //   int b) {
        //     step();
        // }
        let tree = SyntaxNode::new(NodeKind::MethodDef, 1, 0)
            .with_child(
                SyntaxNode::new(NodeKind::ParamClause, 1, 9)
                    .with_child(SyntaxNode::new(NodeKind::VarDecl, 1, 9))
                    .with_child(SyntaxNode::new(NodeKind::VarDecl, 2, 2)),
            )
            .with_child(SyntaxNode::new(NodeKind::RParen, 2, 7))
            .with_child(
                SyntaxNode::new(NodeKind::Block, 2, 9)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 3, 4))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 4, 0)),
            );
        let options = IndentOptions::default();
        let result = check_with(&tree, &options);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].subject, "method def line wrap");
        assert_eq!(result.violations[0].expected.to_string(), "0, 4");
        assert_eq!(result.violations[0].actual, 2);
    }
}

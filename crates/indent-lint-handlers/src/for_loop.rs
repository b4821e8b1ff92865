//! Handler for classic and for-each loops.

use crate::handler::{claims_body_block, HandlerBehavior, HandlerId};
use crate::verifier::IndentationVerifier;
use crate::{block, line_wrap};
use indent_lint_core::{IndentLevel, NodeKind, SyntaxNode};

/// Handler for `for` loops, classic and for-each forms.
///
/// Header clauses are each checked independently one step in from the
/// loop; the body goes through the shared block behavior; a multi-line
/// header gets the wrap pass, anchored at the header's right parenthesis.
pub struct ForHandler;

impl HandlerBehavior for ForHandler {
    fn name(&self) -> &'static str {
        "for"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        v.check_line_start(node, "for", &level);
        check_for_params(v, handler);
        block::check_block_body(v, handler, "for");
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

/// Checks the loop-header clauses.
///
/// Classic form: init, condition, and iterator are each checked
/// independently when present - they are not cumulative, and an absent
/// clause is skipped, not reported. For-each form: the single iteration
/// clause is checked under the same rule.
fn check_for_params(v: &mut IndentationVerifier<'_>, handler: HandlerId) {
    let node = v.node(handler);
    let expected = v.level(handler).shifted(v.options().basic_offset);

    let init = node.find_first(NodeKind::ForInit);
    let condition = node.find_first(NodeKind::ForCondition);
    let iterator = node.find_first(NodeKind::ForIterator);

    if init.is_some() || condition.is_some() || iterator.is_some() {
        for (clause, subject) in [
            (init, "for init"),
            (condition, "for condition"),
            (iterator, "for iterator"),
        ] {
            if let Some(clause) = clause {
                v.check_line_start(clause, subject, &expected);
            }
        }
    } else if let Some(each) = node.find_first(NodeKind::ForEachClause) {
        v.check_line_start(each, "for-each clause", &expected);
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

    fn single_line_loop() -> SyntaxNode {
        // for (int i = 0; i < 10; i++) { foo(); }
        SyntaxNode::new(NodeKind::For, 1, 0)
            .with_child(SyntaxNode::new(NodeKind::ForInit, 1, 5))
            .with_child(SyntaxNode::new(NodeKind::ForCondition, 1, 16))
            .with_child(SyntaxNode::new(NodeKind::ForIterator, 1, 25))
            .with_child(SyntaxNode::new(NodeKind::RParen, 1, 28))
            .with_child(
                SyntaxNode::new(NodeKind::Block, 1, 30)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 1, 32))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 1, 39)),
            )
    }

    fn wrapped_loop(condition_column: usize) -> SyntaxNode {
        // for (int i = 0;
        //     i < 10;        <- condition_column
        //     i++) {
        //     foo();
        // }
        SyntaxNode::new(NodeKind::For, 1, 0)
            .with_child(SyntaxNode::new(NodeKind::ForInit, 1, 5))
            .with_child(SyntaxNode::new(NodeKind::ForCondition, 2, condition_column))
            .with_child(SyntaxNode::new(NodeKind::ForIterator, 3, 4))
            .with_child(SyntaxNode::new(NodeKind::RParen, 3, 7))
            .with_child(
                SyntaxNode::new(NodeKind::Block, 3, 9)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 4, 4))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 5, 0)),
            )
    }

    #[test]
    fn single_line_loop_is_clean() {
        assert!(check(&single_line_loop()).is_clean());
    }

    #[test]
    fn misplaced_condition_is_one_localized_violation() {
        let result = check(&wrapped_loop(2));
        assert_eq!(result.violations.len(), 1);
        let v = &result.violations[0];
        assert_eq!(v.subject, "for condition");
        assert_eq!((v.location.line, v.location.column), (2, 2));
        assert_eq!(v.expected.to_string(), "4");
        assert_eq!(v.actual, 2);
    }

    #[test]
    fn correctly_wrapped_loop_is_clean() {
        assert!(check(&wrapped_loop(4)).is_clean());
    }

    #[test]
    fn absent_iterator_clause_is_skipped() {
        // for (int i = 0;
        //     i < cap;
        //     ) { ... }
        let tree = SyntaxNode::new(NodeKind::For, 1, 0)
            .with_child(SyntaxNode::new(NodeKind::ForInit, 1, 5))
            .with_child(SyntaxNode::new(NodeKind::ForCondition, 2, 4))
            .with_child(SyntaxNode::new(NodeKind::RParen, 3, 4))
            .with_child(
                SyntaxNode::new(NodeKind::Block, 3, 6)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 4, 4))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 5, 0)),
            );
        assert!(check(&tree).is_clean());
    }

    #[test]
    fn for_each_clause_checked_like_classic_clauses() {
        // for (String s : list) on one line is clean; the clause moved to
        // its own wrapped line at column 2 is one violation.
        let clean = SyntaxNode::new(NodeKind::For, 1, 0)
            .with_child(SyntaxNode::new(NodeKind::ForEachClause, 1, 5))
            .with_child(SyntaxNode::new(NodeKind::RParen, 1, 20))
            .with_child(
                SyntaxNode::new(NodeKind::Block, 1, 22)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 2, 4))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 3, 0)),
            );
        assert!(check(&clean).is_clean());

        let wrapped = SyntaxNode::new(NodeKind::For, 1, 0)
            .with_child(SyntaxNode::new(NodeKind::ForEachClause, 2, 2))
            .with_child(SyntaxNode::new(NodeKind::RParen, 2, 17))
            .with_child(
                SyntaxNode::new(NodeKind::Block, 2, 19)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 3, 4))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 4, 0)),
            );
        let result = check(&wrapped);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].subject, "for-each clause");
        assert_eq!(result.violations[0].expected.to_string(), "4");
        assert_eq!(result.violations[0].actual, 2);
    }

    #[test]
    fn body_statement_checked_one_step_in() {
        let tree = SyntaxNode::new(NodeKind::For, 1, 0)
            .with_child(SyntaxNode::new(NodeKind::ForInit, 1, 5))
            .with_child(SyntaxNode::new(NodeKind::ForCondition, 1, 16))
            .with_child(SyntaxNode::new(NodeKind::ForIterator, 1, 25))
            .with_child(SyntaxNode::new(NodeKind::RParen, 1, 28))
            .with_child(
                SyntaxNode::new(NodeKind::Block, 1, 30)
                    .with_child(SyntaxNode::new(NodeKind::Expr, 2, 8))
                    .with_child(SyntaxNode::new(NodeKind::RBrace, 3, 0)),
            );
        let result = check(&tree);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].subject, "for child");
        assert_eq!(result.violations[0].expected.to_string(), "4");
        assert_eq!(result.violations[0].actual, 8);
    }
}

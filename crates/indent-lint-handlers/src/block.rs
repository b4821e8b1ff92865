//! Block-bearing behavior shared by every construct that owns an
//! optional embedded body, plus the free-standing block handler.
//!
//! The body is either a brace-delimited block or a single bare statement.
//! Brace rules: an opening brace on the construct's header line needs no
//! column check; on its own line it must satisfy the construct's level
//! (widened by the brace adjustment). The closing brace of a multi-line
//! block matches the column where the opening brace's line starts, again
//! widened by the brace adjustment. Statements are checked one step in;
//! a statement whose kind has its own registered handler is left to that
//! handler so no position is reported twice.

use crate::handler::{HandlerBehavior, HandlerId};
use crate::registry;
use crate::verifier::IndentationVerifier;
use indent_lint_core::{IndentLevel, NodeKind, SyntaxNode};

/// The embedded statement body of a construct: its first child that is
/// neither a header clause, a punctuation token, nor a chained clause.
pub(crate) fn body_of(node: &SyntaxNode) -> Option<&SyntaxNode> {
    node.children().iter().find(|c| {
        !c.kind().is_clause() && !c.kind().is_punctuation() && !c.kind().is_chained_clause()
    })
}

/// Widens `level` by the configured brace adjustment; under strict
/// conditions only the adjusted column survives.
pub(crate) fn with_brace_adjustment(
    v: &IndentationVerifier<'_>,
    level: &IndentLevel,
) -> IndentLevel {
    let adjustment = v.options().brace_adjustment;
    if adjustment == 0 {
        level.clone()
    } else if v.options().force_strict_condition {
        level.shifted(adjustment)
    } else {
        level.union(&level.shifted(adjustment))
    }
}

/// Checks the optional embedded body of the construct behind `handler`.
pub(crate) fn check_block_body(v: &mut IndentationVerifier<'_>, handler: HandlerId, name: &str) {
    let Some(body) = body_of(v.node(handler)) else {
        return;
    };
    let level = v.level(handler);
    let child_level = level.shifted(v.options().basic_offset);
    if body.kind() == NodeKind::Block {
        let header_line = v.node(handler).line();
        check_embedded_block(v, name, header_line, body, &level, &child_level);
    } else if !registry::handled(body.kind()) {
        // single bare statement (or lone `;`): one step in, no braces
        v.check_line_start(body, format!("{name} child"), &child_level);
    }
}

/// Checks a brace block embedded in a construct whose header starts on
/// `header_line`: brace positions plus the statements inside.
pub(crate) fn check_embedded_block(
    v: &mut IndentationVerifier<'_>,
    name: &str,
    header_line: usize,
    block: &SyntaxNode,
    level: &IndentLevel,
    child_level: &IndentLevel,
) {
    if block.line() != header_line {
        let expected = with_brace_adjustment(v, level);
        v.check_line_start(block, format!("{name} lcurly"), &expected);
    }
    check_rcurly(v, name, block, level);
    check_statements(v, name, block, child_level);
}

/// Checks the closing brace of a multi-line block: it must sit where the
/// opening brace does (the column its line starts at, since an opening
/// brace trailing a header sits mid-line), widened by the brace
/// adjustment applied to the owner's level. A block closed on its opening
/// line needs no check.
pub(crate) fn check_rcurly(
    v: &mut IndentationVerifier<'_>,
    name: &str,
    block: &SyntaxNode,
    level: &IndentLevel,
) {
    let Some(close) = block.find_first(NodeKind::RBrace) else {
        return;
    };
    if close.line() == block.line() {
        return;
    }
    let mut expected = with_brace_adjustment(v, level);
    if !v.options().force_strict_condition {
        if let Some(open_column) = v.first_column(block.line()) {
            expected = expected.union(&IndentLevel::new(open_column));
        }
    }
    v.check_line_start(close, format!("{name} rcurly"), &expected);
}

/// Checks each statement of `block` at `child_level`. Statements whose
/// kind has its own handler are skipped; their handler receives the same
/// level through the suggestion chain.
pub(crate) fn check_statements(
    v: &mut IndentationVerifier<'_>,
    name: &str,
    block: &SyntaxNode,
    child_level: &IndentLevel,
) {
    for stmt in block.children() {
        if stmt.kind().is_punctuation() || registry::handled(stmt.kind()) {
            continue;
        }
        v.check_line_start(stmt, format!("{name} child"), child_level);
    }
}

/// A free-standing brace block in statement position.
pub struct BlockHandler;

impl HandlerBehavior for BlockHandler {
    fn name(&self) -> &'static str {
        "block"
    }

    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId) {
        let node = v.node(handler);
        let level = v.level(handler);
        let expected = with_brace_adjustment(v, &level);
        v.check_line_start(node, "block lcurly", &expected);
        check_rcurly(v, "block", node, &level);
        check_statements(v, "block", node, &level.shifted(v.options().basic_offset));
    }
}

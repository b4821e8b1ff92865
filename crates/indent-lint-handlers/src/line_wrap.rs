//! Generic continuation-line verifier for multi-line construct headers.
//!
//! Reusable by any construct whose parenthesized header may span several
//! source lines; the anchor is the header's closing delimiter. Lines
//! strictly between the header's first line and the anchor's line must
//! start at the owner's level plus the line-wrap offset; the anchor's own
//! line additionally accepts the owner's level itself, unless strict
//! conditions are forced. Every mismatched line is its own violation.

use crate::handler::HandlerId;
use crate::verifier::IndentationVerifier;
use indent_lint_core::NodeKind;

/// Runs the wrap pass for the construct behind `handler`, anchored at
/// the header's closing parenthesis. Single-line headers (or headers
/// without a parenthesized clause list) need no pass.
pub(crate) fn check_header_wrapping(v: &mut IndentationVerifier<'_>, handler: HandlerId) {
    let node = v.node(handler);
    let Some(anchor) = node.find_first(NodeKind::RParen) else {
        return;
    };
    if anchor.line() <= node.line() {
        return;
    }

    let name = v.name_of(handler);
    let level = v.level(handler);
    let wrapped = level.shifted(v.options().line_wrap_offset);

    for line in node.line() + 1..anchor.line() {
        // lines the tree holds no token for (blank or comment-only) are
        // invisible to the engine
        if let Some(column) = v.first_column(line) {
            v.check_wrap_line(line, column, format!("{name} line wrap"), &wrapped);
        }
    }

    let closing = if v.options().force_strict_condition {
        wrapped
    } else {
        wrapped.union(&level)
    };
    if let Some(column) = v.first_column(anchor.line()) {
        v.check_wrap_line(anchor.line(), column, format!("{name} line wrap"), &closing);
    }
}

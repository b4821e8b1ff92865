//! The construct-handler capability.
//!
//! One behavior exists per handled construct kind, as a stateless unit
//! struct; per-construct state (the syntax node, the parent link, the
//! computed level) lives in the verifier's handler arena. Shared logic
//! like block-bearing checks is composed from the [`crate::block`]
//! functions rather than inherited.

use crate::block;
use crate::verifier::IndentationVerifier;
use indent_lint_core::{IndentLevel, NodeKind, SyntaxNode};

/// Index of a handler node in the verifier's arena.
///
/// Parent references are indices rather than pointers; a handler's parent
/// is always constructed (and its level computed) before the handler
/// itself, so the handler tree is acyclic by construction.
pub type HandlerId = usize;

/// Behavior of one construct kind.
///
/// Implementations validate their own anchor tokens against the level the
/// verifier computed for them, perform construct-specific clause and body
/// checks, and influence how the expected level propagates to children.
/// They never fail: a malformed or absent optional sub-clause is "nothing
/// to check", and every mismatch is an independent reported violation.
pub trait HandlerBehavior: Sync {
    /// Token name used in violation subjects (e.g. `"for"`).
    fn name(&self) -> &'static str;

    /// Validates this construct's anchor tokens and its clauses/body.
    ///
    /// Runs before the verifier recurses into children, so a construct's
    /// own violations precede those of anything nested in it.
    fn check(&self, v: &mut IndentationVerifier<'_>, handler: HandlerId);

    /// The level suggested for `child`.
    ///
    /// Default: this construct's own level plus the basic offset.
    /// Constructs with special alignment rules (chained clauses, case
    /// groups) override this.
    fn suggested_child_level(
        &self,
        v: &IndentationVerifier<'_>,
        handler: HandlerId,
        child: &SyntaxNode,
    ) -> IndentLevel {
        let _ = child;
        v.level(handler).shifted(v.options().basic_offset)
    }

    /// Whether `child` is validated inline by this handler's own check
    /// (its embedded body block), in which case the walk must not hand it
    /// to another handler as well.
    fn claims_child(
        &self,
        v: &IndentationVerifier<'_>,
        handler: HandlerId,
        child: &SyntaxNode,
    ) -> bool {
        let _ = (v, handler, child);
        false
    }
}

/// Standard [`HandlerBehavior::claims_child`] body for block-bearing
/// constructs: claims the embedded body exactly when it is a brace block.
pub(crate) fn claims_body_block(
    v: &IndentationVerifier<'_>,
    handler: HandlerId,
    child: &SyntaxNode,
) -> bool {
    block::body_of(v.node(handler))
        .is_some_and(|body| body.kind() == NodeKind::Block && std::ptr::eq(body, child))
}

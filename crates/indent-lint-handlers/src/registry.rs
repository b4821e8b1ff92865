//! The construct registry: kind tag to handler behavior.
//!
//! The mapping is an exhaustive match over the closed [`NodeKind`] set
//! with no wildcard arm, so adding a kind is a compile error until this
//! registry decides whether it is handled.

use crate::array_init::ArrayInitHandler;
use crate::block::BlockHandler;
use crate::class_def::ClassDefHandler;
use crate::conditional::{ElseHandler, IfHandler};
use crate::do_while::DoWhileHandler;
use crate::for_loop::ForHandler;
use crate::handler::HandlerBehavior;
use crate::method_def::MethodDefHandler;
use crate::switch_case::{CaseGroupHandler, SwitchHandler};
use crate::synchronized::SynchronizedHandler;
use crate::try_catch::{CatchHandler, FinallyHandler, TryHandler};
use crate::while_loop::WhileHandler;
use indent_lint_core::NodeKind;

/// Returns the behavior for a construct kind, or `None` for clause,
/// token, and plain-statement kinds whose positions are validated by the
/// construct that owns them.
#[must_use]
pub fn behavior_for(kind: NodeKind) -> Option<&'static dyn HandlerBehavior> {
    match kind {
        NodeKind::ClassDef => Some(&ClassDefHandler),
        NodeKind::MethodDef => Some(&MethodDefHandler),
        NodeKind::Block => Some(&BlockHandler),
        NodeKind::If => Some(&IfHandler),
        NodeKind::Else => Some(&ElseHandler),
        NodeKind::While => Some(&WhileHandler),
        NodeKind::DoWhile => Some(&DoWhileHandler),
        NodeKind::For => Some(&ForHandler),
        NodeKind::Try => Some(&TryHandler),
        NodeKind::Catch => Some(&CatchHandler),
        NodeKind::Finally => Some(&FinallyHandler),
        NodeKind::Switch => Some(&SwitchHandler),
        NodeKind::CaseGroup => Some(&CaseGroupHandler),
        NodeKind::Synchronized => Some(&SynchronizedHandler),
        NodeKind::ArrayInit => Some(&ArrayInitHandler),
        NodeKind::Condition
        | NodeKind::ForInit
        | NodeKind::ForCondition
        | NodeKind::ForIterator
        | NodeKind::ForEachClause
        | NodeKind::ParamClause
        | NodeKind::ThrowsClause
        | NodeKind::CaseLabel
        | NodeKind::RParen
        | NodeKind::RBrace
        | NodeKind::WhileKeyword
        | NodeKind::VarDecl
        | NodeKind::Expr
        | NodeKind::EmptyStmt => None,
    }
}

/// Whether a kind has its own handler.
#[must_use]
pub fn handled(kind: NodeKind) -> bool {
    behavior_for(kind).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_are_handled_and_named() {
        let kinds = [
            (NodeKind::For, "for"),
            (NodeKind::If, "if"),
            (NodeKind::Else, "else"),
            (NodeKind::Try, "try"),
            (NodeKind::Switch, "switch"),
            (NodeKind::ArrayInit, "array initializer"),
        ];
        for (kind, name) in kinds {
            let behavior = behavior_for(kind).expect("construct kind must be handled");
            assert_eq!(behavior.name(), name);
        }
    }

    #[test]
    fn clause_and_token_kinds_are_not_handled() {
        for kind in [
            NodeKind::Condition,
            NodeKind::ForInit,
            NodeKind::RParen,
            NodeKind::RBrace,
            NodeKind::Expr,
        ] {
            assert!(!handled(kind), "{kind:?} must not have a handler");
        }
    }
}

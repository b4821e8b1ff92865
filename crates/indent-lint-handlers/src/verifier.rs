//! The verification orchestrator.
//!
//! Owns the read-only options, the per-check line index, the handler
//! arena, and the violation sink. Building and checking are interleaved:
//! the walk constructs each handler with its level already computed from
//! the parent's suggestion, runs its check, then descends.

use crate::handler::{HandlerBehavior, HandlerId};
use crate::registry;
use indent_lint_core::{
    CheckResult, IndentLevel, IndentOptions, Location, Severity, SyntaxNode, Violation,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// One entry of the handler arena.
struct HandlerNode<'a> {
    behavior: &'static dyn HandlerBehavior,
    node: &'a SyntaxNode,
    #[allow(dead_code)] // parent links document tree shape; levels are precomputed
    parent: Option<HandlerId>,
    level: IndentLevel,
}

/// First-token column per source line of the checked subtree.
///
/// A column check only applies to a token that starts its line; tokens
/// continuing a line are never checked. The wrap pass also uses this to
/// find each continuation line's first token.
#[derive(Debug, Default)]
struct LineIndex {
    first: HashMap<usize, usize>,
}

impl LineIndex {
    fn build(root: &SyntaxNode) -> Self {
        let mut first: HashMap<usize, usize> = HashMap::new();
        root.for_each_node(&mut |n| {
            first
                .entry(n.line())
                .and_modify(|c| *c = (*c).min(n.column()))
                .or_insert(n.column());
        });
        Self { first }
    }

    fn first_column(&self, line: usize) -> Option<usize> {
        self.first.get(&line).copied()
    }
}

/// Verifies the indentation of one syntax tree.
///
/// A verifier is built per checked tree and discarded with it; the only
/// state shared across trees is the borrowed [`IndentOptions`], which is
/// read-only for the whole run. Violations come out in depth-first visit
/// order: a construct's clause checks, then its body/brace checks, then
/// its wrap pass, then nested constructs.
pub struct IndentationVerifier<'a> {
    options: &'a IndentOptions,
    severity: Severity,
    base: IndentLevel,
    lines: LineIndex,
    arena: Vec<HandlerNode<'a>>,
    violations: Vec<Violation>,
    reported: HashSet<(usize, usize)>,
}

impl<'a> IndentationVerifier<'a> {
    /// Creates a verifier over the given style options.
    #[must_use]
    pub fn new(options: &'a IndentOptions) -> Self {
        Self {
            options,
            severity: options.severity,
            base: IndentLevel::new(0),
            lines: LineIndex::default(),
            arena: Vec::new(),
            violations: Vec::new(),
            reported: HashSet::new(),
        }
    }

    /// Checks `root`, taking the root node's own column as the base level
    /// (the caller vouches for the root's placement).
    #[must_use]
    pub fn verify(self, root: &'a SyntaxNode) -> CheckResult {
        let base = IndentLevel::new(root.column());
        self.verify_at(root, base)
    }

    /// Checks `root` against an explicit base level, typically the
    /// enclosing body level of the subtree being verified.
    #[must_use]
    pub fn verify_at(mut self, root: &'a SyntaxNode, base: IndentLevel) -> CheckResult {
        debug!(root = %root.kind(), line = root.line(), "verifying indentation");
        self.base = base;
        self.lines = LineIndex::build(root);
        self.walk(root, None);
        debug!(
            handlers = self.arena.len(),
            violations = self.violations.len(),
            "verification complete"
        );
        CheckResult {
            violations: self.violations,
            handlers_checked: self.arena.len(),
        }
    }

    fn walk(&mut self, node: &'a SyntaxNode, parent: Option<HandlerId>) {
        let Some(behavior) = registry::behavior_for(node.kind()) else {
            for child in node.children() {
                self.walk(child, parent);
            }
            return;
        };

        let level = match parent {
            Some(p) => {
                let parent_behavior = self.arena[p].behavior;
                parent_behavior.suggested_child_level(self, p, node)
            }
            None => self.base.clone(),
        };
        trace!(construct = behavior.name(), line = node.line(), %level, "handler");

        let id = self.arena.len();
        self.arena.push(HandlerNode {
            behavior,
            node,
            parent,
            level,
        });
        behavior.check(self, id);

        for child in node.children() {
            if behavior.claims_child(self, id, child) {
                // validated inline by the construct's own check; still
                // descend for nested constructs
                for grandchild in child.children() {
                    self.walk(grandchild, Some(id));
                }
            } else {
                self.walk(child, Some(id));
            }
        }
    }

    /// The active style options.
    #[must_use]
    pub fn options(&self) -> &IndentOptions {
        self.options
    }

    /// The syntax node a handler is attached to.
    #[must_use]
    pub fn node(&self, handler: HandlerId) -> &'a SyntaxNode {
        self.arena[handler].node
    }

    /// The level a handler is checked against.
    #[must_use]
    pub fn level(&self, handler: HandlerId) -> IndentLevel {
        self.arena[handler].level.clone()
    }

    /// The token name of a handler's construct.
    #[must_use]
    pub fn name_of(&self, handler: HandlerId) -> &'static str {
        self.arena[handler].behavior.name()
    }

    /// First-token column of a source line, if the line holds any token.
    #[must_use]
    pub fn first_column(&self, line: usize) -> Option<usize> {
        self.lines.first_column(line)
    }

    /// Whether `node`'s first token is the first token on its line.
    #[must_use]
    pub fn starts_line(&self, node: &SyntaxNode) -> bool {
        self.lines.first_column(node.line()) == Some(node.column())
    }

    /// Checks a token against `expected`, but only when it starts its
    /// source line; reports a violation on mismatch.
    pub fn check_line_start(
        &mut self,
        node: &SyntaxNode,
        subject: impl Into<String>,
        expected: &IndentLevel,
    ) {
        if self.starts_line(node) && !expected.accepts(node.column()) {
            self.report(node.line(), node.column(), subject.into(), expected.clone());
        }
    }

    /// Checks a continuation line's first-token column unconditionally;
    /// reports a violation on mismatch.
    pub fn check_wrap_line(
        &mut self,
        line: usize,
        column: usize,
        subject: impl Into<String>,
        expected: &IndentLevel,
    ) {
        if !expected.accepts(column) {
            self.report(line, column, subject.into(), expected.clone());
        }
    }

    /// Records a violation, de-duplicating per (line, column): the clause
    /// checks run before the wrap pass, so when both cover a line the
    /// more specific report wins.
    fn report(&mut self, line: usize, column: usize, subject: String, expected: IndentLevel) {
        if !self.reported.insert((line, column)) {
            return;
        }
        debug!(line, column, %subject, %expected, "indentation violation");
        self.violations.push(Violation::new(
            self.severity,
            Location::new(line, column),
            subject,
            expected,
            column,
        ));
    }
}

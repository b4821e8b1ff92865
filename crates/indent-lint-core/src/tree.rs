//! The syntax tree interface supplied by the parser collaborator.
//!
//! The engine never parses source text. It receives an already-parsed,
//! immutable tree of [`SyntaxNode`]s - each carrying a construct-kind tag
//! and the source position of its first token - and walks it. Well-known
//! sub-clauses ("loop init", "condition", "body") are looked up by kind
//! via [`SyntaxNode::find_first`], mirroring how the upstream parser
//! exposes named slots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Construct, clause, and token kinds a [`SyntaxNode`] can carry.
///
/// The set is closed on purpose: the handler registry matches on every
/// variant with no wildcard arm, so adding a kind here refuses to compile
/// until the registry decides whether it is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// A class definition.
    ClassDef,
    /// A method definition.
    MethodDef,
    /// A brace-delimited statement list; the node position is the `{`.
    Block,
    /// An `if` statement.
    If,
    /// The alternative arm chained after an `if`.
    Else,
    /// A `while` loop.
    While,
    /// A `do`-`while` loop; the node position is the `do`.
    DoWhile,
    /// A classic or for-each loop.
    For,
    /// A guarded `try` block.
    Try,
    /// A handler clause chained after a `try`.
    Catch,
    /// A cleanup clause chained after a `try`.
    Finally,
    /// A `switch` statement.
    Switch,
    /// One or more case labels plus the statements they guard.
    CaseGroup,
    /// A `synchronized` block.
    Synchronized,
    /// A brace-delimited array initializer; the node position is the `{`.
    ArrayInit,

    /// The parenthesized condition of `if`/`while`/`do`-`while`/`switch`
    /// or the monitor expression of `synchronized`.
    Condition,
    /// The init clause of a classic loop header.
    ForInit,
    /// The condition clause of a classic loop header.
    ForCondition,
    /// The iterator clause of a classic loop header.
    ForIterator,
    /// The single iteration clause of a for-each loop header.
    ForEachClause,
    /// A parenthesized parameter list (method or catch).
    ParamClause,
    /// A `throws` clause on a method definition.
    ThrowsClause,
    /// A single `case x:` or `default:` label inside a case group.
    CaseLabel,

    /// The closing parenthesis ending a construct's header.
    RParen,
    /// The closing brace of a [`NodeKind::Block`] or array initializer.
    RBrace,
    /// The trailing `while` keyword of a `do`-`while` loop.
    WhileKeyword,

    /// A variable definition in statement or member position.
    VarDecl,
    /// An expression, in statement position or nested.
    Expr,
    /// A lone `;` statement.
    EmptyStmt,
}

impl NodeKind {
    /// Human-readable token name used in violation subjects.
    #[must_use]
    pub fn token_name(self) -> &'static str {
        match self {
            Self::ClassDef => "class def",
            Self::MethodDef => "method def",
            Self::Block => "block",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::DoWhile => "do",
            Self::For => "for",
            Self::Try => "try",
            Self::Catch => "catch",
            Self::Finally => "finally",
            Self::Switch => "switch",
            Self::CaseGroup => "case",
            Self::Synchronized => "synchronized",
            Self::ArrayInit => "array initializer",
            Self::Condition => "condition",
            Self::ForInit => "for init",
            Self::ForCondition => "for condition",
            Self::ForIterator => "for iterator",
            Self::ForEachClause => "for-each clause",
            Self::ParamClause => "parameters",
            Self::ThrowsClause => "throws",
            Self::CaseLabel => "case label",
            Self::RParen => ")",
            Self::RBrace => "}",
            Self::WhileKeyword => "while",
            Self::VarDecl => "variable def",
            Self::Expr => "expression",
            Self::EmptyStmt => "empty statement",
        }
    }

    /// Whether this kind is a named header sub-clause of its parent.
    #[must_use]
    pub fn is_clause(self) -> bool {
        matches!(
            self,
            Self::Condition
                | Self::ForInit
                | Self::ForCondition
                | Self::ForIterator
                | Self::ForEachClause
                | Self::ParamClause
                | Self::ThrowsClause
                | Self::CaseLabel
        )
    }

    /// Whether this kind stands for a single punctuation or keyword token.
    #[must_use]
    pub fn is_punctuation(self) -> bool {
        matches!(self, Self::RParen | Self::RBrace | Self::WhileKeyword)
    }

    /// Whether this kind is a chained continuation clause that aligns
    /// with its owner rather than nesting under it.
    #[must_use]
    pub fn is_chained_clause(self) -> bool {
        matches!(self, Self::Else | Self::Catch | Self::Finally)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token_name())
    }
}

/// One node of the parsed, immutable representation of source code.
///
/// `line` is 1-based, `column` 0-based; the position is that of the
/// node's first token. Children are ordered as they appear in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    kind: NodeKind,
    line: usize,
    column: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn new(kind: NodeKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            children: Vec::new(),
        }
    }

    /// Appends a child, builder-style.
    #[must_use]
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children, builder-style.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = SyntaxNode>,
    {
        self.children.extend(children);
        self
    }

    /// The construct-kind tag.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// 1-based source line of the first token.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-based source column of the first token.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The ordered structural children.
    #[must_use]
    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    /// Looks up a well-known sub-slot: the first direct child of `kind`.
    #[must_use]
    pub fn find_first(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Visits this node and every descendant, depth-first.
    pub fn for_each_node<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a SyntaxNode),
    {
        f(self);
        for child in &self.children {
            child.for_each_node(f);
        }
    }
}

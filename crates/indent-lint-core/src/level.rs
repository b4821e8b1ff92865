//! Indent levels - the set of columns accepted at a tree position.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A non-empty set of column positions considered correctly indented at
/// some position in the checked tree.
///
/// More than one column can be legitimate at once under common style
/// conventions: a header's closing parenthesis may align with the wrapped
/// content or with the header start, a closing brace with its opening
/// brace or the brace-adjusted column. Levels are plain values; deriving
/// one never mutates its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndentLevel {
    columns: BTreeSet<usize>,
}

impl IndentLevel {
    /// Creates a level accepting a single column.
    #[must_use]
    pub fn new(column: usize) -> Self {
        Self {
            columns: BTreeSet::from([column]),
        }
    }

    /// Creates a level accepting each of the given columns.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is empty. A level with no accepted columns is a
    /// modeling error, not a legal state.
    #[must_use]
    pub fn of(columns: &[usize]) -> Self {
        assert!(
            !columns.is_empty(),
            "an indent level must accept at least one column"
        );
        Self {
            columns: columns.iter().copied().collect(),
        }
    }

    /// Whether `column` is one of the accepted positions.
    #[must_use]
    pub fn accepts(&self, column: usize) -> bool {
        self.columns.contains(&column)
    }

    /// Derives a level with every member shifted by `by`, clipped at 0.
    #[must_use]
    pub fn shifted(&self, by: i32) -> Self {
        Self {
            columns: self.columns.iter().map(|&c| add_clipped(c, by)).collect(),
        }
    }

    /// Derives a level accepting everything `self` or `other` accepts.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            columns: self.columns.union(&other.columns).copied().collect(),
        }
    }

    /// The smallest accepted column, used when formatting messages.
    #[must_use]
    pub fn lowest(&self) -> usize {
        self.columns.iter().next().copied().unwrap_or_default()
    }

    /// Whether more than one column is accepted.
    #[must_use]
    pub fn is_multi_level(&self) -> bool {
        self.columns.len() > 1
    }
}

impl fmt::Display for IndentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for column in &self.columns {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{column}")?;
            first = false;
        }
        Ok(())
    }
}

fn add_clipped(column: usize, by: i32) -> usize {
    let shifted = i64::try_from(column)
        .unwrap_or(i64::MAX)
        .saturating_add(i64::from(by));
    usize::try_from(shifted.max(0)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_is_membership() {
        let level = IndentLevel::of(&[0, 4]);
        assert!(level.accepts(0));
        assert!(level.accepts(4));
        assert!(!level.accepts(2));
        assert!(!level.accepts(8));
    }

    #[test]
    fn shifted_translates_membership() {
        let level = IndentLevel::of(&[4, 8]);
        let shifted = level.shifted(4);
        // L.shifted(k).accepts(c) == L.accepts(c - k)
        for c in 0..20 {
            assert_eq!(shifted.accepts(c), c >= 4 && level.accepts(c - 4));
        }
    }

    #[test]
    fn shifted_clips_at_zero() {
        let level = IndentLevel::new(2);
        let shifted = level.shifted(-4);
        assert!(shifted.accepts(0));
        assert!(!shifted.accepts(2));
    }

    #[test]
    fn union_accepts_both_sets() {
        let a = IndentLevel::new(0);
        let b = IndentLevel::new(4);
        let both = a.union(&b);
        assert!(both.accepts(0));
        assert!(both.accepts(4));
        assert!(both.is_multi_level());
        assert_eq!(both.lowest(), 0);
    }

    #[test]
    fn display_joins_columns() {
        assert_eq!(IndentLevel::new(4).to_string(), "4");
        assert_eq!(IndentLevel::of(&[0, 4, 8]).to_string(), "0, 4, 8");
    }

    #[test]
    #[should_panic(expected = "at least one column")]
    fn empty_level_is_rejected() {
        let _ = IndentLevel::of(&[]);
    }
}

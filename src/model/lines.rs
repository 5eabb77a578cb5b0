use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use super::Line;

/// An operation addressed a line index outside the current sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("line index {index} out of bounds (model holds {len} lines)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Which lines an indent action propagates to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentPolicy {
    /// Every line at or after the trigger index is deepened, including
    /// pre-existing lines the edit never touched. This reproduces the
    /// source behavior the original authors themselves flagged as wrong.
    TrailingLines,
    /// Only lines created by the current logical edit (tracked in an
    /// [`EditScope`]) are deepened; pre-existing trailing lines keep their
    /// level.
    #[default]
    ScopedLines,
}

/// The set of line indices created by the current logical edit.
///
/// Maintained by the session: indices accumulate across consecutive
/// new-line events and must be shifted when an insertion displaces lines
/// they refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EditScope {
    indices: BTreeSet<usize>,
}

impl EditScope {
    /// Record a line index as part of the current edit.
    pub fn insert(&mut self, index: usize) {
        self.indices.insert(index);
    }

    /// Whether the index belongs to the current edit.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Forget the current edit.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Re-point members after a line was inserted at `inserted`: every
    /// recorded index at or after the insertion point now refers to the
    /// line one slot further down.
    pub fn shift_for_insert(&mut self, inserted: usize) {
        self.indices = self
            .indices
            .iter()
            .map(|&i| if i >= inserted { i + 1 } else { i })
            .collect();
    }
}

impl FromIterator<usize> for EditScope {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

/// The ordered sequence of [`Line`] records.
///
/// Order is document order, top to bottom, and the index is the only
/// addressing mechanism. One model instance belongs to one editing session;
/// there is no shared global instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LineModel {
    lines: Vec<Line>,
}

impl LineModel {
    /// A model holding the single implicit first line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::empty(1)],
        }
    }

    /// Build a model from existing lines. Intended for tests and benches.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// One-based display position of a line, derived from its current index.
    ///
    /// The stored [`Line::position`] field reflects creation time only and
    /// goes stale once a later insertion displaces the line.
    pub const fn display_position(index: usize) -> usize {
        index + 1
    }

    /// Create a new line immediately after `after`, inheriting its indent.
    ///
    /// Returns the index of the new line. The new line lands at
    /// `after + 1`, displacing any successors, so a line created
    /// mid-document ends up at the correct logical position rather than at
    /// the tail.
    pub fn insert_after(&mut self, after: usize) -> Result<usize, ModelError> {
        let indent = self
            .lines
            .get(after)
            .ok_or(ModelError::IndexOutOfBounds {
                index: after,
                len: self.lines.len(),
            })?
            .indent;
        let new_index = after + 1;
        self.lines.insert(new_index, Line::new("", after + 2, indent));
        Ok(new_index)
    }

    /// Replace the text of the line at `index`. No other field of any line
    /// changes.
    pub fn set_line_text(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), ModelError> {
        let len = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfBounds { index, len })?
            .set_text(text);
        Ok(())
    }

    /// Deepen every line at index `from` or later by one unit.
    ///
    /// `from == len` is a no-op; `from > len` is out of bounds. This is the
    /// [`IndentPolicy::TrailingLines`] contract.
    pub fn indent_from(&mut self, from: usize) -> Result<(), ModelError> {
        self.check_from_index(from)?;
        for line in &mut self.lines[from..] {
            line.indent_once();
        }
        Ok(())
    }

    /// Deepen only the scope members at index `from` or later by one unit.
    ///
    /// Lines outside `scope` keep their level regardless of position. Bounds
    /// rule matches [`Self::indent_from`]. This is the
    /// [`IndentPolicy::ScopedLines`] contract.
    pub fn indent_scoped(&mut self, scope: &EditScope, from: usize) -> Result<(), ModelError> {
        self.check_from_index(from)?;
        for (index, line) in self.lines.iter_mut().enumerate().skip(from) {
            if scope.contains(index) {
                line.indent_once();
            }
        }
        Ok(())
    }

    fn check_from_index(&self, from: usize) -> Result<(), ModelError> {
        if from > self.lines.len() {
            return Err(ModelError::IndexOutOfBounds {
                index: from,
                len: self.lines.len(),
            });
        }
        Ok(())
    }
}

impl Default for LineModel {
    fn default() -> Self {
        Self::new()
    }
}

//! The edit session.
//!
//! One [`EditSession`] owns one [`LineModel`] and applies inbound edit
//! events against it: resolve the cursor to a line index first, mutate the
//! model last. A failing event leaves the model untouched; there are no
//! partial updates. Events are processed one at a time to completion, so
//! the session needs no locking discipline.

use serde::Serialize;
use thiserror::Error;

use crate::model::{EditScope, IndentPolicy, Line, LineModel, ModelError};
use crate::resolve::{self, EditingSurface, ResolveError, SelectionSnapshot};

/// What kind of edit the surface reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditKind {
    /// The active line's text changed.
    TextEdit,
    /// The user committed a new-line action on the active line.
    NewLine,
    /// The user requested an indent at the active line.
    Indent,
}

/// One inbound edit event: what happened plus where the selection sat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditEvent<Id> {
    pub kind: EditKind,
    pub selection: SelectionSnapshot<Id>,
}

impl<Id> EditEvent<Id> {
    pub const fn new(kind: EditKind, selection: SelectionSnapshot<Id>) -> Self {
        Self { kind, selection }
    }
}

/// Why an edit event was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Outcome of a successfully applied event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditReport {
    pub kind: EditKind,
    /// The resolved line index the event was applied at.
    pub index: usize,
    /// Line count after the mutation.
    pub line_count: usize,
}

/// Serializable view of the session for debug display.
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub policy: IndentPolicy,
    pub scope: &'a EditScope,
    pub lines: &'a [Line],
}

/// The editing session context: line model, indent policy, and the edit
/// scope of the current logical operation.
///
/// Owned by whichever orchestrator runs the editing surface; one instance
/// per surface, passed explicitly, never global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    model: LineModel,
    policy: IndentPolicy,
    scope: EditScope,
}

impl EditSession {
    pub fn new(policy: IndentPolicy) -> Self {
        Self {
            model: LineModel::new(),
            policy,
            scope: EditScope::default(),
        }
    }

    /// Build a session around an existing model. Intended for tests.
    pub fn with_model(model: LineModel, policy: IndentPolicy) -> Self {
        Self {
            model,
            policy,
            scope: EditScope::default(),
        }
    }

    pub fn model(&self) -> &LineModel {
        &self.model
    }

    /// The updated ordered line records, for rendering and debug display.
    pub fn lines(&self) -> &[Line] {
        self.model.lines()
    }

    pub const fn policy(&self) -> IndentPolicy {
        self.policy
    }

    pub const fn scope(&self) -> &EditScope {
        &self.scope
    }

    pub fn debug_view(&self) -> SessionView<'_> {
        SessionView {
            policy: self.policy,
            scope: &self.scope,
            lines: self.model.lines(),
        }
    }

    /// Apply one edit event against the model.
    ///
    /// Resolution runs first and short-circuits on failure; mutation
    /// preconditions reduce to a single index check per event kind, so a
    /// returned error always means the model is exactly as it was.
    ///
    /// # Errors
    ///
    /// [`SessionError::Resolve`] when the selection has no active range or
    /// its container is detached from `root`; [`SessionError::Model`] when
    /// the resolved index falls outside the model.
    pub fn apply<S: EditingSurface>(
        &mut self,
        surface: &S,
        root: S::NodeId,
        event: &EditEvent<S::NodeId>,
    ) -> Result<EditReport, SessionError> {
        let range = resolve::active_range(&event.selection)?;
        let index = resolve::current_line_index(surface, root, &range.start)?;
        let text = resolve::current_line_text(surface, &range.start);

        match event.kind {
            EditKind::TextEdit => {
                self.model.set_line_text(index, text)?;
                // Typing outside the freshly created lines ends the
                // logical edit they belonged to.
                if !self.scope.is_empty() && !self.scope.contains(index) {
                    self.scope.clear();
                }
            }
            EditKind::NewLine => {
                // Both operations address `index`; once the text update
                // passes the bounds check the insert cannot fail.
                self.model.set_line_text(index, text)?;
                let new_index = self.model.insert_after(index)?;
                self.scope.shift_for_insert(new_index);
                self.scope.insert(new_index);
            }
            EditKind::Indent => match self.policy {
                IndentPolicy::TrailingLines => self.model.indent_from(index)?,
                IndentPolicy::ScopedLines => {
                    self.model.indent_scoped(&self.scope, index)?;
                    self.scope.clear();
                }
            },
        }

        Ok(EditReport {
            kind: event.kind,
            index,
            line_count: self.model.len(),
        })
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(IndentPolicy::default())
    }
}

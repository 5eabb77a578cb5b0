use std::time::{Duration, Instant};

use crate::host::HostTree;
use crate::model::IndentPolicy;
use crate::resolve::SelectionSnapshot;
use crate::session::{EditEvent, EditKind, EditSession};
use crate::ui::viewport::Viewport;

/// Rows consumed by editor pane borders and the status bar.
pub(super) const EDITOR_CHROME_ROWS: u16 = 3;

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The session owns
/// the line model; the host tree owns the surface the user actually types
/// into; edits flow from the host through the session, never sideways.
#[derive(Debug, Clone)]
pub struct Model {
    /// The editing session: line model, indent policy, edit scope
    pub session: EditSession,
    /// The in-memory editing surface
    pub host: HostTree,
    /// Viewport managing scroll position of the editor pane
    pub viewport: Viewport,
    /// Whether the debug pane column is visible
    pub debug_visible: bool,
    /// Indent unit width in columns
    pub indent_width: u16,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a new model with default settings.
    pub fn new(
        policy: IndentPolicy,
        indent_width: u16,
        debug_visible: bool,
        terminal_size: (u16, u16),
    ) -> Self {
        Self {
            session: EditSession::new(policy),
            host: HostTree::new(),
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(EDITOR_CHROME_ROWS),
                1,
            ),
            debug_visible,
            indent_width,
            toast: None,
            should_quit: false,
        }
    }

    /// Feed the host's current selection through the session.
    pub(super) fn apply_edit(&mut self, kind: EditKind) {
        let snapshot = self.host.selection_snapshot();
        self.apply_edit_with(kind, snapshot);
    }

    /// Feed a specific selection snapshot through the session.
    ///
    /// A failed event is dropped whole: the model is untouched and the drop
    /// is surfaced as a toast, logged, and recorded in the edit log.
    pub(super) fn apply_edit_with(
        &mut self,
        kind: EditKind,
        snapshot: SelectionSnapshot<crate::host::NodeId>,
    ) {
        let event = EditEvent::new(kind, snapshot);
        let root = self.host.root();
        match self.session.apply(&self.host, root, &event) {
            Ok(report) => {
                tracing::debug!(
                    kind = ?report.kind,
                    index = report.index,
                    line_count = report.line_count,
                    "edit applied"
                );
                crate::editlog::log_event(
                    "edit.apply",
                    serde_json::to_string(&report).unwrap_or_default(),
                );
            }
            Err(err) => {
                tracing::warn!(%err, ?kind, "edit dropped");
                crate::editlog::log_event("edit.drop", format!("kind={kind:?} err={err}"));
                self.show_toast(ToastLevel::Warning, format!("edit dropped: {err}"));
            }
        }
    }

    /// Keep the viewport tracking the caret and the document length.
    pub(super) fn sync_viewport(&mut self) {
        self.viewport.set_total_lines(self.host.line_count().max(1));
        self.viewport.ensure_visible(self.host.cursor().line);
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    /// Drop the toast once its time is up. Returns `true` when it expired.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(IndentPolicy::default(), 2, true, (80, 24))
    }
}

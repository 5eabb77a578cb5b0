// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. model::LineModel)
    clippy::module_name_repetitions
)]

//! # Linescope
//!
//! A terminal structured-text scratchpad with a live line model.
//!
//! Every line carries an indentation level tracked by a structural model
//! that stays synchronized with the cursor position reported by the editing
//! surface. Debug panes show the model, the selection, and the resolved
//! range as live JSON.
//!
//! ## Architecture
//!
//! Linescope uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! The core is surface-agnostic: [`model`] owns the line records, [`resolve`]
//! maps selections to line indices through a capability trait, and
//! [`session`] applies edit events atomically. The [`host`] tree and the TUI
//! layers are the collaborator that owns the actual editing surface.
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`model`]: Line records and the ordered line model
//! - [`resolve`]: Cursor resolution over the surface tree
//! - [`session`]: Edit session orchestration
//! - [`host`]: In-memory editing surface
//! - [`ui`]: Terminal UI components
//! - [`config`]: Flag-file and CLI configuration
//! - [`editlog`]: File-backed edit event logging

pub mod app;
pub mod config;
pub mod editlog;
pub mod host;
pub mod model;
pub mod resolve;
pub mod session;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::host::HostTree;
    pub use crate::model::{IndentPolicy, Line, LineModel};
    pub use crate::session::{EditEvent, EditKind, EditSession};
    pub use crate::ui::viewport::Viewport;
}

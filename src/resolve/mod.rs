//! The cursor resolver.
//!
//! Maps an opaque selection reported by the editing surface to a logical
//! line index in the line model. The surface tree is host-owned: the
//! resolver only queries it through the [`EditingSurface`] capability trait
//! and never mutates it. All functions here are pure.

mod selection;
mod walk;

pub use selection::{Boundary, RawRange, SelectionSnapshot, active_range};
pub use walk::{EditingSurface, MAX_WALK_DEPTH, current_line_index, current_line_text};

use thiserror::Error;

/// Resolution failures. Both are local-recoverable: the triggering edit
/// event is dropped and the line model is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The selection reports zero composed ranges, e.g. the surface is
    /// unfocused or the event fired prematurely.
    #[error("selection reports no active range")]
    NoActiveRange,
    /// The boundary container has no ancestor chain reaching the surface
    /// root, or the chain exceeds [`MAX_WALK_DEPTH`].
    #[error("boundary container is not attached to the editing surface root")]
    DetachedNode,
}

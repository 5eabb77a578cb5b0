//! The in-memory editing surface.
//!
//! A host-owned node tree standing in for the rich-text container the user
//! types into: a root element whose children are line elements, each
//! holding a single text node. The tree mutates itself on keystrokes and
//! reports selection snapshots; the line model is synced through the edit
//! session, never written directly.

mod tree;

pub use tree::{HostCursor, HostTree, NodeId};

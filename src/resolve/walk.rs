use std::fmt;

use super::{Boundary, ResolveError};

/// Maximum ancestor-walk depth before a container is declared detached.
///
/// The surface tree is host-owned and may be malformed (cycles, orphaned
/// subtrees); the bound guarantees the walk terminates.
pub const MAX_WALK_DEPTH: usize = 64;

/// Capability the host tree must expose for resolution.
///
/// The resolver queries parents, sibling ordinals, and text content; it
/// never mutates the tree or assumes anything about its storage.
pub trait EditingSurface {
    type NodeId: Copy + Eq + fmt::Debug;

    /// The parent of `node`, or `None` for the tree root and orphans.
    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;

    /// The ordinal position of `child` among `parent`'s direct children.
    fn child_ordinal(&self, parent: Self::NodeId, child: Self::NodeId) -> Option<usize>;

    /// The text content of `node`, including descendants for elements.
    fn node_text(&self, node: Self::NodeId) -> String;
}

/// The text currently inside the boundary's start container.
///
/// Returns only the text owned by the immediate container. When a logical
/// line is split across several sub-containers this is not the whole line;
/// that simplification is inherited from the source behavior.
pub fn current_line_text<S: EditingSurface>(surface: &S, boundary: &Boundary<S::NodeId>) -> String {
    surface.node_text(boundary.container)
}

/// The index of the line container holding the boundary, among the surface
/// root's direct children.
///
/// Walks upward from the start container until reaching a node whose parent
/// is `root`. A boundary sitting on the root itself resolves to line 0, the
/// implicit first line.
///
/// # Errors
///
/// [`ResolveError::DetachedNode`] when the container has no ancestor chain
/// reaching `root` within [`MAX_WALK_DEPTH`] steps.
pub fn current_line_index<S: EditingSurface>(
    surface: &S,
    root: S::NodeId,
    boundary: &Boundary<S::NodeId>,
) -> Result<usize, ResolveError> {
    let mut node = boundary.container;
    if node == root {
        return Ok(0);
    }
    for _ in 0..MAX_WALK_DEPTH {
        let Some(parent) = surface.parent(node) else {
            return Err(ResolveError::DetachedNode);
        };
        if parent == root {
            return surface
                .child_ordinal(root, node)
                .ok_or(ResolveError::DetachedNode);
        }
        node = parent;
    }
    Err(ResolveError::DetachedNode)
}

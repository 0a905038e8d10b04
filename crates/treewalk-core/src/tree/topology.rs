//! Read-only topology seam between tree storage and the traversal engine.
//!
//! The engine only needs to know the root and the ordered children of a node,
//! so any structure can drive it by implementing [`Topology`].

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::NodeId;

/// Anything the engine can walk. [`Tree`](super::Tree) implements it.
pub trait Topology {
    /// Returns the id of the root node.
    fn root_id(&self) -> NodeId;

    /// Returns the children of a node, left to right.
    ///
    /// Unknown ids have no children.
    fn children(&self, node_id: NodeId) -> &[NodeId];

    /// Returns the number of nodes reachable from the root.
    fn node_count(&self) -> usize;

    /// Walks the structure in pre-order (left to right), reporting each
    /// reachable node once with its depth and the parent it was first
    /// reached through.
    fn preorder(&self) -> Vec<WalkEntry> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut seen = FxHashSet::default();
        let mut stack = vec![WalkEntry {
            id: self.root_id(),
            depth: 0,
            parent: None,
        }];

        while let Some(entry) = stack.pop() {
            if !seen.insert(entry.id) {
                continue;
            }
            for &child in self.children(entry.id).iter().rev() {
                if !seen.contains(&child) {
                    stack.push(WalkEntry {
                        id: child,
                        depth: entry.depth + 1,
                        parent: Some(entry.id),
                    });
                }
            }
            out.push(entry);
        }

        out
    }
}

/// One node reported by [`Topology::preorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalkEntry {
    /// The node reached.
    pub id: NodeId,
    /// Number of edges from the root.
    pub depth: usize,
    /// Parent through which the node was reached; `None` for the root.
    pub parent: Option<NodeId>,
}

//! Immutable rooted trees.
//!
//! Provides the [`Node`] and [`Tree`] types, the two reference trees used by
//! the teaching tool, validated construction from a declarative
//! [`TreeSpec`], and the [`Topology`] trait through which the traversal
//! engine reads structure.
//!
//! # Example
//!
//! ```rust
//! use treewalk_core::tree::build_tree;
//! use treewalk_core::Algorithm;
//!
//! let tree = build_tree(Algorithm::Bfs);
//! assert_eq!(tree.len(), 14);
//! assert_eq!(tree.children(1), &[2, 3, 4]);
//! assert_eq!(tree.depth(14), Some(3));
//! ```

mod catalog;
mod node;
mod spec;
mod topology;
mod variants;

#[cfg(test)]
mod spec_tests;

pub use catalog::TreeCatalog;
pub use node::{Node, NodeId};
pub use spec::{NodeSpec, TreeSpec, MAX_TREE_DEPTH};
pub use topology::{Topology, WalkEntry};
pub use variants::{bfs_reference_tree, build_tree, dfs_reference_tree};

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// A rooted tree with an id-keyed index over its nodes.
///
/// The owned [`Node`] hierarchy is kept for structural access; the index is
/// derived from it once at construction so lookups by id are O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
    /// node_id -> ordered child ids.
    children: FxHashMap<NodeId, Vec<NodeId>>,
    /// node_id -> distance from the root.
    depths: FxHashMap<NodeId, usize>,
    /// Pre-order listing of every node id.
    order: Vec<NodeId>,
}

impl Tree {
    /// Builds a tree from a root node.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateNodeId` if two nodes share an id.
    pub fn new(root: Node) -> Result<Self> {
        let index = TreeIndex::build(&root);
        if let Some(id) = index.duplicate {
            return Err(Error::DuplicateNodeId(id));
        }
        Ok(index.into_tree(root))
    }

    /// Builds a tree whose ids are known to be unique.
    pub(crate) fn from_trusted(root: Node) -> Self {
        let index = TreeIndex::build(&root);
        debug_assert!(index.duplicate.is_none(), "trusted tree has duplicate ids");
        index.into_tree(root)
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns the root id.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root.id()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the ordered child ids of a node (empty for leaves and unknown ids).
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns true if the tree contains a node with this id.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.depths.contains_key(&id)
    }

    /// Returns the depth of a node (root = 0).
    #[must_use]
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.depths.get(&id).copied()
    }

    /// Returns every node id in pre-order.
    #[must_use]
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Finds a node by id.
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if !self.contains(id) {
            return None;
        }
        self.root.find(id)
    }
}

impl Topology for Tree {
    fn root_id(&self) -> NodeId {
        Tree::root_id(self)
    }

    fn children(&self, node_id: NodeId) -> &[NodeId] {
        Tree::children(self, node_id)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

/// Index collected from one pre-order pass over a node hierarchy.
struct TreeIndex {
    children: FxHashMap<NodeId, Vec<NodeId>>,
    depths: FxHashMap<NodeId, usize>,
    order: Vec<NodeId>,
    duplicate: Option<NodeId>,
}

impl TreeIndex {
    fn build(root: &Node) -> Self {
        let mut index = Self {
            children: FxHashMap::default(),
            depths: FxHashMap::default(),
            order: Vec::new(),
            duplicate: None,
        };

        let mut stack = vec![(root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            if index.depths.insert(node.id(), depth).is_some() {
                index.duplicate.get_or_insert(node.id());
                continue;
            }
            index.order.push(node.id());
            if !node.is_leaf() {
                index.children.insert(node.id(), node.child_ids());
            }
            for child in node.children().iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        index
    }

    fn into_tree(self, root: Node) -> Tree {
        Tree {
            root,
            children: self.children,
            depths: self.depths,
            order: self.order,
        }
    }
}

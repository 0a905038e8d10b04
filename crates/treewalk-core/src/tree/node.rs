//! Tree nodes.

use serde::{Deserialize, Serialize};

/// Identifier of a node, unique within one tree.
pub type NodeId = u64;

/// A node with an ordered list of owned children.
///
/// Nodes are assembled once, handed to a [`Tree`](super::Tree), and never
/// mutated afterwards.
///
/// # Example
///
/// ```rust
/// use treewalk_core::tree::Node;
///
/// let root = Node::new(1).with_children(vec![Node::new(2), Node::leaf(3)]);
/// assert_eq!(root.id(), 1);
/// assert_eq!(root.child_ids(), vec![2, 3]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    /// Creates a node with no children.
    #[must_use]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    /// Alias of [`Node::new`] that reads better in tree literals.
    #[must_use]
    pub fn leaf(id: NodeId) -> Self {
        Self::new(id)
    }

    /// Sets the children of this node (builder pattern).
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Returns the node ID.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the children, left to right.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the ids of the direct children, left to right.
    #[must_use]
    pub fn child_ids(&self) -> Vec<NodeId> {
        self.children.iter().map(Node::id).collect()
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds a descendant (or this node) by id.
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.id == id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }
}

//! Declarative tree descriptions loaded from TOML or JSON.
//!
//! ```toml
//! root = 1
//!
//! [[nodes]]
//! id = 1
//! children = [2, 3]
//!
//! [[nodes]]
//! id = 2
//! children = [4]
//! ```
//!
//! Ids that only ever appear as children are leaves and need no entry.

use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::{Node, NodeId, Tree};

/// Deepest tree (edges from the root to the farthest leaf) a spec may describe.
///
/// Trees are assembled into an owned [`Node`] hierarchy, so depth is bounded
/// to keep construction, cloning and dropping within the thread stack.
pub const MAX_TREE_DEPTH: usize = 1024;

/// One declared node and its ordered children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeSpec {
    /// Node id.
    pub id: NodeId,
    /// Child ids, left to right.
    #[serde(default)]
    pub children: Vec<NodeId>,
}

/// A tree described as a root id plus parent → children entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreeSpec {
    /// Id of the root node.
    pub root: NodeId,
    /// Declared nodes. Leaves may be omitted.
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
}

impl TreeSpec {
    /// Creates a spec with only a root.
    #[must_use]
    pub fn new(root: NodeId) -> Self {
        Self {
            root,
            nodes: Vec::new(),
        }
    }

    /// Declares a node with its children (builder pattern).
    #[must_use]
    pub fn with_node(mut self, id: NodeId, children: Vec<NodeId>) -> Self {
        self.nodes.push(NodeSpec { id, children });
        self
    }

    /// Reads a spec from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    /// Validates the description and builds the tree.
    ///
    /// # Errors
    ///
    /// - `Error::DuplicateNodeId` if a node is declared twice
    /// - `Error::RootHasParent` if the root is listed as a child
    /// - `Error::MultipleParents` if a node is listed under two parents
    /// - `Error::Unreachable` if a declared node is not reachable from the root
    /// - `Error::TooDeep` if the tree is deeper than [`MAX_TREE_DEPTH`]
    pub fn build(&self) -> Result<Tree> {
        let mut children: FxHashMap<NodeId, &[NodeId]> = FxHashMap::default();
        let mut parents: FxHashMap<NodeId, NodeId> = FxHashMap::default();

        for node in &self.nodes {
            if children.insert(node.id, &node.children).is_some() {
                return Err(Error::DuplicateNodeId(node.id));
            }
            for &child in &node.children {
                if child == self.root {
                    return Err(Error::RootHasParent(self.root));
                }
                if let Some(first) = parents.insert(child, node.id) {
                    return Err(Error::MultipleParents {
                        child,
                        first,
                        second: node.id,
                    });
                }
            }
        }

        // Every node now has at most one parent and the root has none, so the
        // part reachable from the root is a tree; anything else sits on a
        // detached cycle or fragment.
        let mut reachable = FxHashSet::default();
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            if depth > MAX_TREE_DEPTH {
                return Err(Error::TooDeep {
                    node: id,
                    max: MAX_TREE_DEPTH,
                });
            }
            if reachable.insert(id) {
                if let Some(kids) = children.get(&id) {
                    stack.extend(kids.iter().map(|&kid| (kid, depth + 1)));
                }
            }
        }
        for node in &self.nodes {
            if !reachable.contains(&node.id) {
                return Err(Error::Unreachable(node.id));
            }
        }

        Ok(Tree::from_trusted(assemble(self.root, &children)))
    }
}

fn assemble(id: NodeId, children: &FxHashMap<NodeId, &[NodeId]>) -> Node {
    let kids = children.get(&id).copied().unwrap_or_default();
    Node::new(id).with_children(kids.iter().map(|&kid| assemble(kid, children)).collect())
}

impl From<&Tree> for TreeSpec {
    fn from(tree: &Tree) -> Self {
        let nodes = tree
            .node_ids()
            .iter()
            .filter(|&&id| !tree.children(id).is_empty())
            .map(|&id| NodeSpec {
                id,
                children: tree.children(id).to_vec(),
            })
            .collect();
        Self {
            root: tree.root_id(),
            nodes,
        }
    }
}

impl Tree {
    /// Builds a tree from a declarative spec. See [`TreeSpec::build`].
    pub fn from_spec(spec: &TreeSpec) -> Result<Self> {
        spec.build()
    }
}

//! Error types for treewalk-core.
//!
//! The traversal engine itself never fails: calls made at the wrong time are
//! no-ops. Errors only arise at the edges, when trees are built from
//! user-supplied specs or configuration is loaded.

use thiserror::Error;

use crate::config::ConfigError;
use crate::tree::NodeId;

/// Treewalk error types.
#[derive(Error, Debug)]
pub enum Error {
    /// The same node id was declared twice.
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(NodeId),

    /// A node was listed as the child of two different parents.
    #[error("Node {child} has more than one parent ({first} and {second})")]
    MultipleParents {
        /// The node listed twice.
        child: NodeId,
        /// The parent that claimed it first.
        first: NodeId,
        /// The parent that claimed it again.
        second: NodeId,
    },

    /// The root was listed as somebody's child.
    #[error("Root node {0} cannot be the child of another node")]
    RootHasParent(NodeId),

    /// A declared node cannot be reached from the root.
    #[error("Node {0} is not reachable from the root")]
    Unreachable(NodeId),

    /// The tree is deeper than `MAX_TREE_DEPTH`.
    #[error("Node {node} lies deeper than the maximum tree depth of {max}")]
    TooDeep {
        /// First node found beyond the limit.
        node: NodeId,
        /// The depth limit.
        max: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for treewalk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned when a string names no known variant of a small enum
/// (algorithm, output format).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    /// What was being parsed, e.g. "algorithm".
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted spellings.
    pub expected: &'static str,
}

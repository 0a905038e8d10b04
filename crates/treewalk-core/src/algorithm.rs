//! Traversal algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseEnumError;

/// The traversal discipline driving the engine.
///
/// Besides choosing FIFO or LIFO frontier order, the algorithm also selects
/// which tree variant is active (see [`TreeCatalog`](crate::tree::TreeCatalog)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first: the frontier is a queue.
    #[default]
    Bfs,
    /// Depth-first: the frontier is a stack.
    Dfs,
}

impl Algorithm {
    /// Both algorithms, in selector order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Bfs, Algorithm::Dfs];

    /// Upper-case short name ("BFS" / "DFS").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// Name of the frontier structure ("Queue" / "Stack").
    #[must_use]
    pub fn frontier_name(self) -> &'static str {
        match self {
            Self::Bfs => "Queue",
            Self::Dfs => "Stack",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "depth" | "depth-first" => Ok(Self::Dfs),
            _ => Err(ParseEnumError {
                kind: "algorithm",
                value: s.to_string(),
                expected: "bfs, dfs",
            }),
        }
    }
}

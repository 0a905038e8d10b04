//! One tree per algorithm.

use crate::algorithm::Algorithm;

use super::{bfs_reference_tree, dfs_reference_tree, Tree};

/// The pair of tree variants an engine switches between.
///
/// Generic over the topology so tests can drive the engine with structures
/// that are not trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeCatalog<G = Tree> {
    bfs: G,
    dfs: G,
}

impl<G> TreeCatalog<G> {
    /// Creates a catalog from explicit variants.
    #[must_use]
    pub fn new(bfs: G, dfs: G) -> Self {
        Self { bfs, dfs }
    }

    /// Returns the variant used with `algorithm`.
    #[must_use]
    pub fn get(&self, algorithm: Algorithm) -> &G {
        match algorithm {
            Algorithm::Bfs => &self.bfs,
            Algorithm::Dfs => &self.dfs,
        }
    }

    /// Replaces the variant used with `algorithm` (builder pattern).
    #[must_use]
    pub fn with_variant(mut self, algorithm: Algorithm, graph: G) -> Self {
        match algorithm {
            Algorithm::Bfs => self.bfs = graph,
            Algorithm::Dfs => self.dfs = graph,
        }
        self
    }
}

impl TreeCatalog<Tree> {
    /// The two reference trees.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(bfs_reference_tree(), dfs_reference_tree())
    }
}

impl Default for TreeCatalog<Tree> {
    fn default() -> Self {
        Self::reference()
    }
}

//! Step-by-step traversal engine.
//!
//! The engine advances a BFS or DFS walk exactly one node per [`step`] call.
//! Everything a renderer needs (per-node classification, frontier contents,
//! status) is derived from four pieces of state: the frontier, the visited
//! set, the visit order and the cursor. Nothing is cached per node.
//!
//! Calls made at the wrong time (`step` before `start`, `step` after
//! completion, `start` twice) are no-ops, never errors.
//!
//! # Example
//!
//! ```rust
//! use treewalk_core::engine::{NodeState, StepOutcome, TraversalEngine};
//! use treewalk_core::Algorithm;
//!
//! let mut engine = TraversalEngine::new(Algorithm::Bfs);
//! engine.start();
//! assert_eq!(engine.step(), StepOutcome::Advanced(1));
//! assert_eq!(engine.frontier_snapshot(), vec![2, 3, 4]);
//! assert_eq!(engine.classify(1), NodeState::Processing);
//! assert_eq!(engine.classify(2), NodeState::Frontier);
//! ```
//!
//! [`step`]: TraversalEngine::step

mod frontier;


pub use frontier::{Discipline, Frontier};

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::tree::{NodeId, Topology, Tree, TreeCatalog};

/// Lifecycle of one traversal run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Reset and seeded with the root; waiting for `start`.
    #[default]
    Idle,
    /// Started; `step` advances the walk.
    Running,
    /// The frontier emptied; only `reset` leaves this phase.
    Complete,
}

/// Visual classification of a node, derived from engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Not discovered yet.
    Unvisited,
    /// Discovered and waiting in the queue/stack.
    Frontier,
    /// The node removed by the latest step.
    Processing,
    /// Removed and expanded by an earlier step.
    Visited,
}

impl NodeState {
    /// All states in legend order.
    pub const ALL: [NodeState; 4] = [
        NodeState::Unvisited,
        NodeState::Frontier,
        NodeState::Processing,
        NodeState::Visited,
    ];
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unvisited => "unvisited",
            Self::Frontier => "frontier",
            Self::Processing => "processing",
            Self::Visited => "visited",
        })
    }
}

/// Result of a [`TraversalEngine::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "node", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Not running or nothing left; state unchanged.
    Ignored,
    /// Processed a node; the frontier still holds work.
    Advanced(NodeId),
    /// Processed the last node. Returned once per run.
    Completed(NodeId),
}

impl StepOutcome {
    /// The node processed by this step, if any.
    #[must_use]
    pub fn node(self) -> Option<NodeId> {
        match self {
            Self::Ignored => None,
            Self::Advanced(id) | Self::Completed(id) => Some(id),
        }
    }

    /// True for the step that finished the traversal.
    #[must_use]
    pub fn is_completion(self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Summary of engine state for status captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Active algorithm.
    pub algorithm: Algorithm,
    /// Current phase.
    pub phase: Phase,
    /// Number of nodes waiting in the frontier.
    pub frontier_len: usize,
    /// Number of nodes processed so far.
    pub visited_len: usize,
    /// The node removed by the latest step, kept after completion.
    pub processing: Option<NodeId>,
}

impl Status {
    /// True while steps are accepted.
    #[must_use]
    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// True once the traversal finished.
    #[must_use]
    pub fn complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}

/// Drives a BFS or DFS walk one node at a time.
///
/// Holds one topology per algorithm (see [`TreeCatalog`]); `reset` selects the
/// variant for the requested algorithm and discards any progress.
#[derive(Debug, Clone)]
pub struct TraversalEngine<G: Topology = Tree> {
    catalog: TreeCatalog<G>,
    algorithm: Algorithm,
    phase: Phase,
    frontier: Frontier,
    /// Visited node -> its index in `visit_order`.
    visited: FxHashMap<NodeId, usize>,
    visit_order: Vec<NodeId>,
    cursor: Option<usize>,
}

impl TraversalEngine<Tree> {
    /// Creates an engine over the two reference trees, reset for `algorithm`.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_catalog(TreeCatalog::reference(), algorithm)
    }
}

impl<G: Topology> TraversalEngine<G> {
    /// Creates an engine over the given variants, reset for `algorithm`.
    #[must_use]
    pub fn with_catalog(catalog: TreeCatalog<G>, algorithm: Algorithm) -> Self {
        let mut engine = Self {
            catalog,
            algorithm,
            phase: Phase::Idle,
            frontier: Frontier::new(Discipline::from(algorithm)),
            visited: FxHashMap::default(),
            visit_order: Vec::new(),
            cursor: None,
        };
        engine.reset(algorithm);
        engine
    }

    // ── Mutating operations ────────────────────────────────────────────

    /// Discards all progress and seeds the frontier with the root of the
    /// variant for `algorithm`.
    pub fn reset(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.phase = Phase::Idle;
        self.visited.clear();
        self.visit_order.clear();
        self.cursor = None;
        self.frontier.reset(Discipline::from(algorithm));

        let root = self.tree().root_id();
        self.frontier.push(root);
        tracing::debug!(%algorithm, root, "traversal reset");
    }

    /// Resets with the current algorithm.
    pub fn restart(&mut self) {
        self.reset(self.algorithm);
    }

    /// Moves from `Idle` to `Running`. Returns false (no-op) in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            tracing::trace!(phase = ?self.phase, "start ignored");
            return false;
        }
        self.phase = Phase::Running;
        tracing::debug!(algorithm = %self.algorithm, "traversal started");
        true
    }

    /// Processes exactly one node.
    ///
    /// Removes the next node from the frontier, records it as visited and
    /// schedules its undiscovered children: in order for a queue, in reverse
    /// for a stack so that they are popped left to right. Returns
    /// [`StepOutcome::Completed`] on the step that empties the frontier and
    /// [`StepOutcome::Ignored`] whenever the engine is not running.
    pub fn step(&mut self) -> StepOutcome {
        if self.phase != Phase::Running {
            tracing::trace!(phase = ?self.phase, "step ignored");
            return StepOutcome::Ignored;
        }
        let Some(node) = self.frontier.pop() else {
            // Unreachable while Running: the step that empties the frontier
            // also leaves Running.
            self.phase = Phase::Complete;
            return StepOutcome::Ignored;
        };

        let index = self.visit_order.len();
        self.visit_order.push(node);
        self.visited.insert(node, index);
        self.cursor = Some(index);

        let graph = self.catalog.get(self.algorithm);
        let children = graph.children(node);
        match self.frontier.discipline() {
            Discipline::Fifo => {
                for &child in children {
                    Self::schedule(&mut self.frontier, &self.visited, child);
                }
            }
            Discipline::Lifo => {
                for &child in children.iter().rev() {
                    Self::schedule(&mut self.frontier, &self.visited, child);
                }
            }
        }

        tracing::debug!(node, frontier_len = self.frontier.len(), "step");

        if self.frontier.is_empty() {
            self.phase = Phase::Complete;
            tracing::info!(
                algorithm = %self.algorithm,
                visited = self.visit_order.len(),
                "traversal complete"
            );
            StepOutcome::Completed(node)
        } else {
            StepOutcome::Advanced(node)
        }
    }

    /// Pushes `child` unless it was already processed or is already waiting.
    fn schedule(frontier: &mut Frontier, visited: &FxHashMap<NodeId, usize>, child: NodeId) {
        if visited.contains_key(&child) {
            return;
        }
        // `push` refuses ids already in the frontier.
        frontier.push(child);
    }

    /// Starts if needed and steps until the traversal completes.
    ///
    /// Returns the full visit order.
    pub fn run_to_completion(&mut self) -> &[NodeId] {
        self.start();
        while self.step() != StepOutcome::Ignored {}
        &self.visit_order
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Active algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Active topology (the variant for the current algorithm).
    #[must_use]
    pub fn tree(&self) -> &G {
        self.catalog.get(self.algorithm)
    }

    /// Both variants.
    #[must_use]
    pub fn catalog(&self) -> &TreeCatalog<G> {
        &self.catalog
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from `start` until the step that empties the frontier. Once
    /// complete, `step` stays disabled but the last node keeps its
    /// `Processing` highlight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// True once a step has emptied the frontier.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// The node removed by the latest step. Stays set after completion
    /// until the next `reset`.
    #[must_use]
    pub fn currently_processing(&self) -> Option<NodeId> {
        self.cursor
            .and_then(|index| self.visit_order.get(index).copied())
    }

    /// Index into the visit order of the highlighted node.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Nodes in the order they were processed.
    #[must_use]
    pub fn visit_order(&self) -> &[NodeId] {
        &self.visit_order
    }

    /// Number of processed nodes.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// True if the node was already processed.
    #[must_use]
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains_key(&id)
    }

    /// The frontier itself.
    #[must_use]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Frontier ids in insertion order: for a queue the first id is dequeued
    /// next, for a stack the last id is the top.
    #[must_use]
    pub fn frontier_snapshot(&self) -> Vec<NodeId> {
        self.frontier.to_vec()
    }

    /// Classifies a node for rendering. Exactly one state holds per node.
    #[must_use]
    pub fn classify(&self, id: NodeId) -> NodeState {
        if let Some(&index) = self.visited.get(&id) {
            if self.cursor == Some(index) {
                return NodeState::Processing;
            }
            return NodeState::Visited;
        }
        if self.frontier.contains(id) {
            return NodeState::Frontier;
        }
        NodeState::Unvisited
    }

    /// Snapshot of the state summary.
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            algorithm: self.algorithm,
            phase: self.phase,
            frontier_len: self.frontier.len(),
            visited_len: self.visit_order.len(),
            processing: self.currently_processing(),
        }
    }
}

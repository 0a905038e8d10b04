//! Read-only snapshot of engine state prepared for a renderer.

use serde::Serialize;

use crate::algorithm::Algorithm;
use crate::engine::{NodeState, Phase, Status, TraversalEngine};
use crate::tree::{NodeId, Topology};

use super::layout::{Layout, Point};
use super::style::NodeStyle;

/// Which buttons/keys the host should currently accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    /// `start` is meaningful (engine idle).
    pub start_enabled: bool,
    /// `step` is meaningful (engine running).
    pub step_enabled: bool,
    /// `reset` is always available.
    pub reset_enabled: bool,
}

impl Controls {
    /// Derives control availability from the engine.
    #[must_use]
    pub fn for_engine<G: Topology>(engine: &TraversalEngine<G>) -> Self {
        Self {
            start_enabled: engine.phase() == Phase::Idle,
            step_enabled: engine.is_running(),
            reset_enabled: true,
        }
    }
}

/// Shape of the frontier strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontierKind {
    /// Drawn left to right, front first.
    Queue,
    /// Drawn bottom to top, top marked.
    Stack,
}

impl From<Algorithm> for FrontierKind {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Bfs => Self::Queue,
            Algorithm::Dfs => Self::Stack,
        }
    }
}

/// The frontier as a row of boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontierStrip {
    /// Queue or stack.
    pub kind: FrontierKind,
    /// Ids in insertion order: queue front first, stack bottom first.
    pub items: Vec<NodeId>,
    /// The id removed by the next step (queue front / stack top).
    pub head: Option<NodeId>,
}

impl FrontierStrip {
    /// Captures the engine's frontier.
    #[must_use]
    pub fn capture<G: Topology>(engine: &TraversalEngine<G>) -> Self {
        Self {
            kind: FrontierKind::from(engine.algorithm()),
            items: engine.frontier_snapshot(),
            head: engine.frontier().head(),
        }
    }
}

/// Status line shown under the frontier strip.
#[must_use]
pub fn status_caption<G: Topology>(engine: &TraversalEngine<G>) -> String {
    let status = engine.status();
    let algorithm = status.algorithm;
    let size = format!("{} Size: {}", algorithm.frontier_name(), status.frontier_len);
    if status.complete() {
        format!("{size} (complete)")
    } else if status.running() {
        size
    } else {
        format!("Press Enter to start {algorithm}")
    }
}

/// One node ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    /// Node id, also its label.
    pub id: NodeId,
    /// Distance from the root.
    pub depth: usize,
    /// Parent id; `None` for the root.
    pub parent: Option<NodeId>,
    /// Scaled logical position.
    pub position: Point,
    /// Derived classification.
    pub state: NodeState,
    /// Colors for `state`.
    pub style: NodeStyle,
}

/// A parent → child edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Parent.
    pub from: NodeId,
    /// Child.
    pub to: NodeId,
}

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Engine summary.
    pub status: Status,
    /// Human-readable status line.
    pub caption: String,
    /// Control availability.
    pub controls: Controls,
    /// Nodes in pre-order.
    pub nodes: Vec<NodeView>,
    /// Tree edges in pre-order of the child.
    pub edges: Vec<Edge>,
    /// Queue/stack strip.
    pub frontier: FrontierStrip,
    /// Processed ids so far.
    pub visit_order: Vec<NodeId>,
}

impl Frame {
    /// Captures the current engine state with positions from `layout`.
    #[must_use]
    pub fn capture<G: Topology>(engine: &TraversalEngine<G>, layout: &Layout) -> Self {
        let algorithm = engine.algorithm();
        let walk = engine.tree().preorder();

        let nodes = walk
            .iter()
            .map(|entry| {
                let state = engine.classify(entry.id);
                NodeView {
                    id: entry.id,
                    depth: entry.depth,
                    parent: entry.parent,
                    position: layout.position(entry.id).unwrap_or_default(),
                    state,
                    style: NodeStyle::for_state(state, algorithm),
                }
            })
            .collect();
        let edges = walk
            .iter()
            .filter_map(|entry| entry.parent.map(|from| Edge { from, to: entry.id }))
            .collect();

        Self {
            status: engine.status(),
            caption: status_caption(engine),
            controls: Controls::for_engine(engine),
            nodes,
            edges,
            frontier: FrontierStrip::capture(engine),
            visit_order: engine.visit_order().to_vec(),
        }
    }

    /// Active algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.status.algorithm
    }

    /// Looks up a node view by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&NodeView> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Number of tree levels (max depth + 1).
    #[must_use]
    pub fn levels(&self) -> usize {
        self.nodes.iter().map(|node| node.depth + 1).max().unwrap_or(0)
    }
}

//! Logical node coordinates.
//!
//! Layout knows nothing about traversal state. Rows are depths; columns are
//! assigned to leaves left to right and parents sit centred over their first
//! and last child. Renderers multiply by a scale factor to reach pixels or
//! character cells.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::tree::{NodeId, Topology};

/// A logical position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal position, in leaf columns.
    pub x: f32,
    /// Vertical position, in levels.
    pub y: f32,
}

/// Positions for every node of one topology.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    positions: FxHashMap<NodeId, Point>,
    width: f32,
    height: f32,
}

impl Layout {
    /// Lays out every node reachable from the root.
    #[must_use]
    pub fn compute<G: Topology>(graph: &G) -> Self {
        let mut placer = Placer {
            positions: FxHashMap::default(),
            next_column: 0,
            deepest: 0,
        };
        placer.place(graph);

        Self {
            positions: placer.positions,
            width: column(placer.next_column.saturating_sub(1)),
            height: column(placer.deepest),
        }
    }

    /// Returns a copy with every coordinate multiplied by `factor`.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            positions: self
                .positions
                .iter()
                .map(|(&id, p)| {
                    (
                        id,
                        Point {
                            x: p.x * factor,
                            y: p.y * factor,
                        },
                    )
                })
                .collect(),
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Position of a node.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Largest x coordinate.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Largest y coordinate.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of placed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[allow(clippy::cast_precision_loss)] // Reason: column/level counts are tiny.
fn column(n: usize) -> f32 {
    n as f32
}

struct Placer {
    positions: FxHashMap<NodeId, Point>,
    next_column: usize,
    deepest: usize,
}

/// A node whose children are still being placed.
struct Pending {
    id: NodeId,
    depth: usize,
    next_child: usize,
    first: Option<f32>,
    last: Option<f32>,
}

impl Pending {
    fn new(id: NodeId, depth: usize) -> Self {
        Self {
            id,
            depth,
            next_child: 0,
            first: None,
            last: None,
        }
    }
}

impl Placer {
    /// Post-order walk with an explicit stack, so depth is bounded by memory
    /// rather than the call stack.
    fn place<G: Topology>(&mut self, graph: &G) {
        let root = graph.root_id();
        let mut seen = FxHashSet::default();
        seen.insert(root);
        let mut stack = vec![Pending::new(root, 0)];

        while let Some(top) = stack.last_mut() {
            let children = graph.children(top.id);
            let mut descend = None;
            while let Some(&child) = children.get(top.next_child) {
                top.next_child += 1;
                if seen.insert(child) {
                    descend = Some(child);
                    break;
                }
            }
            if let Some(child) = descend {
                let depth = top.depth + 1;
                stack.push(Pending::new(child, depth));
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let x = match (done.first, done.last) {
                (Some(first), Some(last)) => (first + last) / 2.0,
                _ => {
                    let x = column(self.next_column);
                    self.next_column += 1;
                    x
                }
            };
            self.deepest = self.deepest.max(done.depth);
            self.positions.insert(
                done.id,
                Point {
                    x,
                    y: column(done.depth),
                },
            );
            if let Some(parent) = stack.last_mut() {
                parent.first.get_or_insert(x);
                parent.last = Some(x);
            }
        }
    }
}

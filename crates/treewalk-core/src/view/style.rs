//! Node colors and the legend.

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::engine::NodeState;

/// Named colors used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// #FFFFFF
    White,
    /// #000000
    Black,
    /// #ADD8E6
    LightBlue,
    /// #0000FF
    Blue,
    /// #F08080
    LightCoral,
    /// #FF0000
    Red,
    /// #FFFF00
    Yellow,
    /// #FFA500
    Orange,
    /// #90EE90
    LightGreen,
    /// #008000
    Green,
}

impl Color {
    /// RGB components.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::White => (255, 255, 255),
            Self::Black => (0, 0, 0),
            Self::LightBlue => (173, 216, 230),
            Self::Blue => (0, 0, 255),
            Self::LightCoral => (240, 128, 128),
            Self::Red => (255, 0, 0),
            Self::Yellow => (255, 255, 0),
            Self::Orange => (255, 165, 0),
            Self::LightGreen => (144, 238, 144),
            Self::Green => (0, 128, 0),
        }
    }
}

/// Fill and border of a drawn node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStyle {
    /// Interior color.
    pub fill: Color,
    /// Outline color.
    pub border: Color,
    /// Outline width in pixels.
    pub border_width: u8,
}

impl NodeStyle {
    /// Style for a node in `state` while `algorithm` is active.
    ///
    /// Frontier nodes are blue for a queue and coral for a stack.
    #[must_use]
    pub fn for_state(state: NodeState, algorithm: Algorithm) -> Self {
        let (fill, border, border_width) = match (state, algorithm) {
            (NodeState::Unvisited, _) => (Color::White, Color::Black, 1),
            (NodeState::Frontier, Algorithm::Bfs) => (Color::LightBlue, Color::Blue, 2),
            (NodeState::Frontier, Algorithm::Dfs) => (Color::LightCoral, Color::Red, 2),
            (NodeState::Processing, _) => (Color::Yellow, Color::Orange, 3),
            (NodeState::Visited, _) => (Color::LightGreen, Color::Green, 2),
        };
        Self {
            fill,
            border,
            border_width,
        }
    }
}

/// One row of the legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// State described by this row.
    pub state: NodeState,
    /// Caption, e.g. "In Queue".
    pub label: String,
    /// Swatch style.
    pub style: NodeStyle,
}

/// The four legend rows for `algorithm`, in display order.
#[must_use]
pub fn legend(algorithm: Algorithm) -> Vec<LegendEntry> {
    NodeState::ALL
        .into_iter()
        .map(|state| LegendEntry {
            state,
            label: match state {
                NodeState::Unvisited => "Not Visited".to_string(),
                NodeState::Frontier => format!("In {}", algorithm.frontier_name()),
                NodeState::Processing => "Processing".to_string(),
                NodeState::Visited => "Visited".to_string(),
            },
            style: NodeStyle::for_state(state, algorithm),
        })
        .collect()
}

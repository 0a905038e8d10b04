//! Text and JSON rendering of frames, orders and the legend.

use colored::{ColoredString, Colorize};
use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use rustc_hash::FxHashMap;
use serde::Serialize;
use treewalk_core::engine::NodeState;
use treewalk_core::view::{legend, FrontierKind, FrontierStrip, NodeStyle, NodeView};
use treewalk_core::{Algorithm, Frame, NodeId, Topology, TraversalEngine};

/// Terminal columns per layout unit.
const CELL_WIDTH: f32 = 5.0;

/// Visit order as printed by `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub algorithm: Algorithm,
    pub order: Vec<NodeId>,
}

impl OrderReport {
    pub fn new(algorithm: Algorithm, order: Vec<NodeId>) -> Self {
        Self { algorithm, order }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn paint(text: &str, style: NodeStyle) -> ColoredString {
    let (fr, fg, fb) = style.fill.rgb();
    let (br, bg, bb) = style.border.rgb();
    let painted = text.truecolor(br, bg, bb).on_truecolor(fr, fg, fb);
    if style.border_width >= 3 {
        painted.bold()
    } else {
        painted
    }
}

fn node_label(node: &NodeView) -> String {
    format!(" {} ", node.id)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn column(x: f32) -> usize {
    (x * CELL_WIDTH).round().max(0.0) as usize
}

/// Draws the tree level by level with `/ | \` connectors between levels.
pub fn tree_text(frame: &Frame) -> String {
    let mut out = String::new();
    let levels = frame.levels();

    for depth in 0..levels {
        let mut row: Vec<&NodeView> = frame.nodes.iter().filter(|n| n.depth == depth).collect();
        row.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

        if depth > 0 {
            out.push_str(&connector_row(frame, &row));
            out.push('\n');
        }

        let mut line = String::new();
        let mut cursor = 0usize;
        for node in row {
            let label = node_label(node);
            let start = column(node.position.x)
                .saturating_sub(label.len() / 2)
                .max(cursor);
            line.push_str(&" ".repeat(start - cursor));
            line.push_str(&paint(&label, node.style).to_string());
            cursor = start + label.len() + 1;
            line.push(' ');
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn connector_row(frame: &Frame, row: &[&NodeView]) -> String {
    let mut chars: Vec<char> = Vec::new();
    for child in row {
        let Some(parent) = child.parent.and_then(|id| frame.node(id)) else {
            continue;
        };
        let at = column(child.position.x);
        let from = column(parent.position.x);
        let (glyph, col) = match at.cmp(&from) {
            std::cmp::Ordering::Less => ('/', at + 1),
            std::cmp::Ordering::Equal => ('|', at),
            std::cmp::Ordering::Greater => ('\\', at.saturating_sub(1)),
        };
        if chars.len() <= col {
            chars.resize(col + 1, ' ');
        }
        chars[col] = glyph;
    }
    chars.into_iter().collect::<String>().trim_end().to_string()
}

/// `Queue: [2] → [3]` or `Stack (bottom → top): [8] [6] [2] ← TOP`.
pub fn frontier_text(strip: &FrontierStrip, algorithm: Algorithm) -> String {
    let style = NodeStyle::for_state(NodeState::Frontier, algorithm);
    let boxes: Vec<String> = strip
        .items
        .iter()
        .map(|id| paint(&format!("[{id}]"), style).to_string())
        .collect();

    match strip.kind {
        FrontierKind::Queue if boxes.is_empty() => "Queue: (empty)".to_string(),
        FrontierKind::Queue => format!("Queue: {}", boxes.join(" → ")),
        FrontierKind::Stack if boxes.is_empty() => "Stack (bottom → top): (empty)".to_string(),
        FrontierKind::Stack => format!("Stack (bottom → top): {} ← TOP", boxes.join(" ")),
    }
}

/// Full text frame: title, tree, frontier strip and caption.
pub fn frame_text(frame: &Frame) -> String {
    let algorithm = frame.algorithm();
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format!("{algorithm} Traversal").bold()));
    out.push_str(&tree_text(frame));
    out.push('\n');
    out.push_str(&frontier_text(&frame.frontier, algorithm));
    out.push('\n');
    out.push_str(&frame.caption.dimmed().to_string());
    out.push('\n');
    if !frame.visit_order.is_empty() {
        out.push_str(&order_line(&frame.visit_order));
        out.push('\n');
    }
    out
}

/// Color swatches with their meaning for `algorithm`.
pub fn legend_text(algorithm: Algorithm) -> String {
    legend(algorithm)
        .into_iter()
        .map(|entry| format!("  {} {}", paint("   ", entry.style), entry.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Order: 1 → 2 → 3`.
pub fn order_line(order: &[NodeId]) -> String {
    let ids: Vec<String> = order.iter().map(ToString::to_string).collect();
    format!("Order: {}", ids.join(" → "))
}

/// Step / node / depth table for a finished or partial run.
pub fn order_table(engine: &TraversalEngine) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Step", "Node", "Depth", "Parent"]);

    let tree = engine.tree();
    let parents: FxHashMap<NodeId, Option<NodeId>> = tree
        .preorder()
        .into_iter()
        .map(|entry| (entry.id, entry.parent))
        .collect();

    for (step, &id) in engine.visit_order().iter().enumerate() {
        let depth = tree
            .depth(id)
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let parent = parents
            .get(&id)
            .copied()
            .flatten()
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        table.add_row(vec![(step + 1).to_string(), id.to_string(), depth, parent]);
    }

    for index in 0..4 {
        if let Some(col) = table.column_mut(index) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

//! Presentation adapter: pure functions from engine state to what gets drawn.
//!
//! Nothing here mutates the engine. A renderer captures a [`Frame`] after
//! every `reset`/`start`/`step` call and draws it.

mod frame;
pub mod layout;
mod style;


pub use frame::{status_caption, Controls, Edge, Frame, FrontierKind, FrontierStrip, NodeView};
pub use layout::{Layout, Point};
pub use style::{legend, Color, LegendEntry, NodeStyle};

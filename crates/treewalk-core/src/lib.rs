//! # Treewalk Core
//!
//! Step-by-step breadth-first and depth-first traversal over small trees,
//! built for teaching.
//!
//! The crate is the simulation behind the `treewalk` terminal tool: a
//! [`TraversalEngine`] advances a BFS or DFS walk exactly one node per call,
//! and the [`view`] module turns its state into something drawable (node
//! colors, the queue/stack strip, a status caption).
//!
//! ## Features
//!
//! - **Two reference trees**: a 14-node tree for BFS and a 9-node tree for DFS
//! - **Derived state**: node classification is computed from the frontier,
//!   visited set and cursor on every query, never stored
//! - **Safe to misuse**: out-of-order calls are no-ops, not errors
//! - **Custom trees**: validated construction from TOML/JSON [`TreeSpec`]s
//!
//! ## Quick Start
//!
//! ```rust
//! use treewalk_core::{Algorithm, NodeState, StepOutcome, TraversalEngine};
//!
//! let mut engine = TraversalEngine::new(Algorithm::Dfs);
//! engine.start();
//!
//! assert_eq!(engine.step(), StepOutcome::Advanced(1));
//! // Children are pushed right to left so the leftmost is popped next.
//! assert_eq!(engine.frontier_snapshot(), vec![8, 6, 2]);
//!
//! assert_eq!(engine.step(), StepOutcome::Advanced(2));
//! assert_eq!(engine.classify(1), NodeState::Visited);
//! assert_eq!(engine.classify(2), NodeState::Processing);
//!
//! let order = engine.run_to_completion();
//! assert_eq!(order, &[1, 2, 3, 5, 4, 6, 7, 8, 9]);
//! assert!(engine.is_complete());
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::doc_markdown,
        clippy::uninlined_format_args
    )
)]

pub mod algorithm;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod engine;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod tree;
pub mod view;

pub use algorithm::Algorithm;
pub use config::{
    ConfigError, DisplayConfig, LoggingConfig, OutputFormat, TreesConfig, TreewalkConfig,
};
pub use engine::{NodeState, Phase, Status, StepOutcome, TraversalEngine};
pub use error::{Error, ParseEnumError, Result};
pub use tree::{build_tree, Node, NodeId, Topology, Tree, TreeCatalog, TreeSpec};
pub use view::{Frame, Layout};

//! Host-side controller: one engine, its layout, and the key mapping.

use std::fmt;

use treewalk_core::view::Controls;
use treewalk_core::{
    Algorithm, Frame, Layout, NodeId, Phase, StepOutcome, TraversalEngine, TreeCatalog,
};

/// What happened in response to a host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// `start` accepted.
    Started(Algorithm),
    /// A step processed a node and work remains.
    Processed(NodeId),
    /// The step that processed the last node.
    Completed {
        /// Algorithm that finished.
        algorithm: Algorithm,
        /// The last node processed.
        last: NodeId,
    },
    /// Progress discarded and the root re-seeded.
    Reset(Algorithm),
    /// `start` while already running.
    AlreadyRunning,
    /// `step` before `start`.
    NotStarted,
    /// `start` or `step` after completion.
    AlreadyComplete,
}

impl Notice {
    /// True for the notices that report a disabled control.
    pub fn is_rejection(self) -> bool {
        matches!(
            self,
            Self::AlreadyRunning | Self::NotStarted | Self::AlreadyComplete
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started(algorithm) => write!(f, "{algorithm} started"),
            Self::Processed(id) => write!(f, "Processing node {id}"),
            Self::Completed { algorithm, last } => {
                write!(f, "Processing node {last}\n{algorithm} traversal complete!")
            }
            Self::Reset(algorithm) => write!(f, "Reset ({algorithm})"),
            Self::AlreadyRunning => f.write_str("Already running; use 'next' to step"),
            Self::NotStarted => f.write_str("Not started; use 'start' first"),
            Self::AlreadyComplete => f.write_str("Traversal complete; use 'reset' to run again"),
        }
    }
}

/// Engine plus the layout of its active tree.
#[derive(Debug, Clone)]
pub struct Session {
    engine: TraversalEngine,
    layout: Layout,
    scale: f32,
}

impl Session {
    /// Creates a session reset for `algorithm`.
    pub fn new(catalog: TreeCatalog, algorithm: Algorithm, scale: f32) -> Self {
        let engine = TraversalEngine::with_catalog(catalog, algorithm);
        let layout = Layout::compute(engine.tree()).scaled(scale);
        Self {
            engine,
            layout,
            scale,
        }
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    /// Active algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.engine.algorithm()
    }

    /// Current control availability.
    pub fn controls(&self) -> Controls {
        Controls::for_engine(&self.engine)
    }

    /// Snapshot for rendering.
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.engine, &self.layout)
    }

    pub fn start(&mut self) -> Notice {
        if self.engine.start() {
            return Notice::Started(self.engine.algorithm());
        }
        match self.engine.phase() {
            Phase::Complete => Notice::AlreadyComplete,
            Phase::Idle | Phase::Running => Notice::AlreadyRunning,
        }
    }

    pub fn step(&mut self) -> Notice {
        match self.engine.step() {
            StepOutcome::Advanced(id) => Notice::Processed(id),
            StepOutcome::Completed(last) => Notice::Completed {
                algorithm: self.engine.algorithm(),
                last,
            },
            StepOutcome::Ignored => match self.engine.phase() {
                Phase::Idle => Notice::NotStarted,
                Phase::Running | Phase::Complete => Notice::AlreadyComplete,
            },
        }
    }

    /// Bare Enter: start while start is available, otherwise step.
    pub fn enter(&mut self) -> Notice {
        let controls = self.controls();
        if controls.start_enabled {
            self.start()
        } else if controls.step_enabled {
            self.step()
        } else {
            Notice::AlreadyComplete
        }
    }

    pub fn reset(&mut self) -> Notice {
        self.engine.restart();
        Notice::Reset(self.engine.algorithm())
    }

    /// Switches algorithm. Always resets, even to the current algorithm.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Notice {
        self.engine.reset(algorithm);
        self.layout = Layout::compute(self.engine.tree()).scaled(self.scale);
        Notice::Reset(algorithm)
    }

    /// Resets, then runs the whole traversal.
    pub fn run_to_completion(&mut self) -> Vec<NodeId> {
        self.engine.restart();
        self.engine.run_to_completion().to_vec()
    }

    /// Resets, starts and performs up to `steps` steps.
    pub fn advance(&mut self, steps: usize) -> Option<Notice> {
        self.engine.restart();
        self.engine.start();
        let mut last = None;
        for _ in 0..steps {
            let notice = self.step();
            if notice.is_rejection() {
                break;
            }
            last = Some(notice);
        }
        last
    }
}

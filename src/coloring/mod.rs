//! Incremental greedy graph coloring over a small fixed palette.

mod config;
mod engine;
mod error;
mod graph;
mod ordering;
mod palette;
mod session;

pub use config::{EngineConfig, NODE_RADIUS};
pub use engine::{ColorAssignment, ColoringEngine, LinkReport, least_used_color};
pub use error::{ConfigError, GraphError, Result};
pub use graph::{GraphStore, NodeId, NodeView, Position};
pub use ordering::{
	EndpointOrdering, Heuristic, MostConstrainedByAvailability, MostConstrainedByDegree,
};
pub use palette::{ColorId, ColorSlot, MAX_PALETTE_SIZE, Palette, Rgb, UNCOLORED_RGB};
pub use session::{ClickOutcome, RunSummary, Session};

//! Click handling for an interactive session.
//!
//! A click on empty space adds a node. Clicks on two different nodes connect
//! them; clicking the selected node again drops the selection.

use std::fmt;

use log::{debug, info};

use super::config::EngineConfig;
use super::engine::{ColoringEngine, LinkReport};
use super::error::{ConfigError, Result};
use super::graph::{GraphStore, NodeId, Position};
use super::ordering::Heuristic;

/// What a click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
	/// Empty space: a new node was created.
	NodeAdded(NodeId),
	/// First click of a pair.
	Selected(NodeId),
	/// The selected node was clicked again.
	SelectionCleared(NodeId),
	/// Second click of a pair: the edge was inserted.
	Linked(LinkReport),
}

/// End-of-run totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
	/// Nodes created.
	pub nodes: usize,
	/// Edges inserted.
	pub edges: usize,
	/// Endpoints that found no available color.
	pub failures: usize,
	/// Adjacent pairs left sharing a color.
	pub conflicts: usize,
	/// Heuristic used for the run.
	pub heuristic: Heuristic,
}

impl fmt::Display for RunSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} nodes, {} edges, {} coloring failures, {} conflicts ({})",
			self.nodes, self.edges, self.failures, self.conflicts, self.heuristic
		)
	}
}

/// Engine plus the one-slot pending selection.
pub struct Session {
	engine: ColoringEngine,
	selected: Option<NodeId>,
	config: EngineConfig,
}

impl Session {
	/// New session with an empty graph.
	pub fn new(config: EngineConfig) -> std::result::Result<Self, ConfigError> {
		let engine = ColoringEngine::with_heuristic(config.palette()?, config.heuristic);
		info!(
			"coloring session: {} colors, heuristic {}",
			config.palette_size, config.heuristic
		);
		Ok(Self {
			engine,
			selected: None,
			config,
		})
	}

	/// Handles a click at `(x, y)` in graph coordinates.
	pub fn click(&mut self, x: f64, y: f64) -> Result<ClickOutcome> {
		let position = Position::new(x, y);
		let Some(hit) = self.engine.graph().hit_test(position, self.config.hit_radius) else {
			return Ok(ClickOutcome::NodeAdded(self.engine.add_node(position)));
		};
		match self.selected.take() {
			None => {
				self.selected = Some(hit);
				debug!("selected node {}", hit);
				Ok(ClickOutcome::Selected(hit))
			}
			Some(pending) if pending == hit => Ok(ClickOutcome::SelectionCleared(hit)),
			Some(pending) => self.engine.link_nodes(pending, hit).map(ClickOutcome::Linked),
		}
	}

	/// Node waiting for a second click, if any.
	pub fn selected(&self) -> Option<NodeId> {
		self.selected
	}

	/// Read-only graph for rendering.
	pub fn graph(&self) -> &GraphStore {
		self.engine.graph()
	}

	/// Configuration the session was started with.
	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// Running coloring-failure total.
	pub fn failure_count(&self) -> usize {
		self.engine.failure_count()
	}

	/// Totals for the end-of-run report.
	pub fn summary(&self) -> RunSummary {
		let graph = self.engine.graph();
		RunSummary {
			nodes: graph.node_count(),
			edges: graph.edge_count(),
			failures: self.engine.failure_count(),
			conflicts: graph.conflicts(),
			heuristic: self.engine.heuristic(),
		}
	}
}

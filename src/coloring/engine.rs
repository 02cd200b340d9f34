//! Online greedy coloring, one edge at a time.
//!
//! Each new edge colors its endpoints before the edge is recorded, so neither
//! endpoint sees the other as a neighbor during its primary assignment. Colors
//! are never revoked; a later edge may leave two same-colored nodes adjacent.

use log::{debug, warn};

use super::error::{GraphError, Result};
use super::graph::{GraphStore, NodeId, Position};
use super::ordering::{EndpointOrdering, Heuristic};
use super::palette::{ColorId, Palette};

/// What happened to one endpoint during an edge insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorAssignment {
	/// Had a color before this edge.
	AlreadyColored(ColorId),
	/// Colored by the least-used rule.
	LeastUsed(ColorId),
	/// No available color at primary assignment; later colored by the
	/// first-candidate pass once the edge was recorded.
	CatchUp(ColorId),
	/// No available color; the node stays uncolored.
	Exhausted,
}

impl ColorAssignment {
	/// `true` when the primary assignment found no color. Each such endpoint
	/// counts as one coloring failure.
	pub fn is_failure(self) -> bool {
		matches!(self, ColorAssignment::Exhausted | ColorAssignment::CatchUp(_))
	}
}

/// Outcome of [`ColoringEngine::link_nodes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkReport {
	/// Endpoint colored first.
	pub first: NodeId,
	/// Endpoint colored second.
	pub second: NodeId,
	/// Result for `first`.
	pub first_assignment: ColorAssignment,
	/// Result for `second`.
	pub second_assignment: ColorAssignment,
}

impl LinkReport {
	/// Coloring failures raised by this edge: 0, 1 or 2.
	pub fn failures(&self) -> usize {
		[self.first_assignment, self.second_assignment]
			.into_iter()
			.filter(|a| a.is_failure())
			.count()
	}
}

/// Among `candidates`, the color held by the fewest nodes graph-wide. Ties go
/// to the earliest candidate. `None` when there are no candidates.
pub fn least_used_color(usage: &[usize], candidates: &[ColorId]) -> Option<ColorId> {
	let mut best: Option<(ColorId, usize)> = None;
	for &c in candidates {
		let count = usage.get(c.index()).copied().unwrap_or(0);
		match best {
			Some((_, min)) if count >= min => {}
			_ => best = Some((c, count)),
		}
	}
	best.map(|(c, _)| c)
}

/// Graph store plus the ordering strategy chosen at startup.
pub struct ColoringEngine {
	graph: GraphStore,
	ordering: Box<dyn EndpointOrdering>,
	failures: usize,
}

impl ColoringEngine {
	/// Engine over an empty graph using the given ordering strategy.
	pub fn new(palette: Palette, ordering: Box<dyn EndpointOrdering>) -> Self {
		Self {
			graph: GraphStore::new(palette),
			ordering,
			failures: 0,
		}
	}

	/// Engine continuing from an existing graph, e.g. one built directly
	/// through [`GraphStore`]. The failure count starts at zero.
	pub fn from_graph(graph: GraphStore, ordering: Box<dyn EndpointOrdering>) -> Self {
		Self {
			graph,
			ordering,
			failures: 0,
		}
	}

	/// Shorthand for [`Heuristic::strategy`].
	pub fn with_heuristic(palette: Palette, heuristic: Heuristic) -> Self {
		Self::new(palette, heuristic.strategy())
	}

	/// Read access to the graph.
	pub fn graph(&self) -> &GraphStore {
		&self.graph
	}

	/// Active heuristic.
	pub fn heuristic(&self) -> Heuristic {
		self.ordering.heuristic()
	}

	/// Coloring failures since the engine was created.
	pub fn failure_count(&self) -> usize {
		self.failures
	}

	/// Adds an uncolored node.
	pub fn add_node(&mut self, position: Position) -> NodeId {
		self.graph.add_node(position)
	}

	/// Colors the endpoints of `a - b` and then records the edge.
	///
	/// Invalid ids and self-loops are rejected without touching the graph.
	/// Running out of colors is not an error: it shows up in the report and
	/// in [`failure_count`](Self::failure_count).
	pub fn link_nodes(&mut self, a: NodeId, b: NodeId) -> Result<LinkReport> {
		self.graph.check(a)?;
		self.graph.check(b)?;
		if a == b {
			return Err(GraphError::SelfLoop(a));
		}

		let (first, second) = self.ordering.order(&self.graph, a, b)?;
		let mut first_assignment = self.color_endpoint(first)?;
		let second_assignment = self.color_endpoint(second)?;

		self.graph.link(first, second)?;

		if first_assignment == ColorAssignment::Exhausted {
			if let Some(c) = self.catch_up(first)? {
				first_assignment = ColorAssignment::CatchUp(c);
			}
		}

		let report = LinkReport {
			first,
			second,
			first_assignment,
			second_assignment,
		};
		self.failures += report.failures();
		debug!(
			"linked {} - {} ({}): {:?} / {:?}",
			first,
			second,
			self.heuristic(),
			first_assignment,
			second_assignment
		);
		Ok(report)
	}

	/// Second chance for an uncolored node against current adjacency. Takes
	/// the first available color in palette order, not the least-used one.
	fn catch_up(&mut self, id: NodeId) -> Result<Option<ColorId>> {
		if !self.graph.color(id)?.is_uncolored() {
			return Ok(None);
		}
		let candidate = self.graph.available_colors(id)?.first().copied();
		if let Some(c) = candidate {
			self.graph.assign(id, c)?;
		}
		Ok(candidate)
	}

	fn color_endpoint(&mut self, id: NodeId) -> Result<ColorAssignment> {
		if let Some(c) = self.graph.color(id)?.color() {
			return Ok(ColorAssignment::AlreadyColored(c));
		}
		let candidates = self.graph.available_colors(id)?;
		match least_used_color(&self.graph.color_usage(), &candidates) {
			Some(c) => {
				self.graph.assign(id, c)?;
				Ok(ColorAssignment::LeastUsed(c))
			}
			None => {
				warn!("no colors available for node {}", id);
				Ok(ColorAssignment::Exhausted)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::coloring::palette::ColorSlot;

	fn engine(n: usize, k: usize, heuristic: Heuristic) -> ColoringEngine {
		let mut engine = ColoringEngine::with_heuristic(Palette::new(k).unwrap(), heuristic);
		for i in 0..n {
			engine.add_node(Position::new(i as f64 * 50.0, 0.0));
		}
		engine
	}

	fn slot(engine: &ColoringEngine, id: NodeId) -> ColorSlot {
		engine.graph().color(id).unwrap()
	}

	#[test]
	fn test_least_used_picks_first_minimum() {
		let usage = [2, 1, 1];
		let all = [ColorId(0), ColorId(1), ColorId(2)];
		assert_eq!(least_used_color(&usage, &all), Some(ColorId(1)));
		assert_eq!(least_used_color(&usage, &[ColorId(0)]), Some(ColorId(0)));
		assert_eq!(least_used_color(&usage, &[]), None);
	}

	#[test]
	fn test_least_used_from_graph_state() {
		// usage {0:2, 1:1, 2:1}, then a fresh node picks color 1
		let mut engine = engine(6, 3, Heuristic::Availability);
		engine.graph.assign(0, ColorId(0)).unwrap();
		engine.graph.assign(1, ColorId(0)).unwrap();
		engine.graph.assign(2, ColorId(1)).unwrap();
		engine.graph.assign(3, ColorId(2)).unwrap();
		assert_eq!(engine.graph().color_usage(), vec![2, 1, 1]);
		assert_eq!(
			engine.color_endpoint(4).unwrap(),
			ColorAssignment::LeastUsed(ColorId(1))
		);
	}

	#[test]
	fn test_first_edge_colors_both_endpoints() {
		let mut engine = engine(2, 3, Heuristic::Availability);
		let report = engine.link_nodes(0, 1).unwrap();
		// tie: second named endpoint goes first
		assert_eq!((report.first, report.second), (1, 0));
		assert_eq!(engine.graph().edges(), &[(1, 0)]);
		assert_eq!(report.first_assignment, ColorAssignment::LeastUsed(ColorId(0)));
		assert_eq!(report.second_assignment, ColorAssignment::LeastUsed(ColorId(1)));
		assert_eq!(engine.failure_count(), 0);
	}

	#[test]
	fn test_path_has_no_conflicts() {
		let mut engine = engine(3, 3, Heuristic::Availability);
		engine.link_nodes(0, 1).unwrap();
		engine.link_nodes(1, 2).unwrap();
		assert_eq!(engine.graph().conflicts(), 0);
		for id in 0..3 {
			assert!(!slot(&engine, id).is_uncolored());
		}
		assert_ne!(slot(&engine, 0), slot(&engine, 1));
		assert_ne!(slot(&engine, 1), slot(&engine, 2));
		assert_eq!(engine.failure_count(), 0);
	}

	#[test]
	fn test_single_color_palette_conflicts_but_never_fails() {
		// nodes reaching link_nodes are either colored or isolated, so the
		// pre-edge rule always finds a color
		let mut engine = engine(3, 1, Heuristic::Availability);
		engine.link_nodes(0, 1).unwrap();
		engine.link_nodes(1, 2).unwrap();
		engine.link_nodes(2, 0).unwrap();
		assert_eq!(engine.failure_count(), 0);
		assert_eq!(engine.graph().conflicts(), 3);
	}

	#[test]
	fn test_exhausted_second_endpoint_counts_failure_and_records_edge() {
		let mut graph = GraphStore::new(Palette::new(1).unwrap());
		for _ in 0..5 {
			graph.add_node(Position::default());
		}
		graph.link(0, 3).unwrap();
		graph.link(0, 4).unwrap();
		graph.link(1, 2).unwrap();
		graph.assign(2, ColorId(0)).unwrap();
		let mut engine = ColoringEngine::from_graph(graph, Heuristic::Degree.strategy());

		let report = engine.link_nodes(0, 1).unwrap();
		assert_eq!((report.first, report.second), (0, 1));
		assert_eq!(report.first_assignment, ColorAssignment::LeastUsed(ColorId(0)));
		assert_eq!(report.second_assignment, ColorAssignment::Exhausted);
		assert_eq!(engine.failure_count(), 1);
		assert!(slot(&engine, 1).is_uncolored());
		assert_eq!(engine.graph().neighbors(0).unwrap(), &[3, 4, 1]);
		assert_eq!(engine.graph().neighbors(1).unwrap(), &[2, 0]);
	}

	#[test]
	fn test_exhausted_first_endpoint_stays_uncolored() {
		let mut graph = GraphStore::new(Palette::new(1).unwrap());
		for _ in 0..3 {
			graph.add_node(Position::default());
		}
		graph.link(0, 2).unwrap();
		graph.assign(2, ColorId(0)).unwrap();
		let mut engine =
			ColoringEngine::from_graph(graph, Heuristic::Availability.strategy());

		let report = engine.link_nodes(1, 0).unwrap();
		assert_eq!(report.first, 0);
		assert_eq!(report.first_assignment, ColorAssignment::Exhausted);
		assert_eq!(report.failures(), 1);
		assert!(slot(&engine, 0).is_uncolored());
		assert_eq!(slot(&engine, 1), ColorSlot::Colored(ColorId(0)));
	}

	#[test]
	fn test_catch_up_takes_first_candidate_not_least_used() {
		let mut engine = engine(4, 3, Heuristic::Availability);
		engine.graph.link(0, 1).unwrap();
		engine.graph.assign(1, ColorId(0)).unwrap();
		engine.graph.assign(2, ColorId(1)).unwrap();
		engine.graph.assign(3, ColorId(1)).unwrap();

		let candidates = engine.graph().available_colors(0).unwrap();
		assert_eq!(candidates, vec![ColorId(1), ColorId(2)]);
		let usage = engine.graph().color_usage();
		assert_eq!(least_used_color(&usage, &candidates), Some(ColorId(2)));

		assert_eq!(engine.catch_up(0).unwrap(), Some(ColorId(1)));
		assert_eq!(slot(&engine, 0), ColorSlot::Colored(ColorId(1)));
		assert_eq!(engine.catch_up(0).unwrap(), None);
	}

	#[test]
	fn test_catch_up_counts_as_failure() {
		assert!(ColorAssignment::CatchUp(ColorId(0)).is_failure());
		assert!(ColorAssignment::Exhausted.is_failure());
		assert!(!ColorAssignment::LeastUsed(ColorId(0)).is_failure());
		assert!(!ColorAssignment::AlreadyColored(ColorId(0)).is_failure());
	}

	#[test]
	fn test_colors_are_never_revoked() {
		let mut engine = engine(3, 3, Heuristic::Degree);
		engine.link_nodes(0, 1).unwrap();
		let before = (slot(&engine, 0), slot(&engine, 1));
		engine.link_nodes(0, 2).unwrap();
		engine.link_nodes(1, 2).unwrap();
		assert_eq!((slot(&engine, 0), slot(&engine, 1)), before);
	}

	#[test]
	fn test_link_rejects_bad_ids_without_mutation() {
		let mut engine = engine(2, 3, Heuristic::Availability);
		assert_eq!(
			engine.link_nodes(0, 5),
			Err(GraphError::InvalidNode {
				id: 5,
				node_count: 2
			})
		);
		assert_eq!(engine.link_nodes(1, 1), Err(GraphError::SelfLoop(1)));
		assert_eq!(engine.graph().edge_count(), 0);
		assert!(slot(&engine, 0).is_uncolored());
		assert!(slot(&engine, 1).is_uncolored());
	}

	#[test]
	fn test_parallel_edges_accumulate() {
		let mut engine = engine(2, 3, Heuristic::Degree);
		engine.link_nodes(0, 1).unwrap();
		engine.link_nodes(0, 1).unwrap();
		assert_eq!(engine.graph().neighbors(0).unwrap(), &[1, 1]);
		assert_eq!(engine.graph().neighbors(1).unwrap(), &[0, 0]);
	}

	#[test]
	fn test_degree_heuristic_colors_hub_first() {
		let mut engine = engine(4, 3, Heuristic::Degree);
		engine.link_nodes(0, 1).unwrap();
		engine.link_nodes(0, 2).unwrap();
		let report = engine.link_nodes(3, 0).unwrap();
		assert_eq!(report.first, 0);
		assert!(matches!(report.first_assignment, ColorAssignment::AlreadyColored(_)));
	}
}

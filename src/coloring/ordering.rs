//! Endpoint ordering heuristics: which end of a new edge is colored first.

use std::fmt;
use std::str::FromStr;

use super::error::{ConfigError, Result};
use super::graph::{GraphStore, NodeId};

/// Decides the coloring order of a new edge's endpoints. Called on the graph
/// as it stood before the edge was recorded.
pub trait EndpointOrdering {
	/// Returns `(first, second)`. Both ids are already validated.
	fn order(&self, graph: &GraphStore, a: NodeId, b: NodeId) -> Result<(NodeId, NodeId)>;

	/// Which heuristic this is.
	fn heuristic(&self) -> Heuristic;
}

/// Colors first the endpoint with fewer available colors.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostConstrainedByAvailability;

impl EndpointOrdering for MostConstrainedByAvailability {
	fn order(&self, graph: &GraphStore, a: NodeId, b: NodeId) -> Result<(NodeId, NodeId)> {
		let (avail_a, avail_b) = (
			graph.available_colors(a)?.len(),
			graph.available_colors(b)?.len(),
		);
		// ties go to the second endpoint
		Ok(if avail_a < avail_b { (a, b) } else { (b, a) })
	}

	fn heuristic(&self) -> Heuristic {
		Heuristic::Availability
	}
}

/// Colors first the endpoint with more neighbors.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostConstrainedByDegree;

impl EndpointOrdering for MostConstrainedByDegree {
	fn order(&self, graph: &GraphStore, a: NodeId, b: NodeId) -> Result<(NodeId, NodeId)> {
		let (deg_a, deg_b) = (graph.degree(a)?, graph.degree(b)?);
		Ok(if deg_a > deg_b { (a, b) } else { (b, a) })
	}

	fn heuristic(&self) -> Heuristic {
		Heuristic::Degree
	}
}

/// Startup choice of ordering heuristic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
	/// [`MostConstrainedByAvailability`].
	#[default]
	Availability,
	/// [`MostConstrainedByDegree`].
	Degree,
}

impl Heuristic {
	/// The strategy object for this heuristic.
	pub fn strategy(self) -> Box<dyn EndpointOrdering> {
		match self {
			Heuristic::Availability => Box::new(MostConstrainedByAvailability),
			Heuristic::Degree => Box::new(MostConstrainedByDegree),
		}
	}
}

impl FromStr for Heuristic {
	type Err = ConfigError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"1" | "availability" => Ok(Heuristic::Availability),
			"2" | "degree" => Ok(Heuristic::Degree),
			other => Err(ConfigError::UnknownHeuristic(other.to_string())),
		}
	}
}

impl fmt::Display for Heuristic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Heuristic::Availability => "most-constrained-by-availability",
			Heuristic::Degree => "most-constrained-by-degree",
		})
	}
}

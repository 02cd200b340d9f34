//! Error types for the coloring engine.

use thiserror::Error;

use super::graph::NodeId;
use super::palette::ColorId;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Rejections raised before any graph state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// A node identity outside `0..node_count`.
	#[error("invalid node {id} (graph has {node_count} nodes)")]
	InvalidNode {
		/// The offending identity.
		id: NodeId,
		/// Node count at the time of the call.
		node_count: usize,
	},

	/// A color index outside the palette.
	#[error("invalid color {color} (palette has {palette_size} colors)")]
	InvalidColor {
		/// The offending color.
		color: ColorId,
		/// Palette size K.
		palette_size: usize,
	},

	/// Both endpoints of an edge are the same node.
	#[error("self-loop on node {0} is not allowed")]
	SelfLoop(NodeId),
}

/// Startup configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	/// A palette needs at least one color.
	#[error("palette must contain at least one color")]
	EmptyPalette,

	/// Palette size that is not a positive integer.
	#[error("invalid palette size: {0:?}")]
	InvalidPaletteSize(String),

	/// Heuristic name not recognised.
	#[error("unknown heuristic: {0:?} (expected `availability` or `degree`)")]
	UnknownHeuristic(String),
}

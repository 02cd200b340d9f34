//! Graph store: nodes, positions, color slots and adjacency.
//!
//! Nodes are never removed, so identities are dense indices in creation
//! order. Adjacency lives in a single table indexed by node identity; a
//! node's neighbor list is a view into it, kept in edge-creation order with
//! parallel edges preserved.

use log::debug;

use super::error::{GraphError, Result};
use super::palette::{ColorId, ColorSlot, Palette};

/// Stable node identity, assigned `0, 1, 2, ...` at creation.
pub type NodeId = usize;

/// Point on the drawing surface. Only used for hit-testing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Position {
	/// Point at `(x, y)`.
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	fn distance_to(self, other: Position) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Debug)]
struct Node {
	position: Position,
	color: ColorSlot,
}

/// Read-only view of a node for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeView {
	/// Node identity.
	pub id: NodeId,
	/// Where the node was placed.
	pub position: Position,
	/// Current color state.
	pub color: ColorSlot,
}

/// Nodes plus adjacency. Holds no coloring policy.
#[derive(Clone, Debug)]
pub struct GraphStore {
	palette: Palette,
	nodes: Vec<Node>,
	adjacency: Vec<Vec<NodeId>>,
	edges: Vec<(NodeId, NodeId)>,
}

impl GraphStore {
	/// Empty graph colored from `palette`.
	pub fn new(palette: Palette) -> Self {
		Self {
			palette,
			nodes: Vec::new(),
			adjacency: Vec::new(),
			edges: Vec::new(),
		}
	}

	/// The palette colors are drawn from.
	pub fn palette(&self) -> Palette {
		self.palette
	}

	/// Number of nodes created so far.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of recorded edges, parallel edges included.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Appends an uncolored, isolated node and returns its identity.
	pub fn add_node(&mut self, position: Position) -> NodeId {
		let id = self.nodes.len();
		self.nodes.push(Node {
			position,
			color: ColorSlot::Uncolored,
		});
		self.adjacency.push(Vec::new());
		debug!("added node {} at ({:.1}, {:.1})", id, position.x, position.y);
		id
	}

	/// First node, in creation order, whose position lies within `radius`
	/// of `position`.
	pub fn hit_test(&self, position: Position, radius: f64) -> Option<NodeId> {
		self.nodes
			.iter()
			.position(|node| node.position.distance_to(position) <= radius)
	}

	/// Fails with [`GraphError::InvalidNode`] unless `id` exists.
	pub fn check(&self, id: NodeId) -> Result<()> {
		if id < self.nodes.len() {
			Ok(())
		} else {
			Err(GraphError::InvalidNode {
				id,
				node_count: self.nodes.len(),
			})
		}
	}

	/// Current color slot of `id`.
	pub fn color(&self, id: NodeId) -> Result<ColorSlot> {
		self.check(id)?;
		Ok(self.nodes[id].color)
	}

	/// Neighbors of `id` in edge-creation order.
	pub fn neighbors(&self, id: NodeId) -> Result<&[NodeId]> {
		self.check(id)?;
		Ok(&self.adjacency[id])
	}

	/// Length of the neighbor list of `id`, counting parallel edges.
	pub fn degree(&self, id: NodeId) -> Result<usize> {
		Ok(self.neighbors(id)?.len())
	}

	/// Palette colors held by no current neighbor of `id`, in palette order.
	/// Recomputed on every call.
	pub fn available_colors(&self, id: NodeId) -> Result<Vec<ColorId>> {
		let mut used = vec![false; self.palette.len()];
		for &neighbor in self.neighbors(id)? {
			if let Some(c) = self.nodes[neighbor].color.color() {
				used[c.index()] = true;
			}
		}
		Ok(self.palette.colors().filter(|c| !used[c.index()]).collect())
	}

	/// How many nodes hold each palette color, indexed by color.
	pub fn color_usage(&self) -> Vec<usize> {
		let mut usage = vec![0; self.palette.len()];
		for c in self.nodes.iter().filter_map(|n| n.color.color()) {
			usage[c.index()] += 1;
		}
		usage
	}

	/// Assigns `color` to an uncolored node. Colored nodes keep their color.
	/// Colors outside the palette are rejected.
	pub fn assign(&mut self, id: NodeId, color: ColorId) -> Result<()> {
		self.check(id)?;
		if color.index() >= self.palette.len() {
			return Err(GraphError::InvalidColor {
				color,
				palette_size: self.palette.len(),
			});
		}
		let node = &mut self.nodes[id];
		if node.color.is_uncolored() {
			node.color = ColorSlot::Colored(color);
		}
		Ok(())
	}

	/// Records the edge `a - b` in both neighbor lists. Parallel edges are
	/// kept.
	pub fn link(&mut self, a: NodeId, b: NodeId) -> Result<()> {
		self.check(a)?;
		self.check(b)?;
		if a == b {
			return Err(GraphError::SelfLoop(a));
		}
		self.adjacency[a].push(b);
		self.adjacency[b].push(a);
		self.edges.push((a, b));
		Ok(())
	}

	/// Every node in identity order.
	pub fn nodes(&self) -> impl Iterator<Item = NodeView> + '_ {
		self.nodes.iter().enumerate().map(|(id, node)| NodeView {
			id,
			position: node.position,
			color: node.color,
		})
	}

	/// Edges in insertion order. Each pair is stored in coloring order, which
	/// may differ from the order the endpoints were requested in.
	pub fn edges(&self) -> &[(NodeId, NodeId)] {
		&self.edges
	}

	/// Pairs of adjacent nodes sharing a color.
	pub fn conflicts(&self) -> usize {
		self.edges
			.iter()
			.filter(|&&(a, b)| {
				let (ca, cb) = (self.nodes[a].color, self.nodes[b].color);
				!ca.is_uncolored() && ca == cb
			})
			.count()
	}
}

use crate::coloring::{ClickOutcome, ConfigError, EngineConfig, NodeId, Position, Session};

pub struct CanvasState {
	pub session: Session,
	pub hover: Option<NodeId>,
	pub width: f64,
	pub height: f64,
}

impl CanvasState {
	pub fn new(config: EngineConfig, width: f64, height: f64) -> Result<Self, ConfigError> {
		Ok(Self {
			session: Session::new(config)?,
			hover: None,
			width,
			height,
		})
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<NodeId> {
		let radius = self.session.config().hit_radius;
		self.session.graph().hit_test(Position::new(x, y), radius)
	}

	pub fn click(&mut self, x: f64, y: f64) -> Option<ClickOutcome> {
		match self.session.click(x, y) {
			Ok(outcome) => {
				if let ClickOutcome::NodeAdded(id) = outcome {
					self.hover = Some(id);
				}
				Some(outcome)
			}
			Err(err) => {
				log::error!("click rejected: {}", err);
				None
			}
		}
	}

	pub fn set_hover(&mut self, node: Option<NodeId>) -> bool {
		if self.hover == node {
			return false;
		}
		self.hover = node;
		true
	}

	pub fn is_selected(&self, id: NodeId) -> bool {
		self.session.selected() == Some(id)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

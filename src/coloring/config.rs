//! Startup configuration, fixed for the lifetime of a session.

use super::error::ConfigError;
use super::ordering::Heuristic;
use super::palette::Palette;

/// Radius used for both drawing and hit-testing by default.
pub const NODE_RADIUS: f64 = 20.0;

/// Settings chosen once before the first click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
	/// Palette size K.
	pub palette_size: usize,
	/// Endpoint ordering heuristic.
	pub heuristic: Heuristic,
	/// Clicks within this distance of a node hit it.
	pub hit_radius: f64,
	/// Drawn circle radius.
	pub node_radius: f64,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			palette_size: 3,
			heuristic: Heuristic::default(),
			hit_radius: NODE_RADIUS,
			node_radius: NODE_RADIUS,
		}
	}
}

impl EngineConfig {
	/// Builds a config from optional `heuristic` and `colors` query values.
	/// Missing or blank values keep their defaults.
	pub fn from_query(heuristic: Option<&str>, colors: Option<&str>) -> Result<Self, ConfigError> {
		let mut config = Self::default();
		if let Some(h) = heuristic.filter(|h| !h.trim().is_empty()) {
			config.heuristic = h.parse()?;
		}
		if let Some(k) = colors.filter(|k| !k.trim().is_empty()) {
			config.palette_size = k
				.trim()
				.parse()
				.map_err(|_| ConfigError::InvalidPaletteSize(k.to_string()))?;
		}
		config.palette()?;
		Ok(config)
	}

	/// The palette described by `palette_size`.
	pub fn palette(&self) -> Result<Palette, ConfigError> {
		Palette::new(self.palette_size)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = EngineConfig::from_query(None, None).unwrap();
		assert_eq!(config, EngineConfig::default());
		assert_eq!(config.palette_size, 3);
		assert_eq!(config.heuristic, Heuristic::Availability);
		assert_eq!(config.hit_radius, 20.0);
	}

	#[test]
	fn test_query_values() {
		let config = EngineConfig::from_query(Some("degree"), Some("5")).unwrap();
		assert_eq!(config.heuristic, Heuristic::Degree);
		assert_eq!(config.palette().unwrap().len(), 5);
	}

	#[test]
	fn test_blank_values_use_defaults() {
		let config = EngineConfig::from_query(Some(" "), Some("")).unwrap();
		assert_eq!(config, EngineConfig::default());
	}

	#[test]
	fn test_bad_values_rejected() {
		assert_eq!(
			EngineConfig::from_query(None, Some("three")),
			Err(ConfigError::InvalidPaletteSize("three".into()))
		);
		assert_eq!(
			EngineConfig::from_query(None, Some("0")),
			Err(ConfigError::EmptyPalette)
		);
		assert_eq!(
			EngineConfig::from_query(None, Some("18446744073709551615")),
			Err(ConfigError::InvalidPaletteSize("18446744073709551615".into()))
		);
		assert_eq!(
			EngineConfig::from_query(None, Some("9")),
			Err(ConfigError::InvalidPaletteSize("9".into()))
		);
		assert!(EngineConfig::from_query(None, Some("8")).is_ok());
		assert!(matches!(
			EngineConfig::from_query(Some("dsatur"), None),
			Err(ConfigError::UnknownHeuristic(_))
		));
	}
}

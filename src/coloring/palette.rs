//! Fixed palette of color identifiers and the per-node color slot.

use std::fmt;

use super::error::ConfigError;

/// Index of a palette color, `0..K`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorId(pub usize);

impl ColorId {
	/// Position of this color in palette order.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for ColorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "color {}", self.0)
	}
}

/// Color state of a node. Only `Uncolored -> Colored` ever happens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSlot {
	/// No color assigned yet (drawn gray).
	#[default]
	Uncolored,
	/// Holds a palette color.
	Colored(ColorId),
}

impl ColorSlot {
	/// The held color, if any.
	pub fn color(self) -> Option<ColorId> {
		match self {
			ColorSlot::Uncolored => None,
			ColorSlot::Colored(c) => Some(c),
		}
	}

	/// `true` while the slot is still uncolored.
	pub fn is_uncolored(self) -> bool {
		matches!(self, ColorSlot::Uncolored)
	}
}

/// An RGB triple in `0..=255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	/// CSS `rgb(...)` string for canvas fill styles.
	pub fn css(self) -> String {
		format!("rgb({}, {}, {})", self.0, self.1, self.2)
	}
}

/// Fill for uncolored nodes. Never one of the palette swatches.
pub const UNCOLORED_RGB: Rgb = Rgb(128, 128, 128);

const SWATCHES: &[Rgb] = &[
	Rgb(255, 0, 0),
	Rgb(0, 255, 0),
	Rgb(0, 0, 255),
	Rgb(255, 200, 0),
	Rgb(200, 0, 255),
	Rgb(0, 220, 220),
	Rgb(255, 120, 40),
	Rgb(140, 90, 40),
];

/// Largest supported palette: one distinct swatch per color.
pub const MAX_PALETTE_SIZE: usize = SWATCHES.len();

/// K distinct colors in a fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
	size: usize,
}

impl Palette {
	/// Palette of `size` colors, `1..=MAX_PALETTE_SIZE`.
	pub fn new(size: usize) -> Result<Self, ConfigError> {
		if size == 0 {
			return Err(ConfigError::EmptyPalette);
		}
		if size > MAX_PALETTE_SIZE {
			return Err(ConfigError::InvalidPaletteSize(size.to_string()));
		}
		Ok(Self { size })
	}

	/// Number of colors, K.
	pub fn len(&self) -> usize {
		self.size
	}

	/// Always `false`; construction rejects an empty palette.
	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// All colors in palette order.
	pub fn colors(&self) -> impl Iterator<Item = ColorId> + use<> {
		(0..self.size).map(ColorId)
	}

	/// Display color for a slot.
	pub fn rgb(&self, slot: ColorSlot) -> Rgb {
		match slot {
			ColorSlot::Uncolored => UNCOLORED_RGB,
			ColorSlot::Colored(c) => SWATCHES[c.index() % SWATCHES.len()],
		}
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self { size: 3 }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_palette_rejected() {
		assert_eq!(Palette::new(0), Err(ConfigError::EmptyPalette));
	}

	#[test]
	fn test_palette_size_capped_at_swatch_count() {
		assert!(Palette::new(MAX_PALETTE_SIZE).is_ok());
		assert_eq!(
			Palette::new(MAX_PALETTE_SIZE + 1),
			Err(ConfigError::InvalidPaletteSize((MAX_PALETTE_SIZE + 1).to_string()))
		);
		assert!(Palette::new(usize::MAX).is_err());
	}

	#[test]
	fn test_reference_palette() {
		let palette = Palette::default();
		let colors: Vec<_> = palette.colors().collect();
		assert_eq!(colors, vec![ColorId(0), ColorId(1), ColorId(2)]);
		assert_eq!(palette.rgb(ColorSlot::Colored(ColorId(0))), Rgb(255, 0, 0));
		assert_eq!(palette.rgb(ColorSlot::Colored(ColorId(2))), Rgb(0, 0, 255));
	}

	#[test]
	fn test_gray_reserved_for_uncolored() {
		let palette = Palette::new(SWATCHES.len()).unwrap();
		assert_eq!(palette.rgb(ColorSlot::Uncolored), UNCOLORED_RGB);
		for c in palette.colors() {
			assert_ne!(palette.rgb(ColorSlot::Colored(c)), UNCOLORED_RGB);
		}
	}

	#[test]
	fn test_css_string() {
		assert_eq!(Rgb(1, 2, 3).css(), "rgb(1, 2, 3)");
	}
}

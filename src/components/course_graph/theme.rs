//! Visual theming for the course graph.
//!
//! Provides colours, the fallback node palette, per-level node colours and
//! background/label styling.

use crate::config::ThemeName;
use crate::models::CourseLevel;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with opacity `a`.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same colour at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	/// CSS colour: `#rrggbb` when opaque, else `rgba(...)`.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parses a CSS color string. Supports hex (`#RRGGBB`) and
	/// `rgb()`/`rgba()` functional notation; anything else becomes mid grey.
	pub fn parse(color_str: &str) -> Color {
		let color_str = color_str.trim();
		if let Some(hex) = color_str.strip_prefix('#').filter(|h| h.len() == 6) {
			let channel = |range: std::ops::Range<usize>| {
				hex.get(range)
					.and_then(|c| u8::from_str_radix(c, 16).ok())
					.unwrap_or(128)
			};
			Color::rgb(channel(0..2), channel(2..4), channel(4..6))
		} else if color_str.starts_with("rgb") {
			let nums: Vec<&str> = color_str
				.trim_start_matches("rgba(")
				.trim_start_matches("rgb(")
				.trim_end_matches(')')
				.split(',')
				.map(str::trim)
				.collect();
			let channel = |i: usize| nums.get(i).and_then(|s| s.parse().ok()).unwrap_or(128);
			let a = nums.get(3).and_then(|s| s.parse().ok()).unwrap_or(1.0);
			Color::rgba(channel(0), channel(1), channel(2), a)
		} else {
			Color::rgb(128, 128, 128)
		}
	}
}

/// Fallback colours for nodes without a known level.
#[derive(Clone, Debug)]
pub struct NodePalette {
	/// Colours, cycled by node index.
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted slate blues and teals.
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(136, 160, 175), // Cadet blue
				Color::rgb(119, 158, 165), // Desaturated cyan
				Color::rgb(122, 153, 168), // Dusty blue
			],
		}
	}

	/// Colour for node `index`; grey for an empty palette.
	pub fn get(&self, index: usize) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(128, 128, 128);
		}
		self.colors[index % self.colors.len()]
	}
}

/// Node colour per study level.
#[derive(Clone, Debug)]
pub struct LevelColors {
	/// Bachelor courses.
	pub bachelor: Color,
	/// Master courses.
	pub master: Color,
	/// PhD courses.
	pub phd: Color,
}

impl LevelColors {
	/// Colour for `level`.
	pub fn get(&self, level: CourseLevel) -> Color {
		match level {
			CourseLevel::Bachelor => self.bachelor,
			CourseLevel::Master => self.master,
			CourseLevel::Phd => self.phd,
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Edge colour of the background gradient, or the flat fill.
	pub color: Color,
	/// Centre colour of the radial gradient.
	pub color_secondary: Color,
	/// Radial gradient instead of a flat fill.
	pub use_gradient: bool,
	/// Dot grid colour; fully transparent disables the grid.
	pub grid_color: Color,
	/// Grid spacing in world units.
	pub grid_gap: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Shade nodes with a radial gradient.
	pub use_gradient: bool,
	/// Border/stroke width in screen pixels (0 = no border)
	pub border_width: f64,
	/// Border colour.
	pub border_color: Color,
	/// Ring drawn around the root course.
	pub root_ring_color: Color,
	/// Hover ring colour; alpha is scaled by hover intensity.
	pub hover_ring_color: Color,
}

/// Label text colours.
#[derive(Clone, Debug)]
pub struct LabelStyle {
	/// Course code colour.
	pub color: Color,
	/// Title and caption colour.
	pub secondary_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Theme name, for logging.
	pub name: &'static str,
	/// Canvas background.
	pub background: BackgroundStyle,
	/// Node borders and rings.
	pub node: NodeStyle,
	/// Text colours.
	pub label: LabelStyle,
	/// Node fill by study level.
	pub levels: LevelColors,
	/// Node fill when the level is unknown.
	pub palette: NodePalette,
}

impl Theme {
	/// Light theme matching the catalog pages (default).
	pub fn light() -> Self {
		Self {
			name: "light",
			background: BackgroundStyle {
				color: Color::rgb(248, 250, 252),
				color_secondary: Color::rgb(255, 255, 255),
				use_gradient: true,
				grid_color: Color::rgb(226, 232, 240),
				grid_gap: 16.0,
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 1.5,
				border_color: Color::rgba(15, 23, 42, 0.25),
				root_ring_color: Color::rgb(59, 130, 246),
				hover_ring_color: Color::rgb(15, 23, 42),
			},
			label: LabelStyle {
				color: Color::rgb(15, 23, 42),
				secondary_color: Color::rgb(71, 85, 105),
			},
			levels: LevelColors {
				bachelor: Color::rgb(20, 184, 166),
				master: Color::rgb(139, 92, 246),
				phd: Color::rgb(249, 115, 22),
			},
			palette: NodePalette::slate(),
		}
	}

	/// Dark slate theme.
	pub fn dark() -> Self {
		Self {
			name: "dark",
			background: BackgroundStyle {
				color: Color::rgb(22, 27, 34),
				color_secondary: Color::rgb(30, 35, 42),
				use_gradient: true,
				grid_color: Color::rgba(255, 255, 255, 0.04),
				grid_gap: 16.0,
			},
			node: NodeStyle {
				use_gradient: true,
				border_width: 0.0,
				border_color: Color::rgba(255, 255, 255, 0.0),
				root_ring_color: Color::rgb(96, 165, 250),
				hover_ring_color: Color::rgb(255, 255, 255),
			},
			label: LabelStyle {
				color: Color::rgba(255, 255, 255, 0.9),
				secondary_color: Color::rgba(203, 213, 225, 0.8),
			},
			levels: LevelColors {
				bachelor: Color::rgb(45, 212, 191),
				master: Color::rgb(167, 139, 250),
				phd: Color::rgb(251, 146, 60),
			},
			palette: NodePalette::slate(),
		}
	}

	/// Theme selected by the app configuration.
	pub fn for_name(name: ThemeName) -> Self {
		match name {
			ThemeName::Light => Self::light(),
			ThemeName::Dark => Self::dark(),
		}
	}

	/// Colour for a node: level colour when known, else palette by index.
	pub fn node_color(&self, level: Option<CourseLevel>, index: usize) -> Color {
		level
			.map(|l| self.levels.get(l))
			.unwrap_or_else(|| self.palette.get(index))
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_hex_and_rgb() {
		assert_eq!(Color::parse("#3b82f6"), Color::rgb(59, 130, 246));
		assert_eq!(Color::parse("rgb(1, 2, 3)"), Color::rgb(1, 2, 3));
		assert_eq!(Color::parse("rgba(1, 2, 3, 0.5)"), Color::rgba(1, 2, 3, 0.5));
		assert_eq!(Color::parse("tomato"), Color::rgb(128, 128, 128));
		assert_eq!(Color::parse("#fff"), Color::rgb(128, 128, 128));
	}

	#[test]
	fn test_to_css() {
		assert_eq!(Color::rgb(59, 130, 246).to_css(), "#3b82f6");
		assert_eq!(Color::rgba(0, 0, 0, 0.5).to_css(), "rgba(0, 0, 0, 0.5)");
	}

	#[test]
	fn test_lighten_darken_bounds() {
		let c = Color::rgb(100, 100, 100);
		assert_eq!(c.lighten(1.0), Color::rgb(255, 255, 255));
		assert_eq!(c.darken(1.0), Color::rgb(0, 0, 0));
		assert_eq!(c.lighten(0.0), c);
	}

	#[test]
	fn test_node_color_prefers_level() {
		let theme = Theme::light();
		assert_eq!(theme.node_color(Some(CourseLevel::Master), 3), theme.levels.master);
		assert_eq!(theme.node_color(None, 6), theme.palette.get(1));
	}

	#[test]
	fn test_theme_for_name() {
		assert_eq!(Theme::for_name(ThemeName::Dark).name, "dark");
		assert_eq!(Theme::default().name, "light");
	}
}

//! Zoom-dependent scaling of graph visuals.
//!
//! Sizes are either world-space (scale with zoom) or screen-space (constant
//! pixel size). The canvas is drawn under a `scale(k)` transform, so a
//! screen-space size `s` is drawn as `s / k` world units.

/// How a visual size reacts to zoom level `k`.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleBehavior {
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space size, clamped so its on-screen size stays within
	/// `min_screen..=max_screen` pixels.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space value for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// How opacity reacts to zoom level.
#[derive(Clone, Debug, PartialEq)]
pub enum AlphaBehavior {
	/// Alpha equals `k`, clamped to [0, 1].
	ScaleWithZoom,
	/// Zero at `zero_alpha_k`, fully visible at `full_alpha_k`, linear between.
	Fade {
		zero_alpha_k: f64,
		full_alpha_k: f64,
	},
}

impl AlphaBehavior {
	pub fn apply(&self, k: f64) -> f64 {
		match self {
			AlphaBehavior::ScaleWithZoom => k.clamp(0.0, 1.0),
			AlphaBehavior::Fade {
				zero_alpha_k,
				full_alpha_k,
			} => {
				if zero_alpha_k == full_alpha_k {
					return 1.0;
				}
				((k - zero_alpha_k) / (full_alpha_k - zero_alpha_k)).clamp(0.0, 1.0)
			}
		}
	}
}

/// Node sizing.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units.
	pub radius: f64,
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	pub hit_behavior: ScaleBehavior,
	/// Course code font size in screen pixels.
	pub label_size: f64,
	/// Below this zoom the label stops shrinking.
	pub label_min_k: f64,
	/// Course title font size in screen pixels.
	pub title_size: f64,
	/// Titles fade in as the view zooms in.
	pub title_alpha_behavior: AlphaBehavior,
}

/// Edge dash animation.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Dash pattern (dash, gap) in world units.
	pub dash_pattern: (f64, f64),
	/// Flow animation speed (world units per second).
	pub flow_speed: f64,
	/// When faded out, animated edges become solid lines.
	pub dash_alpha_behavior: AlphaBehavior,
}

/// Arrowhead sizing.
#[derive(Clone, Debug)]
pub struct ArrowScaleConfig {
	/// Base arrow size in world units.
	pub size: f64,
	pub size_behavior: ScaleBehavior,
	pub alpha_behavior: AlphaBehavior,
	/// Minimum alpha to bother drawing.
	pub cull_alpha: f64,
}

/// Hover and root ring geometry.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width.
	pub width: f64,
	/// Gap between node edge and ring.
	pub offset: f64,
	pub behavior: ScaleBehavior,
}

/// Complete scale configuration.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
	pub arrow: ArrowScaleConfig,
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 16.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 5.0,
					max_screen: f64::INFINITY,
				},
				hit_radius: 20.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 8.0,
					max_screen: f64::INFINITY,
				},
				label_size: 12.0,
				label_min_k: 0.5,
				title_size: 10.0,
				title_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.6,
					full_alpha_k: 1.0,
				},
			},
			edge: EdgeScaleConfig {
				dash_pattern: (8.0, 4.0),
				flow_speed: 12.0,
				dash_alpha_behavior: AlphaBehavior::Fade {
					zero_alpha_k: 0.4,
					full_alpha_k: 0.9,
				},
			},
			arrow: ArrowScaleConfig {
				size: 9.0,
				size_behavior: ScaleBehavior::Clamped {
					min_screen: 0.0,
					max_screen: 18.0,
				},
				alpha_behavior: AlphaBehavior::ScaleWithZoom,
				cull_alpha: 0.05,
			},
			ring: RingScaleConfig {
				width: 2.0,
				offset: 3.0,
				behavior: ScaleBehavior::Screen,
			},
		}
	}
}

/// Scale values for one frame, all in world units.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub k: f64,
	pub node_radius: f64,
	pub hit_radius: f64,
	/// Canvas font string for course codes, e.g. "bold 12px sans-serif".
	pub label_font: String,
	pub title_font: String,
	pub title_alpha: f64,
	pub dash_pattern: (f64, f64),
	/// Dash visibility [0, 1]. At 0, animated edges are solid.
	pub dash_alpha: f64,
	pub arrow_size: f64,
	pub arrow_alpha: f64,
	pub cull_arrows: bool,
	pub ring_width: f64,
	pub ring_offset: f64,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let font_k = k.max(config.node.label_min_k);
		let arrow_alpha = config.arrow.alpha_behavior.apply(k);

		Self {
			k,
			node_radius: config.node.radius_behavior.apply(config.node.radius, k),
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, k),
			label_font: format!("bold {}px sans-serif", config.node.label_size / font_k),
			title_font: format!("{}px sans-serif", config.node.title_size / font_k),
			title_alpha: config.node.title_alpha_behavior.apply(k),
			dash_pattern: config.edge.dash_pattern,
			dash_alpha: config.edge.dash_alpha_behavior.apply(k),
			arrow_size: config.arrow.size_behavior.apply(config.arrow.size, k),
			arrow_alpha,
			cull_arrows: arrow_alpha < config.arrow.cull_alpha,
			ring_width: config.ring.behavior.apply(config.ring.width, k),
			ring_offset: config.ring.behavior.apply(config.ring.offset, k),
		}
	}

	/// Line width in world units for a stroke width given in screen pixels.
	pub fn line_width(&self, screen_width: f64) -> f64 {
		screen_width / self.k
	}

	/// Dash offset for the flow animation; negative so dashes travel source → target.
	pub fn dash_offset(&self, flow_time: f64, flow_speed: f64) -> f64 {
		-flow_time * flow_speed
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rings_keep_screen_size() {
		let config = ScaleConfig::default();
		assert_eq!(config.ring.behavior, ScaleBehavior::Screen);
		let zoomed_in = ScaledValues::new(&config, 2.0);
		assert_eq!(zoomed_in.ring_width, 1.0);
		assert_eq!(zoomed_in.ring_offset, 1.5);
		let zoomed_out = ScaledValues::new(&config, 0.5);
		assert_eq!(zoomed_out.ring_width, 4.0);
	}

	#[test]
	fn test_clamped_behavior() {
		let b = ScaleBehavior::Clamped {
			min_screen: 5.0,
			max_screen: 18.0,
		};
		// Zoomed far out: world size grows so the node stays 5px on screen.
		assert_eq!(b.apply(4.0, 0.1), 50.0);
		// Zoomed far in: capped at 18px on screen.
		assert_eq!(b.apply(9.0, 4.0), 4.5);
		assert_eq!(b.apply(9.0, 1.0), 9.0);
	}

	#[test]
	fn test_fade_alpha() {
		let fade = AlphaBehavior::Fade {
			zero_alpha_k: 0.4,
			full_alpha_k: 0.9,
		};
		assert_eq!(fade.apply(0.2), 0.0);
		assert_eq!(fade.apply(2.0), 1.0);
		assert!((fade.apply(0.65) - 0.5).abs() < 1e-9);
		let degenerate = AlphaBehavior::Fade {
			zero_alpha_k: 1.0,
			full_alpha_k: 1.0,
		};
		assert_eq!(degenerate.apply(0.0), 1.0);
	}

	#[test]
	fn test_scaled_values_at_unit_zoom() {
		let scale = ScaledValues::new(&ScaleConfig::default(), 1.0);
		assert_eq!(scale.node_radius, 16.0);
		assert_eq!(scale.label_font, "bold 12px sans-serif");
		assert_eq!(scale.title_alpha, 1.0);
		assert_eq!(scale.line_width(2.0), 2.0);
		assert!(!scale.cull_arrows);
	}

	#[test]
	fn test_arrows_culled_when_zoomed_out() {
		let scale = ScaledValues::new(&ScaleConfig::default(), 0.02);
		assert!(scale.cull_arrows);
		assert_eq!(scale.title_alpha, 0.0);
	}
}

//! Graph view state and interaction tracking.
//!
//! Holds node positions taken from a [`GraphLayout`], the pan/zoom transform,
//! drag and pan gestures, and hover highlight intensities that animate smoothly
//! towards their targets.

use std::collections::HashMap;

use crate::layout::{EdgeStyle, GraphLayout};

use super::scale::{ScaleConfig, ScaledValues};
use super::theme::Theme;

/// Pointer travel (screen pixels) below which a press/release counts as a click.
const CLICK_TOLERANCE: f64 = 4.0;

/// Zoom limits.
const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;

/// Per-node display data.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeInfo {
	/// Course code, drawn as the label and reported on click.
	pub id: String,
	/// Course title, drawn under the label when zoomed in.
	pub title: Option<String>,
	/// Study points, shown in the caption.
	pub credits: Option<u32>,
	/// Department, shown in the caption.
	pub department: Option<String>,
	/// CSS colour.
	pub color: String,
	/// Size multiplier (1.0 = normal).
	pub size: f64,
	/// The course whose prerequisites are shown.
	pub is_root: bool,
	/// World-space position; starts at the layout position, moved by drags.
	pub x: f64,
	pub y: f64,
}

impl NodeInfo {
	/// Small print under the title, e.g. "10 credits, Informatics".
	pub fn caption(&self) -> Option<String> {
		let credits = self.credits.map(|c| format!("{c} credits"));
		match (credits, self.department.as_deref()) {
			(Some(c), Some(d)) => Some(format!("{c}, {d}")),
			(Some(c), None) => Some(c),
			(None, Some(d)) => Some(d.to_string()),
			(None, None) => None,
		}
	}
}

/// An edge between two node indices.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeInfo {
	pub source: usize,
	pub target: usize,
	pub style: EdgeStyle,
}

/// Pan and zoom transform applied to the whole view.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// An in-progress node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
	/// Set once the pointer leaves the click tolerance.
	pub moved: bool,
}

/// An in-progress background pan.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Smoothed per-node highlight intensities.
///
/// Hovering a node targets it and its neighbours at 1.0; everything else decays
/// towards 0.0 with exponential smoothing, which eases out as it nears the target.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub hovered_node: Option<usize>,
	targets: Vec<bool>,
	intensity: Vec<f64>,
	hover_ring: Vec<f64>,
	cached_max: f64,
}

impl HighlightState {
	fn with_len(len: usize) -> Self {
		Self {
			hovered_node: None,
			targets: vec![false; len],
			intensity: vec![0.0; len],
			hover_ring: vec![0.0; len],
			cached_max: 0.0,
		}
	}

	/// Change the hovered node and recompute the target set (node + neighbours).
	pub fn set_hover(&mut self, node: Option<usize>, edges: &[EdgeInfo]) {
		if self.hovered_node == node {
			return;
		}
		self.hovered_node = node;
		self.targets.iter_mut().for_each(|t| *t = false);

		let Some(idx) = node else {
			return;
		};
		let mut mark = |i: usize| {
			if let Some(t) = self.targets.get_mut(i) {
				*t = true;
			}
		};
		mark(idx);
		for edge in edges {
			if edge.source == idx {
				mark(edge.target);
			} else if edge.target == idx {
				mark(edge.source);
			}
		}
	}

	/// Advance intensities by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		// ~150ms to 95% fading in, ~250ms fading out.
		const FADE_IN_SPEED: f64 = 6.0;
		const FADE_OUT_SPEED: f64 = 4.0;

		let fade_in = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let fade_out = (-FADE_OUT_SPEED * dt).exp();

		let mut max: f64 = 0.0;
		for (i, value) in self.intensity.iter_mut().enumerate() {
			if self.targets.get(i).copied().unwrap_or(false) {
				*value += (1.0 - *value) * fade_in;
			} else {
				*value *= fade_out;
				if *value < 0.005 {
					*value = 0.0;
				}
			}
			max = max.max(*value);
		}
		for (i, value) in self.hover_ring.iter_mut().enumerate() {
			if self.hovered_node == Some(i) {
				*value += (1.0 - *value) * fade_in;
			} else {
				*value *= fade_out;
				if *value < 0.005 {
					*value = 0.0;
				}
			}
		}
		self.cached_max = max;
	}

	pub fn node_intensity(&self, idx: usize) -> f64 {
		self.intensity.get(idx).copied().unwrap_or(0.0)
	}

	pub fn hover_ring_intensity(&self, idx: usize) -> f64 {
		self.hover_ring.get(idx).copied().unwrap_or(0.0)
	}

	/// Geometric mean of the endpoint intensities.
	pub fn edge_intensity(&self, a: usize, b: usize) -> f64 {
		(self.node_intensity(a) * self.node_intensity(b)).sqrt()
	}

	/// Highest node intensity, used to dim everything else.
	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}
}

/// Everything the renderer and event handlers need for one canvas.
pub struct CourseGraphState {
	pub nodes: Vec<NodeInfo>,
	pub edges: Vec<EdgeInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub highlight: HighlightState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl CourseGraphState {
	/// Create state for `layout` on a `width` x `height` canvas, with the
	/// layout origin at the canvas centre.
	pub fn new(layout: &GraphLayout, width: f64, height: f64, theme: &Theme) -> Self {
		let mut state = Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			highlight: HighlightState::default(),
			width,
			height,
			flow_time: 0.0,
		};
		state.replace_layout(layout, theme);
		state.fit_to_view();
		state
	}

	/// Swap in a new layout wholesale. Gestures and highlights are reset; the
	/// view is refitted so the new graph is fully visible.
	pub fn replace_layout(&mut self, layout: &GraphLayout, theme: &Theme) {
		let index: HashMap<&str, usize> = layout
			.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.as_str(), i))
			.collect();

		self.edges = layout
			.edges
			.iter()
			.filter_map(|e| {
				Some(EdgeInfo {
					source: *index.get(e.source.as_str())?,
					target: *index.get(e.target.as_str())?,
					style: e.style.clone(),
				})
			})
			.collect();

		let mut degree = vec![0usize; layout.nodes.len()];
		for edge in &self.edges {
			degree[edge.source] += 1;
			degree[edge.target] += 1;
		}
		let max_degree = degree.iter().copied().max().unwrap_or(1).max(1);

		self.nodes = layout
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let is_root = node.data.depth == Some(0);
				// sqrt for softer scaling: 1.0x to 1.4x, root a further 1.3x
				let edge_factor = (degree[i] as f64 / max_degree as f64).sqrt();
				let size = (1.0 + 0.4 * edge_factor) * if is_root { 1.3 } else { 1.0 };
				NodeInfo {
					id: node.id.clone(),
					title: node.data.title.clone(),
					credits: node.data.credits,
					department: node.data.department.clone(),
					color: theme.node_color(node.data.level, i).to_css(),
					size,
					is_root,
					x: node.position.x,
					y: node.position.y,
				}
			})
			.collect();

		self.drag = DragState::default();
		self.pan = PanState::default();
		self.highlight = HighlightState::with_len(self.nodes.len());
		self.fit_to_view();
	}

	/// Centre the origin and pick a zoom that fits every node with a margin.
	/// Never zooms in past 100%.
	pub fn fit_to_view(&mut self) {
		const MARGIN: f64 = 60.0;
		let extent = self
			.nodes
			.iter()
			.map(|n| n.x.abs().max(n.y.abs()))
			.fold(0.0_f64, f64::max);

		let k = if extent > 0.0 {
			let half = (self.width.min(self.height) / 2.0 - MARGIN).max(1.0);
			(half / extent).clamp(MIN_ZOOM, 1.0)
		} else {
			1.0
		};
		self.transform = ViewTransform {
			x: self.width / 2.0,
			y: self.height / 2.0,
			k,
		};
	}

	/// Screen pixels to world coordinates.
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen position.
	pub fn node_at_position(&self, sx: f64, sy: f64, config: &ScaleConfig) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		self.nodes
			.iter()
			.enumerate()
			.rev()
			.find(|(_, node)| (node.x - gx).hypot(node.y - gy) < scale.hit_radius * node.size)
			.map(|(i, _)| i)
	}

	/// Hover `node`, or clear the hover.
	pub fn set_hover(&mut self, node: Option<usize>) {
		self.highlight.set_hover(node, &self.edges);
	}

	/// Pointer pressed: start dragging the node under it, or panning.
	pub fn pointer_down(&mut self, x: f64, y: f64, config: &ScaleConfig) {
		if let Some(idx) = self.node_at_position(x, y, config) {
			let node = &self.nodes[idx];
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: x,
				start_y: y,
				node_start_x: node.x,
				node_start_y: node.y,
				moved: false,
			};
		} else {
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	/// Pointer moved: update hover, then continue any drag or pan.
	pub fn pointer_move(&mut self, x: f64, y: f64, config: &ScaleConfig) {
		if !self.drag.active {
			let hovered = self.node_at_position(x, y, config);
			self.set_hover(hovered);
		}

		if self.drag.active {
			if (x - self.drag.start_x).hypot(y - self.drag.start_y) > CLICK_TOLERANCE {
				self.drag.moved = true;
			}
			if let (true, Some(idx)) = (self.drag.moved, self.drag.node_idx) {
				let (dx, dy) = (
					(x - self.drag.start_x) / self.transform.k,
					(y - self.drag.start_y) / self.transform.k,
				);
				if let Some(node) = self.nodes.get_mut(idx) {
					node.x = self.drag.node_start_x + dx;
					node.y = self.drag.node_start_y + dy;
				}
			}
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	/// Pointer released. Returns the id of the node that was clicked, if the
	/// press started on a node and the pointer did not travel.
	pub fn pointer_up(&mut self) -> Option<String> {
		let clicked = match (&self.drag, self.drag.node_idx) {
			(drag, Some(idx)) if drag.active && !drag.moved => {
				self.nodes.get(idx).map(|n| n.id.clone())
			}
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	/// Pointer left the canvas: cancel gestures and hover.
	pub fn pointer_leave(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.set_hover(None);
	}

	/// Zoom around a screen position. Positive `delta_y` zooms out.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// One zoom step around the canvas centre, as the zoom buttons do.
	pub fn zoom_step(&mut self, zoom_in: bool) {
		let delta = if zoom_in { -1.0 } else { 1.0 };
		self.zoom_at(self.width / 2.0, self.height / 2.0, delta);
	}

	/// Advance animations by `dt` seconds.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		self.highlight.tick(dt);
	}

	/// Resize the canvas, keeping the graph centred.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layout::build_layout;
	use crate::models::{CourseLevel, DependencyEdge, DependencyGraph, DependencyNode};

	fn sample_layout() -> GraphLayout {
		let mut root = DependencyNode::bare("IN2010");
		root.depth = Some(0);
		root.credits = Some(10);
		root.department = Some("Informatics".into());
		root.level = Some(CourseLevel::Bachelor);
		let graph = DependencyGraph {
			course: Some("IN2010".into()),
			nodes: vec![
				root,
				DependencyNode::bare("IN1010"),
				DependencyNode::bare("IN1000"),
			],
			edges: vec![
				DependencyEdge::new("IN1010", "IN2010"),
				DependencyEdge::new("IN1000", "IN1010"),
			],
		};
		build_layout(&graph)
	}

	fn state() -> CourseGraphState {
		// Large enough that fit_to_view keeps k = 1.
		CourseGraphState::new(&sample_layout(), 1000.0, 800.0, &Theme::light())
	}

	#[test]
	fn test_nodes_keep_layout_positions() {
		let s = state();
		assert_eq!(s.nodes.len(), 3);
		assert_eq!(s.edges.len(), 2);
		assert!((s.nodes[0].x - 300.0).abs() < 1e-9);
		assert!(s.nodes[0].is_root);
		assert_eq!(s.nodes[0].color, Theme::light().levels.bachelor.to_css());
		assert!(s.nodes[0].size > s.nodes[2].size);
		assert_eq!(s.transform, ViewTransform { x: 500.0, y: 400.0, k: 1.0 });
	}

	#[test]
	fn test_caption_shows_credits_and_department() {
		let s = state();
		assert_eq!(s.nodes[0].caption().as_deref(), Some("10 credits, Informatics"));
		assert_eq!(s.nodes[1].caption(), None);

		let mut node = s.nodes[1].clone();
		node.credits = Some(5);
		assert_eq!(node.caption().as_deref(), Some("5 credits"));
	}

	#[test]
	fn test_fit_to_view_zooms_out_on_small_canvas() {
		let s = CourseGraphState::new(&sample_layout(), 400.0, 300.0, &Theme::light());
		// half = 150 - 60 = 90, extent = 300
		assert!((s.transform.k - 0.3).abs() < 1e-9);
	}

	#[test]
	fn test_hit_test_and_click() {
		let mut s = state();
		let config = ScaleConfig::default();
		// Node 0 sits at (300, 0) in world space -> (800, 400) on screen.
		assert_eq!(s.node_at_position(800.0, 400.0, &config), Some(0));
		assert_eq!(s.node_at_position(500.0, 400.0, &config), None);

		s.pointer_down(801.0, 401.0, &config);
		s.pointer_move(802.0, 401.0, &config);
		assert_eq!(s.pointer_up().as_deref(), Some("IN2010"));
	}

	#[test]
	fn test_drag_moves_node_without_click() {
		let mut s = state();
		let config = ScaleConfig::default();
		s.pointer_down(800.0, 400.0, &config);
		s.pointer_move(850.0, 420.0, &config);
		assert!((s.nodes[0].x - 350.0).abs() < 1e-9);
		assert!((s.nodes[0].y - 20.0).abs() < 1e-9);
		assert_eq!(s.pointer_up(), None);
	}

	#[test]
	fn test_pan_background() {
		let mut s = state();
		let config = ScaleConfig::default();
		s.pointer_down(500.0, 400.0, &config);
		s.pointer_move(520.0, 390.0, &config);
		assert_eq!((s.transform.x, s.transform.y), (520.0, 390.0));
		assert_eq!(s.pointer_up(), None);
		assert!(!s.pan.active);
	}

	#[test]
	fn test_zoom_is_clamped_and_anchored() {
		let mut s = state();
		let (gx, gy) = s.screen_to_graph(600.0, 300.0);
		s.zoom_at(600.0, 300.0, -1.0);
		let (gx2, gy2) = s.screen_to_graph(600.0, 300.0);
		assert!((gx - gx2).abs() < 1e-9 && (gy - gy2).abs() < 1e-9);

		for _ in 0..100 {
			s.zoom_at(600.0, 300.0, 1.0);
		}
		assert!((s.transform.k - MIN_ZOOM).abs() < 1e-9);
	}

	#[test]
	fn test_zoom_buttons_keep_centre_and_fit_restores() {
		let mut s = state();
		s.zoom_step(true);
		assert!((s.transform.k - 1.1).abs() < 1e-9);
		assert_eq!(s.screen_to_graph(500.0, 400.0), (0.0, 0.0));
		s.zoom_step(false);
		s.zoom_step(false);
		assert!(s.transform.k < 1.0);

		s.pointer_down(500.0, 400.0, &ScaleConfig::default());
		s.pointer_move(560.0, 380.0, &ScaleConfig::default());
		s.pointer_up();
		s.fit_to_view();
		assert_eq!(s.transform, ViewTransform { x: 500.0, y: 400.0, k: 1.0 });
	}

	#[test]
	fn test_hover_highlights_neighbours() {
		let mut s = state();
		s.set_hover(Some(1));
		for _ in 0..60 {
			s.tick(1.0 / 60.0);
		}
		assert!(s.highlight.node_intensity(0) > 0.9);
		assert!(s.highlight.node_intensity(1) > 0.9);
		assert!(s.highlight.node_intensity(2) > 0.9);
		assert!(s.highlight.hover_ring_intensity(1) > 0.9);
		assert_eq!(s.highlight.hover_ring_intensity(0), 0.0);

		s.set_hover(Some(0));
		for _ in 0..120 {
			s.tick(1.0 / 60.0);
		}
		assert_eq!(s.highlight.node_intensity(2), 0.0);
		assert!(s.highlight.max_intensity() > 0.9);
	}

	#[test]
	fn test_replace_layout_is_wholesale() {
		let mut s = state();
		s.set_hover(Some(2));
		let single = build_layout(&DependencyGraph {
			course: Some("IN1000".into()),
			nodes: vec![DependencyNode::bare("IN1000")],
			edges: vec![],
		});
		s.replace_layout(&single, &Theme::light());
		assert_eq!(s.nodes.len(), 1);
		assert!(s.edges.is_empty());
		assert_eq!(s.highlight.hovered_node, None);
		assert_eq!(s.nodes[0].id, "IN1000");
	}

	#[test]
	fn test_resize_keeps_centre() {
		let mut s = state();
		s.resize(1200.0, 800.0);
		assert_eq!(s.transform.x, 600.0);
		assert_eq!(s.width, 1200.0);
	}
}

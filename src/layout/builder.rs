//! Circular layout for dependency graphs.
//!
//! Node `i` of `n` sits at angle `(i / n) * 2π` on a circle of fixed radius
//! around the origin, in input order. Edges get a fixed visual treatment and an
//! identifier derived from their endpoints.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use log::warn;

use crate::models::{CourseLevel, DependencyGraph, DependencyNode};

/// Radius of the layout circle in world units.
pub const LAYOUT_RADIUS: f64 = 300.0;

/// Stroke colour for prerequisite edges.
pub const EDGE_STROKE: &str = "#3b82f6";

/// Stroke width for prerequisite edges, in screen pixels.
pub const EDGE_STROKE_WIDTH: f64 = 2.0;

/// A 2D point in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Horizontal offset from the circle centre.
	pub x: f64,
	/// Vertical offset from the circle centre, growing downwards on screen.
	pub y: f64,
}

impl Position {
	/// Distance from the origin.
	pub fn norm(self) -> f64 {
		self.x.hypot(self.y)
	}

	/// Angle from the positive x axis, normalised to `[0, 2π)`.
	pub fn angle(self) -> f64 {
		self.y.atan2(self.x).rem_euclid(2.0 * PI)
	}
}

/// Course metadata carried by a layout node for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseNodeData {
	/// Course code.
	pub id: String,
	/// Course title, if the API sent one.
	pub title: Option<String>,
	/// Owning department.
	pub department: Option<String>,
	/// Study points.
	pub credits: Option<u32>,
	/// Study level; picks the node colour.
	pub level: Option<CourseLevel>,
	/// Prerequisite distance from the root course; 0 for the root.
	pub depth: Option<u32>,
}

impl From<&DependencyNode> for CourseNodeData {
	fn from(node: &DependencyNode) -> Self {
		Self {
			id: node.id.clone(),
			title: node.display_title().map(str::to_string),
			department: node.department.clone(),
			credits: node.credits,
			level: node.level,
			depth: node.depth,
		}
	}
}

/// A positioned node.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
	/// Course code, unique within the layout.
	pub id: String,
	/// Position on the layout circle.
	pub position: Position,
	/// Metadata shown on the node.
	pub data: CourseNodeData,
}

/// Visual treatment of an edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStyle {
	/// CSS colour.
	pub stroke: String,
	/// Stroke width in screen pixels.
	pub stroke_width: f64,
	/// Draw a flowing dash pattern along the edge.
	pub animated: bool,
}

impl Default for EdgeStyle {
	fn default() -> Self {
		Self {
			stroke: EDGE_STROKE.to_string(),
			stroke_width: EDGE_STROKE_WIDTH,
			animated: true,
		}
	}
}

/// A directed, styled edge with a unique handle.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledEdge {
	/// Unique edge handle, `"{source}-{target}"` plus an ordinal for repeats.
	pub id: String,
	/// Prerequisite course code.
	pub source: String,
	/// Code of the course that requires `source`.
	pub target: String,
	/// Visual treatment.
	pub style: EdgeStyle,
}

/// Renderable graph: positioned nodes and styled edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphLayout {
	/// Nodes in input order.
	pub nodes: Vec<LayoutNode>,
	/// Edges in input order, dangling ones removed.
	pub edges: Vec<StyledEdge>,
}

impl GraphLayout {
	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Node with the given course id.
	pub fn node(&self, id: &str) -> Option<&LayoutNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

/// Position of node `index` out of `total` on a circle of `radius`.
pub fn circular_position(index: usize, total: usize, radius: f64) -> Position {
	if total == 0 {
		return Position::default();
	}
	let angle = (index as f64 / total as f64) * 2.0 * PI;
	Position {
		x: radius * angle.cos(),
		y: radius * angle.sin(),
	}
}

/// Lay out `graph` on a circle of [`LAYOUT_RADIUS`].
pub fn build_layout(graph: &DependencyGraph) -> GraphLayout {
	build_layout_with_radius(graph, LAYOUT_RADIUS)
}

/// Lay out `graph` on a circle of `radius`.
///
/// Edges whose endpoints are not among the nodes are dropped with a warning.
/// Repeated `(source, target)` pairs get an ordinal suffix so edge ids stay unique.
pub fn build_layout_with_radius(graph: &DependencyGraph, radius: f64) -> GraphLayout {
	let total = graph.nodes.len();
	let nodes: Vec<LayoutNode> = graph
		.nodes
		.iter()
		.enumerate()
		.map(|(i, node)| LayoutNode {
			id: node.id.clone(),
			position: circular_position(i, total, radius),
			data: CourseNodeData::from(node),
		})
		.collect();

	let known: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
	let mut next_ordinal: HashMap<(&str, &str), usize> = HashMap::new();
	let mut used: HashSet<String> = HashSet::new();
	let mut edges = Vec::with_capacity(graph.edges.len());

	for edge in &graph.edges {
		if !known.contains(edge.source.as_str()) || !known.contains(edge.target.as_str()) {
			warn!(
				"course-atlas: dropping edge {} -> {}: endpoint not in graph",
				edge.source, edge.target
			);
			continue;
		}

		// Course codes may contain '-', so a suffixed id can equal the plain id
		// of another pair. Skip ordinals until the id is free.
		let base = format!("{}-{}", edge.source, edge.target);
		let ordinal = next_ordinal
			.entry((edge.source.as_str(), edge.target.as_str()))
			.or_insert(0);
		let mut id = match *ordinal {
			0 => base.clone(),
			n => format!("{base}-{n}"),
		};
		while used.contains(&id) {
			*ordinal += 1;
			id = format!("{base}-{ordinal}");
		}
		*ordinal += 1;
		used.insert(id.clone());

		edges.push(StyledEdge {
			id,
			source: edge.source.clone(),
			target: edge.target.clone(),
			style: EdgeStyle::default(),
		});
	}

	GraphLayout { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::DependencyEdge;

	fn graph(ids: &[&str], edges: &[(&str, &str)]) -> DependencyGraph {
		DependencyGraph {
			course: ids.first().map(|s| s.to_string()),
			nodes: ids.iter().map(|id| DependencyNode::bare(*id)).collect(),
			edges: edges.iter().map(|(s, t)| DependencyEdge::new(*s, *t)).collect(),
		}
	}

	#[test]
	fn test_two_node_scenario() {
		let layout = build_layout(&graph(&["IN1010", "IN2010"], &[("IN1010", "IN2010")]));

		assert_eq!(layout.nodes.len(), 2);
		assert!((layout.nodes[0].position.x - 300.0).abs() < 1e-9);
		assert!(layout.nodes[0].position.y.abs() < 1e-9);
		assert!((layout.nodes[1].position.angle() - PI).abs() < 1e-9);
		assert_eq!(layout.edges.len(), 1);
		assert_eq!(layout.edges[0].id, "IN1010-IN2010");
		assert_eq!(layout.edges[0].style, EdgeStyle::default());
		assert!(layout.edges[0].style.animated);
	}

	#[test]
	fn test_empty_graph() {
		let layout = build_layout(&DependencyGraph::default());
		assert!(layout.is_empty());
		assert!(layout.edges.is_empty());
	}

	#[test]
	fn test_circular_position_zero_total() {
		assert_eq!(circular_position(0, 0, LAYOUT_RADIUS), Position::default());
	}

	#[test]
	fn test_parallel_edges_get_unique_ids() {
		let layout = build_layout(&graph(
			&["A", "B"],
			&[("A", "B"), ("B", "A"), ("A", "B"), ("A", "B")],
		));
		let ids: Vec<_> = layout.edges.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, ["A-B", "B-A", "A-B-1", "A-B-2"]);
	}

	#[test]
	fn test_suffixed_ids_skip_ids_of_hyphenated_pairs() {
		let layout = build_layout(&graph(
			&["A", "B", "B-1"],
			&[("A", "B"), ("A", "B"), ("A", "B-1")],
		));
		let ids: Vec<_> = layout.edges.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, ["A-B", "A-B-1", "A-B-1-1"]);

		let layout = build_layout(&graph(
			&["A", "B", "B-1"],
			&[("A", "B-1"), ("A", "B"), ("A", "B")],
		));
		let ids: Vec<_> = layout.edges.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, ["A-B-1", "A-B", "A-B-2"]);
		let unique: HashSet<_> = ids.iter().collect();
		assert_eq!(unique.len(), ids.len());
	}

	#[test]
	fn test_dangling_edges_are_dropped() {
		let layout = build_layout(&graph(
			&["IN1000", "IN1010"],
			&[("IN1000", "IN1010"), ("IN0001", "IN1010"), ("IN1010", "IN9999")],
		));
		assert_eq!(layout.nodes.len(), 2);
		assert_eq!(layout.edges.len(), 1);
		assert_eq!(layout.edges[0].id, "IN1000-IN1010");
	}

	#[test]
	fn test_node_data_carries_metadata() {
		let mut g = graph(&["IN2010"], &[]);
		g.nodes[0].label = Some("IN2010\nAlgoritmer og datastrukturer".into());
		g.nodes[0].credits = Some(10);
		g.nodes[0].level = Some(CourseLevel::Bachelor);
		g.nodes[0].depth = Some(0);

		let layout = build_layout(&g);
		let data = &layout.node("IN2010").expect("node present").data;
		assert_eq!(data.title.as_deref(), Some("Algoritmer og datastrukturer"));
		assert_eq!(data.credits, Some(10));
		assert_eq!(data.level, Some(CourseLevel::Bachelor));
		assert_eq!(data.depth, Some(0));
	}

	#[test]
	fn test_custom_radius() {
		let layout = build_layout_with_radius(&graph(&["A", "B", "C"], &[]), 50.0);
		for node in &layout.nodes {
			assert!((node.position.norm() - 50.0).abs() < 1e-9);
		}
	}
}

//! Turning dependency graphs into renderable layouts.

mod builder;

pub use builder::{
	CourseNodeData, EDGE_STROKE, EDGE_STROKE_WIDTH, EdgeStyle, GraphLayout, LAYOUT_RADIUS,
	LayoutNode, Position, StyledEdge, build_layout, build_layout_with_radius, circular_position,
};

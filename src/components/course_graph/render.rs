//! Canvas rendering for the course graph.
//!
//! Draw order:
//! 1. Background and dot grid (screen space)
//! 2. Edge lines and arrowheads (world space)
//! 3. Dimmed nodes, then highlighted nodes with rings and titles on top

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::{CourseGraphState, EdgeInfo, NodeInfo};
use super::theme::{Color, Theme};

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &CourseGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_grid(state, ctx, theme);
	for edge in &state.edges {
		draw_edge(state, ctx, config, &scale, edge);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_background(state: &CourseGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let bg = &theme.background;
	let gradient = bg
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.ok()
		})
		.flatten();

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &bg.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &bg.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&bg.color.to_css()),
	}
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

/// Dot grid covering the visible area, in world space.
fn draw_grid(state: &CourseGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let bg = &theme.background;
	// Skip when transparent or so dense it would be noise.
	if bg.grid_color.a <= 0.0 || bg.grid_gap * state.transform.k < 6.0 {
		return;
	}

	let (x0, y0) = state.screen_to_graph(0.0, 0.0);
	let (x1, y1) = state.screen_to_graph(state.width, state.height);
	let gap = bg.grid_gap;
	let dot = 1.0 / state.transform.k;

	ctx.set_fill_style_str(&bg.grid_color.to_css());
	let mut y = (y0 / gap).floor() * gap;
	while y <= y1 {
		let mut x = (x0 / gap).floor() * gap;
		while x <= x1 {
			ctx.fill_rect(x - dot / 2.0, y - dot / 2.0, dot, dot);
			x += gap;
		}
		y += gap;
	}
}

fn draw_edge(
	state: &CourseGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	edge: &EdgeInfo,
) {
	let (Some(n1), Some(n2)) = (state.nodes.get(edge.source), state.nodes.get(edge.target)) else {
		return;
	};
	let (dx, dy) = (n2.x - n1.x, n2.y - n1.y);
	let dist = dx.hypot(dy);
	if dist < 0.001 {
		return;
	}

	let edge_t = smooth_step(state.highlight.edge_intensity(edge.source, edge.target));
	let max_t = smooth_step(state.highlight.max_intensity());

	let (alpha, width_mult) = if edge_t > 0.01 {
		(0.8 + 0.2 * edge_t, 1.0 + 0.4 * edge_t)
	} else if max_t > 0.01 {
		(0.8 - 0.6 * max_t, 1.0 - 0.3 * max_t)
	} else {
		(0.8, 1.0)
	};

	let color = Color::parse(&edge.style.stroke);
	let stroke = color.with_alpha(alpha * color.a);
	ctx.set_stroke_style_str(&stroke.to_css());
	ctx.set_line_width(scale.line_width(edge.style.stroke_width) * width_mult);

	let effective_gap = scale.dash_pattern.1 * scale.dash_alpha;
	if edge.style.animated && effective_gap > 0.1 {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(scale.dash_pattern.0),
			&JsValue::from_f64(effective_gap),
		));
		ctx.set_line_dash_offset(scale.dash_offset(state.flow_time, config.edge.flow_speed));
	} else {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}

	let (ux, uy) = (dx / dist, dy / dist);
	let (r1, r2) = (
		scale.node_radius * n1.size,
		scale.node_radius * n2.size,
	);
	if dist <= r1 + r2 {
		return;
	}

	ctx.begin_path();
	ctx.move_to(n1.x + ux * r1, n1.y + uy * r1);
	ctx.line_to(
		n2.x - ux * (r2 + scale.arrow_size),
		n2.y - uy * (r2 + scale.arrow_size),
	);
	ctx.stroke();

	let arrow_alpha = alpha * scale.arrow_alpha;
	if scale.cull_arrows || arrow_alpha <= 0.0 {
		return;
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_fill_style_str(&color.with_alpha(arrow_alpha * color.a).to_css());

	let (tip_x, tip_y) = (n2.x - ux * r2, n2.y - uy * r2);
	let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
	let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);

	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

fn draw_nodes(
	state: &CourseGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let has_highlight = max_t > 0.01;
	let (dim_alpha, dim_radius) = if has_highlight {
		(1.0 - 0.7 * max_t, 1.0 - 0.15 * max_t)
	} else {
		(1.0, 1.0)
	};

	// Pass 1: nodes not involved in the highlight
	for (idx, node) in state.nodes.iter().enumerate() {
		if state.highlight.node_intensity(idx) > 0.001 {
			continue;
		}
		draw_node(ctx, node, scale, theme, dim_alpha, dim_radius);
	}

	// Pass 2: highlighted or transitioning nodes on top
	for (idx, node) in state.nodes.iter().enumerate() {
		let node_t = state.highlight.node_intensity(idx);
		if node_t <= 0.001 {
			continue;
		}
		let eased_t = smooth_step(node_t);
		let hover_t = smooth_step(state.highlight.hover_ring_intensity(idx));

		let highlight_radius = 1.0 + 0.2 * eased_t + 0.15 * eased_t * hover_t;
		let alpha = dim_alpha + (1.0 - dim_alpha) * eased_t;
		let radius_mult = dim_radius + (highlight_radius - dim_radius) * eased_t;

		draw_node(ctx, node, scale, theme, alpha, radius_mult);

		if hover_t > 0.01 {
			let radius = scale.node_radius * radius_mult * node.size;
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(
				&theme
					.node
					.hover_ring_color
					.with_alpha(0.7 * hover_t)
					.to_css(),
			);
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}
	}
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &NodeInfo,
	scale: &ScaledValues,
	theme: &Theme,
	alpha: f64,
	radius_mult: f64,
) {
	let (x, y) = (node.x, node.y);
	let radius = scale.node_radius * radius_mult * node.size;
	let base_color = Color::parse(&node.color);

	ctx.set_global_alpha(alpha);

	let gradient = theme
		.node
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
				.ok()
		})
		.flatten();

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &base_color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(0.7, &base_color.to_css());
			let _ = gradient.add_color_stop(1.0, &base_color.darken(0.2).to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&node.color),
	}
	ctx.fill();

	if theme.node.border_width > 0.0 {
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	if node.is_root {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&theme.node.root_ring_color.to_css());
		ctx.set_line_width(scale.ring_width);
		ctx.stroke();
	}

	if alpha > 0.5 {
		ctx.set_text_align("center");
		ctx.set_fill_style_str(&theme.label.color.to_css());
		ctx.set_font(&scale.label_font);
		let label_y = y + radius + scale.ring_offset + 12.0 / scale.k.max(0.5);
		let _ = ctx.fill_text(&node.id, x, label_y);

		if scale.title_alpha > 0.01 {
			let line = 12.0 / scale.k.max(0.5);
			ctx.set_global_alpha(alpha * scale.title_alpha);
			ctx.set_fill_style_str(&theme.label.secondary_color.to_css());
			ctx.set_font(&scale.title_font);
			let lines = node.title.clone().into_iter().chain(node.caption());
			for (i, text) in lines.enumerate() {
				let _ = ctx.fill_text(&text, x, label_y + line * (i + 1) as f64);
			}
		}
		ctx.set_text_align("start");
	}

	ctx.set_global_alpha(1.0);
}

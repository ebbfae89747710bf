use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::config::EditorConfig;
use super::state::EditorState;
use super::types::{NodeId, Point};

const EDGE_COLOR: &str = "black";
const PATH_COLOR: &str = "red";
const PENDING_PATH_COLOR: &str = "rgba(255, 0, 0, 0.25)";

/// Fill colour of a node: start, then stop, then armed, then plain.
pub fn node_fill(state: &EditorState, id: NodeId) -> &'static str {
	if state.selection().start() == Some(id) {
		"green"
	} else if state.selection().stop_label(id).is_some() {
		"red"
	} else if state.mode().armed() == Some(id) {
		"orange"
	} else {
		"blue"
	}
}

pub fn render(
	state: &EditorState,
	image: Option<&HtmlImageElement>,
	ctx: &CanvasRenderingContext2d,
	config: &EditorConfig,
) {
	ctx.set_fill_style_str("white");
	ctx.fill_rect(0.0, 0.0, state.viewport.width, state.viewport.height);
	if let (Some(bg), Some(img)) = (state.background(), image) {
		let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
			img,
			bg.offset_x,
			bg.offset_y,
			bg.width,
			bg.height,
		);
	}
	draw_edges(state, ctx);
	draw_path(state, ctx);
	draw_nodes(state, ctx, config.node_radius);
}

fn stroke_segment(ctx: &CanvasRenderingContext2d, a: Point, b: Point) {
	ctx.begin_path();
	ctx.move_to(a.x, a.y);
	ctx.line_to(b.x, b.y);
	ctx.stroke();
}

fn draw_edges(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let graph = state.graph();
	ctx.set_stroke_style_str(EDGE_COLOR);
	ctx.set_line_width(2.0);
	for edge in graph.edges() {
		if let Some((a, b)) = graph.segment(edge) {
			stroke_segment(ctx, a, b);
		}
	}
}

fn draw_path(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let graph = state.graph();
	let anim = state.animator();
	let position = |id: NodeId| graph.node(id).map(|n| n.position());

	// Faint preview of what is still to come.
	ctx.set_stroke_style_str(PENDING_PATH_COLOR);
	ctx.set_line_width(3.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(4.0),
	));
	for (from, to) in anim.pending_segments() {
		if let (Some(a), Some(b)) = (position(from), position(to)) {
			stroke_segment(ctx, a, b);
		}
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	ctx.set_stroke_style_str(PATH_COLOR);
	for (from, to) in anim.revealed_segments() {
		if let (Some(a), Some(b)) = (position(from), position(to)) {
			stroke_segment(ctx, a, b);
		}
	}
}

fn draw_nodes(state: &EditorState, ctx: &CanvasRenderingContext2d, radius: f64) {
	ctx.set_font("20px sans-serif");
	for node in state.graph().nodes() {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node_fill(state, node.id));
		ctx.fill();

		if let Some(label) = state.selection().stop_label(node.id) {
			ctx.set_fill_style_str("black");
			let _ = ctx.fill_text(&label.to_string(), node.x + radius, node.y - radius);
		}
	}
}

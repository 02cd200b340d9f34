use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::CanvasState;

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let graph = state.session.graph();
	let positions: Vec<_> = graph.nodes().map(|n| n.position).collect();

	ctx.set_stroke_style_str("rgba(200, 200, 200, 0.8)");
	ctx.set_line_width(2.0);
	for &(a, b) in graph.edges() {
		let (pa, pb) = (positions[a], positions[b]);
		ctx.begin_path();
		ctx.move_to(pa.x, pa.y);
		ctx.line_to(pb.x, pb.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let graph = state.session.graph();
	let palette = graph.palette();
	let radius = state.session.config().node_radius;

	for node in graph.nodes() {
		let (x, y) = (node.position.x, node.position.y);

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&palette.rgb(node.color).css());
		ctx.fill();

		if state.is_selected(node.id) {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0),
				&JsValue::from_f64(4.0),
			));
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 5.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("white");
			ctx.set_line_width(2.0);
			ctx.stroke();
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		} else if state.hover == Some(node.id) {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.5)");
			ctx.set_line_width(1.5);
			ctx.stroke();
		}

		ctx.set_fill_style_str("white");
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(&node.id.to_string(), x + radius + 3.0, y + 4.0);
	}
}

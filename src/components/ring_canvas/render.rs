use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Path2d};

use super::state::{KEY_RADIUS, NODE_RADIUS, RingCanvasState};
use crate::config::ORPHAN_KEY_COLOR;
use crate::ring::sector_path;

const RING_STROKE: &str = "#334155";
const KEY_STROKE: &str = "#0f172a";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &RingCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.size, state.size);
	if state.show_sectors {
		draw_sectors(state, ctx);
	}
	draw_ring(state, ctx);
	draw_links(state, ctx);
	draw_keys(state, ctx);
	draw_nodes(state, ctx);
	ctx.set_global_alpha(1.0);
}

fn draw_sectors(state: &RingCanvasState, ctx: &CanvasRenderingContext2d) {
	let center = state.center();
	ctx.set_global_alpha(0.3);
	for sector in state.sectors() {
		ctx.set_fill_style_str(&sector.color);
		if sector.is_full_turn() {
			ctx.begin_path();
			let _ = ctx.arc(center, center, state.radius, 0.0, 2.0 * PI);
			ctx.fill();
			continue;
		}
		let Ok(path) = Path2d::new_with_path_string(&sector_path(
			sector.start,
			sector.end,
			state.radius,
			center,
		)) else {
			continue;
		};
		ctx.fill_with_path_2d(&path);
	}
	ctx.set_global_alpha(1.0);
}

fn draw_ring(state: &RingCanvasState, ctx: &CanvasRenderingContext2d) {
	let center = state.center();
	ctx.set_stroke_style_str(RING_STROKE);
	ctx.set_line_width(2.0);
	if !state.show_sectors {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(4.0),
			&JsValue::from_f64(4.0),
		));
		ctx.set_line_dash_offset(-(state.flow_time * 6.0) % 8.0);
	}
	ctx.begin_path();
	let _ = ctx.arc(center, center, state.radius, 0.0, 2.0 * PI);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

/// Alpha for something that is (or is not) part of the hovered group.
fn focus_alpha(state: &RingCanvasState, highlighted: bool) -> f64 {
	let t = ease_out_cubic(state.hover.highlight_t);
	if !state.has_active_highlight() || highlighted {
		1.0
	} else {
		1.0 - 0.7 * t
	}
}

fn draw_links(state: &RingCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(1.0);
	for sprite in &state.keys {
		let Some(owner) = state.owner_of(sprite) else {
			continue;
		};
		let (from, to) = (state.key_point(sprite), state.node_point(owner));
		let alpha = 0.3 * ease_out_cubic(sprite.appear_t) * focus_alpha(state, state.is_highlighted_key(sprite));
		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(&owner.node.color);
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_keys(state: &RingCanvasState, ctx: &CanvasRenderingContext2d) {
	for sprite in &state.keys {
		let p = state.key_point(sprite);
		let color = state
			.owner_of(sprite)
			.map_or(ORPHAN_KEY_COLOR, |owner| owner.node.color.as_str());
		let alpha = focus_alpha(state, state.is_highlighted_key(sprite));

		if sprite.pulse_t > 0.0 {
			ctx.set_global_alpha(sprite.pulse_t * alpha);
			ctx.set_stroke_style_str(color);
			ctx.set_line_width(2.0);
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, KEY_RADIUS + 10.0 * (1.0 - sprite.pulse_t), 0.0, 2.0 * PI);
			ctx.stroke();
		}

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, KEY_RADIUS * ease_out_cubic(sprite.appear_t), 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
		ctx.set_stroke_style_str(KEY_STROKE);
		ctx.set_line_width(1.0);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &RingCanvasState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for sprite in &state.nodes {
		let p = state.node_point(sprite);
		let grow = ease_out_cubic(sprite.appear_t);
		let highlighted = state.is_highlighted_node(sprite);
		let radius = if highlighted {
			NODE_RADIUS * (1.0 + 0.2 * t) * grow
		} else {
			NODE_RADIUS * grow
		};
		if radius <= 0.0 {
			continue;
		}

		if highlighted && t > 0.01 {
			let glow_radius = radius * (1.4 + 0.6 * t);
			if let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, radius * 0.3, p.x, p.y, glow_radius) {
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", 0.35 * t));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(p.x, p.y, glow_radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_canvas_gradient(&gradient);
				ctx.fill();
			}
		}

		ctx.set_global_alpha(focus_alpha(state, highlighted) * grow);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&sprite.node.color);
		ctx.fill();
		ctx.set_stroke_style_str("white");
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str("white");
		ctx.set_font(&format!("bold {}px sans-serif", (radius * 0.7).max(8.0).round()));
		let _ = ctx.fill_text(&sprite.node.id, p.x, p.y);
	}
	ctx.set_global_alpha(1.0);
}

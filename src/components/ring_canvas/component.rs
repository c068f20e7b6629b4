use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::error::CanvasError;
use super::render;
use super::state::RingCanvasState;
use super::types::RingData;

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

/// Seconds advanced per animation frame.
const FRAME_DT: f64 = 0.016;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
	canvas
		.get_context("2d")
		.map_err(|err| CanvasError::ContextRequest(format!("{err:?}")))?
		.ok_or(CanvasError::NoContext)?
		.dyn_into()
		.map_err(|_| CanvasError::WrongContextType)
}

fn request_frame(callback: &FrameCallback) -> Result<(), CanvasError> {
	let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
	if let Some(ref cb) = *callback.borrow() {
		window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.map_err(|err| CanvasError::FrameRequest(format!("{err:?}")))?;
	}
	Ok(())
}

/// Once the component is gone, drop the frame callback held in `slot`.
/// The callback owns a clone of `slot`, so this breaks the cycle that would
/// otherwise keep it and the canvas state alive. Returns whether it stopped.
fn release_if_stopped<T>(running: &AtomicBool, slot: &RefCell<Option<T>>) -> bool {
	if running.load(Ordering::Relaxed) {
		return false;
	}
	slot.borrow_mut().take();
	true
}

fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		f64::from(ev.client_x()) - rect.left(),
		f64::from(ev.client_y()) - rect.top(),
	))
}

/// Animated hash ring: nodes on the circle, keys just inside it, each key
/// tinted and linked to its owner. Hover a node to pick out its keys.
#[component]
pub fn RingCanvas(
	#[prop(into)] data: Signal<RingData>,
	#[prop(default = 300.0)] size: f64,
	#[prop(default = 120.0)] radius: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<RingCanvasState>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let running = Arc::new(AtomicBool::new(true));
	let (state_init, animate_init, running_init) = (state.clone(), animate.clone(), running.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(size as u32);
		canvas.set_height(size as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("ring canvas disabled: {err}");
				return;
			}
		};
		*state_init.borrow_mut() = Some(RingCanvasState::new(&data.get_untracked(), size, radius));
		info!("ring canvas mounted at {size}px");

		let (state_anim, animate_inner, running_anim) =
			(state_init.clone(), animate_init.clone(), running_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if release_if_stopped(&running_anim, &animate_inner) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			if let Err(err) = request_frame(&animate_inner) {
				error!("ring animation stopped: {err}");
			}
		}));
		if let Err(err) = request_frame(&animate_init) {
			error!("ring animation not started: {err}");
		}
	});

	let state_sync = state.clone();
	Effect::new(move |_| {
		let data = data.get();
		if let Some(ref mut s) = *state_sync.borrow_mut() {
			s.sync(&data);
		}
	});

	on_cleanup(move || running.store(false, Ordering::Relaxed));

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="ring-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style:width=format!("{size}px")
			style:height=format!("{size}px")
		/>
	}
}

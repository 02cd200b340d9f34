use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::CanvasState;
use crate::coloring::{ClickOutcome, EngineConfig, RunSummary};

type Shared<T> = Rc<RefCell<Option<T>>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn event_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Canvas where clicks build a graph that is colored as it grows.
///
/// The run's totals are pushed to `summary` after every click and logged
/// once when the page unloads.
#[component]
pub fn ColoringCanvas(
	config: EngineConfig,
	#[prop(optional)] summary: Option<WriteSignal<Option<RunSummary>>>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Shared<CanvasState> = Rc::new(RefCell::new(None));
	let ctx: Shared<CanvasRenderingContext2d> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let unload_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let (state_init, ctx_init) = (state.clone(), ctx.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(context) = context_2d(&canvas) else {
			log::error!("2d canvas context unavailable");
			return;
		};
		let initial = match CanvasState::new(config, w, h) {
			Ok(s) => s,
			Err(err) => {
				log::error!("cannot start coloring session: {}", err);
				return;
			}
		};
		render::render(&initial, &context);
		if let Some(summary) = summary {
			summary.set(Some(initial.session.summary()));
		}
		*state_init.borrow_mut() = Some(initial);
		*ctx_init.borrow_mut() = Some(context);

		if fullscreen {
			let (state_resize, ctx_resize, canvas_resize) =
				(state_init.clone(), ctx_init.clone(), canvas.clone());
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let (Some(s), Some(c)) =
					(state_resize.borrow_mut().as_mut(), ctx_resize.borrow().as_ref())
				{
					s.resize(nw, nh);
					render::render(s, c);
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let state_unload = state_init.clone();
		*unload_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(s) = state_unload.borrow().as_ref() {
				info!("run finished: {}", s.session.summary());
			}
		}));
		if let Some(ref cb) = *unload_cb.borrow() {
			let _ = window
				.add_event_listener_with_callback("beforeunload", cb.as_ref().unchecked_ref());
		}
	});

	let (state_click, ctx_click) = (state.clone(), ctx.clone());
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = event_position(&canvas, &ev);

		if let (Some(s), Some(c)) =
			(state_click.borrow_mut().as_mut(), ctx_click.borrow().as_ref())
		{
			match s.click(x, y) {
				Some(ClickOutcome::Linked(report)) if report.failures() > 0 => {
					info!(
						"edge {} - {}: {} endpoint(s) left uncolored",
						report.first,
						report.second,
						report.failures()
					);
				}
				Some(outcome) => debug!("click at ({:.0}, {:.0}): {:?}", x, y, outcome),
				None => {}
			}
			render::render(s, c);
			if let Some(summary) = summary {
				summary.set(Some(s.session.summary()));
			}
		}
	};

	let (state_mm, ctx_mm) = (state.clone(), ctx.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = event_position(&canvas, &ev);

		if let (Some(s), Some(c)) = (state_mm.borrow_mut().as_mut(), ctx_mm.borrow().as_ref()) {
			let hovered = s.node_at_position(x, y);
			if s.set_hover(hovered) {
				render::render(s, c);
			}
		}
	};

	let (state_ml, ctx_ml) = (state.clone(), ctx.clone());
	let on_mouseleave = move |_: MouseEvent| {
		if let (Some(s), Some(c)) = (state_ml.borrow_mut().as_mut(), ctx_ml.borrow().as_ref()) {
			if s.set_hover(None) {
				render::render(s, c);
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="coloring-canvas"
			on:click=on_click
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; cursor: pointer;"
		/>
	}
}

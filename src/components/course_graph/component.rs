//! Leptos component wrapping the course graph canvas.
//!
//! The component creates an HTML canvas sized to its parent and wires mouse and
//! wheel events to the graph state. An animation loop runs via
//! `requestAnimationFrame`, advancing highlight and flow animations and
//! redrawing each frame. A new layout replaces the state in one step.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::callback::Callable;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use crate::layout::GraphLayout;

use super::render;
use super::scale::ScaleConfig;
use super::state::CourseGraphState;
use super::theme::Theme;

/// Frame time assumed by the animation loop.
const FRAME_DT: f64 = 0.016;

/// Bundles view state with visual configuration.
struct GraphContext {
	state: CourseGraphState,
	scale: ScaleConfig,
	theme: Theme,
}

type SharedContext = Rc<RefCell<Option<GraphContext>>>;

type Slot<T> = Rc<RefCell<Option<T>>>;

/// Callbacks that keep a mounted canvas running: the frame callback and the
/// window resize listener.
///
/// The frame callback holds a clone of these hooks so it can reschedule
/// itself, which is a reference cycle. [`CanvasHooks::release`] breaks it.
struct CanvasHooks<T> {
	frame: Slot<T>,
	resize: Slot<T>,
}

impl<T> Clone for CanvasHooks<T> {
	fn clone(&self) -> Self {
		Self {
			frame: self.frame.clone(),
			resize: self.resize.clone(),
		}
	}
}

impl<T> CanvasHooks<T> {
	fn new() -> Self {
		Self {
			frame: Rc::new(RefCell::new(None)),
			resize: Rc::new(RefCell::new(None)),
		}
	}

	/// Drop the frame callback and hand back the resize listener, which must
	/// stay alive until it has been detached from the window.
	fn release(&self) -> Option<T> {
		drop(self.frame.borrow_mut().take());
		self.resize.borrow_mut().take()
	}
}

/// Remove a resize listener from the window. The closure is dropped afterwards.
fn detach_resize(listener: Closure<dyn FnMut()>) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(e) =
		window.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
	{
		warn!("course-atlas: failed to remove resize listener: {:?}", e);
	}
}

/// Canvas-relative pointer position for a mouse event.
fn pointer_position(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?;
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Canvas size from the parent element, or the explicit height.
fn measure(canvas: &HtmlCanvasElement, height: Option<f64>) -> (f64, f64) {
	let parent = canvas.parent_element();
	let w = parent
		.as_ref()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0);
	let h = height.unwrap_or_else(|| {
		parent
			.as_ref()
			.map(|p| p.client_height() as f64)
			.filter(|h| *h > 0.0)
			.unwrap_or(600.0)
	});
	(w, h)
}

/// Renders a course dependency layout on a canvas.
///
/// Drag the background to pan, scroll to zoom, drag nodes to move them.
/// Clicking a node calls `on_select` with its course id.
#[component]
pub fn CourseGraphCanvas(
	#[prop(into)] layout: Signal<GraphLayout>,
	#[prop(optional)] theme: Option<Theme>,
	#[prop(optional)] on_select: Option<Callback<String>>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: SharedContext = Rc::new(RefCell::new(None));
	let hooks = CanvasHooks::<Closure<dyn FnMut()>>::new();
	let alive = Arc::new(AtomicBool::new(true));
	let theme = theme.unwrap_or_default();

	{
		let alive = alive.clone();
		on_cleanup(move || alive.store(false, Ordering::Relaxed));
	}

	let (context_init, alive_init) = (context.clone(), alive.clone());
	Effect::new(move |_| {
		let current = layout.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};

		if let Some(c) = context_init.borrow_mut().as_mut() {
			debug!("course-atlas: graph layout replaced ({} nodes)", current.nodes.len());
			c.state.replace_layout(&current, &c.theme);
			return;
		}

		let Some(window): Option<Window> = web_sys::window() else {
			return;
		};
		let (w, h) = measure(&canvas, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			return;
		};

		*context_init.borrow_mut() = Some(GraphContext {
			state: CourseGraphState::new(&current, w, h, &theme),
			scale: ScaleConfig::default(),
			theme: theme.clone(),
		});

		let (context_resize, canvas_resize, alive_resize) =
			(context_init.clone(), canvas.clone(), alive_init.clone());
		*hooks.resize.borrow_mut() = Some(Closure::new(move || {
			if !alive_resize.load(Ordering::Relaxed) {
				return;
			}
			let (nw, nh) = measure(&canvas_resize, height);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(c) = context_resize.borrow_mut().as_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(cb) = hooks.resize.borrow().as_ref() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// The frame callback owns the hooks from here on: the effect is disposed
		// on unmount, and the first frame after that tears everything down.
		let (context_anim, hooks_anim, alive_anim) =
			(context_init.clone(), hooks.clone(), alive_init.clone());
		*hooks.frame.borrow_mut() = Some(Closure::new(move || {
			if !alive_anim.load(Ordering::Relaxed) {
				if let Some(listener) = hooks_anim.release() {
					detach_resize(listener);
				}
				context_anim.borrow_mut().take();
				debug!("course-atlas: graph canvas released");
				return;
			}
			if let Some(c) = context_anim.borrow_mut().as_mut() {
				c.state.tick(FRAME_DT);
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let (Some(cb), Some(win)) = (hooks_anim.frame.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(cb) = hooks.frame.borrow().as_ref() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(c) = context_md.borrow_mut().as_mut() {
			c.state.pointer_down(x, y, &c.scale);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(c) = context_mm.borrow_mut().as_mut() {
			c.state.pointer_move(x, y, &c.scale);
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		// Release the borrow before running the callback; it may swap the layout.
		let clicked = context_mu
			.borrow_mut()
			.as_mut()
			.and_then(|c| c.state.pointer_up());
		if let (Some(id), Some(cb)) = (clicked, on_select) {
			debug!("course-atlas: graph node {} selected", id);
			cb.run(id);
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(c) = context_ml.borrow_mut().as_mut() {
			c.state.pointer_leave();
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(c) = context_wh.borrow_mut().as_mut() {
			c.state.zoom_at(x, y, ev.delta_y());
		}
	};

	let zoom_control = |context: SharedContext, zoom_in: bool| {
		move |_: MouseEvent| {
			if let Some(c) = context.borrow_mut().as_mut() {
				c.state.zoom_step(zoom_in);
			}
		}
	};
	let context_fit = context.clone();
	let on_fit = move |_: MouseEvent| {
		if let Some(c) = context_fit.borrow_mut().as_mut() {
			c.state.fit_to_view();
		}
	};

	view! {
		<div class="course-graph" style="position: relative;">
			<canvas
				node_ref=canvas_ref
				class="course-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			<div class="graph-controls">
				<button title="Zoom in" on:click=zoom_control(context.clone(), true)>"+"</button>
				<button title="Zoom out" on:click=zoom_control(context.clone(), false)>"−"</button>
				<button title="Fit view" on:click=on_fit>"Fit"</button>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	type Hook = Box<dyn FnMut()>;

	#[test]
	fn test_release_breaks_frame_cycle() {
		let hooks = CanvasHooks::<Hook>::new();
		let inner = hooks.clone();
		*hooks.frame.borrow_mut() = Some(Box::new(move || {
			let _ = &inner;
			let _ = inner.frame.borrow().is_some();
		}));
		*hooks.resize.borrow_mut() = Some(Box::new(|| {}));

		let frame = Rc::downgrade(&hooks.frame);
		let resize = Rc::downgrade(&hooks.resize);
		drop(hooks);
		// The frame callback keeps both slots alive through its own clone.
		let hooks = CanvasHooks {
			frame: frame.upgrade().expect("frame slot kept alive by its callback"),
			resize: resize.upgrade().expect("resize slot kept alive by the frame callback"),
		};

		let listener = hooks.release();
		assert!(listener.is_some());
		drop(hooks);
		assert!(frame.upgrade().is_none());
		assert!(resize.upgrade().is_none());
	}

	#[test]
	fn test_release_is_idempotent() {
		let hooks = CanvasHooks::<Hook>::new();
		*hooks.resize.borrow_mut() = Some(Box::new(|| {}));
		assert!(hooks.release().is_some());
		assert!(hooks.release().is_none());
		assert!(hooks.frame.borrow().is_none());
	}
}

//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component sizes its canvas to the viewport, seeds a [`ParticleField`]
//! and drives it from a `requestAnimationFrame` loop. Unmounting cancels the
//! pending frame and detaches the resize listener.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::field::ParticleField;
use super::render;
use super::theme::Theme;

/// Everything one animation-frame callback needs.
struct FrameLoop {
	field: Rc<RefCell<ParticleField>>,
	ctx: CanvasRenderingContext2d,
	config: FieldConfig,
	theme: Signal<Theme>,
	running: StoredValue<bool>,
	pending: StoredValue<Option<AnimationFrameRequestHandle>>,
}

impl FrameLoop {
	fn is_running(&self) -> bool {
		self.running.try_get_value().unwrap_or(false)
	}

	fn tick(&self) {
		let mut field = self.field.borrow_mut();
		if !field.advance(self.config.frame_stride) {
			return;
		}
		field.step();
		let _ = self
			.theme
			.try_with_untracked(|theme| render::draw_frame(&self.ctx, &field, &self.config, theme));
	}
}

fn schedule(frame: Rc<FrameLoop>) {
	if !frame.is_running() {
		return;
	}
	let next = frame.clone();
	match request_animation_frame_with_handle(move || {
		if !next.is_running() {
			return;
		}
		next.tick();
		schedule(next);
	}) {
		Ok(handle) => {
			let _ = frame.pending.try_set_value(Some(handle));
		}
		Err(err) => warn!("particle field: requestAnimationFrame failed: {err:?}"),
	}
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Renders the animated particle network behind the hero section.
///
/// `theme` is read on every rendered frame, so color-scheme changes apply
/// without restarting the animation. The canvas fades in once `loaded` is set.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] theme: Signal<Theme>,
	#[prop(into)] loaded: Signal<bool>,
	#[prop(optional)] config: Option<FieldConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default();
	let running = StoredValue::new(false);
	let pending = StoredValue::new(None::<AnimationFrameRequestHandle>);
	let resize_listener = StoredValue::new(None::<WindowListenerHandle>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if running.get_value() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some((w, h)) = web_sys::window().as_ref().and_then(viewport_size) else {
			warn!("particle field: viewport size unavailable, backdrop disabled");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("particle field: 2d context unavailable, backdrop disabled");
			return;
		};

		let field = ParticleField::seed(&config, w, h, js_sys::Math::random);
		debug!(
			"particle field: seeded {} particles on {}x{}",
			field.particles.len(),
			w,
			h
		);
		let field = Rc::new(RefCell::new(field));

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		let listener = window_event_listener(ev::resize, move |_| {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			field_resize.borrow_mut().resize(nw, nh);
			debug!("particle field: resized to {}x{}", nw, nh);
		});
		resize_listener.set_value(Some(listener));

		running.set_value(true);
		schedule(Rc::new(FrameLoop {
			field,
			ctx,
			config: config.clone(),
			theme,
			running,
			pending,
		}));
	});

	on_cleanup(move || {
		let _ = running.try_set_value(false);
		if let Some(Some(handle)) = pending.try_update_value(Option::take) {
			handle.cancel();
		}
		if let Some(Some(listener)) = resize_listener.try_update_value(Option::take) {
			listener.remove();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="neural-canvas"
			style=move || {
				format!("opacity: {}; transition: opacity 1.5s ease;", if loaded.get() { 1 } else { 0 })
			}
		/>
	}
}

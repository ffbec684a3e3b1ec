//! Leptos component hosting the particle field canvas.
//!
//! On mount the component acquires a WebGL context, builds a fresh randomized
//! pool and starts a `requestAnimationFrame` loop. Pointer and resize events
//! only write shared state; the next frame reads it. Everything is released
//! when the component's owner is disposed. If WebGL is unavailable the canvas
//! just shows the theme backdrop color.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::config::ParticleConfig;
use super::palette::Palette;
use super::particles::Viewport;
use super::render::{GlSurface, PointSurface, RenderError};
use super::state::FieldState;
use crate::dom;
use crate::theme::ThemeMode;

/// Simulation state, the surface it draws to and the pending frame.
struct FieldContext {
	state: FieldState,
	surface: GlSurface,
	theme: Signal<ThemeMode>,
	context_lost: bool,
	frame: Option<AnimationFrame>,
}

type SharedContext = Rc<RefCell<FieldContext>>;

/// Live resources of a mounted field. Dropping it tears the field down.
struct FieldRuntime {
	context: SharedContext,
	_listeners: Vec<EventListener>,
}

impl FieldRuntime {
	fn mount(
		canvas: &HtmlCanvasElement,
		config: &ParticleConfig,
		theme: Signal<ThemeMode>,
	) -> Result<Self, RenderError> {
		let window = web_sys::window().ok_or(RenderError::ContextUnavailable)?;
		let (w, h) = dom::viewport_size().unwrap_or((800.0, 600.0));
		let viewport = Viewport::new(w, h);
		let pixel_ratio = dom::device_pixel_ratio().min(config.max_pixel_ratio);

		let mut surface = GlSurface::new(canvas)?;
		surface.resize(viewport, pixel_ratio);

		let mut rng = fastrand::Rng::with_seed(js_sys::Date::now().to_bits());
		let state = FieldState::new(config, viewport, &mut rng);
		info!(
			"particles: mounted {} particles on {}x{} (pixel ratio {})",
			state.field.len(),
			w,
			h,
			pixel_ratio
		);

		let context = Rc::new(RefCell::new(FieldContext {
			state,
			surface,
			theme,
			context_lost: false,
			frame: None,
		}));

		let (context_resize, max_pixel_ratio) = (context.clone(), config.max_pixel_ratio);
		let on_resize = EventListener::new(&window, "resize", move |_| {
			let Some((nw, nh)) = dom::viewport_size() else {
				return;
			};
			let viewport = Viewport::new(nw, nh);
			let ratio = dom::device_pixel_ratio().min(max_pixel_ratio);
			let mut c = context_resize.borrow_mut();
			c.surface.resize(viewport, ratio);
			c.state.resize(viewport);
			debug!("particles: resized to {}x{}", nw, nh);
		});

		let context_pointer = context.clone();
		let on_pointer = EventListener::new(&window, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			context_pointer
				.borrow_mut()
				.state
				.set_pointer_client(ev.client_x() as f64, ev.client_y() as f64);
		});

		let context_gl = context.clone();
		let on_context_lost = EventListener::new(canvas, "webglcontextlost", move |_| {
			context_gl.borrow_mut().context_lost = true;
		});

		schedule_frame(&context);

		Ok(Self {
			context,
			_listeners: vec![on_resize, on_pointer, on_context_lost],
		})
	}
}

impl Drop for FieldRuntime {
	fn drop(&mut self) {
		// The pending frame holds a clone of the context.
		let pending = self.context.borrow_mut().frame.take();
		drop(pending);
		info!("particles: torn down");
	}
}

fn schedule_frame(context: &SharedContext) {
	let next = Rc::clone(context);
	let handle = request_animation_frame(move |timestamp| on_frame(&next, timestamp));
	context.borrow_mut().frame = Some(handle);
}

fn on_frame(context: &SharedContext, timestamp: f64) {
	{
		let mut c = context.borrow_mut();
		c.frame.take();
		if c.context_lost || c.surface.is_context_lost() {
			warn!("particles: WebGL context lost, animation stopped");
			return;
		}
		let mode = c.theme.get_untracked();
		let FieldContext { state, surface, .. } = &mut *c;
		state.render_frame(timestamp, mode, surface);
	}
	schedule_frame(context);
}

/// Full-viewport decorative particle field, stacked behind page content.
///
/// `theme` is polled every frame, so a toggle shows up on the next frame
/// without rebuilding the pool. `config` defaults to [`ParticleConfig::default`].
#[component]
pub fn ParticleBackground(
	#[prop(into)] theme: Signal<ThemeMode>,
	#[prop(optional)] config: Option<ParticleConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime: StoredValue<Option<FieldRuntime>, LocalStorage> = StoredValue::new_local(None);
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if runtime.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let config = match config.validate() {
			Ok(()) => config.clone(),
			Err(e) => {
				warn!("particles: {}; using defaults", e);
				ParticleConfig::default()
			}
		};
		match FieldRuntime::mount(&canvas, &config, theme) {
			Ok(field) => runtime.set_value(Some(field)),
			Err(e) => warn!("particles: {}; background disabled", e),
		}
	});

	let backdrop = move || Palette::for_mode(theme.get()).backdrop.to_css();

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			aria-hidden="true"
			style:background-color=backdrop
		/>
	}
}

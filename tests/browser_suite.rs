//! Browser-only behavior: WebGL bring-up, DOM listeners and frame callbacks.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]
#![allow(unused_crate_dependencies)]

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Promise;
use leptos::prelude::*;
use portfolio_web::components::particle_field::render::GlSurface;
use portfolio_web::components::particle_field::{Color, PointSurface, RenderError, Viewport};
use portfolio_web::theme::dom;
use portfolio_web::{AmbientLight, ThemeMode};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

async fn next_frame() {
	let promise = Promise::new(&mut |resolve, _| {
		let _ = web_sys::window()
			.expect("window")
			.request_animation_frame(&resolve);
	});
	JsFuture::from(promise).await.expect("animation frame");
}

fn document() -> web_sys::Document {
	web_sys::window()
		.and_then(|w| w.document())
		.expect("document")
}

#[wasm_bindgen_test]
fn point_shaders_compile_on_a_fresh_canvas() {
	let canvas: HtmlCanvasElement = document()
		.create_element("canvas")
		.expect("canvas")
		.dyn_into()
		.expect("canvas element");
	let mut surface = match GlSurface::new(&canvas) {
		Ok(surface) => surface,
		// Headless runners without GPU support.
		Err(RenderError::ContextUnavailable) => return,
		Err(e) => panic!("pipeline failed: {e}"),
	};
	surface.resize(Viewport::new(320.0, 200.0), 2.0);
	assert_eq!(canvas.width(), 640);
	assert_eq!(canvas.height(), 400);
	surface.clear(Color::rgb(0.0, 0.0, 0.0));
	assert!(!surface.is_context_lost());
}

#[wasm_bindgen_test(async)]
async fn theme_update_runs_once_inside_view_transition() {
	let runs = Rc::new(Cell::new(0));
	let counted = runs.clone();
	let done = dom::with_view_transition(move || counted.set(counted.get() + 1));
	if let Some(done) = done {
		JsFuture::from(done).await.expect("update callback");
	}
	assert_eq!(runs.get(), 1);
}

#[wasm_bindgen_test]
fn toggle_origin_lands_on_the_root_element() {
	dom::set_toggle_origin(12.0, 34.5);
	let root: HtmlElement = document()
		.document_element()
		.expect("root")
		.dyn_into()
		.expect("html element");
	let style = HtmlElement::style(&root);
	assert_eq!(style.get_property_value("--x").expect("--x"), "12px");
	assert_eq!(style.get_property_value("--y").expect("--y"), "34.5px");
}

#[wasm_bindgen_test]
fn root_carries_exactly_one_theme_class() {
	dom::apply_root_class(ThemeMode::Dark);
	dom::apply_root_class(ThemeMode::Light);
	let classes = document().document_element().expect("root").class_list();
	assert!(classes.contains("light"));
	assert!(!classes.contains("dark"));
}

#[wasm_bindgen_test(async)]
async fn ambient_light_follows_the_pointer() {
	let _mounted = mount_to_body(|| view! { <AmbientLight /> });
	// Let the mount effect attach its window listener.
	next_frame().await;

	let init = MouseEventInit::new();
	init.set_client_x(120);
	init.set_client_y(80);
	let ev = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).expect("mouse event");
	web_sys::window()
		.expect("window")
		.dispatch_event(&ev)
		.expect("dispatch");

	next_frame().await;
	next_frame().await;

	let light: HtmlElement = document()
		.query_selector(".ambient-light")
		.expect("selector")
		.expect("light element")
		.dyn_into()
		.expect("html element");
	let style = HtmlElement::style(&light);
	assert_eq!(style.get_property_value("left").expect("left"), "120px");
	assert_eq!(style.get_property_value("top").expect("top"), "80px");
}

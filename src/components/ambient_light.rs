//! Soft light that trails the pointer across the page.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::spring_driver::SpringDriver;

const STIFFNESS: f64 = 100.0;
const DAMPING: f64 = 25.0;

/// Fixed, pointer-following glow. Styling comes from the `.ambient-light` class.
#[component]
pub fn AmbientLight() -> impl IntoView {
	let light_ref = NodeRef::<leptos::html::Div>::new();
	let listener: StoredValue<Option<EventListener>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		if light_ref.get().is_none() || listener.with_value(Option::is_some) {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};

		let driver = SpringDriver::new(STIFFNESS, DAMPING, move |x, y| {
			let Some(el) = light_ref.get_untracked() else {
				return;
			};
			// `leptos::prelude` brings a `style` builder into scope for elements.
			let style = HtmlElement::style(&el);
			let _ = style.set_property("left", &format!("{x}px"));
			let _ = style.set_property("top", &format!("{y}px"));
		});
		let seen_pointer = Rc::new(Cell::new(false));

		let on_move = EventListener::new(&window, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
			if !seen_pointer.replace(true) {
				driver.snap(x, y);
			}
			driver.set_target(x, y);
		});
		listener.set_value(Some(on_move));
	});

	view! { <div node_ref=light_ref class="ambient-light" aria-hidden="true" /> }
}

//! Card with a soft highlight that follows the pointer across its surface.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Radius of the highlight circle, in pixels.
const SPOTLIGHT_RADIUS: u32 = 600;

/// Background for the highlight layer centred on card-local `(x, y)`.
pub fn spotlight_background(x: f64, y: f64) -> String {
	format!(
		"radial-gradient({SPOTLIGHT_RADIUS}px circle at {x}px {y}px, var(--spotlight-color), transparent 40%)"
	)
}

/// Pointer position relative to the element the handler is attached to.
pub(crate) fn local_pointer(ev: &MouseEvent) -> Option<(f64, f64, f64, f64)> {
	let el = ev.current_target()?.dyn_into::<Element>().ok()?;
	let rect = el.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
		rect.width(),
		rect.height(),
	))
}

#[component]
pub fn SpotlightCard(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
	let position = RwSignal::new((0.0, 0.0));
	let lit = RwSignal::new(false);

	let on_mousemove = move |ev: MouseEvent| {
		if let Some((x, y, _, _)) = local_pointer(&ev) {
			position.set((x, y));
		}
	};

	view! {
		<div
			class=format!("spotlight-card {class}")
			on:mousemove=on_mousemove
			on:mouseenter=move |_| lit.set(true)
			on:mouseleave=move |_| lit.set(false)
		>
			<div
				class="spotlight-layer"
				aria-hidden="true"
				style:opacity=move || if lit.get() { "1" } else { "0" }
				style:background=move || {
					let (x, y) = position.get();
					spotlight_background(x, y)
				}
			/>
			<div class="spotlight-content">{children()}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gradient_is_centred_on_the_pointer() {
		let bg = spotlight_background(12.5, 40.0);
		assert!(bg.starts_with("radial-gradient(600px circle at 12.5px 40px"));
		assert!(bg.ends_with("transparent 40%)"));
	}
}

//! Button-like element that leans toward the pointer while hovered.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent};

use super::spring_driver::SpringDriver;

/// Fraction of the pointer's offset from centre the element follows.
const PULL: f64 = 0.3;
const STIFFNESS: f64 = 150.0;
const DAMPING: f64 = 15.0;

/// Offset an element of the given rect should take toward `(client_x, client_y)`.
pub fn magnetic_offset(
	client_x: f64,
	client_y: f64,
	left: f64,
	top: f64,
	width: f64,
	height: f64,
) -> (f64, f64) {
	let dx = client_x - left - width / 2.0;
	let dy = client_y - top - height / 2.0;
	(dx * PULL, dy * PULL)
}

fn is_external(href: &str) -> bool {
	href.starts_with("http")
}

/// Wraps `children` in a magnetic `<a>` when `href` is set, otherwise a `<div>`.
///
/// External links open in a new tab.
#[component]
pub fn MagneticButton(
	children: Children,
	#[prop(optional, into)] href: Option<String>,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let class = format!("magnetic-element {class}");
	let target: Rc<RefCell<Option<HtmlElement>>> = Rc::default();

	let apply_target = target.clone();
	let driver = Rc::new(SpringDriver::new(STIFFNESS, DAMPING, move |x, y| {
		if let Some(el) = apply_target.borrow().as_ref() {
			let _ = HtmlElement::style(el).set_property("transform", &format!("translate({x}px, {y}px)"));
		}
	}));

	let (driver_move, target_move) = (driver.clone(), target.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(el) = ev
			.current_target()
			.and_then(|t| t.dyn_into::<Element>().ok())
		else {
			return;
		};
		let rect = el.get_bounding_client_rect();
		if target_move.borrow().is_none() {
			*target_move.borrow_mut() = el.dyn_into::<HtmlElement>().ok();
		}
		let (x, y) = magnetic_offset(
			ev.client_x() as f64,
			ev.client_y() as f64,
			rect.left(),
			rect.top(),
			rect.width(),
			rect.height(),
		);
		driver_move.set_target(x, y);
	};
	let on_mouseleave = move |_: MouseEvent| {
		driver.set_target(0.0, 0.0);
	};

	match href {
		Some(href) => {
			let external = is_external(&href);
			view! {
				<a
					href=href
					target=external.then_some("_blank")
					rel=external.then_some("noopener noreferrer")
					class=class
					on:mousemove=on_mousemove
					on:mouseleave=on_mouseleave
				>
					{children()}
				</a>
			}
			.into_any()
		}
		None => view! {
			<div class=class on:mousemove=on_mousemove on:mouseleave=on_mouseleave>
				{children()}
			</div>
		}
		.into_any(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centred_pointer_has_no_pull() {
		assert_eq!(magnetic_offset(150.0, 70.0, 100.0, 50.0, 100.0, 40.0), (0.0, 0.0));
	}

	#[test]
	fn pull_is_a_fraction_of_offset() {
		let (x, y) = magnetic_offset(200.0, 50.0, 100.0, 50.0, 100.0, 40.0);
		assert!((x - 15.0).abs() < 1e-12);
		assert!((y + 6.0).abs() < 1e-12);
	}

	#[test]
	fn only_absolute_links_are_external() {
		assert!(is_external("https://github.com"));
		assert!(!is_external("#contact"));
		assert!(!is_external("/resume.pdf"));
	}
}

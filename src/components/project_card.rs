//! Project tile that tilts in 3D toward the pointer.

use leptos::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use super::spotlight_card::{SpotlightCard, local_pointer};
use super::spring_driver::SpringDriver;
use crate::content::Project;

const STIFFNESS: f64 = 100.0;
const DAMPING: f64 = 20.0;
/// Rotation at the card's edge, in degrees.
const MAX_TILT: f64 = 10.0;

/// Pointer position over a `width` x `height` box, as fractions in
/// `[-0.5, 0.5]` from its centre.
pub fn pointer_fraction(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
	if width <= 0.0 || height <= 0.0 {
		return (0.0, 0.0);
	}
	(x / width - 0.5, y / height - 0.5)
}

/// `(rotateX, rotateY)` in degrees for a pointer fraction.
///
/// The card leans toward the pointer: a pointer above centre tips the top edge
/// away from the viewer.
pub fn tilt_degrees(x_frac: f64, y_frac: f64) -> (f64, f64) {
	(-MAX_TILT * y_frac, MAX_TILT * x_frac)
}

/// "Project 01", "Project 02", ...
pub fn project_label(index: usize) -> String {
	format!("Project {:02}", index + 1)
}

#[component]
pub fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
	let card_ref = NodeRef::<leptos::html::Div>::new();

	let driver = StoredValue::new_local(SpringDriver::new(STIFFNESS, DAMPING, move |x, y| {
		let Some(el) = card_ref.get_untracked() else {
			return;
		};
		let (rx, ry) = tilt_degrees(x, y);
		let _ = HtmlElement::style(&el).set_property(
			"transform",
			&format!("perspective(1000px) rotateX({rx}deg) rotateY({ry}deg)"),
		);
	}));

	let on_mousemove = move |ev: MouseEvent| {
		if let Some((x, y, w, h)) = local_pointer(&ev) {
			let (fx, fy) = pointer_fraction(x, y, w, h);
			driver.with_value(|d| d.set_target(fx, fy));
		}
	};
	let on_mouseleave = move |_: MouseEvent| driver.with_value(|d| d.set_target(0.0, 0.0));

	let tech = project
		.tech
		.iter()
		.map(|t| view! { <span class="tech-tag">{*t}</span> })
		.collect_view();

	view! {
		<div
			node_ref=card_ref
			class="project-card"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
		>
			<SpotlightCard class="project-card-inner">
				<div class="project-head">
					<span class="project-label">{project_label(index)}</span>
					<span class="project-arrow" aria-hidden="true">"\u{2197}"</span>
				</div>
				<h3 class="project-title">{project.title}</h3>
				<p class="muted">{project.description}</p>
				<div class="tech-tags">{tech}</div>
			</SpotlightCard>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centre_is_flat() {
		let (fx, fy) = pointer_fraction(150.0, 100.0, 300.0, 200.0);
		assert_eq!((fx, fy), (0.0, 0.0));
		assert_eq!(tilt_degrees(fx, fy), (-0.0, 0.0));
	}

	#[test]
	fn corner_tilts_toward_pointer() {
		let (fx, fy) = pointer_fraction(300.0, 0.0, 300.0, 200.0);
		let (rx, ry) = tilt_degrees(fx, fy);
		assert!((rx - 5.0).abs() < 1e-12);
		assert!((ry - 5.0).abs() < 1e-12);
	}

	#[test]
	fn empty_box_does_not_divide_by_zero() {
		assert_eq!(pointer_fraction(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
	}

	#[test]
	fn labels_are_one_based_and_padded() {
		assert_eq!(project_label(0), "Project 01");
		assert_eq!(project_label(11), "Project 12");
	}
}

//! Small browser queries shared by the components.
//!
//! Listener and frame lifetimes are handled with `gloo`: components hold a
//! [`gloo::events::EventListener`] or an `Option<AnimationFrame>` and drop it
//! to unregister.

use web_sys::Element;

/// Window inner size in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
	let window = web_sys::window()?;
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// `window.devicePixelRatio`, or 1.0 outside a browser.
pub fn device_pixel_ratio() -> f64 {
	web_sys::window()
		.map(|w| w.device_pixel_ratio())
		.filter(|r| *r > 0.0)
		.unwrap_or(1.0)
}

/// Whether a box spanning `top..bottom` (client pixels) overlaps a viewport of
/// `viewport_height`, shrunk by `margin` on both edges.
pub fn overlaps_viewport(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
	bottom > margin && top < viewport_height - margin
}

/// [`overlaps_viewport`] for a live element.
pub fn element_in_view(element: &Element, margin: f64) -> bool {
	let Some((_, height)) = viewport_size() else {
		return false;
	};
	let rect = element.get_bounding_client_rect();
	overlaps_viewport(rect.top(), rect.bottom(), height, margin)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn box_inside_viewport_is_visible() {
		assert!(overlaps_viewport(100.0, 300.0, 800.0, 100.0));
	}

	#[test]
	fn margin_shrinks_the_viewport() {
		// Only the top 50px of the box is on screen.
		assert!(overlaps_viewport(750.0, 900.0, 800.0, 0.0));
		assert!(!overlaps_viewport(750.0, 900.0, 800.0, 100.0));
		// Box scrolled above the top edge.
		assert!(!overlaps_viewport(-400.0, -10.0, 800.0, 0.0));
	}
}

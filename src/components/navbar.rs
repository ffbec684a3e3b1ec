//! Top navigation capsule with section links, the theme toggle and a
//! slide-in menu for narrow screens.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::content::NAV_ITEMS;
use crate::theme::{ThemeHandle, ThemeMode, dom};

/// Icon offered by the toggle: the mode it switches *to*.
fn toggle_icon(mode: ThemeMode) -> &'static str {
	match mode {
		ThemeMode::Dark => "\u{2600}",
		ThemeMode::Light => "\u{263E}",
	}
}

#[component]
pub fn Navbar(#[prop(into)] mode: Signal<ThemeMode>, theme: ThemeHandle) -> impl IntoView {
	let menu_open = RwSignal::new(false);

	let on_toggle = move |ev: MouseEvent| {
		if let Some(button) = ev
			.current_target()
			.and_then(|t| t.dyn_into::<Element>().ok())
		{
			let rect = button.get_bounding_client_rect();
			dom::set_toggle_origin(
				rect.left() + rect.width() / 2.0,
				rect.top() + rect.height() / 2.0,
			);
		}
		let theme = theme.clone();
		dom::with_view_transition(move || {
			theme.borrow_mut().toggle();
		});
	};

	let links = NAV_ITEMS
		.iter()
		.map(|item| {
			view! { <a href=item.href class="nav-link">{item.label}</a> }
		})
		.collect_view();

	let drawer_links = NAV_ITEMS
		.iter()
		.map(|item| {
			view! {
				<a href=item.href class="drawer-link" on:click=move |_| menu_open.set(false)>
					{item.label}
				</a>
			}
		})
		.collect_view();

	view! {
		<nav class="navbar">
			<div class="navbar-capsule">
				<a href="#" class="navbar-logo">"SR"<span class="muted">"."</span></a>
				<div class="navbar-links">{links}</div>
				<div class="navbar-actions">
					<button
						class="icon-button theme-toggle"
						aria-label="Toggle theme"
						on:click=on_toggle
					>
						{move || toggle_icon(mode.get())}
					</button>
					<button
						class="icon-button menu-trigger"
						aria-label="Open menu"
						aria-expanded=move || menu_open.get().to_string()
						on:click=move |_| menu_open.set(true)
					>
						"\u{2630}"
					</button>
				</div>
			</div>
		</nav>
		<div class="drawer" class:open=move || menu_open.get()>
			<div class="drawer-backdrop" on:click=move |_| menu_open.set(false) />
			<div class="drawer-panel">
				<button
					class="icon-button drawer-close"
					aria-label="Close menu"
					on:click=move |_| menu_open.set(false)
				>
					"\u{2715}"
				</button>
				<nav class="drawer-links">{drawer_links}</nav>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn icon_offers_the_other_mode() {
		assert_eq!(toggle_icon(ThemeMode::Dark), "\u{2600}");
		assert_eq!(toggle_icon(ThemeMode::Light), "\u{263E}");
	}
}

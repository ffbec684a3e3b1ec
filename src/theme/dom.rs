//! Browser glue for the theme: platform preference, root class, persistence.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use super::{LocalPreferences, MemoryPreferences, ThemeMode, ThemeStore};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The platform's ambient color-scheme preference, if it reports one.
pub fn ambient_preference() -> Option<ThemeMode> {
	let window = web_sys::window()?;
	let query = window.match_media(DARK_SCHEME_QUERY).ok()??;
	Some(if query.matches() {
		ThemeMode::Dark
	} else {
		ThemeMode::Light
	})
}

/// Build the store from `localStorage`, falling back to session-only memory.
pub fn open_store() -> ThemeStore {
	let ambient = ambient_preference();
	match LocalPreferences::open() {
		Ok(prefs) => ThemeStore::load(prefs, ambient),
		Err(e) => {
			warn!("theme: {}; preference will not survive this session", e);
			ThemeStore::load(MemoryPreferences::new(), ambient)
		}
	}
}

fn root_element() -> Option<HtmlElement> {
	web_sys::window()?
		.document()?
		.document_element()?
		.dyn_into::<HtmlElement>()
		.ok()
}

/// Put exactly one of `light` / `dark` on the `<html>` element's class list.
pub fn apply_root_class(mode: ThemeMode) {
	let Some(root) = root_element() else {
		return;
	};
	let classes = root.class_list();
	let _ = classes.remove_2(ThemeMode::Light.as_str(), ThemeMode::Dark.as_str());
	let _ = classes.add_1(mode.as_str());
}

/// Record where a toggle was triggered, in viewport pixels, as the `--x` and
/// `--y` custom properties consumed by the theme transition stylesheet.
pub fn set_toggle_origin(x: f64, y: f64) {
	let Some(root) = root_element() else {
		return;
	};
	let style = root.style();
	let _ = style.set_property("--x", &format!("{x}px"));
	let _ = style.set_property("--y", &format!("{y}px"));
}

/// Run `update` inside `document.startViewTransition`, so the stylesheet can
/// animate from the old theme to the new one. Browsers without the API run it
/// immediately.
///
/// Returns the transition's `updateCallbackDone` promise when one started.
pub fn with_view_transition(update: impl FnOnce() + 'static) -> Option<Promise> {
	let update = Rc::new(RefCell::new(Some(update)));
	let run = {
		let update = update.clone();
		move || {
			if let Some(update) = update.borrow_mut().take() {
				update();
			}
		}
	};

	let transition = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|document| {
			let start = Reflect::get(&document, &"startViewTransition".into())
				.ok()?
				.dyn_into::<Function>()
				.ok()?;
			let callback = Closure::once_into_js(run.clone());
			match start.call1(&document, &callback) {
				Ok(transition) => Some(transition),
				Err(e) => {
					debug!("theme: view transition refused: {:?}", e);
					None
				}
			}
		});

	match transition {
		Some(transition) => Reflect::get(&transition, &"updateCallbackDone".into())
			.ok()
			.and_then(|done| done.dyn_into::<Promise>().ok()),
		None => {
			run();
			None
		}
	}
}

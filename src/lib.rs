//! portfolio-web: single-page portfolio with an animated WebGL backdrop.
//!
//! The page is a Leptos CSR app. Behind the content sits a pseudo-3D particle
//! field drawn with WebGL point sprites; a light/dark theme store drives both
//! the page chrome and the renderer's palette.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod dom;
pub mod motion;
pub mod theme;

pub use components::ambient_light::AmbientLight;
pub use components::magnetic_button::MagneticButton;
pub use components::navbar::Navbar;
pub use components::particle_field::{ParticleBackground, ParticleConfig};
pub use components::sections::{about::About, contact::Contact, hero::Hero, projects::Projects};
pub use theme::{ThemeHandle, ThemeMode, ThemeStore};

// Only the browser suite under tests/ uses these.
#[cfg(test)]
use {wasm_bindgen_futures as _, wasm_bindgen_test as _};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Load particle overrides from a script element with id="particle-config".
/// Expected format: a JSON object with any subset of [`ParticleConfig`] fields.
fn load_particle_config() -> Option<ParticleConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match ParticleConfig::from_json(&json_text) {
		Ok(config) => {
			info!("particles: loaded config with {} particles", config.count);
			Some(config)
		}
		Err(e) => {
			warn!("particles: {}; using defaults", e);
			None
		}
	}
}

/// Main application component.
/// Owns the theme store and lays out the backdrop, chrome and page sections.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let store: ThemeHandle = Rc::new(RefCell::new(theme::dom::open_store()));
	let initial = store.borrow().mode();
	theme::dom::apply_root_class(initial);

	let mode = RwSignal::new(initial);
	store.borrow_mut().subscribe(move |next| {
		theme::dom::apply_root_class(next);
		mode.set(next);
	});

	let config = load_particle_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=content::SITE.title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=content::SITE.description />
		<Meta property="og:title" content=content::SITE.title />
		<Meta property="og:description" content=content::SITE.description />
		<Meta property="og:url" content=content::SITE.url />
		<Meta property="og:image" content=content::SITE.image />
		<Link rel="canonical" href=content::SITE.url />

		<ParticleBackground theme=mode config=config />
		<AmbientLight />
		<Navbar mode=mode theme=store />

		<main class="page">
			<Hero />
			<About />
			<Projects />
			<Contact />
		</main>
	}
}

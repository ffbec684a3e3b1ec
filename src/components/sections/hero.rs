use leptos::prelude::*;

use crate::components::split_text::SplitText;
use crate::content::{FIRST_NAME, LAST_NAME, LOCATION, ROLE, TAGLINE};

/// When the name starts to animate in, in seconds after load.
const NAME_DELAY: f64 = 0.7;

#[component]
pub fn Hero() -> impl IntoView {
	view! {
		<section id="hero" class="hero">
			<span class="section-badge hero-role">{ROLE}</span>
			<h1 class="hero-name">
				<SplitText text=FIRST_NAME delay=NAME_DELAY />
				<br />
				<SplitText text=LAST_NAME delay=NAME_DELAY class="muted" />
			</h1>
			<p class="hero-tagline muted">{TAGLINE}</p>
			<p class="hero-location">"\u{2316} "{LOCATION}</p>
			<a href="#about" class="scroll-indicator" aria-label="Scroll to about">
				"Scroll"
				<span aria-hidden="true">"\u{2193}"</span>
			</a>
		</section>
	}
}

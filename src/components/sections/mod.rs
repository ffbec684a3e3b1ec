//! Top-level page sections, in page order.

use leptos::prelude::*;

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;

/// Badge plus two-line heading; the second line is muted.
#[component]
pub fn SectionHeader(badge: &'static str, lead: &'static str, tail: &'static str) -> impl IntoView {
	view! {
		<header class="section-header">
			<span class="section-badge">{badge}</span>
			<h2 class="section-title">
				{lead}
				<br />
				<span class="muted">{tail}</span>
			</h2>
		</header>
	}
}

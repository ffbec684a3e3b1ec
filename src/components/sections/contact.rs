use leptos::prelude::*;

use super::SectionHeader;
use crate::components::magnetic_button::MagneticButton;
use crate::components::spotlight_card::SpotlightCard;
use crate::content::{CONTACT_DETAILS, EMAIL_HREF, FULL_NAME, SOCIALS};

/// Copyright line for the footer.
pub fn copyright(year: u32) -> String {
	format!("\u{00A9} {year} {FULL_NAME}. All rights reserved.")
}

#[component]
pub fn Contact() -> impl IntoView {
	let details = CONTACT_DETAILS
		.iter()
		.map(|d| {
			view! {
				<div class="contact-detail">
					<span class="contact-glyph" aria-hidden="true">{d.glyph}</span>
					<div>
						<p class="contact-label">{d.label}</p>
						<p class="muted">{d.value}</p>
					</div>
				</div>
			}
		})
		.collect_view();

	let socials = SOCIALS
		.iter()
		.map(|s| {
			view! {
				<MagneticButton href=s.href class="social-link">
					<span aria-label=s.label>{s.glyph}</span>
				</MagneticButton>
			}
		})
		.collect_view();

	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<section id="contact">
			<SectionHeader badge="Contact" lead="GET" tail="CONNECTED." />
			<SpotlightCard class="card contact-card">
				<p class="contact-lead">
					"Currently open to new opportunities. Let's build something remarkable together."
				</p>
				<MagneticButton href=EMAIL_HREF class="cta cta-solid">
					"Get in touch "
					<span aria-hidden="true">"\u{2197}"</span>
				</MagneticButton>
				<hr class="divider" />
				<div class="contact-details">{details}</div>
				<div class="socials">{socials}</div>
			</SpotlightCard>
		</section>
		<footer class="footer">
			<span class="muted">{copyright(year)}</span>
			<span class="muted">"Designed & Built with \u{2665}"</span>
		</footer>
	}
}

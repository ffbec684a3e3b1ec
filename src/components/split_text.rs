//! Headline whose letters rise into place one after another.

use leptos::prelude::*;

/// Delay between consecutive letters, in seconds.
const LETTER_STAGGER: f64 = 0.03;

/// Each character of `text` with its entrance delay.
///
/// Spaces become no-break spaces so the inline-block spans keep their width.
pub fn split_letters(text: &str, delay: f64) -> Vec<(char, f64)> {
	text.chars()
		.enumerate()
		.map(|(i, c)| {
			let c = if c == ' ' { '\u{00A0}' } else { c };
			(c, delay + i as f64 * LETTER_STAGGER)
		})
		.collect()
}

#[component]
pub fn SplitText(
	text: &'static str,
	#[prop(optional)] delay: f64,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let letters = split_letters(text, delay)
		.into_iter()
		.map(|(c, d)| {
			view! { <span class="split-letter" style=format!("animation-delay: {d}s")>{c.to_string()}</span> }
		})
		.collect_view();

	view! {
		<span class=format!("split-text {class}") aria-label=text>
			<span aria-hidden="true">{letters}</span>
		</span>
	}
}

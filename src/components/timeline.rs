//! Vertical list of dated entries joined by a rule.

use leptos::prelude::*;

use crate::content::TimelineEntry;

#[component]
pub fn Timeline(items: &'static [TimelineEntry]) -> impl IntoView {
	let rows = items
		.iter()
		.map(|item| {
			view! {
				<li class="timeline-item">
					<span class="timeline-dot" aria-hidden="true" />
					<div class="timeline-head">
						<h4>{item.title}</h4>
						<span class="timeline-date">{item.date}</span>
					</div>
					<p class="timeline-subtitle">{item.subtitle}</p>
					{item.description.map(|d| view! { <p class="muted">{d}</p> })}
				</li>
			}
		})
		.collect_view();

	view! { <ol class="timeline">{rows}</ol> }
}

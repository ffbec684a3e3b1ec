//! Rounded skill tag that pops in after its predecessors.

use leptos::prelude::*;

/// Delay between consecutive pills, in seconds.
const STAGGER: f64 = 0.03;

/// Entrance delay of the pill at `index`, in seconds.
pub fn stagger_delay(index: usize) -> f64 {
	index as f64 * STAGGER
}

#[component]
pub fn SkillPill(skill: &'static str, index: usize) -> impl IntoView {
	view! {
		<span class="skill-pill" style=format!("animation-delay: {}s", stagger_delay(index))>
			{skill}
		</span>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pills_enter_in_order() {
		assert_eq!(stagger_delay(0), 0.0);
		assert!((stagger_delay(10) - 0.3).abs() < 1e-12);
		assert!(stagger_delay(3) < stagger_delay(4));
	}
}

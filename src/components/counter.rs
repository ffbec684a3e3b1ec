//! Number that counts up from zero the first time it scrolls into view.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;

/// How far inside the viewport edges the counter must be before it starts.
const VIEW_MARGIN: f64 = 80.0;

/// Value shown `elapsed_ms` into a linear count to `target`, rounded to
/// `decimals` places and held at `target` once `duration_ms` has passed.
pub fn counter_value(elapsed_ms: f64, duration_ms: f64, target: f64, decimals: u32) -> f64 {
	let progress = if duration_ms <= 0.0 {
		1.0
	} else {
		(elapsed_ms / duration_ms).clamp(0.0, 1.0)
	};
	let scale = 10f64.powi(decimals as i32);
	(target * progress * scale).round() / scale
}

/// Format with at most `decimals` places, dropping trailing zeros.
pub fn format_count(value: f64, decimals: u32) -> String {
	let text = format!("{value:.prec$}", prec = decimals as usize);
	if text.contains('.') {
		text.trim_end_matches('0').trim_end_matches('.').to_string()
	} else {
		text
	}
}

struct CountState {
	started_ms: Option<f64>,
	begun: bool,
	frame: Option<AnimationFrame>,
}

struct Counting {
	state: RefCell<CountState>,
	value: RwSignal<f64>,
	target: f64,
	duration_ms: f64,
	decimals: u32,
}

struct CounterRuntime {
	counting: Rc<Counting>,
	_scroll: Option<EventListener>,
}

impl Drop for CounterRuntime {
	fn drop(&mut self) {
		let pending = self.counting.state.borrow_mut().frame.take();
		drop(pending);
	}
}

fn begin(counting: &Rc<Counting>) {
	{
		let mut state = counting.state.borrow_mut();
		if state.begun {
			return;
		}
		state.begun = true;
	}
	schedule(counting);
}

fn schedule(counting: &Rc<Counting>) {
	let next = Rc::clone(counting);
	let handle = request_animation_frame(move |timestamp| on_frame(&next, timestamp));
	counting.state.borrow_mut().frame = Some(handle);
}

fn on_frame(counting: &Rc<Counting>, timestamp: f64) {
	let elapsed = {
		let mut state = counting.state.borrow_mut();
		state.frame.take();
		timestamp - *state.started_ms.get_or_insert(timestamp)
	};
	counting.value.set(counter_value(
		elapsed,
		counting.duration_ms,
		counting.target,
		counting.decimals,
	));
	if elapsed < counting.duration_ms {
		schedule(counting);
	}
}

/// Counts to `target` over `duration_ms` once visible, then stays there.
#[component]
pub fn Counter(
	target: f64,
	#[prop(optional)] decimals: u32,
	#[prop(default = 1000.0)] duration_ms: f64,
	#[prop(optional)] prefix: &'static str,
	#[prop(optional)] suffix: &'static str,
	#[prop(optional)] label: &'static str,
) -> impl IntoView {
	let value_ref = NodeRef::<leptos::html::Span>::new();
	let value = RwSignal::new(0.0);
	let runtime: StoredValue<Option<CounterRuntime>, LocalStorage> = StoredValue::new_local(None);

	Effect::new(move |_| {
		let Some(el) = value_ref.get() else {
			return;
		};
		if runtime.with_value(Option::is_some) {
			return;
		}
		let el: Element = el.unchecked_into();
		let counting = Rc::new(Counting {
			state: RefCell::new(CountState {
				started_ms: None,
				begun: false,
				frame: None,
			}),
			value,
			target,
			duration_ms,
			decimals,
		});

		let scroll = if dom::element_in_view(&el, VIEW_MARGIN) {
			begin(&counting);
			None
		} else {
			web_sys::window().map(|window| {
				let counting = counting.clone();
				EventListener::new(&window, "scroll", move |_| {
					if dom::element_in_view(&el, VIEW_MARGIN) {
						begin(&counting);
					}
				})
			})
		};
		runtime.set_value(Some(CounterRuntime {
			counting,
			_scroll: scroll,
		}));
	});

	view! {
		<div class="counter">
			<span node_ref=value_ref class="counter-value">
				{prefix}
				{move || format_count(value.get(), decimals)}
				{suffix}
			</span>
			{(!label.is_empty()).then(|| view! { <span class="counter-label">{label}</span> })}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_is_linear_and_rounded() {
		assert_eq!(counter_value(0.0, 1000.0, 1.5, 1), 0.0);
		assert_eq!(counter_value(500.0, 1000.0, 1.5, 1), 0.8);
		assert_eq!(counter_value(1000.0, 1000.0, 1.5, 1), 1.5);
	}

	#[test]
	fn count_holds_at_target() {
		assert_eq!(counter_value(5000.0, 1000.0, 42.0, 0), 42.0);
		assert_eq!(counter_value(10.0, 0.0, 7.0, 0), 7.0);
	}

	#[test]
	fn whole_values_drop_the_fraction() {
		assert_eq!(format_count(0.0, 1), "0");
		assert_eq!(format_count(1.5, 1), "1.5");
		assert_eq!(format_count(1.0, 1), "1");
		assert_eq!(format_count(12.0, 0), "12");
	}
}

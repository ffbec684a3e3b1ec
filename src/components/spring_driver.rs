//! Drives a [`Spring2`] from animation frames until it comes to rest.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};

use crate::motion::Spring2;

/// Assumed frame length for the first frame after the loop (re)starts.
const FIRST_FRAME: f64 = 1.0 / 60.0;

struct DriverState {
	spring: Spring2,
	last_ms: Option<f64>,
	frame: Option<AnimationFrame>,
}

struct DriverInner {
	state: RefCell<DriverState>,
	apply: Box<dyn Fn(f64, f64)>,
}

/// Spring whose value is pushed to `apply` every frame while it moves.
///
/// A frame is only requested between a retarget and the spring settling.
pub(crate) struct SpringDriver {
	inner: Rc<DriverInner>,
}

impl SpringDriver {
	pub(crate) fn new(stiffness: f64, damping: f64, apply: impl Fn(f64, f64) + 'static) -> Self {
		Self {
			inner: Rc::new(DriverInner {
				state: RefCell::new(DriverState {
					spring: Spring2::new(stiffness, damping),
					last_ms: None,
					frame: None,
				}),
				apply: Box::new(apply),
			}),
		}
	}

	pub(crate) fn set_target(&self, x: f64, y: f64) {
		self.inner.state.borrow_mut().spring.set_target(x, y);
		ensure_frame(&self.inner);
	}

	/// Jump straight to a position without animating.
	pub(crate) fn snap(&self, x: f64, y: f64) {
		self.inner.state.borrow_mut().spring.snap(x, y);
	}
}

impl Drop for SpringDriver {
	fn drop(&mut self) {
		// The pending frame holds a clone of `inner`.
		let pending = self.inner.state.borrow_mut().frame.take();
		drop(pending);
	}
}

fn ensure_frame(inner: &Rc<DriverInner>) {
	if inner.state.borrow().frame.is_some() {
		return;
	}
	let next = Rc::clone(inner);
	let handle = request_animation_frame(move |timestamp| on_frame(&next, timestamp));
	inner.state.borrow_mut().frame = Some(handle);
}

fn on_frame(inner: &Rc<DriverInner>, timestamp: f64) {
	let (x, y, settled) = {
		let mut state = inner.state.borrow_mut();
		state.frame.take();
		let dt = state
			.last_ms
			.map(|last| (timestamp - last) / 1000.0)
			.unwrap_or(FIRST_FRAME);
		let (x, y) = state.spring.step(dt);
		let settled = state.spring.is_settled();
		state.last_ms = if settled { None } else { Some(timestamp) };
		(x, y, settled)
	};
	(inner.apply)(x, y);
	if !settled {
		ensure_frame(inner);
	}
}

//! Damped spring used to smooth pointer-driven UI motion.
//!
//! Unit mass, `a = -stiffness * (x - target) - damping * v`, integrated with
//! semi-implicit Euler in fixed sub-steps so the result does not depend on the
//! display refresh rate.

/// Largest integration step, in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 120.0;
/// Frame gaps longer than this (background tab) are clamped.
const MAX_FRAME: f64 = 0.1;
/// Position and velocity tolerance for [`Spring::is_settled`].
const REST_EPSILON: f64 = 0.01;

/// One-dimensional spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub stiffness: f64,
	pub damping: f64,
	value: f64,
	velocity: f64,
	target: f64,
}

impl Spring {
	pub fn new(stiffness: f64, damping: f64) -> Self {
		Self {
			stiffness,
			damping,
			value: 0.0,
			velocity: 0.0,
			target: 0.0,
		}
	}

	pub fn value(&self) -> f64 {
		self.value
	}

	pub fn target(&self) -> f64 {
		self.target
	}

	pub fn set_target(&mut self, target: f64) {
		self.target = target;
	}

	/// Jump to `value` with no velocity, retargeting to it.
	pub fn snap(&mut self, value: f64) {
		self.value = value;
		self.target = value;
		self.velocity = 0.0;
	}

	/// Advance by `dt` seconds and return the new value.
	pub fn step(&mut self, dt: f64) -> f64 {
		let mut remaining = dt.clamp(0.0, MAX_FRAME);
		while remaining > 0.0 {
			let h = remaining.min(MAX_SUBSTEP);
			let accel = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
			self.velocity += accel * h;
			self.value += self.velocity * h;
			remaining -= h;
		}
		self.value
	}

	pub fn is_settled(&self) -> bool {
		(self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
	}
}

/// Two independent springs sharing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2 {
	pub x: Spring,
	pub y: Spring,
}

impl Spring2 {
	pub fn new(stiffness: f64, damping: f64) -> Self {
		Self {
			x: Spring::new(stiffness, damping),
			y: Spring::new(stiffness, damping),
		}
	}

	pub fn set_target(&mut self, x: f64, y: f64) {
		self.x.set_target(x);
		self.y.set_target(y);
	}

	pub fn snap(&mut self, x: f64, y: f64) {
		self.x.snap(x);
		self.y.snap(y);
	}

	pub fn step(&mut self, dt: f64) -> (f64, f64) {
		(self.x.step(dt), self.y.step(dt))
	}

	pub fn is_settled(&self) -> bool {
		self.x.is_settled() && self.y.is_settled()
	}
}

//! Fixed-size particle pool living in a pseudo-3D, viewport-centred space.
//!
//! `x`/`y` are CSS pixels relative to the viewport centre, `z` is a signed
//! depth in `[-depth_range, depth_range]`. Particles are never created or
//! destroyed after the pool is built; leaving the visible extent wraps them to
//! the opposite side.

use std::f64::consts::TAU;

use super::config::ParticleConfig;

/// A single pooled particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub z: f64,
	pub vx: f64,
	/// Sampled with the rest of the state; vertical motion comes from the
	/// upward drift and turbulence.
	pub vy: f64,
	/// Base radius in pixels.
	pub size: f64,
	/// Sparkle phase offset in radians. Never counts down.
	pub life: f64,
	/// Base alpha multiplier.
	pub opacity: f64,
}

impl Particle {
	/// Sample a particle uniformly over a `width` x `height` viewport.
	pub fn random(rng: &mut fastrand::Rng, width: f64, height: f64, depth_range: f64) -> Self {
		Self {
			x: rng.f64() * width - width / 2.0,
			y: rng.f64() * height - height / 2.0,
			z: rng.f64() * 2.0 * depth_range - depth_range,
			size: rng.f64() * 3.0 + 2.0,
			vx: (rng.f64() - 0.5) * 0.5,
			vy: (rng.f64() - 0.5) * 0.5,
			life: rng.f64() * TAU,
			opacity: rng.f64() * 0.5 + 0.5,
		}
	}
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Horizontal wrap bound: particles beyond `±width / 1.5` reappear opposite.
	pub fn x_bound(&self) -> f64 {
		self.width / 1.5
	}

	/// Vertical wrap bound, applied only on upward exit.
	pub fn y_bound(&self) -> f64 {
		self.height / 1.5
	}

	/// Convert a client-space point into centred coordinates.
	pub fn centred(&self, client_x: f64, client_y: f64) -> (f64, f64) {
		(client_x - self.width / 2.0, client_y - self.height / 2.0)
	}
}

/// Owns the particle pool and advances it one frame at a time.
pub struct ParticleField {
	particles: Vec<Particle>,
	config: ParticleConfig,
}

impl ParticleField {
	pub fn new(config: &ParticleConfig, viewport: Viewport, rng: &mut fastrand::Rng) -> Self {
		let particles = (0..config.count)
			.map(|_| Particle::random(rng, viewport.width, viewport.height, config.depth_range))
			.collect();
		Self {
			particles,
			config: config.clone(),
		}
	}

	/// Build a field from explicit particles. Mostly useful for tests and
	/// replaying a captured pool.
	pub fn from_particles(config: &ParticleConfig, particles: Vec<Particle>) -> Self {
		Self {
			particles,
			config: config.clone(),
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn config(&self) -> &ParticleConfig {
		&self.config
	}

	/// Advance every particle by one frame and re-sort the pool back to front.
	///
	/// `time` is seconds since the field started; `pointer` is in centred
	/// coordinates.
	pub fn step(&mut self, time: f64, pointer: (f64, f64), viewport: Viewport) {
		for p in &mut self.particles {
			advance(p, &self.config, time, pointer, viewport);
		}
		self.sort_by_depth();
	}

	/// Painter's order: ascending `z`.
	pub fn sort_by_depth(&mut self) {
		self.particles.sort_by(|a, b| a.z.total_cmp(&b.z));
	}
}

/// Pseudo-turbulence: a product of two phase-shifted sinusoids of position
/// and time. Always in `[-1, 1]`.
pub fn turbulence(x: f64, y: f64, time: f64) -> f64 {
	(y * 0.002 + time).sin() * (x * 0.002 + time).cos()
}

/// Displacement pushing a point at `(dx, dy)` from the pointer away from it.
///
/// Zero outside the radius and at the pointer itself, where the direction is
/// undefined. Magnitude falls off linearly with distance.
pub fn repulsion(dx: f64, dy: f64, radius: f64, strength: f64) -> (f64, f64) {
	let dist = (dx * dx + dy * dy).sqrt();
	if dist <= 0.0 || dist >= radius {
		return (0.0, 0.0);
	}
	let force = (radius - dist) / radius * strength;
	(dx / dist * force, dy / dist * force)
}

fn advance(p: &mut Particle, config: &ParticleConfig, time: f64, pointer: (f64, f64), viewport: Viewport) {
	let noise = turbulence(p.x, p.y, time);

	p.x += p.vx + (time * 0.5 + p.y * 0.005).cos() * 0.5;
	p.y -= config.base_speed + noise.abs() * 0.5;

	let (rx, ry) = repulsion(
		p.x - pointer.0,
		p.y - pointer.1,
		config.interaction_radius,
		config.repulsion_strength,
	);
	p.x += rx;
	p.y += ry;

	let (x_bound, y_bound) = (viewport.x_bound(), viewport.y_bound());
	if p.y < -y_bound {
		p.y = y_bound;
	}
	if p.x > x_bound {
		p.x = -x_bound;
	} else if p.x < -x_bound {
		p.x = x_bound;
	}

	p.z -= config.depth_speed;
	if p.z <= -config.depth_range {
		p.z = config.depth_range;
	} else if p.z > config.depth_range {
		p.z = -config.depth_range;
	}
}

//! Pinhole projection and per-sprite shading values.
//!
//! Turns the sorted pool into the flat attribute arrays the GPU consumes:
//! screen positions, point sizes and opacities, one entry per particle, in
//! painter's order.

use super::particles::{Particle, Viewport};
use crate::theme::ThemeMode;

/// Light-mode opacity boost.
const LIGHT_BOOST: f64 = 1.2;
/// Ceiling applied right after the light-mode boost.
const LIGHT_OPACITY_CAP: f64 = 0.9;
/// Sprites nearer than this get the near-plane defocus.
const NEAR_DEPTH: f64 = -200.0;
/// Sprites farther than this get the far-plane defocus.
const FAR_DEPTH: f64 = 300.0;

/// Result of projecting one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	/// Screen position in CSS pixels, origin at the top-left corner.
	pub x: f64,
	pub y: f64,
	/// Point sprite diameter in CSS pixels.
	pub size: f64,
	pub opacity: f64,
}

/// Perspective scale for depth `z`: `focal / (focal + z)`.
///
/// `None` when the point sits on or behind the camera plane.
pub fn perspective_scale(focal_length: f64, z: f64) -> Option<f64> {
	let denom = focal_length + z;
	(denom > 0.0).then(|| focal_length / denom)
}

/// Twinkle multiplier in `[0.6, 1.0]`.
pub fn sparkle(time: f64, life: f64) -> f64 {
	(time * 3.0 + life).sin() * 0.2 + 0.8
}

/// Size and opacity multipliers simulating defocus away from the focal band.
pub fn depth_falloff(z: f64) -> (f64, f64) {
	if z < NEAR_DEPTH {
		(1.5, 0.6)
	} else if z > FAR_DEPTH {
		(2.0, 0.5)
	} else {
		(1.0, 1.0)
	}
}

/// Project a single particle for the given frame.
pub fn project(
	p: &Particle,
	focal_length: f64,
	viewport: Viewport,
	time: f64,
	mode: ThemeMode,
) -> Projected {
	let Some(scale) = perspective_scale(focal_length, p.z) else {
		return Projected {
			x: viewport.width / 2.0,
			y: viewport.height / 2.0,
			size: 0.0,
			opacity: 0.0,
		};
	};

	let mut opacity = p.opacity * sparkle(time, p.life);
	let mut size = p.size * scale;

	// Boost then clamp, before the depth falloff.
	if mode == ThemeMode::Light {
		opacity = (opacity * LIGHT_BOOST).min(LIGHT_OPACITY_CAP);
	}

	let (size_mult, opacity_mult) = depth_falloff(p.z);
	size *= size_mult;
	opacity *= opacity_mult;

	Projected {
		x: viewport.width / 2.0 + p.x * scale,
		y: viewport.height / 2.0 + p.y * scale,
		size: size * 2.0,
		opacity,
	}
}

/// Flat per-frame vertex attributes, ready for upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointBatch {
	/// Interleaved `x, y` pairs.
	pub positions: Vec<f32>,
	pub sizes: Vec<f32>,
	pub opacities: Vec<f32>,
}

impl PointBatch {
	pub fn with_capacity(count: usize) -> Self {
		Self {
			positions: Vec::with_capacity(count * 2),
			sizes: Vec::with_capacity(count),
			opacities: Vec::with_capacity(count),
		}
	}

	pub fn clear(&mut self) {
		self.positions.clear();
		self.sizes.clear();
		self.opacities.clear();
	}

	pub fn push(&mut self, point: Projected) {
		self.positions.push(point.x as f32);
		self.positions.push(point.y as f32);
		self.sizes.push(point.size as f32);
		self.opacities.push(point.opacity as f32);
	}

	/// Number of points in the batch.
	pub fn len(&self) -> usize {
		self.sizes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sizes.is_empty()
	}

	/// Rebuild the batch from a sorted pool, reusing the allocations.
	pub fn fill(
		&mut self,
		particles: &[Particle],
		focal_length: f64,
		viewport: Viewport,
		time: f64,
		mode: ThemeMode,
	) {
		self.clear();
		for p in particles {
			self.push(project(p, focal_length, viewport, time, mode));
		}
	}
}

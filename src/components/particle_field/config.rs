//! Tunable constants for the particle field.
//!
//! The defaults reproduce the shipped look. A page can override any subset by
//! embedding JSON in a `<script id="particle-config">` element.

use serde::Deserialize;
use thiserror::Error;

/// Reasons a [`ParticleConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
	/// The pool must hold at least one particle.
	#[error("particle pool must not be empty")]
	EmptyPool,
	/// A field that scales geometry or drives drift was zero or negative.
	#[error("`{field}` must be positive")]
	NonPositive { field: &'static str },
	/// The embedded JSON could not be parsed.
	#[error("invalid particle config: {0}")]
	Parse(String),
}

/// Particle field parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
	/// Fixed pool size.
	pub count: usize,
	/// Constant upward drift per frame, in pixels.
	pub base_speed: f64,
	/// Pinhole camera focal length.
	pub focal_length: f64,
	/// Pointer repulsion radius, in pixels.
	pub interaction_radius: f64,
	/// Repulsion displacement at zero distance, in pixels per frame.
	pub repulsion_strength: f64,
	/// Half-extent of the depth range; `z` lives in `[-depth_range, depth_range]`.
	pub depth_range: f64,
	/// Per-frame decrease of `z`.
	pub depth_speed: f64,
	/// Upper bound on the device pixel ratio used for the backing store.
	pub max_pixel_ratio: f64,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			count: 400,
			base_speed: 0.2,
			focal_length: 600.0,
			interaction_radius: 200.0,
			repulsion_strength: 2.0,
			depth_range: 1000.0,
			depth_speed: 0.5,
			max_pixel_ratio: 2.0,
		}
	}
}

impl ParticleConfig {
	/// Parse and validate a JSON document. Absent fields keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let config: Self =
			serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Check the invariants the simulation relies on.
	///
	/// Particles only wrap on upward exit and on the near depth bound, so both
	/// drift speeds must be positive for positions to stay bounded.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.count == 0 {
			return Err(ConfigError::EmptyPool);
		}
		let positive = [
			("base_speed", self.base_speed),
			("depth_speed", self.depth_speed),
			("focal_length", self.focal_length),
			("interaction_radius", self.interaction_radius),
			("depth_range", self.depth_range),
			("max_pixel_ratio", self.max_pixel_ratio),
		];
		for (field, value) in positive {
			if !(value > 0.0) {
				return Err(ConfigError::NonPositive { field });
			}
		}
		Ok(())
	}
}

//! Per-component simulation state and the frame pipeline.
//!
//! Created once when the background mounts and mutated only from the frame
//! callback and the pointer/resize handlers, all on the UI thread.

use super::config::ParticleConfig;
use super::palette::Palette;
use super::particles::{ParticleField, Viewport};
use super::projection::PointBatch;
use super::render::PointSurface;
use crate::theme::ThemeMode;

/// The particle pool plus the inputs each frame reads.
pub struct FieldState {
	pub field: ParticleField,
	pub viewport: Viewport,
	/// Pointer in centred coordinates.
	pub pointer: (f64, f64),
	/// Timestamp (ms) of the first frame; `None` until a frame has run.
	start_ms: Option<f64>,
	batch: PointBatch,
}

impl FieldState {
	pub fn new(config: &ParticleConfig, viewport: Viewport, rng: &mut fastrand::Rng) -> Self {
		let field = ParticleField::new(config, viewport, rng);
		Self::with_field(field, viewport)
	}

	pub fn with_field(field: ParticleField, viewport: Viewport) -> Self {
		let batch = PointBatch::with_capacity(field.len());
		Self {
			field,
			viewport,
			pointer: (0.0, 0.0),
			start_ms: None,
			batch,
		}
	}

	/// Record a pointer position given in client (top-left origin) coordinates.
	pub fn set_pointer_client(&mut self, client_x: f64, client_y: f64) {
		self.pointer = self.viewport.centred(client_x, client_y);
	}

	/// Particle positions are relative to the viewport centre, so only the
	/// bounds change.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
	}

	/// Seconds elapsed since the first frame.
	pub fn elapsed(&mut self, timestamp_ms: f64) -> f64 {
		let start = *self.start_ms.get_or_insert(timestamp_ms);
		((timestamp_ms - start) / 1000.0).max(0.0)
	}

	/// Run one frame: advance, sort, clear, project and draw.
	pub fn render_frame(&mut self, timestamp_ms: f64, mode: ThemeMode, surface: &mut impl PointSurface) {
		let time = self.elapsed(timestamp_ms);
		let palette = Palette::for_mode(mode);

		self.field.step(time, self.pointer, self.viewport);

		surface.set_blend(palette.blend);
		surface.clear(palette.clear);

		let focal_length = self.field.config().focal_length;
		self.batch
			.fill(self.field.particles(), focal_length, self.viewport, time, mode);
		surface.draw_points(&self.batch, palette.tint);
	}

	/// The batch uploaded by the most recent frame.
	pub fn last_batch(&self) -> &PointBatch {
		&self.batch
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::palette::{BlendMode, Color};

	#[derive(Default)]
	struct Counting {
		clears: usize,
		draws: usize,
	}

	impl PointSurface for Counting {
		fn resize(&mut self, _viewport: Viewport, _pixel_ratio: f64) {}
		fn set_blend(&mut self, _blend: BlendMode) {}
		fn clear(&mut self, _color: Color) {
			self.clears += 1;
		}
		fn draw_points(&mut self, _batch: &PointBatch, _tint: Color) {
			self.draws += 1;
		}
	}

	fn state() -> FieldState {
		FieldState::new(
			&ParticleConfig::default(),
			Viewport::new(1000.0, 800.0),
			&mut fastrand::Rng::with_seed(1),
		)
	}

	#[test]
	fn elapsed_starts_at_zero() {
		let mut state = state();
		assert_eq!(state.elapsed(12_000.0), 0.0);
		assert_eq!(state.elapsed(13_500.0), 1.5);
	}

	#[test]
	fn pointer_is_centred() {
		let mut state = state();
		state.set_pointer_client(600.0, 300.0);
		assert_eq!(state.pointer, (100.0, -100.0));
	}

	#[test]
	fn resize_keeps_particles() {
		let mut state = state();
		let before = state.field.particles().to_vec();
		state.resize(Viewport::new(400.0, 300.0));
		assert_eq!(state.field.particles(), &before[..]);
		assert_eq!(state.viewport, Viewport::new(400.0, 300.0));
	}

	#[test]
	fn one_clear_and_one_draw_per_frame() {
		let mut state = state();
		let mut surface = Counting::default();
		for frame in 0..10 {
			state.render_frame(frame as f64 * 16.0, ThemeMode::Dark, &mut surface);
		}
		assert_eq!(surface.clears, 10);
		assert_eq!(surface.draws, 10);
		assert_eq!(state.last_batch().len(), 400);
	}
}

//! Frame pipeline behavior through the public API, against a recording surface.

#![allow(unused_crate_dependencies)]

use portfolio_web::ThemeMode;
use portfolio_web::components::particle_field::particles::{Viewport, repulsion};
use portfolio_web::components::particle_field::{
	BlendMode, Color, FieldState, Palette, Particle, ParticleConfig, ParticleField, PointBatch,
	PointSurface,
};

#[derive(Debug, PartialEq)]
enum Call {
	Blend(BlendMode),
	Clear(Color),
	Draw { points: usize, tint: Color },
}

#[derive(Default)]
struct Recorder {
	calls: Vec<Call>,
}

impl Recorder {
	fn draws(&self) -> usize {
		self.calls
			.iter()
			.filter(|c| matches!(c, Call::Draw { .. }))
			.count()
	}
}

impl PointSurface for Recorder {
	fn resize(&mut self, _viewport: Viewport, _pixel_ratio: f64) {}

	fn set_blend(&mut self, blend: BlendMode) {
		self.calls.push(Call::Blend(blend));
	}

	fn clear(&mut self, color: Color) {
		self.calls.push(Call::Clear(color));
	}

	fn draw_points(&mut self, batch: &PointBatch, tint: Color) {
		assert_eq!(batch.positions.len(), batch.len() * 2);
		assert_eq!(batch.opacities.len(), batch.len());
		self.calls.push(Call::Draw {
			points: batch.len(),
			tint,
		});
	}
}

const FRAME_MS: f64 = 1000.0 / 60.0;

fn seeded_state(seed: u64) -> FieldState {
	let config = ParticleConfig::default();
	let viewport = Viewport::new(1000.0, 800.0);
	let mut state = FieldState::new(&config, viewport, &mut fastrand::Rng::with_seed(seed));
	// Far outside the repulsion radius of every particle.
	state.set_pointer_client(10_000.0, 10_000.0);
	state
}

#[test]
fn dark_frame_is_one_additive_draw_of_the_whole_pool() {
	let mut state = seeded_state(42);
	let mut surface = Recorder::default();

	state.render_frame(0.0, ThemeMode::Dark, &mut surface);

	assert_eq!(
		surface.calls,
		vec![
			Call::Blend(BlendMode::Additive),
			Call::Clear(Palette::DARK.clear),
			Call::Draw {
				points: 400,
				tint: Palette::DARK.tint,
			},
		]
	);
}

#[test]
fn pool_size_is_constant_across_frames() {
	let mut state = seeded_state(1);
	let mut surface = Recorder::default();
	for frame in 0..240 {
		state.render_frame(frame as f64 * FRAME_MS, ThemeMode::Dark, &mut surface);
		assert_eq!(state.field.len(), 400);
		assert_eq!(state.last_batch().len(), 400);
	}
	assert_eq!(surface.draws(), 240);
}

#[test]
fn pool_is_drawn_back_to_front() {
	let mut state = seeded_state(9);
	let mut surface = Recorder::default();
	for frame in 0..30 {
		state.render_frame(frame as f64 * FRAME_MS, ThemeMode::Dark, &mut surface);
		let particles = state.field.particles();
		assert!(particles.windows(2).all(|w| w[0].z <= w[1].z));
	}
}

#[test]
fn particles_stay_within_wrap_bounds() {
	let mut state = seeded_state(3);
	let mut surface = Recorder::default();
	let (x_bound, y_bound) = (state.viewport.x_bound(), state.viewport.y_bound());
	let depth = state.field.config().depth_range;
	for frame in 0..600 {
		state.render_frame(frame as f64 * FRAME_MS, ThemeMode::Dark, &mut surface);
	}
	for p in state.field.particles() {
		assert!(p.x.abs() <= x_bound, "x {}", p.x);
		assert!(p.y >= -y_bound && p.y <= y_bound, "y {}", p.y);
		assert!(p.z > -depth && p.z <= depth, "z {}", p.z);
	}
}

#[test]
fn theme_switch_changes_shading_but_not_motion() {
	let mut switched = seeded_state(7);
	let mut steady = seeded_state(7);
	let mut a = Recorder::default();
	let mut b = Recorder::default();

	for frame in 0..20 {
		let ts = frame as f64 * FRAME_MS;
		let mode = if frame < 10 {
			ThemeMode::Dark
		} else {
			ThemeMode::Light
		};
		switched.render_frame(ts, mode, &mut a);
		steady.render_frame(ts, ThemeMode::Dark, &mut b);
	}

	assert_eq!(switched.field.particles(), steady.field.particles());
	assert_eq!(
		&a.calls[a.calls.len() - 3..],
		&[
			Call::Blend(BlendMode::Alpha),
			Call::Clear(Palette::LIGHT.clear),
			Call::Draw {
				points: 400,
				tint: Palette::LIGHT.tint,
			},
		]
	);
	assert_eq!(a.calls[27], Call::Blend(BlendMode::Additive));
	assert_eq!(a.calls[30], Call::Blend(BlendMode::Alpha));
}

#[test]
fn light_mode_opacity_is_capped() {
	let mut state = seeded_state(21);
	let mut surface = Recorder::default();
	for frame in 0..60 {
		state.render_frame(frame as f64 * FRAME_MS, ThemeMode::Light, &mut surface);
		assert!(
			state
				.last_batch()
				.opacities
				.iter()
				.all(|o| (0.0..=0.9 + 1e-6).contains(o))
		);
	}
}

#[test]
fn same_seed_same_field() {
	let mut a = seeded_state(123);
	let mut b = seeded_state(123);
	let mut sink = Recorder::default();
	for frame in 0..10 {
		let ts = frame as f64 * FRAME_MS;
		a.render_frame(ts, ThemeMode::Dark, &mut sink);
		b.render_frame(ts, ThemeMode::Dark, &mut sink);
	}
	assert_eq!(a.last_batch(), b.last_batch());
}

#[test]
fn config_overrides_reach_the_pool() {
	let config = ParticleConfig::from_json(r#"{ "count": 32 }"#).expect("valid config");
	let mut state = FieldState::new(
		&config,
		Viewport::new(640.0, 480.0),
		&mut fastrand::Rng::with_seed(0),
	);
	let mut surface = Recorder::default();
	state.render_frame(0.0, ThemeMode::Dark, &mut surface);
	assert_eq!(
		surface.calls.last(),
		Some(&Call::Draw {
			points: 32,
			tint: Palette::DARK.tint,
		})
	);
}

fn lone_particle_state(client_pointer: (f64, f64)) -> FieldState {
	let config = ParticleConfig::default();
	let particle = Particle {
		x: 0.0,
		y: 0.0,
		z: 0.0,
		vx: 0.0,
		vy: 0.0,
		size: 3.0,
		life: 0.0,
		opacity: 1.0,
	};
	let field = ParticleField::from_particles(&config, vec![particle]);
	let mut state = FieldState::with_field(field, Viewport::new(1000.0, 800.0));
	state.set_pointer_client(client_pointer.0, client_pointer.1);
	state
}

#[test]
fn nearby_pointer_pushes_particle_away() {
	// Client (450, 400) is 50px left of the viewport centre.
	let mut pushed = lone_particle_state((450.0, 400.0));
	let mut free = lone_particle_state((10_000.0, 10_000.0));
	let mut surface = Recorder::default();

	pushed.render_frame(0.0, ThemeMode::Dark, &mut surface);
	free.render_frame(0.0, ThemeMode::Dark, &mut surface);

	let (p, q) = (&pushed.field.particles()[0], &free.field.particles()[0]);
	let config = ParticleConfig::default();
	let (rx, ry) = repulsion(
		q.x - pushed.pointer.0,
		q.y - pushed.pointer.1,
		config.interaction_radius,
		config.repulsion_strength,
	);

	assert!(rx > 1.0, "expected a rightward push, got {rx}");
	assert!((p.x - q.x - rx).abs() < 1e-9);
	assert!((p.y - q.y - ry).abs() < 1e-9);
	assert!(p.x > q.x);
	assert_eq!(p.z, q.z);
}

#[test]
fn pointer_outside_radius_leaves_motion_unchanged() {
	// 300px right of centre, beyond the 200px radius.
	let mut near_miss = lone_particle_state((800.0, 400.0));
	let mut free = lone_particle_state((10_000.0, 10_000.0));
	let mut surface = Recorder::default();
	for frame in 0..5 {
		let ts = frame as f64 * FRAME_MS;
		near_miss.render_frame(ts, ThemeMode::Dark, &mut surface);
		free.render_frame(ts, ThemeMode::Dark, &mut surface);
	}
	assert_eq!(near_miss.field.particles(), free.field.particles());
}

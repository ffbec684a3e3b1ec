//! Animated particle field background.
//!
//! Renders a fixed pool of soft point sprites in a pseudo-3D space behind the
//! page:
//! - Upward drift with sinusoidal turbulence and pointer repulsion
//! - Cyclic depth recycling and toroidal wrap at the viewport edges
//! - Pinhole projection with depth-of-field style size/opacity falloff
//! - Back-to-front sorting and a single WebGL draw call per frame
//! - Theme-dependent tint, clear color and blend function
//!
//! # Example
//!
//! ```ignore
//! use portfolio_web::components::particle_field::ParticleBackground;
//!
//! let mode = RwSignal::new(ThemeMode::Dark);
//! view! { <ParticleBackground theme=mode /> }
//! ```

mod component;
pub mod config;
pub mod palette;
pub mod particles;
pub mod projection;
pub mod render;
pub mod state;

pub use component::ParticleBackground;
pub use config::{ConfigError, ParticleConfig};
pub use palette::{BlendMode, Color, Palette};
pub use particles::{Particle, ParticleField, Viewport};
pub use projection::PointBatch;
pub use render::{PointSurface, RenderError};
pub use state::FieldState;

//! Page components.

pub mod ambient_light;
pub mod counter;
pub mod magnetic_button;
pub mod navbar;
pub mod particle_field;
pub mod project_card;
pub mod sections;
pub mod skill_pill;
pub mod split_text;
pub mod spotlight_card;
mod spring_driver;
pub mod timeline;

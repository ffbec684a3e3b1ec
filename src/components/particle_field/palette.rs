//! Theme-dependent shading for the particle field.
//!
//! Dark mode draws a warm gold tint with additive blending so overlapping
//! sprites bloom. Light mode uses a darker amber with ordinary alpha blending,
//! since additive blending washes out against a light clear color.

use crate::theme::ThemeMode;

/// Linear RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
}

impl Color {
	pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
		Self { r, g, b }
	}

	pub fn to_array(self) -> [f32; 3] {
		[self.r, self.g, self.b]
	}

	pub fn to_css(self) -> String {
		let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
		format!(
			"#{:02x}{:02x}{:02x}",
			channel(self.r),
			channel(self.g),
			channel(self.b)
		)
	}
}

/// How a sprite's color combines with what is already in the frame buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
	/// `src * alpha + dst`
	Additive,
	/// `src * alpha + dst * (1 - alpha)`
	Alpha,
}

/// Everything the renderer needs to shade one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
	/// Uniform sprite tint.
	pub tint: Color,
	/// Frame buffer clear color.
	pub clear: Color,
	/// Sprite blend function.
	pub blend: BlendMode,
	/// CSS color painted behind the canvas before the first frame and in
	/// degraded mode.
	pub backdrop: Color,
}

impl Palette {
	/// Gold on near-black.
	pub const DARK: Palette = Palette {
		tint: Color::rgb(1.0, 0.88, 0.35),
		clear: Color::rgb(0.05, 0.05, 0.05),
		blend: BlendMode::Additive,
		backdrop: Color::rgb(5.0 / 255.0, 5.0 / 255.0, 5.0 / 255.0),
	};

	/// Amber on off-white.
	pub const LIGHT: Palette = Palette {
		tint: Color::rgb(0.90, 0.45, 0.10),
		clear: Color::rgb(0.94, 0.94, 0.94),
		blend: BlendMode::Alpha,
		backdrop: Color::rgb(1.0, 1.0, 1.0),
	};

	pub fn for_mode(mode: ThemeMode) -> Palette {
		match mode {
			ThemeMode::Dark => Self::DARK,
			ThemeMode::Light => Self::LIGHT,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dark_mode_is_additive_gold() {
		let palette = Palette::for_mode(ThemeMode::Dark);
		assert_eq!(palette.blend, BlendMode::Additive);
		assert_eq!(palette.tint.to_array(), [1.0, 0.88, 0.35]);
		assert_eq!(palette.clear.to_array(), [0.05, 0.05, 0.05]);
	}

	#[test]
	fn light_mode_is_alpha_blended_amber() {
		let palette = Palette::for_mode(ThemeMode::Light);
		assert_eq!(palette.blend, BlendMode::Alpha);
		assert_eq!(palette.tint.to_array(), [0.90, 0.45, 0.10]);
		assert_eq!(palette.clear.to_array(), [0.94, 0.94, 0.94]);
	}

	#[test]
	fn backdrops_match_page_colors() {
		assert_eq!(Palette::DARK.backdrop.to_css(), "#050505");
		assert_eq!(Palette::LIGHT.backdrop.to_css(), "#ffffff");
	}
}

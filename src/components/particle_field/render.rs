//! GPU side of the particle field.
//!
//! [`PointSurface`] is the seam between frame logic and the graphics API: one
//! frame is `set_blend`, `clear`, then a single `draw_points`. [`GlSurface`]
//! implements it on WebGL 1 with three dynamic vertex buffers (position, size,
//! opacity) and a fragment stage that cuts each point sprite into a soft disc.

use js_sys::Float32Array;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
	HtmlCanvasElement, WebGlBuffer, WebGlContextAttributes, WebGlPowerPreference, WebGlProgram,
	WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation,
};

use super::palette::{BlendMode, Color};
use super::particles::Viewport;
use super::projection::PointBatch;

const VERTEX_SHADER: &str = r#"
attribute vec2 a_position;
attribute float a_size;
attribute float a_opacity;

uniform vec2 u_resolution;
uniform float u_pixel_ratio;

varying float v_opacity;

void main() {
	vec2 pos = a_position / u_resolution * 2.0 - 1.0;
	pos.y = -pos.y;

	gl_Position = vec4(pos, 0.0, 1.0);
	gl_PointSize = a_size * u_pixel_ratio;
	v_opacity = a_opacity;
}
"#;

const FRAGMENT_SHADER: &str = r#"
precision mediump float;

uniform vec3 u_color;
varying float v_opacity;

void main() {
	vec2 center = gl_PointCoord - 0.5;
	float dist = length(center);

	if (dist > 0.5) discard;

	float alpha = smoothstep(0.5, 0.0, dist) * v_opacity;
	gl_FragColor = vec4(u_color, alpha);
}
"#;

/// Failures while bringing up or driving the GPU pipeline.
#[derive(Clone, Debug, Error)]
pub enum RenderError {
	/// The environment offers no WebGL context.
	#[error("WebGL context unavailable")]
	ContextUnavailable,
	#[error("{stage} shader failed to compile: {log}")]
	ShaderCompile { stage: &'static str, log: String },
	#[error("shader program failed to link: {0}")]
	ProgramLink(String),
	#[error("could not allocate {0}")]
	ResourceAllocation(&'static str),
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for RenderError {
	fn from(value: JsValue) -> Self {
		RenderError::Js(format!("{value:?}"))
	}
}

/// Target for one frame of point sprites.
pub trait PointSurface {
	/// Match the drawable to a new viewport (CSS pixels) and pixel ratio.
	fn resize(&mut self, viewport: Viewport, pixel_ratio: f64);
	fn set_blend(&mut self, blend: BlendMode);
	fn clear(&mut self, color: Color);
	/// Draw every point in `batch` with one call.
	fn draw_points(&mut self, batch: &PointBatch, tint: Color);
}

/// WebGL 1 point sprite pipeline bound to a canvas.
pub struct GlSurface {
	gl: GL,
	canvas: HtmlCanvasElement,
	program: WebGlProgram,
	position_buffer: WebGlBuffer,
	size_buffer: WebGlBuffer,
	opacity_buffer: WebGlBuffer,
	position_loc: u32,
	size_loc: u32,
	opacity_loc: u32,
	resolution_loc: Option<WebGlUniformLocation>,
	pixel_ratio_loc: Option<WebGlUniformLocation>,
	color_loc: Option<WebGlUniformLocation>,
	viewport: Viewport,
	pixel_ratio: f64,
}

impl GlSurface {
	/// Acquire a WebGL context on `canvas` and build the pipeline.
	pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, RenderError> {
		let attributes = WebGlContextAttributes::new();
		attributes.set_alpha(false);
		attributes.set_antialias(false);
		attributes.set_power_preference(WebGlPowerPreference::HighPerformance);

		let gl: GL = canvas
			.get_context_with_context_options("webgl", &attributes)?
			.ok_or(RenderError::ContextUnavailable)?
			.dyn_into()
			.map_err(|_| RenderError::ContextUnavailable)?;

		let program = link_program(&gl, VERTEX_SHADER, FRAGMENT_SHADER)?;
		gl.use_program(Some(&program));

		let attrib = |name: &'static str| -> Result<u32, RenderError> {
			let loc = gl.get_attrib_location(&program, name);
			u32::try_from(loc).map_err(|_| RenderError::ResourceAllocation(name))
		};
		let position_loc = attrib("a_position")?;
		let size_loc = attrib("a_size")?;
		let opacity_loc = attrib("a_opacity")?;

		let buffer = |name: &'static str| gl.create_buffer().ok_or(RenderError::ResourceAllocation(name));
		let position_buffer = buffer("position buffer")?;
		let size_buffer = buffer("size buffer")?;
		let opacity_buffer = buffer("opacity buffer")?;

		let resolution_loc = gl.get_uniform_location(&program, "u_resolution");
		let pixel_ratio_loc = gl.get_uniform_location(&program, "u_pixel_ratio");
		let color_loc = gl.get_uniform_location(&program, "u_color");

		gl.enable(GL::BLEND);

		Ok(Self {
			gl,
			canvas: canvas.clone(),
			program,
			position_buffer,
			size_buffer,
			opacity_buffer,
			position_loc,
			size_loc,
			opacity_loc,
			resolution_loc,
			pixel_ratio_loc,
			color_loc,
			viewport: Viewport::new(1.0, 1.0),
			pixel_ratio: 1.0,
		})
	}

	/// Whether the browser has taken the context away.
	pub fn is_context_lost(&self) -> bool {
		self.gl.is_context_lost()
	}

	fn upload(&self, buffer: &WebGlBuffer, loc: u32, components: i32, data: &[f32]) {
		self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
		let array = Float32Array::from(data);
		self.gl
			.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::DYNAMIC_DRAW);
		self.gl.enable_vertex_attrib_array(loc);
		self.gl
			.vertex_attrib_pointer_with_i32(loc, components, GL::FLOAT, false, 0, 0);
	}
}

impl PointSurface for GlSurface {
	fn resize(&mut self, viewport: Viewport, pixel_ratio: f64) {
		let device_w = (viewport.width * pixel_ratio).round().max(1.0) as u32;
		let device_h = (viewport.height * pixel_ratio).round().max(1.0) as u32;
		self.canvas.set_width(device_w);
		self.canvas.set_height(device_h);
		self.gl.viewport(0, 0, device_w as i32, device_h as i32);
		self.viewport = viewport;
		self.pixel_ratio = pixel_ratio;
	}

	fn set_blend(&mut self, blend: BlendMode) {
		match blend {
			BlendMode::Additive => self.gl.blend_func(GL::SRC_ALPHA, GL::ONE),
			BlendMode::Alpha => self.gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA),
		}
	}

	fn clear(&mut self, color: Color) {
		self.gl.clear_color(color.r, color.g, color.b, 1.0);
		self.gl.clear(GL::COLOR_BUFFER_BIT);
	}

	fn draw_points(&mut self, batch: &PointBatch, tint: Color) {
		self.upload(&self.position_buffer, self.position_loc, 2, &batch.positions);
		self.upload(&self.size_buffer, self.size_loc, 1, &batch.sizes);
		self.upload(&self.opacity_buffer, self.opacity_loc, 1, &batch.opacities);

		self.gl.uniform2f(
			self.resolution_loc.as_ref(),
			self.viewport.width as f32,
			self.viewport.height as f32,
		);
		self.gl
			.uniform1f(self.pixel_ratio_loc.as_ref(), self.pixel_ratio as f32);
		self.gl
			.uniform3fv_with_f32_array(self.color_loc.as_ref(), &tint.to_array());

		self.gl.draw_arrays(GL::POINTS, 0, batch.len() as i32);
	}
}

impl Drop for GlSurface {
	fn drop(&mut self) {
		self.gl.delete_buffer(Some(&self.position_buffer));
		self.gl.delete_buffer(Some(&self.size_buffer));
		self.gl.delete_buffer(Some(&self.opacity_buffer));
		self.gl.delete_program(Some(&self.program));
	}
}

fn compile_shader(gl: &GL, stage: &'static str, kind: u32, source: &str) -> Result<WebGlShader, RenderError> {
	let shader = gl
		.create_shader(kind)
		.ok_or(RenderError::ResourceAllocation("shader"))?;
	gl.shader_source(&shader, source);
	gl.compile_shader(&shader);
	let compiled = gl
		.get_shader_parameter(&shader, GL::COMPILE_STATUS)
		.as_bool()
		.unwrap_or(false);
	if !compiled {
		let log = gl.get_shader_info_log(&shader).unwrap_or_default();
		gl.delete_shader(Some(&shader));
		return Err(RenderError::ShaderCompile { stage, log });
	}
	Ok(shader)
}

fn link_program(gl: &GL, vertex: &str, fragment: &str) -> Result<WebGlProgram, RenderError> {
	let vert = compile_shader(gl, "vertex", GL::VERTEX_SHADER, vertex)?;
	let frag = compile_shader(gl, "fragment", GL::FRAGMENT_SHADER, fragment)?;
	let program = gl
		.create_program()
		.ok_or(RenderError::ResourceAllocation("program"))?;
	gl.attach_shader(&program, &vert);
	gl.attach_shader(&program, &frag);
	gl.link_program(&program);

	// Shaders are owned by the program once linked.
	gl.delete_shader(Some(&vert));
	gl.delete_shader(Some(&frag));

	let linked = gl
		.get_program_parameter(&program, GL::LINK_STATUS)
		.as_bool()
		.unwrap_or(false);
	if !linked {
		let log = gl.get_program_info_log(&program).unwrap_or_default();
		gl.delete_program(Some(&program));
		return Err(RenderError::ProgramLink(log));
	}
	Ok(program)
}

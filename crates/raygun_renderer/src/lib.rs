//! Raygun Renderer - CPU Whitted ray tracing
//!
//! Shades a [`raygun_core::Scene`] with ambient, diffuse and specular light,
//! soft shadows through transparent occluders, and recursive reflection and
//! refraction, spreading scanlines over a fixed pool of worker threads.

mod buffer;
mod renderer;
mod tracer;

pub use buffer::PixelBuffer;
pub use renderer::{render, render_pixel, RenderError, RenderOptions, RenderOutput, RenderResult};
pub use tracer::{refraction, RayStats, Tracer};

/// Re-export color and ray types from raygun_math
pub use raygun_math::{Color, HitRecord, Ray};

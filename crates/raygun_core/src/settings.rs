//! Render settings supplied alongside the scene geometry.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Image and quality settings for a render.
///
/// Every field has a default, so a collaborator can deserialize a partial
/// JSON object and get the remaining values from [`RenderSettings::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Maximum recursion depth; primary rays are depth 1
    pub trace_depth: u32,

    /// Sub-samples per pixel along each axis (`oversampling²` rays per pixel)
    pub oversampling: u32,

    /// Horizontal field of view in degrees
    pub vision_field: f64,

    /// Whether point lights cast shadows
    pub calc_shadow: bool,

    /// First row to render
    pub start_line: u32,

    /// One past the last row to render; `None` renders to the bottom
    pub end_line: Option<u32>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 320,
            height: 200,
            trace_depth: 3,
            oversampling: 1,
            vision_field: 60.0,
            calc_shadow: true,
            start_line: 0,
            end_line: None,
        }
    }
}

impl RenderSettings {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the maximum recursion depth.
    pub fn with_trace_depth(mut self, depth: u32) -> Self {
        self.trace_depth = depth;
        self
    }

    /// Set oversampling per axis.
    pub fn with_oversampling(mut self, oversampling: u32) -> Self {
        self.oversampling = oversampling;
        self
    }

    /// Set field of view in degrees.
    pub fn with_vision_field(mut self, degrees: f64) -> Self {
        self.vision_field = degrees;
        self
    }

    /// Enable or disable shadow rays.
    pub fn with_shadows(mut self, enabled: bool) -> Self {
        self.calc_shadow = enabled;
        self
    }

    /// Restrict rendering to rows `start..end`.
    pub fn with_render_slice(mut self, start: u32, end: u32) -> Self {
        self.start_line = start;
        self.end_line = Some(end);
        self
    }

    /// Rows that will be rendered.
    pub fn render_slice(&self) -> Range<u32> {
        self.start_line..self.end_line.unwrap_or(self.height)
    }

    /// Width of the sub-sample grid.
    pub fn grid_width(&self) -> u64 {
        u64::from(self.width) * u64::from(self.oversampling)
    }

    /// Height of the sub-sample grid.
    pub fn grid_height(&self) -> u64 {
        u64::from(self.height) * u64::from(self.oversampling)
    }

    /// Primary rays per pixel.
    pub fn samples_per_pixel(&self) -> u64 {
        u64::from(self.oversampling) * u64::from(self.oversampling)
    }
}

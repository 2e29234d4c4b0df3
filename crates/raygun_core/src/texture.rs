//! In-memory textures for textured planes.
//!
//! Decoding image files is left to the caller; a texture is built from an
//! already decoded [`image::DynamicImage`] or from raw RGBA pixels.

use image::DynamicImage;
use raygun_math::Color;
use thiserror::Error;

/// Errors that can occur when building a texture.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextureError {
    #[error("Texture '{name}' is empty ({width}x{height})")]
    Empty {
        name: String,
        width: u32,
        height: u32,
    },

    #[error("Texture '{name}' expects {expected} pixels, got {actual}")]
    SizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

pub type TextureResult<T> = Result<T, TextureError>;

/// A texture with pixel data.
///
/// Pixels are stored as RGBA floats in the 0-1 range, row-major, first row
/// at the top of the image.
#[derive(Clone, Debug)]
pub struct Texture {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    /// Pixel data, [R, G, B, A] per pixel
    pub pixels: Vec<[f32; 4]>,

    /// Name used in diagnostics (usually the source file)
    pub name: String,
}

impl Texture {
    /// Create a new texture from pixel data.
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<[f32; 4]>,
        name: impl Into<String>,
    ) -> TextureResult<Self> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty {
                name,
                width,
                height,
            });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TextureError::SizeMismatch {
                name,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            name,
        })
    }

    /// Convert a decoded image.
    pub fn from_image(img: &DynamicImage, name: impl Into<String>) -> TextureResult<Self> {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|p| {
                [
                    p[0] as f32 / 255.0,
                    p[1] as f32 / 255.0,
                    p[2] as f32 / 255.0,
                    p[3] as f32 / 255.0,
                ]
            })
            .collect();
        Self::new(width, height, pixels, name)
    }

    /// Sample the nearest texel at UV coordinates.
    ///
    /// `(0, 0)` is the bottom-left corner and `(1, 1)` the top-right;
    /// coordinates outside that square are clamped to the edge. Returns
    /// `None` for a fully transparent texel.
    pub fn sample(&self, u: f64, v: f64) -> Option<Color> {
        let x = (u.clamp(0.0, 1.0) * self.width as f64) as u32;
        let y = ((1.0 - v.clamp(0.0, 1.0)) * self.height as f64) as u32;

        let [r, g, b, a] = self.get_pixel(x.min(self.width - 1), y.min(self.height - 1));
        if a <= 0.0 {
            return None;
        }
        Some(Color::new(r as f64, g as f64, b as f64))
    }

    /// Get pixel at integer coordinates.
    fn get_pixel(&self, x: u32, y: u32) -> [f32; 4] {
        let idx = (y * self.width + x) as usize;
        self.pixels.get(idx).copied().unwrap_or([0.0, 0.0, 0.0, 0.0])
    }
}

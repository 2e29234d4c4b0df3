//! Output pixel storage.

use image::{Rgb, RgbImage};

/// An 8-bit RGB image in row-major order, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.index(x, y);
        self.pixels[i] = rgb;
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[[u8; 3]] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Mutable, disjoint rows, top first.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, [u8; 3]> {
        // chunks_mut panics on 0; an empty buffer has no rows anyway
        self.pixels.chunks_mut(self.width.max(1) as usize)
    }

    /// Tightly packed RGB bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy into an [`RgbImage`] for encoding.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| Rgb(self.get(x, y)))
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

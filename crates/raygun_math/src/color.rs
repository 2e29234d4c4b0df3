use std::ops::{Add, AddAssign, Div, Mul};

use bytemuck::{Pod, Zeroable};

use crate::Interval;

/// A linear RGB color.
///
/// Components are unbounded while shading; a value of `1.0` maps to full
/// intensity only when the color is converted with [`Color::to_rgb`].
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a new color.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a grey color with all three components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Convert to an 8-bit RGB pixel.
    ///
    /// Each component is scaled by 255, clamped to the display range and
    /// truncated.
    pub fn to_rgb(self) -> [u8; 3] {
        let display = Interval::new(0.0, 255.0);
        [
            display.clamp(self.r * 255.0) as u8,
            display.clamp(self.g * 255.0) as u8,
            display.clamp(self.b * 255.0) as u8,
        ]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// Component-wise modulation, used to tint light by a surface color.
impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, rhs: f64) -> Color {
        Color::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_arithmetic() {
        let a = Color::new(0.1, 0.2, 0.3);
        let b = Color::new(0.4, 0.5, 0.6);

        let sum = a + b;
        assert!((sum.r - 0.5).abs() < 1e-12);
        assert!((sum.g - 0.7).abs() < 1e-12);
        assert!((sum.b - 0.9).abs() < 1e-12);

        assert_eq!(Color::splat(2.0) * 0.5, Color::WHITE);
        assert_eq!(Color::splat(3.0) / 3.0, Color::WHITE);
        assert_eq!(a * Color::WHITE, a);
    }

    #[test]
    fn test_color_is_unclamped() {
        let hot = Color::splat(0.8) + Color::splat(0.8);
        assert!(hot.r > 1.0);
    }

    #[test]
    fn test_to_rgb_clamps() {
        assert_eq!(Color::BLACK.to_rgb(), [0, 0, 0]);
        assert_eq!(Color::WHITE.to_rgb(), [255, 255, 255]);
        assert_eq!(Color::new(2.0, -1.0, 0.5).to_rgb(), [255, 0, 127]);
    }

    #[test]
    fn test_cast_to_floats() {
        let colors = [Color::new(1.0, 2.0, 3.0), Color::new(4.0, 5.0, 6.0)];
        let floats: &[f64] = bytemuck::cast_slice(&colors);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}

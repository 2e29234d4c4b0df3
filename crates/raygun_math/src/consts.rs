//! Numeric constants shared by intersection and shading code.

/// Distance reported by a [`HitRecord`](crate::HitRecord) that has not recorded a hit yet.
pub const MAX_DIST: f64 = 1_999_999_999.0;

/// Offset applied along secondary ray directions so they do not
/// re-intersect the surface they start on.
pub const SMALL: f64 = 1e-6;

/// Tolerance for comparing points against surfaces (box faces, cylinder caps).
pub const EPS: f64 = 1e-6;

// Re-export glam for convenience
pub use glam::*;

// Raygun math types
mod color;
mod consts;
mod interval;
mod ray;
pub use color::Color;
pub use consts::{EPS, MAX_DIST, SMALL};
pub use interval::Interval;
pub use ray::{HitRecord, PrimitiveId, Ray};
